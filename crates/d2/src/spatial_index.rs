//! Per-sheet spatial indexing using an R*-tree.
//!
//! Placed panels are stored as rectangles already grown by the part spacing,
//! so a candidate collides with a placed panel exactly when the two grown
//! rectangles overlap. The tree answers the broad-phase envelope query; the
//! exact strict-overlap test runs on the returned entries only.

use fingerbox_core::Rect;
use rstar::{RTree, RTreeObject, AABB};

/// An entry in the spatial index representing a placed panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialEntry {
    /// Index of the panel on its sheet
    pub index: usize,
    /// Occupied rectangle (min_x, min_y, max_x, max_y), spacing included
    pub aabb: [f64; 4],
}

impl SpatialEntry {
    /// Creates a new spatial entry.
    pub fn new(index: usize, rect: Rect) -> Self {
        Self {
            index,
            aabb: [rect.min_x, rect.min_y, rect.max_x, rect.max_y],
        }
    }

    /// The entry's rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.aabb[0], self.aabb[1], self.aabb[2], self.aabb[3])
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.aabb[0], self.aabb[1]], [self.aabb[2], self.aabb[3]])
    }
}

/// R*-tree over the occupied rectangles of one sheet.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
}

impl SpatialIndex {
    /// Creates a new empty spatial index.
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Creates a spatial index with the given entries.
    pub fn with_entries(entries: Vec<SpatialEntry>) -> Self {
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Inserts an occupied rectangle.
    pub fn insert(&mut self, index: usize, rect: Rect) {
        self.tree.insert(SpatialEntry::new(index, rect));
    }

    /// Returns the number of entries in the index.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Returns true if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Clears all entries from the index.
    pub fn clear(&mut self) {
        self.tree = RTree::new();
    }

    /// Finds all entries whose envelopes touch or overlap `rect`.
    ///
    /// This is the broad phase; touching entries are included.
    pub fn query(&self, rect: &Rect) -> Vec<&SpatialEntry> {
        let envelope = AABB::from_corners([rect.min_x, rect.min_y], [rect.max_x, rect.max_y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .collect()
    }

    /// Returns true if `rect` strictly overlaps any stored rectangle.
    pub fn collides(&self, rect: &Rect) -> bool {
        self.query(rect)
            .iter()
            .any(|entry| entry.rect().intersects(rect))
    }

    /// Returns an iterator over all entries in the index.
    pub fn iter(&self) -> impl Iterator<Item = &SpatialEntry> {
        self.tree.iter()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
