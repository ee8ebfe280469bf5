//! Edge profiles.
//!
//! A profile describes how deep the outline is cut back from the nominal
//! panel edge at every point along that edge. Finger joints alternate between
//! depth 0 (flush, full material) and the joint depth; a half-lap notch
//! overlays a deeper interval in the middle of an edge.

use fingerbox_core::FingerLayout;

/// Coordinates closer than this are merged when overlaying intervals.
const EDGE_EPSILON: f64 = 1e-9;

/// Which segments of a finger layout are notched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    /// Even-indexed segments are notched; odd ones stay flush.
    Even,
    /// Odd-indexed segments are notched; even ones stay flush.
    Odd,
}

impl Parity {
    /// The parity used by the mating panel.
    pub fn opposite(&self) -> Self {
        match self {
            Parity::Even => Parity::Odd,
            Parity::Odd => Parity::Even,
        }
    }

    fn matches(&self, index: usize) -> bool {
        match self {
            Parity::Even => index % 2 == 0,
            Parity::Odd => index % 2 == 1,
        }
    }
}

/// A stretch of an edge cut back to a constant depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Start coordinate along the edge.
    pub start: f64,
    /// End coordinate along the edge.
    pub end: f64,
    /// Depth cut back from the nominal edge (0 = flush).
    pub depth: f64,
}

impl Interval {
    /// Returns true if the interval is full material.
    pub fn is_flush(&self) -> bool {
        self.depth == 0.0
    }

    /// Length of the interval.
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    fn contains(&self, u: f64) -> bool {
        u >= self.start && u <= self.end
    }
}

/// Depth profile along one panel edge.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeProfile {
    span: f64,
    intervals: Vec<Interval>,
}

impl EdgeProfile {
    /// A straight edge with no joint.
    pub fn plain(span: f64) -> Self {
        Self {
            span,
            intervals: vec![Interval {
                start: 0.0,
                end: span,
                depth: 0.0,
            }],
        }
    }

    /// A finger-jointed edge notching the segments selected by `notched`.
    pub fn fingers(layout: &FingerLayout, notched: Parity, depth: f64) -> Self {
        let intervals = layout
            .segments()
            .into_iter()
            .map(|segment| Interval {
                start: segment.start,
                end: segment.end,
                depth: if notched.matches(segment.index) {
                    depth
                } else {
                    0.0
                },
            })
            .collect();
        Self {
            span: layout.span,
            intervals,
        }
        .merged()
    }

    /// Overlays a notch of `width` centred on `center`, cut to `depth`.
    ///
    /// Where the notch overlaps existing intervals the deeper cut wins.
    pub fn with_notch(self, center: f64, width: f64, depth: f64) -> Self {
        let notch_start = (center - width / 2.0).max(0.0);
        let notch_end = (center + width / 2.0).min(self.span);
        if notch_end - notch_start <= EDGE_EPSILON {
            return self;
        }
        let notch = Interval {
            start: notch_start,
            end: notch_end,
            depth,
        };

        let mut breaks: Vec<f64> = self
            .intervals
            .iter()
            .flat_map(|i| [i.start, i.end])
            .chain([notch.start, notch.end])
            .collect();
        breaks.sort_by(|a, b| a.total_cmp(b));
        breaks.dedup_by(|a, b| (*a - *b).abs() <= EDGE_EPSILON);

        let mut intervals = Vec::with_capacity(breaks.len());
        for pair in breaks.windows(2) {
            let (start, end) = (pair[0], pair[1]);
            let mid = (start + end) / 2.0;
            let base = self
                .intervals
                .iter()
                .find(|i| i.contains(mid))
                .map_or(0.0, |i| i.depth);
            let depth = if notch.contains(mid) {
                base.max(notch.depth)
            } else {
                base
            };
            intervals.push(Interval { start, end, depth });
        }

        Self {
            span: self.span,
            intervals,
        }
        .merged()
    }

    /// Edge length.
    pub fn span(&self) -> f64 {
        self.span
    }

    /// Intervals in order along the edge.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Depth at the start of the edge.
    pub fn first_depth(&self) -> f64 {
        self.intervals.first().map_or(0.0, |i| i.depth)
    }

    /// Depth at the end of the edge.
    pub fn last_depth(&self) -> f64 {
        self.intervals.last().map_or(0.0, |i| i.depth)
    }

    /// Depth at coordinate `u` along the edge.
    pub fn depth_at(&self, u: f64) -> f64 {
        self.intervals
            .iter()
            .find(|i| u >= i.start && u < i.end)
            .or(self.intervals.last())
            .map_or(0.0, |i| i.depth)
    }

    /// Flush intervals strictly inside the edge (not touching either end).
    ///
    /// These are the through-tabs of a divider edge.
    pub fn inner_flush_intervals(&self) -> impl Iterator<Item = &Interval> {
        let span = self.span;
        self.intervals.iter().filter(move |i| {
            i.is_flush() && i.start > EDGE_EPSILON && i.end < span - EDGE_EPSILON
        })
    }

    /// Narrowest interval length.
    pub fn min_interval(&self) -> f64 {
        self.intervals
            .iter()
            .map(Interval::length)
            .fold(f64::INFINITY, f64::min)
    }

    fn merged(self) -> Self {
        let mut intervals: Vec<Interval> = Vec::with_capacity(self.intervals.len());
        for interval in self.intervals {
            match intervals.last_mut() {
                Some(last) if last.depth == interval.depth => last.end = interval.end,
                _ => intervals.push(interval),
            }
        }
        Self {
            span: self.span,
            intervals,
        }
    }
}
