//! Vector path commands.
//!
//! Paths are closed polygons expressed as a `MoveTo`, a run of `LineTo`s that
//! returns to the start point, and a final `Close`. Export collaborators map
//! the commands one-to-one onto `M`, `L` and `Z`.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Distance under which two path points are considered identical.
pub const POINT_EPSILON: f64 = 1e-9;

/// A single vector path command.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PathCommand {
    /// Starts the path at a point.
    MoveTo {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },
    /// Straight line to a point.
    LineTo {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },
    /// Closes the path.
    Close,
}

impl PathCommand {
    /// Returns the point of a `MoveTo` or `LineTo`.
    pub fn point(&self) -> Option<(f64, f64)> {
        match *self {
            PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => Some((x, y)),
            PathCommand::Close => None,
        }
    }

    /// Applies `f` to the point of a `MoveTo` or `LineTo`; `Close` is unchanged.
    pub fn map_point(self, f: impl FnOnce((f64, f64)) -> (f64, f64)) -> Self {
        match self {
            PathCommand::MoveTo { x, y } => {
                let (x, y) = f((x, y));
                PathCommand::MoveTo { x, y }
            }
            PathCommand::LineTo { x, y } => {
                let (x, y) = f((x, y));
                PathCommand::LineTo { x, y }
            }
            PathCommand::Close => PathCommand::Close,
        }
    }
}

/// A closed polygon path.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Wraps raw commands without validating them.
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Builds a closed path through `points`.
    ///
    /// Consecutive duplicate points are dropped and a closing line back to the
    /// first point is appended when the last point differs from it.
    pub fn polygon(points: &[(f64, f64)]) -> Result<Self> {
        let mut deduped: Vec<(f64, f64)> = Vec::with_capacity(points.len() + 1);
        for &p in points {
            if deduped.last().map_or(true, |&last| !same_point(last, p)) {
                deduped.push(p);
            }
        }
        if let (Some(&first), Some(&last)) = (deduped.first(), deduped.last()) {
            if deduped.len() > 1 && same_point(first, last) {
                deduped.pop();
            }
        }
        if deduped.len() < 3 {
            return Err(Error::MalformedPath(format!(
                "a closed path needs at least 3 distinct points, got {}",
                deduped.len()
            )));
        }

        let (x0, y0) = deduped[0];
        let mut commands = Vec::with_capacity(deduped.len() + 2);
        commands.push(PathCommand::MoveTo { x: x0, y: y0 });
        for &(x, y) in &deduped[1..] {
            commands.push(PathCommand::LineTo { x, y });
        }
        commands.push(PathCommand::LineTo { x: x0, y: y0 });
        commands.push(PathCommand::Close);
        Ok(Self { commands })
    }

    /// Builds the counter-clockwise path of an axis-aligned rectangle.
    pub fn rectangle(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self> {
        Self::polygon(&[
            (min_x, min_y),
            (max_x, min_y),
            (max_x, max_y),
            (min_x, max_y),
        ])
    }

    /// Returns the commands.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Consumes the path, returning its commands.
    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if the path has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Checks the structural invariants of a closed path.
    ///
    /// Exactly one `MoveTo` (first), exactly one `Close` (last), at least
    /// three `LineTo`s, and the last `LineTo` returns to the start point.
    pub fn validate(&self) -> Result<()> {
        let start = match self.commands.first() {
            Some(PathCommand::MoveTo { x, y }) => (*x, *y),
            Some(_) => {
                return Err(Error::MalformedPath(
                    "path does not start with MoveTo".into(),
                ))
            }
            None => return Err(Error::MalformedPath("path is empty".into())),
        };
        if self.commands.last() != Some(&PathCommand::Close) {
            return Err(Error::MalformedPath("path does not end with Close".into()));
        }

        let body = &self.commands[1..self.commands.len() - 1];
        let mut last = start;
        for (i, command) in body.iter().enumerate() {
            match *command {
                PathCommand::LineTo { x, y } => last = (x, y),
                PathCommand::MoveTo { .. } => {
                    return Err(Error::MalformedPath(format!(
                        "unexpected MoveTo at command {}",
                        i + 1
                    )))
                }
                PathCommand::Close => {
                    return Err(Error::MalformedPath(format!(
                        "unexpected Close at command {}",
                        i + 1
                    )))
                }
            }
        }
        if body.len() < 3 {
            return Err(Error::MalformedPath(format!(
                "path has only {} LineTo commands",
                body.len()
            )));
        }
        if !same_point(last, start) {
            return Err(Error::MalformedPath(format!(
                "path ends at ({}, {}) instead of returning to ({}, {})",
                last.0, last.1, start.0, start.1
            )));
        }
        Ok(())
    }

    /// Returns the distinct polygon vertices (start point plus line end points,
    /// without the closing duplicate and without consecutive duplicates).
    ///
    /// Fails with [`Error::MalformedPath`] if the path does not start with
    /// `MoveTo`, does not end with `Close`, or has commands after `Close`.
    pub fn vertices(&self) -> Result<Vec<(f64, f64)>> {
        let mut commands = self.commands.iter();
        let start = match commands.next() {
            Some(PathCommand::MoveTo { x, y }) => (*x, *y),
            _ => {
                return Err(Error::MalformedPath(
                    "path does not start with MoveTo".into(),
                ))
            }
        };

        let mut vertices = vec![start];
        let mut closed = false;
        for command in commands {
            if closed {
                return Err(Error::MalformedPath("commands after Close".into()));
            }
            match *command {
                PathCommand::LineTo { x, y } => {
                    let p = (x, y);
                    if vertices.last().map_or(true, |&last| !same_point(last, p)) {
                        vertices.push(p);
                    }
                }
                PathCommand::MoveTo { .. } => {
                    return Err(Error::MalformedPath("unmatched MoveTo".into()))
                }
                PathCommand::Close => closed = true,
            }
        }
        if !closed {
            return Err(Error::MalformedPath("path does not end with Close".into()));
        }

        if vertices.len() > 1 && same_point(vertices[0], vertices[vertices.len() - 1]) {
            vertices.pop();
        }
        Ok(vertices)
    }

    /// Applies `f` to every point, leaving `Close` unchanged.
    pub fn map_points(&self, f: impl Fn((f64, f64)) -> (f64, f64)) -> Self {
        Self {
            commands: self
                .commands
                .iter()
                .map(|command| command.map_point(&f))
                .collect(),
        }
    }

    /// Translates every point by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        self.map_points(|(x, y)| (x + dx, y + dy))
    }

    /// Returns the bounding box as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.commands
            .iter()
            .filter_map(PathCommand::point)
            .fold(None, |acc, (x, y)| match acc {
                None => Some((x, y, x, y)),
                Some((min_x, min_y, max_x, max_y)) => {
                    Some((min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y)))
                }
            })
    }
}

impl From<Path> for Vec<PathCommand> {
    fn from(path: Path) -> Self {
        path.commands
    }
}

/// Returns true if two points coincide within [`POINT_EPSILON`].
pub fn same_point(a: (f64, f64), b: (f64, f64)) -> bool {
    (a.0 - b.0).abs() <= POINT_EPSILON && (a.1 - b.1).abs() <= POINT_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Path {
        Path::rectangle(0.0, 0.0, 10.0, 10.0).unwrap()
    }

    #[test]
    fn test_rectangle_path_is_valid() {
        let path = square();
        assert!(path.validate().is_ok());
        assert_eq!(path.len(), 6);
        assert_eq!(path.commands()[0], PathCommand::MoveTo { x: 0.0, y: 0.0 });
        assert_eq!(path.commands()[4], PathCommand::LineTo { x: 0.0, y: 0.0 });
        assert_eq!(path.commands()[5], PathCommand::Close);
    }

    #[test]
    fn test_polygon_drops_duplicates() {
        let path = Path::polygon(&[
            (0.0, 0.0),
            (5.0, 0.0),
            (5.0, 0.0),
            (5.0, 5.0),
            (0.0, 5.0),
            (0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(path.vertices().unwrap().len(), 4);
        assert!(path.validate().is_ok());
    }

    #[test]
    fn test_polygon_too_few_points() {
        let err = Path::polygon(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0)]).unwrap_err();
        assert!(matches!(err, Error::MalformedPath(_)));
    }

    #[test]
    fn test_validate_rejects_missing_move_to() {
        let path = Path::from_commands(vec![
            PathCommand::LineTo { x: 1.0, y: 0.0 },
            PathCommand::LineTo { x: 1.0, y: 1.0 },
            PathCommand::Close,
        ]);
        assert!(matches!(path.validate(), Err(Error::MalformedPath(_))));
        assert!(path.vertices().is_err());
    }

    #[test]
    fn test_validate_rejects_open_path() {
        let mut commands = square().into_commands();
        commands.pop();
        let path = Path::from_commands(commands);
        assert!(path.validate().is_err());
        assert!(path.vertices().is_err());
    }

    #[test]
    fn test_validate_rejects_unreturned_path() {
        let path = Path::from_commands(vec![
            PathCommand::MoveTo { x: 0.0, y: 0.0 },
            PathCommand::LineTo { x: 1.0, y: 0.0 },
            PathCommand::LineTo { x: 1.0, y: 1.0 },
            PathCommand::LineTo { x: 0.0, y: 1.0 },
            PathCommand::Close,
        ]);
        assert!(path.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_second_move_to() {
        let path = Path::from_commands(vec![
            PathCommand::MoveTo { x: 0.0, y: 0.0 },
            PathCommand::LineTo { x: 1.0, y: 0.0 },
            PathCommand::MoveTo { x: 1.0, y: 1.0 },
            PathCommand::LineTo { x: 0.0, y: 1.0 },
            PathCommand::LineTo { x: 0.0, y: 0.0 },
            PathCommand::Close,
        ]);
        assert!(path.validate().is_err());
        assert!(path.vertices().is_err());
    }

    #[test]
    fn test_map_points_keeps_close() {
        let moved = square().translate(5.0, -2.0);
        assert!(moved.validate().is_ok());
        assert_eq!(moved.commands()[0], PathCommand::MoveTo { x: 5.0, y: -2.0 });
        assert_eq!(moved.commands().last(), Some(&PathCommand::Close));
    }

    #[test]
    fn test_bounds() {
        let path = Path::rectangle(2.0, 3.0, 7.0, 11.0).unwrap();
        assert_eq!(path.bounds(), Some((2.0, 3.0, 7.0, 11.0)));
        assert_eq!(Path::default().bounds(), None);
    }
}
