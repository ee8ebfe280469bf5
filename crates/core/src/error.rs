//! Error types for the cutting layout engine.

use thiserror::Error;

/// Result alias used throughout the fingerbox crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by layout, path and packing operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A span, finger width, stock size or other dimension is not usable.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// A panel does not fit on an empty stock sheet in either orientation.
    ///
    /// Packing never returns this; it is collected in `PackingResult::warnings`.
    #[error("panel '{name}' ({width} x {height}) does not fit on any sheet")]
    UnfittablePanel {
        /// Panel name.
        name: String,
        /// Original panel width.
        width: f64,
        /// Original panel height.
        height: f64,
    },

    /// A path is missing its leading MoveTo or trailing Close, or is otherwise inconsistent.
    #[error("malformed path: {0}")]
    MalformedPath(String),

    /// A panel name that does not correspond to any known panel kind.
    #[error("unknown panel: {0}")]
    UnknownPanel(String),
}

impl Error {
    /// Shorthand for an [`Error::InvalidDimension`] with a formatted message.
    pub fn invalid_dimension(msg: impl Into<String>) -> Self {
        Self::InvalidDimension(msg.into())
    }

    /// Returns true if this error is a non-fatal packing warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::UnfittablePanel { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::invalid_dimension("span must be positive, got -1");
        assert_eq!(
            err.to_string(),
            "invalid dimension: span must be positive, got -1"
        );

        let err = Error::UnfittablePanel {
            name: "lid_top".into(),
            width: 120.0,
            height: 80.0,
        };
        assert_eq!(
            err.to_string(),
            "panel 'lid_top' (120 x 80) does not fit on any sheet"
        );
    }

    #[test]
    fn test_is_warning() {
        let warning = Error::UnfittablePanel {
            name: "p".into(),
            width: 1.0,
            height: 1.0,
        };
        assert!(warning.is_warning());
        assert!(!Error::MalformedPath("empty".into()).is_warning());
    }
}
