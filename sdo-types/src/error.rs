//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A linear ring has fewer points than a closed ring requires.
    #[error("linear ring must have at least 4 points, but has {0}")]
    RingTooShort(usize),
    /// The first and the last points of a linear ring differ.
    #[error("points of a linear ring do not form a closed line")]
    RingNotClosed,
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
}
