//! Errors of the codec.

use sdo_types::error::GeometryError;
use thiserror::Error;

use crate::type_code::GeometryKind;

/// Error returned when a record cannot be decoded or a geometry cannot be encoded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SdoError {
    /// Type code with an unknown kind or a dimension outside of 2..=4.
    #[error("invalid geometry type code: {0}")]
    InvalidTypeCode(i32),

    /// Coordinates carry a measure ordinate at the given position.
    #[error("linear referencing measures are not supported (measure position {0})")]
    UnsupportedMeasure(u8),

    /// Dimension the object model has no point type for.
    #[error("geometries with {0} dimensions are not supported")]
    UnsupportedDimension(u8),

    /// Solids, multisolids and unknown kinds with content.
    #[error("geometry kind {0:?} is not supported")]
    UnsupportedGeometryKind(GeometryKind),

    /// Circular arc or circle element.
    #[error("element at offset {offset} uses curve interpretation {interpretation}")]
    UnsupportedCurve {
        /// Offset of the element in the ordinate array.
        offset: i32,
        /// Interpretation code of the element.
        interpretation: i32,
    },

    /// Element table that cannot be grouped into geometry parts.
    #[error("malformed element table: {0}")]
    MalformedElementTable(String),

    /// Element offsets that do not fit the ordinate array.
    #[error("ordinate range error: {0}")]
    OrdinateRangeError(String),

    /// Number of parts does not match the geometry kind.
    #[error("expected {expected} part(s) for {kind:?}, but element table describes {found}")]
    ElementCountMismatch {
        /// Kind from the type code.
        kind: GeometryKind,
        /// Number of parts the kind allows.
        expected: usize,
        /// Number of parts found in the element table.
        found: usize,
    },

    /// Polygon passed to the rectangle writer is not an axis-aligned rectangle.
    #[error("polygon is not an axis-aligned rectangle")]
    NonRectangularPolygonForRectangleEncoding,

    /// Decoded coordinates do not form a valid geometry.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryError),
}
