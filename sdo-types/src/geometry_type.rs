//! See documentation for [`GeometryType`].
use serde::{Deserialize, Serialize};

/// Concrete variant of a [`Geom`](crate::Geom).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum GeometryType {
    /// Single point.
    Point,
    /// Line string.
    LineString,
    /// Polygon with optional holes.
    Polygon,
    /// Set of points.
    MultiPoint,
    /// Set of line strings.
    MultiLineString,
    /// Set of polygons.
    MultiPolygon,
    /// Heterogeneous set of geometries.
    GeometryCollection,
}
