//! Implementations of geometry traits.

mod contour;
mod multi_line_string;
mod multi_point;
mod multi_polygon;
mod polygon;

pub use contour::{LineString, LinearRing};
pub use multi_line_string::MultiLineString;
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use polygon::Polygon;
