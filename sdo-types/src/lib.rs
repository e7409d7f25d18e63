//! Vector geometry object model: points, lines, polygons, their multi-part variants and
//! heterogeneous collections.
//!
//! Concrete geometries are generic over the point type, so the dimension of a geometry is part of
//! its type: `Geom<Point2d>` is always 2d and `Geom<Point3d>` is always 3d. The [`Geom`] enum is
//! a tagged union over all concrete geometry types.
//!
//! The crate also provides trait views ([`Contour`], [`Polygon`], [`MultiPoint`],
//! [`MultiContour`], [`MultiPolygon`]) that allow algorithms to work with geometries without
//! knowing their concrete types.

pub mod cartesian;
pub mod error;
pub mod geometry_type;
pub mod impls;

mod contour;
pub use contour::{ClosedContour, Contour};

mod geometry;
pub use geometry::{Geom, GeometryCollection};

mod multi_contour;
pub use multi_contour::MultiContour;

mod multi_point;
pub use multi_point::MultiPoint;

mod multi_polygon;
pub use multi_polygon::MultiPolygon;

mod polygon;
pub use polygon::Polygon;

#[cfg(feature = "geo-types")]
mod geo_types;
