//! Types and functions on geometries in cartesian coordinates.

mod orient;
mod point;
mod rect;

pub use orient::{CartesianClosedContour, Winding};
pub use point::{
    CartesianPoint2d, CartesianPoint3d, NewCartesianPoint2d, NewCartesianPoint3d, Point2, Point2d,
    Point3, Point3d,
};
pub use rect::Rect;
