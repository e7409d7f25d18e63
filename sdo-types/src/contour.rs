//! Contour is a sequence of points.
//!
//! Contours can be:
//! * **open** - the first and the last points are not connected, e.g. a road.
//! * **closed** - the last point repeats the first one, e.g. a shoreline or a polygon ring.
//!
//! Both are represented by the [`Contour`] trait. [`ClosedContour`] is a separate trait for
//! situations where only a closed contour makes sense, like the rings of a
//! [`Polygon`](super::Polygon). All closed contours implement `Contour` automatically.
//!
//! Contours follow the OGC `LineString` convention: a closed contour stores its closing point,
//! so [`Contour::iter_points`] of a ring with 4 distinct vertices yields 5 points.

/// Sequence of points. See module level documentation for details.
pub trait Contour {
    /// Type of the points the contour is consisted of.
    type Point;

    /// Whether the contour is closed.
    fn is_closed(&self) -> bool;

    /// Iterate over the stored points of the contour, including the closing point of closed
    /// contours.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;

    /// Number of stored points.
    fn point_count(&self) -> usize {
        self.iter_points().count()
    }
}

/// A closed contour. See module documentation for details.
pub trait ClosedContour {
    /// Type of the points the contour is consisted of.
    type Point;

    /// Iterate over the points of the ring. The last point is the same as the first one.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;
}

impl<P, T: ClosedContour<Point = P>> Contour for T {
    type Point = P;

    fn is_closed(&self) -> bool {
        true
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        ClosedContour::iter_points(self)
    }
}
