use serde::{Deserialize, Serialize};

use crate::cartesian::CartesianPoint2d;
use crate::error::GeometryError;

/// Simple open or closed line, an implementation of [`crate::Contour`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LineString<Point> {
    points: Vec<Point>,
}

impl<P> Default for LineString<P> {
    fn default() -> Self {
        Self::new(vec![])
    }
}

impl<Point> LineString<Point> {
    /// Creates a new line.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Points of the line.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the line returning its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Returns true if the line has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<P> From<Vec<P>> for LineString<P> {
    fn from(value: Vec<P>) -> Self {
        Self::new(value)
    }
}

impl<P: CartesianPoint2d> crate::contour::Contour for LineString<P> {
    type Point = P;

    fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first.equal(last),
            _ => false,
        }
    }

    fn iter_points(&self) -> impl Iterator<Item = &P> {
        self.points.iter()
    }
}

/// Closed line used as a polygon ring, an implementation of [`crate::ClosedContour`].
///
/// A ring is either empty, or has at least 4 points with the last point repeating the first one
/// in x and y.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LinearRing<Point> {
    points: Vec<Point>,
}

impl<P> Default for LinearRing<P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<Point> LinearRing<Point> {
    /// Minimum number of points in a non-empty ring.
    pub const MIN_POINTS: usize = 4;

    /// Creates a new ring, checking that the points form a closed line.
    pub fn new(points: Vec<Point>) -> Result<Self, GeometryError>
    where
        Point: CartesianPoint2d,
    {
        if points.is_empty() {
            return Ok(Self { points });
        }

        if points.len() < Self::MIN_POINTS {
            return Err(GeometryError::RingTooShort(points.len()));
        }

        match (points.first(), points.last()) {
            (Some(first), Some(last)) if first.equal(last) => Ok(Self { points }),
            _ => Err(GeometryError::RingNotClosed),
        }
    }

    /// Creates an empty ring.
    pub fn empty() -> Self {
        Self { points: vec![] }
    }

    /// Points of the ring, including the closing point.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the ring returning its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Returns true if the ring has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the same ring going in the opposite direction.
    pub fn reversed(&self) -> Self
    where
        Point: Clone,
    {
        Self {
            points: self.points.iter().rev().cloned().collect(),
        }
    }
}

impl<P> crate::contour::ClosedContour for LinearRing<P> {
    type Point = P;

    fn iter_points(&self) -> impl Iterator<Item = &'_ P> {
        self.points.iter()
    }
}

impl<P> From<LinearRing<P>> for LineString<P> {
    fn from(value: LinearRing<P>) -> Self {
        Self {
            points: value.points,
        }
    }
}
