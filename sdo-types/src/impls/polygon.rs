use serde::{Deserialize, Serialize};

use crate::impls::contour::LinearRing;

/// Simple implementation of the [`Polygon`](crate::Polygon) trait.
///
/// A polygon with an empty exterior ring is empty, whatever its interior rings are.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Polygon<P> {
    /// Outer contour.
    pub exterior: LinearRing<P>,
    /// Inner contours.
    pub interiors: Vec<LinearRing<P>>,
}

impl<P> Default for Polygon<P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<P> Polygon<P> {
    /// Creates a new polygon.
    pub fn new(exterior: LinearRing<P>, interiors: Vec<LinearRing<P>>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// Creates an empty polygon.
    pub fn empty() -> Self {
        Self {
            exterior: LinearRing::empty(),
            interiors: vec![],
        }
    }

    /// Returns true if the polygon has no exterior ring. Holes without an exterior ring do not
    /// bound any area.
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }
}

impl<P> crate::polygon::Polygon for Polygon<P> {
    type Contour = LinearRing<P>;

    fn outer_contour(&self) -> &Self::Contour {
        &self.exterior
    }

    fn inner_contours(&self) -> impl Iterator<Item = &'_ Self::Contour> {
        self.interiors.iter()
    }
}

impl<P> From<LinearRing<P>> for Polygon<P> {
    fn from(value: LinearRing<P>) -> Self {
        Self {
            exterior: value,
            interiors: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;

    fn triangle() -> LinearRing<Point2d> {
        LinearRing::new(vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 0.0),
            Point2d::new(0.0, 1.0),
            Point2d::new(0.0, 0.0),
        ])
        .expect("valid ring")
    }

    #[test]
    fn empty_polygons() {
        assert!(Polygon::<Point2d>::empty().is_empty());
        assert!(Polygon::<Point2d>::default().is_empty());
        assert!(Polygon::new(LinearRing::empty(), vec![triangle()]).is_empty());
        assert!(!Polygon::from(triangle()).is_empty());
    }
}
