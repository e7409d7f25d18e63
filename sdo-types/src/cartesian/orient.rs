use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::cartesian::point::CartesianPoint2d;
use crate::contour::ClosedContour;

/// Direction in which the points of a closed contour go around its interior.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winding {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    CounterClockwise,
}

/// Planar measures of a closed contour.
pub trait CartesianClosedContour {
    /// Point type of the contour.
    type Point: CartesianPoint2d;

    /// Signed area of the contour. Positive for counterclockwise contours.
    fn area_signed(&self) -> <Self::Point as CartesianPoint2d>::Num
    where
        Self: Sized;

    /// Winding of the contour. Degenerate contours with zero area are considered clockwise.
    fn winding(&self) -> Winding
    where
        Self: Sized;
}

impl<P, T> CartesianClosedContour for T
where
    P: CartesianPoint2d,
    T: ClosedContour<Point = P>,
{
    type Point = P;

    fn area_signed(&self) -> P::Num
    where
        Self: Sized,
    {
        let mut iter = self.iter_points();
        let mut prev = match iter.next() {
            Some(p) => p,
            None => return P::Num::zero(),
        };

        let mut aggr = P::Num::zero();
        for p in iter {
            aggr = aggr + prev.x() * p.y() - p.x() * prev.y();
            prev = p;
        }

        aggr / (P::Num::one() + P::Num::one())
    }

    fn winding(&self) -> Winding
    where
        Self: Sized,
    {
        if self.area_signed() <= P::Num::zero() {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::cartesian::Point2d;
    use crate::impls::LinearRing;

    fn square(ccw: bool) -> LinearRing<Point2d> {
        let mut points = vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(2.0, 0.0),
            Point2d::new(2.0, 2.0),
            Point2d::new(0.0, 2.0),
            Point2d::new(0.0, 0.0),
        ];
        if !ccw {
            points.reverse();
        }
        LinearRing::new(points).expect("valid ring")
    }

    #[test]
    fn area_and_winding() {
        assert_abs_diff_eq!(square(true).area_signed(), 4.0);
        assert_eq!(square(true).winding(), Winding::CounterClockwise);

        assert_abs_diff_eq!(square(false).area_signed(), -4.0);
        assert_eq!(square(false).winding(), Winding::Clockwise);
    }

    #[test]
    fn empty_ring_has_no_area() {
        assert_eq!(LinearRing::<Point2d>::empty().area_signed(), 0.0);
    }
}
