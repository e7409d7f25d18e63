use num_traits::Num;
use serde::{Deserialize, Serialize};

use crate::cartesian::point::CartesianPoint2d;

/// Axis-aligned rectangle in cartesian coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    /// Minimum x coordinate.
    pub x_min: N,
    /// Minimum y coordinate.
    pub y_min: N,
    /// Maximum x coordinate.
    pub x_max: N,
    /// Maximum y coordinate.
    pub y_max: N,
}

impl<N: Num + Copy + PartialOrd> Rect<N> {
    /// Creates a new rectangle.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> N {
        self.x_max - self.x_min
    }

    /// Height of the rectangle.
    pub fn height(&self) -> N {
        self.y_max - self.y_min
    }

    /// Returns true if both width and height are positive.
    pub fn has_area(&self) -> bool {
        self.width() > N::zero() && self.height() > N::zero()
    }

    /// Envelope of the given points. Returns `None` if the iterator is empty.
    pub fn from_points<'a, P: CartesianPoint2d<Num = N> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = points.next()?;
        let mut x_min = first.x();
        let mut y_min = first.y();
        let mut x_max = first.x();
        let mut y_max = first.y();

        for p in points {
            if x_min > p.x() {
                x_min = p.x();
            }
            if y_min > p.y() {
                y_min = p.y();
            }
            if x_max < p.x() {
                x_max = p.x();
            }
            if y_max < p.y() {
                y_max = p.y();
            }
        }

        Some(Self {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Returns true if the point coincides with one of the four corners of the rectangle.
    pub fn is_corner(&self, point: &impl CartesianPoint2d<Num = N>) -> bool {
        (point.x() == self.x_min || point.x() == self.x_max)
            && (point.y() == self.y_min || point.y() == self.y_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;

    #[test]
    fn from_points() {
        let points = [
            Point2d::new(3.0, -1.0),
            Point2d::new(-2.0, 4.0),
            Point2d::new(0.0, 0.0),
        ];
        let rect = Rect::from_points(points.iter()).expect("no points");
        assert_eq!(rect, Rect::new(-2.0, -1.0, 3.0, 4.0));
        assert_eq!(rect.width(), 5.0);
        assert_eq!(rect.height(), 5.0);
        assert!(rect.is_corner(&Point2d::new(3.0, 4.0)));
        assert!(!rect.is_corner(&Point2d::new(0.0, 0.0)));

        assert!(Rect::<f64>::from_points(std::iter::empty::<&Point2d>()).is_none());
    }

    #[test]
    fn degenerate_rect_has_no_area() {
        assert!(!Rect::new(0.0, 0.0, 0.0, 10.0).has_area());
        assert!(Rect::new(0.0, 0.0, 1.0, 10.0).has_area());
    }
}
