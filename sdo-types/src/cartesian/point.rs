use num_traits::Num;
use serde::{Deserialize, Serialize};

/// A point in 2-dimensional cartesian coordinate space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point2<Num = f64> {
    x: Num,
    y: Num,
}

impl<Num> Point2<Num> {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }

    /// Returns coordinates of the point as an array of `Num`.
    pub fn coords(&self) -> [Num; 2]
    where
        Num: Copy,
    {
        [self.x, self.y]
    }
}

/// A point in 3-dimensional cartesian coordinate space.
///
/// The `z` coordinate may hold a "no value" marker (`NaN` for floats) when the point came from a
/// source that did not store the third ordinate.
#[derive(Debug, Default, Copy, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point3<Num = f64> {
    x: Num,
    y: Num,
    z: Num,
}

impl<Num> Point3<Num> {
    /// Creates a new instance of the point by its coordinates.
    pub const fn new(x: Num, y: Num, z: Num) -> Self {
        Self { x, y, z }
    }

    /// Returns coordinates of the point as an array of `Num`.
    pub fn coords(&self) -> [Num; 3]
    where
        Num: Copy,
    {
        [self.x, self.y, self.z]
    }
}

/// 2d point with `f64` coordinates.
pub type Point2d = Point2<f64>;
/// 3d point with `f64` coordinates.
pub type Point3d = Point3<f64>;

/// Point in 2d cartesian coordinate space. 3d points expose their planar projection through
/// this trait too.
pub trait CartesianPoint2d {
    /// Numeric type used to represent coordinates.
    type Num: Num + Copy + PartialOrd;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Returns true if the points have equal planar coordinates.
    fn equal(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> bool
    where
        Self: Sized,
    {
        self.x() == other.x() && self.y() == other.y()
    }
}

/// Point in 3d cartesian coordinate space.
pub trait CartesianPoint3d: CartesianPoint2d {
    /// Z coordinate.
    fn z(&self) -> Self::Num;
}

/// Cartesian 2d point that can be constructed from its coordinates.
pub trait NewCartesianPoint2d<Num = f64>: CartesianPoint2d<Num = Num> {
    /// Creates a new point.
    fn new(x: Num, y: Num) -> Self;
}

/// Cartesian 3d point that can be constructed from its coordinates.
pub trait NewCartesianPoint3d<Num = f64>: CartesianPoint3d<Num = Num> {
    /// Creates a new point.
    fn new(x: Num, y: Num, z: Num) -> Self;
}

impl<N: Num + Copy + PartialOrd> CartesianPoint2d for Point2<N> {
    type Num = N;

    fn x(&self) -> N {
        self.x
    }

    fn y(&self) -> N {
        self.y
    }
}

impl<N: Num + Copy + PartialOrd> NewCartesianPoint2d<N> for Point2<N> {
    fn new(x: N, y: N) -> Self {
        Point2 { x, y }
    }
}

impl<N: Num + Copy + PartialOrd> CartesianPoint2d for Point3<N> {
    type Num = N;

    fn x(&self) -> N {
        self.x
    }

    fn y(&self) -> N {
        self.y
    }
}

impl<N: Num + Copy + PartialOrd> CartesianPoint3d for Point3<N> {
    fn z(&self) -> N {
        self.z
    }
}

impl<N: Num + Copy + PartialOrd> NewCartesianPoint3d<N> for Point3<N> {
    fn new(x: N, y: N, z: N) -> Self {
        Point3 { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planar_equality_ignores_z() {
        let a = Point3d::new(1.0, 2.0, 3.0);
        let b = Point3d::new(1.0, 2.0, f64::NAN);
        assert!(a.equal(&b));
        assert_ne!(a, b);
        assert!(!a.equal(&Point3d::new(1.0, 2.5, 3.0)));
    }
}
