//! Conversion between flat ordinate arrays and coordinate sequences.

use std::fmt::Debug;

use sdo_types::cartesian::{
    CartesianPoint2d, CartesianPoint3d, NewCartesianPoint2d, NewCartesianPoint3d, Point2d, Point3d,
};

use crate::error::SdoError;
use crate::record::SdoPointType;

/// Point type that can be read from and written to an ordinate array.
///
/// An absent ordinate is represented by `NaN` in the point, and is kept as is when reading
/// ordinate arrays.
pub trait SdoCoordinate: CartesianPoint2d<Num = f64> + Copy + PartialEq + Debug {
    /// Number of ordinates per coordinate.
    const DIMENSION: u8;

    /// Creates a point from exactly `DIMENSION` ordinates.
    fn from_ordinates(ordinates: &[f64]) -> Self;

    /// Appends `DIMENSION` ordinates of the point.
    fn push_ordinates(&self, out: &mut Vec<f64>);

    /// Point with the given planar coordinates and all other ordinates set to zero.
    fn planar(x: f64, y: f64) -> Self;

    /// Returns true if all ordinates except x and y are zero.
    fn is_planar(&self) -> bool;

    /// Reads a fast-path point. NULL ordinates become `NaN`.
    fn from_point_type(point: &SdoPointType) -> Self;

    /// Writes the point as a fast-path point.
    fn to_point_type(&self) -> SdoPointType;
}

impl SdoCoordinate for Point2d {
    const DIMENSION: u8 = 2;

    fn from_ordinates(ordinates: &[f64]) -> Self {
        Point2d::new(ordinates[0], ordinates[1])
    }

    fn push_ordinates(&self, out: &mut Vec<f64>) {
        out.extend_from_slice(&self.coords());
    }

    fn planar(x: f64, y: f64) -> Self {
        NewCartesianPoint2d::new(x, y)
    }

    fn is_planar(&self) -> bool {
        true
    }

    fn from_point_type(point: &SdoPointType) -> Self {
        Point2d::new(point.x.unwrap_or(f64::NAN), point.y.unwrap_or(f64::NAN))
    }

    fn to_point_type(&self) -> SdoPointType {
        SdoPointType::new(self.x(), self.y(), None)
    }
}

impl SdoCoordinate for Point3d {
    const DIMENSION: u8 = 3;

    fn from_ordinates(ordinates: &[f64]) -> Self {
        Point3d::new(ordinates[0], ordinates[1], ordinates[2])
    }

    fn push_ordinates(&self, out: &mut Vec<f64>) {
        out.extend_from_slice(&self.coords());
    }

    fn planar(x: f64, y: f64) -> Self {
        NewCartesianPoint3d::new(x, y, 0.0)
    }

    fn is_planar(&self) -> bool {
        self.z() == 0.0
    }

    fn from_point_type(point: &SdoPointType) -> Self {
        Point3d::new(
            point.x.unwrap_or(f64::NAN),
            point.y.unwrap_or(f64::NAN),
            point.z.unwrap_or(f64::NAN),
        )
    }

    fn to_point_type(&self) -> SdoPointType {
        // A missing z is written as NULL rather than as a NaN number.
        let z = Some(self.z()).filter(|z| !z.is_nan());
        SdoPointType::new(self.x(), self.y(), z)
    }
}

/// Reads `count` coordinates starting at the 1-based ordinate `offset`.
pub fn slice<P: SdoCoordinate>(
    ordinates: &[f64],
    offset: usize,
    count: usize,
) -> Result<Vec<P>, SdoError> {
    let dimension = usize::from(P::DIMENSION);
    let start = offset
        .checked_sub(1)
        .ok_or_else(|| SdoError::OrdinateRangeError("ordinate offsets start at 1".into()))?;
    let end = count
        .checked_mul(dimension)
        .and_then(|len| len.checked_add(start))
        .filter(|end| *end <= ordinates.len())
        .ok_or_else(|| {
            SdoError::OrdinateRangeError(format!(
                "{count} coordinate(s) of dimension {dimension} at offset {offset} exceed {} ordinates",
                ordinates.len()
            ))
        })?;

    Ok(ordinates[start..end]
        .chunks_exact(dimension)
        .map(P::from_ordinates)
        .collect())
}

/// Number of coordinates between the 1-based ordinate offset `start` and the exclusive offset
/// `end`.
pub fn coordinate_count<P: SdoCoordinate>(start: usize, end: usize) -> Result<usize, SdoError> {
    let dimension = usize::from(P::DIMENSION);
    let len = end.checked_sub(start).ok_or_else(|| {
        SdoError::OrdinateRangeError(format!("element offsets {start} and {end} are not ascending"))
    })?;

    if len % dimension != 0 {
        return Err(SdoError::OrdinateRangeError(format!(
            "element at offset {start} has {len} ordinates, which is not a multiple of dimension {dimension}"
        )));
    }

    Ok(len / dimension)
}
