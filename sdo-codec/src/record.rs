//! Raw record types exchanged with the database driver.

use serde::{Deserialize, Serialize};

/// Fast-path point of a record (`SDO_POINT_TYPE`). Each ordinate is a nullable number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SdoPointType {
    /// X ordinate.
    pub x: Option<f64>,
    /// Y ordinate.
    pub y: Option<f64>,
    /// Z ordinate, NULL for 2d points.
    pub z: Option<f64>,
}

impl SdoPointType {
    /// Creates a point with non-NULL x and y.
    pub fn new(x: f64, y: f64, z: Option<f64>) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z,
        }
    }
}

/// Raw geometry record (`SDO_GEOMETRY`) as exchanged with the database driver.
///
/// `None` fields are database NULLs, which the format distinguishes from empty arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SdoRecord {
    /// Packed type code, see [`TypeCode`](crate::TypeCode).
    pub gtype: i32,
    /// Spatial reference system id.
    pub srid: Option<i32>,
    /// Fast-path point. Used by single points only.
    pub point: Option<SdoPointType>,
    /// Flat sequence of `(offset, element type, interpretation)` triplets.
    pub elem_info: Option<Vec<i32>>,
    /// Coordinates of all elements, ordinate by ordinate.
    pub ordinates: Option<Vec<f64>>,
}

impl SdoRecord {
    /// Canonical record for an empty geometry: no fast-path point, empty element table and
    /// ordinate array.
    pub fn empty(gtype: i32, srid: Option<i32>) -> Self {
        Self {
            gtype,
            srid,
            point: None,
            elem_info: Some(vec![]),
            ordinates: Some(vec![]),
        }
    }

    /// Element table, empty if NULL.
    pub fn elem_info(&self) -> &[i32] {
        self.elem_info.as_deref().unwrap_or_default()
    }

    /// Ordinate array, empty if NULL.
    pub fn ordinates(&self) -> &[f64] {
        self.ordinates.as_deref().unwrap_or_default()
    }
}
