//! Geometry type code (`SDO_GTYPE`) of the form `DLTT`: `D` is the number of dimensions, `L` the
//! position of the measure ordinate (0 for none) and `TT` the geometry kind.

use sdo_types::geometry_type::GeometryType;
use serde::{Deserialize, Serialize};

use crate::error::SdoError;

/// Geometry kind stored in the last two digits of the type code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    /// `00`: kind not specified.
    Unknown,
    /// `01`
    Point,
    /// `02`
    Line,
    /// `03`
    Polygon,
    /// `04`: heterogeneous collection.
    Collection,
    /// `05`
    MultiPoint,
    /// `06`
    MultiLine,
    /// `07`
    MultiPolygon,
    /// `08`
    Solid,
    /// `09`
    MultiSolid,
}

impl GeometryKind {
    /// Kind stored in the given two digits.
    pub fn from_digits(digits: i32) -> Option<Self> {
        Some(match digits {
            0 => Self::Unknown,
            1 => Self::Point,
            2 => Self::Line,
            3 => Self::Polygon,
            4 => Self::Collection,
            5 => Self::MultiPoint,
            6 => Self::MultiLine,
            7 => Self::MultiPolygon,
            8 => Self::Solid,
            9 => Self::MultiSolid,
            _ => return None,
        })
    }

    /// Two-digit code of the kind.
    pub fn digits(self) -> i32 {
        match self {
            Self::Unknown => 0,
            Self::Point => 1,
            Self::Line => 2,
            Self::Polygon => 3,
            Self::Collection => 4,
            Self::MultiPoint => 5,
            Self::MultiLine => 6,
            Self::MultiPolygon => 7,
            Self::Solid => 8,
            Self::MultiSolid => 9,
        }
    }

    /// Object model type this kind decodes into. `None` for kinds the object model cannot
    /// represent.
    pub fn geometry_type(self) -> Option<GeometryType> {
        Some(match self {
            Self::Point => GeometryType::Point,
            Self::Line => GeometryType::LineString,
            Self::Polygon => GeometryType::Polygon,
            Self::Collection => GeometryType::GeometryCollection,
            Self::MultiPoint => GeometryType::MultiPoint,
            Self::MultiLine => GeometryType::MultiLineString,
            Self::MultiPolygon => GeometryType::MultiPolygon,
            Self::Unknown | Self::Solid | Self::MultiSolid => return None,
        })
    }
}

impl From<GeometryType> for GeometryKind {
    fn from(value: GeometryType) -> Self {
        match value {
            GeometryType::Point => Self::Point,
            GeometryType::LineString => Self::Line,
            GeometryType::Polygon => Self::Polygon,
            GeometryType::MultiPoint => Self::MultiPoint,
            GeometryType::MultiLineString => Self::MultiLine,
            GeometryType::MultiPolygon => Self::MultiPolygon,
            GeometryType::GeometryCollection => Self::Collection,
        }
    }
}

/// Unpacked geometry type code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeCode {
    /// Number of ordinates per coordinate: 2, 3 or 4.
    pub dimension: u8,
    /// 1-based position of the measure ordinate, 0 if coordinates carry no measure. Any non-zero
    /// value is rejected by [`TypeCode::ensure_no_measure`].
    pub measure_position: u8,
    /// Geometry kind.
    pub kind: GeometryKind,
}

impl TypeCode {
    /// Type code without a measure.
    pub fn new(kind: GeometryKind, dimension: u8) -> Self {
        Self {
            dimension,
            measure_position: 0,
            kind,
        }
    }

    /// Unpacks a type code. Measures are not checked here.
    pub fn decode(code: i32) -> Result<Self, SdoError> {
        let dimension = code / 1000;
        let measure_position = (code / 100) % 10;
        let kind = GeometryKind::from_digits(code % 100).ok_or(SdoError::InvalidTypeCode(code))?;

        if !(2..=4).contains(&dimension) {
            return Err(SdoError::InvalidTypeCode(code));
        }

        Ok(Self {
            dimension: dimension as u8,
            measure_position: measure_position as u8,
            kind,
        })
    }

    /// Packs a type code without a measure.
    pub fn encode(kind: GeometryKind, dimension: u8) -> i32 {
        i32::from(dimension) * 1000 + kind.digits()
    }

    /// Packed type code.
    pub fn code(&self) -> i32 {
        i32::from(self.dimension) * 1000 + i32::from(self.measure_position) * 100 + self.kind.digits()
    }

    /// Fails with [`SdoError::UnsupportedMeasure`] if the coordinates carry a measure.
    pub fn ensure_no_measure(&self) -> Result<(), SdoError> {
        match self.measure_position {
            0 => Ok(()),
            position => Err(SdoError::UnsupportedMeasure(position)),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn decode_type_codes() {
        assert_eq!(
            TypeCode::decode(2003).expect("valid code"),
            TypeCode::new(GeometryKind::Polygon, 2)
        );
        assert_eq!(
            TypeCode::decode(3007).expect("valid code"),
            TypeCode::new(GeometryKind::MultiPolygon, 3)
        );

        let measured = TypeCode::decode(3302).expect("valid code");
        assert_eq!(measured.dimension, 3);
        assert_eq!(measured.measure_position, 3);
        assert_eq!(measured.kind, GeometryKind::Line);
        assert_eq!(measured.code(), 3302);
        assert_matches!(
            measured.ensure_no_measure(),
            Err(SdoError::UnsupportedMeasure(3))
        );
    }

    #[test]
    fn reject_invalid_codes() {
        for code in [1001, 5001, 2010, 2099, 0, -2001] {
            assert_matches!(
                TypeCode::decode(code),
                Err(SdoError::InvalidTypeCode(c)) if c == code,
                "code {code}"
            );
        }
    }

    #[test]
    fn any_measure_digit_is_a_measure() {
        for (code, position) in [(3102, 1), (2301, 3), (2201, 2), (4401, 4), (3902, 9)] {
            let type_code = TypeCode::decode(code).expect("valid code");
            assert_matches!(
                type_code.ensure_no_measure(),
                Err(SdoError::UnsupportedMeasure(p)) if p == position,
                "code {code}"
            );
        }
    }

    #[test]
    fn encode_type_codes() {
        assert_eq!(TypeCode::encode(GeometryKind::Point, 2), 2001);
        assert_eq!(TypeCode::encode(GeometryKind::Collection, 3), 3004);
        assert_eq!(TypeCode::new(GeometryKind::MultiLine, 2).code(), 2006);
    }

    #[test]
    fn kind_digits_are_consistent() {
        for digits in 0..10 {
            let kind = GeometryKind::from_digits(digits).expect("known kind");
            assert_eq!(kind.digits(), digits);
        }
        assert!(GeometryKind::from_digits(10).is_none());
    }
}
