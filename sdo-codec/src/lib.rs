//! Reader and writer of the Oracle `SDO_GEOMETRY` storage format.
//!
//! A geometry is stored as a record of five fields: a packed type code ([`TypeCode`]), a reference
//! system id, an optional fast-path point, an element table ([`element`]) and a flat ordinate
//! array ([`ordinates`]). [`SdoCodec`] translates such records into the vector geometry types of
//! [`sdo_types`] and back:
//!
//! ```
//! use sdo_codec::{SdoCodec, SdoRecord};
//! use sdo_types::geometry_type::GeometryType;
//!
//! let record = SdoRecord {
//!     gtype: 2003,
//!     srid: Some(4326),
//!     point: None,
//!     elem_info: Some(vec![1, 1003, 3]),
//!     ordinates: Some(vec![0.0, 0.0, 10.0, 5.0]),
//! };
//!
//! let codec = SdoCodec::default();
//! let decoded = codec.decode(&record).unwrap();
//! assert_eq!(decoded.geometry.geometry_type(), GeometryType::Polygon);
//! assert_eq!(codec.encode(&decoded), record);
//! ```
//!
//! Curves, linear referencing measures and solids cannot be represented by the object model and
//! are reported as errors.

use std::sync::Arc;

use sdo_types::cartesian::{Point2d, Point3d};
use sdo_types::geometry_type::GeometryType;
use sdo_types::Geom;
use serde::{Deserialize, Serialize};

use crate::builder::build_geometry;
use crate::flattener::flatten_geometry;

mod builder;
pub mod element;
pub mod error;
mod flattener;
pub mod ordinates;
pub mod record;
pub mod type_code;

pub use error::SdoError;
pub use record::{SdoPointType, SdoRecord};
pub use type_code::{GeometryKind, TypeCode};

/// Decoded geometry of either supported dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// Geometry with 2d coordinates.
    Xy(Geom<Point2d>),
    /// Geometry with 3d coordinates.
    Xyz(Geom<Point3d>),
}

impl Geometry {
    /// Number of ordinates per coordinate.
    pub fn dimension(&self) -> u8 {
        match self {
            Geometry::Xy(_) => 2,
            Geometry::Xyz(_) => 3,
        }
    }

    /// Type of the geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Xy(geom) => geom.geometry_type(),
            Geometry::Xyz(geom) => geom.geometry_type(),
        }
    }

    /// Returns true if the geometry does not contain any points.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Xy(geom) => geom.is_empty(),
            Geometry::Xyz(geom) => geom.is_empty(),
        }
    }
}

impl From<Geom<Point2d>> for Geometry {
    fn from(value: Geom<Point2d>) -> Self {
        Self::Xy(value)
    }
}

impl From<Geom<Point3d>> for Geometry {
    fn from(value: Geom<Point3d>) -> Self {
        Self::Xyz(value)
    }
}

/// Geometry together with its reference system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdoGeometry {
    /// Spatial reference system id.
    pub srid: Option<i32>,
    /// Geometry.
    pub geometry: Geometry,
    /// Record the geometry was decoded from. Not taken into account when comparing geometries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Arc<SdoRecord>>,
}

impl SdoGeometry {
    /// Creates a new geometry without a source record.
    pub fn new(srid: Option<i32>, geometry: impl Into<Geometry>) -> Self {
        Self {
            srid,
            geometry: geometry.into(),
            source: None,
        }
    }
}

impl PartialEq for SdoGeometry {
    fn eq(&self, other: &Self) -> bool {
        self.srid == other.srid && self.geometry == other.geometry
    }
}

/// Converts between [`SdoRecord`]s and [`SdoGeometry`]s.
///
/// The codec holds no state besides its options, so a single instance can be shared between
/// threads.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SdoCodec {
    attach_source: bool,
    normalize_winding: bool,
}

impl Default for SdoCodec {
    fn default() -> Self {
        Self {
            attach_source: true,
            normalize_winding: false,
        }
    }
}

impl SdoCodec {
    /// Sets whether decoded geometries keep a copy of the record they were decoded from.
    pub fn with_attach_source(mut self, attach_source: bool) -> Self {
        self.attach_source = attach_source;
        self
    }

    /// Sets whether encoding orients exterior rings counterclockwise and interior rings
    /// clockwise. Without it rings are written as they are.
    pub fn with_normalize_winding(mut self, normalize_winding: bool) -> Self {
        self.normalize_winding = normalize_winding;
        self
    }

    /// Decodes a record.
    ///
    /// The decoding either succeeds completely or fails with the first problem found in the
    /// record.
    pub fn decode(&self, record: &SdoRecord) -> Result<SdoGeometry, SdoError> {
        let type_code = TypeCode::decode(record.gtype)?;
        type_code.ensure_no_measure()?;
        log::trace!("Decoding {type_code:?}");

        let geometry = match type_code.dimension {
            2 => Geometry::Xy(build_geometry(&type_code, record)?),
            3 => Geometry::Xyz(build_geometry(&type_code, record)?),
            dimension => return Err(SdoError::UnsupportedDimension(dimension)),
        };

        Ok(SdoGeometry {
            srid: record.srid,
            geometry,
            source: self.attach_source.then(|| Arc::new(record.clone())),
        })
    }

    /// Decodes a record that may be NULL. A NULL record gives a NULL geometry.
    pub fn decode_nullable(
        &self,
        record: Option<&SdoRecord>,
    ) -> Result<Option<SdoGeometry>, SdoError> {
        record.map(|record| self.decode(record)).transpose()
    }

    /// Encodes a geometry.
    ///
    /// Reference system id 0 is written as NULL.
    pub fn encode(&self, geometry: &SdoGeometry) -> SdoRecord {
        log::trace!(
            "Encoding {:?} geometry with {} dimensions",
            geometry.geometry.geometry_type(),
            geometry.geometry.dimension()
        );

        let mut record = match &geometry.geometry {
            Geometry::Xy(geom) => flatten_geometry(geom, self.normalize_winding),
            Geometry::Xyz(geom) => flatten_geometry(geom, self.normalize_winding),
        };
        record.srid = geometry.srid.filter(|srid| *srid != 0);

        record
    }

    /// Encodes a geometry that may be NULL. A NULL geometry gives an empty record of unknown kind.
    pub fn encode_nullable(&self, geometry: Option<&SdoGeometry>) -> SdoRecord {
        match geometry {
            Some(geometry) => self.encode(geometry),
            None => SdoRecord::empty(TypeCode::encode(GeometryKind::Unknown, 2), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use sdo_types::impls::{LineString, LinearRing, MultiPolygon, Polygon};
    use sdo_types::GeometryCollection;

    use super::*;

    fn ring(coords: &[(f64, f64)]) -> LinearRing<Point2d> {
        LinearRing::new(coords.iter().map(|(x, y)| Point2d::new(*x, *y)).collect())
            .expect("valid ring")
    }

    fn square(x: f64, y: f64, size: f64) -> LinearRing<Point2d> {
        ring(&[
            (x, y),
            (x + size, y),
            (x + size, y + size),
            (x, y + size),
            (x, y),
        ])
    }

    fn record(gtype: i32, elem_info: &[i32], ordinates: &[f64]) -> SdoRecord {
        SdoRecord {
            gtype,
            srid: None,
            point: None,
            elem_info: Some(elem_info.to_vec()),
            ordinates: Some(ordinates.to_vec()),
        }
    }

    fn round_trip(geometry: impl Into<Geometry>) {
        let codec = SdoCodec::default();
        let geometry = SdoGeometry::new(Some(4326), geometry);
        let record = codec.encode(&geometry);
        let decoded = codec.decode(&record).expect("valid record");
        assert_eq!(decoded, geometry, "record {record:?}");
    }

    #[test]
    fn simple_kinds_round_trip() {
        round_trip(Geom::Point(Some(Point2d::new(1.5, -2.0))));
        round_trip(Geom::Point(Some(Point3d::new(1.5, -2.0, 7.0))));
        round_trip(Geom::LineString(LineString::new(vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 1.0),
            Point2d::new(2.0, 0.0),
        ])));
        round_trip(Geom::LineString(LineString::new(vec![
            Point3d::new(0.0, 0.0, 1.0),
            Point3d::new(1.0, 1.0, 2.0),
        ])));
        round_trip(Geom::Polygon(Polygon::from(ring(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (2.0, 3.0),
            (0.0, 0.0),
        ]))));

        let triangle = [(0.0, 0.0, 1.0), (4.0, 0.0, 2.0), (2.0, 3.0, 3.0), (0.0, 0.0, 1.0)]
            .iter()
            .map(|(x, y, z)| Point3d::new(*x, *y, *z))
            .collect();
        round_trip(Geom::Polygon(Polygon::from(
            LinearRing::new(triangle).expect("valid ring"),
        )));
    }

    #[test]
    fn multi_kinds_round_trip() {
        round_trip(Geom::MultiPolygon(MultiPolygon(vec![
            Polygon::new(square(0.0, 0.0, 10.0), vec![square(1.0, 1.0, 2.0)]),
            square(20.0, 20.0, 1.0).into(),
        ])));

        round_trip(Geom::GeometryCollection(GeometryCollection(vec![
            Geom::Point(Some(Point2d::new(7.0, 7.0))),
            Geom::Polygon(square(0.0, 0.0, 1.0).into()),
            Geom::LineString(LineString::new(vec![
                Point2d::new(0.0, 0.0),
                Point2d::new(3.0, 3.0),
            ])),
        ])));
    }

    #[test]
    fn rectangle_round_trip() {
        let codec = SdoCodec::default();
        let rectangle = SdoGeometry::new(None, Geom::Polygon(square(0.0, 0.0, 5.0).into()));

        let record = codec.encode(&rectangle);
        assert_eq!(record.elem_info(), &[1, 1003, 3]);
        assert_eq!(record.ordinates(), &[0.0, 0.0, 5.0, 5.0]);

        let decoded = codec.decode(&record).expect("valid record");
        assert_eq!(decoded, rectangle);
    }

    /// Rings with the same vertices in the same cyclic order, in either direction and from any
    /// start vertex.
    fn same_ring(a: &LinearRing<Point2d>, b: &LinearRing<Point2d>) -> bool {
        let (a, b) = (a.points(), b.points());
        if a.len() != b.len() || a.is_empty() {
            return a.len() == b.len();
        }

        let a = &a[..a.len() - 1];
        let b = &b[..b.len() - 1];
        (0..b.len()).any(|shift| {
            let rotated: Vec<Point2d> =
                b.iter().cycle().skip(shift).take(b.len()).copied().collect();
            rotated == a || rotated.iter().rev().eq(a.iter())
        })
    }

    #[test]
    fn rectangle_round_trip_is_geometric() {
        let codec = SdoCodec::default();
        let clockwise = ring(&[(5.0, 5.0), (5.0, 0.0), (0.0, 0.0), (0.0, 5.0), (5.0, 5.0)]);
        let rectangle = SdoGeometry::new(None, Geom::Polygon(clockwise.clone().into()));

        let record = codec.encode(&rectangle);
        assert_eq!(record.elem_info(), &[1, 1003, 3]);
        assert_eq!(record.ordinates(), &[0.0, 0.0, 5.0, 5.0]);

        let decoded = codec.decode(&record).expect("valid record");
        assert_ne!(decoded, rectangle);
        let Geometry::Xy(Geom::Polygon(polygon)) = decoded.geometry else {
            panic!("invalid geometry type");
        };
        assert!(polygon.interiors.is_empty());
        assert!(same_ring(&polygon.exterior, &clockwise));
        assert!(same_ring(&polygon.exterior, &square(0.0, 0.0, 5.0)));
        assert!(!same_ring(&polygon.exterior, &square(0.0, 0.0, 4.0)));
    }

    #[test]
    fn point_fast_path_is_exclusive() {
        let codec = SdoCodec::default();
        let record = codec.encode(&SdoGeometry::new(
            Some(8307),
            Geom::Point(Some(Point2d::new(1.0, 2.0))),
        ));

        assert_eq!(
            record,
            SdoRecord {
                gtype: 2001,
                srid: Some(8307),
                point: Some(SdoPointType::new(1.0, 2.0, None)),
                elem_info: None,
                ordinates: None,
            }
        );
    }

    #[test]
    fn measures_are_rejected() {
        let codec = SdoCodec::default();
        assert_matches!(
            codec.decode(&record(3302, &[1, 2, 1], &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0])),
            Err(SdoError::UnsupportedMeasure(3))
        );
        assert_matches!(
            codec.decode(&record(4401, &[1, 1, 1], &[0.0, 0.0, 0.0, 0.0])),
            Err(SdoError::UnsupportedMeasure(4))
        );
        assert_matches!(
            codec.decode(&record(3102, &[1, 2, 1], &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0])),
            Err(SdoError::UnsupportedMeasure(1))
        );
        assert_matches!(
            codec.decode(&record(2301, &[1, 1, 1], &[0.0, 0.0])),
            Err(SdoError::UnsupportedMeasure(3))
        );
    }

    #[test]
    fn four_dimensions_are_rejected() {
        assert_matches!(
            SdoCodec::default().decode(&record(4001, &[1, 1, 1], &[0.0, 0.0, 0.0, 0.0])),
            Err(SdoError::UnsupportedDimension(4))
        );
    }

    #[test]
    fn holes_keep_their_order() {
        let ordinates = [
            square(0.0, 0.0, 10.0).into_points(),
            square(1.0, 1.0, 1.0).into_points(),
            square(5.0, 5.0, 1.0).into_points(),
        ]
        .concat()
        .iter()
        .flat_map(|p| p.coords())
        .collect::<Vec<_>>();

        let decoded = SdoCodec::default()
            .decode(&record(2003, &[1, 1003, 1, 11, 2003, 1, 21, 2003, 1], &ordinates))
            .expect("valid record");

        let Geometry::Xy(Geom::Polygon(polygon)) = decoded.geometry else {
            panic!("invalid geometry type");
        };
        assert_eq!(polygon.exterior, square(0.0, 0.0, 10.0));
        assert_eq!(
            polygon.interiors,
            vec![square(1.0, 1.0, 1.0), square(5.0, 5.0, 1.0)]
        );
    }

    #[test]
    fn holes_with_coordinate_index_offsets() {
        let ordinates = [
            0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0, 0.0, 0.0, 2.0, 2.0, 4.0, 2.0, 4.0, 4.0,
            2.0, 4.0, 2.0, 2.0, 6.0, 6.0, 8.0, 6.0, 8.0, 8.0, 6.0, 8.0, 6.0, 6.0,
        ];
        let decoded = SdoCodec::default()
            .decode(&record(2003, &[1, 1003, 1, 6, 2003, 1, 11, 2003, 1], &ordinates))
            .expect("valid record");

        assert_eq!(
            decoded.geometry,
            Geometry::Xy(Geom::Polygon(Polygon::new(
                square(0.0, 0.0, 10.0),
                vec![square(2.0, 2.0, 2.0), square(6.0, 6.0, 2.0)],
            )))
        );
    }

    #[test]
    fn empty_polygon() {
        let codec = SdoCodec::default();
        let empty = SdoGeometry::new(None, Geom::<Point3d>::Polygon(Polygon::empty()));

        let record = codec.encode(&empty);
        assert_eq!(record, SdoRecord::empty(3003, None));

        let decoded = codec.decode(&record).expect("valid record");
        assert_eq!(decoded, empty);
        assert_eq!(decoded.geometry.dimension(), 3);
    }

    #[test]
    fn malformed_element_table() {
        let codec = SdoCodec::default();
        let ordinates: Vec<f64> = square(0.0, 0.0, 1.0)
            .points()
            .iter()
            .flat_map(|p| p.coords())
            .collect();
        assert_matches!(
            codec.decode(&record(2003, &[1, 2003, 1], &ordinates)),
            Err(SdoError::MalformedElementTable(_))
        );
        assert_matches!(
            codec.decode(&record(2002, &[1, 2], &[0.0, 0.0, 1.0, 1.0])),
            Err(SdoError::MalformedElementTable(_))
        );
        assert_matches!(
            codec.decode(&record(2002, &[1, 2, 2], &[0.0, 0.0, 1.0, 1.0, 2.0, 0.0])),
            Err(SdoError::UnsupportedCurve {
                offset: 1,
                interpretation: 2
            })
        );
    }

    #[test]
    fn nulls() {
        let codec = SdoCodec::default();
        assert_matches!(codec.decode_nullable(None), Ok(None));
        assert_eq!(codec.encode_nullable(None), SdoRecord::empty(2000, None));

        let decoded = codec
            .decode_nullable(Some(&SdoRecord::empty(2000, None)))
            .expect("valid record")
            .expect("not null");
        assert_eq!(
            decoded.geometry,
            Geometry::Xy(Geom::GeometryCollection(GeometryCollection::default()))
        );
    }

    #[test]
    fn zero_srid_is_written_as_null() {
        let record = SdoCodec::default().encode(&SdoGeometry::new(
            Some(0),
            Geom::Point(Some(Point2d::new(1.0, 2.0))),
        ));
        assert_eq!(record.srid, None);
    }

    #[test]
    fn source_record() {
        let line = record(2002, &[1, 2, 1], &[0.0, 0.0, 1.0, 1.0]);

        let decoded = SdoCodec::default().decode(&line).expect("valid record");
        assert_eq!(decoded.source.as_deref(), Some(&line));

        let detached = SdoCodec::default()
            .with_attach_source(false)
            .decode(&line)
            .expect("valid record");
        assert!(detached.source.is_none());
        assert_eq!(detached, decoded);
    }

    #[test]
    fn winding_normalization() {
        let polygon = SdoGeometry::new(
            None,
            Geom::Polygon(Polygon::new(
                square(0.0, 0.0, 10.0).reversed(),
                vec![square(1.0, 1.0, 1.0)],
            )),
        );

        let codec = SdoCodec::default().with_normalize_winding(true);
        let decoded = codec.decode(&codec.encode(&polygon)).expect("valid record");
        assert_eq!(
            decoded.geometry,
            Geometry::Xy(Geom::Polygon(Polygon::new(
                square(0.0, 0.0, 10.0),
                vec![square(1.0, 1.0, 1.0).reversed()],
            )))
        );
    }
}
