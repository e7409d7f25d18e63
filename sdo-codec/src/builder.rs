//! Construction of geometries from the parts produced by the
//! [`ElementTableWalker`](crate::element::ElementTableWalker).

use sdo_types::geometry_type::GeometryType;
use sdo_types::impls::MultiPoint;
use sdo_types::Geom;

use crate::element::{ElementTableWalker, ElementUnit};
use crate::error::SdoError;
use crate::ordinates::SdoCoordinate;
use crate::record::SdoRecord;
use crate::type_code::{GeometryKind, TypeCode};

enum BuildState<P> {
    /// Single-part geometry that did not receive its part yet.
    AwaitingPart,
    SinglePart { geometry: Geom<P>, parts: usize },
    MultiPart { geometry: Geom<P> },
}

/// Assembles element units into a geometry of the kind given by the type code.
///
/// Single-part kinds (point, line, polygon) expect exactly one unit, multi-part kinds wrap all
/// units into their container preserving order, and a collection takes the type of each member
/// from its unit.
pub struct GeometryBuilder<P> {
    kind: GeometryKind,
    geometry_type: GeometryType,
    state: BuildState<P>,
}

impl<P: SdoCoordinate> GeometryBuilder<P> {
    /// Fails for kinds the object model cannot represent.
    pub fn new(kind: GeometryKind) -> Result<Self, SdoError> {
        let geometry_type = kind
            .geometry_type()
            .ok_or(SdoError::UnsupportedGeometryKind(kind))?;

        let state = match geometry_type {
            GeometryType::Point | GeometryType::LineString | GeometryType::Polygon => {
                BuildState::AwaitingPart
            }
            _ => BuildState::MultiPart {
                geometry: Geom::empty(geometry_type),
            },
        };

        Ok(Self {
            kind,
            geometry_type,
            state,
        })
    }

    /// Adds the next part of the element table.
    pub fn push(&mut self, unit: ElementUnit<P>) -> Result<(), SdoError> {
        match &mut self.state {
            BuildState::AwaitingPart => {
                let geometry = self.single_part(unit)?;
                self.state = BuildState::SinglePart { geometry, parts: 1 };
            }
            BuildState::SinglePart { parts, .. } => {
                *parts += 1;
            }
            BuildState::MultiPart { geometry } => add_part(self.kind, geometry, unit)?,
        }

        Ok(())
    }

    /// Returns the geometry, or an empty one if no parts were pushed.
    pub fn finish(self) -> Result<Geom<P>, SdoError> {
        match self.state {
            BuildState::AwaitingPart => Ok(Geom::empty(self.geometry_type)),
            BuildState::SinglePart { parts, .. } if parts > 1 => {
                Err(SdoError::ElementCountMismatch {
                    kind: self.kind,
                    expected: 1,
                    found: parts,
                })
            }
            BuildState::SinglePart { geometry, .. } | BuildState::MultiPart { geometry } => {
                Ok(geometry)
            }
        }
    }

    fn single_part(&self, unit: ElementUnit<P>) -> Result<Geom<P>, SdoError> {
        Ok(match (self.geometry_type, unit) {
            (GeometryType::Point, ElementUnit::Points(points)) => match points[..] {
                [point] => Geom::Point(Some(point)),
                _ => {
                    return Err(SdoError::ElementCountMismatch {
                        kind: self.kind,
                        expected: 1,
                        found: points.len(),
                    })
                }
            },
            (GeometryType::LineString, ElementUnit::Line(line)) => Geom::LineString(line),
            (GeometryType::Polygon, ElementUnit::Polygon(polygon)) => Geom::Polygon(polygon),
            (_, unit) => return Err(unexpected_unit(self.kind, &unit)),
        })
    }
}

fn add_part<P>(
    kind: GeometryKind,
    geometry: &mut Geom<P>,
    unit: ElementUnit<P>,
) -> Result<(), SdoError> {
    match (geometry, unit) {
        (Geom::MultiPoint(multi_point), ElementUnit::Points(points)) => {
            multi_point.0.extend(points)
        }
        (Geom::MultiLineString(multi_line), ElementUnit::Line(line)) => multi_line.0.push(line),
        (Geom::MultiPolygon(multi_polygon), ElementUnit::Polygon(polygon)) => {
            multi_polygon.0.push(polygon)
        }
        (Geom::GeometryCollection(collection), unit) => collection.0.push(match unit {
            ElementUnit::Points(mut points) if points.len() == 1 => Geom::Point(points.pop()),
            ElementUnit::Points(points) => Geom::MultiPoint(MultiPoint(points)),
            ElementUnit::Line(line) => Geom::LineString(line),
            ElementUnit::Polygon(polygon) => Geom::Polygon(polygon),
        }),
        (_, unit) => return Err(unexpected_unit(kind, &unit)),
    }

    Ok(())
}

fn unexpected_unit<P>(kind: GeometryKind, unit: &ElementUnit<P>) -> SdoError {
    SdoError::MalformedElementTable(format!(
        "{} element cannot be a part of {kind:?} geometry",
        unit.name()
    ))
}

/// Builds the geometry described by the record, which must have coordinates of type `P`.
pub fn build_geometry<P: SdoCoordinate>(
    type_code: &TypeCode,
    record: &SdoRecord,
) -> Result<Geom<P>, SdoError> {
    let elem_info = record.elem_info();

    if type_code.kind == GeometryKind::Unknown && record.point.is_none() && elem_info.is_empty() {
        return Ok(Geom::empty(GeometryType::GeometryCollection));
    }

    let mut builder = GeometryBuilder::new(type_code.kind)?;

    if let Some(point) = &record.point {
        if type_code.kind == GeometryKind::Point {
            return Ok(Geom::Point(Some(P::from_point_type(point))));
        }

        log::debug!(
            "Ignoring fast-path point of {:?} geometry",
            type_code.kind
        );
    }

    for unit in ElementTableWalker::<P>::new(elem_info, record.ordinates())? {
        builder.push(unit?)?;
    }

    builder.finish()
}
