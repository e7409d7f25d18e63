//! Flattening of geometries into element tables and ordinate arrays.

use std::marker::PhantomData;

use sdo_types::cartesian::{CartesianClosedContour, CartesianPoint2d, Rect, Winding};
use sdo_types::impls::{LineString, LinearRing, Polygon};
use sdo_types::{Geom, MultiContour as _, MultiPoint as _, MultiPolygon as _, Polygon as _};

use crate::element::{
    ElementEntry, ElementType, INTERPRETATION_RECTANGLE, INTERPRETATION_STRAIGHT,
};
use crate::error::SdoError;
use crate::ordinates::SdoCoordinate;
use crate::record::SdoRecord;
use crate::type_code::{GeometryKind, TypeCode};

/// Writes geometry parts one after another, each part getting an element entry pointing at the
/// first ordinate it adds.
struct GeometryFlattener<P> {
    normalize_winding: bool,
    elem_info: Vec<i32>,
    ordinates: Vec<f64>,
    _point: PhantomData<P>,
}

impl<P: SdoCoordinate> GeometryFlattener<P> {
    fn new(normalize_winding: bool) -> Self {
        Self {
            normalize_winding,
            elem_info: vec![],
            ordinates: vec![],
            _point: PhantomData,
        }
    }

    fn add_element<'a>(
        &mut self,
        element_type: ElementType,
        interpretation: i32,
        points: impl IntoIterator<Item = &'a P>,
    ) where
        P: 'a,
    {
        let entry = ElementEntry::new(self.ordinates.len() + 1, element_type, interpretation);
        log::trace!("Writing element {entry:?}");
        entry.write(&mut self.elem_info);

        for point in points {
            point.push_ordinates(&mut self.ordinates);
        }
    }

    fn add_line(&mut self, line: &LineString<P>) {
        if line.is_empty() {
            log::debug!("Skipping empty line");
            return;
        }

        self.add_element(ElementType::Line, INTERPRETATION_STRAIGHT, line.points());
    }

    fn add_ring(&mut self, ring: &LinearRing<P>, element_type: ElementType, winding: Winding) {
        if ring.is_empty() {
            log::debug!("Skipping empty ring");
            return;
        }

        if self.normalize_winding && ring.winding() != winding {
            self.add_element(element_type, INTERPRETATION_STRAIGHT, ring.points().iter().rev());
        } else {
            self.add_element(element_type, INTERPRETATION_STRAIGHT, ring.points());
        }
    }

    fn add_polygon(&mut self, polygon: &Polygon<P>) {
        if polygon.is_empty() {
            log::debug!("Skipping empty polygon");
            return;
        }

        for (index, ring) in polygon.iter_contours().enumerate() {
            if index == 0 {
                self.add_ring(ring, ElementType::PolygonExterior, Winding::CounterClockwise);
            } else {
                self.add_ring(ring, ElementType::PolygonInterior, Winding::Clockwise);
            }
        }
    }

    fn add_geometry(&mut self, geometry: &Geom<P>) {
        match geometry {
            Geom::Point(Some(point)) => {
                self.add_element(ElementType::Point, 1, [point]);
            }
            Geom::Point(None) => {}
            Geom::LineString(line) => self.add_line(line),
            Geom::Polygon(polygon) => self.add_polygon(polygon),
            Geom::MultiPoint(multi_point) => {
                let count = multi_point.iter_points().count();
                if count > 0 {
                    self.add_element(ElementType::Point, count as i32, multi_point.iter_points());
                }
            }
            Geom::MultiLineString(multi_line) => {
                for line in multi_line.contours() {
                    self.add_line(line);
                }
            }
            Geom::MultiPolygon(multi_polygon) => {
                for polygon in multi_polygon.polygons() {
                    self.add_polygon(polygon);
                }
            }
            Geom::GeometryCollection(collection) => {
                for member in &collection.0 {
                    self.add_geometry(member);
                }
            }
        }
    }
}

/// Returns the min and max corners of the polygon if it is an axis-aligned rectangle with a
/// non-zero area, no holes and zero ordinates beyond x and y.
pub fn rectangle_corners<P: SdoCoordinate>(polygon: &Polygon<P>) -> Result<(P, P), SdoError> {
    let points = polygon.exterior.points();
    if !polygon.interiors.is_empty() || points.len() != LinearRing::<P>::MIN_POINTS + 1 {
        return Err(SdoError::NonRectangularPolygonForRectangleEncoding);
    }

    let rect = Rect::from_points(points.iter())
        .filter(Rect::has_area)
        .ok_or(SdoError::NonRectangularPolygonForRectangleEncoding)?;

    let vertices = &points[..LinearRing::<P>::MIN_POINTS];
    let distinct_vertices = vertices
        .iter()
        .enumerate()
        .all(|(i, a)| vertices[i + 1..].iter().all(|b| !a.equal(b)));
    let axis_aligned_edges = points
        .windows(2)
        .all(|edge| edge[0].x() == edge[1].x() || edge[0].y() == edge[1].y());
    let all_corners = points.iter().all(|p| rect.is_corner(p) && p.is_planar());

    if distinct_vertices && axis_aligned_edges && all_corners {
        Ok((
            P::planar(rect.x_min, rect.y_min),
            P::planar(rect.x_max, rect.y_max),
        ))
    } else {
        Err(SdoError::NonRectangularPolygonForRectangleEncoding)
    }
}

/// Encodes the geometry into a record without a reference system id.
///
/// A single point goes to the fast-path point, and a polygon that is an axis-aligned rectangle is
/// stored as its two opposite corners. Empty geometries give a record with empty element table and
/// ordinate array. If `normalize_winding` is set, exterior rings are written counterclockwise and
/// interior rings clockwise.
pub fn flatten_geometry<P: SdoCoordinate>(
    geometry: &Geom<P>,
    normalize_winding: bool,
) -> SdoRecord {
    let kind = GeometryKind::from(geometry.geometry_type());
    let gtype = TypeCode::encode(kind, P::DIMENSION);

    if geometry.is_empty() {
        return SdoRecord::empty(gtype, None);
    }

    if let Geom::Point(Some(point)) = geometry {
        log::debug!("Writing point into the fast-path point");
        return SdoRecord {
            gtype,
            srid: None,
            point: Some(point.to_point_type()),
            elem_info: None,
            ordinates: None,
        };
    }

    if let Geom::Polygon(polygon) = geometry {
        if let Ok((min, max)) = rectangle_corners(polygon) {
            log::debug!("Writing polygon as a rectangle");
            let mut flattener = GeometryFlattener::new(normalize_winding);
            flattener.add_element(
                ElementType::PolygonExterior,
                INTERPRETATION_RECTANGLE,
                [&min, &max],
            );

            return flattener.into_record(gtype);
        }
    }

    let mut flattener = GeometryFlattener::new(normalize_winding);
    flattener.add_geometry(geometry);
    flattener.into_record(gtype)
}

impl<P> GeometryFlattener<P> {
    fn into_record(self, gtype: i32) -> SdoRecord {
        SdoRecord {
            gtype,
            srid: None,
            point: None,
            elem_info: Some(self.elem_info),
            ordinates: Some(self.ordinates),
        }
    }
}
