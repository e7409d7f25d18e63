//! Conversions between [`Geom`] and [`geo_types`] geometries.
//!
//! `geo_types` is 2d only, so only geometries with [`Point2`] points can be converted.

use geo_types::{coord, Coord, CoordNum};

use crate::cartesian::{CartesianPoint2d, Point2};
use crate::error::GeometryError;
use crate::geometry::{Geom, GeometryCollection};
use crate::impls::{LineString, LinearRing, MultiLineString, MultiPoint, MultiPolygon, Polygon};

fn to_coord<T: CoordNum>(point: &Point2<T>) -> Coord<T> {
    coord!(x: point.x(), y: point.y())
}

fn from_coord<T: CoordNum>(coord: &Coord<T>) -> Point2<T> {
    Point2::new(coord.x, coord.y)
}

fn to_line_string<T: CoordNum>(points: &[Point2<T>]) -> geo_types::LineString<T> {
    geo_types::LineString(points.iter().map(to_coord).collect())
}

fn to_polygon<T: CoordNum>(polygon: &Polygon<Point2<T>>) -> geo_types::Polygon<T> {
    geo_types::Polygon::new(
        to_line_string(polygon.exterior.points()),
        polygon
            .interiors
            .iter()
            .map(|ring| to_line_string(ring.points()))
            .collect(),
    )
}

fn from_ring<T: CoordNum>(
    line: &geo_types::LineString<T>,
) -> Result<LinearRing<Point2<T>>, GeometryError> {
    LinearRing::new(line.0.iter().map(from_coord).collect())
}

fn from_polygon<T: CoordNum>(
    polygon: &geo_types::Polygon<T>,
) -> Result<Polygon<Point2<T>>, GeometryError> {
    Ok(Polygon::new(
        from_ring(polygon.exterior())?,
        polygon
            .interiors()
            .iter()
            .map(from_ring)
            .collect::<Result<Vec<_>, _>>()?,
    ))
}

impl<T: CoordNum> TryFrom<&Geom<Point2<T>>> for geo_types::Geometry<T> {
    type Error = GeometryError;

    fn try_from(value: &Geom<Point2<T>>) -> Result<Self, Self::Error> {
        Ok(match value {
            Geom::Point(Some(point)) => geo_types::Point(to_coord(point)).into(),
            Geom::Point(None) => {
                return Err(GeometryError::Conversion(
                    "empty point cannot be represented as geo_types::Point".into(),
                ))
            }
            Geom::LineString(line) => to_line_string(line.points()).into(),
            Geom::Polygon(polygon) => to_polygon(polygon).into(),
            Geom::MultiPoint(points) => geo_types::MultiPoint(
                points
                    .0
                    .iter()
                    .map(|p| geo_types::Point(to_coord(p)))
                    .collect(),
            )
            .into(),
            Geom::MultiLineString(lines) => geo_types::MultiLineString(
                lines.0.iter().map(|l| to_line_string(l.points())).collect(),
            )
            .into(),
            Geom::MultiPolygon(polygons) => {
                geo_types::MultiPolygon(polygons.0.iter().map(to_polygon).collect()).into()
            }
            Geom::GeometryCollection(collection) => {
                geo_types::Geometry::GeometryCollection(geo_types::GeometryCollection(
                    collection
                        .0
                        .iter()
                        .map(geo_types::Geometry::try_from)
                        .collect::<Result<Vec<_>, _>>()?,
                ))
            }
        })
    }
}

impl<T: CoordNum> TryFrom<&geo_types::Geometry<T>> for Geom<Point2<T>> {
    type Error = GeometryError;

    fn try_from(value: &geo_types::Geometry<T>) -> Result<Self, Self::Error> {
        Ok(match value {
            geo_types::Geometry::Point(point) => Geom::Point(Some(from_coord(&point.0))),
            geo_types::Geometry::Line(line) => {
                LineString::new(vec![from_coord(&line.start), from_coord(&line.end)]).into()
            }
            geo_types::Geometry::LineString(line) => {
                LineString::new(line.0.iter().map(from_coord).collect()).into()
            }
            geo_types::Geometry::Polygon(polygon) => from_polygon(polygon)?.into(),
            geo_types::Geometry::MultiPoint(points) => {
                MultiPoint(points.0.iter().map(|p| from_coord(&p.0)).collect()).into()
            }
            geo_types::Geometry::MultiLineString(lines) => MultiLineString(
                lines
                    .0
                    .iter()
                    .map(|l| LineString::new(l.0.iter().map(from_coord).collect()))
                    .collect(),
            )
            .into(),
            geo_types::Geometry::MultiPolygon(polygons) => MultiPolygon(
                polygons
                    .0
                    .iter()
                    .map(from_polygon)
                    .collect::<Result<Vec<_>, _>>()?,
            )
            .into(),
            geo_types::Geometry::GeometryCollection(collection) => GeometryCollection(
                collection
                    .0
                    .iter()
                    .map(Geom::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            )
            .into(),
            geo_types::Geometry::Rect(rect) => from_polygon(&rect.to_polygon())?.into(),
            geo_types::Geometry::Triangle(triangle) => {
                from_polygon(&triangle.to_polygon())?.into()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use geo_types::{line_string, polygon};

    use super::*;

    #[test]
    fn polygon_with_hole_to_geo_types() {
        let geo_polygon: geo_types::Polygon<f64> = polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)],
            interiors: [[(x: 2.0, y: 2.0), (x: 4.0, y: 2.0), (x: 4.0, y: 4.0), (x: 2.0, y: 4.0)]],
        );
        let geometry = geo_types::Geometry::Polygon(geo_polygon);

        let geom = Geom::try_from(&geometry).expect("conversion failed");
        let Geom::Polygon(polygon) = &geom else {
            panic!("invalid geometry type");
        };
        assert_eq!(polygon.exterior.points().len(), 5);
        assert_eq!(polygon.interiors.len(), 1);

        let back = geo_types::Geometry::try_from(&geom).expect("conversion failed");
        assert_eq!(back, geometry);
    }

    #[test]
    fn line_to_geo_types() {
        let geom: Geom<Point2<f64>> =
            LineString::new(vec![Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)]).into();
        let geometry = geo_types::Geometry::try_from(&geom).expect("conversion failed");
        assert_eq!(
            geometry,
            geo_types::Geometry::LineString(line_string![(x: 1.0, y: 2.0), (x: 3.0, y: 4.0)])
        );
    }

    #[test]
    fn collection_to_geo_types() {
        let geom: Geom<Point2<f64>> = GeometryCollection(vec![
            Geom::Point(Some(Point2::new(1.0, 2.0))),
            LineString::new(vec![Point2::new(0.0, 0.0), Point2::new(3.0, 4.0)]).into(),
        ])
        .into();

        let geometry = geo_types::Geometry::try_from(&geom).expect("conversion failed");
        let geo_types::Geometry::GeometryCollection(collection) = &geometry else {
            panic!("invalid geometry type");
        };
        assert_eq!(collection.0.len(), 2);
        assert_eq!(
            collection.0[0],
            geo_types::Geometry::Point(geo_types::Point::new(1.0, 2.0))
        );

        let back = Geom::try_from(&geometry).expect("conversion failed");
        assert_eq!(back, geom);
    }

    #[test]
    fn empty_point_is_not_convertible() {
        let geom = Geom::<Point2<f64>>::Point(None);
        assert_matches!(
            geo_types::Geometry::try_from(&geom),
            Err(GeometryError::Conversion(_))
        );
    }
}
