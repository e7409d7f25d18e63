use serde::{Deserialize, Serialize};

use crate::geometry_type::GeometryType;
use crate::impls::{LineString, MultiLineString, MultiPoint, MultiPolygon, Polygon};

/// Geometry of any supported type.
///
/// All points of one geometry share the same point type `P`, so a geometry cannot mix 2d and 3d
/// coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Geom<P> {
    /// Single point. `None` is the empty point.
    Point(Option<P>),
    /// Line string.
    LineString(LineString<P>),
    /// Polygon.
    Polygon(Polygon<P>),
    /// Multipoint.
    MultiPoint(MultiPoint<P>),
    /// Multi line string.
    MultiLineString(MultiLineString<P>),
    /// Multipolygon.
    MultiPolygon(MultiPolygon<P>),
    /// Ordered collection of geometries of different types.
    GeometryCollection(GeometryCollection<P>),
}

/// Ordered heterogeneous collection of geometries.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GeometryCollection<P>(pub Vec<Geom<P>>);

impl<P> Default for GeometryCollection<P> {
    fn default() -> Self {
        Self(vec![])
    }
}

impl<P> Geom<P> {
    /// Type of the geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geom::Point(_) => GeometryType::Point,
            Geom::LineString(_) => GeometryType::LineString,
            Geom::Polygon(_) => GeometryType::Polygon,
            Geom::MultiPoint(_) => GeometryType::MultiPoint,
            Geom::MultiLineString(_) => GeometryType::MultiLineString,
            Geom::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geom::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// Returns true if the geometry does not contain any points.
    pub fn is_empty(&self) -> bool {
        match self {
            Geom::Point(p) => p.is_none(),
            Geom::LineString(v) => v.is_empty(),
            Geom::Polygon(v) => v.is_empty(),
            Geom::MultiPoint(v) => v.0.is_empty(),
            Geom::MultiLineString(v) => v.0.iter().all(LineString::is_empty),
            Geom::MultiPolygon(v) => v.0.iter().all(Polygon::is_empty),
            Geom::GeometryCollection(v) => v.0.iter().all(Geom::is_empty),
        }
    }

    /// Canonical empty geometry of the given type.
    pub fn empty(geometry_type: GeometryType) -> Self {
        match geometry_type {
            GeometryType::Point => Geom::Point(None),
            GeometryType::LineString => Geom::LineString(LineString::default()),
            GeometryType::Polygon => Geom::Polygon(Polygon::empty()),
            GeometryType::MultiPoint => Geom::MultiPoint(MultiPoint::default()),
            GeometryType::MultiLineString => Geom::MultiLineString(MultiLineString::default()),
            GeometryType::MultiPolygon => Geom::MultiPolygon(MultiPolygon::default()),
            GeometryType::GeometryCollection => {
                Geom::GeometryCollection(GeometryCollection::default())
            }
        }
    }
}

impl<P> From<P> for Geom<P> {
    fn from(value: P) -> Self {
        Self::Point(Some(value))
    }
}

impl<P> From<LineString<P>> for Geom<P> {
    fn from(value: LineString<P>) -> Self {
        Self::LineString(value)
    }
}

impl<P> From<Polygon<P>> for Geom<P> {
    fn from(value: Polygon<P>) -> Self {
        Self::Polygon(value)
    }
}

impl<P> From<MultiPoint<P>> for Geom<P> {
    fn from(value: MultiPoint<P>) -> Self {
        Self::MultiPoint(value)
    }
}

impl<P> From<MultiLineString<P>> for Geom<P> {
    fn from(value: MultiLineString<P>) -> Self {
        Self::MultiLineString(value)
    }
}

impl<P> From<MultiPolygon<P>> for Geom<P> {
    fn from(value: MultiPolygon<P>) -> Self {
        Self::MultiPolygon(value)
    }
}

impl<P> From<GeometryCollection<P>> for Geom<P> {
    fn from(value: GeometryCollection<P>) -> Self {
        Self::GeometryCollection(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;

    #[test]
    fn empty_geometries() {
        for geometry_type in [
            GeometryType::Point,
            GeometryType::LineString,
            GeometryType::Polygon,
            GeometryType::MultiPoint,
            GeometryType::MultiLineString,
            GeometryType::MultiPolygon,
            GeometryType::GeometryCollection,
        ] {
            let geom = Geom::<Point2d>::empty(geometry_type);
            assert!(geom.is_empty());
            assert_eq!(geom.geometry_type(), geometry_type);
        }
    }

    #[test]
    fn empty_geometries_do_not_need_default_points() {
        #[derive(Debug, PartialEq)]
        struct Vertex;

        let geom = Geom::<Vertex>::empty(GeometryType::MultiPolygon);
        assert!(geom.is_empty());
        assert_eq!(GeometryCollection::<Vertex>::default().0, vec![]);
        assert!(LineString::<Vertex>::default().is_empty());
    }

    #[test]
    fn collection_of_empty_members_is_empty() {
        let collection: Geom<Point2d> = GeometryCollection(vec![
            Geom::Point(None),
            Geom::Polygon(Polygon::empty()),
        ])
        .into();
        assert!(collection.is_empty());

        let collection: Geom<Point2d> =
            GeometryCollection(vec![Geom::Point(None), Point2d::new(1.0, 1.0).into()]).into();
        assert!(!collection.is_empty());
    }
}
