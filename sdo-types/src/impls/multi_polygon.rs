use serde::{Deserialize, Serialize};

use crate::impls::polygon::Polygon;

/// Simple implementation of the [`MultiPolygon`](crate::MultiPolygon) trait.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MultiPolygon<P>(pub Vec<Polygon<P>>);

impl<P> Default for MultiPolygon<P> {
    fn default() -> Self {
        Self(vec![])
    }
}

impl<P> crate::multi_polygon::MultiPolygon for MultiPolygon<P> {
    type Polygon = Polygon<P>;

    fn polygons(&self) -> impl Iterator<Item = &Self::Polygon> {
        self.0.iter()
    }
}

impl<P> From<Vec<Polygon<P>>> for MultiPolygon<P> {
    fn from(value: Vec<Polygon<P>>) -> Self {
        Self(value)
    }
}
