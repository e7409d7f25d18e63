use serde::{Deserialize, Serialize};

use crate::cartesian::CartesianPoint2d;
use crate::impls::contour::LineString;

/// Simple implementation of the [`MultiContour`](crate::MultiContour) trait.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MultiLineString<P>(pub Vec<LineString<P>>);

impl<P> Default for MultiLineString<P> {
    fn default() -> Self {
        Self(vec![])
    }
}

impl<P: CartesianPoint2d> crate::multi_contour::MultiContour for MultiLineString<P> {
    type Contour = LineString<P>;

    fn contours(&self) -> impl Iterator<Item = &Self::Contour> {
        self.0.iter()
    }
}

impl<P> From<Vec<LineString<P>>> for MultiLineString<P> {
    fn from(value: Vec<LineString<P>>) -> Self {
        Self(value)
    }
}
