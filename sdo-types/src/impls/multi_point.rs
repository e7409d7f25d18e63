use serde::{Deserialize, Serialize};

/// Simple implementation of the [`MultiPoint`](crate::MultiPoint) trait.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MultiPoint<P>(pub Vec<P>);

impl<P> Default for MultiPoint<P> {
    fn default() -> Self {
        Self(vec![])
    }
}

impl<P> crate::multi_point::MultiPoint for MultiPoint<P> {
    type Point = P;

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        self.0.iter()
    }
}

impl<P> From<Vec<P>> for MultiPoint<P> {
    fn from(value: Vec<P>) -> Self {
        Self(value)
    }
}
