/// Geometry consisting of several points.
pub trait MultiPoint {
    /// Point type.
    type Point;

    /// Iterates over points.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;
}
