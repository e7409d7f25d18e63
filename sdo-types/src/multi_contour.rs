use crate::contour::Contour;

/// Geometry consisting of several contours.
pub trait MultiContour {
    /// Contour type.
    type Contour: Contour;

    /// Iterator over contours.
    fn contours(&self) -> impl Iterator<Item = &Self::Contour>;
}
