//! Element description table (`SDO_ELEM_INFO`): a flat sequence of
//! `(offset, element type, interpretation)` triplets that tells how the ordinate array is split
//! into points, lines and polygon rings.

use std::iter::Peekable;
use std::marker::PhantomData;
use std::slice::ChunksExact;

use sdo_types::cartesian::{CartesianClosedContour, Winding};
use sdo_types::impls::{LineString, LinearRing, Polygon};

use crate::error::SdoError;
use crate::ordinates::{self, SdoCoordinate};

/// Interpretation of an element made of straight line segments.
pub const INTERPRETATION_STRAIGHT: i32 = 1;
/// Interpretation of an element made of circular arcs.
pub const INTERPRETATION_ARC: i32 = 2;
/// Interpretation of a ring stored as two opposite corners of a rectangle.
pub const INTERPRETATION_RECTANGLE: i32 = 3;
/// Interpretation of a ring stored as a circle through three points.
pub const INTERPRETATION_CIRCLE: i32 = 4;

/// Element type (`SDO_ETYPE`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// User defined element, skipped by the reader.
    Custom,
    /// Point or point cluster.
    Point,
    /// Line string.
    Line,
    /// Polygon ring without exterior/interior qualification.
    Polygon,
    /// Exterior polygon ring.
    PolygonExterior,
    /// Interior polygon ring.
    PolygonInterior,
    /// Exterior ring of a surface.
    FaceExterior,
    /// Interior ring of a surface.
    FaceInterior,
    /// Line made of several sub-elements.
    Compound,
    /// Polygon ring made of several sub-elements without exterior/interior qualification.
    CompoundPolygon,
    /// Exterior polygon ring made of several sub-elements.
    CompoundPolygonExterior,
    /// Interior polygon ring made of several sub-elements.
    CompoundPolygonInterior,
}

impl ElementType {
    /// Element type with the given code, `None` for unknown codes.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::Custom,
            1 => Self::Point,
            2 => Self::Line,
            3 => Self::Polygon,
            1003 => Self::PolygonExterior,
            2003 => Self::PolygonInterior,
            1007 => Self::FaceExterior,
            2006 => Self::FaceInterior,
            4 => Self::Compound,
            5 => Self::CompoundPolygon,
            1005 => Self::CompoundPolygonExterior,
            2005 => Self::CompoundPolygonInterior,
            _ => return None,
        })
    }

    /// Code stored in the element table.
    pub fn code(self) -> i32 {
        match self {
            Self::Custom => 0,
            Self::Point => 1,
            Self::Line => 2,
            Self::Polygon => 3,
            Self::PolygonExterior => 1003,
            Self::PolygonInterior => 2003,
            Self::FaceExterior => 1007,
            Self::FaceInterior => 2006,
            Self::Compound => 4,
            Self::CompoundPolygon => 5,
            Self::CompoundPolygonExterior => 1005,
            Self::CompoundPolygonInterior => 2005,
        }
    }

    /// Ring that always starts a new polygon.
    fn is_exterior_ring(self) -> bool {
        matches!(
            self,
            Self::PolygonExterior | Self::FaceExterior | Self::CompoundPolygonExterior
        )
    }

    /// Ring that always belongs to the preceding polygon.
    fn is_interior_ring(self) -> bool {
        matches!(
            self,
            Self::PolygonInterior | Self::FaceInterior | Self::CompoundPolygonInterior
        )
    }

    /// Ring that is exterior when it starts a polygon, and interior otherwise.
    fn is_unqualified_ring(self) -> bool {
        matches!(self, Self::Polygon | Self::CompoundPolygon)
    }

    /// Element whose `interpretation` is the number of sub-elements that follow it.
    fn is_compound(self) -> bool {
        matches!(
            self,
            Self::Compound
                | Self::CompoundPolygon
                | Self::CompoundPolygonExterior
                | Self::CompoundPolygonInterior
        )
    }
}

/// One triplet of the element table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ElementEntry {
    /// 1-based index of the first ordinate of the element.
    pub offset: i32,
    /// Element type code, see [`ElementType`].
    pub etype: i32,
    /// Meaning depends on the element type: number of sub-elements for compound elements,
    /// number of points for point elements, and the way of connecting points otherwise.
    pub interpretation: i32,
}

impl ElementEntry {
    /// Creates an entry with a 1-based ordinate offset.
    pub fn new(offset: usize, element_type: ElementType, interpretation: i32) -> Self {
        Self {
            offset: offset as i32,
            etype: element_type.code(),
            interpretation,
        }
    }

    /// Decodes the element type, failing for unknown codes.
    pub fn element_type(&self) -> Result<ElementType, SdoError> {
        ElementType::from_code(self.etype).ok_or_else(|| {
            SdoError::MalformedElementTable(format!(
                "unknown element type {} at offset {}",
                self.etype, self.offset
            ))
        })
    }

    fn start(&self) -> Result<usize, SdoError> {
        usize::try_from(self.offset)
            .ok()
            .filter(|offset| *offset > 0)
            .ok_or_else(|| {
                SdoError::OrdinateRangeError(format!("invalid element offset {}", self.offset))
            })
    }

    fn unsupported_curve(&self) -> SdoError {
        SdoError::UnsupportedCurve {
            offset: self.offset,
            interpretation: self.interpretation,
        }
    }

    fn malformed(&self, reason: &str) -> SdoError {
        SdoError::MalformedElementTable(format!(
            "{reason} (element {}, {}, {})",
            self.offset, self.etype, self.interpretation
        ))
    }

    /// Appends the entry to an element table.
    pub fn write(&self, elem_info: &mut Vec<i32>) {
        elem_info.extend_from_slice(&[self.offset, self.etype, self.interpretation]);
    }
}

/// Lazy iterator over the triplets of an element table.
pub struct ElementEntries<'a> {
    inner: ChunksExact<'a, i32>,
    coordinate_dimension: Option<i32>,
}

impl<'a> ElementEntries<'a> {
    /// Fails if the table length is not a multiple of 3.
    pub fn new(elem_info: &'a [i32]) -> Result<Self, SdoError> {
        if elem_info.len() % 3 != 0 {
            return Err(SdoError::MalformedElementTable(format!(
                "table length {} is not a multiple of 3",
                elem_info.len()
            )));
        }

        Ok(Self {
            inner: elem_info.chunks_exact(3),
            coordinate_dimension: None,
        })
    }

    /// Makes the iterator treat offsets of the table as 1-based coordinate indices and convert
    /// them into ordinate offsets.
    pub fn with_coordinate_offsets(mut self, dimension: u8) -> Self {
        self.coordinate_dimension = Some(i32::from(dimension));
        self
    }
}

impl Iterator for ElementEntries<'_> {
    type Item = ElementEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let triplet = self.inner.next()?;
        let offset = match self.coordinate_dimension {
            Some(dimension) => (triplet[0] - 1) * dimension + 1,
            None => triplet[0],
        };

        Some(ElementEntry {
            offset,
            etype: triplet[1],
            interpretation: triplet[2],
        })
    }
}

/// Some writers store element offsets as coordinate indices instead of ordinate indices. Such a
/// table is recognized when its offsets do not address coordinate boundaries of the ordinate
/// array, but, read as coordinate indices, they are ascending and give every element at least the
/// number of coordinates its type needs.
fn uses_coordinate_offsets(elem_info: &[i32], dimension: usize, ordinate_count: usize) -> bool {
    let offsets: Vec<usize> = elem_info
        .chunks_exact(3)
        .map(|triplet| usize::try_from(triplet[0]).unwrap_or_default())
        .collect();

    let aligned = offsets
        .iter()
        .all(|offset| *offset >= 1 && (offset - 1) % dimension == 0 && *offset <= ordinate_count);
    if aligned {
        return false;
    }

    let coordinate_count = ordinate_count / dimension;
    elem_info.chunks_exact(3).enumerate().all(|(index, triplet)| {
        let offset = offsets[index];
        // Compound headers share the offset of their first sub-element.
        let end = offsets[index + 1..]
            .iter()
            .find(|next| **next != offset)
            .copied()
            .unwrap_or(coordinate_count + 1);

        offset >= 1 && end > offset && end - offset >= min_coordinates(triplet[1], triplet[2])
    })
}

/// Smallest number of coordinates an element of the given type can have.
fn min_coordinates(etype: i32, interpretation: i32) -> usize {
    match ElementType::from_code(etype) {
        Some(ElementType::Line | ElementType::Compound) => 2,
        Some(t) if t.is_exterior_ring() || t.is_interior_ring() || t.is_unqualified_ring() => {
            if interpretation == INTERPRETATION_RECTANGLE {
                2
            } else {
                LinearRing::<()>::MIN_POINTS
            }
        }
        _ => 1,
    }
}

/// Logical part of a geometry described by one or more element table entries.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementUnit<P> {
    /// A point element. Contains more than one point for point clusters.
    Points(Vec<P>),
    /// A line or compound line.
    Line(LineString<P>),
    /// An exterior ring with the holes that follow it.
    Polygon(Polygon<P>),
}

impl<P> ElementUnit<P> {
    /// Name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            ElementUnit::Points(_) => "point",
            ElementUnit::Line(_) => "line",
            ElementUnit::Polygon(_) => "polygon",
        }
    }
}

/// Walks the element table and groups entries into [`ElementUnit`]s, reading the coordinates of
/// each unit from the ordinate array.
///
/// After the first error the walker stops producing items.
pub struct ElementTableWalker<'a, P> {
    entries: Peekable<ElementEntries<'a>>,
    ordinates: &'a [f64],
    can_continue: bool,
    _point: PhantomData<P>,
}

impl<'a, P: SdoCoordinate> ElementTableWalker<'a, P> {
    /// Creates a walker over a record's element table and ordinate array.
    pub fn new(elem_info: &'a [i32], ordinates: &'a [f64]) -> Result<Self, SdoError> {
        if ordinates.len() % usize::from(P::DIMENSION) != 0 {
            return Err(SdoError::OrdinateRangeError(format!(
                "ordinate array length {} is not a multiple of dimension {}",
                ordinates.len(),
                P::DIMENSION
            )));
        }

        let mut entries = ElementEntries::new(elem_info)?;
        if uses_coordinate_offsets(elem_info, usize::from(P::DIMENSION), ordinates.len()) {
            log::debug!("Element table offsets are read as coordinate indices");
            entries = entries.with_coordinate_offsets(P::DIMENSION);
        }

        Ok(Self {
            entries: entries.peekable(),
            ordinates,
            can_continue: true,
            _point: PhantomData,
        })
    }

    /// Exclusive 1-based ordinate offset where the element that was consumed last ends.
    fn current_end(&mut self) -> Result<usize, SdoError> {
        match self.entries.peek() {
            Some(next) => next.start(),
            None => Ok(self.ordinates.len() + 1),
        }
    }

    fn read_coordinates(&mut self, entry: &ElementEntry) -> Result<Vec<P>, SdoError> {
        let start = entry.start()?;
        let end = self.current_end()?;
        let count = ordinates::coordinate_count::<P>(start, end)?;
        if count == 0 {
            return Err(SdoError::OrdinateRangeError(format!(
                "element at offset {start} has no coordinates"
            )));
        }

        ordinates::slice(self.ordinates, start, count)
    }

    /// Consumes the sub-elements of a compound element. Only straight line sub-elements can be
    /// represented.
    fn skip_sub_elements(&mut self, header: &ElementEntry) -> Result<(), SdoError> {
        if header.interpretation < 1 {
            return Err(header.malformed("compound element without sub-elements"));
        }

        for _ in 0..header.interpretation {
            let Some(sub_element) = self.entries.next() else {
                return Err(header.malformed("compound element is missing sub-elements"));
            };
            log::trace!("Sub-element {sub_element:?}");

            if sub_element.element_type()? != ElementType::Line {
                return Err(sub_element.malformed("compound sub-element must be a line"));
            }

            match sub_element.interpretation {
                INTERPRETATION_STRAIGHT => {}
                INTERPRETATION_ARC => return Err(sub_element.unsupported_curve()),
                _ => return Err(sub_element.malformed("invalid sub-element interpretation")),
            }
        }

        Ok(())
    }

    fn read_points(&mut self, entry: &ElementEntry) -> Result<ElementUnit<P>, SdoError> {
        let count = usize::try_from(entry.interpretation)
            .ok()
            .filter(|count| *count > 0)
            .ok_or_else(|| entry.malformed("oriented points are not supported"))?;

        let points = self.read_coordinates(entry)?;
        let points = match (points.len(), count) {
            (found, _) if found == count => points,
            (1, _) => vec![points[0]; count],
            (found, _) => {
                return Err(SdoError::OrdinateRangeError(format!(
                    "point element at offset {} expects {count} coordinate(s), but {found} are stored",
                    entry.offset
                )))
            }
        };

        Ok(ElementUnit::Points(points))
    }

    fn read_line(
        &mut self,
        entry: &ElementEntry,
        element_type: ElementType,
    ) -> Result<ElementUnit<P>, SdoError> {
        if element_type.is_compound() {
            self.skip_sub_elements(entry)?;
        } else {
            match entry.interpretation {
                INTERPRETATION_STRAIGHT => {}
                INTERPRETATION_ARC => return Err(entry.unsupported_curve()),
                _ => return Err(entry.malformed("invalid line interpretation")),
            }
        }

        Ok(ElementUnit::Line(LineString::new(
            self.read_coordinates(entry)?,
        )))
    }

    fn read_ring(
        &mut self,
        entry: &ElementEntry,
        element_type: ElementType,
        winding: Winding,
    ) -> Result<LinearRing<P>, SdoError> {
        if element_type.is_compound() {
            self.skip_sub_elements(entry)?;
            return Ok(LinearRing::new(self.read_coordinates(entry)?)?);
        }

        match entry.interpretation {
            INTERPRETATION_STRAIGHT => Ok(LinearRing::new(self.read_coordinates(entry)?)?),
            INTERPRETATION_RECTANGLE => {
                let corners = self.read_coordinates(entry)?;
                match corners[..] {
                    [a, b] => rectangle_ring(a, b, winding),
                    _ => Err(SdoError::OrdinateRangeError(format!(
                        "rectangle at offset {} must have 2 corners, but has {}",
                        entry.offset,
                        corners.len()
                    ))),
                }
            }
            INTERPRETATION_ARC | INTERPRETATION_CIRCLE => Err(entry.unsupported_curve()),
            _ => Err(entry.malformed("invalid ring interpretation")),
        }
    }

    fn read_polygon(
        &mut self,
        entry: &ElementEntry,
        element_type: ElementType,
    ) -> Result<ElementUnit<P>, SdoError> {
        let exterior = self.read_ring(entry, element_type, Winding::CounterClockwise)?;
        let mut interiors = vec![];

        while let Some(next) = self.entries.peek().copied() {
            let next_type = next.element_type()?;
            if !(next_type.is_interior_ring() || next_type.is_unqualified_ring()) {
                break;
            }

            self.entries.next();
            log::trace!("Interior ring {next:?}");
            interiors.push(self.read_ring(&next, next_type, Winding::Clockwise)?);
        }

        Ok(ElementUnit::Polygon(Polygon::new(exterior, interiors)))
    }

    fn read_unit(&mut self) -> Option<Result<ElementUnit<P>, SdoError>> {
        loop {
            let entry = self.entries.next()?;
            log::trace!("Element {entry:?}");

            let element_type = match entry.element_type() {
                Ok(v) => v,
                Err(e) => return Some(Err(e)),
            };

            return Some(match element_type {
                ElementType::Custom => {
                    log::debug!("Skipping custom element at offset {}", entry.offset);
                    continue;
                }
                ElementType::Point => self.read_points(&entry),
                ElementType::Line | ElementType::Compound => self.read_line(&entry, element_type),
                t if t.is_exterior_ring() || t.is_unqualified_ring() => {
                    self.read_polygon(&entry, element_type)
                }
                _ => Err(entry.malformed("interior ring with no preceding exterior ring")),
            });
        }
    }
}

impl<P: SdoCoordinate> Iterator for ElementTableWalker<'_, P> {
    type Item = Result<ElementUnit<P>, SdoError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.can_continue {
            return None;
        }

        let unit = self.read_unit();
        if let Some(Err(_)) = &unit {
            self.can_continue = false;
        }

        unit
    }
}

/// Builds a closed 5 point ring from two opposite corners of a rectangle. The two synthesized
/// corners get zero for ordinates other than x and y.
fn rectangle_ring<P: SdoCoordinate>(a: P, b: P, winding: Winding) -> Result<LinearRing<P>, SdoError> {
    let ring = LinearRing::new(vec![a, P::planar(b.x(), a.y()), b, P::planar(a.x(), b.y()), a])?;
    if ring.winding() == winding {
        Ok(ring)
    } else {
        Ok(ring.reversed())
    }
}
