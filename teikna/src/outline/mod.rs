//! Decoded glyph outlines and their contours.
//!
//! An [`Outline`] is an immutable snapshot of one glyph's outline,
//! decoded from the raw record borrowed out of the engine's glyph slot.
//! It validates the contour structure up front so that everything
//! downstream (segmentation, path reconstruction) is infallible or
//! nearly so.

mod path;
mod pen;

use alloc::{string::String, vec::Vec};
use core::fmt;

use outline_types::{Point, PointTag};

pub use path::ToPathError;
pub use pen::{NullPen, OutlinePen, PathElement, SvgPen};

/// Raw outline record for one glyph, borrowed from the engine's glyph
/// slot.
///
/// The engine exposes a flat array of coordinate words, one tag byte
/// per point, and the index of each contour's last point. Point and
/// contour counts are implied by the slice lengths; `coords` holds
/// interleaved x, y pairs and must be exactly twice as long as `tags`.
#[derive(Copy, Clone, Default, Debug)]
pub struct RawOutline<'a> {
    /// Interleaved x, y coordinate pairs in font units, Y up.
    pub coords: &'a [i32],
    /// Tag byte for each point; the low bit is the on-curve flag.
    pub tags: &'a [u8],
    /// Index of the last point of each contour, strictly increasing.
    pub contour_ends: &'a [u16],
}

impl<'a> RawOutline<'a> {
    /// Number of points in the record.
    pub fn point_count(&self) -> usize {
        self.tags.len()
    }

    /// Number of contours in the record.
    pub fn contour_count(&self) -> usize {
        self.contour_ends.len()
    }
}

/// One decoded point of a glyph outline.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct OutlinePoint {
    /// X coordinate in font units.
    pub x: i32,
    /// Y coordinate in font units, Y up.
    pub y: i32,
    /// Curve membership decoded from the point's tag byte.
    pub tag: PointTag,
}

impl OutlinePoint {
    /// Returns true if the curve passes through this point.
    #[inline]
    pub fn on_curve(&self) -> bool {
        self.tag.is_on_curve()
    }

    #[inline]
    pub(crate) fn coords(&self) -> Point<i32> {
        Point::new(self.x, self.y)
    }
}

/// Errors produced when a raw outline record is structurally corrupt.
///
/// These indicate bad data from the engine; nothing here is retried or
/// repaired.
#[derive(Clone, Debug)]
pub enum MalformedOutline {
    /// The record has points but no contour end indices.
    MissingContours {
        /// Number of points left unclaimed by any contour.
        point_count: usize,
    },
    /// The coordinate array does not hold one x, y pair per tag byte.
    CoordCountMismatch {
        /// Twice the number of tag bytes.
        expected: usize,
        /// Length of the coordinate array actually supplied.
        actual: usize,
    },
    /// Contour end at this index points past the last point.
    ContourOutOfBounds(usize),
    /// Contour end at this index was not greater than its predecessor.
    ContourOrder(usize),
    /// The final contour end leaves trailing points outside any contour.
    TrailingPoints {
        /// The final contour end index.
        contour_end: usize,
        /// Total number of points in the record.
        point_count: usize,
    },
}

impl fmt::Display for MalformedOutline {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingContours { point_count } => {
                write!(f, "Outline has {point_count} points but no contours")
            }
            Self::CoordCountMismatch { expected, actual } => write!(
                f,
                "Expected {expected} coordinate words for the given tags, got {actual}"
            ),
            Self::ContourOutOfBounds(ix) => {
                write!(f, "Contour end point at index {ix} is out of range")
            }
            Self::ContourOrder(ix) => write!(
                f,
                "Contour end point at index {ix} was not greater than its preceding end point"
            ),
            Self::TrailingPoints {
                contour_end,
                point_count,
            } => write!(
                f,
                "Final contour ends at point {contour_end} but the outline has {point_count} points"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MalformedOutline {}

/// A decoded, immutable snapshot of one glyph's outline.
///
/// Built once per glyph query and read-only thereafter. The points of
/// all contours are stored as one flat sequence; [`Self::contours`]
/// derives the per-contour views.
#[derive(Clone, Debug)]
pub struct Outline {
    points: Vec<OutlinePoint>,
    contour_ends: Vec<u16>,
}

impl Outline {
    /// Decodes a raw outline record, validating its contour structure.
    ///
    /// A record with no points and no contours is a valid empty
    /// outline (the glyph for a space character, for example).
    pub fn new(raw: &RawOutline) -> Result<Self, MalformedOutline> {
        let point_count = raw.tags.len();
        if raw.coords.len() != point_count * 2 {
            return Err(MalformedOutline::CoordCountMismatch {
                expected: point_count * 2,
                actual: raw.coords.len(),
            });
        }
        if raw.contour_ends.is_empty() && point_count > 0 {
            return Err(MalformedOutline::MissingContours { point_count });
        }
        let mut prev_end = None;
        for (i, &end) in raw.contour_ends.iter().enumerate() {
            if end as usize >= point_count {
                return Err(MalformedOutline::ContourOutOfBounds(i));
            }
            if prev_end.is_some_and(|prev| end <= prev) {
                return Err(MalformedOutline::ContourOrder(i));
            }
            prev_end = Some(end);
        }
        if let Some(&last) = raw.contour_ends.last() {
            if last as usize != point_count - 1 {
                return Err(MalformedOutline::TrailingPoints {
                    contour_end: last as usize,
                    point_count,
                });
            }
        }
        let coords: &[Point<i32>] = bytemuck::cast_slice(raw.coords);
        let points = coords
            .iter()
            .zip(raw.tags)
            .map(|(point, tag)| OutlinePoint {
                x: point.x,
                y: point.y,
                tag: PointTag::from_bits(*tag),
            })
            .collect();
        Ok(Self {
            points,
            contour_ends: raw.contour_ends.to_vec(),
        })
    }

    /// The points of all contours as one flat sequence.
    pub fn points(&self) -> &[OutlinePoint] {
        &self.points
    }

    /// Index of the last point of each contour.
    pub fn contour_ends(&self) -> &[u16] {
        &self.contour_ends
    }

    /// Returns true if the outline has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns an iterator over the outline's contours.
    ///
    /// The yielded slices are non-empty and partition [`Self::points`]
    /// exactly. The iterator borrows the outline, so it can be created
    /// again for another pass.
    pub fn contours(&self) -> Contours<'_> {
        Contours {
            points: &self.points,
            ends: self.contour_ends.iter(),
            start: 0,
        }
    }

    /// Reconstructs the outline's path as a sequence of instructions.
    ///
    /// Either the complete sequence is returned or an error is; a
    /// failed conversion yields no instructions at all.
    pub fn to_path_elements(&self) -> Result<Vec<PathElement>, ToPathError> {
        let mut elements = Vec::new();
        path::to_path(self, &mut elements)?;
        Ok(elements)
    }

    /// Reconstructs the outline's path and replays it onto a pen.
    ///
    /// The pen sees nothing unless the whole conversion succeeds.
    pub fn draw(&self, pen: &mut impl OutlinePen) -> Result<(), ToPathError> {
        for element in self.to_path_elements()? {
            element.replay(pen);
        }
        Ok(())
    }

    /// Renders the outline's path in SVG path data syntax.
    pub fn to_svg(&self) -> Result<String, ToPathError> {
        let mut pen = SvgPen::new();
        self.draw(&mut pen)?;
        Ok(pen.into())
    }
}

/// Iterator over the contours of an outline.
///
/// Created with [`Outline::contours`]. Yields each contour's points;
/// contour `i` spans the points from the end of contour `i - 1`
/// (exclusive) through `contour_ends[i]` (inclusive).
#[derive(Clone)]
pub struct Contours<'a> {
    points: &'a [OutlinePoint],
    ends: core::slice::Iter<'a, u16>,
    start: usize,
}

impl<'a> Iterator for Contours<'a> {
    type Item = &'a [OutlinePoint];

    fn next(&mut self) -> Option<Self::Item> {
        let end = *self.ends.next()? as usize;
        let contour = &self.points[self.start..=end];
        self.start = end + 1;
        Some(contour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw<'a>(
        coords: &'a [i32],
        tags: &'a [u8],
        contour_ends: &'a [u16],
    ) -> RawOutline<'a> {
        RawOutline {
            coords,
            tags,
            contour_ends,
        }
    }

    #[test]
    fn empty_record_is_a_valid_outline() {
        let outline = Outline::new(&RawOutline::default()).unwrap();
        assert!(outline.is_empty());
        assert_eq!(outline.contours().count(), 0);
    }

    #[test]
    fn points_without_contours_are_rejected() {
        let result = Outline::new(&raw(&[0, 0, 10, 0], &[1, 1], &[]));
        assert!(matches!(
            result,
            Err(MalformedOutline::MissingContours { point_count: 2 })
        ));
    }

    #[test]
    fn coord_tag_mismatch_is_rejected() {
        let result = Outline::new(&raw(&[0, 0, 10], &[1, 1], &[1]));
        assert!(matches!(
            result,
            Err(MalformedOutline::CoordCountMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn out_of_range_contour_end_is_rejected() {
        let result = Outline::new(&raw(&[0, 0, 10, 0], &[1, 1], &[2]));
        assert!(matches!(
            result,
            Err(MalformedOutline::ContourOutOfBounds(0))
        ));
    }

    #[test]
    fn decreasing_contour_ends_are_rejected() {
        let coords = [0i32; 12];
        let tags = [1u8; 6];
        let result = Outline::new(&raw(&coords, &tags, &[5, 3]));
        assert!(matches!(result, Err(MalformedOutline::ContourOrder(1))));
    }

    #[test]
    fn trailing_points_are_rejected() {
        let coords = [0i32; 8];
        let tags = [1u8; 4];
        let result = Outline::new(&raw(&coords, &tags, &[2]));
        assert!(matches!(
            result,
            Err(MalformedOutline::TrailingPoints {
                contour_end: 2,
                point_count: 4
            })
        ));
    }

    #[test]
    fn contours_partition_points() {
        let coords = [0, 0, 10, 0, 10, 10, 4, 4, 6, 4, 5, 6];
        let tags = [1u8; 6];
        let outline = Outline::new(&raw(&coords, &tags, &[2, 5])).unwrap();
        let contours: Vec<_> = outline.contours().collect();
        assert_eq!(contours.len(), 2);
        assert!(contours.iter().all(|c| !c.is_empty()));
        let total: usize = contours.iter().map(|c| c.len()).sum();
        assert_eq!(total, outline.points().len());
        let flattened: Vec<OutlinePoint> =
            contours.iter().flat_map(|c| c.iter().copied()).collect();
        assert_eq!(flattened, outline.points());
    }

    #[test]
    fn contours_are_restartable() {
        let coords = [0, 0, 10, 0, 10, 10, 4, 4, 6, 4, 5, 6];
        let tags = [1u8; 6];
        let outline = Outline::new(&raw(&coords, &tags, &[2, 5])).unwrap();
        let first_pass: Vec<_> = outline.contours().collect();
        let second_pass: Vec<_> = outline.contours().collect();
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn tags_decode_once_at_construction() {
        // Marker bits above the on-curve bit must not survive decoding.
        let coords = [0, 0, 10, 0, 10, 10];
        let outline = Outline::new(&raw(&coords, &[0x11, 0x40, 0x01], &[2])).unwrap();
        let tags: Vec<_> = outline.points().iter().map(|p| p.tag).collect();
        assert_eq!(
            tags,
            [PointTag::OnCurve, PointTag::OffCurve, PointTag::OnCurve]
        );
    }

    #[test]
    fn single_point_contours_are_preserved() {
        let coords = [5, 7, 20, 30];
        let outline = Outline::new(&raw(&coords, &[1, 1], &[0, 1])).unwrap();
        let contours: Vec<_> = outline.contours().collect();
        assert_eq!(contours.len(), 2);
        assert_eq!(contours[0].len(), 1);
        assert_eq!(contours[1].len(), 1);
        assert_eq!(contours[0][0].coords(), Point::new(5, 7));
    }
}
