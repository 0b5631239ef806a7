//! Quadratic outline to path conversion.

use core::fmt;

use outline_types::PointTag;

use super::pen::OutlinePen;
use super::{Outline, OutlinePoint};

/// Errors that can occur when converting an outline to a path.
#[derive(Clone, Debug)]
pub enum ToPathError {
    /// A curve ended at this point index with no control point pending.
    ///
    /// Unreachable for outlines built through [`Outline::new`]; raised
    /// rather than swallowed so a broken walk can never emit a
    /// half-formed curve.
    MissingOffCurve(usize),
}

impl fmt::Display for ToPathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingOffCurve(ix) => write!(
                f,
                "Expected a pending off-curve control point at index {ix}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ToPathError {}

/// Converts an outline described by points, tags and contour end points
/// to a sequence of path commands and invokes the appropriate callback
/// on the given pen for each.
///
/// All contours concatenate into a single path, terminated by exactly
/// one `close` (also for an empty outline). The emitted Y coordinates
/// are negated: fonts put Y up, path consumers put Y down.
pub(crate) fn to_path(
    outline: &Outline,
    pen: &mut impl OutlinePen,
) -> Result<(), ToPathError> {
    let mut contour_start = 0usize;
    for contour in outline.contours() {
        contour_to_path(contour, pen).map_err(|e| match e {
            ToPathError::MissingOffCurve(ix) => {
                ToPathError::MissingOffCurve(ix + contour_start)
            }
        })?;
        contour_start += contour.len();
    }
    pen.close();
    Ok(())
}

fn contour_to_path(
    points: &[OutlinePoint],
    pen: &mut impl OutlinePen,
) -> Result<(), ToPathError> {
    // Contours are never empty; Outline::new guarantees it.
    let first = points[0];
    let last = points[points.len() - 1];

    // Select the on-curve point the path starts from. A contour whose
    // first point is a control point either wraps around to an on-curve
    // last point, or starts at the implied midpoint when the last point
    // is a control point too.
    let (first_pt, mut curve_pt, start) = if first.on_curve() {
        (first.coords(), None, 1)
    } else if last.on_curve() {
        (last.coords(), Some(first.coords()), 0)
    } else {
        (first.coords().midpoint(last.coords()), Some(first.coords()), 0)
    };
    pen.move_to(first_pt.x, -first_pt.y);

    for j in start..points.len() {
        let pt = points[j];
        let (prev, prev_tag) = if j == 0 {
            (first_pt, PointTag::OnCurve)
        } else {
            (points[j - 1].coords(), points[j - 1].tag)
        };
        match (prev_tag, pt.tag) {
            (PointTag::OnCurve, PointTag::OnCurve) => {
                pen.line_to(pt.x, -pt.y);
            }
            (PointTag::OnCurve, PointTag::OffCurve) => {
                curve_pt = Some(pt.coords());
            }
            (PointTag::OffCurve, PointTag::OffCurve) => {
                // Two consecutive control points imply an on-curve
                // point at their midpoint.
                let mid = prev.midpoint(pt.coords());
                pen.quad_to(prev.x, -prev.y, mid.x, -mid.y);
                curve_pt = Some(pt.coords());
            }
            (PointTag::OffCurve, PointTag::OnCurve) => {
                let control = curve_pt
                    .take()
                    .ok_or(ToPathError::MissingOffCurve(j))?;
                pen.quad_to(control.x, -control.y, pt.x, -pt.y);
            }
        }
    }

    // Close the contour with an explicit segment back to the start,
    // unless the walk already returned there. Equality is by
    // coordinates: a synthesized start that coincides with the last
    // point would only produce a zero-length closing edge.
    if first_pt != last.coords() {
        match curve_pt {
            Some(control) => {
                pen.quad_to(control.x, -control.y, first_pt.x, -first_pt.y)
            }
            None => pen.line_to(first_pt.x, -first_pt.y),
        }
    }
    Ok(())
}
