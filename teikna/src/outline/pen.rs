//! Types for collecting the output when drawing a glyph outline.

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Write};

/// Interface for accepting a sequence of path commands.
///
/// Coordinates are integer font units. The path builder hands out
/// Y-down coordinates, so a pen can forward them to a vector renderer
/// unchanged.
pub trait OutlinePen {
    /// Emit a command to begin a new subpath at (x, y).
    fn move_to(&mut self, x: i32, y: i32);

    /// Emit a line segment from the current point to (x, y).
    fn line_to(&mut self, x: i32, y: i32);

    /// Emit a quadratic bezier segment from the current point with a
    /// control point at (cx0, cy0) and ending at (x, y).
    fn quad_to(&mut self, cx0: i32, cy0: i32, x: i32, y: i32);

    /// Emit a command to close the path.
    fn close(&mut self);
}

/// Single element of a path.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PathElement {
    /// Begin a new subpath at (x, y).
    MoveTo {
        /// Subpath start, x.
        x: i32,
        /// Subpath start, y.
        y: i32,
    },
    /// Draw a line from the current point to (x, y).
    LineTo {
        /// Line end, x.
        x: i32,
        /// Line end, y.
        y: i32,
    },
    /// Draw a quadratic bezier from the current point with a control
    /// point at (cx0, cy0) and ending at (x, y).
    QuadTo {
        /// Control point, x.
        cx0: i32,
        /// Control point, y.
        cy0: i32,
        /// Curve end, x.
        x: i32,
        /// Curve end, y.
        y: i32,
    },
    /// Close the path.
    Close,
}

impl PathElement {
    /// Replays this element onto a pen.
    pub fn replay(self, pen: &mut impl OutlinePen) {
        match self {
            Self::MoveTo { x, y } => pen.move_to(x, y),
            Self::LineTo { x, y } => pen.line_to(x, y),
            Self::QuadTo { cx0, cy0, x, y } => pen.quad_to(cx0, cy0, x, y),
            Self::Close => pen.close(),
        }
    }
}

impl OutlinePen for Vec<PathElement> {
    fn move_to(&mut self, x: i32, y: i32) {
        self.push(PathElement::MoveTo { x, y })
    }

    fn line_to(&mut self, x: i32, y: i32) {
        self.push(PathElement::LineTo { x, y })
    }

    fn quad_to(&mut self, cx0: i32, cy0: i32, x: i32, y: i32) {
        self.push(PathElement::QuadTo { cx0, cy0, x, y })
    }

    fn close(&mut self) {
        self.push(PathElement::Close)
    }
}

/// Pen that drops all drawing output into the ether.
pub struct NullPen;

impl OutlinePen for NullPen {
    fn move_to(&mut self, _x: i32, _y: i32) {}
    fn line_to(&mut self, _x: i32, _y: i32) {}
    fn quad_to(&mut self, _cx0: i32, _cy0: i32, _x: i32, _y: i32) {}
    fn close(&mut self) {}
}

/// Pen that generates SVG style path data.
///
/// Command tokens are emitted back to back with no separator between
/// them; arguments within a token are space separated, and the single
/// closing command is a lowercase `z`. The result drops straight into
/// an SVG `path` element's `d` attribute.
#[derive(Clone, Default, Debug)]
pub struct SvgPen(String);

impl SvgPen {
    /// Creates a new, empty SVG pen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the content of the internal string.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl core::ops::Deref for SvgPen {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl OutlinePen for SvgPen {
    fn move_to(&mut self, x: i32, y: i32) {
        let _ = write!(self.0, "M{x} {y}");
    }

    fn line_to(&mut self, x: i32, y: i32) {
        let _ = write!(self.0, "L{x} {y}");
    }

    fn quad_to(&mut self, cx0: i32, cy0: i32, x: i32, y: i32) {
        let _ = write!(self.0, "Q{cx0} {cy0} {x} {y}");
    }

    fn close(&mut self) {
        self.0.push('z');
    }
}

impl AsRef<str> for SvgPen {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl From<String> for SvgPen {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<SvgPen> for String {
    fn from(value: SvgPen) -> Self {
        value.0
    }
}

impl fmt::Display for SvgPen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_pen_token_format() {
        let mut pen = SvgPen::new();
        pen.move_to(1, 2);
        pen.line_to(-3, 4);
        pen.quad_to(5, -6, 7, 8);
        pen.close();
        assert_eq!(pen.as_ref(), "M1 2L-3 4Q5 -6 7 8z");
        pen.clear();
        assert_eq!(pen.as_ref(), "");
    }

    #[test]
    fn vec_pen_collects_elements() {
        let mut pen: Vec<PathElement> = Vec::new();
        pen.move_to(0, 0);
        pen.quad_to(1, 1, 2, 0);
        pen.close();
        assert_eq!(
            pen,
            [
                PathElement::MoveTo { x: 0, y: 0 },
                PathElement::QuadTo {
                    cx0: 1,
                    cy0: 1,
                    x: 2,
                    y: 0
                },
                PathElement::Close,
            ]
        );
    }

    #[test]
    fn replay_round_trips_through_a_pen() {
        let elements = [
            PathElement::MoveTo { x: 9, y: -9 },
            PathElement::LineTo { x: 0, y: 1 },
            PathElement::Close,
        ];
        let mut collected: Vec<PathElement> = Vec::new();
        for element in elements {
            element.replay(&mut collected);
        }
        assert_eq!(collected, elements);
    }
}
