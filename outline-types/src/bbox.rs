use core::ops::Sub;

/// Extents of the region a face's glyph outlines can occupy.
///
/// Coordinates are in font units with Y pointing up, so `y_min` is the
/// lowest reach of any descender and `y_max` the highest reach of any
/// ascender. The box is a face-level property reported by the
/// rasterizer engine; individual glyphs stay within it.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox<T> {
    /// Leftmost extent of any outline point.
    pub x_min: T,
    /// Lowest extent of any outline point (the deepest descender).
    pub y_min: T,
    /// Rightmost extent of any outline point.
    pub x_max: T,
    /// Highest extent of any outline point (the tallest ascender).
    pub y_max: T,
}

impl<T> BoundingBox<T> {
    /// Creates a bounding box from its extents.
    pub const fn new(x_min: T, y_min: T, x_max: T, y_max: T) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }
}

impl<T> BoundingBox<T>
where
    T: Sub<Output = T> + Copy,
{
    /// Horizontal extent of the box.
    pub fn width(&self) -> T {
        self.x_max - self.x_min
    }

    /// Vertical extent of the box.
    pub fn height(&self) -> T {
        self.y_max - self.y_min
    }
}

#[cfg(test)]
mod tests {
    use super::BoundingBox;

    #[test]
    fn extents() {
        let bbox = BoundingBox::new(-10, -250, 1024, 900);
        assert_eq!(bbox.width(), 1034);
        assert_eq!(bbox.height(), 1150);
    }
}
