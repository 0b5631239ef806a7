//! Capability interface to an underlying rasterizer engine.
//!
//! The engine owns font file parsing, face state and the glyph slot;
//! this module only specifies the narrow surface the path pipeline
//! consumes. Engine lifecycle (library init, face open/close) is the
//! implementor's constructor and `Drop` concern.

use outline_types::{BoundingBox, GlyphId, Point};

use crate::error::DrawError;
use crate::outline::RawOutline;

/// Charmap encodings a caller may select on a face.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub enum Encoding {
    /// Unicode character to glyph mapping.
    #[default]
    Unicode,
    /// Microsoft symbol encoding, used by pictographic fonts.
    MsSymbol,
    /// Legacy Apple Roman encoding.
    AppleRoman,
}

/// Modes for kerning queries.
///
/// Grid-fitting only affects scaled faces; unscaled kerning is
/// expressed in raw font units.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub enum KerningMode {
    /// Scaled and grid-fitted kerning distances.
    #[default]
    Default,
    /// Scaled but not grid-fitted.
    Unfitted,
    /// Raw font units, independent of the selected character size.
    Unscaled,
}

/// Metrics of one loaded glyph.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct GlyphMetrics {
    /// Horizontal advance width in font units.
    pub advance_width: i32,
}

/// One glyph as loaded into the engine's glyph slot.
///
/// Holds the slot's metrics plus the raw outline record borrowed from
/// it. The borrow keeps the slot contents alive until the caller is
/// done reading them.
#[derive(Copy, Clone, Debug)]
pub struct Glyph<'a> {
    metrics: GlyphMetrics,
    outline: RawOutline<'a>,
}

impl<'a> Glyph<'a> {
    /// Creates a glyph handle from slot data. Called by engine
    /// implementations, not by consumers.
    pub fn new(metrics: GlyphMetrics, outline: RawOutline<'a>) -> Self {
        Self { metrics, outline }
    }

    /// The glyph's metrics.
    pub fn metrics(&self) -> GlyphMetrics {
        self.metrics
    }

    /// Horizontal advance width in font units.
    pub fn advance_width(&self) -> i32 {
        self.metrics.advance_width
    }

    /// The raw outline record borrowed from the glyph slot.
    pub fn raw_outline(&self) -> &RawOutline<'a> {
        &self.outline
    }

    /// Decodes the glyph's outline into an immutable snapshot.
    ///
    /// The snapshot owns its data, so it stays valid after the glyph
    /// slot is overwritten by the next load.
    pub fn outline(&self) -> Result<crate::outline::Outline, DrawError> {
        Ok(crate::outline::Outline::new(&self.outline)?)
    }
}

/// Capability handle to one face of an underlying rasterizer engine.
///
/// Implementations wrap whatever state the engine keeps per face. All
/// methods that mutate engine state take `&mut self`, which also makes
/// the load-then-read pair on the shared glyph slot a single unit the
/// borrow checker enforces: the `Glyph` returned by
/// [`load_glyph`](Self::load_glyph) borrows the face, so no second
/// load can overwrite the slot while the first is still being read.
pub trait Face {
    /// Selects the charmap used by [`char_index`](Self::char_index).
    fn select_charmap(&mut self, encoding: Encoding) -> Result<(), DrawError>;

    /// Sets the nominal character size.
    ///
    /// Width and height are expressed in 26.6 fixed point (1/64th of a
    /// point); a zero width or height means "same as the other axis".
    /// Resolutions are in dots per inch. A size must be set before
    /// glyphs can be loaded.
    fn set_char_size(
        &mut self,
        char_width: i32,
        char_height: i32,
        horizontal_resolution: u32,
        vertical_resolution: u32,
    ) -> Result<(), DrawError>;

    /// Maps a character to its glyph identifier in the selected
    /// charmap. Returns `None` if the character has no mapping.
    fn char_index(&self, ch: char) -> Option<GlyphId>;

    /// The face's bounding box in font units, large enough to contain
    /// any glyph in the face.
    fn bbox(&self) -> BoundingBox<i32>;

    /// Returns the kerning vector between two glyphs.
    ///
    /// Faces without kerning data report a zero vector.
    fn kerning(
        &self,
        left: GlyphId,
        right: GlyphId,
        mode: KerningMode,
    ) -> Result<Point<i32>, DrawError>;

    /// Loads a glyph into the engine's glyph slot and returns it.
    ///
    /// Loading replaces the slot's previous contents. Fails with
    /// [`DrawError::UnscaledFace`] if no character size has been set
    /// and with [`DrawError::GlyphNotFound`] for an identifier the
    /// face does not contain.
    fn load_glyph(&mut self, glyph_id: GlyphId) -> Result<Glyph<'_>, DrawError>;

    /// Loads the glyph mapped for a character.
    ///
    /// Unlike engines that silently fall back to the missing-glyph
    /// placeholder, an unmapped character is reported as an error;
    /// callers that want the placeholder use [`notdef`](Self::notdef).
    fn glyph_for_char(&mut self, ch: char) -> Result<Glyph<'_>, DrawError> {
        let glyph_id = self
            .char_index(ch)
            .ok_or(DrawError::UnmappedCharacter(ch))?;
        self.load_glyph(glyph_id)
    }

    /// Loads the face's missing-glyph placeholder.
    fn notdef(&mut self) -> Result<Glyph<'_>, DrawError> {
        self.load_glyph(GlyphId::NOTDEF)
    }

    /// Returns the kerning vector between the glyphs of two characters,
    /// or a zero vector when either character is unmapped.
    fn char_kerning(
        &self,
        left: char,
        right: char,
        mode: KerningMode,
    ) -> Result<Point<i32>, DrawError> {
        match (self.char_index(left), self.char_index(right)) {
            (Some(left), Some(right)) => self.kerning(left, right, mode),
            _ => Ok(Point::default()),
        }
    }
}
