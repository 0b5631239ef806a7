//! Error types for face access and glyph drawing.

use core::fmt;

use outline_types::GlyphId;

use crate::face::Encoding;

pub use crate::outline::{MalformedOutline, ToPathError};

/// Errors that may occur when driving a face or drawing glyphs.
#[derive(Clone, Debug)]
pub enum DrawError {
    /// The requested glyph was not present in the face.
    GlyphNotFound(GlyphId),
    /// The character has no glyph mapping in the selected charmap.
    UnmappedCharacter(char),
    /// The face has no charmap for the requested encoding.
    NoCharmap(Encoding),
    /// A glyph was loaded before a character size was set.
    UnscaledFace,
    /// The engine handed back a corrupt outline record.
    MalformedOutline(MalformedOutline),
    /// Conversion from outline to path failed.
    ToPath(ToPathError),
}

impl From<MalformedOutline> for DrawError {
    fn from(e: MalformedOutline) -> Self {
        Self::MalformedOutline(e)
    }
}

impl From<ToPathError> for DrawError {
    fn from(e: ToPathError) -> Self {
        Self::ToPath(e)
    }
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::GlyphNotFound(gid) => write!(f, "Glyph {gid} was not found in the given face"),
            Self::UnmappedCharacter(ch) => {
                write!(f, "No glyph is mapped for character {ch:?}")
            }
            Self::NoCharmap(encoding) => {
                write!(f, "The face has no charmap for encoding {encoding:?}")
            }
            Self::UnscaledFace => {
                write!(f, "A character size must be set before loading a glyph")
            }
            Self::MalformedOutline(e) => write!(f, "{e}"),
            Self::ToPath(e) => write!(f, "{e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DrawError {}
