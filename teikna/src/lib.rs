//! Conversion of raw glyph outlines into renderable vector paths.
//!
//! Teikna is a mid level library that sits above a rasterizer engine
//! (which owns font file parsing, face loading and glyph slot
//! management) and below a vector graphics renderer. It consumes the
//! point/tag/contour representation that scalable font rasterizers
//! expose for a glyph and reconstructs the move/line/quadratic path a
//! renderer can fill, including the on-curve points the source data
//! leaves implicit.
//!
//! The engine itself is reached through the narrow [`Face`] capability
//! trait; everything downstream of the raw outline record is pure
//! computation over immutable snapshots.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Expose the underlying value types crate.
pub extern crate outline_types as types;

mod error;
mod face;
pub mod outline;

pub use error::DrawError;
pub use face::{Encoding, Face, Glyph, GlyphMetrics, KerningMode};
pub use outline::{
    MalformedOutline, Outline, OutlinePen, PathElement, RawOutline, SvgPen, ToPathError,
};

pub use types::{BoundingBox, GlyphId, Point, PointTag};
