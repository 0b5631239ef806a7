//! Common scalar and geometry types for glyph outlines.
//!
//! These are the value types shared between a rasterizer engine's raw
//! outline data and the path reconstruction that consumes it.

#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "bytemuck"), forbid(unsafe_code))]
#![cfg_attr(not(feature = "std"), no_std)]

mod bbox;
mod glyph_id;
mod point;
mod tag;

#[cfg(all(test, feature = "serde"))]
mod serde_test;

pub use bbox::BoundingBox;
pub use glyph_id::GlyphId;
pub use point::Point;
pub use tag::PointTag;
