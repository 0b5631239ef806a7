//! On/off-curve classification of outline points.

/// Curve membership of an outline point.
///
/// Decoded once from the tag byte the rasterizer engine attaches to
/// each point: low bit set means the curve passes through the point,
/// clear means the point is a quadratic control point. Bits above the
/// low bit carry engine-internal markers and are ignored.
///
/// Keeping this as a two-valued enumeration rather than re-testing tag
/// bits lets the path builder match on point pairs exhaustively.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointTag {
    /// The curve passes through this point.
    OnCurve,
    /// This point steers a quadratic segment without lying on it.
    OffCurve,
}

impl PointTag {
    const ON_CURVE: u8 = 0x01;

    /// Decodes a tag byte, ignoring marker bits above the on-curve bit.
    pub const fn from_bits(bits: u8) -> Self {
        if bits & Self::ON_CURVE != 0 {
            Self::OnCurve
        } else {
            Self::OffCurve
        }
    }

    /// Returns true if the curve passes through the tagged point.
    #[inline]
    pub const fn is_on_curve(self) -> bool {
        matches!(self, Self::OnCurve)
    }
}
