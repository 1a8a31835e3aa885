//! Colour type.

/// An RGB triple of quantized channel values.
///
/// Channels are not clamped: a tree that evaluates outside [-1, 1] yields
/// channels outside 0..=255. Clamping happens when the colour is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: i64,
    pub g: i64,
    pub b: i64,
}

impl Colour {
    /// Create a new colour from RGB channels.
    pub const fn rgb(r: i64, g: i64, b: i64) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Check if every channel lies in 0..=255.
    pub fn in_gamut(self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0..=255).contains(c))
    }

    /// Convert to RGB bytes, clamping out-of-range channels.
    pub fn to_rgb8(self) -> [u8; 3] {
        [clamp_channel(self.r), clamp_channel(self.g), clamp_channel(self.b)]
    }
}

fn clamp_channel(c: i64) -> u8 {
    c.clamp(0, 255) as u8
}
