//! Hex colors as they appear in options files, plus GPU conversions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A `0xRRGGBB` sRGB color.
///
/// Serializes as a plain integer so presets can write `atom = 0x00ff00`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    /// Default backbone atom color (green).
    pub const ATOM_DEFAULT: Self = Self(0x00ff00);
    /// Bond line color.
    pub const WHITE: Self = Self(0xffffff);
    /// Tube / ribbon color.
    pub const TUBE_DEFAULT: Self = Self(0x00aaff);
    /// Viewport clear color.
    pub const BACKGROUND: Self = Self(0x1a1a1a);

    /// sRGB channels in `[0, 1]`.
    #[must_use]
    pub fn to_srgb(self) -> [f32; 3] {
        let r = ((self.0 >> 16) & 0xff) as f32 / 255.0;
        let g = ((self.0 >> 8) & 0xff) as f32 / 255.0;
        let b = (self.0 & 0xff) as f32 / 255.0;
        [r, g, b]
    }

    /// Linear-light channels for shading in an sRGB render target.
    #[must_use]
    pub fn to_linear(self) -> [f32; 3] {
        self.to_srgb().map(srgb_to_linear)
    }

    /// Linear RGB with the given opacity in the alpha channel.
    #[must_use]
    pub fn to_linear_rgba(self, opacity: f32) -> [f32; 4] {
        let [r, g, b] = self.to_linear();
        [r, g, b, opacity]
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
