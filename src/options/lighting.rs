use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scene::color::Color;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Ambient plus two directional lights, and the clear color.
pub struct LightingOptions {
    /// Ambient light intensity.
    #[schemars(title = "Ambient", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub ambient: f32,
    /// Key light intensity.
    #[schemars(title = "Key Light", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub key_intensity: f32,
    /// Key light position; the light shines from here toward the origin.
    #[schemars(skip)]
    pub key_position: [f32; 3],
    /// Fill light intensity.
    #[schemars(title = "Fill Light", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub fill_intensity: f32,
    /// Fill light position.
    #[schemars(skip)]
    pub fill_position: [f32; 3],
    /// Share of the atom color added as self-illumination.
    #[schemars(title = "Atom Glow", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub emissive: f32,
    /// Clear color.
    #[schemars(skip)]
    pub background: Color,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            ambient: 0.6,
            key_intensity: 0.8,
            key_position: [10.0, 10.0, 10.0],
            fill_intensity: 0.4,
            fill_position: [-10.0, -10.0, -10.0],
            emissive: 0.3,
            background: Color::BACKGROUND,
        }
    }
}
