use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scene::color::Color;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Sizes, tessellation, and colors of the scene primitives.
pub struct GeometryOptions {
    /// Atom sphere radius.
    #[schemars(title = "Atom Radius", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub atom_radius: f32,
    /// Latitude/longitude segments of the atom sphere mesh.
    #[schemars(skip)]
    pub sphere_segments: u32,
    /// Backbone tube radius.
    #[schemars(title = "Tube Radius", range(min = 0.05, max = 1.0), extend("step" = 0.05))]
    pub tube_radius: f32,
    /// Number of radial segments around the tube.
    #[schemars(skip)]
    pub tube_radial_segments: u32,
    /// Tube sections per atom along the backbone.
    #[schemars(skip)]
    pub tube_segments_per_atom: u32,
    /// Bond line color.
    #[schemars(skip)]
    pub bond_color: Color,
    /// Bond line opacity.
    #[schemars(title = "Bond Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub bond_opacity: f32,
    /// Tube color.
    #[schemars(skip)]
    pub tube_color: Color,
    /// Tube opacity.
    #[schemars(title = "Tube Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub tube_opacity: f32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            atom_radius: 0.5,
            sphere_segments: 16,
            tube_radius: 0.3,
            tube_radial_segments: 8,
            tube_segments_per_atom: 2,
            bond_color: Color::WHITE,
            bond_opacity: 0.6,
            tube_color: Color::TUBE_DEFAULT,
            tube_opacity: 0.7,
        }
    }
}
