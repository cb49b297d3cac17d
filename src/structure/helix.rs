//! Closed-form alpha-helix generator.
//!
//! Residue `i` sits at angle `i * 100°` on a circle of radius `radius`,
//! rising `pitch / residues` per residue. Consecutive residues are bonded.

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Atom, Bond, ProteinStructure};
use crate::scene::color::Color;

/// Largest structure the options accept.
pub const MAX_RESIDUES: u32 = 500;

/// Helix parametrization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Structure", inline)]
#[serde(default)]
pub struct HelixParams {
    /// Number of residues (one CA atom each).
    #[schemars(title = "Residues", range(min = 0, max = 500))]
    pub residues: u32,
    /// Helix radius.
    #[schemars(skip)]
    pub radius: f32,
    /// Total rise across all residues.
    #[schemars(skip)]
    pub pitch: f32,
    /// Angular step between consecutive residues, in degrees.
    #[schemars(skip)]
    pub degrees_per_residue: f32,
    /// Atom color.
    #[schemars(skip)]
    pub atom_color: Color,
}

impl Default for HelixParams {
    fn default() -> Self {
        Self {
            residues: 20,
            radius: 2.0,
            pitch: 3.6,
            degrees_per_residue: 100.0,
            atom_color: Color::ATOM_DEFAULT,
        }
    }
}

impl HelixParams {
    /// Folded position of residue `i`.
    #[must_use]
    pub fn position(&self, i: u32) -> Vec3 {
        let angle = (i as f32 * self.degrees_per_residue).to_radians();
        Vec3::new(
            self.radius * angle.cos(),
            i as f32 * self.pitch / self.residues.max(1) as f32,
            self.radius * angle.sin(),
        )
    }
}

/// Generate the helix backbone: one CA atom per residue and a bond between
/// each consecutive pair.
#[must_use]
pub fn generate(params: &HelixParams) -> ProteinStructure {
    let atoms: Vec<Atom> = (0..params.residues)
        .map(|i| Atom::new(i, "CA", params.position(i), params.atom_color))
        .collect();
    let bonds = (1..atoms.len())
        .map(|i| Bond { from: i - 1, to: i })
        .collect();

    log::debug!(
        "generated helix: {} atoms, {} bonds",
        atoms.len(),
        atoms.len().saturating_sub(1)
    );
    ProteinStructure::new(atoms, bonds)
}
