use std::fmt;

use super::FoldingEngine;
use crate::options::Representation;

/// Display outputs for the host's status area.
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    /// Number of atoms in the structure.
    pub atom_count: usize,
    /// Number of bonds in the structure.
    pub bond_count: usize,
    /// `round(fraction * 100)`.
    pub stage_percent: u32,
    /// Speed with one decimal and an `x` suffix.
    pub speed_label: String,
    /// Play/pause control label.
    pub play_label: &'static str,
    /// Active representation.
    pub representation: Representation,
}

impl fmt::Display for Hud {
    /// Window-title form: `foldscope · 20 atoms · 19 bonds · 45% · 1.0x · Pause`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "foldscope · {} atoms · {} bonds · {}% · {} · {}",
            self.atom_count,
            self.bond_count,
            self.stage_percent,
            self.speed_label,
            self.play_label
        )
    }
}

impl FoldingEngine {
    /// Snapshot of the display outputs.
    #[must_use]
    pub fn hud(&self) -> Hud {
        Hud {
            atom_count: self.structure.atom_count(),
            bond_count: self.structure.bond_count(),
            stage_percent: self.animator.stage_percent(),
            speed_label: self.animator.speed_label(),
            play_label: self.animator.play_label(),
            representation: self.options.display.representation,
        }
    }
}
