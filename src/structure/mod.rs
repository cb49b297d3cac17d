//! Backbone structure: atoms, bonds, and the procedural helix generator.
//!
//! A [`ProteinStructure`] is produced once per session by
//! [`helix::generate`] and is never regenerated while the engine runs.
//! Folded positions are immutable; only the transient `current` position of
//! each atom is rewritten by the scene rebuild.

pub mod helix;

use glam::Vec3;

use crate::scene::color::Color;

/// A single backbone atom.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Sequential identifier (residue index).
    pub id: u32,
    /// Element / atom-name tag (`"CA"` for alpha carbons).
    pub kind: String,
    /// Color used for the atom sphere.
    pub color: Color,
    folded: Vec3,
    /// Interpolated position from the most recent rebuild.
    pub current: Vec3,
}

impl Atom {
    /// Create an atom at its folded position. The current position starts
    /// at the folded position until the first rebuild overwrites it.
    #[must_use]
    pub fn new(id: u32, kind: impl Into<String>, folded: Vec3, color: Color) -> Self {
        Self {
            id,
            kind: kind.into(),
            color,
            folded,
            current: folded,
        }
    }

    /// Folded (target) position. Fixed at generation time.
    #[must_use]
    pub fn folded(&self) -> Vec3 {
        self.folded
    }
}

/// A bond between two atoms, by index into [`ProteinStructure::atoms`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bond {
    /// Index of the first atom.
    pub from: usize,
    /// Index of the second atom.
    pub to: usize,
}

/// Ordered atoms and bonds making up the visualized backbone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProteinStructure {
    /// Atoms in backbone order.
    pub atoms: Vec<Atom>,
    /// Bonds in generation order.
    pub bonds: Vec<Bond>,
}

impl ProteinStructure {
    /// Build a structure from parts.
    #[must_use]
    pub fn new(atoms: Vec<Atom>, bonds: Vec<Bond>) -> Self {
        Self { atoms, bonds }
    }

    /// Number of atoms.
    #[must_use]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Number of bonds (including any malformed ones).
    #[must_use]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Current positions of both bond endpoints, or `None` when either index
    /// is out of range.
    #[must_use]
    pub fn bond_endpoints(&self, bond: Bond) -> Option<(Vec3, Vec3)> {
        let from = self.atoms.get(bond.from)?;
        let to = self.atoms.get(bond.to)?;
        Some((from.current, to.current))
    }

    /// Current positions of all atoms in backbone order.
    pub fn current_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.atoms.iter().map(|atom| atom.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bond_endpoints_skip_dangling_indices() {
        let atoms = vec![
            Atom::new(0, "CA", Vec3::ZERO, Color::ATOM_DEFAULT),
            Atom::new(1, "CA", Vec3::X, Color::ATOM_DEFAULT),
        ];
        let structure = ProteinStructure::new(
            atoms,
            vec![Bond { from: 0, to: 1 }, Bond { from: 1, to: 7 }],
        );

        assert_eq!(
            structure.bond_endpoints(structure.bonds[0]),
            Some((Vec3::ZERO, Vec3::X))
        );
        assert_eq!(structure.bond_endpoints(structure.bonds[1]), None);
        assert_eq!(structure.bond_count(), 2);
    }

    #[test]
    fn test_current_starts_at_folded() {
        let atom = Atom::new(3, "CA", Vec3::new(1.0, 2.0, 3.0), Color::ATOM_DEFAULT);
        assert_eq!(atom.current, atom.folded());
    }
}
