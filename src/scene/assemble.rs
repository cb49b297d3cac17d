//! Structure → scene rebuild.
//!
//! Each rebuild interpolates every atom toward its folded position and then
//! regenerates the primitives the display flags ask for. Under
//! [`RebuildPolicy::Rebuild`] every list is dropped and reallocated; under
//! [`RebuildPolicy::InPlace`] the previous allocations are overwritten.

use super::spline::CatmullRomCurve;
use super::tube::{self, TubeProfile, TubeShape};
use super::{LineSegment, Scene, SphereInstance, TubeMesh};
use crate::animation::{lerp_position, UnfoldSampler};
use crate::options::{DisplayOptions, GeometryOptions, RebuildPolicy, Representation};
use crate::structure::ProteinStructure;

/// Rebuild `scene` for `fraction` of the fold.
///
/// Writes each atom's interpolated position into `structure` (`current`)
/// and bumps the scene generation.
pub fn rebuild(
    scene: &mut Scene,
    structure: &mut ProteinStructure,
    sampler: &mut UnfoldSampler,
    fraction: f32,
    display: &DisplayOptions,
    geometry: &GeometryOptions,
) {
    let unfolded = sampler.sample(structure.atom_count());
    for (atom, &start) in structure.atoms.iter_mut().zip(unfolded) {
        atom.current = lerp_position(start, atom.folded(), fraction);
    }

    let in_place = display.rebuild_policy == RebuildPolicy::InPlace;
    if !in_place {
        scene.spheres = Vec::new();
        scene.lines = Vec::new();
        scene.tube = None;
    }

    let spheres = structure.atoms.iter().map(|atom| SphereInstance {
        center: atom.current,
        radius: geometry.atom_radius,
        color: atom.color,
    });
    if display.show_atoms {
        overwrite(&mut scene.spheres, spheres);
    } else {
        scene.spheres.clear();
    }

    if display.show_bonds {
        let lines = structure.bonds.iter().filter_map(|&bond| {
            let Some((start, end)) = structure.bond_endpoints(bond) else {
                log::trace!("skipping bond {}-{}: atom missing", bond.from, bond.to);
                return None;
            };
            Some(LineSegment {
                start,
                end,
                color: geometry.bond_color,
                opacity: geometry.bond_opacity,
            })
        });
        overwrite(&mut scene.lines, lines);
    } else {
        scene.lines.clear();
    }

    rebuild_tube(scene, structure, display.representation, geometry);
    scene.invalidate();
}

fn rebuild_tube(
    scene: &mut Scene,
    structure: &ProteinStructure,
    representation: Representation,
    geometry: &GeometryOptions,
) {
    let profile = match representation {
        Representation::Ribbon => TubeProfile::Round {
            radius: geometry.tube_radius,
        },
        Representation::Cartoon => TubeProfile::Flat {
            half_width: geometry.tube_radius,
            half_thickness: geometry.tube_radius / 4.0,
        },
        Representation::BallAndStick => {
            scene.tube = None;
            return;
        }
    };

    let positions: Vec<_> = structure.current_positions().collect();
    let Some(curve) = CatmullRomCurve::new(&positions) else {
        scene.tube = None;
        return;
    };
    let shape = TubeShape {
        profile,
        tubular_segments: geometry.tube_segments_per_atom * positions.len() as u32,
        radial_segments: geometry.tube_radial_segments,
    };

    let mesh = scene.tube.get_or_insert_with(|| TubeMesh {
        vertices: Vec::new(),
        indices: Vec::new(),
        color: geometry.tube_color,
        opacity: geometry.tube_opacity,
    });
    mesh.color = geometry.tube_color;
    mesh.opacity = geometry.tube_opacity;
    tube::extrude(&curve, &shape, &mut mesh.vertices, &mut mesh.indices);
}

/// Overwrite `dst` with `items`, reusing existing slots.
fn overwrite<T>(dst: &mut Vec<T>, items: impl Iterator<Item = T>) {
    let mut len = 0;
    for item in items {
        if let Some(slot) = dst.get_mut(len) {
            *slot = item;
        } else {
            dst.push(item);
        }
        len += 1;
    }
    dst.truncate(len);
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::options::{AnimationOptions, UnfoldPolicy};
    use crate::scene::color::Color;
    use crate::structure::helix::{self, HelixParams};
    use crate::structure::{Atom, Bond};

    struct Fixture {
        scene: Scene,
        structure: ProteinStructure,
        sampler: UnfoldSampler,
        display: DisplayOptions,
        geometry: GeometryOptions,
    }

    impl Fixture {
        fn new() -> Self {
            Self::with_structure(helix::generate(&HelixParams::default()))
        }

        fn with_structure(structure: ProteinStructure) -> Self {
            Self {
                scene: Scene::new(),
                structure,
                sampler: UnfoldSampler::new(&AnimationOptions {
                    unfold_seed: Some(11),
                    ..AnimationOptions::default()
                }),
                display: DisplayOptions::default(),
                geometry: GeometryOptions::default(),
            }
        }

        fn rebuild(&mut self, fraction: f32) {
            rebuild(
                &mut self.scene,
                &mut self.structure,
                &mut self.sampler,
                fraction,
                &self.display,
                &self.geometry,
            );
        }
    }

    #[test]
    fn test_default_scene_has_all_primitives() {
        let mut fx = Fixture::new();
        fx.rebuild(0.0);

        assert_eq!(fx.scene.spheres().len(), 20);
        assert_eq!(fx.scene.lines().len(), 19);
        let tube = fx.scene.tube().unwrap();
        assert_eq!(tube.vertices.len(), 41 * 9);
        assert_eq!(tube.color, Color(0x00aaff));
        assert_eq!(tube.opacity, 0.7);

        let sphere = fx.scene.spheres()[0];
        assert_eq!(sphere.radius, 0.5);
        assert_eq!(sphere.color, Color(0x00ff00));
        let line = fx.scene.lines()[0];
        assert_eq!(line.color, Color::WHITE);
        assert_eq!(line.opacity, 0.6);
    }

    #[test]
    fn test_fraction_one_places_atoms_on_the_helix() {
        let mut fx = Fixture::new();
        fx.rebuild(1.0);
        for (i, sphere) in fx.scene.spheres().iter().enumerate() {
            let angle = (i as f32 * 100.0).to_radians();
            let expected =
                Vec3::new(2.0 * angle.cos(), i as f32 * 3.6 / 20.0, 2.0 * angle.sin());
            assert!((sphere.center - expected).length() < 1e-5, "atom {i}");
        }
    }

    #[test]
    fn test_fraction_zero_uses_the_unfolded_sample() {
        let mut fx = Fixture::new();
        fx.rebuild(0.0);
        let unfolded = fx.sampler.sample(20).to_vec();
        let centers: Vec<Vec3> = fx.scene.spheres().iter().map(|s| s.center).collect();
        assert_eq!(centers, unfolded);
    }

    #[test]
    fn test_hiding_bonds_removes_only_lines() {
        let mut fx = Fixture::new();
        fx.rebuild(0.4);
        let spheres = fx.scene.spheres().to_vec();
        let tube = fx.scene.tube().cloned();

        fx.display.show_bonds = false;
        fx.rebuild(0.4);
        assert!(fx.scene.lines().is_empty());
        assert_eq!(fx.scene.spheres(), spheres.as_slice());
        assert_eq!(fx.scene.tube().cloned(), tube);
    }

    #[test]
    fn test_hiding_atoms_removes_only_spheres() {
        let mut fx = Fixture::new();
        fx.display.show_atoms = false;
        fx.rebuild(0.4);
        assert!(fx.scene.spheres().is_empty());
        assert_eq!(fx.scene.lines().len(), 19);
        assert!(fx.scene.tube().is_some());
    }

    #[test]
    fn test_ball_and_stick_has_no_tube() {
        let mut fx = Fixture::new();
        fx.rebuild(0.5);
        fx.display.representation = Representation::BallAndStick;
        fx.rebuild(0.5);
        assert!(fx.scene.tube().is_none());
        assert_eq!(fx.scene.spheres().len(), 20);
    }

    #[test]
    fn test_cartoon_differs_from_ribbon() {
        let mut fx = Fixture::new();
        fx.rebuild(1.0);
        let ribbon = fx.scene.tube().cloned().unwrap();
        fx.display.representation = Representation::Cartoon;
        fx.rebuild(1.0);
        let cartoon = fx.scene.tube().cloned().unwrap();
        assert_eq!(ribbon.vertices.len(), cartoon.vertices.len());
        assert_ne!(ribbon.vertices, cartoon.vertices);
    }

    #[test]
    fn test_single_atom_skips_the_tube() {
        let atom = Atom::new(0, "CA", Vec3::ZERO, Color::ATOM_DEFAULT);
        let mut fx = Fixture::with_structure(ProteinStructure::new(vec![atom], Vec::new()));
        fx.rebuild(1.0);
        assert!(fx.scene.tube().is_none());
        assert_eq!(fx.scene.spheres().len(), 1);
    }

    #[test]
    fn test_empty_structure_builds_an_empty_scene() {
        let mut fx = Fixture::with_structure(ProteinStructure::default());
        fx.rebuild(0.5);
        assert!(fx.scene.spheres().is_empty());
        assert!(fx.scene.lines().is_empty());
        assert!(fx.scene.tube().is_none());
        assert!(fx.scene.is_dirty());
    }

    #[test]
    fn test_malformed_bonds_are_skipped() {
        let mut structure = helix::generate(&HelixParams::default());
        structure.bonds.push(Bond { from: 3, to: 99 });
        let mut fx = Fixture::with_structure(structure);
        fx.rebuild(1.0);
        assert_eq!(fx.scene.lines().len(), 19);
    }

    #[test]
    fn test_rebuild_policies_produce_identical_primitives() {
        let mut full = Fixture::new();
        let mut in_place = Fixture::new();
        in_place.display.rebuild_policy = RebuildPolicy::InPlace;

        for (fraction, show_bonds) in [(0.0, true), (0.3, false), (0.8, true), (1.0, true)] {
            full.display.show_bonds = show_bonds;
            in_place.display.show_bonds = show_bonds;
            full.rebuild(fraction);
            in_place.rebuild(fraction);
            assert_eq!(full.scene.spheres(), in_place.scene.spheres());
            assert_eq!(full.scene.lines(), in_place.scene.lines());
            assert_eq!(full.scene.tube(), in_place.scene.tube());
        }
        assert_eq!(full.scene.generation(), in_place.scene.generation());
    }

    #[test]
    fn test_per_frame_unfold_moves_atoms_between_rebuilds() {
        let mut fx = Fixture::new();
        fx.sampler = UnfoldSampler::new(&AnimationOptions {
            unfold_policy: UnfoldPolicy::PerFrame,
            unfold_seed: Some(5),
            ..AnimationOptions::default()
        });
        fx.rebuild(0.5);
        let first = fx.scene.spheres().to_vec();
        fx.rebuild(0.5);
        assert_ne!(fx.scene.spheres(), first.as_slice());

        // The folded end state is independent of the sample.
        fx.rebuild(1.0);
        let folded = fx.scene.spheres().to_vec();
        fx.rebuild(1.0);
        assert_eq!(fx.scene.spheres(), folded.as_slice());
    }
}
