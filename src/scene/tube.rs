//! Tube surface extrusion along a backbone curve.
//!
//! Rings of `radial_segments + 1` vertices (the seam is duplicated so each
//! ring wraps cleanly) are placed at `tubular_segments + 1` arc-length
//! samples and oriented with rotation-minimizing frames.

use std::f32::consts::TAU;

use glam::Vec3;

use super::spline::CatmullRomCurve;
use super::MeshVertex;

/// Cross-section shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TubeProfile {
    /// Circle of the given radius.
    Round {
        /// Circle radius.
        radius: f32,
    },
    /// Ellipse with semi-axes `half_width` (along the frame normal) and
    /// `half_thickness` (along the binormal).
    Flat {
        /// Semi-axis along the frame normal.
        half_width: f32,
        /// Semi-axis along the frame binormal.
        half_thickness: f32,
    },
}

impl TubeProfile {
    /// Offset from the centerline and outward surface normal at ring
    /// angle `theta`.
    fn sample(self, theta: f32, normal: Vec3, binormal: Vec3) -> (Vec3, Vec3) {
        let (sin, cos) = theta.sin_cos();
        match self {
            Self::Round { radius } => {
                let dir = normal * cos + binormal * sin;
                (dir * radius, dir)
            }
            Self::Flat {
                half_width,
                half_thickness,
            } => {
                let offset = normal * (half_width * cos) + binormal * (half_thickness * sin);
                let surface_normal = (normal * (half_thickness * cos)
                    + binormal * (half_width * sin))
                    .normalize_or_zero();
                (offset, surface_normal)
            }
        }
    }
}

/// Sizing for one tube extrusion.
#[derive(Debug, Clone, Copy)]
pub struct TubeShape {
    /// Cross-section.
    pub profile: TubeProfile,
    /// Ring count minus one.
    pub tubular_segments: u32,
    /// Vertices per ring minus the duplicated seam vertex.
    pub radial_segments: u32,
}

/// Orthonormal frame at one ring.
#[derive(Clone, Copy)]
struct Frame {
    pos: Vec3,
    tangent: Vec3,
    normal: Vec3,
    binormal: Vec3,
}

/// Write the tube around `curve` into `vertices` and `indices`.
///
/// Both buffers are cleared first so callers can reuse allocations.
pub fn extrude(
    curve: &CatmullRomCurve<'_>,
    shape: &TubeShape,
    vertices: &mut Vec<MeshVertex>,
    indices: &mut Vec<u32>,
) {
    vertices.clear();
    indices.clear();

    let segments = shape.tubular_segments.max(1);
    let radial = shape.radial_segments.max(3);

    let mut frames: Vec<Frame> = (0..=segments)
        .map(|i| {
            let u = i as f32 / segments as f32;
            Frame {
                pos: curve.point_at(u),
                tangent: curve.tangent_at(u),
                normal: Vec3::ZERO,
                binormal: Vec3::ZERO,
            }
        })
        .collect();
    compute_rmf(&mut frames);

    vertices.reserve(frames.len() * (radial as usize + 1));
    for frame in &frames {
        for j in 0..=radial {
            let theta = j as f32 / radial as f32 * TAU;
            let (offset, normal) =
                shape.profile.sample(theta, frame.normal, frame.binormal);
            vertices.push(MeshVertex {
                position: (frame.pos + offset).to_array(),
                normal: normal.to_array(),
            });
        }
    }

    let ring = radial + 1;
    indices.reserve((segments * radial * 6) as usize);
    for i in 0..segments {
        for j in 0..radial {
            let v0 = i * ring + j;
            let v1 = v0 + 1;
            let v2 = v0 + ring;
            let v3 = v2 + 1;
            indices.extend_from_slice(&[v0, v2, v1, v1, v2, v3]);
        }
    }
}

/// Rotation-minimizing frames by double reflection.
fn compute_rmf(frames: &mut [Frame]) {
    let Some(first) = frames.first_mut() else {
        return;
    };
    let t0 = first.tangent;
    let arbitrary = if t0.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    first.normal = t0.cross(arbitrary).normalize_or_zero();
    first.binormal = t0.cross(first.normal).normalize_or_zero();

    for i in 0..frames.len() - 1 {
        let cur = frames[i];
        let next_tangent = frames[i + 1].tangent;

        let v1 = frames[i + 1].pos - cur.pos;
        let c1 = v1.dot(v1);
        if c1 < 1e-10 {
            frames[i + 1].normal = cur.normal;
            frames[i + 1].binormal = cur.binormal;
            continue;
        }

        let r_l = cur.normal - (2.0 / c1) * v1.dot(cur.normal) * v1;
        let t_l = cur.tangent - (2.0 / c1) * v1.dot(cur.tangent) * v1;

        let v2 = next_tangent - t_l;
        let c2 = v2.dot(v2);
        let r_next = if c2 < 1e-10 {
            r_l
        } else {
            r_l - (2.0 / c2) * v2.dot(r_l) * v2
        };

        let r_next =
            (r_next - next_tangent * next_tangent.dot(r_next)).normalize_or_zero();
        frames[i + 1].normal = r_next;
        frames[i + 1].binormal = next_tangent.cross(r_next).normalize_or_zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(segments: u32) -> TubeShape {
        TubeShape {
            profile: TubeProfile::Round { radius: 0.3 },
            tubular_segments: segments,
            radial_segments: 8,
        }
    }

    #[test]
    fn test_counts_follow_segment_settings() {
        let points: Vec<Vec3> =
            (0..20).map(|i| Vec3::new(i as f32, (i as f32).sin(), 0.0)).collect();
        let curve = CatmullRomCurve::new(&points).unwrap();
        let (mut vertices, mut indices) = (Vec::new(), Vec::new());
        extrude(&curve, &round(40), &mut vertices, &mut indices);

        assert_eq!(vertices.len(), 41 * 9);
        assert_eq!(indices.len(), 40 * 8 * 6);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }

    #[test]
    fn test_round_ring_sits_at_radius() {
        let points = vec![Vec3::ZERO, Vec3::Z * 5.0, Vec3::Z * 10.0];
        let curve = CatmullRomCurve::new(&points).unwrap();
        let (mut vertices, mut indices) = (Vec::new(), Vec::new());
        extrude(&curve, &round(4), &mut vertices, &mut indices);

        for v in &vertices {
            let p = Vec3::from_array(v.position);
            let radial = Vec3::new(p.x, p.y, 0.0);
            assert!((radial.length() - 0.3).abs() < 1e-4);
            let n = Vec3::from_array(v.normal);
            assert!(n.is_normalized());
            assert!(n.dot(radial.normalize()) > 0.999);
        }
    }

    #[test]
    fn test_flat_profile_is_wider_than_thick() {
        let points = vec![Vec3::ZERO, Vec3::Z * 5.0, Vec3::Z * 10.0];
        let curve = CatmullRomCurve::new(&points).unwrap();
        let shape = TubeShape {
            profile: TubeProfile::Flat {
                half_width: 0.3,
                half_thickness: 0.075,
            },
            ..round(2)
        };
        let (mut vertices, mut indices) = (Vec::new(), Vec::new());
        extrude(&curve, &shape, &mut vertices, &mut indices);

        let extents: Vec<f32> = vertices
            .iter()
            .map(|v| Vec3::new(v.position[0], v.position[1], 0.0).length())
            .collect();
        let max = extents.iter().copied().fold(0.0, f32::max);
        let min = extents.iter().copied().fold(f32::MAX, f32::min);
        assert!((max - 0.3).abs() < 1e-4);
        assert!((min - 0.075).abs() < 1e-4);
    }

    #[test]
    fn test_frames_stay_orthonormal_on_a_helix() {
        let points: Vec<Vec3> = (0..20)
            .map(|i| {
                let a = (i as f32 * 100.0).to_radians();
                Vec3::new(2.0 * a.cos(), i as f32 * 0.18, 2.0 * a.sin())
            })
            .collect();
        let curve = CatmullRomCurve::new(&points).unwrap();
        let mut frames: Vec<Frame> = (0..=40)
            .map(|i| {
                let u = i as f32 / 40.0;
                Frame {
                    pos: curve.point_at(u),
                    tangent: curve.tangent_at(u),
                    normal: Vec3::ZERO,
                    binormal: Vec3::ZERO,
                }
            })
            .collect();
        compute_rmf(&mut frames);
        for f in &frames {
            assert!(f.normal.is_normalized());
            assert!(f.binormal.is_normalized());
            assert!(f.normal.dot(f.tangent).abs() < 1e-3);
            assert!(f.binormal.dot(f.normal).abs() < 1e-3);
        }
    }
}
