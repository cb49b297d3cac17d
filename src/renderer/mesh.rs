//! GPU vertex and instance types, and scene → GPU data conversion.

use std::f32::consts::{PI, TAU};

use bytemuck::{Pod, Zeroable};

use crate::scene::{LineSegment, MeshVertex, SphereInstance, TubeMesh};

/// Per-instance transform and material for the mesh pipeline.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshInstance {
    /// xyz = translation, w = uniform scale.
    pub offset_scale: [f32; 4],
    /// Linear RGBA.
    pub color: [f32; 4],
    /// x = emissive share of the base color.
    pub params: [f32; 4],
}

impl MeshInstance {
    /// Instance for one atom sphere.
    #[must_use]
    pub fn sphere(sphere: &SphereInstance, emissive: f32) -> Self {
        let c = sphere.center;
        Self {
            offset_scale: [c.x, c.y, c.z, sphere.radius],
            color: sphere.color.to_linear_rgba(1.0),
            params: [emissive, 0.0, 0.0, 0.0],
        }
    }

    /// Identity instance for the world-space tube mesh.
    #[must_use]
    pub fn tube(tube: &TubeMesh) -> Self {
        Self {
            offset_scale: [0.0, 0.0, 0.0, 1.0],
            color: tube.color.to_linear_rgba(tube.opacity),
            params: [0.0; 4],
        }
    }
}

/// Vertex for the line pipeline.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Linear RGBA.
    pub color: [f32; 4],
}

/// Two vertices per segment, for a `LineList` topology.
#[must_use]
pub fn line_vertices(lines: &[LineSegment]) -> Vec<LineVertex> {
    lines
        .iter()
        .flat_map(|line| {
            let color = line.color.to_linear_rgba(line.opacity);
            [
                LineVertex {
                    position: line.start.to_array(),
                    color,
                },
                LineVertex {
                    position: line.end.to_array(),
                    color,
                },
            ]
        })
        .collect()
}

/// Unit UV sphere with `segments` longitude and `segments` latitude bands.
///
/// Pole rows are not stitched with degenerate triangles.
#[must_use]
pub fn unit_sphere(segments: u32) -> (Vec<MeshVertex>, Vec<u32>) {
    let width = segments.max(3);
    let height = segments.max(2);
    let row = width + 1;

    let mut vertices = Vec::with_capacity(((height + 1) * row) as usize);
    for iy in 0..=height {
        let v = iy as f32 / height as f32;
        let (sin_phi, cos_phi) = (v * PI).sin_cos();
        for ix in 0..=width {
            let u = ix as f32 / width as f32;
            let (sin_theta, cos_theta) = (u * TAU).sin_cos();
            let p = [-cos_theta * sin_phi, cos_phi, sin_theta * sin_phi];
            vertices.push(MeshVertex {
                position: p,
                normal: p,
            });
        }
    }

    let mut indices = Vec::with_capacity((width * height * 6) as usize);
    for iy in 0..height {
        for ix in 0..width {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    (vertices, indices)
}

/// Vertex buffer layout for [`MeshVertex`] (locations 0-1).
pub fn mesh_vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
    wgpu::VertexBufferLayout {
        array_stride: size_of::<MeshVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRIBUTES,
    }
}

/// Vertex buffer layout for [`MeshInstance`] (locations 2-4).
pub fn mesh_instance_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        2 => Float32x4, 3 => Float32x4, 4 => Float32x4
    ];
    wgpu::VertexBufferLayout {
        array_stride: size_of::<MeshInstance>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &ATTRIBUTES,
    }
}

/// Vertex buffer layout for [`LineVertex`].
pub fn line_vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];
    wgpu::VertexBufferLayout {
        array_stride: size_of::<LineVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRIBUTES,
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::scene::color::Color;

    #[test]
    fn test_unit_sphere_counts_and_radius() {
        let (vertices, indices) = unit_sphere(16);
        assert_eq!(vertices.len(), 17 * 17);
        // Two triangles per quad, one per quad in the pole rows.
        assert_eq!(indices.len(), (16 * 16 * 2 - 2 * 16) * 3);
        for v in &vertices {
            assert!((Vec3::from_array(v.position).length() - 1.0).abs() < 1e-5);
        }
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }

    #[test]
    fn test_line_vertices_carry_opacity() {
        let lines = [LineSegment {
            start: Vec3::ZERO,
            end: Vec3::X,
            color: Color::WHITE,
            opacity: 0.6,
        }];
        let verts = line_vertices(&lines);
        assert_eq!(verts.len(), 2);
        assert_eq!(verts[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(verts[0].color, [1.0, 1.0, 1.0, 0.6]);
    }

    #[test]
    fn test_sphere_instance_packs_center_and_radius() {
        let sphere = SphereInstance {
            center: Vec3::new(1.0, 2.0, 3.0),
            radius: 0.5,
            color: Color::ATOM_DEFAULT,
        };
        let inst = MeshInstance::sphere(&sphere, 0.3);
        assert_eq!(inst.offset_scale, [1.0, 2.0, 3.0, 0.5]);
        assert_eq!(inst.color, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(inst.params[0], 0.3);
    }

    #[test]
    fn test_gpu_types_match_layout_strides() {
        assert_eq!(size_of::<MeshInstance>(), 48);
        assert_eq!(size_of::<LineVertex>(), 28);
    }
}
