//! Renderable scene: atom spheres, bond lines, and the backbone tube.
//!
//! The scene is rebuilt from the structure by [`assemble::rebuild`]. Hosts
//! poll [`Scene::is_dirty`] and call [`Scene::mark_rendered`] once they
//! have uploaded the current primitives.

pub mod assemble;
pub mod color;
pub mod spline;
pub mod tube;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use self::color::Color;

/// One atom sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereInstance {
    /// Sphere center.
    pub center: Vec3,
    /// Sphere radius.
    pub radius: f32,
    /// Surface color.
    pub color: Color,
}

/// One bond line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// First endpoint.
    pub start: Vec3,
    /// Second endpoint.
    pub end: Vec3,
    /// Line color.
    pub color: Color,
    /// Line opacity in `[0, 1]`.
    pub opacity: f32,
}

/// Tube surface vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Outward unit normal.
    pub normal: [f32; 3],
}

/// Indexed triangle mesh for the backbone tube.
#[derive(Debug, Clone, PartialEq)]
pub struct TubeMesh {
    /// Ring vertices.
    pub vertices: Vec<MeshVertex>,
    /// Triangle list indices into `vertices`.
    pub indices: Vec<u32>,
    /// Surface color.
    pub color: Color,
    /// Surface opacity in `[0, 1]`.
    pub opacity: f32,
}

/// Primitive lists for the current frame.
#[derive(Debug, Default)]
pub struct Scene {
    spheres: Vec<SphereInstance>,
    lines: Vec<LineSegment>,
    tube: Option<TubeMesh>,
    /// Monotonically increasing generation; bumped on every rebuild.
    generation: u64,
    /// Generation that was last consumed by the renderer.
    rendered_generation: u64,
}

impl Scene {
    /// Empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Atom spheres, in atom order.
    #[must_use]
    pub fn spheres(&self) -> &[SphereInstance] {
        &self.spheres
    }

    /// Bond lines, in bond order (malformed bonds omitted).
    #[must_use]
    pub fn lines(&self) -> &[LineSegment] {
        &self.lines
    }

    /// Backbone tube, when the representation draws one.
    #[must_use]
    pub fn tube(&self) -> Option<&TubeMesh> {
        self.tube.as_ref()
    }

    /// Current generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether primitives changed since last `mark_rendered()`.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Mark current generation as rendered (call after updating renderers).
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    /// Force the scene dirty, e.g. after a GPU surface was recreated.
    pub fn force_dirty(&mut self) {
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.generation += 1;
    }
}
