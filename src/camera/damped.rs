//! Orbit controls with inertia.
//!
//! Pointer and wheel input only accumulate pending motion. The per-frame
//! [`CameraRig::update`] applies a `damping_factor` share of the pending
//! rotation (normalized to 60 fps) and decays the rest, so the view keeps
//! gliding briefly after the pointer stops. Zoom is multiplicative and is
//! applied in full on the next update.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use super::core::Camera;
use super::spherical::{CameraState, OrbitLimits};
use super::CameraRig;
use crate::options::CameraOptions;

/// Pending rotation below this is dropped.
const SETTLE_EPSILON: f32 = 1e-5;
/// Wheel units per zoom step (one browser wheel notch).
const WHEEL_UNITS_PER_STEP: f32 = 100.0;

/// Damped orbit camera that always looks at the origin.
pub struct DampedOrbitController {
    state: CameraState,
    limits: OrbitLimits,
    rotate_sensitivity: f32,
    zoom_sensitivity: f32,
    damping_factor: f32,
    pending_rotation: Vec2,
    pending_scale: f32,
    is_dragging: bool,
    previous_pointer: Vec2,
    camera: Camera,
}

impl DampedOrbitController {
    /// Controller at the initial orbit position from `options`.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let limits = OrbitLimits::from_options(options);
        let mut controller = Self {
            state: limits.initial_state(options.initial_distance),
            limits,
            rotate_sensitivity: options.rotate_sensitivity,
            zoom_sensitivity: options.zoom_sensitivity,
            damping_factor: options.damping_factor,
            pending_rotation: Vec2::ZERO,
            pending_scale: 1.0,
            is_dragging: false,
            previous_pointer: Vec2::ZERO,
            camera: Camera::from_options(options, aspect),
        };
        controller.update_camera_pos();
        controller
    }

    /// Whether any rotation or zoom is still waiting to be applied.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.pending_rotation == Vec2::ZERO && self.pending_scale == 1.0
    }

    fn update_camera_pos(&mut self) {
        self.camera.look_at(self.state.eye(), Vec3::ZERO);
    }
}

impl CameraRig for DampedOrbitController {
    fn pointer_down(&mut self, pos: Vec2) {
        if !pos.is_finite() {
            return;
        }
        self.is_dragging = true;
        self.previous_pointer = pos;
    }

    fn pointer_move(&mut self, pos: Vec2) {
        if !self.is_dragging || !pos.is_finite() {
            return;
        }
        let pending = self.pending_rotation
            - (pos - self.previous_pointer) * self.rotate_sensitivity;
        if !pending.is_finite() {
            return;
        }
        self.previous_pointer = pos;
        self.pending_rotation = pending;
    }

    fn pointer_up(&mut self) {
        self.is_dragging = false;
    }

    fn wheel(&mut self, delta_y: f32) {
        if !delta_y.is_finite() {
            return;
        }
        // Positive delta zooms out, matching browser wheel events.
        let scale = self.pending_scale
            * (1.0 + self.zoom_sensitivity).powf(delta_y / WHEEL_UNITS_PER_STEP);
        // Keep the scale finite and positive; the distance clamp does the rest.
        if !scale.is_nan() {
            self.pending_scale = scale.clamp(f32::MIN_POSITIVE, f32::MAX);
        }
    }

    fn update(&mut self, dt: f32) {
        if self.is_settled() {
            return;
        }

        let frames = (dt * 60.0).max(0.0);
        let share = 1.0 - (1.0 - self.damping_factor).powf(frames);
        let step = self.pending_rotation * share;
        self.pending_rotation -= step;

        self.state.azimuth = (self.state.azimuth + step.x) % TAU;
        let elevation = self.state.elevation + step.y;
        self.state.elevation = self.limits.clamp_elevation(elevation);
        if self.state.elevation != elevation {
            self.pending_rotation.y = 0.0;
        }
        if self.pending_rotation.length() < SETTLE_EPSILON {
            self.pending_rotation = Vec2::ZERO;
        }

        self.state.distance = self
            .limits
            .clamp_distance(self.state.distance * self.pending_scale);
        self.pending_scale = 1.0;

        self.update_camera_pos();
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    fn state(&self) -> CameraState {
        self.state
    }

    fn camera(&self) -> &Camera {
        &self.camera
    }

    fn is_dragging(&self) -> bool {
        self.is_dragging
    }
}
