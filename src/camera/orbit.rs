//! Built-in spherical orbit controller.
//!
//! Every handler updates the camera immediately, so [`CameraRig::update`]
//! has nothing left to do.

use std::f32::consts::TAU;

use glam::Vec2;

use super::core::Camera;
use super::spherical::{CameraState, OrbitLimits};
use super::CameraRig;
use crate::options::CameraOptions;

/// Drag-to-rotate, wheel-to-zoom camera that always looks at the origin.
pub struct OrbitController {
    state: CameraState,
    limits: OrbitLimits,
    rotate_sensitivity: f32,
    zoom_sensitivity: f32,
    is_dragging: bool,
    previous_pointer: Vec2,
    camera: Camera,
}

impl OrbitController {
    /// Controller at the initial orbit position from `options`.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let limits = OrbitLimits::from_options(options);
        let mut controller = Self {
            state: limits.initial_state(options.initial_distance),
            limits,
            rotate_sensitivity: options.rotate_sensitivity,
            zoom_sensitivity: options.zoom_sensitivity,
            is_dragging: false,
            previous_pointer: Vec2::ZERO,
            camera: Camera::from_options(options, aspect),
        };
        controller.update_camera_pos();
        controller
    }

    fn update_camera_pos(&mut self) {
        self.camera.look_at(self.state.eye(), glam::Vec3::ZERO);
    }
}

impl CameraRig for OrbitController {
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
        let delta = (pos - self.previous_pointer) * self.rotate_sensitivity;
        let azimuth = (self.state.azimuth - delta.x) % TAU;
        let elevation = self.state.elevation - delta.y;
        if !(azimuth.is_finite() && elevation.is_finite()) {
            return;
        }
        self.previous_pointer = pos;

        self.state.azimuth = azimuth;
        self.state.elevation = self.limits.clamp_elevation(elevation);
        self.update_camera_pos();
    }

    fn pointer_up(&mut self) {
        self.is_dragging = false;
    }

    fn wheel(&mut self, delta_y: f32) {
        if !delta_y.is_finite() {
            return;
        }
        let distance = self.state.distance + delta_y * self.zoom_sensitivity;
        self.state.distance = self.limits.clamp_distance(distance);
        self.update_camera_pos();
    }

    fn update(&mut self, _dt: f32) {}

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

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use glam::Vec3;

    use super::*;

    fn controller() -> OrbitController {
        OrbitController::new(&CameraOptions::default(), 1.0)
    }

    #[test]
    fn test_starts_thirty_units_down_positive_z() {
        let orbit = controller();
        assert_eq!(orbit.camera().eye, Vec3::new(0.0, 0.0, 30.0));
        assert_eq!(orbit.camera().target, Vec3::ZERO);
    }

    #[test]
    fn test_drag_rotates_by_sensitivity() {
        let mut orbit = controller();
        orbit.pointer_down(Vec2::new(100.0, 100.0));
        orbit.pointer_move(Vec2::new(150.0, 80.0));

        let state = orbit.state();
        assert!((state.azimuth - -0.5).abs() < 1e-6);
        assert!((state.elevation - 0.2).abs() < 1e-6);
        assert!((orbit.camera().eye - state.eye()).length() < 1e-5);
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut orbit = controller();
        orbit.pointer_move(Vec2::new(500.0, 500.0));
        assert_eq!(orbit.state().azimuth, 0.0);

        orbit.pointer_down(Vec2::ZERO);
        orbit.pointer_up();
        orbit.pointer_move(Vec2::new(40.0, 0.0));
        assert_eq!(orbit.state().azimuth, 0.0);
        assert!(!orbit.is_dragging());
    }

    #[test]
    fn test_elevation_never_reaches_the_poles() {
        let mut orbit = controller();
        let limit = FRAC_PI_2 - 0.1;
        orbit.pointer_down(Vec2::ZERO);
        for step in 1..200 {
            orbit.pointer_move(Vec2::new(0.0, -(step as f32) * 37.0));
            assert!(orbit.state().elevation <= limit);
        }
        assert_eq!(orbit.state().elevation, limit);
        for step in 1..400 {
            orbit.pointer_move(Vec2::new(0.0, step as f32 * 53.0));
            assert!(orbit.state().elevation >= -limit);
        }
        assert_eq!(orbit.state().elevation, -limit);
    }

    #[test]
    fn test_wheel_adds_scaled_delta_and_clamps() {
        let mut orbit = controller();
        orbit.wheel(100.0);
        assert!((orbit.state().distance - 40.0).abs() < 1e-5);
        orbit.wheel(10_000.0);
        assert_eq!(orbit.state().distance, 100.0);
        orbit.wheel(-10_000.0);
        assert_eq!(orbit.state().distance, 5.0);
        assert!((orbit.camera().eye.length() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_update_leaves_state_untouched() {
        let mut orbit = controller();
        orbit.wheel(-50.0);
        let before = orbit.state();
        orbit.update(1.0 / 60.0);
        assert_eq!(orbit.state(), before);
    }

    #[test]
    fn test_non_finite_input_is_ignored() {
        let mut orbit = controller();
        let limit = FRAC_PI_2 - 0.1;

        orbit.wheel(f32::NAN);
        orbit.wheel(f32::INFINITY);
        assert_eq!(orbit.state().distance, 30.0);
        orbit.wheel(-100.0);
        assert!((orbit.state().distance - 20.0).abs() < 1e-5);

        orbit.pointer_down(Vec2::ZERO);
        orbit.pointer_move(Vec2::new(0.0, f32::NAN));
        orbit.pointer_move(Vec2::new(f32::INFINITY, 0.0));
        orbit.pointer_move(Vec2::new(0.0, 10.0));
        let state = orbit.state();
        assert!((state.elevation - -0.1).abs() < 1e-6);
        assert!(state.elevation.abs() <= limit);
        assert_eq!(state.azimuth, 0.0);
        assert!(orbit.camera().eye.is_finite());

        orbit.pointer_up();
        orbit.pointer_down(Vec2::new(f32::NAN, 0.0));
        assert!(!orbit.is_dragging());
    }
}
