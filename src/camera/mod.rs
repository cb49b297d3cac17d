//! Camera system for orbiting the structure.
//!
//! Two controllers share the same spherical state and clamps: the eager
//! [`orbit::OrbitController`] and the inertial
//! [`damped::DampedOrbitController`]. Which one runs is decided once, by
//! [`CameraStrategy`](crate::options::CameraStrategy), when the engine is
//! built.

/// Core camera struct and GPU uniform type.
pub mod core;
/// Inertial orbit controls.
pub mod damped;
/// Eager spherical orbit controller.
pub mod orbit;
/// Spherical state and clamp limits.
pub mod spherical;

use glam::Vec2;

use self::core::Camera;
use self::damped::DampedOrbitController;
use self::orbit::OrbitController;
pub use self::spherical::{CameraState, OrbitLimits};
use crate::options::{CameraOptions, CameraStrategy};

/// Pointer/wheel driven camera that always looks at the world origin.
///
/// Pointer positions are in physical pixels; wheel deltas follow the
/// browser convention (positive = scroll down = zoom out).
pub trait CameraRig {
    /// Primary button pressed at `pos`.
    fn pointer_down(&mut self, pos: Vec2);
    /// Pointer moved to `pos`.
    fn pointer_move(&mut self, pos: Vec2);
    /// Primary button released.
    fn pointer_up(&mut self);
    /// Wheel scrolled by `delta_y`.
    fn wheel(&mut self, delta_y: f32);
    /// Per-frame hook, called once before the frame is drawn.
    fn update(&mut self, dt: f32);
    /// Viewport size changed.
    fn resize(&mut self, width: u32, height: u32);
    /// Current spherical state.
    fn state(&self) -> CameraState;
    /// Camera positioned from the current state.
    fn camera(&self) -> &Camera;
    /// Whether a drag is in progress.
    fn is_dragging(&self) -> bool;
}

/// Build the controller selected by `options.strategy`.
#[must_use]
pub fn build_rig(options: &CameraOptions, aspect: f32) -> Box<dyn CameraRig> {
    log::debug!("camera strategy: {:?}", options.strategy);
    match options.strategy {
        CameraStrategy::Orbit => Box::new(OrbitController::new(options, aspect)),
        CameraStrategy::Damped => {
            Box::new(DampedOrbitController::new(options, aspect))
        }
    }
}
