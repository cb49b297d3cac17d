use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which camera controller drives the view. Resolved once when the engine
/// is built.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CameraStrategy {
    /// Built-in spherical orbit controller; input handlers move the camera
    /// immediately.
    #[default]
    Orbit,
    /// Conventional orbit controls with inertia: input accumulates and is
    /// applied gradually in the per-frame update.
    Damped,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Controller strategy.
    #[schemars(title = "Controller")]
    pub strategy: CameraStrategy,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Orbit radius at startup.
    #[schemars(skip)]
    pub initial_distance: f32,
    /// Closest allowed orbit radius.
    #[schemars(title = "Min Distance", range(min = 1.0, max = 50.0), extend("step" = 1.0))]
    pub min_distance: f32,
    /// Farthest allowed orbit radius.
    #[schemars(title = "Max Distance", range(min = 20.0, max = 500.0), extend("step" = 5.0))]
    pub max_distance: f32,
    /// Radians of rotation per pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub rotate_sensitivity: f32,
    /// Distance change per wheel unit (orbit) or zoom rate (damped).
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_sensitivity: f32,
    /// Keeps elevation this many radians away from the poles.
    #[schemars(skip)]
    pub elevation_margin: f32,
    /// Share of pending motion applied per frame by the damped controller.
    #[schemars(title = "Damping", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub damping_factor: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            strategy: CameraStrategy::Orbit,
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            initial_distance: 30.0,
            min_distance: 5.0,
            max_distance: 100.0,
            rotate_sensitivity: 0.01,
            zoom_sensitivity: 0.1,
            elevation_margin: 0.1,
            damping_factor: 0.05,
        }
    }
}
