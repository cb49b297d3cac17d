//! Spherical orbit state shared by both camera controllers.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::options::CameraOptions;

/// Position of the eye on a sphere around the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Rotation about the vertical axis, in radians, kept in `(-2π, 2π)`.
    pub azimuth: f32,
    /// Angle above the horizontal plane, in radians.
    pub elevation: f32,
    /// Radius of the orbit sphere.
    pub distance: f32,
}

impl CameraState {
    /// Spherical → Cartesian: `x = d·sin(az)·cos(el)`, `y = d·sin(el)`,
    /// `z = d·cos(az)·cos(el)`.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_el, cos_el) = self.elevation.sin_cos();
        Vec3::new(
            self.distance * sin_az * cos_el,
            self.distance * sin_el,
            self.distance * cos_az * cos_el,
        )
    }
}

/// Clamp ranges applied after every state change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    /// Closest allowed distance.
    pub min_distance: f32,
    /// Farthest allowed distance.
    pub max_distance: f32,
    /// Largest allowed |elevation|; kept short of π/2 so the look-at basis
    /// never degenerates at the poles.
    pub max_elevation: f32,
}

impl OrbitLimits {
    /// Limits from camera options.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            min_distance: options.min_distance,
            max_distance: options.max_distance,
            max_elevation: FRAC_PI_2 - options.elevation_margin,
        }
    }

    /// Clamp an elevation angle into range.
    #[must_use]
    pub fn clamp_elevation(&self, elevation: f32) -> f32 {
        elevation.clamp(-self.max_elevation, self.max_elevation)
    }

    /// Clamp a distance into range.
    #[must_use]
    pub fn clamp_distance(&self, distance: f32) -> f32 {
        distance.clamp(self.min_distance, self.max_distance)
    }

    /// Starting state: facing down -Z from `initial_distance`.
    #[must_use]
    pub fn initial_state(&self, initial_distance: f32) -> CameraState {
        CameraState {
            azimuth: 0.0,
            elevation: 0.0,
            distance: self.clamp_distance(initial_distance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eye_at_zero_angles_sits_on_positive_z() {
        let state = CameraState {
            azimuth: 0.0,
            elevation: 0.0,
            distance: 30.0,
        };
        assert_eq!(state.eye(), Vec3::new(0.0, 0.0, 30.0));
    }

    #[test]
    fn test_eye_stays_on_sphere() {
        let state = CameraState {
            azimuth: 1.3,
            elevation: -0.7,
            distance: 12.0,
        };
        assert!((state.eye().length() - 12.0).abs() < 1e-4);
        assert!(state.eye().y < 0.0);
    }

    #[test]
    fn test_limits_clamp_both_axes() {
        let limits = OrbitLimits::from_options(&CameraOptions::default());
        assert_eq!(limits.clamp_distance(1.0), 5.0);
        assert_eq!(limits.clamp_distance(250.0), 100.0);
        assert_eq!(limits.clamp_elevation(3.0), FRAC_PI_2 - 0.1);
        assert_eq!(limits.clamp_elevation(-3.0), -(FRAC_PI_2 - 0.1));
    }
}
