//! Scene lighting uniform.

use glam::Vec3;

use crate::options::LightingOptions;

/// Lighting uniform matching `Lighting` in `mesh.wgsl` (48 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// Unit direction toward the key light, intensity in `w`.
    pub key: [f32; 4],
    /// Unit direction toward the fill light, intensity in `w`.
    pub fill: [f32; 4],
    /// Ambient intensity in `x`.
    pub ambient: [f32; 4],
}

impl LightingUniform {
    /// Uniform for the given options. Lights shine from their position
    /// toward the origin.
    #[must_use]
    pub fn from_options(options: &LightingOptions) -> Self {
        let dir = |p: [f32; 3]| Vec3::from_array(p).normalize_or_zero();
        let key = dir(options.key_position);
        let fill = dir(options.fill_position);
        Self {
            key: key.extend(options.key_intensity).to_array(),
            fill: fill.extend(options.fill_intensity).to_array(),
            ambient: [options.ambient, 0.0, 0.0, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lights_face_each_other() {
        let u = LightingUniform::from_options(&LightingOptions::default());
        let key = Vec3::new(u.key[0], u.key[1], u.key[2]);
        let fill = Vec3::new(u.fill[0], u.fill[1], u.fill[2]);
        assert!((key + fill).length() < 1e-6);
        assert!(key.is_normalized());
        assert_eq!(u.key[3], 0.8);
        assert_eq!(u.fill[3], 0.4);
        assert_eq!(u.ambient[0], 0.6);
    }
}
