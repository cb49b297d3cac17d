//! Unfolded → folded position interpolation.

use glam::Vec3;

/// Interpolate from `unfolded` toward `folded` by `fraction`.
///
/// Computes `unfolded·(1-f) + folded·f`, which equals
/// `unfolded + (folded - unfolded)·f` but hits both endpoints exactly:
/// `f = 0` returns `unfolded` and `f = 1` returns `folded` bit-for-bit.
/// `fraction` is clamped to `[0, 1]`.
#[inline]
pub fn lerp_position(unfolded: Vec3, folded: Vec3, fraction: f32) -> Vec3 {
    let f = fraction.clamp(0.0, 1.0);
    unfolded * (1.0 - f) + folded * f
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        let unfolded = Vec3::new(0.1, -7.3, 9.99);
        let folded = Vec3::new(0.3, 1.0 / 3.0, -1.7320508);
        assert_eq!(lerp_position(unfolded, folded, 0.0), unfolded);
        assert_eq!(lerp_position(unfolded, folded, 1.0), folded);
    }

    #[test]
    fn test_matches_linear_formula() {
        let unfolded = Vec3::new(-4.0, 8.0, 2.0);
        let folded = Vec3::new(2.0, 0.5, -1.0);
        for i in 0..=20 {
            let f = i as f32 / 20.0;
            let expected = unfolded + (folded - unfolded) * f;
            assert!((lerp_position(unfolded, folded, f) - expected).length() < 1e-5);
        }
    }

    #[test]
    fn test_fraction_is_clamped() {
        let unfolded = Vec3::ZERO;
        let folded = Vec3::ONE;
        assert_eq!(lerp_position(unfolded, folded, -0.5), unfolded);
        assert_eq!(lerp_position(unfolded, folded, 2.0), folded);
    }
}
