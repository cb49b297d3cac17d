//! Random unfolded starting positions.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::options::{AnimationOptions, UnfoldPolicy};

/// Source of the unfolded position for each atom.
///
/// Each coordinate is drawn uniformly from `[-extent/2, extent/2)`. Under
/// [`UnfoldPolicy::Fixed`] the sample is drawn once and reused; under
/// [`UnfoldPolicy::PerFrame`] every call draws fresh positions.
pub struct UnfoldSampler {
    policy: UnfoldPolicy,
    extent: f32,
    rng: StdRng,
    positions: Vec<Vec3>,
}

impl UnfoldSampler {
    /// Sampler seeded from `options.unfold_seed`, or from the thread RNG.
    #[must_use]
    pub fn new(options: &AnimationOptions) -> Self {
        let rng = match options.unfold_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self {
            policy: options.unfold_policy,
            extent: options.unfold_extent,
            rng,
            positions: Vec::new(),
        }
    }

    /// Active sampling policy.
    #[must_use]
    pub fn policy(&self) -> UnfoldPolicy {
        self.policy
    }

    /// Unfolded positions for `count` atoms.
    ///
    /// The fixed policy only draws new values for atoms it has not seen
    /// yet, so the first `n` positions never change.
    pub fn sample(&mut self, count: usize) -> &[Vec3] {
        match self.policy {
            UnfoldPolicy::Fixed => {
                while self.positions.len() < count {
                    let p = self.draw();
                    self.positions.push(p);
                }
            }
            UnfoldPolicy::PerFrame => {
                self.positions.clear();
                for _ in 0..count {
                    let p = self.draw();
                    self.positions.push(p);
                }
            }
        }
        &self.positions[..count]
    }

    fn draw(&mut self) -> Vec3 {
        let mut axis = || (self.rng.random::<f32>() - 0.5) * self.extent;
        Vec3::new(axis(), axis(), axis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(policy: UnfoldPolicy, seed: Option<u64>) -> AnimationOptions {
        AnimationOptions {
            unfold_policy: policy,
            unfold_seed: seed,
            ..AnimationOptions::default()
        }
    }

    #[test]
    fn test_samples_lie_in_the_cube() {
        let mut sampler = UnfoldSampler::new(&options(UnfoldPolicy::PerFrame, None));
        for p in sampler.sample(500) {
            assert!(p.abs().max_element() <= 10.0);
        }
    }

    #[test]
    fn test_fixed_sample_is_stable_across_calls() {
        let mut sampler = UnfoldSampler::new(&options(UnfoldPolicy::Fixed, None));
        let first = sampler.sample(20).to_vec();
        let second = sampler.sample(20).to_vec();
        assert_eq!(first, second);
        // Growing keeps the existing prefix.
        assert_eq!(&sampler.sample(25)[..20], first.as_slice());
    }

    #[test]
    fn test_same_seed_reproduces_positions() {
        let mut a = UnfoldSampler::new(&options(UnfoldPolicy::Fixed, Some(7)));
        let mut b = UnfoldSampler::new(&options(UnfoldPolicy::Fixed, Some(7)));
        assert_eq!(a.sample(20), b.sample(20));
    }

    #[test]
    fn test_per_frame_resamples() {
        let mut sampler =
            UnfoldSampler::new(&options(UnfoldPolicy::PerFrame, Some(3)));
        let first = sampler.sample(20).to_vec();
        let second = sampler.sample(20).to_vec();
        assert_ne!(first, second);
    }

    #[test]
    fn test_zero_extent_collapses_to_origin() {
        let mut opts = options(UnfoldPolicy::Fixed, Some(1));
        opts.unfold_extent = 0.0;
        let mut sampler = UnfoldSampler::new(&opts);
        assert!(sampler.sample(4).iter().all(|p| *p == Vec3::ZERO));
    }
}
