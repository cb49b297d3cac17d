//! Folding animation: progress driver, unfold sampling, interpolation.

pub mod driver;
pub mod interpolation;
pub mod unfold;

pub use driver::{AnimationPhase, FoldingAnimator};
pub use interpolation::lerp_position;
pub use unfold::UnfoldSampler;
