use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What toggling play does once the fold has completed.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RestartPolicy {
    /// Flip the playing flag only; progress stays at the end and the next
    /// tick stops again.
    #[default]
    Hold,
    /// Rewind to zero and play again.
    Rewind,
}

/// Where the unfolded starting positions come from.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum UnfoldPolicy {
    /// Sample once per session and reuse for every rebuild.
    #[default]
    Fixed,
    /// Resample on every rebuild, so atoms jitter while folding.
    PerFrame,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Folding animation timing and unfold sampling.
pub struct AnimationOptions {
    /// Progress value at which the fold is complete.
    #[schemars(skip)]
    pub max_frames: f32,
    /// Progress added per frame at speed 1.0.
    #[schemars(skip)]
    pub tick_increment: f32,
    /// Initial speed multiplier.
    #[schemars(title = "Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub speed: f32,
    /// Lowest accepted speed multiplier.
    #[schemars(skip)]
    pub min_speed: f32,
    /// Highest accepted speed multiplier.
    #[schemars(skip)]
    pub max_speed: f32,
    /// Speed change per speed-up / speed-down key press.
    #[schemars(skip)]
    pub speed_step: f32,
    /// Behavior of play after completion.
    #[schemars(title = "After Completion")]
    pub restart_policy: RestartPolicy,
    /// Unfolded-position sampling policy.
    #[schemars(title = "Unfolded State")]
    pub unfold_policy: UnfoldPolicy,
    /// Seed for the fixed unfold sample; random when absent.
    #[schemars(skip)]
    pub unfold_seed: Option<u64>,
    /// Edge length of the cube the unfolded positions are drawn from.
    #[schemars(skip)]
    pub unfold_extent: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            max_frames: 100.0,
            tick_increment: 0.02,
            speed: 1.0,
            min_speed: 0.1,
            max_speed: 5.0,
            speed_step: 0.1,
            restart_policy: RestartPolicy::Hold,
            unfold_policy: UnfoldPolicy::Fixed,
            unfold_seed: None,
            unfold_extent: 20.0,
        }
    }
}
