//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a page
//! control, or a programmatic call, is represented as a [`FoldCommand`].
//! Consumers construct commands and pass them to
//! [`FoldingEngine::execute`](super::FoldingEngine::execute).

use crate::options::Representation;

/// A discrete user action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FoldCommand {
    // ── Playback ──
    /// Start, pause, or resume the fold.
    TogglePlay,
    /// Rewind to the unfolded state and stop.
    Reset,
    /// Set the speed multiplier (clamped; non-finite values are ignored).
    SetSpeed(f32),
    /// Raise the speed multiplier by one step.
    SpeedUp,
    /// Lower the speed multiplier by one step.
    SpeedDown,

    // ── Display ──
    /// Switch representation.
    SetRepresentation(Representation),
    /// Switch to the next representation.
    CycleRepresentation,
    /// Show or hide atom spheres.
    SetShowAtoms(bool),
    /// Flip atom sphere visibility.
    ToggleAtoms,
    /// Show or hide bond lines.
    SetShowBonds(bool),
    /// Flip bond line visibility.
    ToggleBonds,
}

impl FoldCommand {
    /// Whether the command changes what the scene draws, so the engine must
    /// rebuild right away instead of waiting for the next tick.
    #[must_use]
    pub fn requires_rebuild(self) -> bool {
        !matches!(
            self,
            Self::TogglePlay | Self::SetSpeed(_) | Self::SpeedUp | Self::SpeedDown
        )
    }
}
