use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::engine::command::FoldCommand;

/// Discrete, parameterless actions that can be bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Play / pause the fold.
    TogglePlay,
    /// Rewind to the unfolded state and stop.
    Reset,
    /// Switch to the next representation.
    CycleRepresentation,
    /// Show / hide atom spheres.
    ToggleAtoms,
    /// Show / hide bond lines.
    ToggleBonds,
    /// Raise the speed multiplier by one step.
    SpeedUp,
    /// Lower the speed multiplier by one step.
    SpeedDown,
}

impl KeyAction {
    /// The engine command this action triggers.
    #[must_use]
    pub fn to_command(self) -> FoldCommand {
        match self {
            Self::TogglePlay => FoldCommand::TogglePlay,
            Self::Reset => FoldCommand::Reset,
            Self::CycleRepresentation => FoldCommand::CycleRepresentation,
            Self::ToggleAtoms => FoldCommand::ToggleAtoms,
            Self::ToggleBonds => FoldCommand::ToggleBonds,
            Self::SpeedUp => FoldCommand::SpeedUp,
            Self::SpeedDown => FoldCommand::SpeedDown,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format: `"Space"`,
/// `"KeyR"`, `"Equal"`, etc.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `TogglePlay` → `"Space"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::TogglePlay, "Space".into()),
            (KeyAction::Reset, "KeyR".into()),
            (KeyAction::CycleRepresentation, "KeyV".into()),
            (KeyAction::ToggleAtoms, "KeyA".into()),
            (KeyAction::ToggleBonds, "KeyB".into()),
            (KeyAction::SpeedUp, "Equal".into()),
            (KeyAction::SpeedDown, "Minus".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}
