//! Centralized runtime options with TOML preset support.
//!
//! Every tweakable setting (structure, camera, animation, display, geometry,
//! lighting, keybindings) lives here. Options serialize to/from TOML so view
//! presets can be stored alongside the binary.

mod animation;
mod camera;
mod display;
mod geometry;
mod keybindings;
mod lighting;

use std::path::Path;

pub use animation::{AnimationOptions, RestartPolicy, UnfoldPolicy};
pub use camera::{CameraOptions, CameraStrategy};
pub use display::{DisplayOptions, RebuildPolicy, Representation};
pub use geometry::GeometryOptions;
pub use keybindings::{KeyAction, KeybindingOptions};
pub use lighting::LightingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FoldError;
use crate::structure::helix::{HelixParams, MAX_RESIDUES};

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Procedural helix parameters.
    pub structure: HelixParams,
    /// Camera projection and controller parameters.
    pub camera: CameraOptions,
    /// Folding animation timing.
    pub animation: AnimationOptions,
    /// Representation and visibility toggles.
    pub display: DisplayOptions,
    /// Primitive sizes and colors.
    pub geometry: GeometryOptions,
    /// Lights and background.
    pub lighting: LightingOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults; the
    /// result is validated.
    pub fn from_toml_str(content: &str) -> Result<Self, FoldError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| FoldError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        opts.validate()?;
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FoldError> {
        let content = std::fs::read_to_string(path).map_err(FoldError::Io)?;
        let opts = Self::from_toml_str(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FoldError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FoldError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FoldError::Io)?;
        }
        std::fs::write(path, content).map_err(FoldError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Check the invariants the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns [`FoldError::InvalidOptions`] naming the first violated
    /// constraint.
    pub fn validate(&self) -> Result<(), FoldError> {
        let invalid = |msg: &str| Err(FoldError::InvalidOptions(msg.to_owned()));
        let cam = &self.camera;
        let anim = &self.animation;

        if !(cam.min_distance > 0.0 && cam.min_distance <= cam.max_distance) {
            return invalid("camera distance range must satisfy 0 < min <= max");
        }
        if !(cam.znear > 0.0 && cam.znear < cam.zfar) {
            return invalid("camera clip planes must satisfy 0 < znear < zfar");
        }
        if !(cam.elevation_margin > 0.0
            && cam.elevation_margin < std::f32::consts::FRAC_PI_2)
        {
            return invalid("camera elevation_margin must lie in (0, pi/2)");
        }
        if !(cam.damping_factor > 0.0 && cam.damping_factor <= 1.0) {
            return invalid("camera damping_factor must lie in (0, 1]");
        }
        if !(cam.rotate_sensitivity.is_finite()
            && cam.rotate_sensitivity > 0.0
            && cam.zoom_sensitivity.is_finite()
            && cam.zoom_sensitivity > 0.0)
        {
            return invalid("camera sensitivities must be finite and > 0");
        }
        if !(anim.max_frames > 0.0 && anim.tick_increment > 0.0) {
            return invalid("animation max_frames and tick_increment must be > 0");
        }
        if !(anim.min_speed > 0.0 && anim.min_speed <= anim.max_speed) {
            return invalid("animation speed range must satisfy 0 < min <= max");
        }
        if !(anim.speed_step.is_finite() && anim.speed_step > 0.0) {
            return invalid("animation speed_step must be finite and > 0");
        }
        if !anim.unfold_extent.is_finite() || anim.unfold_extent < 0.0 {
            return invalid("animation unfold_extent must be finite and >= 0");
        }
        if self.structure.residues > MAX_RESIDUES {
            return invalid("structure residues must be <= 500");
        }
        if self.geometry.sphere_segments < 3
            || self.geometry.tube_radial_segments < 3
            || self.geometry.tube_segments_per_atom == 0
        {
            return invalid("geometry tessellation counts are too small");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let toml_str = r#"
[animation]
speed = 2.5
unfold_policy = "per_frame"

[display]
representation = "cartoon"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.animation.speed, 2.5);
        assert_eq!(opts.animation.unfold_policy, UnfoldPolicy::PerFrame);
        assert_eq!(opts.display.representation, Representation::Cartoon);
        // Everything else should be default
        assert_eq!(opts.animation.max_frames, 100.0);
        assert_eq!(opts.camera.max_distance, 100.0);
        assert!(opts.display.show_bonds);
        assert_eq!(opts.structure.residues, 20);
    }

    #[test]
    fn test_inverted_distance_range_is_rejected() {
        let toml_str = r"
[camera]
min_distance = 50.0
max_distance = 10.0
";
        let err = Options::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(err, FoldError::InvalidOptions(_)));
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        for toml_str in [
            "[animation]\nspeed_step = 0.0",
            "[animation]\nspeed_step = -0.1",
            "[camera]\nrotate_sensitivity = 0.0",
            "[camera]\nzoom_sensitivity = -2.0",
            "[structure]\nresidues = 501",
        ] {
            let err = Options::from_toml_str(toml_str).unwrap_err();
            assert!(
                matches!(err, FoldError::InvalidOptions(_)),
                "{toml_str} should be rejected"
            );
        }
        let mut opts = Options::default();
        opts.camera.zoom_sensitivity = f32::INFINITY;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_fine_speed_step_is_accepted() {
        let opts = Options::from_toml_str("[animation]\nspeed_step = 0.04").unwrap();
        assert_eq!(opts.animation.speed_step, 0.04);
        let mut opts = Options::default();
        opts.structure.residues = MAX_RESIDUES;
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let err = Options::from_toml_str("[animation\nspeed = ").unwrap_err();
        assert!(matches!(err, FoldError::OptionsParse(_)));
    }

    #[test]
    fn test_keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("Space"), Some(KeyAction::TogglePlay));
        assert_eq!(opts.keybindings.lookup("KeyR"), Some(KeyAction::Reset));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn test_custom_keybindings_rebuild_reverse_map() {
        let toml_str = r#"
[keybindings.bindings]
toggle_play = "KeyP"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("KeyP"), Some(KeyAction::TogglePlay));
        assert_eq!(opts.keybindings.lookup("Space"), None);
    }

    #[test]
    fn test_save_then_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("foldscope-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.display.show_atoms = false;
        opts.save(&dir.join("no_atoms.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();

        let loaded = Options::load(&dir.join("no_atoms.toml")).unwrap();
        assert!(!loaded.display.show_atoms);
        assert_eq!(
            Options::list_presets(&dir),
            vec!["default".to_owned(), "no_atoms".to_owned()]
        );
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("animation"));
        assert!(props.contains_key("display"));
        assert!(props.contains_key("lighting"));
        assert!(!props.contains_key("keybindings"));

        let display = &props["display"]["properties"];
        assert!(display.get("show_atoms").is_some());
        assert!(display.get("rebuild_policy").is_none());
    }
}
