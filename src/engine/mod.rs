//! The folding session: structure, animation, camera, and scene in one
//! owner.
//!
//! Hosts (the native viewer, the web bridge, tests) drive a
//! [`FoldingEngine`] with three calls: [`FoldingEngine::handle_input`] for
//! pointer events, [`FoldingEngine::execute`] for control actions, and
//! [`FoldingEngine::update`] once per frame.

pub mod command;
mod hud;
mod input;

pub use hud::Hud;

use crate::animation::{FoldingAnimator, UnfoldSampler};
use crate::camera::core::Camera;
use crate::camera::{build_rig, CameraRig, CameraState};
use crate::error::FoldError;
use crate::options::{DisplayOptions, Options};
use crate::scene::{assemble, Scene};
use crate::structure::{helix, ProteinStructure};

/// One interactive folding session.
pub struct FoldingEngine {
    options: Options,
    structure: ProteinStructure,
    animator: FoldingAnimator,
    sampler: UnfoldSampler,
    rig: Box<dyn CameraRig>,
    scene: Scene,
}

impl FoldingEngine {
    /// Build a session for a viewport of `size` physical pixels.
    ///
    /// Generates the structure, samples the unfolded state, and builds the
    /// scene at fraction 0.
    ///
    /// # Errors
    ///
    /// Returns [`FoldError::InvalidOptions`] when `options` fail validation.
    pub fn new(options: Options, size: (u32, u32)) -> Result<Self, FoldError> {
        options.validate()?;

        let structure = helix::generate(&options.structure);
        let aspect = aspect_ratio(size.0, size.1);
        let mut engine = Self {
            animator: FoldingAnimator::new(&options.animation),
            sampler: UnfoldSampler::new(&options.animation),
            rig: build_rig(&options.camera, aspect),
            structure,
            scene: Scene::new(),
            options,
        };
        engine.rebuild();

        log::info!(
            "folding engine ready: {} atoms, {} bonds, {:?} camera",
            engine.structure.atom_count(),
            engine.structure.bond_count(),
            engine.options.camera.strategy,
        );
        Ok(engine)
    }

    /// Advance one frame: tick the animation (rebuilding the scene when it
    /// moved) and let the camera apply pending motion.
    pub fn update(&mut self, dt: f32) {
        if self.animator.tick().is_some() {
            self.rebuild();
        }
        self.rig.update(dt);
    }

    /// Viewport size changed. Zero sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.rig.resize(width, height);
    }

    /// Rebuild the scene at the current fraction.
    fn rebuild(&mut self) {
        assemble::rebuild(
            &mut self.scene,
            &mut self.structure,
            &mut self.sampler,
            self.animator.fraction(),
            &self.options.display,
            &self.options.geometry,
        );
    }

    // ── Accessors ──

    /// Current primitives.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene access for dirty tracking.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// The generated structure, with `current` positions from the last
    /// rebuild.
    #[must_use]
    pub fn structure(&self) -> &ProteinStructure {
        &self.structure
    }

    /// Animation state.
    #[must_use]
    pub fn animator(&self) -> &FoldingAnimator {
        &self.animator
    }

    /// Camera positioned by the active controller.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        self.rig.camera()
    }

    /// Spherical camera state.
    #[must_use]
    pub fn camera_state(&self) -> CameraState {
        self.rig.state()
    }

    /// Display toggles in effect.
    #[must_use]
    pub fn display(&self) -> &DisplayOptions {
        &self.options.display
    }

    /// Options the session was built with, with live display changes.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}

fn aspect_ratio(width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}
