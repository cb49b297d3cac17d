//! Browser bridge: a [`FoldingSession`] the page drives from JavaScript.
//!
//! The page owns its canvas and controls. It forwards pointer, wheel and
//! resize events, calls [`FoldingSession::tick`] from
//! `requestAnimationFrame`, and reads the scene back as typed arrays when
//! [`FoldingSession::generation`] changes.
//!
//! ```js
//! const session = new FoldingSession(canvas.width, canvas.height);
//! canvas.onpointerdown = (e) => session.pointer_down(e.offsetX, e.offsetY);
//! function frame() {
//!   session.tick();
//!   if (session.generation() !== seen) { draw(session); seen = session.generation(); }
//!   requestAnimationFrame(frame);
//! }
//! ```

use js_sys::{Float32Array, Uint32Array};
use wasm_bindgen::prelude::*;

use crate::engine::command::FoldCommand;
use crate::engine::FoldingEngine;
use crate::error::FoldError;
use crate::input::InputEvent;
use crate::options::{Options, Representation};
use crate::scene::Scene;
use crate::util::frame_timing::FrameTiming;

/// Install the panic hook and console logger. Safe to call repeatedly.
fn init_logging() {
    console_error_panic_hook::set_once();
    // Already initialized on the second session; nothing to do then.
    let _ = console_log::init_with_level(log::Level::Info);
}

fn to_js(e: &FoldError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// One folding session bound to a page canvas.
#[wasm_bindgen]
pub struct FoldingSession {
    engine: FoldingEngine,
    timing: FrameTiming,
}

#[wasm_bindgen]
impl FoldingSession {
    /// Session with default options for a `width` x `height` canvas.
    ///
    /// # Errors
    ///
    /// Never fails with default options; the `Result` mirrors
    /// [`with_options`](Self::with_options).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<FoldingSession, JsValue> {
        init_logging();
        Self::build(Options::default(), width, height)
    }

    /// Session with options given as a TOML document.
    ///
    /// # Errors
    ///
    /// Returns the error message when the TOML does not parse or the
    /// options are invalid.
    pub fn with_options(
        toml: &str,
        width: u32,
        height: u32,
    ) -> Result<FoldingSession, JsValue> {
        init_logging();
        let options = Options::from_toml_str(toml).map_err(|e| to_js(&e))?;
        Self::build(options, width, height)
    }

    fn build(
        options: Options,
        width: u32,
        height: u32,
    ) -> Result<FoldingSession, JsValue> {
        let engine =
            FoldingEngine::new(options, (width, height)).map_err(|e| to_js(&e))?;
        Ok(Self {
            engine,
            timing: FrameTiming::new(),
        })
    }

    /// JSON schema of the options tree, for generating settings forms.
    #[must_use]
    pub fn options_schema() -> String {
        serde_json::to_string(&Options::json_schema()).unwrap_or_default()
    }

    /// Advance one frame.
    pub fn tick(&mut self) {
        let dt = self.timing.tick();
        self.engine.update(dt);
    }

    /// Canvas resized.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.engine.resize(width, height);
    }

    // ── Controls ──

    /// Play/pause. Returns whether the animation is now playing.
    pub fn toggle_play(&mut self) -> bool {
        self.engine.execute(FoldCommand::TogglePlay);
        self.engine.animator().is_playing()
    }

    /// Stop and return to the unfolded state.
    pub fn reset(&mut self) {
        self.engine.execute(FoldCommand::Reset);
    }

    /// Set the speed multiplier. Returns the clamped value in effect.
    pub fn set_speed(&mut self, speed: f32) -> f32 {
        self.engine.execute(FoldCommand::SetSpeed(speed));
        self.engine.animator().speed()
    }

    /// Switch representation by name (`ribbon`, `cartoon`,
    /// `ball_and_stick`). Unknown names are ignored and return `false`.
    pub fn set_representation(&mut self, name: &str) -> bool {
        let Some(rep) = Representation::parse(name) else {
            log::warn!("unknown representation {name:?}");
            return false;
        };
        self.engine.execute(FoldCommand::SetRepresentation(rep));
        true
    }

    /// Show or hide atom spheres.
    pub fn set_show_atoms(&mut self, show: bool) {
        self.engine.execute(FoldCommand::SetShowAtoms(show));
    }

    /// Show or hide bond lines.
    pub fn set_show_bonds(&mut self, show: bool) {
        self.engine.execute(FoldCommand::SetShowBonds(show));
    }

    // ── Pointer input (canvas pixels) ──

    /// Primary button pressed.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.engine.handle_input(InputEvent::PointerDown { x, y });
    }

    /// Pointer moved.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.engine.handle_input(InputEvent::PointerMove { x, y });
    }

    /// Primary button released or pointer left the canvas.
    pub fn pointer_up(&mut self) {
        self.engine.handle_input(InputEvent::PointerUp);
    }

    /// `WheelEvent.deltaY`, positive to zoom out.
    pub fn wheel(&mut self, delta_y: f32) {
        self.engine.handle_input(InputEvent::Wheel { delta_y });
    }

    // ── HUD ──

    /// Atom count.
    pub fn atom_count(&self) -> u32 {
        self.engine.structure().atom_count() as u32
    }

    /// Bond count.
    pub fn bond_count(&self) -> u32 {
        self.engine.structure().bond_count() as u32
    }

    /// Stage percentage, e.g. `"45%"`.
    pub fn stage_label(&self) -> String {
        self.engine.animator().stage_label()
    }

    /// `"1.0x"`.
    pub fn speed_label(&self) -> String {
        self.engine.animator().speed_label()
    }

    /// Label for the play button.
    pub fn play_label(&self) -> String {
        self.engine.animator().play_label().to_owned()
    }

    /// Active representation name.
    pub fn representation(&self) -> String {
        self.engine.display().representation.as_str().to_owned()
    }

    // ── Scene ──

    /// Bumped on every scene rebuild.
    pub fn generation(&self) -> f64 {
        self.engine.scene().generation() as f64
    }

    /// Sphere centers and radii, `[x, y, z, r]` per sphere.
    pub fn spheres(&self) -> Float32Array {
        Float32Array::from(sphere_data(self.engine.scene()).as_slice())
    }

    /// Sphere colors as `0xRRGGBB`.
    pub fn sphere_colors(&self) -> Uint32Array {
        let colors: Vec<u32> =
            self.engine.scene().spheres().iter().map(|s| s.color.0).collect();
        Uint32Array::from(colors.as_slice())
    }

    /// Bond endpoints, `[x0, y0, z0, x1, y1, z1]` per line.
    pub fn line_endpoints(&self) -> Float32Array {
        Float32Array::from(line_data(self.engine.scene()).as_slice())
    }

    /// Tube vertices, `[px, py, pz, nx, ny, nz]` each. Empty without a tube.
    pub fn tube_vertices(&self) -> Float32Array {
        Float32Array::from(tube_vertex_data(self.engine.scene()).as_slice())
    }

    /// Tube triangle indices. Empty without a tube.
    pub fn tube_indices(&self) -> Uint32Array {
        let indices = self
            .engine
            .scene()
            .tube()
            .map_or(&[][..], |t| t.indices.as_slice());
        Uint32Array::from(indices)
    }

    /// Camera eye position `[x, y, z]`. The camera always looks at the
    /// origin.
    pub fn camera_eye(&self) -> Float32Array {
        Float32Array::from(&self.engine.camera().eye.to_array()[..])
    }
}

fn sphere_data(scene: &Scene) -> Vec<f32> {
    scene
        .spheres()
        .iter()
        .flat_map(|s| s.center.extend(s.radius).to_array())
        .collect()
}

fn line_data(scene: &Scene) -> Vec<f32> {
    scene
        .lines()
        .iter()
        .flat_map(|l| {
            let (a, b) = (l.start, l.end);
            [a.x, a.y, a.z, b.x, b.y, b.z]
        })
        .collect()
}

fn tube_vertex_data(scene: &Scene) -> Vec<f32> {
    scene.tube().map_or_else(Vec::new, |tube| {
        bytemuck::cast_slice::<_, f32>(&tube.vertices).to_vec()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> FoldingEngine {
        FoldingEngine::new(Options::default(), (800, 600)).unwrap()
    }

    #[test]
    fn test_sphere_data_packs_center_and_radius() {
        let engine = engine();
        let data = sphere_data(engine.scene());
        assert_eq!(data.len(), 20 * 4);
        let first = engine.scene().spheres()[0];
        assert_eq!(&data[..3], &first.center.to_array());
        assert_eq!(data[3], first.radius);
    }

    #[test]
    fn test_line_data_has_six_floats_per_bond() {
        let mut engine = engine();
        assert_eq!(line_data(engine.scene()).len(), 19 * 6);
        engine.execute(FoldCommand::SetShowBonds(false));
        assert!(line_data(engine.scene()).is_empty());
    }

    #[test]
    fn test_tube_data_interleaves_position_and_normal() {
        let mut engine = engine();
        let tube = engine.scene().tube().unwrap();
        let data = tube_vertex_data(engine.scene());
        assert_eq!(data.len(), tube.vertices.len() * 6);
        assert_eq!(&data[3..6], &tube.vertices[0].normal);

        engine.execute(FoldCommand::SetRepresentation(
            Representation::BallAndStick,
        ));
        assert!(tube_vertex_data(engine.scene()).is_empty());
    }
}
