//! Pointer input and command dispatch for FoldingEngine

use glam::Vec2;

use super::command::FoldCommand;
use super::FoldingEngine;
use crate::input::InputEvent;

impl FoldingEngine {
    /// Process a platform-agnostic pointer event.
    ///
    /// Pointer events drive the camera only; they never touch the
    /// animation or the scene.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.rig.pointer_down(Vec2::new(x, y));
            }
            InputEvent::PointerMove { x, y } => {
                self.rig.pointer_move(Vec2::new(x, y));
            }
            InputEvent::PointerUp => self.rig.pointer_up(),
            InputEvent::Wheel { delta_y } => self.rig.wheel(delta_y),
        }
    }

    /// Execute a control action.
    ///
    /// Display changes and reset rebuild the scene right away at the
    /// current fraction; playback and speed changes take effect on the
    /// next [`update`](Self::update).
    pub fn execute(&mut self, cmd: FoldCommand) {
        let display = &mut self.options.display;
        match cmd {
            FoldCommand::TogglePlay => {
                let _ = self.animator.toggle_play();
            }
            FoldCommand::Reset => self.animator.reset(),
            FoldCommand::SetSpeed(speed) => {
                let _ = self.animator.set_speed(speed);
            }
            FoldCommand::SpeedUp => {
                let _ = self
                    .animator
                    .adjust_speed(self.options.animation.speed_step);
            }
            FoldCommand::SpeedDown => {
                let _ = self
                    .animator
                    .adjust_speed(-self.options.animation.speed_step);
            }
            FoldCommand::SetRepresentation(representation) => {
                display.representation = representation;
            }
            FoldCommand::CycleRepresentation => {
                display.representation = display.representation.next();
            }
            FoldCommand::SetShowAtoms(show) => display.show_atoms = show,
            FoldCommand::ToggleAtoms => display.show_atoms = !display.show_atoms,
            FoldCommand::SetShowBonds(show) => display.show_bonds = show,
            FoldCommand::ToggleBonds => display.show_bonds = !display.show_bonds,
        }

        if cmd.requires_rebuild() {
            log::debug!(
                "{cmd:?}: {} atoms={} bonds={}",
                self.options.display.representation.as_str(),
                self.options.display.show_atoms,
                self.options.display.show_bonds,
            );
            self.rebuild();
        }
    }
}
