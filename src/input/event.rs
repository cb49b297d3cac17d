/// Platform-agnostic pointer input.
///
/// Hosts translate their native events into these and feed them to
/// [`FoldingEngine::handle_input`](crate::engine::FoldingEngine::handle_input).
/// Only the primary button drives the camera.
///
/// # Example
///
/// ```ignore
/// engine.handle_input(InputEvent::PointerDown { x: 100.0, y: 200.0 });
/// engine.handle_input(InputEvent::Wheel { delta_y: 120.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed.
    PointerDown {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Pointer moved to an absolute position.
    PointerMove {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Primary button released (or the pointer left the surface).
    PointerUp,
    /// Scroll wheel, browser convention (positive = scroll down = zoom out).
    Wheel {
        /// Vertical scroll amount in pixels.
        delta_y: f32,
    },
}
