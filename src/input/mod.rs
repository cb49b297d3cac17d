//! Input handling: pointer event types and native event conversion.

/// Platform-agnostic input events.
pub mod event;

pub use event::InputEvent;

/// Pixels per wheel line, matching what browsers report for one notch.
pub const PIXELS_PER_LINE: f32 = 100.0;

/// Convert a winit wheel delta to a browser-style `deltaY`.
///
/// winit reports scrolling up as positive; browsers report scrolling down
/// as positive. Line deltas are scaled to [`PIXELS_PER_LINE`].
#[cfg(feature = "viewer")]
#[must_use]
pub fn wheel_delta_y(delta: winit::event::MouseScrollDelta) -> f32 {
    match delta {
        winit::event::MouseScrollDelta::LineDelta(_, y) => -y * PIXELS_PER_LINE,
        winit::event::MouseScrollDelta::PixelDelta(pos) => -(pos.y as f32),
    }
}

/// Key string for a winit key code, in the form keybinding options use
/// (`"Space"`, `"KeyR"`).
#[cfg(feature = "viewer")]
#[must_use]
pub fn key_name(code: winit::keyboard::KeyCode) -> String {
    format!("{code:?}")
}

#[cfg(all(test, feature = "viewer"))]
mod tests {
    use winit::dpi::PhysicalPosition;
    use winit::event::MouseScrollDelta;
    use winit::keyboard::KeyCode;

    use super::*;

    #[test]
    fn test_wheel_up_zooms_in() {
        assert_eq!(wheel_delta_y(MouseScrollDelta::LineDelta(0.0, 1.0)), -100.0);
        assert_eq!(wheel_delta_y(MouseScrollDelta::LineDelta(0.0, -2.0)), 200.0);
        assert_eq!(
            wheel_delta_y(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 30.0))),
            -30.0
        );
    }

    #[test]
    fn test_key_names_match_default_bindings() {
        assert_eq!(key_name(KeyCode::Space), "Space");
        assert_eq!(key_name(KeyCode::KeyR), "KeyR");
        assert_eq!(key_name(KeyCode::Equal), "Equal");
    }
}
