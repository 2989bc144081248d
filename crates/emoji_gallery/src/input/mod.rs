//! Keyboard commands
//!
//! The host engine dispatches raw key events; this module owns the
//! fixed key map. Keys with no binding produce no command, never an
//! error.

use crate::layout::ArrangementKind;

/// Keys the gallery reacts to, decoupled from any windowing library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Number row 1
    Digit1,
    /// Number row 2
    Digit2,
    /// Number row 3
    Digit3,
    /// Number row 4
    Digit4,
    /// Letter r
    R,
    /// Letter t
    T,
    /// Letter n
    N,
    /// Letter g
    G,
    /// Letter s
    S,
    /// Letter b
    B,
    /// Letter a
    A,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Escape
    Escape,
}

/// One action requested through the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Switch to the given arrangement's preset
    SelectArrangement(ArrangementKind),
    /// Flip the idle rotation layer
    ToggleIdleRotation,
    /// Flip the idle zoom layer
    ToggleIdleZoom,
    /// Advance the node animation mode one step
    CycleNodeMode,
    /// Flip the grayscale request
    ToggleGrayscale,
    /// Flip the sepia request
    ToggleSepia,
    /// Raise the sepia amount one step
    SepiaIntensityUp,
    /// Lower the sepia amount one step
    SepiaIntensityDown,
    /// Flip the inert bloom flag
    ToggleBloom,
    /// Flip the inert afterimage flag
    ToggleAfterimage,
    /// Leave the application
    Quit,
}

/// The fixed key map. `sepia_held` is whether the `s` key is down, which
/// turns the arrow keys into sepia intensity steps.
#[must_use]
pub fn command_for(key: KeyInput, sepia_held: bool) -> Option<Command> {
    match key {
        KeyInput::Digit1 => Some(Command::SelectArrangement(ArrangementKind::Grid)),
        KeyInput::Digit2 => Some(Command::SelectArrangement(ArrangementKind::Swirl)),
        KeyInput::Digit3 => Some(Command::SelectArrangement(ArrangementKind::Torus)),
        KeyInput::Digit4 => Some(Command::SelectArrangement(ArrangementKind::Sphere)),
        KeyInput::R => Some(Command::ToggleIdleRotation),
        KeyInput::T => Some(Command::ToggleIdleZoom),
        KeyInput::N => Some(Command::CycleNodeMode),
        KeyInput::G => Some(Command::ToggleGrayscale),
        KeyInput::S => Some(Command::ToggleSepia),
        KeyInput::B => Some(Command::ToggleBloom),
        KeyInput::A => Some(Command::ToggleAfterimage),
        KeyInput::Up => sepia_held.then_some(Command::SepiaIntensityUp),
        KeyInput::Down => sepia_held.then_some(Command::SepiaIntensityDown),
        KeyInput::Escape => Some(Command::Quit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys_select_arrangements() {
        assert_eq!(
            command_for(KeyInput::Digit1, false),
            Some(Command::SelectArrangement(ArrangementKind::Grid))
        );
        assert_eq!(
            command_for(KeyInput::Digit2, false),
            Some(Command::SelectArrangement(ArrangementKind::Swirl))
        );
        assert_eq!(
            command_for(KeyInput::Digit3, false),
            Some(Command::SelectArrangement(ArrangementKind::Torus))
        );
        assert_eq!(
            command_for(KeyInput::Digit4, false),
            Some(Command::SelectArrangement(ArrangementKind::Sphere))
        );
    }

    #[test]
    fn test_arrows_only_step_sepia_while_s_is_held() {
        assert_eq!(command_for(KeyInput::Up, false), None);
        assert_eq!(command_for(KeyInput::Down, false), None);
        assert_eq!(command_for(KeyInput::Up, true), Some(Command::SepiaIntensityUp));
        assert_eq!(command_for(KeyInput::Down, true), Some(Command::SepiaIntensityDown));
    }

    #[test]
    fn test_remaining_bindings_match_the_fixed_map() {
        assert_eq!(command_for(KeyInput::R, false), Some(Command::ToggleIdleRotation));
        assert_eq!(command_for(KeyInput::T, false), Some(Command::ToggleIdleZoom));
        assert_eq!(command_for(KeyInput::N, false), Some(Command::CycleNodeMode));
        assert_eq!(command_for(KeyInput::G, false), Some(Command::ToggleGrayscale));
        assert_eq!(command_for(KeyInput::S, false), Some(Command::ToggleSepia));
        assert_eq!(command_for(KeyInput::B, false), Some(Command::ToggleBloom));
        assert_eq!(command_for(KeyInput::A, false), Some(Command::ToggleAfterimage));
        assert_eq!(command_for(KeyInput::Escape, false), Some(Command::Quit));
    }
}
