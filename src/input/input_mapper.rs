//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to high-level actions like Exit or TogglePause.
//! Movement keys are NOT mapped here - they go to the input state.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by special input (not movement)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Freeze or resume camera input (P)
    TogglePause,
    /// Reset camera to the configured pose (R)
    ResetCamera,
    /// Toggle fullscreen mode (F)
    ToggleFullscreen,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for special keys, `None` for movement keys.
    /// Auto-repeated presses never trigger an action, so holding P or F
    /// toggles once.
    pub fn map_keyboard(key: KeyCode, state: ElementState, repeat: bool) -> Option<InputAction> {
        // Only handle fresh key presses, not releases or repeats
        if state != ElementState::Pressed || repeat {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyP => Some(InputAction::TogglePause),
            KeyCode::KeyR => Some(InputAction::ResetCamera),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            _ => None,
        }
    }
}
