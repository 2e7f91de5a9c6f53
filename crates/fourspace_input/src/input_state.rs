//! Per-tick input snapshot owned by the application loop

use bitflags::bitflags;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

bitflags! {
    /// Movement keys currently held down
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MovementKeys: u16 {
        const FORWARD = 1 << 0;
        const BACKWARD = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const UP = 1 << 4;
        const DOWN = 1 << 5;
        /// Toward +ana along the camera's fourth axis
        const ANA = 1 << 6;
        const KATA = 1 << 7;
        const ROLL_LEFT = 1 << 8;
        const ROLL_RIGHT = 1 << 9;
    }
}

impl MovementKeys {
    /// Key binding for a physical key, if it controls movement
    ///
    /// - W/S: forward/backward
    /// - A/D: left/right
    /// - Space/Shift: up/down
    /// - Q/E: ana/kata
    /// - Z/C: roll left/right
    pub fn from_key(key: KeyCode) -> Option<Self> {
        let flag = match key {
            KeyCode::KeyW => Self::FORWARD,
            KeyCode::KeyS => Self::BACKWARD,
            KeyCode::KeyA => Self::LEFT,
            KeyCode::KeyD => Self::RIGHT,
            KeyCode::Space => Self::UP,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Self::DOWN,
            KeyCode::KeyQ => Self::ANA,
            KeyCode::KeyE => Self::KATA,
            KeyCode::KeyZ => Self::ROLL_LEFT,
            KeyCode::KeyC => Self::ROLL_RIGHT,
            _ => return None,
        };
        Some(flag)
    }
}

/// Accumulated input between two simulation ticks
///
/// Window events are folded in as they arrive; the camera controller
/// drains the deltas once per tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputState {
    keys: MovementKeys,
    mouse_dx: f64,
    mouse_dy: f64,
    scroll: f32,
    paused: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release
    ///
    /// Returns true if the key is a movement binding. Presses are ignored
    /// while paused; releases always apply.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let Some(flag) = MovementKeys::from_key(key) else {
            return false;
        };

        match state {
            ElementState::Pressed if !self.paused => self.keys.insert(flag),
            ElementState::Pressed => {}
            ElementState::Released => self.keys.remove(flag),
        }
        true
    }

    /// Accumulate raw mouse motion (pixels)
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        if !self.paused {
            self.mouse_dx += delta_x;
            self.mouse_dy += delta_y;
        }
    }

    /// Accumulate scroll wheel motion (lines)
    pub fn process_scroll(&mut self, delta: f32) {
        if !self.paused {
            self.scroll += delta;
        }
    }

    /// Toggle pause, releasing every held key
    ///
    /// Returns the new pause state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.keys = MovementKeys::empty();
        self.clear_deltas();
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn keys(&self) -> MovementKeys {
        self.keys
    }

    pub fn is_held(&self, keys: MovementKeys) -> bool {
        self.keys.contains(keys)
    }

    /// Pending mouse motion `(dx, dy)`
    pub fn mouse_delta(&self) -> (f64, f64) {
        (self.mouse_dx, self.mouse_dy)
    }

    pub fn scroll_delta(&self) -> f32 {
        self.scroll
    }

    /// Drop pending mouse and scroll motion
    pub fn clear_deltas(&mut self) {
        self.mouse_dx = 0.0;
        self.mouse_dy = 0.0;
        self.scroll = 0.0;
    }

    /// Release every held key
    pub fn release_all(&mut self) {
        self.keys = MovementKeys::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = InputState::new();
        assert!(input.process_keyboard(KeyCode::KeyW, ElementState::Pressed));
        assert!(input.process_keyboard(KeyCode::KeyQ, ElementState::Pressed));
        assert!(input.is_held(MovementKeys::FORWARD | MovementKeys::ANA));

        input.process_keyboard(KeyCode::KeyW, ElementState::Released);
        assert_eq!(input.keys(), MovementKeys::ANA);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut input = InputState::new();
        assert!(!input.process_keyboard(KeyCode::KeyP, ElementState::Pressed));
        assert!(input.keys().is_empty());
    }

    #[test]
    fn test_pause_clears_keys_and_blocks_presses() {
        let mut input = InputState::new();
        input.process_keyboard(KeyCode::KeyD, ElementState::Pressed);
        input.process_mouse_motion(4.0, 2.0);

        assert!(input.toggle_pause());
        assert!(input.keys().is_empty());
        assert_eq!(input.mouse_delta(), (0.0, 0.0));

        input.process_keyboard(KeyCode::KeyA, ElementState::Pressed);
        input.process_mouse_motion(10.0, 0.0);
        input.process_scroll(1.0);
        assert!(input.keys().is_empty());
        assert_eq!(input.mouse_delta(), (0.0, 0.0));
        assert_eq!(input.scroll_delta(), 0.0);

        assert!(!input.toggle_pause());
        input.process_keyboard(KeyCode::KeyA, ElementState::Pressed);
        assert!(input.is_held(MovementKeys::LEFT));
    }

    #[test]
    fn test_deltas_accumulate() {
        let mut input = InputState::new();
        input.process_mouse_motion(1.5, -2.0);
        input.process_mouse_motion(0.5, 1.0);
        input.process_scroll(1.0);
        input.process_scroll(-3.0);
        assert_eq!(input.mouse_delta(), (2.0, -1.0));
        assert_eq!(input.scroll_delta(), -2.0);

        input.clear_deltas();
        assert_eq!(input.mouse_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_both_shift_keys_mean_down() {
        assert_eq!(MovementKeys::from_key(KeyCode::ShiftLeft), Some(MovementKeys::DOWN));
        assert_eq!(MovementKeys::from_key(KeyCode::ShiftRight), Some(MovementKeys::DOWN));
    }
}
