//! Camera controller: turns held keys and mouse motion into camera steps
//!
//! Controls:
//! - W/S: Forward/backward
//! - A/D: Left/right strafe
//! - Space/Shift: Up/down
//! - Q/E: Ana/kata movement
//! - Z/C: Roll left/right
//! - Mouse: XW (horizontal) and YW (vertical) rotation
//! - Scroll wheel: ZW (ana/kata) rotation

use fourspace_math::Vec4;

use crate::{InputState, MovementKeys};

/// Camera controller for handling input
///
/// Holds only tuning values; the input itself lives in [`InputState`],
/// which the application loop owns and passes in each tick.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraController {
    /// Distance moved per tick while a movement key is held
    pub move_step: f32,
    /// Rotation angle per pixel of mouse motion
    pub mouse_scale: f32,
    /// Rotation angle per scrolled line
    pub scroll_scale: f32,
    /// Rotation angle per tick while a roll key is held
    pub roll_step: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            move_step: 0.1,
            mouse_scale: 0.001,
            scroll_scale: 0.1,
            roll_step: 0.01,
        }
    }

    /// Apply one tick of input to the camera
    ///
    /// Held keys translate first (in a fixed order), then roll, then mouse
    /// and scroll rotations. Pending mouse and scroll motion is consumed.
    /// Nothing happens while paused. Returns the camera position for debug
    /// display.
    pub fn update<C: CameraControl>(&self, input: &mut InputState, camera: &mut C) -> Vec4 {
        if input.is_paused() {
            input.clear_deltas();
            return camera.position();
        }

        let keys = input.keys();
        let step = self.move_step;
        if keys.contains(MovementKeys::FORWARD) {
            camera.move_forward(step);
        }
        if keys.contains(MovementKeys::BACKWARD) {
            camera.move_backward(step);
        }
        if keys.contains(MovementKeys::RIGHT) {
            camera.move_right(step);
        }
        if keys.contains(MovementKeys::LEFT) {
            camera.move_left(step);
        }
        if keys.contains(MovementKeys::UP) {
            camera.move_up(step);
        }
        if keys.contains(MovementKeys::DOWN) {
            camera.move_down(step);
        }
        if keys.contains(MovementKeys::ANA) {
            camera.move_ana(step);
        }
        if keys.contains(MovementKeys::KATA) {
            camera.move_kata(step);
        }

        if keys.contains(MovementKeys::ROLL_LEFT) {
            camera.roll_left(self.roll_step);
        }
        if keys.contains(MovementKeys::ROLL_RIGHT) {
            camera.roll_right(self.roll_step);
        }

        // Mouse right turns right, mouse down looks down
        let (dx, dy) = input.mouse_delta();
        let (dx, dy) = (dx as f32 * self.mouse_scale, dy as f32 * self.mouse_scale);
        if dx < 0.0 {
            camera.rotate_left(-dx);
        } else if dx > 0.0 {
            camera.rotate_right(dx);
        }
        if dy < 0.0 {
            camera.rotate_up(-dy);
        } else if dy > 0.0 {
            camera.rotate_down(dy);
        }

        let scroll = input.scroll_delta() * self.scroll_scale;
        if scroll > 0.0 {
            camera.rotate_ana(scroll);
        } else if scroll < 0.0 {
            camera.rotate_kata(-scroll);
        }

        input.clear_deltas();
        camera.position()
    }

    /// Builder: set movement step
    pub fn with_move_step(mut self, step: f32) -> Self {
        self.move_step = step;
        self
    }

    /// Builder: set mouse scale
    pub fn with_mouse_scale(mut self, scale: f32) -> Self {
        self.mouse_scale = scale;
        self
    }

    /// Builder: set scroll scale
    pub fn with_scroll_scale(mut self, scale: f32) -> Self {
        self.scroll_scale = scale;
        self
    }

    /// Builder: set roll step
    pub fn with_roll_step(mut self, step: f32) -> Self {
        self.roll_step = step;
        self
    }
}

/// Trait for camera control
/// Allows the controller to work with different camera implementations
///
/// Movement amounts and rotation angles are non-negative; the direction is
/// in the method name.
pub trait CameraControl {
    fn move_forward(&mut self, amount: f32);
    fn move_backward(&mut self, amount: f32);
    fn move_left(&mut self, amount: f32);
    fn move_right(&mut self, amount: f32);
    fn move_up(&mut self, amount: f32);
    fn move_down(&mut self, amount: f32);
    fn move_ana(&mut self, amount: f32);
    fn move_kata(&mut self, amount: f32);
    fn rotate_up(&mut self, angle: f32);
    fn rotate_down(&mut self, angle: f32);
    fn rotate_left(&mut self, angle: f32);
    fn rotate_right(&mut self, angle: f32);
    fn rotate_ana(&mut self, angle: f32);
    fn rotate_kata(&mut self, angle: f32);
    fn roll_left(&mut self, angle: f32);
    fn roll_right(&mut self, angle: f32);
    fn position(&self) -> Vec4;
}
