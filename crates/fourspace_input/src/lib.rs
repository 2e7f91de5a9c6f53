//! 4D Input Handling
//!
//! This crate turns window input into camera steps. The application loop
//! owns an [`InputState`] and hands it to [`CameraController::update`] once
//! per tick; there is no global input dispatcher.

mod camera_controller;
mod input_state;

pub use camera_controller::{CameraController, CameraControl};
pub use input_state::{InputState, MovementKeys};
