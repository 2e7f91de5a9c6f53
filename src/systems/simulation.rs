//! Camera simulation system
//!
//! Input is applied on a fixed tick so movement speed does not depend on
//! the frame rate:
//! - Delta time accumulation
//! - One controller update per elapsed tick
//! - Position reporting for the title bar

use std::time::Instant;

use fourspace_input::{CameraController, InputState};
use fourspace_math::Vec4;
use fourspace_render::Camera4D;

/// Largest frame time fed into the accumulator, in seconds
const MAX_FRAME_TIME: f32 = 0.25;

/// Result of a simulation update
pub struct SimulationResult {
    /// Number of ticks run this frame
    pub ticks: u32,
    /// Camera position after the last tick
    pub position: Vec4,
}

/// Drives the camera controller at a fixed tick rate
pub struct SimulationSystem {
    last_frame: Instant,
    tick: f32,
    accumulator: f32,
}

impl SimulationSystem {
    /// Create a simulation system running `tick_rate` ticks per second
    pub fn new(tick_rate: f32) -> Self {
        Self {
            last_frame: Instant::now(),
            tick: 1.0 / tick_rate.max(1.0),
            accumulator: 0.0,
        }
    }

    /// Run one frame, measuring elapsed time from the wall clock
    pub fn update(
        &mut self,
        input: &mut InputState,
        camera: &mut Camera4D,
        controller: &CameraController,
    ) -> SimulationResult {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.advance(dt, input, camera, controller)
    }

    /// Run as many ticks as fit in `dt` seconds plus the carried remainder
    ///
    /// `dt` is capped to prevent a burst of ticks after a stall. Mouse and
    /// scroll motion is consumed by the first tick only.
    pub fn advance(
        &mut self,
        dt: f32,
        input: &mut InputState,
        camera: &mut Camera4D,
        controller: &CameraController,
    ) -> SimulationResult {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_TIME);

        let mut ticks = 0;
        let mut position = camera.position();
        while self.accumulator >= self.tick {
            position = controller.update(input, camera);
            self.accumulator -= self.tick;
            ticks += 1;
        }

        SimulationResult { ticks, position }
    }

    /// Seconds per tick
    pub fn tick_length(&self) -> f32 {
        self.tick
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new(60.0)
    }
}
