//! Fourspace - 4D voxel explorer
//!
//! Opens a window, drives the 4D camera through the voxel world and
//! prepares the per-frame view-projection record for the renderer.

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use fourspace::config::AppConfig;
use fourspace::input::{InputAction, InputMapper};
use fourspace::systems::{SimulationSystem, WindowSystem};
use fourspace::world_builder::World;
use fourspace_input::InputState;
use fourspace_render::{encode_view_projection, UniformLayout};

/// Main application state
struct App {
    config: AppConfig,
    window: Option<WindowSystem>,
    world: World,
    input: InputState,
    simulation: SimulationSystem,
    /// Encoded view-projection for the current frame
    frame_uniform: Vec<u8>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let world = World::from_config(&config);
        log::info!(
            "Terrain geometry: {} tetrahedra, {} bytes of vertices",
            world.geometry.tetrahedron_count(),
            world.geometry.as_bytes().len()
        );

        let simulation = SimulationSystem::new(config.input.tick_rate);
        let frame_uniform = encode_view_projection(&world.camera.view_projection(), UniformLayout::V1);

        Self {
            config,
            window: None,
            world,
            input: InputState::new(),
            simulation,
            frame_uniform,
        }
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::TogglePause => {
                let paused = self.input.toggle_pause();
                log::info!("Input {}", if paused { "paused" } else { "resumed" });
            }
            InputAction::ResetCamera => {
                self.world.camera.reset();
                log::info!("Camera reset to starting position");
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
        }
    }

    fn resize(&mut self) {
        if let Some(window) = &self.window {
            self.world.camera.set_aspect_x(window.aspect_ratio());
            self.world.camera.update_projection();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => {
                window.request_redraw();
                self.window = Some(window);
                self.resize();
            }
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(_) => self.resize(),

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state, event.repeat) {
                        self.handle_action(action, event_loop);
                        return;
                    }
                    self.input.process_keyboard(key, event.state);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                };
                self.input.process_scroll(scroll);
            }

            WindowEvent::Focused(false) => self.input.release_all(),

            WindowEvent::RedrawRequested => {
                let result = self.simulation.update(
                    &mut self.input,
                    &mut self.world.camera,
                    &self.world.controller,
                );

                self.frame_uniform =
                    encode_view_projection(&self.world.camera.view_projection(), UniformLayout::V1);
                log::trace!(
                    "Frame: {} ticks, {} uniform bytes",
                    result.ticks,
                    self.frame_uniform.len()
                );

                if let Some(window) = &self.window {
                    window.update_title(result.position, self.input.is_paused());
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.input.process_mouse_motion(delta.0, delta.1);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config is read before the logger exists, so its failure is reported afterwards
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting Fourspace");

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
