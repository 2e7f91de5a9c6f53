//! WorldBuilder - assembles the voxel field, terrain geometry and camera
//!
//! Provides a fluent API so the driver and tests build worlds the same way.

use fourspace_input::CameraController;
use fourspace_render::{Camera4D, TerrainGeometry};
use fourspace_world::{ChunkIndex, Scenario, TerrainParams, VoxelField, DEFAULT_CHUNK_SIZE};

use crate::config::{AppConfig, CameraConfig, InputConfig, TerrainConfig, TerrainMode};

/// Builder for the startup world
///
/// # Example
/// ```ignore
/// let field = WorldBuilder::new()
///     .with_mode(TerrainMode::Noise)
///     .with_chunk_range(ChunkIndex::new(-1, -1, -1, -1), ChunkIndex::new(0, 0, 0, 0))
///     .build_field();
/// ```
#[derive(Clone, Debug)]
pub struct WorldBuilder {
    mode: TerrainMode,
    params: TerrainParams,
    chunk_size: usize,
    min: ChunkIndex,
    max: ChunkIndex,
}

impl WorldBuilder {
    /// Create a builder for the wall scenario with default chunking
    pub fn new() -> Self {
        Self {
            mode: TerrainMode::default(),
            params: TerrainParams::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            min: ChunkIndex::new(0, 0, 0, 0),
            max: ChunkIndex::new(0, 0, 0, 0),
        }
    }

    /// Create a builder from the terrain section of the config
    pub fn from_config(config: &TerrainConfig) -> Self {
        let (min, max) = config.chunk_range();
        Self::new()
            .with_mode(config.mode)
            .with_params(config.to_terrain_params())
            .with_chunk_size(config.chunk_size)
            .with_chunk_range(min, max)
    }

    pub fn with_mode(mut self, mode: TerrainMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_params(mut self, params: TerrainParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Inclusive range of chunks generated in noise mode
    pub fn with_chunk_range(mut self, min: ChunkIndex, max: ChunkIndex) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Build the voxel field
    pub fn build_field(&self) -> VoxelField {
        let field = match self.mode {
            TerrainMode::Noise => {
                let mut field = VoxelField::new(self.chunk_size);
                field.generate_region(self.min, self.max, &self.params);
                field
            }
            TerrainMode::Wall => Scenario::Wall.build(self.chunk_size),
            TerrainMode::Block => Scenario::Block.build(self.chunk_size),
        };

        log::info!(
            "Built {:?} world: {} chunks, {} solid voxels",
            self.mode,
            field.chunk_count(),
            field.occupied_count()
        );
        field
    }
}

impl Default for WorldBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the driver needs to run a session
pub struct World {
    pub field: VoxelField,
    pub geometry: TerrainGeometry,
    pub camera: Camera4D,
    pub controller: CameraController,
}

impl World {
    /// Build the field, its geometry and a camera colliding against it
    pub fn from_config(config: &AppConfig) -> Self {
        let field = WorldBuilder::from_config(&config.terrain).build_field();
        let geometry = TerrainGeometry::from_field(&field);
        let mut camera = build_camera(&config.camera);
        camera.set_terrain(&field);
        let controller = build_controller(&config.input);

        Self { field, geometry, camera, controller }
    }
}

/// Configure a camera from the camera section
///
/// The view and projection are rebuilt, so the camera is ready to use.
pub fn build_camera(config: &CameraConfig) -> Camera4D {
    let mut camera = Camera4D::new();
    camera.set_eye(config.eye());
    camera.set_look(config.look());
    camera.set_up_dir(config.up());
    camera.set_right_dir(config.right());
    camera.update_view();

    camera.set_fovy(config.fovy());
    camera.set_aspect_x(config.aspect_x);
    camera.set_aspect_w(config.aspect_w);
    camera.set_z_near(config.near);
    camera.set_z_far(config.far);
    camera.update_projection();

    camera.set_radius(config.radius);
    camera.set_sensitivity(config.sensitivity);
    camera
}

/// Configure the camera controller from the input section
pub fn build_controller(config: &InputConfig) -> CameraController {
    CameraController::new()
        .with_move_step(config.move_step)
        .with_mouse_scale(config.mouse_scale)
        .with_scroll_scale(config.scroll_scale)
        .with_roll_step(config.roll_step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fourspace_math::Vec4;
    use fourspace_world::VoxelCoord;

    #[test]
    fn test_default_builder_is_wall() {
        let field = WorldBuilder::new().build_field();
        assert_eq!(field.occupied_count(), 42);
        assert!(field.contains_occupied_cell(VoxelCoord::new(2, 2, 0, 7)));
    }

    #[test]
    fn test_block_mode() {
        let field = WorldBuilder::new().with_mode(TerrainMode::Block).build_field();
        assert_eq!(field.occupied_count(), 125);
    }

    #[test]
    fn test_noise_mode_generates_range() {
        let field = WorldBuilder::new()
            .with_mode(TerrainMode::Noise)
            .with_chunk_size(4)
            .with_chunk_range(ChunkIndex::new(-1, 0, 0, 0), ChunkIndex::new(0, 0, 0, 0))
            .build_field();
        assert_eq!(field.chunk_count(), 2);
    }

    #[test]
    fn test_build_camera_uses_config() {
        let config = CameraConfig {
            eye: [1.0, 2.0, 3.0, -4.0],
            look: [1.0, 2.0, 3.0, 0.0],
            radius: 0.25,
            sensitivity: 1.0,
            ..Default::default()
        };
        let camera = build_camera(&config);

        let pos = camera.position();
        assert!((pos - Vec4::new(1.0, 2.0, 3.0, -4.0)).length() < 1e-5);
        assert_eq!(camera.radius(), 0.25);
        assert_eq!(camera.sensitivity(), 1.0);
        assert!((camera.fovy() - 30.0f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_world_from_default_config() {
        let world = World::from_config(&AppConfig::default());
        assert_eq!(world.geometry.block_count(), world.field.occupied_count());
        assert!((world.camera.position() - Vec4::new(0.0, 0.0, 0.0, -5.0)).length() < 1e-5);
    }
}
