//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`F4D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use fourspace_math::Vec4;
use fourspace_world::{ChunkIndex, NoiseKind, TerrainParams};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Terrain configuration
    #[serde(default)]
    pub terrain: TerrainConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`F4D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // F4D_TERRAIN__SEED=7 -> terrain.seed = 7
        figment = figment.merge(Env::prefixed("F4D_").split("__"));

        let config: AppConfig = figment.extract().map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the world and camera cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.terrain.chunk_size == 0 {
            return Err(ConfigError::invalid("terrain.chunk_size must be at least 1"));
        }
        if self.camera.near <= 0.0 || self.camera.far <= 0.0 {
            return Err(ConfigError::invalid("camera.near and camera.far must be positive"));
        }
        if self.camera.near >= self.camera.far {
            return Err(ConfigError::invalid("camera.near must be closer than camera.far"));
        }
        if self.camera.radius < 0.0 {
            return Err(ConfigError::invalid("camera.radius must not be negative"));
        }
        Ok(())
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Fourspace".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Eye position [x, y, z, w]
    pub eye: [f32; 4],
    /// Point looked at [x, y, z, w]
    pub look: [f32; 4],
    /// Up hint
    pub up: [f32; 4],
    /// Right hint
    pub right: [f32; 4],
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Horizontal stretch (x against y)
    pub aspect_x: f32,
    /// Depth stretch (w against y)
    pub aspect_w: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Collision probe radius
    pub radius: f32,
    /// Multiplier for every rotation
    pub sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 0.0, -5.0],
            look: [0.0, 0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0, 0.0],
            right: [1.0, 0.0, 0.0, 0.0],
            fov: 30.0,
            aspect_x: 1.77,
            aspect_w: 1.0,
            near: 0.1,
            far: 100.0,
            radius: 1.0,
            sensitivity: 2.0,
        }
    }
}

impl CameraConfig {
    pub fn eye(&self) -> Vec4 {
        Vec4::from_array(self.eye)
    }

    pub fn look(&self) -> Vec4 {
        Vec4::from_array(self.look)
    }

    pub fn up(&self) -> Vec4 {
        Vec4::from_array(self.up)
    }

    pub fn right(&self) -> Vec4 {
        Vec4::from_array(self.right)
    }

    /// Field of view converted to radians
    pub fn fovy(&self) -> f32 {
        self.fov.to_radians()
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Distance moved per tick while a key is held
    pub move_step: f32,
    /// Radians per pixel of mouse motion
    pub mouse_scale: f32,
    /// Radians per scroll line
    pub scroll_scale: f32,
    /// Radians rolled per tick while a roll key is held
    pub roll_step: f32,
    /// Simulation ticks per second
    pub tick_rate: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            move_step: 0.1,
            mouse_scale: 0.001,
            scroll_scale: 0.1,
            roll_step: 0.01,
            tick_rate: 60.0,
        }
    }
}

/// Which world to build at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerrainMode {
    /// Procedural octave-noise terrain
    Noise,
    /// Two walls and a marker voxel
    #[default]
    Wall,
    /// One solid 5x5x5 block
    Block,
}

/// Terrain configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// World source
    pub mode: TerrainMode,
    /// Base noise kind
    pub noise: NoiseKind,
    /// Noise seed
    pub seed: u32,
    /// Amplitude falloff per octave
    pub persistence: f32,
    /// Frequency growth per octave
    pub frequency: f32,
    /// Number of octaves summed
    pub octaves: u32,
    /// Base sampling scale for simplex noise
    pub simplex_scale: f64,
    /// Radius of the open tunnel around the x axis
    pub falloff_radius: f32,
    /// Cells per chunk along each axis
    pub chunk_size: usize,
    /// Chunks generated on each side of the origin
    pub chunk_radius: i32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        let params = TerrainParams::default();
        Self {
            mode: TerrainMode::default(),
            noise: params.noise,
            seed: params.seed,
            persistence: params.persistence,
            frequency: params.frequency,
            octaves: params.octaves,
            simplex_scale: params.simplex_scale,
            falloff_radius: params.falloff_radius,
            chunk_size: fourspace_world::DEFAULT_CHUNK_SIZE,
            chunk_radius: 1,
        }
    }
}

impl TerrainConfig {
    /// Convert to the world crate's generation parameters
    pub fn to_terrain_params(&self) -> TerrainParams {
        TerrainParams {
            noise: self.noise,
            seed: self.seed,
            persistence: self.persistence,
            frequency: self.frequency,
            octaves: self.octaves,
            simplex_scale: self.simplex_scale,
            falloff_radius: self.falloff_radius,
        }
    }

    /// Inclusive chunk range covered by `chunk_radius`
    ///
    /// A radius of 1 yields the 16 chunks touching the origin.
    pub fn chunk_range(&self) -> (ChunkIndex, ChunkIndex) {
        let r = self.chunk_radius.max(0);
        let lo = -r;
        let hi = (r - 1).max(lo);
        (ChunkIndex::new(lo, lo, lo, lo), ChunkIndex::new(hi, hi, hi, hi))
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: &str) -> Self {
        ConfigError {
            message: message.to_string(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.camera.eye, [0.0, 0.0, 0.0, -5.0]);
        assert_eq!(config.terrain.chunk_size, 9);
        assert_eq!(config.terrain.octaves, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("falloff_radius"));
        assert!(toml.contains("mode = \"wall\""));
    }

    #[test]
    fn test_fov_is_converted_to_radians() {
        let camera = CameraConfig { fov: 180.0, ..Default::default() };
        assert!((camera.fovy() - std::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: AppConfig = toml::from_str("[terrain]\nmode = \"noise\"\nseed = 3\n").unwrap();
        assert_eq!(config.terrain.mode, TerrainMode::Noise);
        assert_eq!(config.terrain.seed, 3);
        assert_eq!(config.terrain.persistence, 0.5);
        assert_eq!(config.camera.far, 100.0);
    }

    #[test]
    fn test_terrain_params_conversion() {
        let terrain = TerrainConfig { seed: 42, noise: NoiseKind::Simplex, ..Default::default() };
        let params = terrain.to_terrain_params();
        assert_eq!(params.seed, 42);
        assert_eq!(params.noise, NoiseKind::Simplex);
        assert_eq!(params.octaves, terrain.octaves);
    }

    #[test]
    fn test_chunk_range() {
        let terrain = TerrainConfig::default();
        assert_eq!(terrain.chunk_range(), (ChunkIndex::new(-1, -1, -1, -1), ChunkIndex::new(0, 0, 0, 0)));

        let terrain = TerrainConfig { chunk_radius: 0, ..Default::default() };
        assert_eq!(terrain.chunk_range(), (ChunkIndex::new(0, 0, 0, 0), ChunkIndex::new(0, 0, 0, 0)));
    }

    #[test]
    fn test_validate_rejects_zero_chunk_size() {
        let mut config = AppConfig::default();
        config.terrain.chunk_size = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("chunk_size"));
    }

    #[test]
    fn test_validate_rejects_bad_planes() {
        let mut config = AppConfig::default();
        config.camera.near = 0.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.camera.near = 200.0;
        assert!(config.validate().is_err());
    }
}
