//! Terrain density: octave noise plus a tunnel-carving falloff

use serde::{Deserialize, Serialize};

use crate::octave::{NoiseKind, OctaveNoise};
use crate::{Block, VoxelCoord};

/// Parameters for procedural terrain
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
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
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            noise: NoiseKind::Hash,
            seed: 0,
            persistence: 0.5,
            frequency: 2.0,
            octaves: 8,
            simplex_scale: 0.1,
            falloff_radius: 3.0,
        }
    }
}

/// Falloff bias at `c`: `-max(0, R - |(y, z, w)|)`
///
/// Zero outside the tunnel, increasingly negative toward the x axis.
pub fn falloff_bias(c: VoxelCoord, radius: f32) -> f32 {
    let (y, z, w) = (c.y as f32, c.z as f32, c.w as f32);
    let dist = (y * y + z * z + w * w).sqrt();
    -(radius - dist).max(0.0)
}

/// Evaluates terrain density for a fixed set of parameters
///
/// Built once per generation pass so the noise tables are shared by every
/// chunk in a region.
#[derive(Clone, Debug)]
pub struct TerrainSampler {
    noise: OctaveNoise,
    falloff_radius: f32,
}

impl TerrainSampler {
    pub fn new(params: &TerrainParams) -> Self {
        let noise = OctaveNoise::new(
            params.noise,
            params.seed,
            params.persistence,
            params.frequency,
            params.octaves,
        )
        .with_simplex_scale(params.simplex_scale);

        Self {
            noise,
            falloff_radius: params.falloff_radius,
        }
    }

    /// Density at `c`; positive means solid
    pub fn density(&self, c: VoxelCoord) -> f32 {
        self.noise.octave(c) + falloff_bias(c, self.falloff_radius)
    }

    pub fn block_at(&self, c: VoxelCoord) -> Block {
        Block::from_density(self.density(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falloff_on_axis() {
        let b = falloff_bias(VoxelCoord::new(17, 0, 0, 0), 3.0);
        assert_eq!(b, -3.0);
    }

    #[test]
    fn test_falloff_vanishes_outside_radius() {
        assert_eq!(falloff_bias(VoxelCoord::new(0, 3, 0, 0), 3.0), 0.0);
        assert_eq!(falloff_bias(VoxelCoord::new(0, 2, 2, 2), 3.0), 0.0);
        assert!(falloff_bias(VoxelCoord::new(0, 1, 1, 0), 3.0) < 0.0);
    }

    #[test]
    fn test_tunnel_is_open() {
        // Octave sums stay below 2, so a radius of 3 clears the axis
        let sampler = TerrainSampler::new(&TerrainParams::default());
        for x in -20..20 {
            assert_eq!(sampler.block_at(VoxelCoord::new(x, 0, 0, 0)), Block::Air);
        }
    }

    #[test]
    fn test_params_from_toml() {
        let params: TerrainParams = toml::from_str(
            r#"
            noise = "simplex"
            seed = 12
            octaves = 4
            "#,
        )
        .unwrap();

        assert_eq!(params.noise, NoiseKind::Simplex);
        assert_eq!(params.seed, 12);
        assert_eq!(params.octaves, 4);
        assert_eq!(params.persistence, 0.5);
    }
}
