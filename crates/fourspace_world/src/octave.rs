//! Coherent noise sources for terrain density
//!
//! Both kinds are pure functions of an integer coordinate and a seed, so
//! the same parameters always give bit-identical terrain.

use noise::{NoiseFn, OpenSimplex};
use serde::{Deserialize, Serialize};

use crate::VoxelCoord;

/// Which base noise the octave sum is built from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseKind {
    /// Integer hash lattice noise (uncorrelated between neighbours)
    #[default]
    Hash,
    /// 4D OpenSimplex gradient noise
    Simplex,
}

/// Integer hash noise in `(-1, 1]`
///
/// All arithmetic wraps at 32 bits; overflow is part of the hash.
pub fn hash_noise(c: VoxelCoord, seed: u32) -> f32 {
    let mut v = c
        .x
        .wrapping_add(c.y.wrapping_mul(57))
        .wrapping_add(c.z.wrapping_mul(9371))
        .wrapping_add(c.w.wrapping_mul(10903))
        .wrapping_add((seed as i32).wrapping_mul(131));
    v = v.wrapping_shl(13) ^ v;

    let h = v
        .wrapping_mul(v.wrapping_mul(v).wrapping_mul(15731).wrapping_add(789221))
        .wrapping_add(1376312589)
        & 0x7fff_ffff;

    1.0 - (h as f64 / 1073741824.0) as f32
}

/// Octave sum of a base noise
///
/// Octave `i` samples the base noise at `c * frequency^i` and weights it by
/// `persistence^i`.
#[derive(Clone, Debug)]
pub struct OctaveNoise {
    seed: u32,
    persistence: f32,
    frequency: f32,
    octaves: u32,
    simplex_scale: f64,
    /// Present only for simplex noise
    simplex: Option<OpenSimplex>,
}

impl OctaveNoise {
    pub fn new(kind: NoiseKind, seed: u32, persistence: f32, frequency: f32, octaves: u32) -> Self {
        let simplex = match kind {
            NoiseKind::Hash => None,
            NoiseKind::Simplex => Some(OpenSimplex::new(seed)),
        };

        Self {
            seed,
            persistence,
            frequency,
            octaves,
            simplex_scale: 0.1,
            simplex,
        }
    }

    /// Base sampling scale for simplex noise (hash noise is lattice-only)
    pub fn with_simplex_scale(mut self, scale: f64) -> Self {
        self.simplex_scale = scale;
        self
    }

    /// Density contribution at `c`
    pub fn octave(&self, c: VoxelCoord) -> f32 {
        let mut total = 0.0f32;

        for i in 0..self.octaves as i32 {
            let freq = self.frequency.powi(i);
            let amplitude = self.persistence.powi(i);
            total += self.base(c, freq) * amplitude;
        }

        total
    }

    fn base(&self, c: VoxelCoord, freq: f32) -> f32 {
        match &self.simplex {
            None => {
                let m = freq.round() as i32;
                let scaled = VoxelCoord::new(
                    c.x.wrapping_mul(m),
                    c.y.wrapping_mul(m),
                    c.z.wrapping_mul(m),
                    c.w.wrapping_mul(m),
                );
                hash_noise(scaled, self.seed)
            }
            Some(simplex) => {
                let k = self.simplex_scale * freq as f64;
                let p = [c.x as f64 * k, c.y as f64 * k, c.z as f64 * k, c.w as f64 * k];
                simplex.get(p) as f32
            }
        }
    }
}
