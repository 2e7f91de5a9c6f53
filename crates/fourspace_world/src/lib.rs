//! Procedural 4D voxel terrain for Fourspace
//!
//! This crate provides the occupancy field the camera collides with and
//! the renderer tessellates:
//! - Integer voxel and chunk addressing
//! - Hash and simplex octave noise
//! - Eagerly generated fixed-size chunks
//! - A sparse chunk map with O(1) occupancy queries
//! - Hand-built test scenarios

pub mod block;
pub mod chunk;
pub mod coord;
pub mod field;
pub mod octave;
pub mod scenario;
pub mod terrain;

// Re-export commonly used types
pub use block::Block;
pub use chunk::Chunk;
pub use coord::{ChunkIndex, VoxelCoord};
pub use field::{VoxelField, DEFAULT_CHUNK_SIZE};
pub use octave::{hash_noise, NoiseKind, OctaveNoise};
pub use scenario::Scenario;
pub use terrain::{falloff_bias, TerrainParams, TerrainSampler};
