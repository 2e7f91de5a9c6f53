//! Eagerly generated regions of the voxel field

use crate::terrain::{TerrainParams, TerrainSampler};
use crate::{Block, VoxelCoord};

/// A fixed-size hypercubic region of voxels
///
/// Every block in `[origin, origin + size)` is decided at construction;
/// a chunk is never partially filled and never changes afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Chunk {
    origin: VoxelCoord,
    size: usize,
    /// Dense storage, x varies fastest
    blocks: Vec<Block>,
}

impl Chunk {
    /// Build a chunk by evaluating `f` at every coordinate it covers
    pub fn from_fn<F>(origin: VoxelCoord, size: usize, mut f: F) -> Self
    where
        F: FnMut(VoxelCoord) -> Block,
    {
        debug_assert!(size > 0, "chunk size must be positive");

        let mut blocks = Vec::with_capacity(size.pow(4));
        let s = size as i32;
        for w in 0..s {
            for z in 0..s {
                for y in 0..s {
                    for x in 0..s {
                        blocks.push(f(origin.offset([x, y, z, w])));
                    }
                }
            }
        }

        Self { origin, size, blocks }
    }

    /// Generate terrain for `[origin, origin + size)` from noise parameters
    pub fn generate(origin: VoxelCoord, size: usize, params: &TerrainParams) -> Self {
        Self::generate_with(origin, size, &TerrainSampler::new(params))
    }

    /// Generate terrain with an already constructed sampler
    pub fn generate_with(origin: VoxelCoord, size: usize, sampler: &TerrainSampler) -> Self {
        Self::from_fn(origin, size, |c| sampler.block_at(c))
    }

    pub fn origin(&self) -> VoxelCoord {
        self.origin
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// True if `c` lies inside this chunk's region
    pub fn contains(&self, c: VoxelCoord) -> bool {
        self.local_index(c).is_some()
    }

    /// Block at `c`, or `None` outside the chunk
    pub fn get(&self, c: VoxelCoord) -> Option<Block> {
        self.local_index(c).map(|i| self.blocks[i])
    }

    /// Coordinates of all solid blocks, in storage order
    pub fn occupied_cells(&self) -> impl Iterator<Item = VoxelCoord> + '_ {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_occupied())
            .map(move |(i, _)| self.coord_of(i))
    }

    pub fn occupied_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_occupied()).count()
    }

    fn local_index(&self, c: VoxelCoord) -> Option<usize> {
        let s = self.size as i64;
        let mut index = 0i64;
        let mut stride = 1i64;
        for axis in 0..4 {
            let d = c.get(axis) as i64 - self.origin.get(axis) as i64;
            if !(0..s).contains(&d) {
                return None;
            }
            index += d * stride;
            stride *= s;
        }
        Some(index as usize)
    }

    fn coord_of(&self, index: usize) -> VoxelCoord {
        let s = self.size;
        let d = [index % s, (index / s) % s, (index / (s * s)) % s, index / (s * s * s)];
        self.origin.offset(d.map(|v| v as i32))
    }
}
