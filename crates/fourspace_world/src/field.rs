//! Sparse chunked voxel field

use std::collections::{HashMap, HashSet};

use crate::terrain::{TerrainParams, TerrainSampler};
use crate::{Block, Chunk, ChunkIndex, VoxelCoord};

/// Default edge length of a chunk
///
/// Chunk volume grows with the fourth power of this, so it stays small.
pub const DEFAULT_CHUNK_SIZE: usize = 9;

/// Occupancy field over 4D integer coordinates, stored as chunks
///
/// Coordinates outside every generated chunk read as empty: ungenerated
/// space never collides.
#[derive(Clone, Debug)]
pub struct VoxelField {
    chunk_size: usize,
    chunks: HashMap<ChunkIndex, Chunk>,
}

impl Default for VoxelField {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}

impl VoxelField {
    /// Create an empty field
    pub fn new(chunk_size: usize) -> Self {
        debug_assert!(chunk_size > 0, "chunk size must be positive");
        Self {
            chunk_size,
            chunks: HashMap::new(),
        }
    }

    /// Build a field where exactly the given coordinates are solid
    pub fn from_occupied<I>(chunk_size: usize, coords: I) -> Self
    where
        I: IntoIterator<Item = VoxelCoord>,
    {
        let mut by_chunk: HashMap<ChunkIndex, HashSet<VoxelCoord>> = HashMap::new();
        for c in coords {
            by_chunk
                .entry(ChunkIndex::containing(c, chunk_size))
                .or_default()
                .insert(c);
        }

        let mut field = Self::new(chunk_size);
        for (index, cells) in by_chunk {
            let chunk = Chunk::from_fn(index.origin(chunk_size), chunk_size, |c| {
                if cells.contains(&c) { Block::Solid } else { Block::Air }
            });
            field.chunks.insert(index, chunk);
        }
        field
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn chunk(&self, index: ChunkIndex) -> Option<&Chunk> {
        self.chunks.get(&index)
    }

    /// Generate the chunk at `index` from noise
    ///
    /// Returns `false` without touching the field if the chunk already exists.
    pub fn generate_chunk(&mut self, index: ChunkIndex, params: &TerrainParams) -> bool {
        self.generate_chunk_with(index, &TerrainSampler::new(params))
    }

    /// Generate every chunk in the inclusive index box `[min, max]`
    ///
    /// Returns how many chunks were newly generated.
    pub fn generate_region(&mut self, min: ChunkIndex, max: ChunkIndex, params: &TerrainParams) -> usize {
        let sampler = TerrainSampler::new(params);
        let mut generated = 0;

        for w in min.w..=max.w {
            for z in min.z..=max.z {
                for y in min.y..=max.y {
                    for x in min.x..=max.x {
                        if self.generate_chunk_with(ChunkIndex::new(x, y, z, w), &sampler) {
                            generated += 1;
                        }
                    }
                }
            }
        }

        log::info!(
            "Generated {} chunks ({} total, {} solid voxels)",
            generated,
            self.chunk_count(),
            self.occupied_count()
        );
        generated
    }

    fn generate_chunk_with(&mut self, index: ChunkIndex, sampler: &TerrainSampler) -> bool {
        if self.chunks.contains_key(&index) {
            return false;
        }

        let chunk = Chunk::generate_with(index.origin(self.chunk_size), self.chunk_size, sampler);
        log::debug!("Generated chunk {:?}: {} solid", index, chunk.occupied_count());
        self.chunks.insert(index, chunk);
        true
    }

    /// Insert a prebuilt chunk
    ///
    /// The chunk must sit on the field's grid. Returns `false` (and keeps the
    /// existing chunk) if one is already present at that index.
    pub fn insert_chunk(&mut self, chunk: Chunk) -> bool {
        debug_assert_eq!(chunk.size(), self.chunk_size, "chunk size does not match field");
        let index = ChunkIndex::containing(chunk.origin(), self.chunk_size);
        debug_assert_eq!(index.origin(self.chunk_size), chunk.origin(), "chunk is off the grid");

        if self.chunks.contains_key(&index) {
            return false;
        }
        self.chunks.insert(index, chunk);
        true
    }

    /// Block at `c`, or `None` if no chunk covers it
    pub fn get_block(&self, c: VoxelCoord) -> Option<Block> {
        self.chunks
            .get(&ChunkIndex::containing(c, self.chunk_size))
            .and_then(|chunk| chunk.get(c))
    }

    /// True if `c` is inside a generated chunk and solid
    pub fn contains_occupied_cell(&self, c: VoxelCoord) -> bool {
        self.get_block(c).is_some_and(Block::is_occupied)
    }

    /// Every solid coordinate in the field (chunk order is unspecified)
    pub fn occupied_cells(&self) -> impl Iterator<Item = VoxelCoord> + '_ {
        self.chunks.values().flat_map(|chunk| chunk.occupied_cells())
    }

    pub fn occupied_count(&self) -> usize {
        self.chunks.values().map(Chunk::occupied_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_field_never_collides() {
        let field = VoxelField::new(4);
        assert_eq!(field.get_block(VoxelCoord::ORIGIN), None);
        assert!(!field.contains_occupied_cell(VoxelCoord::new(1, 2, 3, 4)));
        assert_eq!(field.chunk_count(), 0);
    }

    #[test]
    fn test_from_occupied_negative_coordinates() {
        let coords = [
            VoxelCoord::new(-1, 0, 0, 0),
            VoxelCoord::new(0, 0, 0, 0),
            VoxelCoord::new(-5, -5, 2, 9),
        ];
        let field = VoxelField::from_occupied(4, coords);

        for c in coords {
            assert!(field.contains_occupied_cell(c), "{:?} should be solid", c);
        }
        assert_eq!(field.get_block(VoxelCoord::new(-2, 0, 0, 0)), Some(Block::Air));
        assert_eq!(field.occupied_count(), 3);
        assert_eq!(field.chunk_count(), 3);
    }

    #[test]
    fn test_generate_chunk_first_wins() {
        let mut field = VoxelField::new(3);
        let index = ChunkIndex::new(0, 0, 0, 0);
        let params = TerrainParams::default();

        assert!(field.generate_chunk(index, &params));
        let before = field.occupied_count();

        let other = TerrainParams { seed: 99, ..TerrainParams::default() };
        assert!(!field.generate_chunk(index, &other));
        assert_eq!(field.occupied_count(), before);
        assert_eq!(field.chunk_count(), 1);
    }

    #[test]
    fn test_generate_region_counts() {
        let mut field = VoxelField::new(2);
        let params = TerrainParams::default();
        let n = field.generate_region(ChunkIndex::new(-1, -1, 0, 0), ChunkIndex::new(0, 0, 0, 0), &params);
        assert_eq!(n, 4);
        assert_eq!(field.chunk_count(), 4);

        // Overlapping region only adds the missing chunks
        let n = field.generate_region(ChunkIndex::new(0, 0, 0, 0), ChunkIndex::new(1, 0, 0, 0), &params);
        assert_eq!(n, 1);
    }

    #[test]
    fn test_field_matches_chunk_generation() {
        let params = TerrainParams { seed: 3, falloff_radius: 1.0, ..TerrainParams::default() };
        let mut field = VoxelField::new(3);
        let index = ChunkIndex::new(1, 0, -1, 0);
        field.generate_chunk(index, &params);

        let chunk = Chunk::generate(index.origin(3), 3, &params);
        let from_field: HashSet<_> = field.occupied_cells().collect();
        let from_chunk: HashSet<_> = chunk.occupied_cells().collect();
        assert_eq!(from_field, from_chunk);
    }

    #[test]
    fn test_insert_chunk() {
        let mut field = VoxelField::new(2);
        let chunk = Chunk::from_fn(VoxelCoord::new(2, 0, -2, 0), 2, |_| Block::Solid);
        assert!(field.insert_chunk(chunk.clone()));
        assert!(!field.insert_chunk(chunk));
        assert_eq!(field.occupied_count(), 16);
        assert!(field.contains_occupied_cell(VoxelCoord::new(3, 1, -1, 1)));
        assert!(field.chunk(ChunkIndex::new(1, 0, -1, 0)).is_some());
    }
}
