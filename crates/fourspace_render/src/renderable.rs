//! Renderable geometry - bridges the voxel field to GPU vertex buffers
//!
//! Every solid voxel becomes 40 tetrahedra. Vertices are emitted four per
//! tetrahedron, in order, so the buffer needs no index list.

use fourspace_math::{tessellate_block, Vec4};
use fourspace_world::{VoxelCoord, VoxelField};

use crate::types::Vertex4D;

/// Vertices emitted per solid voxel (40 tetrahedra x 4 corners)
pub const VERTICES_PER_BLOCK: usize = 160;

/// GPU-ready geometry collected from the voxel field
pub struct TerrainGeometry {
    /// Tetrahedron corners, four consecutive vertices per tetrahedron
    pub vertices: Vec<Vertex4D>,
}

impl TerrainGeometry {
    /// Create an empty terrain geometry
    pub fn new() -> Self {
        Self { vertices: Vec::new() }
    }

    /// Create terrain geometry with room for `blocks` voxels
    pub fn with_capacity(blocks: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(blocks * VERTICES_PER_BLOCK),
        }
    }

    /// Tessellate every solid voxel in the field
    ///
    /// Colors follow a gradient over the bounding box of the solid voxels.
    pub fn from_field(field: &VoxelField) -> Self {
        let cells: Vec<VoxelCoord> = field.occupied_cells().collect();
        let (min, max) = bounds(&cells);

        let mut result = Self::with_capacity(cells.len());
        for c in cells {
            result.add_block_with_color(c, &|v: &Vec4| position_gradient_color(v, min, max));
        }

        log::info!(
            "Built terrain geometry: {} blocks, {} tetrahedra, {} vertices",
            result.block_count(),
            result.tetrahedron_count(),
            result.vertex_count()
        );
        result
    }

    /// Add one voxel in plain white
    pub fn add_block(&mut self, coord: VoxelCoord) {
        self.add_block_with_color(coord, &|_| [1.0, 1.0, 1.0, 1.0]);
    }

    /// Add one voxel with a custom color function
    pub fn add_block_with_color(&mut self, coord: VoxelCoord, color_fn: &dyn Fn(&Vec4) -> [f32; 4]) {
        for tet in tessellate_block(coord.center()) {
            for corner in tet.corners {
                self.vertices.push(Vertex4D::new(corner.to_array(), color_fn(&corner)));
            }
        }
    }

    /// Clear all geometry
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Get the number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of tetrahedra
    #[inline]
    pub fn tetrahedron_count(&self) -> usize {
        self.vertices.len() / 4
    }

    /// Get the number of voxels tessellated
    #[inline]
    pub fn block_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_BLOCK
    }

    /// Raw vertex bytes for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Default for TerrainGeometry {
    fn default() -> Self {
        Self::new()
    }
}

/// Color function that creates a gradient based on vertex position
///
/// Maps x, y and z within `[min - 0.5, max + 0.5]` onto the RGB channels.
pub fn position_gradient_color(vertex: &Vec4, min: Vec4, max: Vec4) -> [f32; 4] {
    let channel = |v: f32, lo: f32, hi: f32| ((v - lo + 0.5) / (hi - lo + 1.0)).clamp(0.0, 1.0);
    [
        channel(vertex.x, min.x, max.x), // Red from x
        channel(vertex.y, min.y, max.y), // Green from y
        channel(vertex.z, min.z, max.z), // Blue from z
        1.0,
    ]
}

/// Component-wise bounds of the voxel centers
fn bounds(cells: &[VoxelCoord]) -> (Vec4, Vec4) {
    let mut iter = cells.iter().map(|c| c.center());
    let Some(first) = iter.next() else {
        return (Vec4::ZERO, Vec4::ZERO);
    };

    iter.fold((first, first), |(mut lo, mut hi), p| {
        for axis in 0..4 {
            lo[axis] = lo[axis].min(p[axis]);
            hi[axis] = hi[axis].max(p[axis]);
        }
        (lo, hi)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fourspace_world::Scenario;

    #[test]
    fn test_terrain_geometry_new() {
        let geom = TerrainGeometry::new();
        assert_eq!(geom.vertex_count(), 0);
        assert_eq!(geom.tetrahedron_count(), 0);
        assert!(geom.as_bytes().is_empty());
    }

    #[test]
    fn test_single_block() {
        let mut geom = TerrainGeometry::new();
        geom.add_block(VoxelCoord::new(10, 0, 0, 0));

        assert_eq!(geom.vertex_count(), VERTICES_PER_BLOCK);
        assert_eq!(geom.tetrahedron_count(), 40);

        // All vertices should lie within half a unit of the voxel center
        for v in &geom.vertices {
            assert!(v.position[0] >= 9.5 && v.position[0] <= 10.5,
                "Vertex x should be around 10, got {}", v.position[0]);
            assert_eq!(v.color, [1.0, 1.0, 1.0, 1.0]);
        }
    }

    #[test]
    fn test_from_field_counts() {
        let field = Scenario::Wall.build(9);
        let geom = TerrainGeometry::from_field(&field);

        assert_eq!(geom.block_count(), 42);
        assert_eq!(geom.vertex_count(), 42 * 160);
        assert_eq!(geom.as_bytes().len(), 42 * 160 * 32);
    }

    #[test]
    fn test_terrain_geometry_clear() {
        let mut geom = TerrainGeometry::from_field(&Scenario::Block.build(9));
        assert!(geom.vertex_count() > 0);
        geom.clear();
        assert_eq!(geom.vertex_count(), 0);
    }

    #[test]
    fn test_position_gradient_color() {
        let (min, max) = (Vec4::ZERO, Vec4::new(4.0, 4.0, 4.0, 0.0));

        let color = position_gradient_color(&Vec4::splat(-0.5), min, max);
        assert_eq!(color, [0.0, 0.0, 0.0, 1.0]);

        let color = position_gradient_color(&Vec4::new(4.5, 4.5, 4.5, 0.0), min, max);
        assert_eq!(color, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_gradient_handles_single_voxel() {
        let color = position_gradient_color(&Vec4::ZERO, Vec4::ZERO, Vec4::ZERO);
        assert_eq!(color, [0.5, 0.5, 0.5, 1.0]);
    }
}
