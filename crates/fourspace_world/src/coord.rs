//! Integer addressing for voxels and chunks

use fourspace_math::Vec4;
use serde::{Deserialize, Serialize};

/// Integer coordinate of one voxel in 4-space
///
/// The voxel occupies the unit hypercube centered on this coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VoxelCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub w: i32,
}

impl VoxelCoord {
    pub const ORIGIN: Self = Self::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn from_array(a: [i32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    #[inline]
    pub const fn to_array(self) -> [i32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// The voxel whose center is nearest to `p` (halfway cases round away from zero)
    #[inline]
    pub fn nearest(p: Vec4) -> Self {
        let r = p.round();
        Self::new(r.x as i32, r.y as i32, r.z as i32, r.w as i32)
    }

    /// World-space center of this voxel
    #[inline]
    pub fn center(self) -> Vec4 {
        Vec4::new(self.x as f32, self.y as f32, self.z as f32, self.w as f32)
    }

    /// Component along `axis` (0=X, 1=Y, 2=Z, 3=W)
    #[inline]
    pub fn get(self, axis: usize) -> i32 {
        self.to_array()[axis]
    }

    /// Component-wise offset
    #[inline]
    pub fn offset(self, d: [i32; 4]) -> Self {
        Self::new(self.x + d[0], self.y + d[1], self.z + d[2], self.w + d[3])
    }
}

impl From<[i32; 4]> for VoxelCoord {
    fn from(a: [i32; 4]) -> Self {
        Self::from_array(a)
    }
}

/// Position of a chunk on the chunk grid
///
/// Chunk `i` covers voxel coordinates `[i * size, (i + 1) * size)` on
/// every axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkIndex {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub w: i32,
}

impl ChunkIndex {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn from_array(a: [i32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    #[inline]
    pub const fn to_array(self) -> [i32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// The chunk containing `coord`
    ///
    /// Uses Euclidean division, so `-1` lands in chunk `-1`, not chunk `0`.
    pub fn containing(coord: VoxelCoord, chunk_size: usize) -> Self {
        let s = chunk_size as i32;
        Self::new(
            coord.x.div_euclid(s),
            coord.y.div_euclid(s),
            coord.z.div_euclid(s),
            coord.w.div_euclid(s),
        )
    }

    /// Lowest voxel coordinate inside this chunk
    pub fn origin(self, chunk_size: usize) -> VoxelCoord {
        let s = chunk_size as i32;
        VoxelCoord::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl From<[i32; 4]> for ChunkIndex {
    fn from(a: [i32; 4]) -> Self {
        Self::from_array(a)
    }
}
