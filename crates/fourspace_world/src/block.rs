//! Voxel occupancy

use serde::{Deserialize, Serialize};

/// Occupancy state of a single voxel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Block {
    /// Empty space, never collides
    #[default]
    Air,
    /// Solid hypercube
    Solid,
}

impl Block {
    /// Block for a sampled terrain density (solid when strictly positive)
    #[inline]
    pub fn from_density(density: f32) -> Self {
        if density > 0.0 {
            Block::Solid
        } else {
            Block::Air
        }
    }

    #[inline]
    pub fn is_occupied(self) -> bool {
        matches!(self, Block::Solid)
    }
}
