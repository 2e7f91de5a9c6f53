//! Hand-built test worlds

use serde::{Deserialize, Serialize};

use crate::{VoxelCoord, VoxelField};

/// Fixed voxel layouts for exercising the camera and renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// A 5x5 wall that can only be bypassed by moving around it in z,
    /// a second wall at z = 4 with a 3x3 hole, and a marker voxel behind
    /// the wall along w
    Wall,
    /// A solid 5x5x5 block in the w = 0 slice
    Block,
}

impl Scenario {
    /// Solid coordinates of this layout
    pub fn coords(self) -> Vec<VoxelCoord> {
        match self {
            Scenario::Wall => {
                let mut coords = Vec::new();
                for y in 0..5 {
                    for x in 0..5 {
                        coords.push(VoxelCoord::new(x, y, 0, 0));
                    }
                }
                for y in 0..5 {
                    for x in 0..5 {
                        let in_hole = (1..4).contains(&x) && (1..4).contains(&y);
                        if !in_hole {
                            coords.push(VoxelCoord::new(x, y, 4, 0));
                        }
                    }
                }
                coords.push(VoxelCoord::new(2, 2, 0, 7));
                coords
            }
            Scenario::Block => {
                let mut coords = Vec::with_capacity(125);
                for z in 0..5 {
                    for y in 0..5 {
                        for x in 0..5 {
                            coords.push(VoxelCoord::new(x, y, z, 0));
                        }
                    }
                }
                coords
            }
        }
    }

    /// Build a voxel field holding this layout
    pub fn build(self, chunk_size: usize) -> VoxelField {
        VoxelField::from_occupied(chunk_size, self.coords())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_layout() {
        let field = Scenario::Wall.build(9);
        // 25 + (25 - 9) + 1
        assert_eq!(field.occupied_count(), 42);
        assert!(field.contains_occupied_cell(VoxelCoord::new(2, 2, 0, 7)));
        assert!(field.contains_occupied_cell(VoxelCoord::new(0, 2, 4, 0)));
        assert!(!field.contains_occupied_cell(VoxelCoord::new(2, 2, 4, 0)));
        assert!(!field.contains_occupied_cell(VoxelCoord::new(2, 2, 2, 0)));
    }

    #[test]
    fn test_block_layout() {
        let field = Scenario::Block.build(3);
        assert_eq!(field.occupied_count(), 125);
        assert!(field.contains_occupied_cell(VoxelCoord::new(4, 4, 4, 0)));
        assert!(!field.contains_occupied_cell(VoxelCoord::new(4, 4, 4, 1)));
    }
}
