//! Tesseract (4D hypercube) tessellation
//!
//! A tesseract has 16 corners and 8 cubic cells. Each cell is an ordinary
//! cube living in a 3-flat, so it can be split with the classic
//! cube-to-five-tetrahedra pattern. Doing that for all 8 cells gives the
//! 40 tetrahedra that approximate one voxel block for a 3-simplex renderer.
//!
//! Corner `i` takes the `+` side of axis `k` when bit `k` of `i` is set:
//! corner 0 is `center - 0.5` on every axis and corner 15 is `center + 0.5`.

use crate::{Tetrahedron, Vec4};

/// Number of corners of a tesseract
pub const CORNER_COUNT: usize = 16;

/// Number of tetrahedra produced per tesseract
pub const TETRAHEDRA_PER_TESSERACT: usize = 40;

/// The 8 cubic cells of a tesseract, one per (axis, side) pair
///
/// Within each octuple, `[0..4]` walk one square face of the cube in
/// cyclic order and `[4..8]` are the same corners one step along the
/// cube's third axis, so the layout matches [`CUBE_TETRAHEDRA`].
pub const CUBE_CELLS: [[usize; 8]; 8] = [
    [0, 2, 6, 4, 8, 10, 14, 12],   // x = -0.5
    [1, 3, 7, 5, 9, 11, 15, 13],   // x = +0.5
    [0, 1, 5, 4, 8, 9, 13, 12],    // y = -0.5
    [2, 3, 7, 6, 10, 11, 15, 14],  // y = +0.5
    [0, 1, 3, 2, 8, 9, 11, 10],    // z = -0.5
    [4, 5, 7, 6, 12, 13, 15, 14],  // z = +0.5
    [0, 1, 3, 2, 4, 5, 7, 6],      // w = -0.5
    [8, 9, 11, 10, 12, 13, 15, 14], // w = +0.5
];

/// Split of one cube (in the octuple layout above) into 5 tetrahedra
///
/// Four corner tetrahedra cut off corners 0, 2, 5 and 7; the fifth is the
/// regular tetrahedron on the remaining alternating corners 1, 3, 4, 6.
/// The corner pieces each hold 1/6 of the cube and the center piece 1/3.
pub const CUBE_TETRAHEDRA: [[usize; 4]; 5] = [
    [0, 1, 4, 3],
    [2, 1, 3, 6],
    [5, 1, 6, 4],
    [7, 3, 4, 6],
    [1, 3, 6, 4],
];

/// The 16 corners of the unit tesseract centered at `center`
pub fn corners_of(center: Vec4) -> [Vec4; CORNER_COUNT] {
    std::array::from_fn(|i| {
        let mut corner = center;
        for axis in 0..4 {
            corner[axis] += if i & (1 << axis) != 0 { 0.5 } else { -0.5 };
        }
        corner
    })
}

/// Corner-index quadruples of all 40 tetrahedra, cell by cell
pub fn tetrahedron_indices() -> [[usize; 4]; TETRAHEDRA_PER_TESSERACT] {
    std::array::from_fn(|n| {
        let cell = &CUBE_CELLS[n / CUBE_TETRAHEDRA.len()];
        CUBE_TETRAHEDRA[n % CUBE_TETRAHEDRA.len()].map(|local| cell[local])
    })
}

/// Decompose a tesseract into 40 tetrahedra
///
/// `corners` must be in the bit-pattern order produced by [`corners_of`].
/// Any axis-aligned box in that order works, not only unit blocks.
pub fn decompose(corners: &[Vec4; CORNER_COUNT]) -> [Tetrahedron; TETRAHEDRA_PER_TESSERACT] {
    tetrahedron_indices().map(|indices| Tetrahedron::from_indices(corners, indices))
}

/// Tetrahedra for the unit block centered at an integer voxel coordinate
pub fn tessellate_block(center: Vec4) -> [Tetrahedron; TETRAHEDRA_PER_TESSERACT] {
    decompose(&corners_of(center))
}
