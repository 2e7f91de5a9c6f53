//! GPU-compatible data types handed to the renderer
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use fourspace_math::Affine5;

/// A vertex in 4D space with color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex4D {
    /// Position in 4D space (x, y, z, w)
    pub position: [f32; 4],
    /// RGBA color
    pub color: [f32; 4],
}

impl Vertex4D {
    /// Create a new 4D vertex
    pub fn new(position: [f32; 4], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    /// Create a vertex from position with default white color
    pub fn from_position(position: [f32; 4]) -> Self {
        Self {
            position,
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Combined view-projection transform as a shader uniform
/// Layout: 100 bytes total
///
/// `matrix` is the row-major 4x4 block, followed by the translation
/// column, the bottom row and the homogeneous scalar.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ViewProjUniform {
    /// Linear block, `matrix[row][col]` (64 bytes)
    pub matrix: [[f32; 4]; 4],
    /// Translation column (16 bytes)
    pub column: [f32; 4],
    /// Bottom row (16 bytes)
    pub row: [f32; 4],
    /// Bottom-right entry (4 bytes)
    pub scalar: f32,
}

impl Default for ViewProjUniform {
    fn default() -> Self {
        Self::from(Affine5::IDENTITY)
    }
}

impl From<Affine5> for ViewProjUniform {
    fn from(a: Affine5) -> Self {
        Self {
            matrix: a.m,
            column: a.t.to_array(),
            row: a.r.to_array(),
            scalar: a.s,
        }
    }
}

impl From<ViewProjUniform> for Affine5 {
    fn from(u: ViewProjUniform) -> Self {
        Affine5::from_parts(u.matrix, u.column.into(), u.row.into(), u.scalar)
    }
}
