//! 4x4 matrix helpers for the linear block of an [`Affine5`](crate::Affine5)
//!
//! Matrices are stored row-major: `m[row][col]`. Applying a matrix to a
//! vector is `M * v`, so row `i` dotted with `v` gives component `i`.

use crate::Vec4;

/// 4x4 matrix type (row-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Multiply two 4x4 matrices: result = a * b (b is applied first)
#[allow(clippy::needless_range_loop)]
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }

    result
}

/// Transform a Vec4 by a 4x4 matrix: result = M * v
pub fn transform(m: &Mat4, v: Vec4) -> Vec4 {
    Vec4::new(
        row(m, 0).dot(v),
        row(m, 1).dot(v),
        row(m, 2).dot(v),
        row(m, 3).dot(v),
    )
}

/// Transform a Vec4 by the transpose of a matrix: result = Mᵀ * v
///
/// For an orthonormal `m` this is the inverse transform.
pub fn transform_transposed(m: &Mat4, v: Vec4) -> Vec4 {
    Vec4::new(
        column(m, 0).dot(v),
        column(m, 1).dot(v),
        column(m, 2).dot(v),
        column(m, 3).dot(v),
    )
}

/// Get a row vector from a matrix
#[inline]
pub fn row(m: &Mat4, i: usize) -> Vec4 {
    Vec4::from_array(m[i])
}

/// Get a column vector from a matrix
#[inline]
pub fn column(m: &Mat4, j: usize) -> Vec4 {
    Vec4::new(m[0][j], m[1][j], m[2][j], m[3][j])
}

/// Transpose a matrix
pub fn transpose(m: &Mat4) -> Mat4 {
    [
        [m[0][0], m[1][0], m[2][0], m[3][0]],
        [m[0][1], m[1][1], m[2][1], m[3][1]],
        [m[0][2], m[1][2], m[2][2], m[3][2]],
        [m[0][3], m[1][3], m[2][3], m[3][3]],
    ]
}
