//! Simplex primitives for 4D geometry
//!
//! Shapes are pure geometric data - no colors, materials, or rendering info.

use crate::Vec4;

/// A tetrahedron (3-simplex) embedded in 4-space
///
/// Tetrahedra are the building blocks handed to the renderer: every solid
/// block is approximated by a fixed set of them. Values are immutable and
/// shared by copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tetrahedron {
    pub corners: [Vec4; 4],
}

impl Tetrahedron {
    #[inline]
    pub const fn new(corners: [Vec4; 4]) -> Self {
        Self { corners }
    }

    /// Build a tetrahedron by picking four points out of a vertex array
    #[inline]
    pub fn from_indices(vertices: &[Vec4], indices: [usize; 4]) -> Self {
        Self {
            corners: indices.map(|i| vertices[i]),
        }
    }

    /// 3-dimensional volume of the simplex
    ///
    /// Uses the Gram determinant of the three edge vectors from the first
    /// corner, which works in any ambient dimension: `sqrt(det G) / 6`.
    pub fn volume(&self) -> f32 {
        let [c0, c1, c2, c3] = self.corners;
        let e = [c1 - c0, c2 - c0, c3 - c0];

        let mut g = [[0.0f32; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                g[i][j] = e[i].dot(e[j]);
            }
        }

        let det = g[0][0] * (g[1][1] * g[2][2] - g[1][2] * g[2][1])
            - g[0][1] * (g[1][0] * g[2][2] - g[1][2] * g[2][0])
            + g[0][2] * (g[1][0] * g[2][1] - g[1][1] * g[2][0]);

        // Rounding can push a degenerate simplex slightly negative
        det.max(0.0).sqrt() / 6.0
    }

    /// Average of the four corners
    pub fn centroid(&self) -> Vec4 {
        let [a, b, c, d] = self.corners;
        (a + b + c + d) * 0.25
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_unit_corner_volume() {
        let tet = Tetrahedron::new([Vec4::ZERO, Vec4::X, Vec4::Y, Vec4::Z]);
        assert!((tet.volume() - 1.0 / 6.0).abs() < EPSILON);
    }

    #[test]
    fn test_volume_ignores_embedding_axes() {
        // Same simplex spanned by x, z and w instead of x, y and z
        let tet = Tetrahedron::new([Vec4::ZERO, Vec4::X, Vec4::Z, Vec4::W]);
        assert!((tet.volume() - 1.0 / 6.0).abs() < EPSILON);
    }

    #[test]
    fn test_flat_tetrahedron_has_no_volume() {
        let tet = Tetrahedron::new([Vec4::ZERO, Vec4::X, Vec4::Y, Vec4::X + Vec4::Y]);
        assert!(tet.volume() < EPSILON);
    }

    #[test]
    fn test_from_indices_and_centroid() {
        let verts = [Vec4::ZERO, Vec4::X, Vec4::Y, Vec4::Z, Vec4::W];
        let tet = Tetrahedron::from_indices(&verts, [1, 2, 3, 4]);
        assert_eq!(tet.corners[3], Vec4::W);
        assert_eq!(tet.centroid(), Vec4::splat(0.25));
    }
}
