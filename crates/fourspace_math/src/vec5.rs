//! Homogeneous 4D vector

use crate::Vec4;

/// A 4D vector plus a homogeneous weight `h`
///
/// Points carry `h = 1`, directions `h = 0`. After a perspective
/// transform `h` holds the divisor for the projected coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec5 {
    /// Spatial part (x, y, z, w)
    pub v: Vec4,
    /// Homogeneous component
    pub h: f32,
}

impl Vec5 {
    #[inline]
    pub const fn new(v: Vec4, h: f32) -> Self {
        Self { v, h }
    }

    /// A position in 4-space, affected by translation
    #[inline]
    pub const fn point(v: Vec4) -> Self {
        Self { v, h: 1.0 }
    }

    /// A direction in 4-space, unaffected by translation
    #[inline]
    pub const fn direction(v: Vec4) -> Self {
        Self { v, h: 0.0 }
    }

    /// Perspective divide: `v / h`
    ///
    /// Directions (`h == 0`) have no finite projection and produce Inf/NaN.
    #[inline]
    pub fn project(self) -> Vec4 {
        self.v / self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_and_direction() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Vec5::point(v).h, 1.0);
        assert_eq!(Vec5::direction(v).h, 0.0);
    }

    #[test]
    fn test_project_divides_by_weight() {
        let p = Vec5::new(Vec4::new(2.0, 4.0, 6.0, 8.0), 2.0);
        assert_eq!(p.project(), Vec4::new(1.0, 2.0, 3.0, 4.0));
    }
}
