//! 5x5 homogeneous transforms for 4D space
//!
//! An [`Affine5`] stores the full 5x5 matrix
//!
//! ```text
//! | M  t |
//! | r  s |
//! ```
//!
//! as a 4x4 linear block `M` (row-major), a translation column `t`, a
//! bottom row `r` that carries the perspective terms, and the scalar `s`.
//! Nothing forces `M` to be orthonormal; callers compose valid transforms.

use std::fmt;

use crate::mat4::{self, Mat4};
use crate::{cross4, Vec4, Vec5};

/// A 5x5 homogeneous transform in block form
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine5 {
    /// Linear 4x4 block, `m[row][col]`
    pub m: Mat4,
    /// Translation column
    pub t: Vec4,
    /// Bottom ("influence") row
    pub r: Vec4,
    /// Bottom-right homogeneous entry
    pub s: f32,
}

impl Default for Affine5 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine5 {
    pub const IDENTITY: Self = Self {
        m: mat4::IDENTITY,
        t: Vec4::ZERO,
        r: Vec4::ZERO,
        s: 1.0,
    };

    #[inline]
    pub const fn from_parts(m: Mat4, t: Vec4, r: Vec4, s: f32) -> Self {
        Self { m, t, r, s }
    }

    /// Matrix product `a * b`: the transform that applies `b` first, then `a`.
    ///
    /// Computed block-wise; the `t * r` outer product and the `r`/`s` terms
    /// carry the homogeneous row and column through the product.
    pub fn compose(a: &Affine5, b: &Affine5) -> Affine5 {
        let mut m = mat4::mul(&a.m, &b.m);
        let mut t = Vec4::ZERO;
        let mut r = Vec4::ZERO;

        for i in 0..4 {
            for j in 0..4 {
                m[i][j] += a.t[i] * b.r[j];
            }
            t[i] = mat4::row(&a.m, i).dot(b.t) + a.t[i] * b.s;
            r[i] = a.r.dot(mat4::column(&b.m, i)) + a.s * b.r[i];
        }

        Affine5 {
            m,
            t,
            r,
            s: a.r.dot(b.t) + a.s * b.s,
        }
    }

    /// Apply to a homogeneous vector: `(M·v + t·h, r·v + s·h)`
    #[inline]
    pub fn apply(&self, p: Vec5) -> Vec5 {
        Vec5::new(
            mat4::transform(&self.m, p.v) + self.t * p.h,
            self.r.dot(p.v) + self.s * p.h,
        )
    }

    /// Rotation in the plane spanned by `axis_a` and `axis_b`
    ///
    /// There are six such planes in 4-space: XY, XZ, XW, YZ, YW, ZW.
    /// A positive angle carries `axis_b` toward `axis_a` for points
    /// (row `axis_a` gets `+sin` in column `axis_b`).
    pub fn rotate(axis_a: usize, axis_b: usize, angle: f32) -> Affine5 {
        debug_assert!(axis_a < 4 && axis_b < 4, "rotation axes must be in 0..4");
        debug_assert_ne!(axis_a, axis_b, "rotation needs two distinct axes");

        let (sin, cos) = angle.sin_cos();
        let mut m = mat4::IDENTITY;
        m[axis_a][axis_a] = cos;
        m[axis_a][axis_b] = sin;
        m[axis_b][axis_a] = -sin;
        m[axis_b][axis_b] = cos;

        Affine5 { m, ..Self::IDENTITY }
    }

    /// Translation by `amount` along a single axis
    pub fn translate(axis: usize, amount: f32) -> Affine5 {
        debug_assert!(axis < 4, "translation axis must be in 0..4");

        let mut t = Vec4::ZERO;
        t[axis] = amount;
        Affine5 { t, ..Self::IDENTITY }
    }

    /// View transform looking from `eye` toward `center`
    ///
    /// Builds the orthonormal frame
    /// - forward `f = normalize(center - eye)`
    /// - ana `a = normalize(cross4(f, up, right))`
    /// - right `r = normalize(cross4(f, a, up))`
    /// - up `u = normalize(cross4(f, r, a))`
    ///
    /// whose rows `r, u, a, -f` form `M`, so view space looks down `-w`.
    /// The eye maps to the origin.
    ///
    /// # Preconditions
    /// `eye != center`, and `forward`, `up`, `right` must be linearly
    /// independent. Debug builds assert this; release builds produce NaN.
    pub fn look_at(eye: Vec4, center: Vec4, up: Vec4, right: Vec4) -> Affine5 {
        let dir = center - eye;
        debug_assert!(dir.length_squared() > 0.0, "look_at: eye and center coincide");
        let f = dir.normalized();

        let ana = cross4(f, up, right);
        debug_assert!(
            ana.length_squared() > f32::EPSILON,
            "look_at: forward, up and right hints are linearly dependent"
        );
        let a = ana.normalized();
        let r = cross4(f, a, up).normalized();
        let u = cross4(f, r, a).normalized();

        let m = [
            r.to_array(),
            u.to_array(),
            a.to_array(),
            (-f).to_array(),
        ];
        let t = Vec4::new(-r.dot(eye), -u.dot(eye), -a.dot(eye), f.dot(eye));

        Affine5 { m, t, r: Vec4::ZERO, s: 1.0 }
    }

    /// Perspective projection with separate aspect ratios for x and the
    /// fourth (ana) axis
    ///
    /// `fovy` is in radians. Depth along view `-w` maps `z_near -> 0` and
    /// `z_far -> 1` after the perspective divide. The divisor is the view
    /// distance alone (`r = -e_w`, `s = 0`), so the homogeneous input
    /// component does not leak into it.
    pub fn perspective(fovy: f32, aspect_x: f32, aspect_w: f32, z_near: f32, z_far: f32) -> Affine5 {
        let tan_half_fovy = (fovy / 2.0).tan();

        let mut m = [[0.0f32; 4]; 4];
        m[0][0] = 1.0 / (aspect_x * tan_half_fovy);
        m[1][1] = 1.0 / tan_half_fovy;
        m[2][2] = 1.0 / (aspect_w * tan_half_fovy);
        m[3][3] = z_far / (z_near - z_far);

        Affine5 {
            m,
            t: Vec4::new(0.0, 0.0, 0.0, -(z_far * z_near) / (z_far - z_near)),
            r: Vec4::new(0.0, 0.0, 0.0, -1.0),
            s: 0.0,
        }
    }

    /// The point that this transform maps to the origin, `-Mᵀ·t`
    ///
    /// Only meaningful when `M` is orthonormal (rigid view transforms).
    pub fn eye_position(&self) -> Vec4 {
        -mat4::transform_transposed(&self.m, self.t)
    }

    /// The full 5x5 matrix, row-major
    pub fn to_rows(&self) -> [[f32; 5]; 5] {
        let mut rows = [[0.0f32; 5]; 5];
        for i in 0..4 {
            rows[i][..4].copy_from_slice(&self.m[i]);
            rows[i][4] = self.t[i];
            rows[4][i] = self.r[i];
        }
        rows[4][4] = self.s;
        rows
    }

    /// Component-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: &Affine5, epsilon: f32) -> bool {
        self.to_rows()
            .iter()
            .flatten()
            .zip(other.to_rows().iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// True if every entry is finite
    pub fn is_finite(&self) -> bool {
        self.to_rows().iter().flatten().all(|v| v.is_finite())
    }
}

impl std::ops::Mul for Affine5 {
    type Output = Affine5;
    #[inline]
    fn mul(self, rhs: Affine5) -> Affine5 {
        Affine5::compose(&self, &rhs)
    }
}

impl std::ops::Mul<Vec5> for Affine5 {
    type Output = Vec5;
    #[inline]
    fn mul(self, rhs: Vec5) -> Vec5 {
        self.apply(rhs)
    }
}

impl fmt::Display for Affine5 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.to_rows().iter().enumerate() {
            let open = if i == 0 { "[" } else { " " };
            let close = if i == 4 { "]" } else { "" };
            writeln!(
                f,
                "{}{:>9.4} {:>9.4} {:>9.4} {:>9.4} | {:>9.4}{}",
                open, row[0], row[1], row[2], row[3], row[4], close
            )?;
        }
        Ok(())
    }
}
