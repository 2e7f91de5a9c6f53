//! 4D Mathematics Library
//!
//! Vector, homogeneous transform, and simplex types for the Fourspace kernel.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Vec5`] - Homogeneous 4D vector (point or direction)
//! - [`Affine5`] - 5x5 homogeneous transform (view, projection, rotation)
//! - [`Mat4`] - 4x4 row-major matrix for the linear block
//!
//! ## Geometry
//!
//! - [`Tetrahedron`] - A 3-simplex with four 4D corners
//! - [`tesseract`] - Decomposition of unit hypercubes into 40 tetrahedra

mod vec4;
mod vec5;
mod affine5;
pub mod mat4;
pub mod shape;
pub mod tesseract;

pub use vec4::{cross4, Vec4};
pub use vec5::Vec5;
pub use affine5::Affine5;
pub use mat4::Mat4;
pub use shape::Tetrahedron;
pub use tesseract::{corners_of, decompose, tessellate_block};
