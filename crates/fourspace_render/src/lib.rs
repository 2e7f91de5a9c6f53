//! 4D Rendering Library
//!
//! This crate provides everything the renderer consumes from the 4D kernel:
//! the camera, the per-frame view-projection record, and the tessellated
//! terrain vertex stream. Device and surface management live with the
//! renderer itself.
//!
//! ## Key Components
//!
//! - [`camera4d::Camera4D`] - 4D camera with six rotation planes and voxel collision
//! - [`uniform`] - Versioned byte encoding of the view-projection transform
//! - [`renderable::TerrainGeometry`] - Converts the voxel field to GPU vertices
//! - [`types`] - Pod vertex and uniform types

pub mod camera4d;
pub mod renderable;
pub mod types;
pub mod uniform;

// Re-export commonly used types
pub use camera4d::{Camera4D, DEFAULT_SENSITIVITY};
pub use renderable::{position_gradient_color, TerrainGeometry, VERTICES_PER_BLOCK};
pub use types::{Vertex4D, ViewProjUniform};
pub use uniform::{decode_view_projection, encode_view_projection, LayoutError, UniformLayout};
