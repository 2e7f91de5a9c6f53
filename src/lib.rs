//! Fourspace - explore a procedural 4D voxel world
//!
//! The binary is a thin driver; everything it wires together lives here
//! so it can be tested without a window.

pub mod config;
pub mod input;
pub mod systems;
pub mod world_builder;
