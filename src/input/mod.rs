//! Input handling module
//!
//! Maps raw window events to application actions. Camera movement keys
//! are routed to [`fourspace_input::InputState`] instead.

mod input_mapper;

pub use input_mapper::{InputMapper, InputAction};
