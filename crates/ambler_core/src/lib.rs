// ambler_core: foundation types for the walkthrough controller and its hosts.

// camera transform (position + yaw/pitch) mutated by the controller
pub mod pose;

// frame timing utilities
pub mod time;

// input helper for keyboard / mouse state
#[cfg(feature = "input")]
pub mod input;

#[cfg(feature = "input")]
pub use input::{InputState, KeyCode, MouseButton};
pub use pose::CameraPose;
pub use time::{Time, TimeClock};

// re-export so downstream crates can name math types without their own dep
pub use glam;
