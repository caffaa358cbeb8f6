//! Desktop host for the first-person walkthrough controller.
//!
//! Owns the `winit` event loop and window, implements the pointer-lock
//! capability with cursor grabbing, and forwards keyboard and raw mouse
//! events into an [`ambler_controller::FirstPersonController`].  User code
//! implements [`WalkApp`] and receives a [`WalkContext`] every frame.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ambler_app::{App, WalkApp, WalkContext};
//!
//! struct Tour;
//!
//! impl WalkApp for Tour {
//!     fn update(&mut self, ctx: &mut WalkContext) {
//!         if ctx.input.is_key_pressed(ambler_app::KeyCode::Escape) && !ctx.locked {
//!             ctx.request_exit();
//!         }
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     App::new(Tour).with_title("Walkthrough").run()
//! }
//! ```

pub mod builder;
pub mod config;
pub mod context;
mod runner;
pub mod traits;

pub use builder::App;
pub use config::{AppConfig, ConfigError};
pub use context::WalkContext;
pub use traits::WalkApp;

// ── Re-export the most-used primitives ──────────────────────────────────────
// Users can name these without adding ambler_core / ambler_controller as
// direct dependencies.
pub use ambler_controller::{FirstPersonController, MoveDirection, PointerLock};
pub use ambler_core::{CameraPose, InputState, KeyCode, MouseButton, Time};

// glam math types — re-exported for convenience
pub use ambler_core::glam::{Mat4, Quat, Vec2, Vec3};
