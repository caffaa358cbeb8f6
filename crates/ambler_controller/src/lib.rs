//! First-person walkthrough controller.
//!
//! The controller turns keyboard state and relative mouse motion into a
//! smoothly damped camera walk: WASD / arrow keys accelerate a planar
//! velocity that decays exponentially when released, mouse motion steers
//! yaw/pitch while pointer lock is held, and a ground clamp keeps the
//! camera at eye height.
//!
//! It owns no window and no render loop.  A host feeds it events through
//! [`FirstPersonController::handle_key`] and
//! [`FirstPersonController::handle_mouse_motion`], and calls
//! [`FirstPersonController::update`] once per rendered frame with the
//! elapsed seconds.  Pointer-lock state is queried through the
//! [`PointerLock`] capability so the whole crate runs headless in tests.
//!
//! ```rust,ignore
//! let mut controller = FirstPersonController::new();
//! let mut pose = CameraPose::new(Vec3::new(0.0, 1.5, 0.0));
//! controller.start();
//! // ... host forwards key / mouse events ...
//! controller.update(&mut pose, time.delta);
//! ```

pub mod bindings;
pub mod controller;
pub mod lock;
pub mod look;
pub mod walk;

pub use bindings::{Bindings, MoveDirection};
pub use controller::FirstPersonController;
pub use lock::PointerLock;
pub use look::{MouseLook, LOOK_SPEED};
pub use walk::{HeldDirections, Walk, DAMPING, MIN_HEIGHT, MOVE_SPEED};
