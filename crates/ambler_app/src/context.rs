use ambler_core::{CameraPose, InputState, Time};
use winit::window::Window;

/// Per-frame context passed to every [`WalkApp`](crate::WalkApp) callback.
pub struct WalkContext<'a> {
    /// Keyboard and mouse state for this frame.
    pub input: &'a InputState,

    /// Frame timing: delta, elapsed, FPS.
    pub time: Time,

    /// The camera pose the controller is steering.  Read-only from app
    /// code; the controller owns its mutation.
    pub pose: &'a CameraPose,

    /// The native window handle.
    pub window: &'a Window,

    /// True while the window owns the pointer (mouse look active).
    pub locked: bool,

    /// Set via [`request_exit`](Self::request_exit) to stop the event loop.
    pub(crate) exit_requested: bool,
}

impl<'a> WalkContext<'a> {
    /// Signal the event loop to shut down after the current frame.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }
}
