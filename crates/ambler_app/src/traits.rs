use crate::context::WalkContext;

/// The trait a walkthrough application implements.
///
/// All methods have empty default implementations so you only override what
/// you need; a bare window with first-person controls needs none of them.
#[allow(unused_variables)]
pub trait WalkApp {
    /// Called once after the window exists and the controller is attached.
    fn setup(&mut self, ctx: &mut WalkContext) {}

    /// Called every frame, after the controller has integrated movement.
    ///
    /// Read the camera from `ctx.pose` (or `ctx.pose.view_matrix()` when
    /// rendering) and call `ctx.request_exit()` to quit.
    fn update(&mut self, ctx: &mut WalkContext) {}

    /// Called for every raw winit `WindowEvent`, after the runner has fed
    /// the input state and controller.
    fn on_window_event(&mut self, event: &winit::event::WindowEvent, ctx: &mut WalkContext) {}
}
