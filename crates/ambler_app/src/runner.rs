use std::sync::Arc;

use ambler_controller::{FirstPersonController, PointerLock};
use ambler_core::{CameraPose, InputState, TimeClock};
use glam::Vec3;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::config::AppConfig;
use crate::context::WalkContext;
use crate::traits::WalkApp;

/// Pointer-lock capability backed by the runner's grab flag.
///
/// winit has no "is the cursor grabbed" query, so the runner tracks the
/// outcome of its own grab/release calls and exposes it through this.
#[derive(Default)]
struct GrabState {
    locked: bool,
}

impl PointerLock for GrabState {
    fn is_locked(&self) -> bool {
        self.locked
    }
}

struct Runner<A: WalkApp> {
    app: A,
    config: AppConfig,
    window: Option<Arc<Window>>,
    input: InputState,
    controller: FirstPersonController,
    pose: CameraPose,
    clock: TimeClock,
    grab: GrabState,
}

impl<A: WalkApp> Runner<A> {
    fn new(app: A, config: AppConfig) -> Self {
        let mut controller = FirstPersonController::new();
        controller.walk.move_speed = config.move_speed;
        controller.walk.damping = config.damping;
        controller.walk.min_height = config.min_height;
        controller.look.look_speed = config.look_speed;

        Self {
            app,
            pose: CameraPose::new(Vec3::new(0.0, config.min_height, 0.0)),
            config,
            window: None,
            input: InputState::new(),
            controller,
            clock: TimeClock::new(),
            grab: GrabState::default(),
        }
    }

    /// Engage the pointer lock in response to a user gesture.
    ///
    /// Denial is not an error: mouse look simply stays inactive until the
    /// next gesture.
    fn engage_lock(&mut self) {
        let Some(window) = &self.window else { return };
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
        match grabbed {
            Ok(()) => {
                window.set_cursor_visible(false);
                self.grab.locked = true;
                log::debug!("pointer lock engaged");
            }
            Err(err) => {
                log::debug!("pointer lock unavailable: {err}");
            }
        }
    }

    fn release_lock(&mut self) {
        if let Some(window) = &self.window {
            let _ = window.set_cursor_grab(CursorGrabMode::None);
            window.set_cursor_visible(true);
        }
        if self.grab.locked {
            log::debug!("pointer lock released");
        }
        self.grab.locked = false;
    }
}

impl<A: WalkApp> ApplicationHandler for Runner<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let attributes = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.config.width,
                self.config.height,
            ));

        let window = match event_loop.create_window(attributes) {
            Ok(w) => Arc::new(w),
            Err(err) => {
                log::error!("window creation failed: {err}");
                event_loop.exit();
                return;
            }
        };

        self.controller.start();

        // Call user setup — peek, so the first real frame still sees dt 0
        let time = self.clock.peek();
        let mut ctx = WalkContext {
            input: &self.input,
            time,
            pose: &self.pose,
            window: &window,
            locked: self.grab.locked,
            exit_requested: false,
        };
        self.app.setup(&mut ctx);
        if ctx.exit_requested {
            event_loop.exit();
            return;
        }

        self.window = Some(window);
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        // Mobile-style lifecycle: drop the grab, keep the controller state.
        self.release_lock();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        // ── 1. Feed the input layer ──────────────────────────────────────
        match &event {
            WindowEvent::KeyboardInput { event: key, .. } => {
                if let PhysicalKey::Code(code) = key.physical_key {
                    let pressed = key.state.is_pressed();
                    self.input.update_key(code, pressed);
                    self.controller.handle_key(code, pressed);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input
                    .update_mouse_button(*button, *state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.set_mouse_position(position.x, position.y);
            }
            _ => {}
        }

        // ── 2. Forward to the user callback ──────────────────────────────
        // Runs before lock management so the callback observes the lock
        // state as it was when the event fired.
        if let Some(window) = self.window.clone() {
            let time = self.clock.peek();
            let mut ctx = WalkContext {
                input: &self.input,
                time,
                pose: &self.pose,
                window: &window,
                locked: self.grab.locked,
                exit_requested: false,
            };
            self.app.on_window_event(&event, &mut ctx);
            if ctx.exit_requested {
                event_loop.exit();
                return;
            }
        }

        // ── 3. Window management ─────────────────────────────────────────
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event: key, .. } => {
                // Escape hands the cursor back, it does not quit
                if key.state.is_pressed()
                    && key.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    self.release_lock();
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                // the engagement gesture: click on the render surface
                if button == MouseButton::Left && state == ElementState::Pressed {
                    self.engage_lock();
                }
            }
            WindowEvent::Focused(focused) => {
                if focused {
                    self.controller.start();
                } else {
                    // missed key-ups would leave directions stuck; suspend
                    self.release_lock();
                    self.input.clear();
                    self.controller.stop();
                }
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.input.add_mouse_delta(dx, dy);
            self.controller
                .handle_mouse_motion(&mut self.pose, dx, dy, &self.grab);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.clone() else {
            return;
        };

        // Advance the frame clock and integrate movement
        let time = self.clock.tick();
        self.controller.update(&mut self.pose, time.delta);

        let mut ctx = WalkContext {
            input: &self.input,
            time,
            pose: &self.pose,
            window: &window,
            locked: self.grab.locked,
            exit_requested: false,
        };
        self.app.update(&mut ctx);
        if ctx.exit_requested {
            event_loop.exit();
            return;
        }

        // End-of-frame input cleanup.  Must happen AFTER the update callback
        // has had a chance to read the accumulated delta.
        let _ = self.input.consume_mouse_delta();

        window.request_redraw();
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.release_lock();
        self.controller.stop();
    }
}

pub(crate) fn run_internal<A: WalkApp + 'static>(config: AppConfig, app: A) -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    // Poll = spin the loop as fast as possible; no sleeping between frames.
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut runner = Runner::new(app, config);
    event_loop.run_app(&mut runner)?;
    Ok(())
}
