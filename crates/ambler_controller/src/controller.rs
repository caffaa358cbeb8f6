use std::collections::HashSet;

use ambler_core::input::KeyCode;
use ambler_core::CameraPose;

use crate::bindings::{Bindings, MoveDirection};
use crate::lock::PointerLock;
use crate::look::MouseLook;
use crate::walk::{HeldDirections, Walk};

/// The first-person movement controller.
///
/// Composes the key [`Bindings`], the pointer-lock-gated [`MouseLook`] and
/// the per-frame [`Walk`] integrator, plus the set of currently held bound
/// keys.  A logical direction counts as held while *any* of its bound keys
/// is down, so `W` and `ArrowUp` interchangeably drive the same axis.
///
/// The controller is created detached.  [`start`](Self::start) attaches it
/// and [`stop`](Self::stop) detaches it again; both are idempotent, and a
/// detached controller ignores every event and every update.  This mirrors
/// scoped event-listener acquisition: the host decides when the controller
/// may observe input, and teardown can never fail.
pub struct FirstPersonController {
    pub bindings: Bindings,
    pub look: MouseLook,
    pub walk: Walk,
    held: HashSet<KeyCode>,
    attached: bool,
}

impl Default for FirstPersonController {
    fn default() -> Self {
        Self::new()
    }
}

impl FirstPersonController {
    /// A detached controller with the default key layout and tuning.
    pub fn new() -> Self {
        Self {
            bindings: Bindings::default(),
            look: MouseLook::default(),
            walk: Walk::default(),
            held: HashSet::new(),
            attached: false,
        }
    }

    /// Attach the controller: from now on events are observed.
    ///
    /// Held keys are reset so a key pressed before attachment cannot leak
    /// in as "already held".  Calling `start` on an attached controller is
    /// a no-op.
    pub fn start(&mut self) {
        if self.attached {
            return;
        }
        self.attached = true;
        self.held.clear();
        log::debug!("first-person controller attached");
    }

    /// Detach the controller and drop all transient state.
    ///
    /// Idempotent: stopping an already-stopped controller does nothing and
    /// never errors.  After `stop` returns, key and mouse events mutate
    /// nothing until the next `start`.
    pub fn stop(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        self.held.clear();
        self.walk.velocity = glam::Vec3::ZERO;
        log::debug!("first-person controller detached");
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Feed one keyboard transition.  Unbound keys and events arriving
    /// while detached are ignored.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if !self.attached || self.bindings.direction_for(key).is_none() {
            return;
        }
        if pressed {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
    }

    /// Feed one relative mouse motion event.
    ///
    /// Orientation only changes while the controller is attached *and* the
    /// host currently owns the pointer; otherwise the motion is discarded
    /// without error.
    pub fn handle_mouse_motion(
        &self,
        pose: &mut CameraPose,
        dx: f64,
        dy: f64,
        lock: &dyn PointerLock,
    ) {
        if !self.attached || !lock.is_locked() {
            return;
        }
        self.look.apply(pose, dx, dy);
    }

    /// Per-frame update: damp, accelerate from held keys, translate the
    /// pose along its local axes and clamp the height.  No-op while
    /// detached or for a degenerate `dt`.
    pub fn update(&mut self, pose: &mut CameraPose, dt: f32) {
        if !self.attached {
            return;
        }
        let held = self.held_directions();
        self.walk.integrate(pose, held, dt);
    }

    /// True while any key bound to `dir` is down.
    pub fn direction_held(&self, dir: MoveDirection) -> bool {
        self.held
            .iter()
            .any(|key| self.bindings.direction_for(*key) == Some(dir))
    }

    fn held_directions(&self) -> HeldDirections {
        HeldDirections {
            forward: self.direction_held(MoveDirection::Forward),
            back: self.direction_held(MoveDirection::Back),
            left: self.direction_held(MoveDirection::Left),
            right: self.direction_held(MoveDirection::Right),
        }
    }
}
