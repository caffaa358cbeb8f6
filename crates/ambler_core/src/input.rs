use std::collections::HashSet;

/// Re-exported key and mouse enums from `winit` for convenience.
// Callers go through these aliases so they never need a direct winit dep.
pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;

/// State of the keyboard and mouse at a given moment.
///
/// The host event loop is responsible for driving this structure by feeding
/// it the events coming from `winit`.  Once populated, the rest of the
/// application can query the state using the convenience helpers below.
///
/// Relative mouse motion is *accumulated* (raw device deltas can arrive
/// several times per frame) and handed out once per frame through
/// [`consume_mouse_delta`](InputState::consume_mouse_delta).
#[derive(Default)]
pub struct InputState {
    keys_down: HashSet<KeyCode>,
    mouse_buttons: HashSet<MouseButton>,
    mouse_pos: (f64, f64),
    /// motion accumulated since the last `consume_mouse_delta` call
    mouse_delta: (f64, f64),
}

impl InputState {
    /// Creates a fresh, empty input state.
    pub fn new() -> Self {
        Default::default()
    }

    /// Called by the event loop when a keyboard event arrives.
    pub fn update_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.keys_down.insert(key);
        } else {
            self.keys_down.remove(&key);
        }
    }

    /// Returns true if the given key is currently pressed down.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Called by the event loop when a mouse button event arrives.
    pub fn update_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.mouse_buttons.insert(button);
        } else {
            self.mouse_buttons.remove(&button);
        }
    }

    /// Returns true if the given mouse button is currently held.
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons.contains(&button)
    }

    /// Update the current mouse cursor position (window coordinates).
    pub fn set_mouse_position(&mut self, x: f64, y: f64) {
        self.mouse_pos = (x, y);
    }

    /// Retrieve the last recorded mouse position.
    pub fn mouse_position(&self) -> (f64, f64) {
        self.mouse_pos
    }

    /// Accumulate a raw relative mouse motion (from a device event).
    pub fn add_mouse_delta(&mut self, dx: f64, dy: f64) {
        self.mouse_delta.0 += dx;
        self.mouse_delta.1 += dy;
    }

    /// Retrieve and reset the mouse motion accumulated since the last call.
    pub fn consume_mouse_delta(&mut self) -> (f64, f64) {
        let d = self.mouse_delta;
        self.mouse_delta = (0.0, 0.0);
        d
    }

    /// Release every key and button, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.keys_down.clear();
        self.mouse_buttons.clear();
        self.mouse_delta = (0.0, 0.0);
    }
}

// simple unit tests for the input state implementation
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_tracking() {
        let mut state = InputState::new();
        assert!(!state.is_key_pressed(KeyCode::KeyW));
        state.update_key(KeyCode::KeyW, true);
        assert!(state.is_key_pressed(KeyCode::KeyW));
        state.update_key(KeyCode::KeyW, false);
        assert!(!state.is_key_pressed(KeyCode::KeyW));
    }

    #[test]
    fn mouse_tracking() {
        let mut state = InputState::new();
        assert!(!state.is_button_down(MouseButton::Left));
        state.update_mouse_button(MouseButton::Left, true);
        assert!(state.is_button_down(MouseButton::Left));
        state.update_mouse_button(MouseButton::Left, false);
        assert!(!state.is_button_down(MouseButton::Left));
        state.set_mouse_position(10.0, 20.0);
        assert_eq!(state.mouse_position(), (10.0, 20.0));
    }

    #[test]
    fn delta_accumulates_until_consumed() {
        let mut state = InputState::new();
        state.add_mouse_delta(3.0, -1.0);
        state.add_mouse_delta(2.0, 4.0);
        assert_eq!(state.consume_mouse_delta(), (5.0, 3.0));
        // consumption resets
        assert_eq!(state.consume_mouse_delta(), (0.0, 0.0));
    }

    #[test]
    fn clear_releases_everything() {
        let mut state = InputState::new();
        state.update_key(KeyCode::KeyA, true);
        state.update_mouse_button(MouseButton::Right, true);
        state.add_mouse_delta(1.0, 1.0);
        state.clear();
        assert!(!state.is_key_pressed(KeyCode::KeyA));
        assert!(!state.is_button_down(MouseButton::Right));
        assert_eq!(state.consume_mouse_delta(), (0.0, 0.0));
    }
}
