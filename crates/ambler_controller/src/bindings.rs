use std::collections::HashMap;

use ambler_core::input::KeyCode;

/// The closed set of logical movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Forward,
    Back,
    Left,
    Right,
}

/// Maps physical keys to logical movement directions.
///
/// The default layout binds **two** keys per direction — the letter keys
/// and the arrow keys — so either set works out of the box:
///
/// | direction | keys                 |
/// |-----------|----------------------|
/// | Forward   | `W`, `ArrowUp`       |
/// | Back      | `S`, `ArrowDown`     |
/// | Left      | `A`, `ArrowLeft`     |
/// | Right     | `D`, `ArrowRight`    |
///
/// Keys with no binding resolve to `None`; the controller simply ignores
/// them.
#[derive(Debug, Clone)]
pub struct Bindings {
    map: HashMap<KeyCode, MoveDirection>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut b = Self {
            map: HashMap::new(),
        };
        b.bind(KeyCode::KeyW, MoveDirection::Forward);
        b.bind(KeyCode::ArrowUp, MoveDirection::Forward);
        b.bind(KeyCode::KeyS, MoveDirection::Back);
        b.bind(KeyCode::ArrowDown, MoveDirection::Back);
        b.bind(KeyCode::KeyA, MoveDirection::Left);
        b.bind(KeyCode::ArrowLeft, MoveDirection::Left);
        b.bind(KeyCode::KeyD, MoveDirection::Right);
        b.bind(KeyCode::ArrowRight, MoveDirection::Right);
        b
    }
}

impl Bindings {
    /// Creates an empty binding table (no keys mapped).
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Binds `key` to `dir`.  Binding the same key twice overwrites the
    /// old entry.
    pub fn bind(&mut self, key: KeyCode, dir: MoveDirection) {
        self.map.insert(key, dir);
    }

    /// Removes the binding for `key`, if any.
    pub fn unbind(&mut self, key: KeyCode) {
        self.map.remove(&key);
    }

    /// Logical direction bound to `key`, or `None` for unbound keys.
    pub fn direction_for(&self, key: KeyCode) -> Option<MoveDirection> {
        self.map.get(&key).copied()
    }
}
