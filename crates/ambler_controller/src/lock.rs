/// Ambient pointer-lock state, abstracted so the controller never talks to
/// a real window.
///
/// Browsers expose this as `document.pointerLockElement`; on desktop it is
/// whatever the host tracks around `set_cursor_grab`.  Hosts implement the
/// trait over their window handle; tests inject a fake.
///
/// Losing the lock is not an error anywhere in this crate — mouse look is
/// simply suspended until the user re-engages.
pub trait PointerLock {
    /// True while the render surface owns the pointer.
    fn is_locked(&self) -> bool;
}

impl<T: PointerLock + ?Sized> PointerLock for &T {
    fn is_locked(&self) -> bool {
        (**self).is_locked()
    }
}
