//! Frame timing utilities.
//!
//! `Time` is updated once per frame by the host runner and handed to the
//! controller and to every app callback.  All fields are read-only from
//! user code; the runner owns the `TimeClock` that produces snapshots.

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;
#[cfg(target_arch = "wasm32")]
use web_time::Instant;

/// A snapshot of timing information for the current frame.
///
/// `Copy`, so callbacks can stash a local copy if needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    /// Seconds elapsed since the previous frame.  Typical values are in the
    /// range 0.008 – 0.033.  Clamped to a maximum of 0.1 to prevent huge
    /// integration steps after a stall.
    pub delta: f32,

    /// Total seconds elapsed since the clock was created.
    pub elapsed: f64,

    /// Number of frames ticked so far (starts at 0 for the first frame).
    pub frame_count: u64,

    /// Instantaneous frames-per-second derived from `delta`.
    pub fps: f32,
}

impl Time {
    /// Returns the delta time clamped to `[0, max_dt]`.
    #[inline]
    pub fn clamped_delta(&self, max_dt: f32) -> f32 {
        self.delta.min(max_dt)
    }
}

/// Stateful timer that accumulates time and produces [`Time`] snapshots.
///
/// The runner creates one at startup and calls `tick()` at the beginning of
/// every frame.
pub struct TimeClock {
    start: Instant,
    last_tick: Instant,
    frame_count: u64,
}

impl TimeClock {
    /// Create a new clock, starting the epoch now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            frame_count: 0,
        }
    }

    /// Return the current [`Time`] snapshot without advancing the clock.
    ///
    /// Useful for callbacks (like `setup`) that are not on the hot frame
    /// path — they still want valid timing data but must not advance the
    /// frame counter.
    pub fn peek(&self) -> Time {
        let now = Instant::now();
        let delta = (now - self.last_tick).as_secs_f32().min(0.1);
        let elapsed = (now - self.start).as_secs_f64();
        let fps = if delta > 0.0 { 1.0 / delta } else { 0.0 };
        Time {
            delta,
            elapsed,
            frame_count: self.frame_count,
            fps,
        }
    }

    /// Advance by one frame.  Returns the [`Time`] snapshot for this frame.
    pub fn tick(&mut self) -> Time {
        let now = Instant::now();
        let delta = (now - self.last_tick).as_secs_f32().min(0.1);
        let elapsed = (now - self.start).as_secs_f64();
        let fps = if delta > 0.0 { 1.0 / delta } else { 0.0 };
        let count = self.frame_count;

        self.last_tick = now;
        self.frame_count += 1;

        Time {
            delta,
            elapsed,
            frame_count: count,
            fps,
        }
    }
}

impl Default for TimeClock {
    fn default() -> Self {
        Self::new()
    }
}
