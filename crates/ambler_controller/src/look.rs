use std::f32::consts::FRAC_PI_2;

use ambler_core::CameraPose;

/// Radians of rotation per pixel of mouse travel.
pub const LOOK_SPEED: f32 = 0.002;

/// Converts relative mouse motion into yaw/pitch.
///
/// Moving the mouse right turns the camera right (yaw decreases), moving
/// it up tilts the camera up.  Pitch is clamped to `[-π/2, π/2]` after
/// every update so the camera can never rotate past straight up or straight
/// down — the invariant that prevents the view from flipping.
#[derive(Debug, Clone, Copy)]
pub struct MouseLook {
    pub look_speed: f32,
}

impl Default for MouseLook {
    fn default() -> Self {
        Self {
            look_speed: LOOK_SPEED,
        }
    }
}

impl MouseLook {
    /// Apply one relative motion event to `pose`.
    ///
    /// Non-finite deltas are dropped; the orientation must stay finite no
    /// matter what the device reports.
    pub fn apply(&self, pose: &mut CameraPose, dx: f64, dy: f64) {
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }
        pose.yaw -= dx as f32 * self.look_speed;
        pose.pitch -= dy as f32 * self.look_speed;
        pose.pitch = pose.pitch.clamp(-FRAC_PI_2, FRAC_PI_2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_clamped_for_any_motion_sequence() {
        let look = MouseLook::default();
        let mut pose = CameraPose::default();
        // a mix of small nudges and absurdly large swings
        let deltas = [
            (3.0, -7.0),
            (0.0, 1.0e6),
            (-120.0, -1.0e6),
            (15.0, 400.0),
            (0.0, -400.0),
        ];
        for (dx, dy) in deltas {
            look.apply(&mut pose, dx, dy);
            assert!(pose.pitch >= -FRAC_PI_2 && pose.pitch <= FRAC_PI_2);
        }
    }

    #[test]
    fn yaw_accumulates_unclamped() {
        let look = MouseLook::default();
        let mut pose = CameraPose::default();
        look.apply(&mut pose, 1000.0, 0.0);
        assert!((pose.yaw - (-1000.0 * LOOK_SPEED)).abs() < 1e-6);
        look.apply(&mut pose, 1000.0, 0.0);
        assert!((pose.yaw - (-2000.0 * LOOK_SPEED)).abs() < 1e-6);
    }

    #[test]
    fn non_finite_motion_is_ignored() {
        let look = MouseLook::default();
        let mut pose = CameraPose::default();
        look.apply(&mut pose, f64::NAN, 5.0);
        look.apply(&mut pose, 5.0, f64::INFINITY);
        assert_eq!(pose.yaw, 0.0);
        assert_eq!(pose.pitch, 0.0);
        assert!(pose.is_finite());
    }
}
