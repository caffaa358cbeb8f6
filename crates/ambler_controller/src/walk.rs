use ambler_core::CameraPose;
use glam::Vec3;

/// Acceleration contribution per held key, world units per second.
pub const MOVE_SPEED: f32 = 5.0;
/// Exponential damping factor applied to the planar velocity every frame.
pub const DAMPING: f32 = 10.0;
/// Eye height the camera can never sink below.
pub const MIN_HEIGHT: f32 = 1.5;

/// Which logical movement directions are held this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirections {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

#[inline]
fn flag(b: bool) -> f32 {
    if b {
        1.0
    } else {
        0.0
    }
}

/// Per-frame velocity integrator and ground clamp.
///
/// The planar velocity decays exponentially toward rest and is accelerated
/// by the held keys through a *normalized* direction vector, so diagonals
/// are no faster than a single axis and opposing keys cancel through the
/// vector rather than fighting each other with independent contributions.
/// Only `velocity.x` and `velocity.z` are ever non-zero; vertical motion
/// comes exclusively from translating along a pitched look axis and is cut
/// off below by the ground clamp.
#[derive(Debug, Clone, Copy)]
pub struct Walk {
    pub velocity: Vec3,
    pub move_speed: f32,
    pub damping: f32,
    pub min_height: f32,
}

impl Default for Walk {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            move_speed: MOVE_SPEED,
            damping: DAMPING,
            min_height: MIN_HEIGHT,
        }
    }
}

impl Walk {
    /// Advance one frame.
    ///
    /// `dt` is the elapsed seconds since the previous frame.  A zero,
    /// negative or non-finite delta makes the whole step a no-op — never an
    /// error, and never a NaN reaching the pose.
    pub fn integrate(&mut self, pose: &mut CameraPose, held: HeldDirections, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }

        self.velocity.x -= self.velocity.x * self.damping * dt;
        self.velocity.z -= self.velocity.z * self.damping * dt;

        let dir = Vec3::new(
            flag(held.right) - flag(held.left),
            0.0,
            flag(held.back) - flag(held.forward),
        )
        .normalize_or_zero();

        // Acceleration goes through the shared direction vector: when
        // opposing keys are both held the component is zero, so neither
        // side accelerates and the existing velocity just damps out.
        if held.forward || held.back {
            self.velocity.z -= dir.z * self.move_speed * dt;
        }
        if held.left || held.right {
            self.velocity.x -= dir.x * self.move_speed * dt;
        }

        pose.translate_right(self.velocity.x * dt);
        pose.translate_forward(self.velocity.z * dt);

        // Defensive: every frame, however the camera got low.
        pose.clamp_height(self.min_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn spawn() -> CameraPose {
        CameraPose::new(Vec3::new(0.0, MIN_HEIGHT, 0.0))
    }

    #[test]
    fn damping_converges_to_rest() {
        let mut walk = Walk::default();
        let mut pose = spawn();
        walk.velocity = Vec3::new(3.0, 0.0, -2.0);

        let mut prev = walk.velocity.length();
        let mut steps = 0;
        while prev > 1e-6 {
            walk.integrate(&mut pose, HeldDirections::default(), DT);
            let mag = walk.velocity.length();
            assert!(mag < prev, "velocity must shrink every frame");
            prev = mag;
            steps += 1;
            assert!(steps < 200, "must converge within a bounded step count");
        }
    }

    #[test]
    fn opposing_keys_coast_instead_of_accelerating() {
        let mut walk = Walk::default();
        let mut pose = spawn();
        walk.velocity = Vec3::new(0.0, 0.0, 1.0);
        let held = HeldDirections {
            forward: true,
            back: true,
            ..Default::default()
        };
        walk.integrate(&mut pose, held, DT);
        // no acceleration, one frame of pure damping
        let expected = 1.0 - DAMPING * DT;
        assert!((walk.velocity.z - expected).abs() < 1e-6);
    }

    #[test]
    fn diagonal_is_not_faster_than_straight() {
        let mut straight = Walk::default();
        let mut diagonal = Walk::default();
        let mut pose_a = spawn();
        let mut pose_b = spawn();
        for _ in 0..120 {
            straight.integrate(
                &mut pose_a,
                HeldDirections {
                    forward: true,
                    ..Default::default()
                },
                DT,
            );
            diagonal.integrate(
                &mut pose_b,
                HeldDirections {
                    forward: true,
                    right: true,
                    ..Default::default()
                },
                DT,
            );
        }
        assert!(diagonal.velocity.length() <= straight.velocity.length() + 1e-4);
    }

    #[test]
    fn ground_clamp_restores_floor_same_frame() {
        let mut walk = Walk::default();
        // look straight down and walk "forward" into the floor
        let mut pose = spawn();
        pose.pitch = -std::f32::consts::FRAC_PI_2;
        let held = HeldDirections {
            forward: true,
            ..Default::default()
        };
        for _ in 0..120 {
            walk.integrate(&mut pose, held, DT);
            assert_eq!(pose.position.y, MIN_HEIGHT);
        }
    }

    #[test]
    fn clamp_never_overshoots_upward() {
        let mut walk = Walk::default();
        let mut pose = CameraPose::new(Vec3::new(0.0, 0.2, 0.0));
        walk.integrate(&mut pose, HeldDirections::default(), DT);
        assert_eq!(pose.position.y, MIN_HEIGHT);
    }

    #[test]
    fn bad_delta_is_a_no_op() {
        let mut walk = Walk::default();
        walk.velocity = Vec3::new(1.0, 0.0, 1.0);
        let mut pose = spawn();
        let held = HeldDirections {
            forward: true,
            ..Default::default()
        };
        for dt in [0.0, -0.5, f32::NAN, f32::INFINITY] {
            walk.integrate(&mut pose, held, dt);
        }
        assert_eq!(walk.velocity, Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(pose.position, Vec3::new(0.0, MIN_HEIGHT, 0.0));
    }

    #[test]
    fn hold_forward_one_second_walks_along_look_direction() {
        let mut walk = Walk::default();
        let mut pose = spawn();
        let held = HeldDirections {
            forward: true,
            ..Default::default()
        };
        for _ in 0..60 {
            walk.integrate(&mut pose, held, DT);
        }
        // at identity orientation the look direction is -Z
        assert!(pose.position.z < 0.0);
        // damping keeps the covered distance well under move_speed * 1s
        assert!(pose.position.z.abs() < MOVE_SPEED);
        assert_eq!(pose.position.y, MIN_HEIGHT);
        assert_eq!(pose.position.x, 0.0);
    }
}
