use glam::{EulerRot, Mat4, Quat, Vec3};

/// Camera transform mutated by the walkthrough controller.
///
/// The pose lives in core so hosts can inspect or render from it directly;
/// the controller only translates it along its local axes and steers the
/// yaw/pitch angles.  Rotation order is YXZ: yaw about the world Y axis
/// first, then pitch about the camera's local X axis.  With that order the
/// right axis stays horizontal, so strafing never gains a vertical
/// component no matter where the camera looks.
#[derive(Debug, Clone, Copy)]
pub struct CameraPose {
    pub position: Vec3,
    /// Heading in radians, counter-clockwise about world Y.
    pub yaw: f32,
    /// Elevation in radians.  The controller keeps this in [-π/2, π/2].
    pub pitch: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl CameraPose {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Current orientation as a quaternion.
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// The look direction.  At identity orientation this is -Z, following
    /// the right-handed convention shared by glam's `look_to_rh`.
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// The camera's local right axis.  Horizontal by construction (pitch is
    /// applied about this very axis, so it never tilts it).
    pub fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }

    /// Move along the look direction.  Non-finite amounts are dropped so a
    /// bad integration step can never poison the position.
    pub fn translate_forward(&mut self, amount: f32) {
        if amount.is_finite() {
            self.position += self.forward() * amount;
        }
    }

    /// Move along the local right axis.
    pub fn translate_right(&mut self, amount: f32) {
        if amount.is_finite() {
            self.position += self.right() * amount;
        }
    }

    /// Enforce the ground floor: `position.y` never drops below `min`.
    pub fn clamp_height(&mut self, min: f32) {
        self.position.y = self.position.y.max(min);
    }

    /// True when every component of the pose is a finite number.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.yaw.is_finite() && self.pitch.is_finite()
    }

    /// View matrix for hosts that render from this pose.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), Vec3::Y)
    }
}
