//! Euler angle orientation samples.
//!
//! Orientations are read from the physics engine as three angles in degrees,
//! composed as `R = Ry(roll) * Rx(pitch) * Rz(yaw)`. Only pitch and yaw decide
//! which face points up; roll spins the body about the vertical axis.

use serde::{Deserialize, Serialize};

/// Wrap an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// An orientation sample in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    /// Rotation about the X axis.
    pub pitch: f32,
    /// Rotation about the Z axis.
    pub yaw: f32,
    /// Rotation about the vertical Y axis.
    #[serde(default)]
    pub roll: f32,
}

impl EulerAngles {
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self {
            pitch: wrap_degrees(pitch),
            yaw: wrap_degrees(yaw),
            roll: wrap_degrees(roll),
        }
    }

    /// Orientation with only pitch and yaw set.
    pub fn pitch_yaw(pitch: f32, yaw: f32) -> Self {
        Self::new(pitch, yaw, 0.0)
    }

    /// Build from radians as returned by `Quat::to_euler(EulerRot::YXZ)`,
    /// which yields `(roll, pitch, yaw)`.
    pub fn from_yxz_radians(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self::new(pitch.to_degrees(), yaw.to_degrees(), roll.to_degrees())
    }

    /// Distance of the pitch from the nearer pole (90 or 270), in degrees.
    pub fn polar_offset(&self) -> f32 {
        let pitch = wrap_degrees(self.pitch);
        (pitch - 90.0).abs().min((pitch - 270.0).abs())
    }

    /// Canonical form at gimbal lock.
    ///
    /// When the pitch is within `tolerance` of a pole, yaw and roll rotate
    /// about the same world axis and the split between them is arbitrary.
    /// Fold the yaw into the roll so polar orientations always report yaw 0.
    pub fn fold_polar_yaw(self, tolerance: f32) -> Self {
        if self.polar_offset() > tolerance {
            return self;
        }

        let pitch = wrap_degrees(self.pitch);
        // Rx(90) * Rz(y) == Ry(-y) * Rx(90), Rx(270) * Rz(y) == Ry(y) * Rx(270)
        let roll = if (pitch - 90.0).abs() <= tolerance {
            self.roll - self.yaw
        } else {
            self.roll + self.yaw
        };

        Self::new(pitch, 0.0, roll)
    }
}
