//! Rapier-backed physics body views
//!
//! The roll tracker only observes bodies through [`PhysicsBody`]. Forces are
//! applied by the player driver at throw time through [`ThrowableBody`].

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use dicetoss_core::{EulerAngles, PhysicsBody};

/// Convert a rotation into pitch/yaw/roll degrees.
///
/// Within `polar_tolerance` degrees of gimbal lock the yaw is folded into the
/// roll, so a body lying on a polar face always reads yaw 0.
pub fn euler_from_rotation(rotation: Quat, polar_tolerance: f32) -> EulerAngles {
    let (roll, pitch, yaw) = rotation.to_euler(EulerRot::YXZ);
    EulerAngles::from_yxz_radians(roll, pitch, yaw).fold_polar_yaw(polar_tolerance)
}

/// Inverse of [`euler_from_rotation`] away from the poles.
pub fn rotation_from_euler(angles: &EulerAngles) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        angles.roll.to_radians(),
        angles.pitch.to_radians(),
        angles.yaw.to_radians(),
    )
}

/// Borrowed view of an entity's simulated state.
pub struct RapierBodyView<'a> {
    pub transform: &'a Transform,
    pub velocity: &'a Velocity,
    /// Degrees from a pole inside which yaw is folded into roll.
    pub polar_tolerance: f32,
}

impl<'a> RapierBodyView<'a> {
    /// `None` when either component is gone, e.g. mid-despawn.
    pub fn from_parts(
        transform: Option<&'a Transform>,
        velocity: Option<&'a Velocity>,
        polar_tolerance: f32,
    ) -> Option<Self> {
        Some(Self {
            transform: transform?,
            velocity: velocity?,
            polar_tolerance,
        })
    }
}

impl PhysicsBody for RapierBodyView<'_> {
    fn orientation_euler(&self) -> EulerAngles {
        euler_from_rotation(self.transform.rotation, self.polar_tolerance)
    }

    fn angular_speed(&self) -> f32 {
        self.velocity.angvel.length()
    }
}

/// Writes issued by the driver when an object is thrown.
pub trait ThrowableBody {
    fn apply_force(&mut self, force: Vec3);
    fn apply_torque(&mut self, torque: Vec3);
}

impl ThrowableBody for ExternalImpulse {
    fn apply_force(&mut self, force: Vec3) {
        self.impulse += force;
    }

    fn apply_torque(&mut self, torque: Vec3) {
        self.torque_impulse += torque;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicetoss_core::{resolve, ResolverSettings, RollableVariant};

    const POLAR: f32 = 5.0;

    fn assert_angle_eq(a: f32, b: f32) {
        let diff = dicetoss_core::band_diff(a, b);
        assert!(diff < 1e-2, "{a} != {b}");
    }

    #[test]
    fn test_identity_is_zero() {
        let angles = euler_from_rotation(Quat::IDENTITY, POLAR);
        assert_angle_eq(angles.pitch, 0.0);
        assert_angle_eq(angles.yaw, 0.0);
        assert_angle_eq(angles.roll, 0.0);
    }

    #[test]
    fn test_euler_round_trip_off_pole() {
        let angles = EulerAngles::new(35.26, 225.0, 40.0);
        let back = euler_from_rotation(rotation_from_euler(&angles), POLAR);
        assert_angle_eq(back.pitch, angles.pitch);
        assert_angle_eq(back.yaw, angles.yaw);
        assert_angle_eq(back.roll, angles.roll);
    }

    #[test]
    fn test_polar_reading_folds_yaw_into_roll() {
        let settings = ResolverSettings::default();
        for yaw in [0.0_f32, 37.0, 137.0, 250.0] {
            for pitch in [270.0_f32, 272.0, 90.0, 87.0] {
                let rotation = rotation_from_euler(&EulerAngles::new(pitch, yaw, 20.0));
                let transform = Transform::from_rotation(rotation);
                let velocity = Velocity::zero();
                let view =
                    RapierBodyView::from_parts(Some(&transform), Some(&velocity), POLAR).unwrap();
                let angles = view.orientation_euler();
                assert_eq!(angles.yaw, 0.0);
                assert!(dicetoss_core::band_diff(angles.pitch, pitch) < 0.1);

                let expected = if pitch > 180.0 { 1 } else { 6 };
                assert_eq!(
                    resolve(RollableVariant::Die6, &angles, &settings),
                    expected,
                    "pitch {pitch} yaw {yaw} read as {angles:?}"
                );
            }
        }
    }

    #[test]
    fn test_roll_spins_about_vertical() {
        let upright = rotation_from_euler(&EulerAngles::new(20.0, 70.0, 0.0));
        let spun = rotation_from_euler(&EulerAngles::new(20.0, 70.0, 123.0));
        let local_up = upright.inverse() * Vec3::Y;
        let spun_up = spun.inverse() * Vec3::Y;
        assert!(local_up.distance(spun_up) < 1e-5);
    }

    #[test]
    fn test_body_view_requires_both_parts() {
        let transform = Transform::default();
        let velocity = Velocity::default();
        assert!(RapierBodyView::from_parts(Some(&transform), None, POLAR).is_none());
        assert!(RapierBodyView::from_parts(None, Some(&velocity), POLAR).is_none());
        assert!(RapierBodyView::from_parts(Some(&transform), Some(&velocity), POLAR).is_some());
    }

    #[test]
    fn test_body_view_angular_speed() {
        let transform = Transform::default();
        let velocity = Velocity {
            linvel: Vec3::ZERO,
            angvel: Vec3::new(3.0, 0.0, 4.0),
        };
        let view = RapierBodyView::from_parts(Some(&transform), Some(&velocity), POLAR).unwrap();
        assert_eq!(view.angular_speed(), 5.0);
    }

    #[test]
    fn test_throw_accumulates_impulse() {
        let mut impulse = ExternalImpulse::default();
        impulse.apply_force(Vec3::X);
        impulse.apply_force(Vec3::X);
        impulse.apply_torque(Vec3::Y);
        assert_eq!(impulse.impulse, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(impulse.torque_impulse, Vec3::Y);
    }
}
