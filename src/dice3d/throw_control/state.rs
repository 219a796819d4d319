//! Throw Control State
//!
//! Contains the resource tracking the held object and the charged throw.

use bevy::prelude::*;
use dicetoss_core::RollableVariant;

use crate::dice3d::types::ThrowSettings;

/// The box is centered at origin; throws aim at its floor.
pub const BOX_HALF_EXTENT: f32 = 4.0;
pub const BOX_FLOOR_Y: f32 = 0.0;
pub const BOX_WALL_HEIGHT: f32 = 2.0;
pub const BOX_CENTER: Vec3 = Vec3::new(0.0, 0.0, 0.0);

/// Resource tracking the player's throw
#[derive(Resource, Debug)]
pub struct ThrowControlState {
    /// Variant spawned as the next held object
    pub selection: RollableVariant,

    /// Current charge
    pub release_intensity: f32,

    /// Charge restored after every throw
    pub default_release_intensity: f32,

    /// Running after a throw until the next held object appears
    pub respawn_timer: Option<Timer>,
}

impl Default for ThrowControlState {
    fn default() -> Self {
        Self::from_settings(&ThrowSettings::default())
    }
}

impl ThrowControlState {
    pub fn from_settings(settings: &ThrowSettings) -> Self {
        Self {
            selection: RollableVariant::Die6,
            release_intensity: settings.default_release_intensity,
            default_release_intensity: settings.default_release_intensity,
            respawn_timer: None,
        }
    }

    /// Add one frame of charge, capped at the maximum.
    pub fn charge(&mut self, settings: &ThrowSettings) {
        if self.release_intensity < settings.max_release_intensity {
            self.release_intensity =
                (self.release_intensity + settings.intensity_step).min(settings.max_release_intensity);
        }
    }

    /// Consume the charge, returning the intensity to throw with.
    pub fn release(&mut self) -> f32 {
        std::mem::replace(&mut self.release_intensity, self.default_release_intensity)
    }

    /// Impulse and torque for a throw from `from` toward `target`.
    pub fn throw_impulses(
        intensity: f32,
        from: Vec3,
        target: Vec3,
        settings: &ThrowSettings,
    ) -> (Vec3, Vec3) {
        let direction = target - from;
        let impulse = direction * intensity * settings.impulse_scale;
        // Spin about an axis across the direction of travel so the die tumbles
        let spin_axis = direction.cross(Vec3::Y).normalize_or_zero();
        let torque = (spin_axis + direction.normalize_or_zero() * 0.3)
            * intensity
            * settings.torque_scale;
        (impulse, torque)
    }

    /// Clamp a world point to the box floor.
    pub fn clamp_to_box_floor(point: Vec3) -> Vec3 {
        Vec3::new(
            point.x.clamp(-BOX_HALF_EXTENT, BOX_HALF_EXTENT),
            BOX_FLOOR_Y,
            point.z.clamp(-BOX_HALF_EXTENT, BOX_HALF_EXTENT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_is_capped() {
        let settings = ThrowSettings::default();
        let mut state = ThrowControlState::from_settings(&settings);
        assert_eq!(state.release_intensity, 30.0);
        state.charge(&settings);
        assert_eq!(state.release_intensity, 35.0);
        for _ in 0..1000 {
            state.charge(&settings);
        }
        assert_eq!(state.release_intensity, settings.max_release_intensity);
    }

    #[test]
    fn test_release_resets_charge() {
        let settings = ThrowSettings::default();
        let mut state = ThrowControlState::from_settings(&settings);
        state.charge(&settings);
        state.charge(&settings);
        assert_eq!(state.release(), 40.0);
        assert_eq!(state.release_intensity, 30.0);
    }

    #[test]
    fn test_throw_impulses_point_at_target() {
        let settings = ThrowSettings::default();
        let from = Vec3::new(0.0, 2.5, 3.5);
        let (impulse, torque) =
            ThrowControlState::throw_impulses(100.0, from, BOX_CENTER, &settings);
        assert!(impulse.z < 0.0);
        assert!(impulse.y < 0.0);
        assert!((impulse - (BOX_CENTER - from) * 100.0 * settings.impulse_scale).length() < 1e-5);
        assert!(torque.length() > 0.0);
    }

    #[test]
    fn test_clamp_to_box_floor() {
        let inside = Vec3::new(0.5, 1.0, 0.5);
        let clamped = ThrowControlState::clamp_to_box_floor(inside);
        assert_eq!(clamped, Vec3::new(0.5, BOX_FLOOR_Y, 0.5));

        let outside = Vec3::new(9.0, 0.0, -9.0);
        let clamped = ThrowControlState::clamp_to_box_floor(outside);
        assert_eq!(clamped.x, BOX_HALF_EXTENT);
        assert_eq!(clamped.z, -BOX_HALF_EXTENT);
    }
}
