//! Rollable state and result systems
//!
//! Every tick, motion is advanced for all thrown objects first; settled
//! objects that have not reported yet are then read and recorded.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use dicetoss_core::RollOutcome;

use crate::dice3d::body::RapierBodyView;
use crate::dice3d::types::*;

/// System advancing the motion lifecycle of every thrown object
pub fn update_rollable_motion(
    config: Res<RollConfig>,
    mut query: Query<(&mut Rollable, Option<&Transform>, Option<&Velocity>), Without<HeldObject>>,
) {
    for (mut rollable, transform, velocity) in query.iter_mut() {
        let body = RapierBodyView::from_parts(
            transform,
            velocity,
            config.resolver.polar_tolerance_degrees,
        );
        rollable.object.update_motion(body.as_ref(), &config.0);
    }
}

/// System reading settled objects and recording their values
pub fn report_settled_rollables(
    config: Res<RollConfig>,
    mut results: ResMut<RollResults>,
    mut query: Query<
        (&mut Rollable, Option<&Transform>, Option<&Velocity>),
        Without<HeldObject>,
    >,
) {
    for (mut rollable, transform, velocity) in query.iter_mut() {
        if !rollable.object.is_settled() || rollable.object.has_reported_value() {
            continue;
        }

        let variant = rollable.variant();
        let body = RapierBodyView::from_parts(
            transform,
            velocity,
            config.resolver.polar_tolerance_degrees,
        );
        match rollable.object.read_value(body.as_ref(), &config.0) {
            RollOutcome::Reported(value) if rollable.unknown_recorded => {
                // Knocked onto a face after it was counted as unknown.
                debug!("{} later read {}, already recorded", variant.name(), value);
            }
            RollOutcome::Reported(value) => {
                info!("{} result: {}", variant.name(), value);
                results.record(variant, Some(value));
            }
            RollOutcome::Unknown if !rollable.unknown_recorded => {
                rollable.unknown_recorded = true;
                info!("{} result: unknown", variant.name());
                results.record(variant, None);
            }
            _ => {}
        }
    }
}

/// System removing objects that have left the play area
pub fn despawn_out_of_bounds(
    mut commands: Commands,
    throw_settings: Res<ThrowSettings>,
    query: Query<(Entity, &Transform, &Rollable), Without<HeldObject>>,
) {
    for (entity, transform, rollable) in query.iter() {
        if transform.translation.y < throw_settings.kill_plane_y {
            debug!("{} left the play area", rollable.variant().name());
            commands.entity(entity).despawn();
        }
    }
}
