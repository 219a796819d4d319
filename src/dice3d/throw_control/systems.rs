//! Throw Control Systems
//!
//! Keyboard driver: select the held variant, charge and release throws,
//! respawn the held object, and clear the play area.

use super::state::*;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use dicetoss_core::RollableVariant;
use rand::Rng;

use crate::dice3d::body::ThrowableBody;
use crate::dice3d::systems::spawn_held_object;
use crate::dice3d::types::*;

/// Keys 1/2/3 swap the held object for a D6, D20 or bottle
pub fn handle_selection_input(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    throw_settings: Res<ThrowSettings>,
    mut throw_state: ResMut<ThrowControlState>,
    held_query: Query<Entity, With<HeldObject>>,
) {
    let selection = if keyboard.just_released(KeyCode::Digit1) {
        RollableVariant::Die6
    } else if keyboard.just_released(KeyCode::Digit2) {
        RollableVariant::Die20
    } else if keyboard.just_released(KeyCode::Digit3) {
        RollableVariant::Bottle
    } else {
        return;
    };

    throw_state.selection = selection;

    // Nothing is held while waiting for a respawn; the timer picks up the
    // new selection.
    let mut replaced = false;
    for entity in held_query.iter() {
        commands.entity(entity).despawn();
        replaced = true;
    }
    if replaced {
        spawn_held_object(
            &mut commands,
            &mut meshes,
            &mut materials,
            selection,
            throw_settings.spawn_position(),
        );
    }
}

/// Holding SPACE charges the throw and tumbles the held object
pub fn charge_throw(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    throw_settings: Res<ThrowSettings>,
    mut throw_state: ResMut<ThrowControlState>,
    mut held_query: Query<&mut Transform, With<HeldObject>>,
) {
    if !keyboard.pressed(KeyCode::Space) || keyboard.just_released(KeyCode::Space) {
        return;
    }

    let mut held = held_query.iter_mut().peekable();
    if held.peek().is_none() {
        return;
    }

    throw_state.charge(&throw_settings);

    let delta = (throw_state.release_intensity * time.delta_secs()).to_radians();
    for mut transform in held {
        transform.rotate_local_z(delta);
        transform.rotate_local_x(delta);
    }
}

/// Releasing SPACE throws the held object toward the box
pub fn release_throw(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    throw_settings: Res<ThrowSettings>,
    mut throw_state: ResMut<ThrowControlState>,
    held_query: Query<(Entity, &Transform), With<HeldObject>>,
) {
    if !keyboard.just_released(KeyCode::Space) {
        return;
    }

    let mut rng = rand::thread_rng();
    for (entity, transform) in held_query.iter() {
        let intensity = throw_state.release();
        let jitter = Vec3::new(rng.gen_range(-1.0..1.0), 0.0, rng.gen_range(-1.0..1.0));
        let target = ThrowControlState::clamp_to_box_floor(BOX_CENTER + jitter);
        let (force, torque) = ThrowControlState::throw_impulses(
            intensity,
            transform.translation,
            target,
            &throw_settings,
        );

        let mut impulse = ExternalImpulse::default();
        impulse.apply_force(force);
        impulse.apply_torque(torque);

        release_held_object(&mut commands.entity(entity), impulse);

        info!("Threw with intensity {:.0}", intensity);
        throw_state.respawn_timer = Some(Timer::from_seconds(
            throw_settings.respawn_delay_secs,
            TimerMode::Once,
        ));
    }
}

/// Hand a held object to the simulation: dynamic, under gravity, colliding
/// with everything, and carrying the throw impulse
pub fn release_held_object(entity: &mut EntityCommands, impulse: ExternalImpulse) {
    entity
        .remove::<(HeldObject, CollisionGroups)>()
        .insert((RigidBody::Dynamic, GravityScale(1.0), Ccd::enabled(), impulse));
}

/// Spawn the next held object once the respawn delay has passed
pub fn tick_respawn(
    mut commands: Commands,
    time: Res<Time>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    throw_settings: Res<ThrowSettings>,
    mut throw_state: ResMut<ThrowControlState>,
) {
    let Some(timer) = throw_state.respawn_timer.as_mut() else {
        return;
    };

    if !timer.tick(time.delta()).just_finished() {
        return;
    }

    throw_state.respawn_timer = None;
    spawn_held_object(
        &mut commands,
        &mut meshes,
        &mut materials,
        throw_state.selection,
        throw_settings.spawn_position(),
    );
}

/// C removes every thrown object and clears the results
pub fn clear_play_area(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut results: ResMut<RollResults>,
    query: Query<Entity, (With<Rollable>, Without<HeldObject>)>,
) {
    if !keyboard.just_released(KeyCode::KeyC) {
        return;
    }

    let mut removed = 0;
    for entity in query.iter() {
        commands.entity(entity).despawn();
        removed += 1;
    }
    results.clear();
    info!("Cleared {} objects from the play area", removed);
}
