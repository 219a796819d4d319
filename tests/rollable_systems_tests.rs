//! Tests for the per-tick roll tracking systems, run in a headless App

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use dicetoss::dice3d::{
    create_rollable_mesh_and_collider, held_body, release_held_object, rotation_from_euler,
    AppSettings, HeldObject, RollResults, RollTrackingPlugin, Rollable,
};
use dicetoss_core::{EulerAngles, MotionState, RollableVariant, SettlePolicy};

fn test_app(settings: AppSettings) -> App {
    let mut app = App::new();
    app.add_plugins(RollTrackingPlugin { settings });
    app
}

fn spawn_spinning(app: &mut App, variant: RollableVariant, pitch: f32, yaw: f32) -> Entity {
    app.world_mut()
        .spawn((
            Rollable::new(variant),
            Transform::from_xyz(0.0, 0.5, 0.0)
                .with_rotation(rotation_from_euler(&EulerAngles::pitch_yaw(pitch, yaw))),
            Velocity {
                linvel: Vec3::ZERO,
                angvel: Vec3::new(2.0, 0.0, 0.0),
            },
        ))
        .id()
}

fn stop(app: &mut App, entity: Entity) {
    let mut velocity = app
        .world_mut()
        .get_mut::<Velocity>(entity)
        .expect("entity has a velocity");
    velocity.angvel = Vec3::ZERO;
}

fn motion_state(app: &App, entity: Entity) -> MotionState {
    app.world()
        .get::<Rollable>(entity)
        .expect("entity is a rollable")
        .object
        .motion_state()
}

#[test]
fn test_thrown_die_is_reported_once() {
    let mut app = test_app(AppSettings::default());
    let die = spawn_spinning(&mut app, RollableVariant::Die6, 270.0, 0.0);

    app.update();
    assert_eq!(motion_state(&app, die), MotionState::Moving);

    stop(&mut app, die);
    for _ in 0..21 {
        app.update();
    }
    assert_eq!(motion_state(&app, die), MotionState::Moving);
    assert!(app.world().resource::<RollResults>().entries.is_empty());

    for _ in 0..10 {
        app.update();
    }
    assert_eq!(motion_state(&app, die), MotionState::Settled);

    let results = app.world().resource::<RollResults>();
    assert_eq!(results.entries.len(), 1);
    assert_eq!(results.entries[0].variant, RollableVariant::Die6);
    assert_eq!(results.entries[0].value, Some(1));
    assert_eq!(results.total(), 1);
}

#[test]
fn test_angle_band_policy_reports_on_first_quiet_tick() {
    let mut settings = AppSettings::default();
    settings.roll.motion.settle_policy = SettlePolicy::AngleBand;
    let mut app = test_app(settings);
    let die = spawn_spinning(&mut app, RollableVariant::Die20, 35.26, 225.0);

    app.update();
    stop(&mut app, die);
    app.update();

    let results = app.world().resource::<RollResults>();
    assert_eq!(results.entries.len(), 1);
    assert_eq!(results.entries[0].value, Some(20));
}

#[test]
fn test_unknown_bottle_is_recorded_once() {
    let mut app = test_app(AppSettings::default());
    let bottle = spawn_spinning(&mut app, RollableVariant::Bottle, 0.0, 90.0);

    app.update();
    stop(&mut app, bottle);
    for _ in 0..40 {
        app.update();
    }

    let results = app.world().resource::<RollResults>();
    assert_eq!(results.entries.len(), 1);
    assert_eq!(results.entries[0].value, None);
    assert_eq!(results.total(), 0);
    assert!(!app
        .world()
        .get::<Rollable>(bottle)
        .expect("bottle still exists")
        .object
        .has_reported_value());
}

#[test]
fn test_held_object_is_not_tracked() {
    let mut app = test_app(AppSettings::default());
    let held = spawn_spinning(&mut app, RollableVariant::Die6, 0.0, 0.0);
    app.world_mut().entity_mut(held).insert(HeldObject);

    for _ in 0..5 {
        app.update();
    }
    assert_eq!(motion_state(&app, held), MotionState::AtRest);
}

#[test]
fn test_unknown_bottle_knocked_upright_is_not_recorded_again() {
    let mut app = test_app(AppSettings::default());
    let bottle = spawn_spinning(&mut app, RollableVariant::Bottle, 0.0, 90.0);

    app.update();
    stop(&mut app, bottle);
    for _ in 0..40 {
        app.update();
    }
    assert_eq!(app.world().resource::<RollResults>().entries.len(), 1);

    app.world_mut()
        .get_mut::<Transform>(bottle)
        .expect("bottle has a transform")
        .rotation = Quat::IDENTITY;
    for _ in 0..5 {
        app.update();
    }

    let results = app.world().resource::<RollResults>();
    assert_eq!(results.entries.len(), 1);
    assert_eq!(results.entries[0].value, None);
}

#[test]
fn test_held_object_has_no_collisions_until_released() {
    let mut app = test_app(AppSettings::default());
    let (_, collider, _) = create_rollable_mesh_and_collider(RollableVariant::Die6);
    let held = app
        .world_mut()
        .spawn((
            Transform::from_xyz(0.0, 2.5, 3.5),
            held_body(RollableVariant::Die6, collider),
            Rollable::new(RollableVariant::Die6),
            HeldObject,
        ))
        .id();

    let groups = app
        .world()
        .get::<CollisionGroups>(held)
        .expect("held object has collision groups");
    assert_eq!(groups.memberships, Group::NONE);
    assert_eq!(groups.filters, Group::NONE);
    assert!(matches!(
        app.world().get::<RigidBody>(held),
        Some(RigidBody::KinematicPositionBased)
    ));
    assert_eq!(
        app.world().get::<GravityScale>(held).map(|g| g.0),
        Some(0.0)
    );

    app.world_mut()
        .run_system_once(move |mut commands: Commands| {
            release_held_object(&mut commands.entity(held), ExternalImpulse::default());
        })
        .expect("release runs");

    let world = app.world();
    assert!(world.get::<HeldObject>(held).is_none());
    assert!(world.get::<CollisionGroups>(held).is_none());
    assert!(matches!(world.get::<RigidBody>(held), Some(RigidBody::Dynamic)));
    assert_eq!(world.get::<GravityScale>(held).map(|g| g.0), Some(1.0));
}

#[test]
fn test_missing_velocity_is_skipped() {
    let mut app = test_app(AppSettings::default());
    let die = spawn_spinning(&mut app, RollableVariant::Die6, 0.0, 0.0);
    app.world_mut().entity_mut(die).remove::<Velocity>();

    for _ in 0..5 {
        app.update();
    }
    assert_eq!(motion_state(&app, die), MotionState::AtRest);
}

#[test]
fn test_object_below_kill_plane_is_despawned() {
    let mut app = test_app(AppSettings::default());
    let die = spawn_spinning(&mut app, RollableVariant::Die6, 0.0, 0.0);
    app.world_mut()
        .get_mut::<Transform>(die)
        .expect("entity has a transform")
        .translation
        .y = -20.0;

    app.update();
    assert!(app.world().get_entity(die).is_err());
}
