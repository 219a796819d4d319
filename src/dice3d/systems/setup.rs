//! Scene setup system
//!
//! This module contains the setup function that initializes the 3D scene
//! (camera, light, play box, scoreboard, first held object) and the shared
//! spawner for rollable objects.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use dicetoss_core::RollableVariant;

use crate::dice3d::meshes::create_rollable_mesh_and_collider;
use crate::dice3d::throw_control::{
    ThrowControlState, BOX_CENTER, BOX_FLOOR_Y, BOX_HALF_EXTENT, BOX_WALL_HEIGHT,
};
use crate::dice3d::types::*;

/// Main setup system - initializes the entire 3D scene
pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    throw_settings: Res<ThrowSettings>,
    throw_state: Res<ThrowControlState>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(CAMERA_POSITION).looking_at(BOX_CENTER, Vec3::Y),
        MainCamera,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 5.0).looking_at(BOX_CENTER, Vec3::Y),
    ));

    let floor_mat = materials.add(StandardMaterial {
        base_color: Color::srgb(0.15, 0.4, 0.15),
        perceptual_roughness: 0.9,
        ..default()
    });
    let extent = BOX_HALF_EXTENT * 2.0;
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(extent, 0.5, extent))),
        MeshMaterial3d(floor_mat),
        Transform::from_xyz(0.0, BOX_FLOOR_Y - 0.25, 0.0),
        Collider::cuboid(BOX_HALF_EXTENT, 0.25, BOX_HALF_EXTENT),
        RigidBody::Fixed,
        Friction::coefficient(0.6),
        PlayArea,
    ));

    let wall_mat = materials.add(StandardMaterial {
        base_color: Color::srgb(0.3, 0.2, 0.1),
        ..default()
    });
    let wall_y = BOX_FLOOR_Y + BOX_WALL_HEIGHT / 2.0;
    let thickness = 0.5;
    for (pos, size) in [
        (
            Vec3::new(0.0, wall_y, -BOX_HALF_EXTENT),
            Vec3::new(extent, BOX_WALL_HEIGHT, thickness),
        ),
        (
            Vec3::new(0.0, wall_y, BOX_HALF_EXTENT),
            Vec3::new(extent, BOX_WALL_HEIGHT, thickness),
        ),
        (
            Vec3::new(-BOX_HALF_EXTENT, wall_y, 0.0),
            Vec3::new(thickness, BOX_WALL_HEIGHT, extent),
        ),
        (
            Vec3::new(BOX_HALF_EXTENT, wall_y, 0.0),
            Vec3::new(thickness, BOX_WALL_HEIGHT, extent),
        ),
    ] {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(wall_mat.clone()),
            Transform::from_translation(pos),
            Collider::cuboid(size.x / 2.0, size.y / 2.0, size.z / 2.0),
            RigidBody::Fixed,
            Restitution::coefficient(0.2),
            PlayArea,
        ));
    }

    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 22.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        ResultsText,
    ));

    spawn_held_object(
        &mut commands,
        &mut meshes,
        &mut materials,
        throw_state.selection,
        throw_settings.spawn_position(),
    );
}

/// Physics of an object waiting to be thrown: kinematic, without gravity,
/// and in no collision group, so it neither pushes nor is pushed.
pub fn held_body(variant: RollableVariant, collider: Collider) -> impl Bundle {
    (
        RigidBody::KinematicPositionBased,
        collider,
        CollisionGroups::new(Group::NONE, Group::NONE),
        Velocity::zero(),
        GravityScale(0.0),
        Restitution::coefficient(0.15),
        Friction::coefficient(0.7),
        ColliderMassProperties::Density(variant_density(variant)),
    )
}

/// Spawn a rollable at `position` with identity orientation, waiting to be
/// thrown.
pub fn spawn_held_object(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    variant: RollableVariant,
    position: Vec3,
) -> Entity {
    let material = materials.add(StandardMaterial {
        base_color: variant_color(variant),
        alpha_mode: AlphaMode::Blend,
        reflectance: 0.7,
        perceptual_roughness: 0.15,
        metallic: 0.1,
        ..default()
    });

    let (mesh, collider, _) = create_rollable_mesh_and_collider(variant);

    commands
        .spawn((
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(material),
            Transform::from_translation(position),
            held_body(variant, collider),
            Rollable::new(variant),
            HeldObject,
        ))
        .id()
}
