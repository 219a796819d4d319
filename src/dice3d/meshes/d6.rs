use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

/// Cube with opposite faces summing to seven; 4 is up at identity.
pub fn create_d6() -> (Mesh, Collider, Vec<(Vec3, u32)>) {
    let size = 0.6;

    let face_normals = vec![
        (Vec3::Z, 1),
        (Vec3::X, 2),
        (Vec3::NEG_Y, 3),
        (Vec3::Y, 4),
        (Vec3::NEG_X, 5),
        (Vec3::NEG_Z, 6),
    ];

    let mesh = Mesh::from(Cuboid::new(size, size, size));
    let collider = Collider::cuboid(size / 2.0, size / 2.0, size / 2.0);

    (mesh, collider, face_normals)
}
