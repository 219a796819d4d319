use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

/// Bottle standing on its base; its cap points along +Y.
pub fn create_bottle() -> (Mesh, Collider, Vec<(Vec3, u32)>) {
    let radius = 0.25;
    let height = 1.1;

    let face_normals = vec![(Vec3::Y, 10), (Vec3::NEG_Y, 20)];

    let mesh = Mesh::from(Cylinder::new(radius, height));
    let collider = Collider::cylinder(height / 2.0, radius);

    (mesh, collider, face_normals)
}
