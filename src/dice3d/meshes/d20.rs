use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy_mesh::{Indices, PrimitiveTopology};
use bevy_rapier3d::prelude::*;

/// Icosahedron vertices, before scaling
pub fn d20_vertices() -> [Vec3; 12] {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    [
        Vec3::new(0.0, 1.0, phi),
        Vec3::new(0.0, -1.0, phi),
        Vec3::new(0.0, 1.0, -phi),
        Vec3::new(0.0, -1.0, -phi),
        Vec3::new(1.0, phi, 0.0),
        Vec3::new(-1.0, phi, 0.0),
        Vec3::new(1.0, -phi, 0.0),
        Vec3::new(-1.0, -phi, 0.0),
        Vec3::new(phi, 0.0, 1.0),
        Vec3::new(-phi, 0.0, 1.0),
        Vec3::new(phi, 0.0, -1.0),
        Vec3::new(-phi, 0.0, -1.0),
    ]
}

/// Faces as vertex indices; face `i` shows the value `i + 1`.
pub const D20_FACES: [[usize; 3]; 20] = [
    [0, 1, 8],
    [0, 8, 4],
    [0, 4, 5],
    [0, 5, 9],
    [0, 9, 1],
    [1, 6, 8],
    [8, 6, 10],
    [8, 10, 4],
    [4, 10, 2],
    [4, 2, 5],
    [5, 2, 11],
    [5, 11, 9],
    [9, 11, 7],
    [9, 7, 1],
    [1, 7, 6],
    [3, 6, 7],
    [3, 10, 6],
    [3, 2, 10],
    [3, 11, 2],
    [3, 7, 11],
];

pub fn create_d20() -> (Mesh, Collider, Vec<(Vec3, u32)>) {
    let size = 0.5;
    let s = size * 0.35;
    let vertices: Vec<Vec3> = d20_vertices().iter().map(|v| *v * s).collect();

    let face_normals: Vec<(Vec3, u32)> = D20_FACES
        .iter()
        .enumerate()
        .map(|(i, face)| {
            let center = (vertices[face[0]] + vertices[face[1]] + vertices[face[2]]) / 3.0;
            (center.normalize(), (i + 1) as u32)
        })
        .collect();

    let collider = Collider::convex_hull(&vertices).unwrap_or(Collider::ball(size * 0.6));
    let mesh = create_d20_mesh(&vertices, &D20_FACES);

    (mesh, collider, face_normals)
}

fn create_d20_mesh(vertices: &[Vec3], faces: &[[usize; 3]; 20]) -> Mesh {
    let mut positions = Vec::new();
    let mut normals = Vec::new();

    for face in faces {
        let v0 = vertices[face[0]];
        let v1 = vertices[face[1]];
        let v2 = vertices[face[2]];

        // Flat shading: orient each triangle outward by its centroid
        let center = (v0 + v1 + v2) / 3.0;
        let mut normal = (v1 - v0).cross(v2 - v0).normalize();
        let (v1, v2) = if normal.dot(center) < 0.0 {
            normal = -normal;
            (v2, v1)
        } else {
            (v1, v2)
        };

        positions.extend([v0.to_array(), v1.to_array(), v2.to_array()]);
        normals.extend([normal.to_array(); 3]);
    }

    let num_vertices = positions.len() as u32;
    let indices: Vec<u32> = (0..num_vertices).collect();
    let uvs: Vec<[f32; 2]> = positions.iter().map(|_| [0.5, 0.5]).collect();

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U32(indices))
}
