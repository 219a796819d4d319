pub mod bottle;
pub mod d20;
pub mod d6;

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use dicetoss_core::RollableVariant;

pub use bottle::create_bottle;
pub use d20::create_d20;
pub use d6::create_d6;

/// Mesh, collider and the outward normal of every face with its value.
pub fn create_rollable_mesh_and_collider(
    variant: RollableVariant,
) -> (Mesh, Collider, Vec<(Vec3, u32)>) {
    match variant {
        RollableVariant::Die6 => create_d6(),
        RollableVariant::Die20 => create_d20(),
        RollableVariant::Bottle => create_bottle(),
    }
}
