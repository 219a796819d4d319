pub mod body;
pub mod meshes;
pub mod systems;
pub mod throw_control;
pub mod types;

pub use body::*;
pub use meshes::*;
pub use systems::*;
pub use throw_control::*;
pub use types::*;

use bevy::prelude::*;

/// Registers the roll tracking resources and the two per-tick passes:
/// every motion update runs before any settled object is read.
pub struct RollTrackingPlugin {
    pub settings: AppSettings,
}

impl Plugin for RollTrackingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(RollConfig(self.settings.roll.clone()))
            .insert_resource(self.settings.throw.clone())
            .insert_resource(ThrowControlState::from_settings(&self.settings.throw))
            .init_resource::<RollResults>()
            .add_systems(
                Update,
                (
                    update_rollable_motion,
                    report_settled_rollables,
                    despawn_out_of_bounds,
                )
                    .chain(),
            );
    }
}
