use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use dicetoss::dice3d::{
    charge_throw, clear_play_area, handle_selection_input, release_throw, setup, tick_respawn,
    update_results_display, AppSettings, RollTrackingPlugin, SETTINGS_FILE,
};

fn main() {
    let settings = AppSettings::load(SETTINGS_FILE);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Dice Toss".to_string(),
                resolution: (1280, 720).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins(RollTrackingPlugin { settings })
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                handle_selection_input,
                charge_throw,
                release_throw,
                tick_respawn,
                clear_play_area,
                update_results_display,
            ),
        )
        .run();
}
