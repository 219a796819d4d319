//! UI-related types and components

use bevy::prelude::*;

/// Marker for the scoreboard text
#[derive(Component)]
pub struct ResultsText;
