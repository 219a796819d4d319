//! Throw Control Module
//!
//! This module is the player driver: it holds the next object at the spawn
//! point, charges and releases throws from the keyboard, respawns a new held
//! object, and clears the play area.

mod state;
mod systems;

pub use state::*;
pub use systems::*;
