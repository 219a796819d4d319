//! Systems module for dice3d
//!
//! This module contains all the Bevy systems for the dice thrower,
//! organized into submodules by functionality:
//!
//! - `setup`: Scene initialization (camera, light, play box, scoreboard)
//! - `rollables`: Motion updates, result reporting, out-of-bounds cleanup
//! - `results`: Scoreboard text

mod results;
mod rollables;
mod setup;

// Re-export all public systems
pub use results::{format_results, update_results_display};
pub use rollables::{despawn_out_of_bounds, report_settled_rollables, update_rollable_motion};
pub use setup::{held_body, setup, spawn_held_object};
