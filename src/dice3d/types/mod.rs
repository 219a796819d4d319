//! Type definitions for the Dice Toss simulator
//!
//! This module is organized into submodules:
//! - `dice` - Rollable component, play area markers and results
//! - `camera` - Camera-related components
//! - `settings` - Thresholds, throw tuning and persistence
//! - `ui` - Scoreboard text marker

pub mod camera;
pub mod dice;
pub mod settings;
pub mod ui;

// Re-export all public types for convenient access
pub use camera::*;
pub use dice::*;
pub use settings::*;
pub use ui::*;
