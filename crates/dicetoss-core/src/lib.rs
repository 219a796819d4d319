//! Settle detection and face resolution for thrown dice
//!
//! This crate is independent of any engine. It is organized into modules:
//! - `euler` - Orientation samples in degrees
//! - `angle_tables` - Canonical rest orientation of every face
//! - `variant` - The kinds of rollable object
//! - `resolver` - Nearest-orientation face lookup
//! - `rollable` - Per-object motion lifecycle and value reporting
//! - `body` - The read-only physics body seam
//! - `settings` - Thresholds and their RON persistence

pub mod angle_tables;
pub mod body;
pub mod euler;
pub mod resolver;
pub mod rollable;
pub mod settings;
pub mod variant;

pub use angle_tables::*;
pub use body::*;
pub use euler::*;
pub use resolver::*;
pub use rollable::*;
pub use settings::*;
pub use variant::*;
