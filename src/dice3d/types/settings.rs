//! Application settings types and persistence
//!
//! Settings live in a single RON file next to the executable. Missing fields
//! take their defaults; a missing or broken file falls back to defaults.

use bevy::log::{info, warn};
use bevy::prelude::*;
use dicetoss_core::RollSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default settings file name
pub const SETTINGS_FILE: &str = "dicetoss.ron";

/// Settle and resolution thresholds shared by every rollable
#[derive(Resource, Debug, Clone, Default, PartialEq, Deref)]
pub struct RollConfig(pub RollSettings);

/// Throw tuning for the player driver
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrowSettings {
    /// Where a new object is held before it is thrown
    pub spawn_position: [f32; 3],
    /// Release intensity at the start of every charge
    pub default_release_intensity: f32,
    /// Intensity added per frame while charging
    pub intensity_step: f32,
    pub max_release_intensity: f32,
    /// Impulse per unit of intensity per unit of distance to the target
    pub impulse_scale: f32,
    /// Torque impulse per unit of intensity
    pub torque_scale: f32,
    /// Seconds between a throw and the next held object
    pub respawn_delay_secs: f32,
    /// Objects falling below this height have left the play area
    pub kill_plane_y: f32,
}

impl Default for ThrowSettings {
    fn default() -> Self {
        Self {
            spawn_position: [0.0, 2.5, 3.5],
            default_release_intensity: 30.0,
            intensity_step: 5.0,
            max_release_intensity: 2000.0,
            impulse_scale: 0.002,
            torque_scale: 0.0005,
            respawn_delay_secs: 0.8,
            kill_plane_y: -5.0,
        }
    }
}

impl ThrowSettings {
    pub fn spawn_position(&self) -> Vec3 {
        Vec3::from_array(self.spawn_position)
    }
}

/// Everything stored in the settings file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub roll: RollSettings,
    pub throw: ThrowSettings,
}

impl AppSettings {
    pub fn from_ron_str(input: &str) -> Result<Self, String> {
        ron::from_str(input).map_err(|e| format!("Failed to parse settings: {e}"))
    }

    /// Load settings from a RON file, or defaults if it cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };

        match Self::from_ron_str(&contents) {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                warn!("{err}; using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let text = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| format!("Failed to serialize settings: {e}"))?;
        fs::write(path.as_ref(), text).map_err(|e| format!("Failed to write settings: {e}"))
    }
}
