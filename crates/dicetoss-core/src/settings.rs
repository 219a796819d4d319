//! Tunable thresholds for settle detection and face resolution
//!
//! Settings are stored as RON. Every field has a default, so a partial file
//! (or none at all) is valid.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Errors raised while loading or saving settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}

/// How a moving object decides it has come to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SettlePolicy {
    /// Wait out a countdown of consecutive low-velocity ticks.
    #[default]
    Debounce,
    /// Settle on the first low-velocity tick whose orientation is already
    /// close to a face; otherwise wait out the countdown.
    AngleBand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    /// Angular speed above which a resting object counts as thrown.
    pub moving_threshold: f32,
    /// Angular speed below which a moving object may settle.
    pub settled_threshold: f32,
    /// Low-velocity ticks to wait before settling.
    pub settle_debounce_ticks: i32,
    pub settle_policy: SettlePolicy,
    /// Orientation tolerance for [`SettlePolicy::AngleBand`], in degrees.
    pub angle_band_degrees: f32,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            moving_threshold: 0.5,
            settled_threshold: 0.01,
            settle_debounce_ticks: 20,
            settle_policy: SettlePolicy::Debounce,
            angle_band_degrees: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    /// Per-axis acceptance window for the bottle, in degrees.
    pub bottle_tolerance_degrees: f32,
    /// Pitch distance from a pole inside which body adapters fold yaw into
    /// roll when reading orientations.
    pub polar_tolerance_degrees: f32,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            bottle_tolerance_degrees: 10.0,
            polar_tolerance_degrees: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RollSettings {
    pub motion: MotionSettings,
    pub resolver: ResolverSettings,
}

impl RollSettings {
    pub fn from_ron_str(input: &str) -> Result<Self, SettingsError> {
        Ok(ron::from_str(input)?)
    }

    pub fn to_ron_string(&self) -> Result<String, SettingsError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Load settings from a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron_str(&contents)
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// unreadable.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded roll settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("{err}; using default roll settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        fs::write(path, self.to_ron_string()?).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}
