//! Rollable-related types and components
//!
//! This module contains the `Rollable` component, the held-object marker,
//! the play area marker and the `RollResults` resource.

use bevy::prelude::*;
use dicetoss_core::{RollableObject, RollableVariant};

/// Component attached to each thrown or held object
#[derive(Component, Debug, Clone)]
pub struct Rollable {
    pub object: RollableObject,
    /// Set once an unknown outcome has been recorded for this settle, so a
    /// bottle lying on its side is only listed once.
    pub unknown_recorded: bool,
}

impl Rollable {
    pub fn new(variant: RollableVariant) -> Self {
        Self {
            object: RollableObject::new(variant),
            unknown_recorded: false,
        }
    }

    pub fn variant(&self) -> RollableVariant {
        self.object.variant()
    }
}

/// Marker for the object waiting to be thrown
#[derive(Component)]
pub struct HeldObject;

/// Marker component for the floor and walls
#[derive(Component)]
pub struct PlayArea;

/// Render color for each variant
pub fn variant_color(variant: RollableVariant) -> Color {
    match variant {
        RollableVariant::Die6 => Color::srgba(0.9, 0.9, 0.92, 0.95), // Bone white
        RollableVariant::Die20 => Color::srgba(0.95, 0.85, 0.2, 0.92), // Yellow crystal
        RollableVariant::Bottle => Color::srgba(0.2, 0.55, 0.3, 0.85), // Green glass
    }
}

/// Physical density used for the collider mass
pub fn variant_density(variant: RollableVariant) -> f32 {
    match variant {
        RollableVariant::Die6 => 1.5,
        RollableVariant::Die20 => 3.0,
        RollableVariant::Bottle => 0.8,
    }
}

/// One recorded outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollEntry {
    pub variant: RollableVariant,
    /// `None` when the object settled without a readable face.
    pub value: Option<u32>,
}

/// Resource storing reported outcomes, oldest first
#[derive(Resource, Default, Debug)]
pub struct RollResults {
    pub entries: Vec<RollEntry>,
}

impl RollResults {
    /// Number of entries shown on the scoreboard
    pub const VISIBLE_ENTRIES: usize = 10;

    pub fn record(&mut self, variant: RollableVariant, value: Option<u32>) {
        self.entries.push(RollEntry { variant, value });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Sum of all known values
    pub fn total(&self) -> u32 {
        self.entries.iter().filter_map(|e| e.value).sum()
    }

    /// Most recent entries, oldest first
    pub fn recent(&self) -> &[RollEntry] {
        let start = self.entries.len().saturating_sub(Self::VISIBLE_ENTRIES);
        &self.entries[start..]
    }
}
