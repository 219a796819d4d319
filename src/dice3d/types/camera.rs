//! Camera-related types and components
//!
//! This module contains the main camera marker component and where it sits.

use bevy::prelude::*;

/// Marker component for the main 3D camera
#[derive(Component)]
pub struct MainCamera;

/// Camera position, looking at the middle of the box
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 9.0, 9.0);
