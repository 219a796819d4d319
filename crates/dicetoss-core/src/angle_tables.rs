//! Canonical rest orientations for every rollable variant.
//!
//! Each entry is the (pitch, yaw) at which the given face points straight up.
//! A face with local outward normal `n` is up when
//! `pitch = asin(-n.z)` and `yaw = atan2(n.x, n.y)`.

use serde::Serialize;

use crate::euler::EulerAngles;

/// One face of a rollable and the orientation that shows it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AngleTableEntry {
    pub face_value: u32,
    pub pitch: f32,
    pub yaw: f32,
}

impl AngleTableEntry {
    pub const fn new(face_value: u32, pitch: f32, yaw: f32) -> Self {
        Self {
            face_value,
            pitch,
            yaw,
        }
    }

    pub fn reference(&self) -> EulerAngles {
        EulerAngles::pitch_yaw(self.pitch, self.yaw)
    }
}

/// Cube: 4 = +Y, 3 = -Y, 2 = +X, 5 = -X, 1 = +Z, 6 = -Z.
pub static DIE6_TABLE: [AngleTableEntry; 6] = [
    AngleTableEntry::new(1, 270.0, 0.0),
    AngleTableEntry::new(2, 0.0, 90.0),
    AngleTableEntry::new(3, 0.0, 180.0),
    AngleTableEntry::new(4, 0.0, 0.0),
    AngleTableEntry::new(5, 0.0, 270.0),
    AngleTableEntry::new(6, 90.0, 0.0),
];

/// Icosahedron, faces numbered in mesh order.
pub static DIE20_TABLE: [AngleTableEntry; 20] = [
    AngleTableEntry::new(1, 290.91, 90.0),
    AngleTableEntry::new(2, 324.74, 45.0),
    AngleTableEntry::new(3, 339.09, 0.0),
    AngleTableEntry::new(4, 324.74, 315.0),
    AngleTableEntry::new(5, 290.91, 270.0),
    AngleTableEntry::new(6, 324.74, 135.0),
    AngleTableEntry::new(7, 0.0, 110.91),
    AngleTableEntry::new(8, 0.0, 69.09),
    AngleTableEntry::new(9, 35.26, 45.0),
    AngleTableEntry::new(10, 20.91, 0.0),
    AngleTableEntry::new(11, 35.26, 315.0),
    AngleTableEntry::new(12, 0.0, 290.91),
    AngleTableEntry::new(13, 0.0, 249.09),
    AngleTableEntry::new(14, 324.74, 225.0),
    AngleTableEntry::new(15, 339.09, 180.0),
    AngleTableEntry::new(16, 20.91, 180.0),
    AngleTableEntry::new(17, 35.26, 135.0),
    AngleTableEntry::new(18, 69.09, 90.0),
    AngleTableEntry::new(19, 69.09, 270.0),
    AngleTableEntry::new(20, 35.26, 225.0),
];

/// Bottle: standing upright or balanced on its cap.
pub static BOTTLE_TABLE: [AngleTableEntry; 2] = [
    AngleTableEntry::new(10, 0.0, 0.0),
    AngleTableEntry::new(20, 0.0, 180.0),
];
