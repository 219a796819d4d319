//! Face resolution by nearest canonical orientation
//!
//! A settled orientation is compared against every entry of its variant's
//! angle table using a wrap-aware per-axis distance.

use crate::angle_tables::AngleTableEntry;
use crate::euler::{wrap_degrees, EulerAngles};
use crate::settings::ResolverSettings;
use crate::variant::RollableVariant;

/// Value reported when no face could be identified.
pub const UNKNOWN_FACE: u32 = 0;

/// Distance between two angles on the circle, in `[0, 180]`.
///
/// `band_diff(1, 359) == 2`, `band_diff(0, 180) == 180`.
pub fn band_diff(p: f32, q: f32) -> f32 {
    let diff = (wrap_degrees(p) - wrap_degrees(q)).abs();
    180.0 - (diff - 180.0).abs()
}

/// Larger of the pitch and yaw differences to a table entry.
pub fn orientation_distance(orientation: &EulerAngles, entry: &AngleTableEntry) -> f32 {
    band_diff(orientation.pitch, entry.pitch).max(band_diff(orientation.yaw, entry.yaw))
}

/// Best table entry for an orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestMatch {
    pub face_value: u32,
    pub distance: f32,
}

/// Find the table entry closest to `orientation`.
///
/// The first entry with a strictly smaller distance wins, so exact ties go to
/// the earlier entry. Returns `None` only for an empty table.
pub fn nearest_face(table: &[AngleTableEntry], orientation: &EulerAngles) -> Option<NearestMatch> {
    let mut best: Option<NearestMatch> = None;
    let mut best_distance = 360.0_f32;

    for entry in table {
        let distance = orientation_distance(orientation, entry);
        if distance < best_distance {
            best_distance = distance;
            best = Some(NearestMatch {
                face_value: entry.face_value,
                distance,
            });
        }
    }

    best
}

/// First table entry within `tolerance` degrees on both axes.
pub fn face_within_tolerance(
    table: &[AngleTableEntry],
    orientation: &EulerAngles,
    tolerance: f32,
) -> Option<u32> {
    table
        .iter()
        .find(|entry| orientation_distance(orientation, entry) <= tolerance)
        .map(|entry| entry.face_value)
}

/// Map a settled orientation to a face value, or [`UNKNOWN_FACE`].
///
/// The orientation is matched as given. Gimbal-lock folding belongs to
/// whoever reads the angles from the body (see [`EulerAngles::fold_polar_yaw`]).
/// Callers must only pass orientations of settled objects.
pub fn resolve(
    variant: RollableVariant,
    orientation: &EulerAngles,
    settings: &ResolverSettings,
) -> u32 {
    let table = variant.angle_table();

    let face = if variant.uses_tolerance_match() {
        face_within_tolerance(table, orientation, settings.bottle_tolerance_degrees)
    } else {
        nearest_face(table, orientation).map(|m| m.face_value)
    };

    face.unwrap_or(UNKNOWN_FACE)
}

/// Whether an orientation is already within `band` degrees of some face.
pub fn is_plausible_rest(variant: RollableVariant, orientation: &EulerAngles, band: f32) -> bool {
    face_within_tolerance(variant.angle_table(), orientation, band).is_some()
}
