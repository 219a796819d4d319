//! Tests for face resolution against the canonical angle tables

use dicetoss_core::{
    band_diff, nearest_face, orientation_distance, resolve, EulerAngles, ResolverSettings,
    RollableVariant, UNKNOWN_FACE,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_exact_reference_orientations_resolve_to_their_face() {
    let settings = ResolverSettings::default();
    for variant in RollableVariant::all() {
        for entry in variant.angle_table() {
            let orientation = entry.reference();
            assert_eq!(orientation_distance(&orientation, entry), 0.0);
            assert_eq!(
                resolve(variant, &orientation, &settings),
                entry.face_value,
                "{} face {}",
                variant.name(),
                entry.face_value
            );
        }
    }
}

#[test]
fn test_band_diff_symmetry_and_identity() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let p: f32 = rng.gen_range(0.0..360.0);
        let q: f32 = rng.gen_range(0.0..360.0);
        assert_eq!(band_diff(p, q), band_diff(q, p));
        assert_eq!(band_diff(p, p), 0.0);
        let d = band_diff(p, q);
        assert!((0.0..=180.0).contains(&d));
    }
}

#[test]
fn test_band_diff_known_values() {
    assert_eq!(band_diff(1.0, 359.0), 2.0);
    assert_eq!(band_diff(0.0, 180.0), 180.0);
    assert_eq!(band_diff(90.0, 270.0), 180.0);
    assert_eq!(band_diff(10.0, 40.0), 30.0);
}

#[test]
fn test_die6_known_orientations() {
    let settings = ResolverSettings::default();
    let resolve6 = |pitch, yaw| {
        resolve(
            RollableVariant::Die6,
            &EulerAngles::pitch_yaw(pitch, yaw),
            &settings,
        )
    };
    assert_eq!(resolve6(270.0, 0.0), 1);
    assert_eq!(resolve6(0.0, 0.0), 4);
    assert_eq!(resolve6(90.0, 0.0), 6);
    assert_eq!(resolve6(0.0, 90.0), 2);
    assert_eq!(resolve6(0.0, 180.0), 3);
    assert_eq!(resolve6(0.0, 270.0), 5);
    // Small settle noise on either side of the wrap.
    assert_eq!(resolve6(359.5, 0.7), 4);
    assert_eq!(resolve6(0.4, 269.2), 5);
}

#[test]
fn test_die6_always_resolves_to_some_face() {
    let settings = ResolverSettings::default();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let orientation =
            EulerAngles::pitch_yaw(rng.gen_range(0.0..360.0), rng.gen_range(0.0..360.0));
        let face = resolve(RollableVariant::Die6, &orientation, &settings);
        assert!((1..=6).contains(&face));
    }
}

#[test]
fn test_bottle_tolerance() {
    let settings = ResolverSettings::default();
    let bottle = |pitch, yaw| {
        resolve(
            RollableVariant::Bottle,
            &EulerAngles::pitch_yaw(pitch, yaw),
            &settings,
        )
    };
    assert_eq!(bottle(0.0, 0.0), 10);
    assert_eq!(bottle(355.0, 8.0), 10);
    assert_eq!(bottle(0.0, 180.0), 20);
    assert_eq!(bottle(6.0, 171.0), 20);
    assert_eq!(bottle(0.0, 90.0), UNKNOWN_FACE);
    assert_eq!(bottle(15.0, 0.0), UNKNOWN_FACE);
    assert_eq!(bottle(0.0, 191.0), UNKNOWN_FACE);
}

#[test]
fn test_resolved_face_is_global_minimum() {
    let settings = ResolverSettings::default();
    let mut rng = StdRng::seed_from_u64(20);
    for variant in [RollableVariant::Die6, RollableVariant::Die20] {
        let table = variant.angle_table();
        for _ in 0..2000 {
            let orientation =
                EulerAngles::pitch_yaw(rng.gen_range(0.0..360.0), rng.gen_range(0.0..360.0));
            let face = resolve(variant, &orientation, &settings);
            let chosen = table
                .iter()
                .find(|entry| entry.face_value == face)
                .expect("resolved face is in the table");
            let distance = orientation_distance(&orientation, chosen);
            for entry in table {
                assert!(
                    distance <= orientation_distance(&orientation, entry),
                    "{} face {} at {:?} beat by face {}",
                    variant.name(),
                    face,
                    orientation,
                    entry.face_value
                );
            }
            assert_eq!(
                nearest_face(table, &orientation).map(|m| m.face_value),
                Some(face)
            );
        }
    }
}

#[test]
fn test_polar_orientations_are_matched_as_given() {
    let settings = ResolverSettings::default();
    let resolve20 = |pitch, yaw| {
        resolve(
            RollableVariant::Die20,
            &EulerAngles::pitch_yaw(pitch, yaw),
            &settings,
        )
    };
    assert_eq!(resolve20(90.0, 180.0), 17);
    assert_eq!(resolve20(272.0, 200.0), 14);
    assert_eq!(
        resolve(
            RollableVariant::Die6,
            &EulerAngles::pitch_yaw(270.0, 137.0),
            &settings
        ),
        2
    );
}

#[test]
fn test_die20_small_perturbations_keep_face() {
    let settings = ResolverSettings::default();
    let mut rng = StdRng::seed_from_u64(3);
    for entry in RollableVariant::Die20.angle_table() {
        for _ in 0..20 {
            let orientation = EulerAngles::pitch_yaw(
                entry.pitch + rng.gen_range(-2.0..2.0),
                entry.yaw + rng.gen_range(-2.0..2.0),
            );
            assert_eq!(
                resolve(RollableVariant::Die20, &orientation, &settings),
                entry.face_value
            );
        }
    }
}
