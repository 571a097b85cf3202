#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn offset_approx_eq(a: Offset, b: Offset) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Vec3 ---

#[test]
fn vec3_sub_is_componentwise() {
    let d = Vec3::new(5.0, 2.0, -1.0) - Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(d, Vec3::new(4.0, 0.0, -4.0));
}

#[test]
fn vec3_dot_of_orthogonal_axes_is_zero() {
    assert_eq!(Vec3::RIGHT.dot(Vec3::FORWARD), 0.0);
}

#[test]
fn vec3_dot_projects_onto_axis() {
    assert_eq!(Vec3::new(3.0, 7.0, -2.0).dot(Vec3::FORWARD), -2.0);
    assert_eq!(Vec3::new(3.0, 7.0, -2.0).dot(Vec3::RIGHT), 3.0);
}

#[test]
fn vec3_deserializes_from_json_object() {
    let v: Vec3 = serde_json::from_str(r#"{"x":1.5,"y":0,"z":-2}"#).unwrap();
    assert_eq!(v, Vec3::new(1.5, 0.0, -2.0));
}

// --- Offset::rotated ---

#[test]
fn rotation_by_zero_is_identity() {
    let p = Offset::new(3.25, -7.5);
    assert!(offset_approx_eq(p.rotated(0.0), p));
}

#[test]
fn rotation_is_counter_clockwise() {
    let p = Offset::new(1.0, 0.0).rotated(90.0);
    assert!(offset_approx_eq(p, Offset::new(0.0, 1.0)));
}

#[test]
fn rotation_round_trip_restores_point() {
    let p = Offset::new(12.0, -4.5);
    for deg in [-270.0, -90.0, -33.3, 0.0, 17.0, 45.0, 180.0, 359.0] {
        let back = p.rotated(deg).rotated(-deg);
        assert!(offset_approx_eq(back, p), "round trip failed for {deg}°: {back:?}");
    }
}

#[test]
fn rotation_preserves_length() {
    let p = Offset::new(3.0, 4.0).rotated(123.0);
    assert!(approx_eq(p.x.hypot(p.y), 5.0));
}

// --- ship_local_offset ---

#[test]
fn world_aligned_ship_without_offset_keeps_axes() {
    let local = ship_local_offset(Vec3::new(4.0, 9.0, -6.0), Vec3::RIGHT, Vec3::FORWARD, 0.0);
    assert!(offset_approx_eq(local, Offset::new(4.0, -6.0)));
}

#[test]
fn vertical_component_is_ignored() {
    let local = ship_local_offset(Vec3::new(0.0, 50.0, 0.0), Vec3::RIGHT, Vec3::FORWARD, 0.0);
    assert!(offset_approx_eq(local, Offset::new(0.0, 0.0)));
}

#[test]
fn forward_landmark_with_minus_ninety_lands_right() {
    let local = ship_local_offset(Vec3::new(0.0, 0.0, 12.0), Vec3::RIGHT, Vec3::FORWARD, -90.0);
    assert!(offset_approx_eq(local, Offset::new(12.0, 0.0)));
}

#[test]
fn turned_ship_reprojects_delta() {
    // Ship yawed 90° clockwise seen from above: right = -z, forward = +x.
    let right = Vec3::new(0.0, 0.0, -1.0);
    let forward = Vec3::new(1.0, 0.0, 0.0);
    let local = ship_local_offset(Vec3::new(10.0, 0.0, 0.0), right, forward, 0.0);
    assert!(offset_approx_eq(local, Offset::new(0.0, 10.0)));
}
