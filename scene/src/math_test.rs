#![allow(clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, PI};

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

// --- Vec3 ---

#[test]
fn vec3_arithmetic() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(0.5, -1.0, 2.0);
    assert_eq!(a + b, Vec3::new(1.5, 1.0, 5.0));
    assert_eq!(a - b, Vec3::new(0.5, 3.0, 1.0));
    assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
}

#[test]
fn vec3_length() {
    assert!(approx_eq(Vec3::new(3.0, 4.0, 0.0).length(), 5.0));
    assert_eq!(Vec3::ZERO.length(), 0.0);
}

#[test]
fn rotate_y_quarter_turn_moves_x_to_negative_z() {
    let v = Vec3::new(1.0, 0.0, 0.0).rotate_y(FRAC_PI_2);
    assert!(vec_approx_eq(v, Vec3::new(0.0, 0.0, -1.0)));
}

#[test]
fn rotate_x_quarter_turn_moves_y_to_z() {
    let v = Vec3::new(0.0, 1.0, 0.0).rotate_x(FRAC_PI_2);
    assert!(vec_approx_eq(v, Vec3::new(0.0, 0.0, 1.0)));
}

#[test]
fn rotate_z_quarter_turn_moves_x_to_y() {
    let v = Vec3::new(1.0, 0.0, 0.0).rotate_z(FRAC_PI_2);
    assert!(vec_approx_eq(v, Vec3::new(0.0, 1.0, 0.0)));
}

#[test]
fn rotation_preserves_length() {
    let v = Vec3::new(0.3, -1.2, 2.5);
    let r = Euler::new(0.4, 1.1, -2.0).apply(v);
    assert!(approx_eq(v.length(), r.length()));
}

#[test]
fn euler_default_is_identity() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert!(vec_approx_eq(Euler::default().apply(v), v));
}

#[test]
fn euler_applies_z_before_x() {
    // Z quarter turn sends +X to +Y, then X quarter turn sends +Y to +Z.
    let v = Euler::new(FRAC_PI_2, 0.0, FRAC_PI_2).apply(Vec3::new(1.0, 0.0, 0.0));
    assert!(vec_approx_eq(v, Vec3::new(0.0, 0.0, 1.0)));
}

#[test]
fn full_turn_is_identity() {
    let v = Vec3::new(0.7, 0.1, -0.4);
    assert!(vec_approx_eq(v.rotate_y(2.0 * PI), v));
}

// --- Viewport ---

#[test]
fn viewport_center_and_emptiness() {
    let vp = Viewport::new(400.0, 300.0);
    assert_eq!(vp.center(), Point::new(200.0, 150.0));
    assert!(!vp.is_empty());
    assert!(Viewport::new(0.0, 300.0).is_empty());
    assert!(Viewport::new(400.0, -1.0).is_empty());
}

// --- Camera ---

#[test]
fn origin_projects_to_viewport_center() {
    let cam = Camera::new(5.0, 75.0);
    let vp = Viewport::new(640.0, 480.0);
    let p = cam.project(Vec3::ZERO, vp).expect("origin is in front of camera");
    assert!(approx_eq(p.point.x, 320.0));
    assert!(approx_eq(p.point.y, 240.0));
    assert!(approx_eq(p.depth, 5.0));
}

#[test]
fn focal_length_for_ninety_degree_fov_is_half_height() {
    let cam = Camera::new(5.0, 90.0);
    assert!(approx_eq(cam.focal_length(Viewport::new(100.0, 200.0)), 100.0));
}

#[test]
fn positive_y_projects_upward_on_screen() {
    let cam = Camera::new(4.0, 50.0);
    let vp = Viewport::new(200.0, 200.0);
    let p = cam.project(Vec3::new(0.0, 1.0, 0.0), vp).expect("in front");
    assert!(p.point.y < 100.0);
}

#[test]
fn positive_x_projects_rightward_on_screen() {
    let cam = Camera::new(4.0, 50.0);
    let vp = Viewport::new(200.0, 200.0);
    let p = cam.project(Vec3::new(1.0, 0.0, 0.0), vp).expect("in front");
    assert!(p.point.x > 100.0);
}

#[test]
fn nearer_points_spread_further_from_center() {
    let cam = Camera::new(5.0, 60.0);
    let vp = Viewport::new(300.0, 300.0);
    let far = cam.project(Vec3::new(1.0, 0.0, -2.0), vp).expect("in front");
    let near = cam.project(Vec3::new(1.0, 0.0, 2.0), vp).expect("in front");
    assert!(near.point.x > far.point.x);
    assert!(near.depth < far.depth);
}

#[test]
fn points_behind_camera_are_rejected() {
    let cam = Camera::new(5.0, 60.0);
    let vp = Viewport::new(300.0, 300.0);
    assert!(cam.project(Vec3::new(0.0, 0.0, 6.0), vp).is_none());
    assert!(cam.project(Vec3::new(0.0, 0.0, 5.0), vp).is_none());
}
