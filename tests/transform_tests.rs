//! Transform tests
//!
//! Tests for:
//! - World matrix composition (T · Rz · Ry · Rx · S)
//! - Normal-correction matrix under non-uniform scale
//! - Component-wise addition
//! - Angle helpers

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Mat3, Mat4, Vec3};
use liftoff::scene::Transform;
use liftoff::utils::{deg_to_rad, rad_to_deg};

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

fn mat3_approx(a: Mat3, b: Mat3, epsilon: f32) -> bool {
    a.to_cols_array()
        .iter()
        .zip(b.to_cols_array().iter())
        .all(|(x, y)| (x - y).abs() < epsilon)
}

// ============================================================================
// World matrix
// ============================================================================

#[test]
fn default_is_identity() {
    let t = Transform::default();
    assert_eq!(t.position, Vec3::ZERO);
    assert_eq!(t.rotation, Vec3::ZERO);
    assert_eq!(t.scale, Vec3::ONE);
    assert_eq!(t.matrix(), Mat4::IDENTITY);
}

#[test]
fn translation_only_matrix_is_exact() {
    let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(t.matrix(), Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)));
}

#[test]
fn rotation_applies_x_then_y_then_z() {
    let t = Transform::default().with_rotation(Vec3::new(FRAC_PI_2, FRAC_PI_2, 0.0));

    // Rx leaves +X alone, then Ry(90°) carries it to -Z.
    let rotated = t.matrix().transform_vector3(Vec3::X);
    assert!(vec3_approx(rotated, Vec3::NEG_Z), "got {rotated}");

    // The opposite order would have produced +Y.
    let reversed = (Mat4::from_rotation_x(FRAC_PI_2) * Mat4::from_rotation_y(FRAC_PI_2)).transform_vector3(Vec3::X);
    assert!(vec3_approx(reversed, Vec3::Y));
}

#[test]
fn matrix_matches_explicit_product() {
    let t = Transform::new(
        Vec3::new(-3.0, 0.5, 7.0),
        Vec3::new(0.3, -1.1, 2.4),
        Vec3::new(2.0, 0.5, 1.5),
    );
    let expected = Mat4::from_translation(t.position)
        * Mat4::from_rotation_z(t.rotation.z)
        * Mat4::from_rotation_y(t.rotation.y)
        * Mat4::from_rotation_x(t.rotation.x)
        * Mat4::from_scale(t.scale);
    assert!(t.matrix().abs_diff_eq(expected, EPSILON));
}

#[test]
fn scale_is_applied_before_rotation() {
    let t = Transform::default()
        .with_scale(Vec3::new(2.0, 1.0, 1.0))
        .with_rotation(Vec3::new(0.0, 0.0, FRAC_PI_2));

    let p = t.matrix().transform_point3(Vec3::X);
    assert!(vec3_approx(p, Vec3::new(0.0, 2.0, 0.0)), "got {p}");
}

#[test]
fn translation_is_applied_last() {
    let t = Transform::new(Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, PI, 0.0), Vec3::splat(3.0));
    let p = t.matrix().transform_point3(Vec3::X);
    assert!(vec3_approx(p, Vec3::new(7.0, 0.0, 0.0)), "got {p}");
}

// ============================================================================
// Normal-correction matrix
// ============================================================================

#[test]
fn normal_matrix_identity_for_rigid_unit_transform() {
    let t = Transform::from_position(Vec3::new(4.0, 5.0, 6.0));
    assert_eq!(t.normal_update_matrix(), Mat3::IDENTITY);
}

#[test]
fn normal_matrix_inverts_scale() {
    let t = Transform::default().with_scale(Vec3::new(2.0, 4.0, 0.5));
    assert!(mat3_approx(
        t.normal_update_matrix(),
        Mat3::from_diagonal(Vec3::new(0.5, 0.25, 2.0)),
        EPSILON
    ));
}

#[test]
fn normal_matrix_equals_inverse_transpose() {
    let t = Transform::new(
        Vec3::new(1.0, -2.0, 3.0),
        Vec3::new(0.3, 0.7, -1.1),
        Vec3::new(2.0, 3.0, 0.5),
    );
    let linear = Mat3::from_mat4(t.matrix());
    let expected = linear.inverse().transpose();
    assert!(mat3_approx(t.normal_update_matrix(), expected, 1e-4));
}

#[test]
fn normal_matrix_keeps_normals_perpendicular() {
    // Plane x + y = 0 squashed along X: the tangent and transformed normal stay orthogonal.
    let t = Transform::default()
        .with_scale(Vec3::new(3.0, 1.0, 1.0))
        .with_rotation(Vec3::new(0.2, 0.0, 0.4));
    let tangent = t.matrix().transform_vector3(Vec3::new(1.0, -1.0, 0.0));
    let normal = t.normal_update_matrix() * Vec3::new(1.0, 1.0, 0.0);
    assert!(tangent.dot(normal).abs() < 1e-4);
}

#[test]
fn zero_scale_gives_non_finite_normal_matrix() {
    let t = Transform::default().with_scale(Vec3::new(0.0, 1.0, 1.0));
    assert!(!t.normal_update_matrix().is_finite());
}

// ============================================================================
// Addition
// ============================================================================

#[test]
fn add_is_component_wise() {
    let a = Transform::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.25, 0.5, 0.75), Vec3::ONE);
    let b = Transform::new(Vec3::new(-1.0, 0.5, 0.0), Vec3::new(0.0, 0.0, 1.0), Vec3::splat(0.5));

    let sum = a + b;
    assert_eq!(sum.position, Vec3::new(0.0, 2.5, 3.0));
    assert_eq!(sum.rotation, Vec3::new(0.25, 0.5, 1.75));
    assert_eq!(sum.scale, Vec3::splat(1.5));

    let mut acc = a;
    acc += b;
    assert_eq!(acc, sum);
}

// ============================================================================
// Angles
// ============================================================================

#[test]
fn degree_radian_round_trip() {
    assert!(approx_eq(deg_to_rad(180.0), PI));
    assert!(approx_eq(deg_to_rad(-90.0), -FRAC_PI_2));
    assert!(approx_eq(rad_to_deg(FRAC_PI_2), 90.0));
    assert!(approx_eq(rad_to_deg(deg_to_rad(37.5)), 37.5));
}
