//! ObjectInstanceGroup tests
//!
//! Tests for:
//! - Instance creation order and bounds-checked access
//! - Per-instance matrix and vector arrays
//! - Packed and row-major upload layouts

use std::f32::consts::FRAC_PI_2;

use glam::{Mat3, Mat4, Vec3};
use liftoff::errors::LiftoffError;
use liftoff::scene::{
    InstanceRaw, ObjectInstanceGroup, Transform, look_at, mat3_array_row_major,
    mat4_array_row_major, perspective,
};

#[derive(Debug)]
struct MeshHandle {
    vertex_count: u32,
}

fn pad() -> MeshHandle {
    MeshHandle { vertex_count: 36 }
}

fn camera() -> (Mat4, Mat4) {
    let projection = perspective(60f32.to_radians(), 16.0 / 9.0, 0.1, 200.0);
    let view = look_at(Vec3::new(0.0, 2.0, 10.0), Vec3::NEG_Z, Vec3::Y, Vec3::X);
    (projection, view)
}

// ============================================================================
// Creation & access
// ============================================================================

#[test]
fn group_borrows_its_mesh() {
    let mesh = pad();
    let group: ObjectInstanceGroup<'_, MeshHandle> = ObjectInstanceGroup::new(&mesh);
    assert!(std::ptr::eq(group.mesh(), &mesh));
    assert_eq!(group.mesh().vertex_count, 36);
    assert_eq!(group.instance_count(), 0);
    assert!(group.is_empty());
}

#[test]
fn instances_keep_insertion_order() {
    let mesh = pad();
    let mut group = ObjectInstanceGroup::new(&mesh);
    group.create_instance(Transform::from_position(Vec3::new(-19.0, -0.97, 10.0)));
    group.create_instance(Transform::from_position(Vec3::new(-34.7, -0.97, 1.0)));

    assert_eq!(group.instance_count(), 2);
    assert_eq!(group.transform(0).unwrap().position.x, -19.0);
    assert_eq!(group.transform(1).unwrap().position.x, -34.7);
}

#[test]
fn out_of_range_index_is_an_error() {
    let mesh = pad();
    let mut group = ObjectInstanceGroup::new(&mesh);
    group.create_instance(Transform::default());

    let err = group.transform(1).unwrap_err();
    assert!(matches!(
        err,
        LiftoffError::InstanceIndexOutOfBounds { index: 1, count: 1 }
    ));
    assert!(group.transform_mut(5).is_err());
    assert!(err.to_string().contains("out of bounds"));
}

#[test]
fn transform_mut_edits_in_place() {
    let mesh = pad();
    let mut group = ObjectInstanceGroup::new(&mesh);
    group.create_instance(Transform::default());
    group.create_instance(Transform::default());

    group.transform_mut(1).unwrap().position.y = 30.0;

    assert_eq!(group.transforms()[0].position, Vec3::ZERO);
    assert_eq!(group.transforms()[1].position, Vec3::new(0.0, 30.0, 0.0));
}

#[test]
fn extend_appends_instances() {
    let mesh = pad();
    let mut group = ObjectInstanceGroup::new(&mesh);
    group.extend((0..4).map(|i| Transform::from_position(Vec3::splat(i as f32))));
    assert_eq!(group.instance_count(), 4);
    assert_eq!(group.transform(3).unwrap().position, Vec3::splat(3.0));
}

// ============================================================================
// Derived arrays
// ============================================================================

#[test]
fn identity_instance_yields_projection_times_view() {
    let mesh = pad();
    let mut group = ObjectInstanceGroup::new(&mesh);
    group.create_instance(Transform::default());

    let (projection, view) = camera();
    assert_eq!(group.proj_camera_world_array(projection, view), vec![projection * view]);
}

#[test]
fn proj_camera_world_is_per_instance() {
    let mesh = pad();
    let mut group = ObjectInstanceGroup::new(&mesh);
    let a = Transform::from_position(Vec3::new(1.0, 0.0, 0.0));
    let b = Transform::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, FRAC_PI_2, 0.0), Vec3::splat(2.0));
    group.create_instance(a);
    group.create_instance(b);

    let (projection, view) = camera();
    let batch = group.proj_camera_world_array(projection, view);

    assert_eq!(batch.len(), 2);
    assert!(batch[0].abs_diff_eq(projection * view * a.matrix(), 1e-5));
    assert!(batch[1].abs_diff_eq(projection * view * b.matrix(), 1e-5));
}

#[test]
fn empty_group_yields_empty_arrays() {
    let mesh = pad();
    let group = ObjectInstanceGroup::new(&mesh);
    let (projection, view) = camera();
    assert!(group.proj_camera_world_array(projection, view).is_empty());
    assert!(group.translation_array().is_empty());
    assert!(group.normal_update_array().is_empty());
}

#[test]
fn translation_and_normal_arrays_are_parallel() {
    let mesh = pad();
    let mut group = ObjectInstanceGroup::new(&mesh);
    group.create_instance(Transform::from_position(Vec3::new(1.0, 2.0, 3.0)));
    group.create_instance(Transform::from_position(Vec3::new(4.0, 5.0, 6.0)).with_scale(Vec3::new(2.0, 2.0, 4.0)));

    assert_eq!(
        group.translation_array(),
        vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)]
    );

    let normals = group.normal_update_array();
    assert_eq!(normals[0], Mat3::IDENTITY);
    assert_eq!(normals[1], Mat3::from_diagonal(Vec3::new(0.5, 0.5, 0.25)));
}

#[test]
fn animation_writes_show_up_in_next_batch() {
    let mesh = pad();
    let mut group = ObjectInstanceGroup::new(&mesh);
    group.create_instance(Transform::default());

    group.transform_mut(0).unwrap().position = Vec3::new(0.0, 0.0, -5.0);
    let batch = group.proj_camera_world_array(Mat4::IDENTITY, Mat4::IDENTITY);
    assert_eq!(batch[0], Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0)));
}

// ============================================================================
// Upload layouts
// ============================================================================

#[test]
fn raw_instances_pack_all_three_arrays() {
    let mesh = pad();
    let mut group = ObjectInstanceGroup::new(&mesh);
    group.create_instance(Transform::from_position(Vec3::new(7.0, 8.0, 9.0)).with_scale(Vec3::splat(2.0)));

    let raws = group.instance_raw_array(Mat4::IDENTITY, Mat4::IDENTITY);
    assert_eq!(raws.len(), 1);

    let raw: InstanceRaw = raws[0];
    assert_eq!(raw.proj_camera_world[3], [7.0, 8.0, 9.0, 1.0]);
    assert_eq!(raw.normal_update[0], [0.5, 0.0, 0.0, 0.0]);
    assert_eq!(raw.translation, [7.0, 8.0, 9.0, 1.0]);

    let bytes: &[u8] = bytemuck::cast_slice(&raws);
    assert_eq!(bytes.len(), std::mem::size_of::<InstanceRaw>());
}

#[test]
fn row_major_export_transposes_each_matrix() {
    let mesh = pad();
    let mut group = ObjectInstanceGroup::new(&mesh);
    group.create_instance(Transform::from_position(Vec3::new(1.0, 2.0, 3.0)));
    group.create_instance(Transform::from_position(Vec3::new(4.0, 5.0, 6.0)));

    let flat = mat4_array_row_major(&group.proj_camera_world_array(Mat4::IDENTITY, Mat4::IDENTITY));
    assert_eq!(flat.len(), 32);
    assert_eq!([flat[3], flat[7], flat[11]], [1.0, 2.0, 3.0]);
    assert_eq!([flat[16 + 3], flat[16 + 7], flat[16 + 11]], [4.0, 5.0, 6.0]);
}

#[test]
fn normal_matrices_export_row_major() {
    let mesh = pad();
    let mut group = ObjectInstanceGroup::new(&mesh);
    group.create_instance(
        Transform::default()
            .with_rotation(Vec3::new(0.0, 0.0, FRAC_PI_2))
            .with_scale(Vec3::new(2.0, 4.0, 1.0)),
    );

    // Rz(90°) · diag(1/2, 1/4, 1) has rows (0, -1/4, 0), (1/2, 0, 0), (0, 0, 1).
    let flat = mat3_array_row_major(&group.normal_update_array());
    let expected = [0.0, -0.25, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 1.0];
    assert_eq!(flat.len(), 9);
    for (got, want) in flat.iter().zip(expected) {
        assert!((got - want).abs() < 1e-6, "got {flat:?}");
    }
}
