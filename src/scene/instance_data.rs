//! GPU-facing layouts of per-instance data.
//!
//! [`InstanceRaw`] is the std140-compatible record for instanced draws; the
//! `*_row_major` helpers flatten matrix arrays for APIs that upload uniform
//! arrays with a transpose flag instead.

use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4, Vec3};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct InstanceRaw {
    /// Column-major `projection · view · world`.
    pub proj_camera_world: [[f32; 4]; 4],
    /// Column-major normal matrix, each column padded to a `vec4`.
    pub normal_update: [[f32; 4]; 3],
    /// World translation, `w = 1`.
    pub translation: [f32; 4],
}

impl InstanceRaw {
    #[must_use]
    pub fn new(proj_camera_world: Mat4, normal_update: Mat3, translation: Vec3) -> Self {
        Self {
            proj_camera_world: proj_camera_world.to_cols_array_2d(),
            normal_update: [
                normal_update.x_axis.extend(0.0).to_array(),
                normal_update.y_axis.extend(0.0).to_array(),
                normal_update.z_axis.extend(0.0).to_array(),
            ],
            translation: translation.extend(1.0).to_array(),
        }
    }
}

impl Default for InstanceRaw {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat3::IDENTITY, Vec3::ZERO)
    }
}

/// Flatten 4x4 matrices into consecutive row-major blocks of 16 floats.
#[must_use]
pub fn mat4_array_row_major(matrices: &[Mat4]) -> Vec<f32> {
    matrices
        .iter()
        .flat_map(|m| m.transpose().to_cols_array())
        .collect()
}

/// Flatten 3x3 matrices into consecutive row-major blocks of 9 floats.
#[must_use]
pub fn mat3_array_row_major(matrices: &[Mat3]) -> Vec<f32> {
    matrices
        .iter()
        .flat_map(|m| m.transpose().to_cols_array())
        .collect()
}
