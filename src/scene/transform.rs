use std::ops::{Add, AddAssign};

use glam::{Mat3, Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Position / rotation / scale of one object instance.
///
/// Rotation is a per-axis Euler triple in radians, applied X first, then Y,
/// then Z (the matrix product `Rz · Ry · Rx`). Each component is a plain
/// scalar so animators can drive the axes independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    #[must_use]
    pub const fn new(position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    #[must_use]
    pub const fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    #[must_use]
    pub const fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub const fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// `Rz · Ry · Rx`.
    #[must_use]
    pub fn rotation_matrix(&self) -> Mat3 {
        Mat3::from_rotation_z(self.rotation.z)
            * Mat3::from_rotation_y(self.rotation.y)
            * Mat3::from_rotation_x(self.rotation.x)
    }

    /// Local-to-world matrix: `T · Rz · Ry · Rx · S`.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_z(self.rotation.z)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_scale(self.scale)
    }

    /// Matrix carrying object-space normals into world space.
    ///
    /// The inverse-transpose of the linear part reduces to `R · S⁻¹` because
    /// the rotation is orthonormal. A zero scale component yields non-finite
    /// entries.
    #[must_use]
    pub fn normal_update_matrix(&self) -> Mat3 {
        self.rotation_matrix() * Mat3::from_diagonal(self.scale.recip())
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Component-wise sum of position, rotation and scale.
impl Add for Transform {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            position: self.position + rhs.position,
            rotation: self.rotation + rhs.rotation,
            scale: self.scale + rhs.scale,
        }
    }
}

impl AddAssign for Transform {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
