use glam::{Mat3, Mat4, Vec3};

use crate::errors::{LiftoffError, Result};
use crate::scene::instance_data::InstanceRaw;
use crate::scene::transform::Transform;

/// Instances of one shared mesh.
///
/// The group borrows the mesh handle (`M` is opaque; it is only held so the
/// renderer can draw the batch with it) and owns one [`Transform`] per
/// instance. Insertion order is the instance index and never changes; there
/// is no removal.
///
/// Every per-instance array the group derives is in instance order, so index
/// `i` of each array describes the same instance.
#[derive(Debug)]
pub struct ObjectInstanceGroup<'a, M> {
    mesh: &'a M,
    transforms: Vec<Transform>,
}

impl<'a, M> ObjectInstanceGroup<'a, M> {
    #[must_use]
    pub fn new(mesh: &'a M) -> Self {
        Self {
            mesh,
            transforms: Vec::new(),
        }
    }

    /// The mesh handle every instance is drawn with.
    #[must_use]
    pub fn mesh(&self) -> &'a M {
        self.mesh
    }

    /// Append an instance. Its index is the previous instance count.
    pub fn create_instance(&mut self, transform: Transform) {
        self.transforms.push(transform);
    }

    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.transforms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn transform(&self, index: usize) -> Result<&Transform> {
        let count = self.transforms.len();
        self.transforms.get(index).ok_or_else(|| {
            log::warn!("Instance {index} requested from a group of {count}");
            LiftoffError::InstanceIndexOutOfBounds { index, count }
        })
    }

    /// Mutable access for animation code writing into an instance.
    pub fn transform_mut(&mut self, index: usize) -> Result<&mut Transform> {
        let count = self.transforms.len();
        self.transforms.get_mut(index).ok_or_else(|| {
            log::warn!("Instance {index} requested from a group of {count}");
            LiftoffError::InstanceIndexOutOfBounds { index, count }
        })
    }

    #[must_use]
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// `projection · world2camera · world_i` for every instance: the batch of
    /// matrices consumed by one instanced draw.
    #[must_use]
    pub fn proj_camera_world_array(&self, projection: Mat4, world2camera: Mat4) -> Vec<Mat4> {
        let proj_camera = projection * world2camera;
        self.transforms
            .iter()
            .map(|transform| proj_camera * transform.matrix())
            .collect()
    }

    #[must_use]
    pub fn translation_array(&self) -> Vec<Vec3> {
        self.transforms.iter().map(|t| t.position).collect()
    }

    #[must_use]
    pub fn normal_update_array(&self) -> Vec<Mat3> {
        self.transforms
            .iter()
            .map(Transform::normal_update_matrix)
            .collect()
    }

    /// All three per-instance arrays packed for a single buffer upload.
    #[must_use]
    pub fn instance_raw_array(&self, projection: Mat4, world2camera: Mat4) -> Vec<InstanceRaw> {
        let proj_camera = projection * world2camera;
        self.transforms
            .iter()
            .map(|t| InstanceRaw::new(proj_camera * t.matrix(), t.normal_update_matrix(), t.position))
            .collect()
    }
}

impl<M> Extend<Transform> for ObjectInstanceGroup<'_, M> {
    fn extend<I: IntoIterator<Item = Transform>>(&mut self, iter: I) {
        self.transforms.extend(iter);
    }
}
