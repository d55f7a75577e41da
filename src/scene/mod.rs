//! Scene-side data: instanced transforms and what moves around them.
//!
//! - Transform: per-instance position / Euler rotation / scale
//! - ObjectInstanceGroup: transforms sharing one mesh, and the matrix arrays
//!   an instanced draw consumes
//! - Camera: view/projection helpers and the fly camera
//! - Particles: the exhaust particle pool

pub mod camera;
pub mod instance_data;
pub mod instance_group;
pub mod particles;
pub mod transform;

pub use camera::{FlyCamera, look_at, perspective};
pub use instance_data::{InstanceRaw, mat3_array_row_major, mat4_array_row_major};
pub use instance_group::ObjectInstanceGroup;
pub use particles::{Particle, ParticleSource};
pub use transform::Transform;
