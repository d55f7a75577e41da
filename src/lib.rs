#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Keyframed scalar animation and the per-instance transform pipeline behind
//! a scripted lift-off scene.
//!
//! One [`KeyFramedFloat`] animates each scalar channel; a frame loop feeds
//! them `dt`, writes the results into [`Transform`]s held by an
//! [`ObjectInstanceGroup`], and hands the group's matrix arrays to the
//! renderer.
//!
//! ```rust,ignore
//! use liftoff::prelude::*;
//!
//! let mesh = load_ship_mesh();
//! let plan = FlightPlan::default();
//! let mut ship = ObjectInstanceGroup::new(&mesh);
//! ship.create_instance(plan.start_transform());
//!
//! let mut channels = plan.build_channels();
//! channels.play_all();
//!
//! loop {
//!     let dt = timer.tick();
//!     channels.update(dt, ship.transform_mut(0)?);
//!     let batch = ship.proj_camera_world_array(projection, camera.view_matrix());
//!     renderer.draw_instanced(ship.mesh(), &batch);
//! }
//! ```

pub mod animation;
pub mod errors;
pub mod input;
pub mod scene;
pub mod settings;
pub mod ui;
pub mod utils;

pub use animation::{
    Channel, FlightPlan, Keyframe, KeyframeGenerator, KeyFramedFloat, TransformChannels, shaping,
};
pub use errors::{LiftoffError, Result};
pub use input::{ElementState, Input, Key, MouseButton};
pub use scene::{FlyCamera, InstanceRaw, ObjectInstanceGroup, ParticleSource, Transform};
pub use settings::Settings;
pub use ui::{UiElement, UiGroup};
pub use utils::Timer;

pub mod prelude {
    pub use crate::animation::shaping;
    pub use crate::animation::{
        Channel, FlightPlan, Keyframe, KeyframeGenerator, KeyFramedFloat, TransformChannels,
    };
    pub use crate::errors::{LiftoffError, Result};
    pub use crate::input::{Input, Key, MouseButton};
    pub use crate::scene::{FlyCamera, ObjectInstanceGroup, ParticleSource, Transform};
    pub use crate::settings::Settings;
    pub use crate::utils::Timer;
}
