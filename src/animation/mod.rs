//! Keyframed scalar animation.
//!
//! - [`shaping`]: easing curves applied to segment progress
//! - [`Keyframe`] / [`KeyframeGenerator`]: segment destinations and a helper
//!   to author them as running offsets
//! - [`KeyFramedFloat`]: the per-scalar playback state machine
//! - [`TransformChannels`]: six animators driving one transform
//! - [`FlightPlan`]: the scripted lift-off and warp sequence

pub mod channels;
pub mod flight;
pub mod keyframe;
pub mod keyframed;
pub mod shaping;

pub use channels::{Channel, TransformChannels};
pub use flight::FlightPlan;
pub use keyframe::{Keyframe, KeyframeGenerator};
pub use keyframed::{FinishCallback, KeyFramedFloat};
pub use shaping::{ShapingFn, lerp};
