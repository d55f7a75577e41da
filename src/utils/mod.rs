//! Utility Module
//!
//! - [`Timer`]: frame clock producing the `dt` fed to animators
//! - [`math`]: degree/radian conversion

pub mod math;
pub mod time;

pub use math::{deg_to_rad, rad_to_deg};
pub use time::Timer;
