//! Scene Settings
//!
//! Tunables for the scripted flight, the particle effect and the fly camera.
//! Every struct has a [`Default`] reproducing the stock scene, and the whole
//! set can be loaded from JSON with missing fields falling back to defaults.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use liftoff::settings::Settings;
//!
//! let settings = Settings::from_json_str(r#"{ "flight": { "lift_height": 45.0 } }"#)?;
//! assert_eq!(settings.flight.warp_duration, 3.0);
//! ```

use std::path::Path;

use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::errors::Result;

// ---------------------------------------------------------------------------
// FlightSettings
// ---------------------------------------------------------------------------

/// Shape of the scripted lift-off, hover and warp sequence.
///
/// Angles are stored in degrees for hand editing and converted when the
/// [`FlightPlan`](crate::animation::FlightPlan) is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightSettings {
    /// Where the vehicle rests before take-off.
    pub start_position: Vec3,
    /// Euler rotation (degrees) before take-off.
    pub start_rotation_degrees: Vec3,
    /// Vertical climb during lift-off.
    pub lift_height: f32,
    pub lift_duration: f32,
    /// Yaw added while climbing.
    pub turn_degrees: f32,
    /// Pause between climbing and warping.
    pub hover_duration: f32,
    pub warp_distance: f32,
    pub warp_duration: f32,
    /// Offset added on every axis to move the vehicle out of view once the warp ends.
    pub vanish_offset: f32,
}

impl Default for FlightSettings {
    fn default() -> Self {
        Self {
            start_position: Vec3::new(-34.7, -0.97, 1.0),
            start_rotation_degrees: Vec3::ZERO,
            lift_height: 30.0,
            lift_duration: 7.0,
            turn_degrees: 100.0,
            hover_duration: 0.1,
            warp_distance: 1000.0,
            warp_duration: 3.0,
            vanish_offset: 9999.0,
        }
    }
}

// ---------------------------------------------------------------------------
// ParticleSettings
// ---------------------------------------------------------------------------

/// Parameters of a [`ParticleSource`](crate::scene::ParticleSource).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleSettings {
    pub origin: Vec3,
    /// Pool size; particles are recycled, never allocated mid-flight.
    pub max_particles: usize,
    /// Maximum number of dead particles revived per update.
    pub spawn_rate: usize,
    /// Half-extent of the cube new particles are scattered in.
    pub spread: f32,
    /// Subtracted from particle positions per second.
    pub velocity: Vec3,
    /// Seconds a particle stays alive.
    pub lifetime: f32,
    /// Alpha lost per second.
    pub fade: f32,
    pub colour: Vec4,
    /// Seed of the scatter RNG.
    pub seed: u64,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            max_particles: 500,
            spawn_rate: 2,
            spread: 0.1,
            velocity: Vec3::ZERO,
            lifetime: 1.0,
            fade: 1.0,
            colour: Vec4::new(1.0, 0.55, 0.1, 1.0),
            seed: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// FlyCameraSettings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlyCameraSettings {
    pub start_position: Vec3,
    /// World units per second at normal speed.
    pub movement_per_second: f32,
    /// Radians per pixel of cursor travel.
    pub mouse_sensitivity: f32,
    pub fast_multiplier: f32,
    pub slow_multiplier: f32,
}

impl Default for FlyCameraSettings {
    fn default() -> Self {
        Self {
            start_position: Vec3::new(-19.0, 2.0, 14.0),
            movement_per_second: 5.0,
            mouse_sensitivity: 0.005,
            fast_multiplier: 10.0,
            slow_multiplier: 0.5,
        }
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub flight: FlightSettings,
    pub particles: ParticleSettings,
    pub camera: FlyCameraSettings,
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&text)?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
