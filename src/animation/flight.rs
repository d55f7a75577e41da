//! Scripted vehicle flight.
//!
//! The sequence is authored as keyframes on the channels of the vehicle's
//! [`Transform`]:
//!
//! | Phase  | Position                          | Yaw                       |
//! |--------|-----------------------------------|---------------------------|
//! | lift   | climb `lift_height`, smoothstep   | turn by `turn_degrees`, ease-out⁴ |
//! | hover  | hold                              | hold                      |
//! | warp   | `warp_distance` forward, t⁶       |                           |
//! | vanish | jump `vanish_offset`, instant     |                           |

use glam::{Mat3, Vec3};

use crate::animation::channels::{Channel, TransformChannels};
use crate::animation::keyframe::{Keyframe, KeyframeGenerator};
use crate::animation::keyframed::KeyFramedFloat;
use crate::animation::shaping;
use crate::scene::transform::Transform;
use crate::settings::FlightSettings;
use crate::utils::deg_to_rad;

/// Precomputed waypoints of a flight, ready to be turned into channels.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPlan {
    settings: FlightSettings,
    start: Transform,
    lifted_position: Vec3,
    final_yaw: f32,
    warp_target: Vec3,
}

impl FlightPlan {
    #[must_use]
    pub fn new(settings: FlightSettings) -> Self {
        let start = Transform::from_position(settings.start_position).with_rotation(Vec3::new(
            deg_to_rad(settings.start_rotation_degrees.x),
            deg_to_rad(settings.start_rotation_degrees.y),
            deg_to_rad(settings.start_rotation_degrees.z),
        ));

        let lifted_position = start.position + Vec3::Y * settings.lift_height;
        let final_yaw = start.rotation.y + deg_to_rad(settings.turn_degrees);

        // Nose direction after the turn; the model's nose points down its local -X.
        let pitch = start.rotation.x;
        let heading = Vec3::new(
            pitch.cos() * final_yaw.sin(),
            pitch.sin(),
            pitch.cos() * final_yaw.cos(),
        );
        let forward = Mat3::from_rotation_y(deg_to_rad(-90.0)) * heading.normalize();
        let warp_target = lifted_position + forward * settings.warp_distance;

        Self {
            settings,
            start,
            lifted_position,
            final_yaw,
            warp_target,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &FlightSettings {
        &self.settings
    }

    /// Transform of the vehicle on the pad.
    #[must_use]
    pub fn start_transform(&self) -> Transform {
        self.start
    }

    #[must_use]
    pub fn lifted_position(&self) -> Vec3 {
        self.lifted_position
    }

    #[must_use]
    pub fn final_yaw(&self) -> f32 {
        self.final_yaw
    }

    /// Where the warp ends, before the vehicle vanishes.
    #[must_use]
    pub fn warp_target(&self) -> Vec3 {
        self.warp_target
    }

    /// Playback time from take-off to the end of the warp. The vanish
    /// keyframe lands on the update after that.
    #[must_use]
    pub fn total_duration(&self) -> f32 {
        self.settings.lift_duration + self.settings.hover_duration + self.settings.warp_duration
    }

    /// Author the keyframes. The returned channels are paused.
    #[must_use]
    pub fn build_channels(&self) -> TransformChannels {
        let s = &self.settings;
        let mut channels = TransformChannels::new();

        let position_axes = [
            (Channel::PositionX, self.start.position.x, 0.0, self.warp_target.x),
            (Channel::PositionY, self.start.position.y, s.lift_height, self.warp_target.y),
            (Channel::PositionZ, self.start.position.z, 0.0, self.warp_target.z),
        ];

        for (channel, start, climb, warp_target) in position_axes {
            let seed = Keyframe::seed(start);
            let mut generator = KeyframeGenerator::from_keyframe(&seed);
            let animator = channels.channel_mut(channel);
            *animator = KeyFramedFloat::with_initial(seed);

            animator.insert_keyframe(generator.generate_next(climb, s.lift_duration, shaping::smoothstep));
            animator.insert_keyframe(generator.generate_next(0.0, s.hover_duration, shaping::none));
            animator.insert_keyframe(generator.generate_with_value(
                warp_target,
                s.warp_duration,
                shaping::polynomial::<6>,
            ));
            animator.insert_keyframe(generator.generate_next(s.vanish_offset, 0.0, shaping::instant));
        }

        let yaw = channels.channel_mut(Channel::RotationY);
        *yaw = KeyFramedFloat::with_initial(Keyframe::seed(self.start.rotation.y));
        yaw.insert_keyframe(Keyframe::new(
            self.final_yaw,
            s.lift_duration,
            shaping::polynomial_ease_out::<4>,
        ));

        log::debug!(
            "Flight plan: lift to {}, warp to {} over {:.1}s",
            self.lifted_position,
            self.warp_target,
            self.total_duration()
        );

        channels
    }
}

impl Default for FlightPlan {
    fn default() -> Self {
        Self::new(FlightSettings::default())
    }
}
