use crate::animation::keyframed::KeyFramedFloat;
use crate::input::{Input, Key};
use crate::scene::transform::Transform;

/// One animatable scalar of a [`Transform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    PositionX,
    PositionY,
    PositionZ,
    RotationX,
    RotationY,
    RotationZ,
}

impl Channel {
    /// All channels, in update order.
    pub const ALL: [Channel; 6] = [
        Channel::PositionX,
        Channel::PositionY,
        Channel::PositionZ,
        Channel::RotationX,
        Channel::RotationY,
        Channel::RotationZ,
    ];

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }

    fn slot(self, transform: &mut Transform) -> &mut f32 {
        match self {
            Channel::PositionX => &mut transform.position.x,
            Channel::PositionY => &mut transform.position.y,
            Channel::PositionZ => &mut transform.position.z,
            Channel::RotationX => &mut transform.rotation.x,
            Channel::RotationY => &mut transform.rotation.y,
            Channel::RotationZ => &mut transform.rotation.z,
        }
    }
}

/// Six independent animators driving the position and rotation of one
/// [`Transform`].
///
/// Channels without any keyframe leave their component untouched, so a
/// sequence only has to author the axes it actually moves.
#[derive(Debug, Default)]
pub struct TransformChannels {
    channels: [KeyFramedFloat; 6],
}

impl TransformChannels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn channel(&self, channel: Channel) -> &KeyFramedFloat {
        &self.channels[channel.index()]
    }

    pub fn channel_mut(&mut self, channel: Channel) -> &mut KeyFramedFloat {
        &mut self.channels[channel.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Channel, &KeyFramedFloat)> {
        Channel::ALL.into_iter().zip(self.channels.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Channel, &mut KeyFramedFloat)> {
        Channel::ALL.into_iter().zip(self.channels.iter_mut())
    }

    /// Advance every channel once and write the results into `transform`.
    pub fn update(&mut self, dt: f32, transform: &mut Transform) {
        for (channel, animator) in self.iter_mut() {
            if animator.keyframe_count() == 0 {
                continue;
            }
            *channel.slot(transform) = animator.update(dt);
        }
    }

    pub fn play_all(&mut self) {
        self.channels.iter_mut().for_each(KeyFramedFloat::play);
    }

    pub fn pause_all(&mut self) {
        self.channels.iter_mut().for_each(KeyFramedFloat::pause);
    }

    pub fn toggle_all(&mut self) {
        self.channels.iter_mut().for_each(KeyFramedFloat::toggle);
    }

    pub fn stop_all(&mut self) {
        self.channels.iter_mut().for_each(KeyFramedFloat::stop);
    }

    /// `F` toggles playback of every channel, `R` rewinds them all.
    pub fn handle_input(&mut self, input: &Input) {
        if input.was_key_just_pressed(Key::F) {
            self.toggle_all();
        }
        if input.was_key_just_pressed(Key::R) {
            self.stop_all();
        }
    }

    /// `true` once every channel that has something to animate is done.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.channels
            .iter()
            .filter(|animator| animator.keyframe_count() >= 2)
            .all(KeyFramedFloat::is_finished)
    }

    #[must_use]
    pub fn is_any_playing(&self) -> bool {
        self.channels.iter().any(KeyFramedFloat::is_playing)
    }
}
