use crate::animation::shaping::{self, ShapingFn};

/// One segment destination of a [`KeyFramedFloat`](super::KeyFramedFloat).
///
/// `duration` is the time taken to reach this keyframe from the previous one
/// and `shaping` eases that approach. Both are ignored on the first keyframe of
/// a sequence, which only supplies the starting value.
#[derive(Debug, Clone, Copy)]
pub struct Keyframe {
    pub value: f32,
    pub duration: f32,
    pub shaping: ShapingFn,
}

impl Keyframe {
    #[must_use]
    pub const fn new(value: f32, duration: f32, shaping: ShapingFn) -> Self {
        debug_assert!(duration >= 0.0, "keyframe duration must not be negative");
        Self {
            value,
            duration,
            shaping,
        }
    }

    /// A starting keyframe: only the value is ever read.
    #[must_use]
    pub const fn seed(value: f32) -> Self {
        Self::new(value, 0.0, shaping::none)
    }
}

/// Builds successive keyframes from a running value, so long chains can be
/// authored as offsets instead of absolute values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyframeGenerator {
    current_value: f32,
    initial_value: f32,
}

impl KeyframeGenerator {
    #[must_use]
    pub const fn new(initial_value: f32) -> Self {
        Self {
            current_value: initial_value,
            initial_value,
        }
    }

    /// Start from the value of an existing keyframe.
    #[must_use]
    pub const fn from_keyframe(keyframe: &Keyframe) -> Self {
        Self::new(keyframe.value)
    }

    /// Add `increment` to the running value and emit a keyframe there.
    pub fn generate_next(&mut self, increment: f32, duration: f32, shaping: ShapingFn) -> Keyframe {
        self.current_value += increment;
        Keyframe::new(self.current_value, duration, shaping)
    }

    /// Overwrite the running value and emit a keyframe there.
    pub fn generate_with_value(&mut self, value: f32, duration: f32, shaping: ShapingFn) -> Keyframe {
        self.current_value = value;
        Keyframe::new(self.current_value, duration, shaping)
    }

    pub fn reset_value(&mut self) {
        self.current_value = self.initial_value;
    }

    pub fn set_value(&mut self, value: f32) {
        self.current_value = value;
    }

    #[must_use]
    pub const fn value(&self) -> f32 {
        self.current_value
    }
}

impl From<Keyframe> for KeyframeGenerator {
    fn from(keyframe: Keyframe) -> Self {
        Self::from_keyframe(&keyframe)
    }
}
