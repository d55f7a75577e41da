use std::fmt;

use crate::animation::keyframe::Keyframe;
use crate::animation::shaping::lerp;

/// Callback fired once when a [`KeyFramedFloat`] reaches its last keyframe.
pub type FinishCallback = Box<dyn FnMut()>;

/// An animated scalar.
///
/// Advances through an ordered list of [`Keyframe`]s as [`update`](Self::update)
/// is fed frame deltas, with media-player style controls: play, pause, stop and
/// toggle. A freshly built animator is paused.
///
/// Each `update` crosses at most one keyframe boundary. Time left over after
/// reaching a keyframe is dropped rather than carried into the next segment,
/// so a long stall never skips keyframes; it only delays them.
pub struct KeyFramedFloat {
    keyframes: Vec<Keyframe>,
    on_finish: Vec<FinishCallback>,

    current_index: usize,
    time_on_current: f32,
    total_elapsed: f32,
    current_value: f32,

    finished: bool,
    playing: bool,
}

impl KeyFramedFloat {
    /// An empty animator. Its value is `0` until keyframes are inserted.
    #[must_use]
    pub fn new() -> Self {
        Self {
            keyframes: Vec::new(),
            on_finish: Vec::new(),
            current_index: 0,
            time_on_current: 0.0,
            total_elapsed: 0.0,
            current_value: 0.0,
            finished: false,
            playing: false,
        }
    }

    /// An animator starting at `initial.value`. The seed's duration and shaping
    /// are never consulted.
    #[must_use]
    pub fn with_initial(initial: Keyframe) -> Self {
        let mut animator = Self::new();
        animator.current_value = initial.value;
        animator.keyframes.push(initial);
        animator
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Rewind to the first keyframe and pause.
    ///
    /// The current value is left alone; it snaps back to the first segment on
    /// the next [`update`](Self::update).
    pub fn stop(&mut self) {
        self.current_index = 0;
        self.time_on_current = 0.0;
        self.total_elapsed = 0.0;
        self.finished = false;
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Append a keyframe. Allowed while playing; the new keyframe is reached
    /// once the cursor gets there.
    pub fn insert_keyframe(&mut self, keyframe: Keyframe) {
        self.keyframes.push(keyframe);
    }

    /// Register a callback fired (in registration order) when the animator
    /// reaches its last keyframe.
    pub fn insert_on_finish_callback(&mut self, callback: impl FnMut() + 'static) {
        self.on_finish.push(Box::new(callback));
    }

    /// Value computed by the last [`update`](Self::update), without advancing.
    #[must_use]
    pub fn current_value(&self) -> f32 {
        self.current_value
    }

    /// Time accumulated while playing since construction or the last stop.
    #[must_use]
    pub fn total_elapsed(&self) -> f32 {
        self.total_elapsed
    }

    #[must_use]
    pub fn keyframe_count(&self) -> usize {
        self.keyframes.len()
    }

    /// Advance by `delta_time` seconds (only while playing) and return the
    /// animated value.
    ///
    /// Inputs are not validated. A negative `delta_time` runs the current
    /// segment backwards, and a negative keyframe duration (only caught by a
    /// debug assertion in [`Keyframe::new`]) keeps progress below zero, so
    /// that segment never completes.
    pub fn update(&mut self, delta_time: f32) -> f32 {
        if self.finished || self.keyframes.len() < 2 {
            return self.keyframes.last().map_or(0.0, |kf| kf.value);
        }

        if self.playing {
            self.total_elapsed += delta_time;
            self.time_on_current += delta_time;
        }

        let current = self.keyframes[self.current_index];
        let next = self.keyframes[self.current_index + 1];

        let progress = if next.duration == 0.0 {
            1.0
        } else {
            (self.time_on_current / next.duration).min(1.0)
        };

        // The shaped factor is not clamped: overshooting curves overshoot the value too.
        self.current_value = lerp(current.value, next.value, (next.shaping)(progress));

        if progress == 1.0 {
            self.current_index += 1;
            self.time_on_current = 0.0;
            log::trace!(
                "keyframe {} reached (value {})",
                self.current_index,
                self.current_value
            );

            if self.current_index == self.keyframes.len() - 1 {
                self.trigger_callbacks();
                self.finished = true;
                self.playing = false;
                log::debug!(
                    "keyframed float finished after {:.3}s at {}",
                    self.total_elapsed,
                    self.current_value
                );
            }
        }

        self.current_value
    }

    fn trigger_callbacks(&mut self) {
        for callback in &mut self.on_finish {
            callback();
        }
    }
}

impl Default for KeyFramedFloat {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Keyframe> for KeyFramedFloat {
    fn from(initial: Keyframe) -> Self {
        Self::with_initial(initial)
    }
}

impl fmt::Debug for KeyFramedFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyFramedFloat")
            .field("keyframes", &self.keyframes.len())
            .field("current_index", &self.current_index)
            .field("time_on_current", &self.time_on_current)
            .field("current_value", &self.current_value)
            .field("playing", &self.playing)
            .field("finished", &self.finished)
            .field("on_finish", &self.on_finish.len())
            .finish()
    }
}
