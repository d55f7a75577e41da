#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Wall-clock source of the `dt` fed to animators.
///
/// Animators cross at most one keyframe per update, so a stall (window drag,
/// breakpoint) only delays them. A `max_delta` additionally caps how much
/// simulated time a single frame may consume.
#[derive(Debug, Clone)]
pub struct Timer {
    last_tick: Instant,
    max_delta: Option<Duration>,
    /// Simulated time handed out by the last tick, after capping
    pub delta: Duration,
    /// Sum of all simulated deltas
    pub simulated: Duration,
    pub frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            max_delta: None,
            delta: Duration::ZERO,
            simulated: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// A timer whose ticks never report more than `max_delta`.
    #[must_use]
    pub fn with_max_delta(max_delta: Duration) -> Self {
        Self {
            max_delta: Some(max_delta),
            ..Self::new()
        }
    }

    /// Start a new frame and return its delta in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let real = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        self.delta = self.max_delta.map_or(real, |cap| real.min(cap));
        if self.delta < real {
            log::trace!("Frame delta {real:?} capped to {:?}", self.delta);
        }
        self.simulated += self.delta;
        self.frame_count += 1;
        self.delta.as_secs_f32()
    }

    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Seconds of simulated time since creation.
    #[must_use]
    pub fn simulated_seconds(&self) -> f32 {
        self.simulated.as_secs_f32()
    }
}
