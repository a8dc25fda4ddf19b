//! Frame clocks supplying `dt` to the animation states.

use std::time::Instant;

pub trait Clock {
    /// Seconds since the previous call.
    fn delta_seconds(&mut self) -> f32;
}

/// Wall-clock frame timer. The first call returns 0.
#[derive(Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for FrameClock {
    fn delta_seconds(&mut self) -> f32 {
        let now = Instant::now();
        let dt = self
            .last
            .map(|prev| now.duration_since(prev).as_secs_f32())
            .unwrap_or(0.0);
        self.last = Some(now);
        dt
    }
}

/// Constant step, for deterministic playback.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedClock {
    pub step: f32,
}

impl FixedClock {
    pub fn new(step: f32) -> Self {
        Self { step }
    }
}

impl Clock for FixedClock {
    fn delta_seconds(&mut self) -> f32 {
        self.step
    }
}
