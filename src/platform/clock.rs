//! Wall-clock frame timing

use std::time::Instant;

/// Wall-clock frame timer
///
/// Delta time is not clamped: a long stall produces one large step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Restart timing from now (after startup work)
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Seconds since the previous tick
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last);
        self.last = now;
        dt.as_secs_f32()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
