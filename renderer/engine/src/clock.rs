use std::time::{Duration, Instant};

/// Measures the time between frames
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl FrameClock {
    pub fn start() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }

    /// Time since the last call (or since [start](Self::start)), and resets
    pub fn restart(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        elapsed
    }

    /// Total time since [start](Self::start)
    pub fn total(&self) -> Duration {
        self.start.elapsed()
    }
}
