//! Frame timing

use std::time::{Duration, Instant};

use crate::consts::MAX_FRAME_DT;

/// Tracks time between ticks and paces the loop
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_update: Instant,
    frame_budget: Duration,
}

impl FrameClock {
    pub fn new(frame_budget: Duration) -> Self {
        Self {
            last_update: Instant::now(),
            frame_budget,
        }
    }

    /// Seconds since the previous call, capped at `MAX_FRAME_DT`
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_update);
        self.last_update = now;
        clamp_dt(dt)
    }

    /// Forget the previous tick (after a restart)
    pub fn reset(&mut self) {
        self.last_update = Instant::now();
    }

    /// Sleep out whatever is left of this frame's budget
    pub fn pace(&self, frame_start: Instant) {
        let elapsed = frame_start.elapsed();
        if elapsed < self.frame_budget {
            std::thread::sleep(self.frame_budget - elapsed);
        }
    }
}

/// Convert an elapsed duration into a simulation step
pub fn clamp_dt(elapsed: Duration) -> f32 {
    elapsed.as_secs_f32().min(MAX_FRAME_DT)
}
