//! Frame clocks

use std::time::{Duration, Instant};

use crate::consts::MAX_FRAME_DT;

/// Source of per-frame elapsed time
pub trait Clock {
    /// Seconds since the previous call (monotonic, non-negative)
    fn elapsed(&mut self) -> f32;
}

/// Wall clock that limits the frame rate.
///
/// Each call sleeps until at least one frame budget has passed since the
/// previous call, then reports the real elapsed time capped at `MAX_FRAME_DT`.
#[derive(Debug)]
pub struct SystemClock {
    last: Instant,
    frame_budget: Duration,
}

impl SystemClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            last: Instant::now(),
            frame_budget: Duration::from_secs_f32(1.0 / target_fps.max(1) as f32),
        }
    }
}

impl Clock for SystemClock {
    fn elapsed(&mut self) -> f32 {
        let since = self.last.elapsed();
        if since < self.frame_budget {
            std::thread::sleep(self.frame_budget - since);
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt.min(MAX_FRAME_DT)
    }
}

/// Clock that always reports the same dt
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    dt: f32,
}

impl FixedClock {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }
}

impl Clock for FixedClock {
    fn elapsed(&mut self) -> f32 {
        self.dt
    }
}
