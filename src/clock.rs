/// Fixed-rate frame pacing.

use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Frame budget for `fps`.  A zero rate is treated as 1 FPS.
    pub fn frame_duration(fps: u32) -> Duration {
        Duration::from_secs(1) / fps.max(1)
    }

    /// Block until one `1/fps` frame has passed since the previous tick and
    /// return the time the frame actually took.
    pub fn tick(&mut self, fps: u32) -> Duration {
        let budget = Self::frame_duration(fps);
        let elapsed = self.last_tick.elapsed();
        if elapsed < budget {
            thread::sleep(budget - elapsed);
        }
        let now = Instant::now();
        let frame_time = now - self.last_tick;
        self.last_tick = now;
        frame_time
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
