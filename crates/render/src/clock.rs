use std::time::{Duration, Instant};

/// Fixed-rate frame pacing.
///
/// Each [`tick`] sleeps off whatever remains of the current frame interval.
/// If a frame overruns its budget the clock resynchronizes instead of
/// trying to catch up with a burst of short frames.
///
/// [`tick`]: FrameClock::tick
pub struct FrameClock {
    interval: Duration,
    deadline: Instant,
}

impl FrameClock {
    /// Creates a clock targeting the given frame rate.
    #[must_use]
    pub fn new(fps: u32) -> Self {
        let interval = Duration::from_secs_f64(1.0 / f64::from(fps.max(1)));
        Self {
            interval,
            deadline: Instant::now() + interval,
        }
    }

    /// Blocks until the current frame's deadline has passed.
    pub fn tick(&mut self) {
        let now = Instant::now();
        if now < self.deadline {
            std::thread::sleep(self.deadline - now);
            self.deadline += self.interval;
        } else {
            // Overran the frame budget; start fresh from here.
            self.deadline = now + self.interval;
        }
    }
}
