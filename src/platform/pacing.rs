//! Fixed-period frame pacing

use std::time::{Duration, Instant};

use super::Clock;

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn sleep_ms(&mut self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

/// Sleeps away whatever is left of each frame period
///
/// Non-adaptive: a slow frame is not made up for later.
#[derive(Debug, Clone)]
pub struct FramePacer {
    frame_delay_ms: u64,
    frame_start: u64,
}

impl FramePacer {
    pub fn new(frame_delay_ms: u64) -> Self {
        Self {
            frame_delay_ms,
            frame_start: 0,
        }
    }

    #[inline]
    pub fn frame_delay_ms(&self) -> u64 {
        self.frame_delay_ms
    }

    /// Mark the start of a frame
    pub fn begin<C: Clock + ?Sized>(&mut self, clock: &C) {
        self.frame_start = clock.now_ms();
    }

    /// Block for the remainder of the frame period. Returns the time slept.
    pub fn finish<C: Clock + ?Sized>(&mut self, clock: &mut C) -> u64 {
        let frame_time = clock.now_ms().saturating_sub(self.frame_start);
        if frame_time < self.frame_delay_ms {
            let remaining = self.frame_delay_ms - frame_time;
            clock.sleep_ms(remaining);
            remaining
        } else {
            0
        }
    }
}
