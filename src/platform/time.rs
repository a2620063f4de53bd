//! Frame pacing

use std::time::{Duration, Instant};

/// Monotonic frame counter plus a blocking pace-to-rate call
pub trait FrameClock {
    /// Frames completed so far
    fn now_ticks(&self) -> u64;
    /// Block until the next frame is due
    fn wait_for_next_frame(&mut self);
}

/// Wall-clock pacing at a fixed rate
#[derive(Debug, Clone)]
pub struct FixedRateClock {
    frame: Duration,
    next_deadline: Instant,
    ticks: u64,
}

impl FixedRateClock {
    pub fn new(rate: u32) -> Self {
        let frame = Duration::from_secs(1) / rate.max(1);
        Self {
            frame,
            next_deadline: Instant::now() + frame,
            ticks: 0,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }
}

impl FrameClock for FixedRateClock {
    fn now_ticks(&self) -> u64 {
        self.ticks
    }

    fn wait_for_next_frame(&mut self) {
        let now = Instant::now();
        if now < self.next_deadline {
            std::thread::sleep(self.next_deadline - now);
            self.next_deadline += self.frame;
        } else {
            // Running behind: drop the backlog instead of bursting
            self.next_deadline = now + self.frame;
        }
        self.ticks += 1;
    }
}

/// Clock that never sleeps (tests, headless fast-forward)
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    ticks: u64,
}

impl FrameClock for ManualClock {
    fn now_ticks(&self) -> u64 {
        self.ticks
    }

    fn wait_for_next_frame(&mut self) {
        self.ticks += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_counts() {
        let mut clock = ManualClock::default();
        clock.wait_for_next_frame();
        clock.wait_for_next_frame();
        assert_eq!(clock.now_ticks(), 2);
    }

    #[test]
    fn test_fixed_rate_paces() {
        let mut clock = FixedRateClock::new(200);
        assert_eq!(clock.frame_duration(), Duration::from_millis(5));
        let start = Instant::now();
        for _ in 0..4 {
            clock.wait_for_next_frame();
        }
        assert_eq!(clock.now_ticks(), 4);
        assert!(start.elapsed() >= Duration::from_millis(15));
    }
}
