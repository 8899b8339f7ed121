//! Fixed-interval frame clock
//!
//! Gates simulation steps to a fixed millisecond interval using a host tick
//! counter that is allowed to wrap. At most one frame is consumed per call:
//! after a host stall the backlog drains one interval at a time (visible
//! slowdown, never a burst), and sub-interval remainders carry over so the
//! long-run rate does not drift.

/// Frame gate over a wrapping millisecond tick source
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    interval_ms: u32,
    /// Tick value at the previous call; None until the first call primes it
    prev_ms: Option<u32>,
    /// Unconsumed elapsed milliseconds, including any stall backlog
    carry_ms: u32,
}

impl FrameScheduler {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            // Tuning validation rejects a zero interval; this is the backstop
            interval_ms: interval_ms.max(1),
            prev_ms: None,
            carry_ms: 0,
        }
    }

    /// Feed the current tick count. Returns true when one frame interval has
    /// been consumed and the simulation should step.
    pub fn tick(&mut self, now_ms: u32) -> bool {
        let Some(prev) = self.prev_ms else {
            self.prev_ms = Some(now_ms);
            return false;
        };
        // Wrapping subtraction stays correct across counter rollover
        let elapsed = now_ms.wrapping_sub(prev);
        self.prev_ms = Some(now_ms);
        self.carry_ms = self.carry_ms.saturating_add(elapsed);
        if self.carry_ms >= self.interval_ms {
            self.carry_ms -= self.interval_ms;
            true
        } else {
            false
        }
    }

    /// Unconsumed milliseconds waiting on the next frame
    pub fn backlog_ms(&self) -> u32 {
        self.carry_ms
    }
}
