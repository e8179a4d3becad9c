//! Time management utilities
//!
//! All engine timestamps are monotonic milliseconds. The [`Clock`] trait is the
//! only source of "now"; frame deltas are derived from it by [`FrameTimer`].

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Source of monotonic time in milliseconds
pub trait Clock {
    /// Current monotonic time in milliseconds
    fn now_ms(&self) -> u64;
}

/// Wall clock backed by [`Instant`], counting from its creation
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose zero is the current instant
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Manually driven clock for deterministic simulation and tests
///
/// Clones share the same time, so a test can keep one copy and hand
/// another to the render loop.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    /// Create a clock reading `start_ms`
    pub fn starting_at(start_ms: u64) -> Self {
        Self { now: Rc::new(Cell::new(start_ms)) }
    }

    /// Jump to an absolute time; earlier values are ignored to stay monotonic
    pub fn set(&self, now_ms: u64) {
        self.now.set(self.now.get().max(now_ms));
    }

    /// Move time forward by `delta_ms`
    pub fn advance(&self, delta_ms: u64) {
        self.now.set(self.now.get().saturating_add(delta_ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Frame timer producing per-frame deltas (should be ticked once per frame)
#[derive(Debug, Clone)]
pub struct FrameTimer {
    last_frame_ms: u64,
    delta_ms: u64,
    total_ms: u64,
    frame_count: u64,
}

impl FrameTimer {
    /// Create a timer whose first delta is measured from `start_ms`
    pub fn starting_at(start_ms: u64) -> Self {
        Self {
            last_frame_ms: start_ms,
            delta_ms: 0,
            total_ms: 0,
            frame_count: 0,
        }
    }

    /// Advance to `now_ms` and return the elapsed milliseconds since the last tick
    pub fn tick(&mut self, now_ms: u64) -> u64 {
        self.delta_ms = now_ms.saturating_sub(self.last_frame_ms);
        self.last_frame_ms = self.last_frame_ms.max(now_ms);
        self.total_ms += self.delta_ms;
        self.frame_count += 1;
        self.delta_ms
    }

    /// Time since the last frame in milliseconds
    pub fn delta_ms(&self) -> u64 {
        self.delta_ms
    }

    /// Time since the last frame in seconds
    pub fn delta_secs(&self) -> f32 {
        self.delta_ms as f32 / 1000.0
    }

    /// Total time covered by all ticks
    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }

    /// Number of ticks so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Average FPS since the timer started
    pub fn average_fps(&self) -> f32 {
        if self.total_ms > 0 {
            self.frame_count as f32 * 1000.0 / self.total_ms as f32
        } else {
            0.0
        }
    }
}
