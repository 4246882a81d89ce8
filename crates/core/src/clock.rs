// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction so the scheduler's deadline math can be driven by a
//! fake, deterministic clock in tests instead of real wall time.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Source of wall-clock time for the scheduler and timetable math.
pub trait Clock: Clone + Send + Sync {
    /// Monotonic instant. Used only to compute how long to sleep before
    /// the next pass; deadline comparisons themselves run on
    /// [`Clock::epoch_ms`].
    fn now(&self) -> Instant;

    /// Milliseconds since the Unix epoch. This is the time base every
    /// [`crate::job::Timetable`] field is expressed in, since the
    /// scheduler's deadline math (SPEC_FULL.md §4.8) is defined in wall
    /// time rather than monotonic ticks.
    fn epoch_ms(&self) -> u64;

    /// Block the calling thread until `deadline`. A `deadline` in the past
    /// returns immediately.
    fn sleep_until(&self, deadline: Instant) {
        let now = self.now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
    }
}

/// Real wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn epoch_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Deterministic, manually-advanced clock for tests.
#[derive(Debug, Clone)]
pub struct FakeClock {
    inner: Arc<Mutex<FakeClockState>>,
}

#[derive(Debug)]
struct FakeClockState {
    now: Instant,
    epoch_ms: u64,
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeClockState {
                now: Instant::now(),
                epoch_ms: 0,
            })),
        }
    }

    /// Advance both the monotonic and epoch clocks by `duration`.
    pub fn advance(&self, duration: Duration) {
        let mut state = self.lock();
        state.now += duration;
        state.epoch_ms += duration.as_millis() as u64;
    }

    fn lock(&self) -> parking_lot::MutexGuard<'_, FakeClockState> {
        self.inner.lock()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.lock().now
    }

    fn epoch_ms(&self) -> u64 {
        self.lock().epoch_ms
    }

    fn sleep_until(&self, _deadline: Instant) {
        // Tests advance the fake clock explicitly; sleeping here would hang.
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
