//! Clock abstraction and host-polled timers.
//!
//! Widgets never block or spawn. They arm timers against timestamps read from
//! an injected [`Clock`], and the host polls them from its event loop. Tests
//! substitute [`ManualClock`] to step time deterministically.

use std::cell::Cell;
use std::time::Duration;
use web_time::Instant;

/// Source of monotonic timestamps, measured from an arbitrary origin.
pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// Wall clock backed by `web_time::Instant` (works on native and wasm).
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is the current instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    /// Create a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Move the clock forward by whole milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Jump to an absolute time. Going backwards is ignored.
    pub fn set(&self, now: Duration) {
        let current = self.now.get();
        if now >= current {
            self.now.set(now);
        } else {
            log::warn!("ManualClock: ignoring backwards jump from {current:?} to {now:?}");
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// A re-armable one-shot timer.
///
/// Arming an already armed timeout replaces its deadline, so only the most
/// recent arm can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeout {
    delay: Duration,
    deadline: Option<Duration>,
}

impl Timeout {
    /// Create a disarmed timeout that fires `delay` after each arm.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm (or re-arm) the timeout relative to `now`.
    pub fn arm(&mut self, now: Duration) {
        self.deadline = Some(now + self.delay);
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Fire if the deadline has passed. Returns `true` exactly once per arm.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// A periodic timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    next: Option<Duration>,
}

impl Interval {
    /// Create a stopped interval with the given period.
    ///
    /// A zero period is bumped to one millisecond so polling terminates.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start ticking from `now`, discarding any previous schedule.
    pub fn start(&mut self, now: Duration) {
        self.next = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next = None;
    }

    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    /// Number of ticks elapsed up to `now`, advancing the schedule past them.
    pub fn poll(&mut self, now: Duration) -> u32 {
        let Some(mut next) = self.next else {
            return 0;
        };
        let mut ticks = 0;
        while now >= next {
            ticks += 1;
            next += self.period;
        }
        self.next = Some(next);
        ticks
    }
}
