//! Periodic lower-fill refresh for hosts without a value-set hook.
//!
//! When programmatic writes to the value cannot be observed, the lower fill
//! would drift from the value. A fixed-period poll re-derives it instead.

use std::time::Duration;

use seekbar_ui::Interval;

use crate::constants::REFRESH_INTERVAL;

/// The fallback refresh loop.
#[derive(Debug, Clone, Copy)]
pub struct FallbackRefresh {
    interval: Interval,
}

impl Default for FallbackRefresh {
    fn default() -> Self {
        Self::new(REFRESH_INTERVAL)
    }
}

impl FallbackRefresh {
    pub fn new(period: Duration) -> Self {
        Self {
            interval: Interval::new(period),
        }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }

    /// Start ticking from `now`. A running loop is replaced, never doubled.
    pub fn start(&mut self, now: Duration) {
        if self.interval.is_running() {
            log::debug!("Fallback refresh: replacing running loop");
        }
        self.interval.start(now);
        log::debug!(
            "Fallback refresh: started with period {:?}",
            self.interval.period()
        );
    }

    pub fn stop(&mut self) {
        if self.interval.is_running() {
            log::debug!("Fallback refresh: stopped");
        }
        self.interval.stop();
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_running()
    }

    /// Whether at least one period elapsed since the last poll.
    ///
    /// Missed ticks collapse into one refresh; refreshing more than once for
    /// the same value would write the same style again.
    pub fn poll(&mut self, now: Duration) -> bool {
        let ticks = self.interval.poll(now);
        if ticks > 1 {
            log::trace!("Fallback refresh: {} ticks collapsed", ticks);
        }
        ticks > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_stopped_loop_never_ticks() {
        let mut refresh = FallbackRefresh::default();
        assert_eq!(refresh.period(), ms(100));
        assert!(!refresh.is_running());
        assert!(!refresh.poll(ms(10_000)));
    }

    #[test]
    fn test_ticks_every_period() {
        let mut refresh = FallbackRefresh::default();
        refresh.start(ms(0));
        assert!(!refresh.poll(ms(99)));
        assert!(refresh.poll(ms(100)));
        assert!(!refresh.poll(ms(150)));
        assert!(refresh.poll(ms(200)));
    }

    #[test]
    fn test_missed_ticks_collapse() {
        let mut refresh = FallbackRefresh::default();
        refresh.start(ms(0));
        assert!(refresh.poll(ms(550)));
        assert!(!refresh.poll(ms(560)));
        assert!(refresh.poll(ms(600)));
    }

    #[test]
    fn test_restart_replaces_schedule() {
        let mut refresh = FallbackRefresh::new(ms(50));
        refresh.start(ms(0));
        refresh.start(ms(40));
        assert!(!refresh.poll(ms(60)));
        assert!(refresh.poll(ms(90)));
    }

    #[test]
    fn test_stop_cancels() {
        let mut refresh = FallbackRefresh::default();
        refresh.start(ms(0));
        refresh.stop();
        assert!(!refresh.is_running());
        assert!(!refresh.poll(ms(1_000)));
    }
}
