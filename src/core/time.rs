//! Clock abstraction for testable time-dependent logic
//!
//! The engine reads wall-clock time only through [`Clock`], in whole epoch
//! seconds. Production code uses [`SystemClock`]; tests drive a
//! [`ManualClock`] forward explicitly.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Source of "now" for the queue engine, in epoch seconds
pub trait Clock: Send + Sync {
    /// Current time as whole seconds since the Unix epoch
    fn now(&self) -> u64;
}

/// Production clock backed by the system time
#[derive(Debug, Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        // Rounded to the nearest second, matching how enqueue times are recorded
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => round_to_secs(elapsed),
            Err(_) => 0,
        }
    }
}

fn round_to_secs(duration: Duration) -> u64 {
    (duration.as_millis() as u64 + 500) / 1000
}

/// Manually driven clock for deterministic tests and replays
///
/// Clones share the same underlying time, so a test can keep one handle
/// while the engine owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    current: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock starting at the given epoch second
    pub fn starting_at(epoch_secs: u64) -> Self {
        Self {
            current: Arc::new(AtomicU64::new(epoch_secs)),
        }
    }

    /// Move time forward by `secs` seconds
    pub fn advance(&self, secs: u64) {
        self.current.fetch_add(secs, Ordering::SeqCst);
    }

    /// Jump to an absolute epoch second (never moves backwards)
    pub fn set(&self, epoch_secs: u64) {
        self.current.fetch_max(epoch_secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u64 {
        self.current.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_recent() {
        let clock = SystemClock;
        // 2020-01-01T00:00:00Z
        assert!(clock.now() > 1_577_836_800);
    }

    #[test]
    fn test_round_to_secs() {
        assert_eq!(round_to_secs(Duration::from_millis(1499)), 1);
        assert_eq!(round_to_secs(Duration::from_millis(1500)), 2);
        assert_eq!(round_to_secs(Duration::from_millis(0)), 0);
    }

    #[test]
    fn test_manual_clock_advance_is_shared() {
        let clock = ManualClock::starting_at(100);
        let handle = clock.clone();

        handle.advance(10);

        assert_eq!(clock.now(), 110);
        assert_eq!(handle.now(), 110);
    }

    #[test]
    fn test_manual_clock_set_never_rewinds() {
        let clock = ManualClock::starting_at(50);

        clock.set(40);
        assert_eq!(clock.now(), 50);

        clock.set(75);
        assert_eq!(clock.now(), 75);
    }
}
