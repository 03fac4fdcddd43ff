//! Time sources used to measure progress.
//!
//! A [`ProgressBar`](crate::ProgressBar) never calls [`Instant::now`] directly;
//! it asks its [`Clock`]. Production code uses [`SystemClock`]. Tests and
//! simulations use [`ManualClock`], which only moves when told to.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use linebar::clock::{Clock, ManualClock};
//!
//! let clock = ManualClock::new();
//! let handle = clock.clone();
//! let t0 = clock.now();
//!
//! handle.advance(Duration::from_millis(250));
//! assert_eq!(clock.now() - t0, Duration::from_millis(250));
//! ```

use std::fmt;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::{Duration, Instant};

/// A source of monotonic timestamps.
pub trait Clock: Send {
    /// Return the current instant.
    fn now(&self) -> Instant;
}

/// The wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A synthetic clock that advances only through [`ManualClock::advance`].
///
/// Clones share the same offset, so a test can keep one handle while the bar
/// owns another.
#[derive(Clone)]
pub struct ManualClock {
    base: Instant,
    offset_nanos: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock frozen at the current instant.
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset_nanos: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Move the clock forward by `dt`.
    pub fn advance(&self, dt: Duration) {
        let nanos = u64::try_from(dt.as_nanos()).unwrap_or(u64::MAX);
        self.offset_nanos.fetch_add(nanos, Ordering::Relaxed);
    }

    /// Total time this clock has been advanced by.
    pub fn offset(&self) -> Duration {
        Duration::from_nanos(self.offset_nanos.load(Ordering::Relaxed))
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualClock")
            .field("offset", &self.offset())
            .finish()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.offset()
    }
}
