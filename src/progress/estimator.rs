//! Redraw throttling and throughput estimation.
//!
//! Redrawing on every unit of work would flood the terminal on fast loops, so
//! the [`Estimator`] predicts how many units will complete during one
//! `min_interval` and only asks for a redraw once that many have been counted.
//! The prediction is refreshed from the measured rate on every redraw, which
//! makes it converge up for slow loops (redraw almost every unit) and down for
//! fast ones (redraw every few thousand units).
//!
//! # Examples
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use linebar::progress::Estimator;
//!
//! let t0 = Instant::now();
//! let mut est = Estimator::new(Duration::from_millis(200));
//! est.begin(0, t0);
//!
//! // One unit took 10ms: expect 20 units per interval.
//! let t1 = t0 + Duration::from_millis(10);
//! assert!(!est.should_redraw(1, t1));
//! assert_eq!(est.steps_to_next_redraw(), Some(20));
//! ```

use std::time::{Duration, Instant};

/// Adaptive redraw throttle and rate tracker for a single bar.
#[derive(Debug, Clone)]
pub struct Estimator {
    min_interval: Duration,
    count_at_last_redraw: u64,
    last_redraw: Option<Instant>,
    steps_to_next_redraw: Option<u64>,
    estimated_speed: Option<f64>,
}

impl Estimator {
    /// Create an estimator that aims for at most one redraw per `min_interval`.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            count_at_last_redraw: 0,
            last_redraw: None,
            steps_to_next_redraw: None,
            estimated_speed: None,
        }
    }

    /// Record the initial, unconditional draw at `now`.
    pub fn begin(&mut self, count: u64, now: Instant) {
        self.count_at_last_redraw = count;
        self.last_redraw = Some(now);
    }

    /// Decide whether `count` has advanced far enough since the last redraw.
    ///
    /// The first call after [`begin`](Self::begin) seeds the step prediction
    /// by assuming a single unit took the whole time since the initial draw.
    pub fn should_redraw(&mut self, count: u64, now: Instant) -> bool {
        let Some(last) = self.last_redraw else {
            return true;
        };

        let min_interval = self.min_interval;
        let steps = *self.steps_to_next_redraw.get_or_insert_with(|| {
            extrapolate_steps(1, min_interval, now.saturating_duration_since(last))
        });

        count.saturating_sub(self.count_at_last_redraw) >= steps
    }

    /// Update the prediction and speed after a redraw at `now`.
    ///
    /// The speed is only replaced when at least one unit completed over a
    /// non-zero interval, so forced redraws keep the previous figure.
    pub fn record_redraw(&mut self, count: u64, now: Instant) {
        let units = count.saturating_sub(self.count_at_last_redraw);
        let dt = self
            .last_redraw
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();

        self.steps_to_next_redraw = Some(extrapolate_steps(units, self.min_interval, dt));

        if units > 0 && !dt.is_zero() {
            self.estimated_speed = Some(units as f64 / dt.as_secs_f64());
        }

        self.count_at_last_redraw = count;
        self.last_redraw = Some(now);
    }

    /// Change the target interval. Takes effect at the next redraw.
    pub fn set_min_interval(&mut self, min_interval: Duration) {
        self.min_interval = min_interval;
    }

    /// Target interval between redraws.
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Units still expected per redraw, once known.
    pub fn steps_to_next_redraw(&self) -> Option<u64> {
        self.steps_to_next_redraw
    }

    /// Last measured throughput in units per second.
    pub fn estimated_speed(&self) -> Option<f64> {
        self.estimated_speed
    }

    /// Count at the most recent redraw.
    pub fn count_at_last_redraw(&self) -> u64 {
        self.count_at_last_redraw
    }
}

/// `units * interval / dt`, floored, never below 1.
///
/// A zero `dt` means the rate cannot be measured; fall back to redrawing on
/// every update.
pub fn extrapolate_steps(units: u64, interval: Duration, dt: Duration) -> u64 {
    let dt = dt.as_nanos();
    if dt == 0 {
        return 1;
    }
    let steps = u128::from(units) * interval.as_nanos() / dt;
    u64::try_from(steps).unwrap_or(u64::MAX).max(1)
}

/// Projected total run time: `total * elapsed / count`.
///
/// Uses the average rate since the start rather than the instantaneous one,
/// which keeps the estimate from jumping around. `None` until `count > 0`.
pub fn estimated_total(total: u64, count: u64, elapsed: Duration) -> Option<Duration> {
    if count == 0 {
        return None;
    }
    let nanos = elapsed.as_nanos() * u128::from(total) / u128::from(count);
    Some(Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX)))
}
