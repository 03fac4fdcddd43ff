//! The [`ProgressBar`] itself: lifecycle, throttled updates and finalization.
//!
//! A bar owns exactly one terminal line. The first draw writes the line
//! followed by a newline; every later draw moves the cursor back up, erases
//! the line and writes the new one in its place.
//!
//! # Examples
//!
//! ```rust
//! use linebar::ProgressBarBuilder;
//!
//! # fn main() -> linebar::Result<()> {
//! let mut bar = ProgressBarBuilder::new().total(3).sink(std::io::sink()).build();
//! bar.start()?;
//! for _ in 0..3 {
//!     bar.update(1)?;
//! }
//! bar.close()?;
//! assert_eq!(bar.count(), 3);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::io::Write;
use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use super::builder::ProgressBarBuilder;
use super::config::BarConfig;
use super::estimator::Estimator;
use super::render::{compose_line, LineState};
use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::terminal::codes::{cursor_up, ERASE_LINE};
use crate::terminal::console_columns;

/// A single-line terminal progress bar.
pub struct ProgressBar {
    config: BarConfig,
    sink: Box<dyn Write + Send>,
    clock: Box<dyn Clock>,
    estimator: Estimator,
    count: u64,
    start_time: Option<Instant>,
    total_redraws: u64,
    closed: bool,
}

impl ProgressBar {
    /// A bar with the default options and no known total, drawing to stderr.
    pub fn new() -> Self {
        ProgressBarBuilder::new().build()
    }

    /// A bar drawing to stderr with the given total.
    pub fn with_total(total: u64) -> Self {
        ProgressBarBuilder::new().total(total).build()
    }

    /// Start configuring a bar.
    pub fn builder() -> ProgressBarBuilder {
        ProgressBarBuilder::new()
    }

    pub(crate) fn from_parts(
        config: BarConfig,
        sink: Box<dyn Write + Send>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            estimator: Estimator::new(config.min_interval),
            config,
            sink,
            clock,
            count: 0,
            start_time: None,
            total_redraws: 0,
            closed: false,
        }
    }

    /// Start timing and draw the initial line.
    ///
    /// Starting twice returns [`Error::AlreadyStarted`] without touching the
    /// bar or writing anything.
    pub fn start(&mut self) -> Result<()> {
        if self.start_time.is_some() {
            return Err(Error::AlreadyStarted);
        }

        let now = self.clock.now();
        self.start_time = Some(now);
        self.estimator.begin(self.count, now);
        debug!(total = ?self.config.total, disabled = self.config.disabled, "progress bar started");

        if self.config.disabled {
            return Ok(());
        }
        self.draw(now)
    }

    /// Record `n` more completed units, redrawing if the throttle allows.
    pub fn update(&mut self, n: u64) -> Result<()> {
        if self.start_time.is_none() {
            return Err(Error::NotStarted);
        }

        self.count = self.count.saturating_add(n);
        if self.config.disabled {
            return Ok(());
        }

        let now = self.clock.now();
        if self.estimator.should_redraw(self.count, now) {
            self.estimator.record_redraw(self.count, now);
            self.draw(now)?;
        }
        Ok(())
    }

    /// Redraw immediately, bypassing the throttle.
    pub fn refresh(&mut self) -> Result<()> {
        if self.start_time.is_none() {
            return Err(Error::NotStarted);
        }
        if self.config.disabled {
            return Ok(());
        }

        let now = self.clock.now();
        self.estimator.record_redraw(self.count, now);
        self.draw(now)
    }

    /// Finalize the bar.
    ///
    /// With `leave` set the final state is drawn one last time, otherwise the
    /// line is erased, provided one was ever drawn. Bars that were never
    /// started, or are disabled, write nothing. Only the first call has an
    /// effect; dropping the bar afterwards does nothing.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        if self.start_time.is_none() || self.config.disabled {
            return Ok(());
        }

        debug!(
            count = self.count,
            total_redraws = self.total_redraws,
            leave = self.config.leave,
            "progress bar finished"
        );

        if self.config.leave {
            let now = self.clock.now();
            self.estimator.record_redraw(self.count, now);
            self.draw(now)
        } else if self.total_redraws > 0 {
            self.sink
                .write_all(format!("{}{ERASE_LINE}", cursor_up(1)).as_bytes())?;
            self.sink.flush()?;
            Ok(())
        } else {
            Ok(())
        }
    }

    fn draw(&mut self, now: Instant) -> Result<()> {
        let columns = match self.config.columns {
            Some(columns) => columns,
            None => console_columns(),
        };

        let line = compose_line(&LineState {
            count: self.count,
            total: self.config.total,
            elapsed: self.elapsed_at(now),
            speed: self.estimator.estimated_speed(),
            description: &self.config.description,
            unit: &self.config.unit,
            columns: usize::from(columns),
        });

        let mut out = String::with_capacity(line.len() + 16);
        if self.total_redraws > 0 {
            out.push_str(&cursor_up(1));
            out.push_str(ERASE_LINE);
        }
        out.push_str(&line);
        out.push('\n');

        self.sink.write_all(out.as_bytes())?;
        self.sink.flush()?;

        self.total_redraws += 1;
        trace!(
            count = self.count,
            steps_to_next_redraw = ?self.estimator.steps_to_next_redraw(),
            "progress bar redrawn"
        );
        Ok(())
    }

    fn elapsed_at(&self, now: Instant) -> Duration {
        self.start_time
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default()
    }

    /// Change the description. Legal mid-run.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.config.description = description.into();
    }

    /// Change the expected total. Legal mid-run.
    pub fn set_total(&mut self, total: Option<u64>) {
        self.config.total = total;
    }

    /// Change the minimum redraw interval. Legal mid-run.
    pub fn set_min_interval(&mut self, min_interval: Duration) {
        self.config.min_interval = min_interval;
        self.estimator.set_min_interval(min_interval);
    }

    /// Use a fixed column budget, or `None` to query the terminal.
    pub fn set_columns(&mut self, columns: Option<u16>) {
        self.config.columns = columns;
    }

    /// Keep or erase the line on finalize.
    pub fn set_leave(&mut self, leave: bool) {
        self.config.leave = leave;
    }

    /// Suppress (or resume) all output.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    /// Units completed so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Expected number of units, if known.
    pub fn total(&self) -> Option<u64> {
        self.config.total
    }

    /// Text shown inside the bar.
    pub fn description(&self) -> &str {
        &self.config.description
    }

    /// The active configuration.
    pub fn config(&self) -> &BarConfig {
        &self.config
    }

    /// Time since [`start`](Self::start), or `None` before it.
    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|_| self.elapsed_at(self.clock.now()))
    }

    /// Number of lines written so far, including the initial one.
    pub fn total_redraws(&self) -> u64 {
        self.total_redraws
    }

    /// Last measured throughput in units per second.
    pub fn estimated_speed(&self) -> Option<f64> {
        self.estimator.estimated_speed()
    }

    /// Whether [`start`](Self::start) has succeeded.
    pub fn is_started(&self) -> bool {
        self.start_time.is_some()
    }

    /// Whether output is suppressed.
    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Whether the bar has been finalized.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressBar")
            .field("config", &self.config)
            .field("count", &self.count)
            .field("started", &self.start_time.is_some())
            .field("total_redraws", &self.total_redraws)
            .field("closed", &self.closed)
            .finish()
    }
}

impl Drop for ProgressBar {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!(error = %e, "failed to finalize progress bar");
        }
    }
}
