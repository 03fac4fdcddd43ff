//! Builder pattern implementation for creating [`ProgressBar`] instances.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use linebar::ProgressBarBuilder;
//!
//! let bar = ProgressBarBuilder::new()
//!     .description("hello")
//!     .total(1000)
//!     .min_interval(Duration::from_millis(100))
//!     .leave(false)
//!     .build();
//! assert_eq!(bar.total(), Some(1000));
//! ```
//!
//! Setters can be chained in any order; the last call for a given option wins.

use std::io::{self, Write};
use std::time::Duration;

use super::bar::ProgressBar;
use super::config::BarConfig;
use crate::clock::{Clock, SystemClock};

/// A builder used to create a [`ProgressBar`].
#[derive(Default)]
pub struct ProgressBarBuilder {
    config: BarConfig,
    sink: Option<Box<dyn Write + Send>>,
    clock: Option<Box<dyn Clock>>,
}

impl ProgressBarBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        ProgressBarBuilder::default()
    }

    /// Convenience function for a bar that never draws.
    pub fn hidden() -> Self {
        ProgressBarBuilder::default().disable(true)
    }

    /// Start from an existing configuration.
    pub fn from_config(config: BarConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Set the text shown inside the bar.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.config.description = description.into();
        self
    }

    /// Set the expected number of units.
    pub fn total(mut self, total: u64) -> Self {
        self.config.total = Some(total);
        self
    }

    /// Use a fixed column budget instead of querying the terminal.
    pub fn columns(mut self, columns: u16) -> Self {
        self.config.columns = Some(columns);
        self
    }

    /// Keep (`true`) or erase (`false`) the line once the bar is finalized.
    pub fn leave(mut self, leave: bool) -> Self {
        self.config.leave = leave;
        self
    }

    /// Suppress all output.
    pub fn disable(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Set the minimum time between two redraws.
    pub fn min_interval(mut self, min_interval: Duration) -> Self {
        self.config.min_interval = min_interval;
        self
    }

    /// Set the unit label, `"it"` by default.
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.config.unit = unit.into();
        self
    }

    /// Write to `sink` instead of stderr.
    pub fn sink(mut self, sink: impl Write + Send + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Read time from `clock` instead of the system clock.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Create the [`ProgressBar`] with the specified options.
    pub fn build(self) -> ProgressBar {
        ProgressBar::from_parts(
            self.config,
            self.sink.unwrap_or_else(|| Box::new(io::stderr())),
            self.clock.unwrap_or_else(|| Box::new(SystemClock)),
        )
    }
}
