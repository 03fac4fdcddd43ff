//! Configuration for a single progress bar.
//!
//! [`BarConfig`] holds every user-tunable knob with its default. It is filled
//! in by [`ProgressBarBuilder`](super::ProgressBarBuilder) and owned by the
//! bar afterwards.

use std::time::Duration;

/// Default minimum gap between two redraws.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(200);

/// Default unit label.
pub const DEFAULT_UNIT: &str = "it";

/// Configuration structure for a progress bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarConfig {
    /// Text overlaid on the bar.
    pub description: String,
    /// Expected number of units. `None` shows a bare counter.
    pub total: Option<u64>,
    /// Fixed column budget. `None` queries the terminal on every redraw.
    pub columns: Option<u16>,
    /// Keep the final line on screen when the bar is finalized.
    pub leave: bool,
    /// Suppress all output.
    pub disabled: bool,
    /// Minimum wall-clock gap between redraws.
    pub min_interval: Duration,
    /// Label for one unit of work, as in `it/s`.
    pub unit: String,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            description: String::new(),
            total: None,
            columns: None,
            leave: true,
            disabled: false,
            min_interval: DEFAULT_MIN_INTERVAL,
            unit: DEFAULT_UNIT.to_string(),
        }
    }
}
