//! Linebar draws single-line progress bars on a terminal.
//!
//! Each bar owns one line which it rewrites in place: percentage, counter,
//! a bar with an optional description, throughput and elapsed/estimated time.
//! Redraws are throttled adaptively so tight loops pay almost nothing for the
//! display.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use linebar::ProgressIteratorExt;
//!
//! for _ in (0..1000).progress_with_description("hello") {
//!     std::thread::sleep(std::time::Duration::from_millis(1));
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`progress`] - The [`ProgressBar`], its builder, the throttle and the line renderer
//! - [`iter`] - Iterator adapters that update a bar once per element
//! - [`clock`] - Time sources, including a manual clock for simulations
//! - [`terminal`] - Escape sequences and console size queries
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod clock;
pub mod error;
pub mod iter;
pub mod progress;
pub mod terminal;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use iter::{trange, ProgressIter, ProgressIteratorExt};
pub use progress::{BarConfig, ProgressBar, ProgressBarBuilder};
pub use terminal::console_size;
