//! Progress module containing the progress-bar engine.
//!
//! # Overview
//!
//! - `bar` - The [`ProgressBar`] lifecycle: start, update, refresh, finalize
//! - `builder` - [`ProgressBarBuilder`] for fluent configuration
//! - `config` - [`BarConfig`] and its defaults
//! - `estimator` - Adaptive redraw throttling and rate/ETA estimation
//! - `render` - Fixed-width layout of the progress line
//! - `format` - Time, throughput and counter formatting
//!
//! # Examples
//!
//! ## Manual Updates
//!
//! ```rust
//! use linebar::progress::ProgressBar;
//!
//! # fn main() -> linebar::Result<()> {
//! let mut bar = ProgressBar::builder()
//!     .total(10)
//!     .description("working")
//!     .sink(std::io::sink())
//!     .build();
//!
//! bar.start()?;
//! for _ in 0..10 {
//!     bar.update(1)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Hidden Progress Bars
//!
//! ```rust
//! use linebar::progress::ProgressBarBuilder;
//!
//! let bar = ProgressBarBuilder::hidden().total(10).build();
//! assert!(bar.is_disabled());
//! ```

pub(crate) mod bar;
pub(crate) mod builder;
pub mod config;
pub mod estimator;
pub mod format;
pub mod render;

pub use bar::ProgressBar;
pub use builder::ProgressBarBuilder;
pub use config::BarConfig;
pub use estimator::Estimator;
pub use render::LineState;
