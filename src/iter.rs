//! Iterator adapters that drive a progress bar from a loop.
//!
//! Wrapping an iterator with [`ProgressIteratorExt::progress`] starts the bar
//! when the first element is requested and records one completed element on
//! every later request, including the final one that returns `None`. The
//! count therefore reflects elements whose loop body has finished.
//!
//! When [`Iterator::size_hint`] gives an exact length it becomes the total.
//!
//! # Example
//!
//! ```rust
//! use linebar::{ProgressBar, ProgressIteratorExt};
//!
//! let bar = ProgressBar::builder().sink(std::io::sink()).build();
//! let mut sum = 0;
//! for x in vec![1, 2, 3].into_iter().progress_with(bar) {
//!     sum += x;
//! }
//! assert_eq!(sum, 6);
//! ```

use std::ops::Range;

use tracing::warn;

use crate::progress::ProgressBar;

/// An iterator adapter that updates a [`ProgressBar`] once per element.
///
/// The bar is finalized when the adapter is dropped.
pub struct ProgressIter<I> {
    iter: I,
    bar: ProgressBar,
    primed: bool,
    exhausted: bool,
}

impl<I> ProgressIter<I> {
    /// Creates a new `ProgressIter`.
    ///
    /// Note: This is usually constructed via [`ProgressIteratorExt`] methods.
    pub fn new(iter: I, bar: ProgressBar) -> Self {
        Self {
            iter,
            bar,
            primed: false,
            exhausted: false,
        }
    }

    /// The bar driven by this iterator.
    pub fn bar(&self) -> &ProgressBar {
        &self.bar
    }

    /// Mutable access to the bar, e.g. to change the description mid-loop.
    pub fn bar_mut(&mut self) -> &mut ProgressBar {
        &mut self.bar
    }

    fn step(&mut self) {
        let result = if self.primed {
            self.bar.update(1)
        } else {
            self.primed = true;
            if self.bar.is_started() {
                Ok(())
            } else {
                self.bar.start()
            }
        };

        if let Err(e) = result {
            warn!(error = %e, "progress bar output failed, disabling it");
            self.bar.set_disabled(true);
        }
    }
}

impl<I: Iterator> Iterator for ProgressIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        self.step();

        let item = self.iter.next();
        if item.is_none() {
            self.exhausted = true;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            (0, Some(0))
        } else {
            self.iter.size_hint()
        }
    }
}

/// Extension trait to attach a progress bar to any Iterator.
pub trait ProgressIteratorExt: Iterator + Sized {
    /// Wrap in a default bar drawing to stderr, with the total taken from an
    /// exact `size_hint`.
    fn progress(self) -> ProgressIter<Self> {
        let bar = match exact_len(&self) {
            Some(total) => ProgressBar::with_total(total),
            None => ProgressBar::new(),
        };
        ProgressIter::new(self, bar)
    }

    /// Like [`progress`](Self::progress), with a description.
    fn progress_with_description(self, description: impl Into<String>) -> ProgressIter<Self> {
        let mut iter = self.progress();
        iter.bar.set_description(description);
        iter
    }

    /// Wrap using an already configured bar.
    ///
    /// If the bar has no total and the iterator knows its length, the length
    /// is used.
    fn progress_with(self, mut bar: ProgressBar) -> ProgressIter<Self> {
        if bar.total().is_none() {
            bar.set_total(exact_len(&self));
        }
        ProgressIter::new(self, bar)
    }
}

impl<I: Iterator> ProgressIteratorExt for I {}

fn exact_len<I: Iterator>(iter: &I) -> Option<u64> {
    match iter.size_hint() {
        (lower, Some(upper)) if lower == upper => Some(lower as u64),
        _ => None,
    }
}

/// `0..end` wrapped in a progress bar.
pub fn trange(end: u64) -> ProgressIter<Range<u64>> {
    (0..end).progress()
}
