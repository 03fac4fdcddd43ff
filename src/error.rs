//! Error handling for the linebar library.
//!
//! Only two kinds of failure exist: misuse of the bar lifecycle and I/O
//! failures on the output sink. Anything else (a count running past its total,
//! an undeterminable terminal size) degrades into a still-valid render and is
//! never surfaced as an error.

use std::io;
use thiserror::Error;

/// Errors that can happen when driving a progress bar.
#[derive(Error, Debug)]
pub enum Error {
    /// The bar was started a second time.
    ///
    /// This is a programming error in the caller. The failing call leaves the
    /// bar untouched and writes nothing.
    #[error("progress bar already started")]
    AlreadyStarted,

    /// The bar was updated or refreshed before being started.
    #[error("progress bar not started")]
    NotStarted,

    /// I/O Error.
    ///
    /// Wraps failures to write or flush the output sink. These are handed back
    /// to the caller unchanged, never retried.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

impl Error {
    /// Return `true` for lifecycle misuse as opposed to sink failures.
    pub fn is_misuse(&self) -> bool {
        matches!(self, Error::AlreadyStarted | Error::NotStarted)
    }
}

/// Result type alias for operations that can fail with a linebar error.
pub type Result<T> = std::result::Result<T, Error>;
