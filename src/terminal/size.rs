//! Console size queries.

use console::Term;

/// Rows reported when the terminal size cannot be determined.
pub const FALLBACK_ROWS: u16 = 25;
/// Columns reported when the terminal size cannot be determined.
pub const FALLBACK_COLUMNS: u16 = 80;

/// Return `(rows, columns)` of the controlling terminal.
///
/// stderr is queried first since that is where bars are drawn by default, then
/// stdout. When neither is a terminal (pipes, CI) this returns `(25, 80)`.
pub fn console_size() -> (u16, u16) {
    Term::stderr()
        .size_checked()
        .or_else(|| Term::stdout().size_checked())
        .filter(|&(rows, cols)| rows > 0 && cols > 0)
        .unwrap_or((FALLBACK_ROWS, FALLBACK_COLUMNS))
}

/// Current terminal width in columns.
pub fn console_columns() -> u16 {
    console_size().1
}
