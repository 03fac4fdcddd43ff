//! Layout of the single progress line.
//!
//! A line is made of three parts:
//!
//! ```text
//!  50% 050/100|description         |  1.50k it/s [00:03/00:06]
//! └── prefix ─┘└──────── bar ──────┘└─────────── suffix ──────┘
//! ```
//!
//! The prefix and suffix are laid out first; the bar takes whatever columns
//! remain. Everything here is pure: the caller decides when to draw and
//! where the text goes.

use std::iter::Peekable;
use std::time::Duration;

use super::estimator::estimated_total;
use super::format::{count_places, format_speed, format_time, format_time_pair, unknown_speed};
use crate::terminal::codes::{
    BG_BLACK, BG_RED, BG_WHITE, BRIGHT, FG_BLACK, FG_RED, FG_WHITE, FG_YELLOW, RESET,
};
use crate::terminal::{char_width, truncate_visible, visible_width};

/// Everything needed to compose one progress line.
#[derive(Debug, Clone)]
pub struct LineState<'a> {
    /// Units completed so far.
    pub count: u64,
    /// Expected number of units, if known.
    pub total: Option<u64>,
    /// Time since the bar was started.
    pub elapsed: Duration,
    /// Last measured throughput in units per second.
    pub speed: Option<f64>,
    /// Text overlaid on the bar.
    pub description: &'a str,
    /// Unit label used in the throughput.
    pub unit: &'a str,
    /// Column budget for the whole line.
    pub columns: usize,
}

/// Completion percentage, `count * 100 / total` rounded down.
///
/// Not clamped: a count past its total yields more than 100. A zero total
/// counts as complete.
pub fn percent(count: u64, total: u64) -> u64 {
    if total == 0 {
        return 100;
    }
    let p = u128::from(count) * 100 / u128::from(total);
    u64::try_from(p).unwrap_or(u64::MAX)
}

/// Build the `NNN% count/total` prefix, or the bare count without a total.
///
/// The count is zero-padded to the digit width of the total so that the
/// columns do not shift while it grows.
pub fn prefix(count: u64, total: Option<u64>) -> String {
    match total {
        Some(total) => {
            let places = count_places(total);
            format!(
                "{:>3}% {count:0places$}/{BRIGHT}{total}{RESET}",
                percent(count, total)
            )
        }
        None => count.to_string(),
    }
}

/// Build the throughput and `[elapsed/estimated]` suffix.
pub fn suffix(state: &LineState<'_>) -> String {
    let speed = match state.speed {
        Some(speed) => format_speed(speed, state.unit),
        None => unknown_speed(state.unit),
    };

    let times = match state.total {
        Some(total) => format_time_pair(
            state.elapsed,
            estimated_total(total, state.count, state.elapsed),
        ),
        None => format_time(state.elapsed, false),
    };

    format!("{speed} {FG_YELLOW}[{RESET}{times}{FG_YELLOW}]{RESET}")
}

/// Render a `|...|` bar exactly `width` columns wide.
///
/// The inner `width - 2` columns are split at `percent` (clamped to
/// `[0, 100]`) into a filled and an empty segment. `text` is written into the
/// filled segment first and spills into the empty one; segments are sized in
/// display columns and control characters show as blanks. With `overrun` set,
/// the bar is painted red instead of black and white.
///
/// Returns an empty string when `width < 2`.
pub fn render_bar(percent: u64, width: usize, text: &str, overrun: bool) -> String {
    if width < 2 {
        return String::new();
    }
    let inner = width - 2;
    let filled = filled_width(percent, inner);
    let empty = inner - filled;

    let mut chars = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .peekable();
    let s1 = fill_segment(&mut chars, filled);
    let s2 = fill_segment(&mut chars, empty);

    let (filled_style, empty_style) = if overrun {
        (format!("{BG_RED}{FG_WHITE}"), format!("{BG_WHITE}{FG_RED}"))
    } else {
        (format!("{BG_BLACK}{FG_WHITE}"), format!("{BG_WHITE}{FG_BLACK}"))
    };

    format!("|{filled_style}{s1}{empty_style}{s2}{RESET}|")
}

/// Columns of the filled segment for `percent` of `inner` columns.
pub fn filled_width(percent: u64, inner: usize) -> usize {
    let percent = percent.min(100) as usize;
    percent * inner / 100
}

/// Take chars while they fit in `width` display columns, then pad with
/// blanks. A wide char that does not fit is left for the next segment.
fn fill_segment<I: Iterator<Item = char>>(chars: &mut Peekable<I>, width: usize) -> String {
    let mut segment = String::new();
    let mut used = 0;
    while let Some(&c) = chars.peek() {
        let w = char_width(c);
        if used + w > width {
            break;
        }
        segment.push(c);
        used += w;
        chars.next();
    }
    segment.extend(std::iter::repeat(' ').take(width - used));
    segment
}

/// Compose the full line, without the trailing newline.
///
/// The visible width of the result never exceeds `state.columns`; when the
/// prefix and suffix alone do not fit, the line is cut at the budget.
pub fn compose_line(state: &LineState<'_>) -> String {
    let prefix = prefix(state.count, state.total);
    let suffix = suffix(state);

    let used = visible_width(&prefix) + visible_width(&suffix);
    let free = state.columns.saturating_sub(used);

    let (pct, overrun) = match state.total {
        Some(total) => {
            let pct = percent(state.count, total);
            (pct, pct > 100 || state.count > total)
        }
        None => (0, false),
    };

    let line = format!(
        "{prefix}{}{suffix}",
        render_bar(pct, free, state.description, overrun)
    );

    if visible_width(&line) > state.columns {
        let mut cut = truncate_visible(&line, state.columns);
        cut.push_str(RESET);
        cut
    } else {
        line
    }
}
