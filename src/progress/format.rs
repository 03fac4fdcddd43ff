//! Fixed-width formatting of throughput, durations and counters.
//!
//! Every helper here produces text whose visible width is stable across
//! redraws, so the columns of consecutive progress lines stay aligned.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use linebar::progress::format::{format_speed, format_time};
//!
//! assert_eq!(format_speed(1_500_000.0, "it"), " 1.50M it/s");
//! assert_eq!(format_speed(0.02, "it"), " 50.0 s/it");
//!
//! let plain = console::strip_ansi_codes(&format_time(Duration::from_secs(65), false)).into_owned();
//! assert_eq!(plain, "01:05");
//! ```

use std::fmt::Write as _;
use std::time::Duration;

use crate::terminal::codes::{BRIGHT, FG_BLUE, FG_CYAN, FG_DEFAULT, FG_MAGENTA, RESET};

/// Magnitude suffixes, each a factor of 1000 above the previous one.
pub const SCALES: [&str; 8] = ["", "k", "M", "G", "T", "P", "E", "Z"];

const ONE_HOUR: Duration = Duration::from_secs(3600);

/// Scale `num` into `[0, 1000)` and pick a precision for it.
///
/// Returns the scaled number, the number of decimals to print (2 under 10,
/// 1 under 100, 0 under 1000) and the magnitude suffix. The thresholds sit
/// just under the rounding boundary so that `9.996` prints as `10.0` rather
/// than `10.00`.
pub fn format_sizeof(mut num: f64) -> (f64, usize, &'static str) {
    const DIVISOR: f64 = 1000.0;

    for scale in SCALES {
        if num.abs() < 9.995 {
            return (num, 2, scale);
        }
        if num.abs() < 99.95 {
            return (num, 1, scale);
        }
        if num.abs() < 999.5 {
            return (num, 0, scale);
        }
        num /= DIVISOR;
    }
    (num, 0, SCALES[SCALES.len() - 1])
}

/// Render a throughput in `unit` per second.
///
/// Rates slower than one unit per second are inverted and shown as seconds
/// per unit instead. The number is right-aligned in a 5 column field.
pub fn format_speed(speed: f64, unit: &str) -> String {
    if !speed.is_finite() || speed == 0.0 {
        return unknown_speed(unit);
    }

    let (speed, suffix) = if speed.abs() < 1.0 {
        (1.0 / speed, format!("s/{unit}"))
    } else {
        (speed, format!("{unit}/s"))
    };
    let (num, places, scale) = format_sizeof(speed);
    format!("{num:>5.places$}{scale} {suffix}")
}

/// Placeholder shown before any throughput has been measured.
pub fn unknown_speed(unit: &str) -> String {
    format!("    ?? {unit}/s")
}

/// Render `dt` as `MM:SS`, or `HH:MM:SS` when `force_hours` is set or `dt`
/// reaches one hour. Fractional seconds are truncated.
pub fn format_time(dt: Duration, force_hours: bool) -> String {
    let total_secs = dt.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs / 60) % 60;
    let seconds = total_secs % 60;

    let mut out = String::new();
    if force_hours || hours > 0 {
        let _ = write!(out, "{FG_MAGENTA}{BRIGHT}{hours:02}{FG_DEFAULT}:");
    }
    let _ = write!(
        out,
        "{FG_CYAN}{BRIGHT}{minutes:02}{FG_DEFAULT}:{FG_BLUE}{BRIGHT}{seconds:02}{RESET}"
    );
    out
}

/// Render the `elapsed/estimated` pair shown for bars with a known total.
///
/// When either side needs an hours field both sides get one. A missing
/// estimate is shown as `??` padded to the width of a real one.
pub fn format_time_pair(elapsed: Duration, estimated: Option<Duration>) -> String {
    let more_than_hour = elapsed >= ONE_HOUR || estimated.is_some_and(|e| e >= ONE_HOUR);

    let mut out = format_time(elapsed, more_than_hour);
    out.push('/');
    match estimated {
        Some(estimated) => out.push_str(&format_time(estimated, more_than_hour)),
        None if more_than_hour => out.push_str("??      "),
        None => out.push_str("??   "),
    }
    out
}

/// Number of decimal digits in `n`. Zero has no digits.
pub fn count_places(mut n: u64) -> usize {
    let mut places = 0;
    while n != 0 {
        places += 1;
        n /= 10;
    }
    places
}
