//! Terminal plumbing: control sequences, size queries and width measurement.
//!
//! - `codes` - ANSI escape sequences for cursor movement, erasing and colours
//! - `size` - console size query with a fixed `25x80` fallback

pub mod codes;
pub(crate) mod size;

pub use size::{console_columns, console_size, FALLBACK_COLUMNS, FALLBACK_ROWS};

/// Display width of `s` once escape sequences are stripped.
pub fn visible_width(s: &str) -> usize {
    console::measure_text_width(s)
}

/// Display width of a single char: 2 for wide CJK/emoji, 0 for combining marks.
pub fn char_width(c: char) -> usize {
    let mut buf = [0u8; 4];
    console::measure_text_width(c.encode_utf8(&mut buf))
}

/// Cut `s` down to at most `width` visible columns, keeping escape sequences.
pub fn truncate_visible(s: &str, width: usize) -> String {
    console::truncate_str(s, width, "").into_owned()
}
