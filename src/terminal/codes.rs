//! ANSI control sequences used to decorate and reposition the progress line.
//!
//! Parameterised sequences are plain functions returning the encoded text;
//! fixed sequences are string constants.

/// `ESC [ {n} {suffix}`
fn with_count(n: u16, suffix: char) -> String {
    format!("\x1b[{n}{suffix}")
}

/// Move the cursor up `n` lines.
pub fn cursor_up(n: u16) -> String {
    with_count(n, 'A')
}

/// Move the cursor down `n` lines.
pub fn cursor_down(n: u16) -> String {
    with_count(n, 'B')
}

/// Move the cursor right `n` columns.
pub fn cursor_right(n: u16) -> String {
    with_count(n, 'C')
}

/// Move the cursor left `n` columns.
pub fn cursor_left(n: u16) -> String {
    with_count(n, 'D')
}

/// Move to column 1, `n` lines down.
pub fn cursor_next_line(n: u16) -> String {
    with_count(n, 'E')
}

/// Move to column 1, `n` lines up.
pub fn cursor_prev_line(n: u16) -> String {
    with_count(n, 'F')
}

/// Move to absolute column `n` (1-based).
pub fn cursor_to_column(n: u16) -> String {
    with_count(n, 'G')
}

/// Insert `n` blank lines at the cursor.
pub fn insert_lines(n: u16) -> String {
    with_count(n, 'L')
}

/// Delete `n` lines at the cursor.
pub fn delete_lines(n: u16) -> String {
    with_count(n, 'M')
}

/// Erase from the cursor to the end of the screen.
pub const ERASE_DISPLAY_DOWN: &str = "\x1b[J";
/// Erase from the start of the screen to the cursor.
pub const ERASE_DISPLAY_UP: &str = "\x1b[1J";
/// Erase the whole screen.
pub const ERASE_DISPLAY: &str = "\x1b[2J";
/// Erase from the cursor to the end of the line.
pub const ERASE_END_OF_LINE: &str = "\x1b[K";
/// Erase from the start of the line to the cursor.
pub const ERASE_START_OF_LINE: &str = "\x1b[1K";
/// Erase the whole current line.
pub const ERASE_LINE: &str = "\x1b[2K";

/// Reset all attributes and colours.
pub const RESET: &str = "\x1b[0m";
/// Bold / bright text.
pub const BRIGHT: &str = "\x1b[1m";
/// Dim text.
pub const DIM: &str = "\x1b[2m";
/// Underlined text.
pub const UNDERSCORE: &str = "\x1b[4m";
/// Blinking text.
pub const BLINK: &str = "\x1b[5m";
/// Swap foreground and background.
pub const REVERSE: &str = "\x1b[7m";
/// Invisible text.
pub const HIDDEN: &str = "\x1b[8m";

/// Black foreground.
pub const FG_BLACK: &str = "\x1b[30m";
/// Red foreground.
pub const FG_RED: &str = "\x1b[31m";
/// Green foreground.
pub const FG_GREEN: &str = "\x1b[32m";
/// Yellow foreground.
pub const FG_YELLOW: &str = "\x1b[33m";
/// Blue foreground.
pub const FG_BLUE: &str = "\x1b[34m";
/// Magenta foreground.
pub const FG_MAGENTA: &str = "\x1b[35m";
/// Cyan foreground.
pub const FG_CYAN: &str = "\x1b[36m";
/// White foreground.
pub const FG_WHITE: &str = "\x1b[37m";
/// Default foreground, with underscore.
pub const FG_DEFAULT_UNDERSCORE: &str = "\x1b[38m";
/// Default foreground.
pub const FG_DEFAULT: &str = "\x1b[39m";

/// Black background.
pub const BG_BLACK: &str = "\x1b[40m";
/// Red background.
pub const BG_RED: &str = "\x1b[41m";
/// Green background.
pub const BG_GREEN: &str = "\x1b[42m";
/// Yellow background.
pub const BG_YELLOW: &str = "\x1b[43m";
/// Blue background.
pub const BG_BLUE: &str = "\x1b[44m";
/// Magenta background.
pub const BG_MAGENTA: &str = "\x1b[45m";
/// Cyan background.
pub const BG_CYAN: &str = "\x1b[46m";
/// White background.
pub const BG_WHITE: &str = "\x1b[47m";
/// Default background.
pub const BG_DEFAULT: &str = "\x1b[49m";
