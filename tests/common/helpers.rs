#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use linebar::{ManualClock, ProgressBar, ProgressBarBuilder};

// Common test constants
pub const TEST_COLUMNS: u16 = 80;
pub const TEST_INTERVAL: Duration = Duration::from_millis(200);
/// Cursor-up followed by erase-line, emitted before every redraw but the first.
pub const UP_ERASE: &str = "\x1b[1A\x1b[2K";

const NORMAL_FILLED: &str = "|\x1b[40m\x1b[37m";
const OVERRUN_FILLED: &str = "|\x1b[41m\x1b[37m";
const EMPTY_START: &str = "\x1b[47m";
const BAR_END: &str = "\x1b[0m|";

/// An in-memory sink whose clones share one buffer.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).expect("sink received invalid UTF-8")
    }

    /// Return everything written so far and clear the buffer.
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.0.lock().unwrap());
        String::from_utf8(bytes).expect("sink received invalid UTF-8")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A sink that rejects every write.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Builder preconfigured with a capturing sink, a manual clock and a fixed width.
pub fn create_test_builder() -> (ProgressBarBuilder, SharedBuffer, ManualClock) {
    let sink = SharedBuffer::new();
    let clock = ManualClock::new();
    let builder = ProgressBarBuilder::new()
        .columns(TEST_COLUMNS)
        .min_interval(TEST_INTERVAL)
        .sink(sink.clone())
        .clock(clock.clone());
    (builder, sink, clock)
}

/// A started bar with the given total.
pub fn create_started_bar(total: Option<u64>) -> (ProgressBar, SharedBuffer, ManualClock) {
    let (mut builder, sink, clock) = create_test_builder();
    if let Some(total) = total {
        builder = builder.total(total);
    }
    let mut bar = builder.build();
    bar.start().expect("Failed to start bar");
    (bar, sink, clock)
}

/// Remove escape sequences.
pub fn strip(s: &str) -> String {
    console::strip_ansi_codes(s).into_owned()
}

/// Split raw sink output into the pieces written per redraw.
pub fn frames(output: &str) -> Vec<&str> {
    output.split_inclusive('\n').collect()
}

/// The visible text of the last line drawn.
pub fn last_line(output: &str) -> String {
    let frame = frames(output).pop().expect("no output");
    strip(frame.trim_start_matches(UP_ERASE)).trim_end_matches('\n').to_string()
}

/// Locate the bar in a composed line and return
/// `(filled_text, empty_text, overrun)`.
pub fn bar_segments(line: &str) -> Option<(String, String, bool)> {
    let (start, overrun) = match line.find(NORMAL_FILLED) {
        Some(i) => (i + NORMAL_FILLED.len(), false),
        None => (line.find(OVERRUN_FILLED)? + OVERRUN_FILLED.len(), true),
    };
    let rest = &line[start..];
    let split = rest.find(EMPTY_START)?;
    let filled = rest[..split].to_string();
    // Skip the background code and the 5 byte foreground code after it.
    let rest = &rest[split + EMPTY_START.len() + "\x1b[30m".len()..];
    let end = rest.find(BAR_END)?;
    Some((filled, rest[..end].to_string(), overrun))
}

/// Asserts that every frame after the first starts with exactly one
/// cursor-up/erase-line pair.
pub fn assert_redraw_framing(output: &str) {
    for (i, frame) in frames(output).iter().enumerate() {
        if i == 0 {
            assert!(!frame.starts_with(UP_ERASE), "first frame must not move the cursor");
        } else {
            assert!(frame.starts_with(UP_ERASE), "frame {i} lacks cursor reposition: {frame:?}");
            assert!(
                !frame[UP_ERASE.len()..].starts_with(UP_ERASE),
                "frame {i} repositions twice"
            );
        }
        assert_eq!(frame.matches('\n').count(), 1);
    }
}
