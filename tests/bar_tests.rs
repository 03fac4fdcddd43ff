//! Tests for the ProgressBar lifecycle and its terminal output.

use std::time::Duration;

use linebar::{Error, ProgressBar, ProgressBarBuilder};

mod common;
use common::helpers::*;

#[test]
fn test_start_draws_initial_line() {
    let (_bar, sink, _clock) = create_started_bar(Some(100));
    let out = sink.contents();
    assert_eq!(frames(&out).len(), 1);
    assert!(!out.starts_with(UP_ERASE));
    assert!(last_line(&out).starts_with("  0% 000/100|"));
    assert!(last_line(&out).ends_with("    ?? it/s [00:00/??   ]"));
}

#[test]
fn test_double_start_is_reported_without_output() {
    let (mut bar, sink, _clock) = create_started_bar(Some(10));
    bar.update(3).unwrap();
    sink.take();
    let redraws = bar.total_redraws();

    let err = bar.start().unwrap_err();
    assert!(matches!(err, Error::AlreadyStarted));
    assert!(err.is_misuse());
    assert_eq!(sink.contents(), "");
    assert_eq!(bar.count(), 3);
    assert_eq!(bar.total_redraws(), redraws);
}

#[test]
fn test_update_before_start_is_rejected() {
    let (builder, sink, _clock) = create_test_builder();
    let mut bar = builder.total(10).build();

    assert!(matches!(bar.update(1), Err(Error::NotStarted)));
    assert!(matches!(bar.refresh(), Err(Error::NotStarted)));
    assert_eq!(bar.count(), 0);
    drop(bar);
    assert_eq!(sink.contents(), "");
}

#[test]
fn test_half_done_with_frozen_clock() {
    let (mut bar, sink, _clock) = create_started_bar(Some(100));
    for _ in 0..50 {
        bar.update(1).unwrap();
    }

    let out = sink.contents();
    let line = last_line(&out);
    assert!(line.starts_with(" 50% 050/100|"), "{line:?}");

    let raw = frames(&out).pop().unwrap();
    let (filled, empty, overrun) = bar_segments(raw).expect("bar not found");
    let inner = filled.chars().count() + empty.chars().count();
    assert_eq!(filled.chars().count(), inner / 2);
    assert!(!overrun);
}

#[test]
fn test_redraws_overwrite_previous_line() {
    let (mut bar, sink, clock) = create_started_bar(Some(1_000));
    for _ in 0..1_000 {
        clock.advance(Duration::from_millis(7));
        bar.update(1).unwrap();
    }
    drop(bar);

    let out = sink.contents();
    assert!(frames(&out).len() > 2);
    assert_redraw_framing(&out);
    for frame in frames(&out) {
        assert!(strip(frame).trim_end_matches('\n').chars().count() <= TEST_COLUMNS as usize);
    }
}

#[test]
fn test_erase_on_finish_without_leave() {
    let (builder, sink, clock) = create_test_builder();
    let mut bar = builder.total(10).leave(false).build();
    bar.start().unwrap();
    for _ in 0..5 {
        clock.advance(Duration::from_secs(1));
        bar.update(1).unwrap();
    }
    assert!(bar.total_redraws() > 1);
    sink.take();

    drop(bar);
    assert_eq!(sink.contents(), UP_ERASE);
}

#[test]
fn test_leave_draws_final_state() {
    let (mut bar, sink, clock) = create_started_bar(Some(100));
    for _ in 0..100 {
        clock.advance(Duration::from_micros(10));
        bar.update(1).unwrap();
    }
    sink.take();

    bar.close().unwrap();
    let out = sink.take();
    assert_eq!(frames(&out).len(), 1);
    assert!(out.starts_with(UP_ERASE));
    assert!(last_line(&out).starts_with("100% 100/100|"));

    // closing again, or dropping, writes nothing more
    bar.close().unwrap();
    assert!(bar.is_closed());
    drop(bar);
    assert_eq!(sink.contents(), "");
}

#[test]
fn test_disabled_bar_writes_nothing() {
    let sink = SharedBuffer::new();
    let mut bar = ProgressBarBuilder::hidden()
        .total(10)
        .sink(sink.clone())
        .build();
    bar.start().unwrap();
    for _ in 0..10 {
        bar.update(1).unwrap();
    }
    bar.refresh().unwrap();
    assert_eq!(bar.count(), 10);
    assert_eq!(bar.total_redraws(), 0);
    drop(bar);
    assert_eq!(sink.contents(), "");
}

#[test]
fn test_enabled_after_silent_start_does_not_erase() {
    let (builder, sink, _clock) = create_test_builder();
    let mut bar = builder.total(10).disable(true).leave(false).build();
    bar.start().unwrap();
    bar.set_disabled(false);
    assert_eq!(bar.total_redraws(), 0);

    bar.close().unwrap();
    assert_eq!(sink.contents(), "");
}

#[test]
fn test_unstarted_bar_drops_silently() {
    let (builder, sink, _clock) = create_test_builder();
    drop(builder.total(10).build());
    assert_eq!(sink.contents(), "");
}

#[test]
fn test_speed_and_estimate_shown() {
    let (mut bar, sink, clock) = create_started_bar(Some(100));
    for _ in 0..10 {
        clock.advance(Duration::from_millis(100));
        bar.update(1).unwrap();
    }
    let line = last_line(&sink.contents());
    assert!(line.ends_with(" 10.0 it/s [00:01/00:10]"), "{line:?}");
    assert_eq!(bar.estimated_speed(), Some(10.0));
}

#[test]
fn test_slow_rate_shown_inverted() {
    let (mut bar, sink, clock) = create_started_bar(None);
    for _ in 0..3 {
        clock.advance(Duration::from_secs(2));
        bar.update(1).unwrap();
    }
    let line = last_line(&sink.contents());
    assert!(line.starts_with("3|"), "{line:?}");
    assert!(line.ends_with(" 2.00 s/it [00:06]"), "{line:?}");
}

#[test]
fn test_overrun_rendered_red() {
    let (mut bar, sink, _clock) = create_started_bar(Some(4));
    bar.update(6).unwrap();

    let out = sink.contents();
    let raw = frames(&out).pop().unwrap();
    let (_, _, overrun) = bar_segments(raw).expect("bar not found");
    assert!(overrun);
    assert!(last_line(&out).starts_with("150% 6/4|"));
}

#[test]
fn test_mid_run_changes() {
    let (mut bar, sink, _clock) = create_started_bar(Some(10));
    bar.update(5).unwrap();

    bar.set_description("phase two");
    bar.set_total(Some(20));
    bar.set_min_interval(Duration::from_millis(50));
    bar.refresh().unwrap();

    let line = last_line(&sink.contents());
    assert!(line.starts_with(" 25% 05/20|phase two"), "{line:?}");
    assert_eq!(bar.description(), "phase two");
    assert_eq!(bar.config().min_interval, Duration::from_millis(50));
}

#[test]
fn test_column_override_is_respected() {
    let (builder, sink, _clock) = create_test_builder();
    let mut bar = builder.total(10).columns(50).build();
    bar.start().unwrap();
    bar.update(1).unwrap();

    for frame in frames(&sink.contents()) {
        assert_eq!(strip(frame).trim_end_matches('\n').chars().count(), 50);
    }
}

#[test]
fn test_custom_unit() {
    let (builder, sink, clock) = create_test_builder();
    let mut bar = builder.unit("B").build();
    bar.start().unwrap();
    clock.advance(Duration::from_secs(1));
    bar.update(2_048).unwrap();

    let line = last_line(&sink.contents());
    assert!(line.contains(" 2.05k B/s"), "{line:?}");
}

#[test]
fn test_write_failure_propagates() {
    let mut bar = ProgressBar::builder()
        .total(10)
        .columns(80)
        .sink(FailingWriter)
        .build();
    let err = bar.start().unwrap_err();
    assert!(matches!(err, Error::IOError { .. }));
    assert!(!err.is_misuse());
    // dropping must not panic even though the final draw fails
}

#[test]
fn test_independent_bars_share_nothing() {
    let sink = SharedBuffer::new();
    let clock = linebar::ManualClock::new();
    let build = |total| {
        ProgressBarBuilder::new()
            .total(total)
            .columns(TEST_COLUMNS)
            .sink(sink.clone())
            .clock(clock.clone())
            .build()
    };

    let mut outer = build(2);
    outer.start().unwrap();
    for _ in 0..2 {
        let mut inner = build(3);
        inner.start().unwrap();
        for _ in 0..3 {
            inner.update(1).unwrap();
        }
        assert_eq!(inner.count(), 3);
        drop(inner);
        outer.update(1).unwrap();
    }
    assert_eq!(outer.count(), 2);
    assert!(last_line(&sink.contents()).starts_with("100% 2/2|"));
}

#[test]
fn test_builder_defaults() {
    let bar = ProgressBar::new();
    let config = bar.config();
    assert_eq!(config.total, None);
    assert_eq!(config.columns, None);
    assert!(config.leave);
    assert!(!config.disabled);
    assert_eq!(config.min_interval, Duration::from_millis(200));
    assert_eq!(config.unit, "it");
    assert!(!bar.is_started());
    assert_eq!(bar.elapsed(), None);

    assert_eq!(ProgressBar::with_total(5).total(), Some(5));
}
