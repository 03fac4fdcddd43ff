//! Runs the same loop at several speeds to show the adaptive redraw rate.
//!
//! `RUST_LOG=linebar=debug cargo run --example basic` also prints how many
//! redraws each bar needed.

use std::thread;
use std::time::Duration;

use color_eyre::Result;
use linebar::{ProgressBar, ProgressIteratorExt};
use tracing_subscriber::EnvFilter;

fn run(n: usize, per_loop: Duration) -> Result<()> {
    let data = vec![1u8; n];
    let bar = ProgressBar::builder()
        .min_interval(Duration::from_millis(100))
        .leave(true)
        .description("hello")
        .build();

    for _ in data.iter().progress_with(bar) {
        thread::sleep(per_loop);
    }
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stdout)
        .init();

    run(100_000, Duration::from_micros(1))?;
    run(10_000, Duration::from_micros(10))?;
    run(1_000, Duration::from_micros(100))?;
    run(100, Duration::from_millis(1))?;
    run(10, Duration::from_millis(10))?;
    run(5, Duration::from_millis(100))?;
    run(5, Duration::from_secs(2))?;

    Ok(())
}
