//! Two independent bars: an outer one per batch and a transient inner one.

use std::thread;
use std::time::Duration;

use color_eyre::Result;
use linebar::{trange, ProgressBar};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stdout)
        .init();

    let mut outer = ProgressBar::builder()
        .total(5)
        .description("batches")
        .build();
    outer.start()?;

    for batch in 0..5 {
        let mut inner = trange(200);
        inner.bar_mut().set_leave(false);
        inner.bar_mut().set_description(format!("batch {batch}"));
        for _ in inner {
            thread::sleep(Duration::from_millis(2));
        }
        outer.update(1)?;
    }

    outer.close()?;
    Ok(())
}
