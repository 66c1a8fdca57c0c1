//! Example showing a single updating progress line for a simulated download batch.
//!
//! Run with `RUST_LOG=progress_line=trace` to see the emitter's own tracing.

use color_eyre::Result;
use progress_line::{params, ProgressEmitter};
use rand::Rng;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stdout)
        .init();

    let files = 20;
    let emitter = ProgressEmitter::new("downloaded %d/%d files (%.1f MiB)");
    emitter.set_update_interval(Duration::from_millis(100))?;
    emitter.start().await?;

    let mut received = 0.0;
    for done in 1..=files {
        // Pretend to fetch a file of a few hundred KiB.
        let (delay, size) = {
            let mut rng = rand::rng();
            (rng.random_range(20..200), rng.random_range(0.1..0.9))
        };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        received += size;
        emitter.set_params(params![done, files, received]);
    }

    // Give the last line a chance to render before stopping.
    tokio::time::sleep(emitter.update_interval() * 2).await;
    emitter.stop().await;
    eprintln!();

    println!("Download complete! Last line: {:?}", emitter.last_rendered());

    Ok(())
}
