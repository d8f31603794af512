//! Gauntlet run binary.
//!
//! Composition root: loads configuration, sets up logging, builds a scripted
//! world and drives a run against it on a blocking task while status events
//! are printed from the async side.
//!
//! # Examples
//!
//! ```bash
//! GAUNTLET_VARIANT=hard GAUNTLET_MAX_TICKS=300 cargo run -p gauntlet-client
//! ```

mod world;

use anyhow::Result;
use runtime::{RunDriver, RuntimeConfig, StatusEvent};
use tokio::sync::broadcast::error::RecvError;

/// The scripted world is finite; without a bound the run would idle forever.
const DEMO_TICK_LIMIT: u64 = 200;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = RuntimeConfig::from_env();
    if config.max_ticks.is_none() {
        config.max_ticks = Some(DEMO_TICK_LIMIT);
    }
    let variant = config.run.variant;
    tracing::info!("Starting {} run", variant);

    let mut driver = RunDriver::new(world::scripted(variant), config);
    let handle = driver.handle();
    let mut events = driver.status_bus().subscribe();

    let printer = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(StatusEvent::Update(message)) => println!("{}", message),
                Ok(StatusEvent::Stopped(reason)) => println!("STOPPED: {}", reason),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("status printer lagged by {} events", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let stopper = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Ctrl-C received, stopping after the current tick");
            handle.stop();
        }
    });

    let ticks = tokio::task::spawn_blocking(move || driver.run()).await??;
    stopper.abort();
    printer.await?;

    tracing::info!("Run finished after {} ticks", ticks);
    Ok(())
}
