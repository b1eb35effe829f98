use anyhow::Context;
use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinema_booking::{cli, config::Config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("invalid configuration")?;

    // stdout belongs to the menu, logs go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!(
        "Starting cinema booking ({}, {} seats per showing)",
        config.app.environment, config.booking.seat_capacity
    );

    let state = AppState::new(config).context("failed to seed catalog")?;

    // Console reads block, keep them off the async workers
    tokio::task::spawn_blocking(move || {
        let stdin = io::stdin();
        let mut console = cli::Console::new(stdin.lock(), io::stdout());
        cli::run(&mut console, &state.movies)
    })
    .await
    .context("console task panicked")?
    .context("console I/O failed")?;

    info!("Goodbye");
    Ok(())
}
