//! Headless round player.
//!
//! Loads a roster (built-in or from `FIGHT_DATA_DIR`), plays one round driven
//! by an optional RON input script and prints the round summary as JSON.
mod app;
mod config;

use std::path::Path;

use anyhow::Result;
use config::CliConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _guard = setup_logging(config.log_dir.as_deref())?;

    let summary = app::play(&config)?;

    let frames = summary.frames;
    match summary.result {
        Some(result) => match result.winner {
            Some(winner) => tracing::info!(%winner, end = ?result.end, frames, "winner decided"),
            None => tracing::info!(end = ?result.end, frames, "round drawn"),
        },
        None => tracing::warn!(frames, "round did not finish"),
    }
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Logs to stderr, and to `fight.log` in `log_dir` when one is given.
///
/// The returned guard must stay alive until exit so the file writer drains.
fn setup_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::never(dir, "fight.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::info!("Log file: {}/fight.log", dir.display());
    }
    Ok(guard)
}
