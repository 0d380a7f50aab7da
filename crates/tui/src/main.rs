mod app;
mod config;
mod error;
mod ui;

use std::{fs::OpenOptions, sync::Mutex};

use tracing_subscriber::EnvFilter;

use crate::{
    config::AppConfig,
    error::{AppError, Result},
};

fn main() -> Result<()> {
    let config = config::load()?;
    init_logging(&config)?;
    tracing::info!(export_dir = %config.export_dir, "starting expense form");

    let mut app = app::App::new(config);
    app.run()?;
    Ok(())
}

/// The terminal owns stdout, so logs only go to a file when one is configured.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!(
            "expense_tui={level},engine={level}",
            level = config.log_level
        )))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))
}
