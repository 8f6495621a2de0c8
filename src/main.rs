// aam: terminal UI for Auto Analytical Models.
// Sets up logging, configuration, and the terminal, then runs the app loop.

mod app;
mod cli;
mod config;
mod error;
mod logging;
mod models;
mod state;
mod store;
mod tui;
mod ui;

use std::path::PathBuf;

use clap::Parser;

use crate::app::App;
use crate::cli::Cli;
use crate::config::Config;
use crate::error::{AamError, Result};
use crate::models::{InMemorySource, JsonFileSource, ModelSource};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_path) = store::paths::log_path() {
        logging::initialize_logging(&log_path)?;
    }

    let config = Config::load(cli.config.as_deref())?;
    let data_path = cli.data.clone().or_else(|| config.data_path());

    if cli.init {
        return init_data_file(data_path);
    }

    let source = select_source(data_path);
    tracing::info!(source = %source.describe(), "starting");

    tui::install_panic_hook(config.mouse);
    let mut terminal = tui::init(config.mouse)?;
    let mut app = App::new(source, &config);
    let result = app.run(&mut terminal);
    tui::restore(config.mouse)?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "app exited with error");
    }
    result
}

/// Use the data file if one exists, otherwise the built-in sample.
fn select_source(data_path: Option<PathBuf>) -> Box<dyn ModelSource> {
    match data_path {
        Some(path) if path.exists() => Box::new(JsonFileSource::new(path)),
        _ => Box::new(InMemorySource::sample()),
    }
}

fn init_data_file(data_path: Option<PathBuf>) -> Result<()> {
    let path = data_path
        .ok_or_else(|| AamError::Config("no data directory available; pass --data".to_string()))?;
    let records = InMemorySource::sample().list()?;
    store::write_json(&path, &records)?;
    tracing::info!(path = %path.display(), count = records.len(), "wrote sample data");
    println!("Wrote {} models to {}", records.len(), path.display());
    Ok(())
}
