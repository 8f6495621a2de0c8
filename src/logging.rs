// File logging.
// The terminal belongs to the UI, so tracing output goes to a log file.

use std::fs;
use std::path::Path;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{AamError, Result};

pub const LOG_ENV: &str = "AAM_LOG";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME"))))
}

/// Install a file-backed tracing subscriber.
pub fn initialize_logging(log_path: &Path) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = fs::File::create(log_path)?;

    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter());

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .map_err(|e| AamError::Logging(e.to_string()))
}
