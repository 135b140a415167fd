use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use super::errors::{InfraError, InfraResult};

/// Sends `tracing` output to `log_file`, since stdout belongs to the
/// terminal UI.
pub fn init_logging(log_file: &Path, filter: &str) -> InfraResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| InfraError::io(log_file, e))?;

    let filter = EnvFilter::try_new(filter).map_err(|e| InfraError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| InfraError::Logging(e.to_string()))
}
