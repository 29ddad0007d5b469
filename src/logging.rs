//! Log output goes to a file: the game owns the terminal, so anything
//! written to stdout or stderr would end up drawn over the play field.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::GameError;

/// Path of the log file; logging stays off when unset.
pub const LOG_VAR: &str = "PLATFORMER_LOG";

const DEFAULT_FILTER: &str = "info";

/// Install a global fmt subscriber appending to `path`.
///
/// Returns `Ok(false)` without touching the global dispatcher when `path` is
/// `None`. The level filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init(path: Option<&Path>) -> Result<bool, GameError> {
    let Some(path) = path else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| GameError::Logging(e.to_string()))?;

    Ok(true)
}
