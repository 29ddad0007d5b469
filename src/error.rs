use thiserror::Error;

use crate::config::ConfigError;

/// Everything that can stop the game before the player quits.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("could not install log subscriber: {0}")]
    Logging(String),
}
