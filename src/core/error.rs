//! Error types for the paint engine

use thiserror::Error;

/// Main error type for the engine
#[derive(Debug, Error)]
pub enum Error {
    #[error("singular transform: {0}")]
    InvalidTransform(String),

    #[error("precondition failed: {0}")]
    Precondition(String),

    #[error("volume error: {0}")]
    Volume(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
