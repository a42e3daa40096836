//! Process-level errors.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not be bound (port in use, permission denied, bad address).
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("server task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
