//! Error types for truckload.

use thiserror::Error;

/// Result type alias for truckload operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while planning a load.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid truck type provided.
    #[error("Invalid truck: {0}")]
    InvalidTruck(String),

    /// Invalid box definition provided.
    #[error("Invalid box: {0}")]
    InvalidBox(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Computation cancelled before a result was available.
    #[error("Computation cancelled")]
    Cancelled,
}
