//! Error types for calgrid.

use thiserror::Error;

/// Errors that can occur in calgrid operations.
///
/// The layout engine itself never fails; these cover configuration and the
/// event provider boundary.
#[derive(Error, Debug)]
pub enum CalGridError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid calendar window: {0}")]
    InvalidWindow(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calgrid operations.
pub type CalGridResult<T> = Result<T, CalGridError>;
