//! Error types for the printer library

use thiserror::Error;

/// Printer error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// IO error while handing data to the sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The sink refused the job
    #[error("Job rejected: {0}")]
    Rejected(String),

    /// Invalid sink configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for printer operations
pub type PrintResult<T> = Result<T, PrintError>;
