use tally_printer::PrintError;
use thiserror::Error;

use crate::labels::ValidationError;

#[derive(Error, Debug)]
pub enum EdgeError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("print error: {0}")]
    Print(#[from] PrintError),

    #[error("unknown item: {0}")]
    UnknownItem(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("worker error: {0}")]
    Worker(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EdgeError {
    /// Stable machine-readable kind, logged when a command fails
    pub fn kind(&self) -> &'static str {
        match self {
            EdgeError::Validation(_) => "validation_error",
            EdgeError::Print(_) => "print_error",
            EdgeError::UnknownItem(_) => "not_found",
            EdgeError::Config(_) => "config_error",
            EdgeError::Worker(_) => "worker_error",
            EdgeError::Io(_) => "io_error",
            EdgeError::Json(_) => "json_error",
        }
    }
}

/// Result type alias for edge operations
pub type EdgeResult<T> = std::result::Result<T, EdgeError>;
