//! Tally Edge - inventory labels and cycle counts at the warehouse edge
//!
//! # Overview
//!
//! - **Labels** (`labels`): catalog item → ZPL command list → bytes for a sink
//! - **Counting** (`counting`): scan classification, session progress and
//!   the single-consumer worker that serializes scans
//! - **Core** (`core`): environment configuration and errors
//!
//! # Layout
//!
//! ```text
//! tally-edge/src/
//! ├── core/          # Config, EdgeError
//! ├── labels/        # layout, model, compiler, catalog, print service
//! ├── counting/      # classifier, session, feedback, debounce, worker
//! ├── utils/         # logging
//! └── cli.rs         # `tally` command line
//! ```

pub mod cli;
pub mod core;
pub mod counting;
pub mod labels;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, EdgeError, EdgeResult};
pub use counting::{CycleCountSession, FeedbackTable, Outcome, Progress, ScanClassifier, SessionReport};
pub use labels::{Catalog, LabelCompiler, LabelLayout, LabelModel, LabelPrinter, ValidationError};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Load `.env`, read configuration and start logging
pub fn setup_environment() -> anyhow::Result<Config> {
    // Missing .env is normal
    let _ = dotenv::dotenv();
    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;
    Ok(config)
}
