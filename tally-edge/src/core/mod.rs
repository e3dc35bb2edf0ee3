//! Core module - configuration and error definitions
//!
//! - [`Config`] - environment-driven settings
//! - [`EdgeError`] - application error

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{EdgeError, EdgeResult};
