use std::time::Duration;

use tally_printer::CommandLanguage;

use super::error::{EdgeError, EdgeResult};
use crate::counting::FeedbackTable;
use crate::labels::LabelLayout;

/// Edge configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | LOG_LEVEL | info | tracing filter when RUST_LOG is unset |
/// | LOG_JSON | false | JSON console output |
/// | LOG_DIR | - | enables daily rotating log files |
/// | LABEL_LAYOUT_PATH | - | JSON layout override |
/// | FEEDBACK_TABLE_PATH | - | JSON feedback table override |
/// | LABEL_ENCODING | utf8 | `utf8` or `cp1252` |
/// | SAME_CODE_TIMEOUT_MS | 0 | repeat-scan suppression window, 0 = off |
/// | SCAN_QUEUE_CAPACITY | 256 | pending deliveries before senders wait |
///
/// # Example
///
/// ```ignore
/// LOG_LEVEL=debug SAME_CODE_TIMEOUT_MS=500 tally count --expected bins.txt
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub label_layout_path: Option<String>,
    pub feedback_table_path: Option<String>,
    pub label_language: CommandLanguage,
    pub same_code_timeout_ms: u64,
    pub scan_queue_capacity: usize,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup
    ///
    /// Unparseable values fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: non_empty("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: non_empty("LOG_DIR"),
            label_layout_path: non_empty("LABEL_LAYOUT_PATH"),
            feedback_table_path: non_empty("FEEDBACK_TABLE_PATH"),
            label_language: non_empty("LABEL_ENCODING")
                .and_then(|v| parse_language(&v))
                .unwrap_or_default(),
            same_code_timeout_ms: non_empty("SAME_CODE_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            scan_queue_capacity: non_empty("SCAN_QUEUE_CAPACITY")
                .and_then(|v| v.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(256),
        }
    }

    pub fn same_code_timeout(&self) -> Duration {
        Duration::from_millis(self.same_code_timeout_ms)
    }

    /// Layout from `LABEL_LAYOUT_PATH`, or the built-in default
    pub fn load_layout(&self) -> EdgeResult<LabelLayout> {
        match &self.label_layout_path {
            Some(path) => LabelLayout::from_json_file(path)
                .map_err(|e| EdgeError::Config(format!("label layout {}: {}", path, e))),
            None => Ok(LabelLayout::default()),
        }
    }

    /// Feedback table from `FEEDBACK_TABLE_PATH`, or the built-in default
    pub fn load_feedback(&self) -> EdgeResult<FeedbackTable> {
        match &self.feedback_table_path {
            Some(path) => FeedbackTable::from_json_file(path)
                .map_err(|e| EdgeError::Config(format!("feedback table {}: {}", path, e))),
            None => Ok(FeedbackTable::default()),
        }
    }
}

fn parse_language(value: &str) -> Option<CommandLanguage> {
    match value.trim().to_ascii_lowercase().as_str() {
        "utf8" | "utf-8" | "zpl" => Some(CommandLanguage::Zpl),
        "cp1252" | "windows-1252" => Some(CommandLanguage::ZplWindows1252),
        _ => None,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
