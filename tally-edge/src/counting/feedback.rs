//! Outcome → operator feedback lookup
//!
//! Kept apart from classification so devices, UIs and headless runs can
//! swap signals without touching counting logic.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::classifier::Outcome;
use crate::core::EdgeResult;

/// Tri-state signal shown to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Positive,
    Neutral,
    Negative,
}

/// LED colour flashed on the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedColor {
    Green,
    Yellow,
    Red,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub signal: Signal,
    pub led: Option<LedColor>,
    /// Audio cue identifier understood by the device, `None` for silence
    pub audio: Option<String>,
}

impl Feedback {
    fn new(signal: Signal, led: LedColor, audio: &str) -> Self {
        Self {
            signal,
            led: Some(led),
            audio: Some(audio.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackTable {
    pub new_match: Feedback,
    pub duplicate: Feedback,
    pub unexpected: Feedback,
}

impl Default for FeedbackTable {
    fn default() -> Self {
        Self {
            new_match: Feedback::new(Signal::Positive, LedColor::Green, "success"),
            duplicate: Feedback::new(Signal::Neutral, LedColor::Yellow, "duplicate"),
            unexpected: Feedback::new(Signal::Negative, LedColor::Red, "error"),
        }
    }
}

impl FeedbackTable {
    /// Default signals and LEDs with every audio cue removed
    pub fn silent() -> Self {
        let mut table = Self::default();
        table.new_match.audio = None;
        table.duplicate.audio = None;
        table.unexpected.audio = None;
        table
    }

    pub fn lookup(&self, outcome: Outcome) -> &Feedback {
        match outcome {
            Outcome::NewMatch => &self.new_match,
            Outcome::Duplicate => &self.duplicate,
            Outcome::Unexpected => &self.unexpected,
        }
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> EdgeResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&raw)?)
    }
}
