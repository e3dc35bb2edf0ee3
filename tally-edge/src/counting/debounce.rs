//! Repeat-scan suppression in front of the classifier
//!
//! Mirrors the scanner's "same barcode timeout": a single scan of the same
//! code as the previous single scan, inside the window, is dropped before
//! it is classified. Batches never pass through here.

use std::time::Duration;

use chrono::{DateTime, Utc};
use shared::ScanEvent;

#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    last: Option<(String, DateTime<Utc>)>,
}

impl Debouncer {
    /// A zero window disables suppression
    pub fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    pub fn is_enabled(&self) -> bool {
        !self.window.is_zero()
    }

    /// Whether the event should reach the classifier
    pub fn admit(&mut self, event: &ScanEvent) -> bool {
        if !self.is_enabled() {
            return true;
        }

        if let Some((code, at)) = &self.last
            && *code == event.code
            && let Ok(elapsed) = (event.timestamp - *at).to_std()
            && elapsed < self.window
        {
            return false;
        }

        self.last = Some((event.code.clone(), event.timestamp));
        true
    }
}
