//! Scan Event Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One decoded barcode as delivered by the scan source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanEvent {
    pub code: String,
    /// Decoder label reported by the scanner (e.g. `LABEL-TYPE-CODE128`)
    pub symbology: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ScanEvent {
    pub fn new(code: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            code: code.into(),
            symbology: None,
            timestamp,
        }
    }

    pub fn with_symbology(mut self, symbology: impl Into<String>) -> Self {
        self.symbology = Some(symbology.into());
        self
    }
}

/// Shape in which the scan source hands codes over
///
/// Multi-barcode decoding produces a `Batch`; the codes of a batch are
/// processed in order, one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "events", rename_all = "lowercase")]
pub enum ScanDelivery {
    Single(ScanEvent),
    Batch(Vec<ScanEvent>),
}

impl ScanDelivery {
    /// Number of codes carried
    pub fn len(&self) -> usize {
        match self {
            ScanDelivery::Single(_) => 1,
            ScanDelivery::Batch(events) => events.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_events(self) -> Vec<ScanEvent> {
        match self {
            ScanDelivery::Single(event) => vec![event],
            ScanDelivery::Batch(events) => events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_len() {
        let ts = Utc::now();
        let single = ScanDelivery::Single(ScanEvent::new("A", ts));
        let batch = ScanDelivery::Batch(vec![ScanEvent::new("A", ts), ScanEvent::new("B", ts)]);
        assert_eq!(single.len(), 1);
        assert_eq!(batch.len(), 2);
        assert!(ScanDelivery::Batch(Vec::new()).is_empty());
    }

    #[test]
    fn test_batch_preserves_order() {
        let ts = Utc::now();
        let codes: Vec<String> = ScanDelivery::Batch(vec![
            ScanEvent::new("B", ts),
            ScanEvent::new("A", ts),
            ScanEvent::new("B", ts),
        ])
        .into_events()
        .into_iter()
        .map(|e| e.code)
        .collect();
        assert_eq!(codes, ["B", "A", "B"]);
    }
}
