//! Cycle count session
//!
//! Wraps a [`ScanClassifier`] for one count. Sessions are single use:
//! nothing is ever removed from the seen set, and reaching the expected
//! total does not close the session.

use serde::{Deserialize, Serialize};

use super::classifier::{Outcome, ScanClassifier};

/// Counted vs expected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub scanned: usize,
    pub total: usize,
}

/// Reporting snapshot of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    pub scanned: usize,
    pub total: usize,
    /// Every unexpected scan, repeats included
    pub unexpected: u64,
    /// Expected codes not seen yet, sorted
    pub missing: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CycleCountSession {
    classifier: ScanClassifier,
    unexpected_count: u64,
}

impl CycleCountSession {
    pub fn new<I, S>(expected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classifier: ScanClassifier::new(expected),
            unexpected_count: 0,
        }
    }

    pub fn record_scan(&mut self, code: &str) -> Outcome {
        let outcome = self.classifier.classify(code);
        if outcome == Outcome::Unexpected {
            self.unexpected_count += 1;
        }
        outcome
    }

    /// Classify codes one at a time in delivery order
    pub fn record_batch<'a, I>(&mut self, codes: I) -> Vec<Outcome>
    where
        I: IntoIterator<Item = &'a str>,
    {
        codes.into_iter().map(|code| self.record_scan(code)).collect()
    }

    pub fn scanned_count(&self) -> usize {
        self.classifier.seen().len()
    }

    pub fn unexpected_count(&self) -> u64 {
        self.unexpected_count
    }

    pub fn progress(&self) -> Progress {
        Progress {
            scanned: self.scanned_count(),
            total: self.classifier.expected().len(),
        }
    }

    /// All expected codes seen; informational only
    pub fn is_complete(&self) -> bool {
        let p = self.progress();
        p.scanned == p.total
    }

    pub fn snapshot(&self) -> SessionReport {
        let seen = self.classifier.seen();
        let mut missing: Vec<String> = self
            .classifier
            .expected()
            .iter()
            .filter(|code| !seen.contains(*code))
            .cloned()
            .collect();
        missing.sort();

        let progress = self.progress();
        SessionReport {
            scanned: progress.scanned,
            total: progress.total,
            unexpected: self.unexpected_count,
            missing,
        }
    }

    /// End the session
    pub fn finish(self) -> SessionReport {
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_after_sequence() {
        let mut session = CycleCountSession::new(["A", "B", "C"]);
        for code in ["A", "A", "X", "B"] {
            session.record_scan(code);
        }
        assert_eq!(session.progress(), Progress { scanned: 2, total: 3 });
        assert_eq!(session.scanned_count(), 2);
        assert_eq!(session.unexpected_count(), 1);
    }

    #[test]
    fn test_unexpected_repeats_all_count() {
        let mut session = CycleCountSession::new(["A"]);
        for _ in 0..3 {
            assert_eq!(session.record_scan("BAD"), Outcome::Unexpected);
        }
        assert_eq!(session.unexpected_count(), 3);
        assert_eq!(session.progress().scanned, 0);
    }

    #[test]
    fn test_batch_matches_single_scans() {
        let mut batched = CycleCountSession::new(["A", "B"]);
        let batch_outcomes = batched.record_batch(["A", "A"]);

        let mut single = CycleCountSession::new(["A", "B"]);
        let single_outcomes = vec![single.record_scan("A"), single.record_scan("A")];

        assert_eq!(batch_outcomes, [Outcome::NewMatch, Outcome::Duplicate]);
        assert_eq!(batch_outcomes, single_outcomes);
        assert_eq!(batched.snapshot(), single.snapshot());
    }

    #[test]
    fn test_complete_does_not_close() {
        let mut session = CycleCountSession::new(["A"]);
        session.record_scan("A");
        assert!(session.is_complete());
        assert_eq!(session.record_scan("A"), Outcome::Duplicate);
        assert_eq!(session.record_scan("Q"), Outcome::Unexpected);
        assert_eq!(session.progress(), Progress { scanned: 1, total: 1 });
    }

    #[test]
    fn test_scanned_is_monotonic() {
        let mut session = CycleCountSession::new(["A", "B", "C"]);
        let mut last = 0;
        for code in ["C", "X", "C", "A", "", "B", "A"] {
            session.record_scan(code);
            let now = session.progress().scanned;
            assert!(now >= last);
            last = now;
        }
        assert_eq!(last, 3);
    }

    #[test]
    fn test_finish_report() {
        let mut session = CycleCountSession::new(["C", "A", "B"]);
        session.record_batch(["B", "nope"]);
        let report = session.finish();
        assert_eq!(
            report,
            SessionReport {
                scanned: 1,
                total: 3,
                unexpected: 1,
                missing: vec!["A".to_string(), "C".to_string()],
            }
        );
    }
}
