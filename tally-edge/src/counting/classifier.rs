//! Scan classification against an expected set

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Result of classifying one scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Expected and seen for the first time
    NewMatch,
    /// Expected but already counted
    Duplicate,
    /// Not on the expected list
    Unexpected,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::NewMatch => "new_match",
            Outcome::Duplicate => "duplicate",
            Outcome::Unexpected => "unexpected",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks which expected codes have been seen
///
/// Not synchronized: callers serialize `classify` (see `dispatcher`), since
/// the check-then-insert on `seen` is not atomic across threads.
#[derive(Debug, Clone)]
pub struct ScanClassifier {
    expected: HashSet<String>,
    seen: HashSet<String>,
}

impl ScanClassifier {
    /// Empty codes are dropped from the expected set, so they always classify as unexpected
    pub fn new<I, S>(expected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let expected = expected
            .into_iter()
            .map(Into::into)
            .filter(|code: &String| !code.is_empty())
            .collect();
        Self {
            expected,
            seen: HashSet::new(),
        }
    }

    pub fn classify(&mut self, code: &str) -> Outcome {
        if !self.expected.contains(code) {
            return Outcome::Unexpected;
        }
        if self.seen.contains(code) {
            return Outcome::Duplicate;
        }
        self.seen.insert(code.to_string());
        Outcome::NewMatch
    }

    pub fn expected(&self) -> &HashSet<String> {
        &self.expected
    }

    pub fn seen(&self) -> &HashSet<String> {
        &self.seen
    }
}
