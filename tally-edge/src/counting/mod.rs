//! Cycle Count Module
//!
//! Classifies scans against an expected item list:
//! - Classifier: new match / duplicate / unexpected
//! - Session: counters, progress and the final report
//! - Feedback: outcome → LED / audio / signal lookup
//! - Dispatcher: single-consumer worker fed by scan sources

pub mod classifier;
pub mod debounce;
pub mod dispatcher;
pub mod feedback;
pub mod session;

pub use classifier::{Outcome, ScanClassifier};
pub use debounce::Debouncer;
pub use dispatcher::{CountHandle, ScanNotice, ScanSender, WorkerOptions, spawn_cycle_count};
pub use feedback::{Feedback, FeedbackTable, LedColor, Signal};
pub use session::{CycleCountSession, Progress, SessionReport};
