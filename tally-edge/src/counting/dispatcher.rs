//! Cycle count worker
//!
//! Owns the session and is the single consumer of the scan queue, so every
//! `record_scan` runs on one task in arrival order. Scan sources hold a
//! [`ScanSender`]; the UI/audio collaborator reads the [`ScanNotice`] stream
//! returned by [`spawn_cycle_count`].
//!
//! Notices are never dropped while the stream is held: a full notice buffer
//! pauses the worker, which in turn fills the scan queue and makes senders
//! wait. Dropping the stream turns notices off.

use serde::Serialize;
use shared::{ScanDelivery, ScanEvent};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use super::classifier::Outcome;
use super::debounce::Debouncer;
use super::feedback::{Feedback, FeedbackTable};
use super::session::{CycleCountSession, Progress, SessionReport};
use crate::core::{EdgeError, EdgeResult};
use crate::utils::logger::COUNT_TARGET;

/// Published once per classified code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanNotice {
    pub code: String,
    pub outcome: Outcome,
    pub feedback: Feedback,
    pub progress: Progress,
}

#[derive(Debug, Clone)]
pub struct WorkerOptions {
    pub queue_capacity: usize,
    pub debounce: std::time::Duration,
}

impl Default for WorkerOptions {
    fn default() -> Self {
        Self {
            queue_capacity: 256,
            debounce: std::time::Duration::ZERO,
        }
    }
}

/// Producer side of the scan queue
#[derive(Debug, Clone)]
pub struct ScanSender {
    tx: mpsc::Sender<ScanDelivery>,
}

impl ScanSender {
    /// Queue a delivery, waiting while the queue is full
    pub async fn deliver(&self, delivery: ScanDelivery) -> EdgeResult<()> {
        self.tx
            .send(delivery)
            .await
            .map_err(|_| EdgeError::Worker("scan queue closed".to_string()))
    }

    pub async fn scan(&self, event: ScanEvent) -> EdgeResult<()> {
        self.deliver(ScanDelivery::Single(event)).await
    }

    pub async fn batch(&self, events: Vec<ScanEvent>) -> EdgeResult<()> {
        self.deliver(ScanDelivery::Batch(events)).await
    }
}

struct CycleCountWorker {
    session: CycleCountSession,
    feedback: FeedbackTable,
    debouncer: Debouncer,
    progress_tx: watch::Sender<Progress>,
    /// `None` once the notice stream has been dropped
    notice_tx: Option<mpsc::Sender<ScanNotice>>,
}

impl CycleCountWorker {
    /// Run until the queue closes or shutdown is signalled
    async fn run(
        mut self,
        mut rx: mpsc::Receiver<ScanDelivery>,
        shutdown: CancellationToken,
    ) -> SessionReport {
        info!(total = self.session.progress().total, "Cycle count worker started");

        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => {
                    info!("Cycle count worker received shutdown signal");
                    break;
                }
                delivery = rx.recv() => {
                    let Some(delivery) = delivery else {
                        info!("Scan queue closed, cycle count worker stopping");
                        break;
                    };
                    self.handle_delivery(delivery, &shutdown).await;
                }
            }
        }

        let report = self.session.finish();
        info!(
            target: COUNT_TARGET,
            scanned = report.scanned,
            total = report.total,
            unexpected = report.unexpected,
            missing = report.missing.len(),
            "Cycle count finished"
        );
        report
    }

    async fn handle_delivery(&mut self, delivery: ScanDelivery, shutdown: &CancellationToken) {
        match delivery {
            ScanDelivery::Single(event) => {
                if self.debouncer.admit(&event) {
                    self.handle_event(event, shutdown).await;
                } else {
                    debug!(code = %event.code, "Repeat scan suppressed");
                }
            }
            ScanDelivery::Batch(events) => {
                debug!(count = events.len(), "Batch delivery");
                for event in events {
                    self.handle_event(event, shutdown).await;
                }
            }
        }
    }

    #[instrument(skip_all, fields(code = %event.code))]
    async fn handle_event(&mut self, event: ScanEvent, shutdown: &CancellationToken) {
        let outcome = self.session.record_scan(&event.code);
        let progress = self.session.progress();
        debug!(?outcome, scanned = progress.scanned, total = progress.total, "Scan classified");

        self.progress_tx.send_replace(progress);

        let Some(tx) = &self.notice_tx else {
            return;
        };
        let notice = ScanNotice {
            code: event.code,
            outcome,
            feedback: self.feedback.lookup(outcome).clone(),
            progress,
        };
        // Classification already happened; a shutdown only skips the wait for a reader
        let delivered = tokio::select! {
            biased;
            _ = shutdown.cancelled() => true,
            sent = tx.send(notice) => sent.is_ok(),
        };
        if !delivered {
            debug!("Notice stream dropped, notices disabled");
            self.notice_tx = None;
        }
    }
}

/// Handle to a running count
pub struct CountHandle {
    sender: ScanSender,
    progress_rx: watch::Receiver<Progress>,
    shutdown: CancellationToken,
    task: JoinHandle<SessionReport>,
}

impl CountHandle {
    pub fn sender(&self) -> ScanSender {
        self.sender.clone()
    }

    /// Latest progress
    pub fn progress(&self) -> Progress {
        *self.progress_rx.borrow()
    }

    pub fn watch_progress(&self) -> watch::Receiver<Progress> {
        self.progress_rx.clone()
    }

    /// Close the queue, drain what is already queued and return the final report
    ///
    /// Clones of the sender held elsewhere keep the queue open; drop them first.
    pub async fn finish(self) -> EdgeResult<SessionReport> {
        drop(self.sender);
        self.task
            .await
            .map_err(|e| EdgeError::Worker(format!("cycle count task failed: {}", e)))
    }

    /// Stop at the next delivery boundary; queued deliveries are discarded
    pub async fn cancel(self) -> EdgeResult<SessionReport> {
        self.shutdown.cancel();
        self.finish().await
    }
}

/// Start the worker on the current tokio runtime
///
/// Returns the handle and the notice stream, one notice per classified code
/// in classification order. Hold the stream only while reading it.
pub fn spawn_cycle_count(
    session: CycleCountSession,
    feedback: FeedbackTable,
    options: WorkerOptions,
) -> (CountHandle, mpsc::Receiver<ScanNotice>) {
    let capacity = options.queue_capacity.max(1);
    let (tx, rx) = mpsc::channel(capacity);
    let (progress_tx, progress_rx) = watch::channel(session.progress());
    let (notice_tx, notice_rx) = mpsc::channel(capacity);
    let shutdown = CancellationToken::new();

    let worker = CycleCountWorker {
        session,
        feedback,
        debouncer: Debouncer::new(options.debounce),
        progress_tx,
        notice_tx: Some(notice_tx),
    };
    let task = tokio::spawn(worker.run(rx, shutdown.clone()));

    let handle = CountHandle {
        sender: ScanSender { tx },
        progress_rx,
        shutdown,
        task,
    };
    (handle, notice_rx)
}
