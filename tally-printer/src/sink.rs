//! Byte sinks for rendered labels
//!
//! The sink is the only place that touches a device or a file. Supports:
//! - In-memory capture (tests, headless runs)
//! - Append-to-file spooling

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument};

use crate::error::{PrintError, PrintResult};

/// Transmit capability for complete print jobs
///
/// `send` opens, writes and closes; retries belong to the implementation.
#[allow(async_fn_in_trait)]
pub trait ByteSink {
    async fn send(&self, data: &[u8]) -> PrintResult<()>;
}

/// Collects every job in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    jobs: Arc<Mutex<Vec<Vec<u8>>>>,
    reject: Option<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that refuses every job with the given reason
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            jobs: Arc::default(),
            reject: Some(reason.into()),
        }
    }

    /// Snapshot of received jobs, oldest first
    pub fn jobs(&self) -> Vec<Vec<u8>> {
        self.jobs.lock().clone()
    }

    pub fn job_count(&self) -> usize {
        self.jobs.lock().len()
    }
}

impl ByteSink for MemorySink {
    async fn send(&self, data: &[u8]) -> PrintResult<()> {
        if let Some(reason) = &self.reject {
            return Err(PrintError::Rejected(reason.clone()));
        }
        self.jobs.lock().push(data.to_vec());
        Ok(())
    }
}

/// Appends each job to a spool file
///
/// Useful for printers shared as a raw file device, or for inspecting output.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl AsRef<Path>) -> PrintResult<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(PrintError::InvalidConfig("empty spool path".to_string()));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteSink for FileSink {
    #[instrument(skip(data), fields(path = %self.path.display(), data_len = data.len()))]
    async fn send(&self, data: &[u8]) -> PrintResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(data).await?;
        file.flush().await?;

        info!("Label spooled");
        Ok(())
    }
}
