//! Batched asynchronous file intake.
//!
//! A single drop or picker selection becomes one batch. The batch is read on
//! a background thread (one concurrent read task per file, joined before
//! anything is reported) and delivered to the UI thread over an mpsc
//! channel that the app polls once per frame. Files that fail to read are
//! logged and silently dropped from the batch; the survivors keep their
//! relative drop order. Batches commit atomically: the UI never sees a
//! partially read batch.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread;

use futures::future::join_all;
use tracing::{error, warn};

use super::prompt::AttachedFile;

/// One file in an intake batch: a path still to be read, or content the
/// drop source handed over in memory. Keeping both in the same batch
/// preserves drop order when a single drop mixes the two kinds.
#[derive(Debug)]
pub enum FileSource {
    Path(PathBuf),
    Inline(AttachedFile),
}

/// The settled outcome of one intake batch.
#[derive(Debug)]
pub struct BatchResult {
    /// Successfully read files, in drop order.
    pub files: Vec<AttachedFile>,
    /// How many files the batch started with, for spinner bookkeeping.
    pub attempted: usize,
}

/// Bridges background batch reads to the single UI thread.
pub struct FileIntake {
    sender: Sender<BatchResult>,
    receiver: Receiver<BatchResult>,
    in_flight: usize,
}

impl Default for FileIntake {
    fn default() -> Self {
        Self::new()
    }
}

impl FileIntake {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver,
            in_flight: 0,
        }
    }

    /// True while at least one batch has been started but not yet polled
    /// back. Used to drive the intake spinner and repaint requests.
    pub fn is_reading(&self) -> bool {
        self.in_flight > 0
    }

    /// Start reading one batch of file sources in the background.
    ///
    /// Empty batches are ignored. Once issued, a batch runs to completion;
    /// there is no cancellation or timeout.
    pub fn start_batch(&mut self, sources: Vec<FileSource>) {
        if sources.is_empty() {
            return;
        }

        self.in_flight += 1;
        let sender = self.sender.clone();

        thread::spawn(move || {
            let attempted = sources.len();
            let files = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime.block_on(read_batch(sources)),
                Err(e) => {
                    error!("Failed to build intake runtime: {}", e);
                    Vec::new()
                }
            };
            // The app may have shut down while we were reading.
            sender
                .send(BatchResult { files, attempted })
                .unwrap_or_default();
        });
    }

    /// Drain every batch that has settled since the last poll, non-blocking.
    pub fn poll(&mut self) -> Vec<BatchResult> {
        let mut settled = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(result) => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    settled.push(result);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    // Cannot happen while we hold a sender clone.
                    error!("Intake channel disconnected unexpectedly");
                    break;
                }
            }
        }
        settled
    }
}

/// Resolve all sources concurrently and return the successes in input order.
pub async fn read_batch(sources: Vec<FileSource>) -> Vec<AttachedFile> {
    let reads = sources.into_iter().map(read_one);
    join_all(reads).await.into_iter().flatten().collect()
}

async fn read_one(source: FileSource) -> Option<AttachedFile> {
    let path = match source {
        // Already in memory; nothing can fail.
        FileSource::Inline(file) => return Some(file),
        FileSource::Path(path) => path,
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string());

    match tokio::fs::read(&path).await {
        Ok(bytes) => Some(decode_text(&name, &bytes)),
        Err(e) => {
            warn!("Error reading file {:?}: {}", path, e);
            None
        }
    }
}

/// Decode raw bytes as text the way a browser's `file.text()` would:
/// lossy UTF-8, so binary input succeeds garbled rather than failing.
pub fn decode_text(name: &str, bytes: &[u8]) -> AttachedFile {
    AttachedFile::new(name, String::from_utf8_lossy(bytes))
}
