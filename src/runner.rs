use crate::compress::compress_single;
use crate::error::{CompressionError, Result};
use crate::request::{BatchFailure, CompressionOutcome, CompressionRequest};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Events emitted by a running batch, delivered in processing order.
/// `Completed` is always the last event and arrives exactly once.
#[derive(Debug)]
pub enum BatchEvent {
    /// Cumulative progress after an item finished, in percent. Emitted
    /// after every item whether it succeeded or failed; non-decreasing
    /// and ending at 100 for an uncancelled run.
    Progress(u8),
    ItemFailed { path: PathBuf, message: String },
    Completed(CompressionOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    Idle,
    Running,
    Completed,
}

impl BatchState {
    fn as_u8(self) -> u8 {
        match self {
            BatchState::Idle => 0,
            BatchState::Running => 1,
            BatchState::Completed => 2,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => BatchState::Running,
            2 => BatchState::Completed,
            _ => BatchState::Idle,
        }
    }
}

/// Handle to one in-flight batch: the event receiver, the observable
/// runner state, and cooperative cancellation.
pub struct BatchHandle {
    events: Receiver<BatchEvent>,
    state: Arc<AtomicU8>,
    cancel: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl BatchHandle {
    /// Blocking iterator over the batch events. Ends after `Completed`,
    /// when the worker drops its sender.
    pub fn events(&self) -> impl Iterator<Item = BatchEvent> + '_ {
        self.events.iter()
    }

    pub fn state(&self) -> BatchState {
        BatchState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Requests cancellation. The flag is checked between items, never
    /// mid-encode, and a cancelled run still ends with a `Completed`
    /// event carrying the partial outcome.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Release);
    }

    pub fn join(mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for BatchHandle {
    fn drop(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Starts one batch on a background worker thread and returns its handle.
///
/// Inputs are processed strictly in order, one at a time, so at most one
/// decoded image is in memory and events stay order-stable. A failed item
/// emits `ItemFailed` and the batch moves on; it never aborts the run.
/// An empty request fails synchronously and no thread is spawned.
pub fn start_run(request: CompressionRequest) -> Result<BatchHandle> {
    if request.is_empty() {
        return Err(CompressionError::EmptyBatch);
    }

    let (tx, rx) = mpsc::channel();
    let state = Arc::new(AtomicU8::new(BatchState::Running.as_u8()));
    let cancel = Arc::new(AtomicBool::new(false));

    let worker_state = Arc::clone(&state);
    let worker_cancel = Arc::clone(&cancel);
    let worker = thread::spawn(move || {
        let total = request.len();
        let mut outcome = CompressionOutcome::default();

        for (index, path) in request.paths.iter().enumerate() {
            if worker_cancel.load(Ordering::Acquire) {
                break;
            }

            // A panic inside the compressor must not kill the batch.
            let compressed = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                compress_single(path, request.quality)
            }))
            .unwrap_or_else(|_| {
                Err(CompressionError::Processing(format!(
                    "unexpected failure while processing {:?}",
                    path
                )))
            });

            match compressed {
                Ok(result) => outcome.results.push(result),
                Err(err) => {
                    let message = err.to_string();
                    let _ = tx.send(BatchEvent::ItemFailed {
                        path: path.clone(),
                        message: message.clone(),
                    });
                    outcome.failures.push(BatchFailure {
                        path: path.clone(),
                        message,
                    });
                }
            }

            let _ = tx.send(BatchEvent::Progress(progress_percent(index, total)));
        }

        worker_state.store(BatchState::Completed.as_u8(), Ordering::Release);
        let _ = tx.send(BatchEvent::Completed(outcome));
    });

    Ok(BatchHandle {
        events: rx,
        state,
        cancel,
        worker: Some(worker),
    })
}

/// Cumulative percentage after finishing item `index` out of `total`.
pub fn progress_percent(index: usize, total: usize) -> u8 {
    ((index + 1) as f64 / total as f64 * 100.0).round() as u8
}
