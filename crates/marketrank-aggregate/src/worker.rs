//! Dedicated aggregate worker thread.
//!
//! ```text
//! ┌───────────────┐  Compute{seq, Arc<req>}  ┌──────────────────┐
//! │ session owner │ ───────────────────────▶ │ aggregate-worker │
//! │   (engine)    │ ◀─────────────────────── │  (pure compute)  │
//! └───────────────┘  WorkerResponse{seq, ..} └──────────────────┘
//! ```
//!
//! Only immutable snapshots cross the channel. A panic inside the
//! computation is caught and reported as a failed response; the thread
//! keeps serving later requests.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use marketrank_core::config::AggregateConfig;
use marketrank_core::errors::{AggregateError, MarketrankResult};
use marketrank_core::{AggregateMetrics, AggregateRequest};
use marketrank_observability::tracing_setup::events;
use tracing::{debug, info, warn};

use crate::engine::paths::BACKGROUND as BACKGROUND_PATH;

/// Signature of the computation run on the worker.
pub type ComputeFn = fn(&AggregateRequest, &AggregateConfig) -> AggregateMetrics;

enum WorkerMessage {
    Compute {
        sequence: u64,
        request: Arc<AggregateRequest>,
    },
    Shutdown,
}

/// One answered request.
#[derive(Debug)]
pub struct WorkerResponse {
    pub sequence: u64,
    pub outcome: Result<AggregateMetrics, AggregateError>,
}

/// Handle to the worker thread. Dropping it stops the thread.
pub struct AggregateWorker {
    tx: mpsc::Sender<WorkerMessage>,
    rx: mpsc::Receiver<WorkerResponse>,
    handle: Option<JoinHandle<()>>,
}

impl AggregateWorker {
    /// Spawn a worker running [`compute_aggregates`](crate::compute_aggregates).
    ///
    /// # Errors
    ///
    /// Returns `AggregateError::WorkerSpawnFailed` if the OS refuses the thread.
    pub fn spawn(config: AggregateConfig) -> MarketrankResult<Self> {
        Self::spawn_with(config, crate::compute::compute_aggregates)
    }

    /// Spawn a worker running `compute`.
    pub fn spawn_with(config: AggregateConfig, compute: ComputeFn) -> MarketrankResult<Self> {
        let (tx, worker_rx) = mpsc::channel();
        let (worker_tx, rx) = mpsc::channel();

        let handle = thread::Builder::new()
            .name("aggregate-worker".to_string())
            .spawn(move || Self::worker_loop(worker_rx, worker_tx, config, compute))
            .map_err(|e| AggregateError::WorkerSpawnFailed {
                reason: e.to_string(),
            })?;

        info!("aggregate worker thread started");
        Ok(Self {
            tx,
            rx,
            handle: Some(handle),
        })
    }

    fn worker_loop(
        rx: mpsc::Receiver<WorkerMessage>,
        tx: mpsc::Sender<WorkerResponse>,
        config: AggregateConfig,
        compute: ComputeFn,
    ) {
        while let Ok(message) = rx.recv() {
            match message {
                WorkerMessage::Compute { sequence, request } => {
                    debug!(sequence, items = request.catalog.len(), "computing aggregates");
                    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                        compute(&request, &config)
                    }))
                    .map_err(|payload| AggregateError::ComputationFailed {
                        reason: panic_message(payload.as_ref()),
                    });
                    if let Ok(metrics) = &outcome {
                        events::aggregate_completed(
                            BACKGROUND_PATH,
                            request.catalog.len(),
                            metrics.combo.len(),
                        );
                    }
                    if tx.send(WorkerResponse { sequence, outcome }).is_err() {
                        break;
                    }
                }
                WorkerMessage::Shutdown => break,
            }
        }
        info!("aggregate worker thread stopped");
    }

    /// Queue a request.
    pub fn dispatch(
        &self,
        sequence: u64,
        request: Arc<AggregateRequest>,
    ) -> Result<(), AggregateError> {
        self.tx
            .send(WorkerMessage::Compute { sequence, request })
            .map_err(|_| AggregateError::WorkerDisconnected)
    }

    /// Next response if one is ready.
    pub fn try_recv(&self) -> Result<Option<WorkerResponse>, AggregateError> {
        match self.rx.try_recv() {
            Ok(response) => Ok(Some(response)),
            Err(mpsc::TryRecvError::Empty) => Ok(None),
            Err(mpsc::TryRecvError::Disconnected) => Err(AggregateError::WorkerDisconnected),
        }
    }

    /// Block up to `timeout` for the next response. `Ok(None)` on timeout.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<WorkerResponse>, AggregateError> {
        match self.rx.recv_timeout(timeout) {
            Ok(response) => Ok(Some(response)),
            Err(mpsc::RecvTimeoutError::Timeout) => Ok(None),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(AggregateError::WorkerDisconnected),
        }
    }

    /// Stop the thread and wait for it. Pending responses are dropped.
    pub fn shutdown(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        let _ = self.tx.send(WorkerMessage::Shutdown);
        if handle.join().is_err() {
            warn!("aggregate worker thread panicked during shutdown");
        }
        while self.rx.try_recv().is_ok() {}
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for AggregateWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker computation panicked".to_string()
    }
}
