//! Dual-path aggregate engine.
//!
//! Requests go to the worker thread when one is available. Anything that
//! goes wrong with the worker (spawn failure, disconnect, a panicking
//! computation) is recorded as a degradation and answered synchronously
//! with the same function. Nothing is surfaced to the caller.

use std::sync::Arc;
use std::time::{Duration, Instant};

use marketrank_core::config::AggregateConfig;
use marketrank_core::{AggregateMetrics, AggregateRequest, MarketrankResult};
use marketrank_observability::tracing_setup::events;
use marketrank_observability::DegradationTracker;
use tracing::warn;

use crate::compute::compute_aggregates;
use crate::worker::{AggregateWorker, WorkerResponse};

const COMPONENT: &str = "aggregate-worker";
const FALLBACK: &str = "synchronous computation";

/// Path names used in spans and events.
pub mod paths {
    pub const BACKGROUND: &str = "background";
    pub const SYNCHRONOUS: &str = "synchronous";
}

pub struct AggregateEngine {
    config: AggregateConfig,
    worker: Option<AggregateWorker>,
    latest: AggregateMetrics,
    /// Sequence of the most recently submitted request.
    sequence: u64,
    /// Sequence whose metrics are in `latest`.
    applied: u64,
    /// Most recent request still awaiting a worker response.
    in_flight: Option<(u64, Arc<AggregateRequest>)>,
    degradations: DegradationTracker,
}

impl AggregateEngine {
    /// Engine with a background worker when the config enables one.
    pub fn new(config: AggregateConfig) -> Self {
        if config.background_enabled {
            let worker = AggregateWorker::spawn(config.clone());
            Self::with_worker(config, worker)
        } else {
            Self::synchronous(config)
        }
    }

    /// Engine that never leaves the caller's thread.
    pub fn synchronous(config: AggregateConfig) -> Self {
        Self {
            config,
            worker: None,
            latest: AggregateMetrics::default(),
            sequence: 0,
            applied: 0,
            in_flight: None,
            degradations: DegradationTracker::new(),
        }
    }

    /// Engine around an already attempted worker spawn. A failed spawn
    /// leaves the engine on the synchronous path.
    pub fn with_worker(config: AggregateConfig, worker: MarketrankResult<AggregateWorker>) -> Self {
        let mut engine = Self::synchronous(config);
        match worker {
            Ok(worker) => engine.worker = Some(worker),
            Err(e) => engine.degrade(&e.to_string()),
        }
        engine
    }

    /// Compute aggregates for a new snapshot.
    ///
    /// Returns the metrics when they were computed synchronously, `None`
    /// when the request was handed to the worker; collect those with
    /// [`poll`](Self::poll) or [`wait_latest`](Self::wait_latest).
    pub fn submit(&mut self, request: AggregateRequest) -> Option<AggregateMetrics> {
        self.sequence += 1;
        let sequence = self.sequence;
        let request = Arc::new(request);

        if let Some(worker) = &self.worker {
            let _span =
                marketrank_observability::aggregate_span!(paths::BACKGROUND, request.catalog.len())
                    .entered();
            match worker.dispatch(sequence, Arc::clone(&request)) {
                Ok(()) => {
                    self.in_flight = Some((sequence, request));
                    return None;
                }
                Err(e) => {
                    // Superseded by the synchronous answer below.
                    self.in_flight = None;
                    self.degrade(&e.to_string());
                }
            }
        }

        Some(self.compute_now(sequence, &request))
    }

    /// Apply every response that has already arrived. Returns whether the
    /// latest metrics changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        loop {
            let received = match &self.worker {
                Some(worker) => worker.try_recv(),
                None => return changed,
            };
            match received {
                Ok(Some(response)) => changed |= self.handle(response),
                Ok(None) => return changed,
                Err(e) => {
                    changed |= self.worker_lost(&e.to_string());
                    return changed;
                }
            }
        }
    }

    /// Block until the most recent request is answered or `timeout`
    /// elapses. Returns the latest metrics once settled, `None` on timeout.
    pub fn wait_latest(&mut self, timeout: Duration) -> Option<AggregateMetrics> {
        let deadline = Instant::now() + timeout;
        self.poll();
        while self.in_flight.is_some() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return None;
            }
            let received = match &self.worker {
                Some(worker) => worker.recv_timeout(remaining),
                None => break,
            };
            match received {
                Ok(Some(response)) => {
                    self.handle(response);
                }
                Ok(None) => return None,
                Err(e) => {
                    self.worker_lost(&e.to_string());
                }
            }
        }
        Some(self.latest.clone())
    }

    /// Metrics from the newest answered request.
    pub fn latest(&self) -> &AggregateMetrics {
        &self.latest
    }

    /// Whether requests currently go to the worker thread.
    pub fn is_background(&self) -> bool {
        self.worker.is_some()
    }

    /// Whether a dispatched request has not been answered yet.
    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn degradations(&self) -> &DegradationTracker {
        &self.degradations
    }

    pub fn config(&self) -> &AggregateConfig {
        &self.config
    }

    /// Stop the worker. Unanswered requests are discarded; later submits
    /// run synchronously.
    pub fn shutdown(&mut self) {
        if let Some(mut worker) = self.worker.take() {
            worker.shutdown();
        }
        self.in_flight = None;
    }

    fn handle(&mut self, response: WorkerResponse) -> bool {
        let WorkerResponse { sequence, outcome } = response;
        let is_current = self
            .in_flight
            .as_ref()
            .is_some_and(|(pending, _)| *pending == sequence);

        match outcome {
            Ok(metrics) => {
                if is_current {
                    self.in_flight = None;
                }
                if self.degradations.is_degraded(COMPONENT) {
                    self.degradations.mark_recovered(COMPONENT);
                }
                self.apply(sequence, metrics)
            }
            Err(e) => {
                self.degradations
                    .record_now(COMPONENT, &e.to_string(), FALLBACK);
                if !is_current {
                    return false;
                }
                match self.in_flight.take() {
                    Some((sequence, request)) => {
                        let before = self.latest.clone();
                        self.compute_now(sequence, &request);
                        before != self.latest
                    }
                    None => false,
                }
            }
        }
    }

    /// The worker is gone: stop using it and answer the outstanding request
    /// synchronously.
    fn worker_lost(&mut self, failure: &str) -> bool {
        self.worker = None;
        self.degrade(failure);
        match self.in_flight.take() {
            Some((sequence, request)) => {
                let before = self.latest.clone();
                self.compute_now(sequence, &request);
                before != self.latest
            }
            None => false,
        }
    }

    fn degrade(&mut self, failure: &str) {
        warn!(failure = %failure, "aggregate worker unavailable, computing synchronously");
        self.worker = None;
        self.degradations.record_now(COMPONENT, failure, FALLBACK);
    }

    fn compute_now(&mut self, sequence: u64, request: &AggregateRequest) -> AggregateMetrics {
        let _span =
            marketrank_observability::aggregate_span!(paths::SYNCHRONOUS, request.catalog.len())
                .entered();
        let metrics = compute_aggregates(request, &self.config);
        events::aggregate_completed(
            paths::SYNCHRONOUS,
            request.catalog.len(),
            metrics.combo.len(),
        );
        self.apply(sequence, metrics.clone());
        metrics
    }

    /// Last write wins: responses older than the applied one are dropped.
    fn apply(&mut self, sequence: u64, metrics: AggregateMetrics) -> bool {
        if sequence < self.applied {
            return false;
        }
        self.applied = sequence;
        let changed = self.latest != metrics;
        self.latest = metrics;
        changed
    }
}

impl Drop for AggregateEngine {
    fn drop(&mut self) {
        self.shutdown();
    }
}
