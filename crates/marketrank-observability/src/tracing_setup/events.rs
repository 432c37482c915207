//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// A best-effort persistence write or read failed.
pub fn persistence_failed(key: &str, operation: &str, error: &dyn std::fmt::Display) {
    tracing::warn!(
        event = "persistence_failed",
        key = %key,
        operation = %operation,
        error = %error,
        "persistence failed, continuing with in-memory state"
    );
}

/// Persisted state could not be parsed and was treated as empty.
pub fn persisted_state_discarded(key: &str, reason: &str) {
    tracing::warn!(
        event = "persisted_state_discarded",
        key = %key,
        reason = %reason,
        "malformed persisted state treated as empty"
    );
}

/// A ranking pass finished.
pub fn ranking_completed(items: usize, top_score: f64) {
    tracing::debug!(
        event = "ranking_completed",
        items = items,
        top_score = top_score,
        "ranking completed"
    );
}

/// Aggregate metrics were produced by one of the two execution paths.
pub fn aggregate_completed(path: &str, items: usize, combo: usize) {
    tracing::debug!(
        event = "aggregate_completed",
        path = %path,
        items = items,
        combo = combo,
        "aggregate metrics computed"
    );
}

/// A dwell flush applied coalesced events.
pub fn dwell_flushed(items: usize, retained: usize) {
    tracing::debug!(
        event = "dwell_flushed",
        items = items,
        retained = retained,
        "dwell queue flushed"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// Log a recovery from degraded mode.
pub fn degradation_recovered(component: &str) {
    tracing::info!(
        event = "degradation_recovered",
        component = %component,
        "degradation recovered"
    );
}
