//! # marketrank-observability
//!
//! Structured logging for the relevance engine: subscriber setup, span
//! macros per operation, named events, and a tracker for every fallback
//! taken by a degraded subsystem.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::{DegradationTracker, RecoveryStatus, TrackedDegradation};
pub use tracing_setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};
