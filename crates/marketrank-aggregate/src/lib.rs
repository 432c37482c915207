//! # marketrank-aggregate
//!
//! Average ROI, best category and the top "combo" of items overlapping the
//! user's signals.
//!
//! [`compute_aggregates`] is the only implementation of the formulas. The
//! [`AggregateEngine`] runs it on a dedicated worker thread when it can and
//! on the caller's thread otherwise, so both paths agree by construction.

pub mod compute;
pub mod engine;
pub mod worker;

pub use compute::compute_aggregates;
pub use engine::AggregateEngine;
pub use worker::{AggregateWorker, ComputeFn, WorkerResponse};
