//! # marketrank-signals
//!
//! Two bounded, persisted stores of implicit behavior:
//! - [`BrowsingSignalStore`]: category/tag exposure, top 6 by count then recency.
//! - [`AttentionStore`]: per-item dwell attention, top 32 by decayed score.
//!
//! Both are written only from the session owner's thread and treat every
//! persistence failure as non-fatal.

pub mod attention;
pub mod browsing;
mod persistence;

pub use attention::AttentionStore;
pub use browsing::BrowsingSignalStore;
