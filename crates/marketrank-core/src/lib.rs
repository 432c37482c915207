//! # marketrank-core
//!
//! Foundation crate for the Marketrank relevance engine.
//! Defines the catalog data model, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod clock;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod scheduler;
pub mod storage;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MarketrankConfig;
pub use errors::{MarketrankError, MarketrankResult};
pub use models::{
    AggregateMetrics, AggregateRequest, AttentionEntry, BrowsingSignal, CatalogItem, ComboEntry,
    ScoredEntry, TopCategory, UserProfile,
};
pub use traits::{IClock, IFlushScheduler, IKeyValueStorage};
