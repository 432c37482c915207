mod aggregate;
mod attention_entry;
mod browsing_signal;
mod catalog_item;
mod degradation_event;
mod scored_entry;
mod user_profile;

pub use aggregate::{AggregateMetrics, AggregateRequest, ComboEntry, TopCategory};
pub use attention_entry::AttentionEntry;
pub use browsing_signal::BrowsingSignal;
pub use catalog_item::CatalogItem;
pub use degradation_event::DegradationEvent;
pub use scored_entry::ScoredEntry;
pub use user_profile::UserProfile;
