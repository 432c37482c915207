use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregated exposure to one category or tag descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowsingSignal {
    /// Normalized (lowercase) descriptor.
    pub key: String,
    /// Title-cased descriptor for display.
    pub label: String,
    pub count: u32,
    pub last_seen: DateTime<Utc>,
    /// Rank-derived weight. Recomputed on every ranking of the store and
    /// never trusted from persisted data.
    #[serde(default)]
    pub weight: f64,
}
