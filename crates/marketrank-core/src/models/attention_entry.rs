use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Accumulated dwell attention for one catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttentionEntry {
    pub item_id: String,
    /// Decayed dwell seconds. Never negative.
    pub score: f64,
    /// Number of flushes that touched this entry.
    pub interactions: u32,
    pub last_viewed: DateTime<Utc>,
}

impl AttentionEntry {
    pub fn new(item_id: impl Into<String>, last_viewed: DateTime<Utc>) -> Self {
        Self {
            item_id: item_id.into(),
            score: 0.0,
            interactions: 0,
            last_viewed,
        }
    }
}
