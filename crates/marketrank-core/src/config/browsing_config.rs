use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;

/// Browsing signal store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowsingConfig {
    /// Signals surfaced to ranking.
    pub max_signals: usize,
    /// Keys tracked and persisted. Never below `max_signals`.
    pub max_tracked: usize,
    /// Persistence key.
    pub storage_key: String,
}

impl Default for BrowsingConfig {
    fn default() -> Self {
        Self {
            max_signals: defaults::DEFAULT_BROWSING_MAX_SIGNALS,
            max_tracked: defaults::DEFAULT_BROWSING_MAX_TRACKED,
            storage_key: constants::BROWSING_STORAGE_KEY.to_string(),
        }
    }
}
