use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;

/// Attention store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AttentionConfig {
    /// Entries retained and persisted, highest score first.
    pub max_entries: usize,
    /// Base of the load-time decay: `base^(ageMinutes / window)`.
    pub load_decay_base: f64,
    /// Window (minutes) of the load-time decay exponent.
    pub load_decay_window_minutes: f64,
    /// Multiplier applied to an entry on every dwell flush.
    pub flush_decay: f64,
    /// Decayed score at or below which an entry without interactions is dropped.
    pub prune_threshold: f64,
    /// Persistence key.
    pub storage_key: String,
}

impl Default for AttentionConfig {
    fn default() -> Self {
        Self {
            max_entries: defaults::DEFAULT_ATTENTION_MAX_ENTRIES,
            load_decay_base: defaults::DEFAULT_LOAD_DECAY_BASE,
            load_decay_window_minutes: defaults::DEFAULT_LOAD_DECAY_WINDOW_MINUTES,
            flush_decay: defaults::DEFAULT_FLUSH_DECAY,
            prune_threshold: defaults::DEFAULT_PRUNE_THRESHOLD,
            storage_key: constants::ATTENTION_STORAGE_KEY.to_string(),
        }
    }
}
