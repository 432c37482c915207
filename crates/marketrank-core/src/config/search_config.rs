use serde::{Deserialize, Serialize};

use super::defaults;

/// Search filter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period before a typed query takes effect.
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: defaults::DEFAULT_SEARCH_DEBOUNCE_MS,
        }
    }
}
