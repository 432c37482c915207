use serde::{Deserialize, Serialize};

use super::defaults;

/// Aggregate metrics configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateConfig {
    /// Run aggregates on a background thread when it can be spawned.
    pub background_enabled: bool,
    /// Number of combo entries returned.
    pub combo_size: usize,
    /// Minimum signal overlap for an item to join the combo.
    pub combo_min_overlap: usize,
    pub combo_overlap_weight: f64,
    /// Added to every combo score while an active need is set.
    pub combo_focus_bonus: f64,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            background_enabled: defaults::DEFAULT_BACKGROUND_ENABLED,
            combo_size: defaults::DEFAULT_COMBO_SIZE,
            combo_min_overlap: defaults::DEFAULT_COMBO_MIN_OVERLAP,
            combo_overlap_weight: defaults::DEFAULT_COMBO_OVERLAP_WEIGHT,
            combo_focus_bonus: defaults::DEFAULT_COMBO_FOCUS_BONUS,
        }
    }
}
