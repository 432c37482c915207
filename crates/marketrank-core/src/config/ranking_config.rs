use serde::{Deserialize, Serialize};

use super::defaults;

/// Relevance scorer weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub active_need_tag: f64,
    pub active_need_category: f64,
    pub active_need_description: f64,
    /// Multiplied by the need's rank weight (N - i).
    pub need_tag: f64,
    pub need_description: f64,
    pub popularity: f64,
    pub industry: f64,
    /// Multiplied by the browsing signal's weight.
    pub browsing_tag: f64,
    pub browsing_description: f64,
    pub browsing_category: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            active_need_tag: defaults::DEFAULT_ACTIVE_NEED_TAG,
            active_need_category: defaults::DEFAULT_ACTIVE_NEED_CATEGORY,
            active_need_description: defaults::DEFAULT_ACTIVE_NEED_DESCRIPTION,
            need_tag: defaults::DEFAULT_NEED_TAG,
            need_description: defaults::DEFAULT_NEED_DESCRIPTION,
            popularity: defaults::DEFAULT_POPULARITY,
            industry: defaults::DEFAULT_INDUSTRY,
            browsing_tag: defaults::DEFAULT_BROWSING_TAG,
            browsing_description: defaults::DEFAULT_BROWSING_DESCRIPTION,
            browsing_category: defaults::DEFAULT_BROWSING_CATEGORY,
        }
    }
}
