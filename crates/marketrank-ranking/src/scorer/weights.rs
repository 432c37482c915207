use marketrank_core::config::RankingConfig;

/// Weights for every scoring factor. Defaults mirror [`RankingConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScorerWeights {
    pub active_need_tag: f64,
    pub active_need_category: f64,
    pub active_need_description: f64,
    pub need_tag: f64,
    pub need_description: f64,
    pub popularity: f64,
    pub industry: f64,
    pub browsing_tag: f64,
    pub browsing_description: f64,
    pub browsing_category: f64,
}

impl Default for ScorerWeights {
    fn default() -> Self {
        Self::from(&RankingConfig::default())
    }
}

impl From<&RankingConfig> for ScorerWeights {
    fn from(config: &RankingConfig) -> Self {
        Self {
            active_need_tag: config.active_need_tag,
            active_need_category: config.active_need_category,
            active_need_description: config.active_need_description,
            need_tag: config.need_tag,
            need_description: config.need_description,
            popularity: config.popularity,
            industry: config.industry,
            browsing_tag: config.browsing_tag,
            browsing_description: config.browsing_description,
            browsing_category: config.browsing_category,
        }
    }
}
