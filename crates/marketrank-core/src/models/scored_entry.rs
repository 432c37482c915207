use serde::{Deserialize, Serialize};

use super::CatalogItem;

/// One catalog item after a ranking pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEntry {
    pub item: CatalogItem,
    pub base_score: f64,
    pub attention_bonus: f64,
    /// `base_score + attention_bonus`.
    pub score: f64,
    /// `score / max(top score, 1)`, always in [0, 1].
    pub match_strength: f64,
    pub industry_match: bool,
    pub browsing_match: bool,
}
