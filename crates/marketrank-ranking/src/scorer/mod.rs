//! Multi-signal relevance scorer.
//!
//! ```text
//! baseScore = 1
//!   + active need   (tag 7, category 5, description 4)
//!   + detected need (tag 1.5w, description 1.0w; w = N - i)
//!   + roi + 0.5 × popularity
//!   + industry      (6 via tag/category/vertical)
//!   + browsing      (tag 1.4w, description 1.0w, category 1.1w)
//! score = baseScore + attentionBonus
//! matchStrength = score / max(topScore, 1)
//! ```

pub mod attention;
pub mod breakdown;
pub mod weights;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use marketrank_core::config::RankingConfig;
use marketrank_core::{AttentionEntry, BrowsingSignal, CatalogItem, ScoredEntry};
use marketrank_observability::tracing_setup::events;

pub use breakdown::ScoreBreakdown;
pub use weights::ScorerWeights;

use breakdown::PreparedSignals;

/// Everything a ranking pass reads besides the catalog.
#[derive(Debug, Clone, Copy)]
pub struct RankingContext<'a> {
    /// Detected needs, strongest first.
    pub needs: &'a [String],
    pub active_need: Option<&'a str>,
    /// Browsing signals, strongest first.
    pub browsing: &'a [BrowsingSignal],
    pub industry: Option<&'a str>,
    pub attention: &'a HashMap<String, AttentionEntry>,
    pub now: DateTime<Utc>,
}

/// Scorer holding its weights. Stateless between passes.
#[derive(Debug, Clone, Default)]
pub struct RelevanceScorer {
    weights: ScorerWeights,
}

impl RelevanceScorer {
    pub fn new(weights: ScorerWeights) -> Self {
        Self { weights }
    }

    pub fn from_config(config: &RankingConfig) -> Self {
        Self::new(ScorerWeights::from(config))
    }

    pub fn weights(&self) -> &ScorerWeights {
        &self.weights
    }

    /// Score and sort the catalog. Highest score first; ties keep catalog
    /// order. Empty catalog → empty ranking.
    pub fn rank(&self, catalog: &[CatalogItem], ctx: &RankingContext<'_>) -> Vec<ScoredEntry> {
        score(catalog, ctx, &self.weights)
    }

    /// Per-factor breakdown of one item's score in this context.
    pub fn explain(&self, item: &CatalogItem, ctx: &RankingContext<'_>) -> ScoreBreakdown {
        let prepared = PreparedSignals::new(ctx);
        breakdown::compute(item, &prepared, ctx, &self.weights)
    }
}

/// Score a catalog with the given weights.
pub fn score(
    catalog: &[CatalogItem],
    ctx: &RankingContext<'_>,
    weights: &ScorerWeights,
) -> Vec<ScoredEntry> {
    let _span = marketrank_observability::ranking_span!(catalog.len(), ctx.active_need).entered();
    if catalog.is_empty() {
        return Vec::new();
    }

    let prepared = PreparedSignals::new(ctx);
    let mut scored: Vec<ScoredEntry> = catalog
        .iter()
        .map(|item| {
            let b = breakdown::compute(item, &prepared, ctx, weights);
            ScoredEntry {
                item: item.clone(),
                base_score: b.base_score,
                attention_bonus: b.attention,
                score: b.total,
                match_strength: 0.0,
                industry_match: b.industry_match,
                browsing_match: b.browsing_match,
            }
        })
        .collect();

    let max_score = scored
        .iter()
        .map(|s| s.score)
        .fold(f64::NEG_INFINITY, f64::max);
    let denominator = max_score.max(1.0);
    for entry in &mut scored {
        entry.match_strength = (entry.score / denominator).clamp(0.0, 1.0);
    }

    // Stable: equal scores keep catalog order.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    events::ranking_completed(scored.len(), max_score);
    scored
}
