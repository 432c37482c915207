//! Per-factor score computation shared by ranking and explanation.

use marketrank_core::text::{any_contains_ci, contains_ci};
use marketrank_core::CatalogItem;
use serde::{Deserialize, Serialize};

use super::{attention, RankingContext, ScorerWeights};

/// Every additive term of one item's score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub item_id: String,
    pub active_need: f64,
    pub needs: f64,
    pub roi: f64,
    pub popularity: f64,
    pub industry: f64,
    pub browsing: f64,
    /// 1 + all of the above.
    pub base_score: f64,
    pub attention: f64,
    /// `base_score + attention`.
    pub total: f64,
    pub industry_match: bool,
    pub browsing_match: bool,
}

/// Signals lowercased once per pass, with their rank weights resolved.
pub(crate) struct PreparedSignals {
    active_need: Option<String>,
    /// (lowercase need, weight N - i)
    needs: Vec<(String, f64)>,
    industry: Option<String>,
    /// (lowercase key, weight)
    browsing: Vec<(String, f64)>,
}

impl PreparedSignals {
    pub(crate) fn new(ctx: &RankingContext<'_>) -> Self {
        let lower = |s: &str| {
            let s = s.trim().to_lowercase();
            (!s.is_empty()).then_some(s)
        };

        let n = ctx.needs.len();
        let needs = ctx
            .needs
            .iter()
            .enumerate()
            .filter_map(|(i, need)| lower(need.as_str()).map(|need| (need, (n - i) as f64)))
            .collect();

        let len = ctx.browsing.len();
        let browsing = ctx
            .browsing
            .iter()
            .enumerate()
            .filter_map(|(i, signal)| {
                let key = lower(signal.key.as_str()).or_else(|| lower(signal.label.as_str()))?;
                let weight = if signal.weight.is_finite() && signal.weight > 0.0 {
                    signal.weight
                } else {
                    ((len - i) as f64 * 0.9).max(1.0)
                };
                Some((key, weight))
            })
            .collect();

        Self {
            active_need: ctx.active_need.and_then(lower),
            needs,
            industry: ctx.industry.and_then(lower),
            browsing,
        }
    }
}

pub(crate) fn compute(
    item: &CatalogItem,
    prepared: &PreparedSignals,
    ctx: &RankingContext<'_>,
    w: &ScorerWeights,
) -> ScoreBreakdown {
    let category = item.category_label().unwrap_or("");
    let mut b = ScoreBreakdown {
        item_id: item.id.clone(),
        ..Default::default()
    };

    if let Some(focus) = prepared.active_need.as_deref() {
        if any_contains_ci(&item.tags, focus) {
            b.active_need += w.active_need_tag;
        }
        if contains_ci(category, focus) {
            b.active_need += w.active_need_category;
        }
        if contains_ci(&item.description, focus) {
            b.active_need += w.active_need_description;
        }
    }

    for (need, weight) in &prepared.needs {
        if any_contains_ci(&item.tags, need) {
            b.needs += w.need_tag * weight;
        }
        if contains_ci(&item.description, need) {
            b.needs += w.need_description * weight;
        }
    }

    b.roi = item.numeric_roi().unwrap_or(0.0);
    b.popularity = item.numeric_popularity().map_or(0.0, |p| p * w.popularity);

    if let Some(industry) = prepared.industry.as_deref() {
        b.industry_match = any_contains_ci(&item.tags, industry)
            || item.category.as_deref().is_some_and(|c| contains_ci(c, industry))
            || item.vertical.as_deref().is_some_and(|v| contains_ci(v, industry));
        if b.industry_match {
            b.industry = w.industry;
        }
    }

    for (key, weight) in &prepared.browsing {
        let mut matched = false;
        if any_contains_ci(&item.tags, key) {
            b.browsing += w.browsing_tag * weight;
            matched = true;
        }
        if contains_ci(&item.description, key) {
            b.browsing += w.browsing_description * weight;
            matched = true;
        }
        if contains_ci(category, key) {
            b.browsing += w.browsing_category * weight;
            matched = true;
        }
        b.browsing_match |= matched;
    }

    b.base_score = 1.0 + b.active_need + b.needs + b.roi + b.popularity + b.industry + b.browsing;
    b.attention = attention::bonus(ctx.attention.get(&item.id), ctx.now);
    b.total = b.base_score + b.attention;
    b
}
