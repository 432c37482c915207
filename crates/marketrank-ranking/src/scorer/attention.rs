//! Attention bonus from an item's dwell history.

use chrono::{DateTime, Utc};
use marketrank_core::constants::MILLIS_PER_MINUTE;
use marketrank_core::AttentionEntry;

/// Score contribution is capped at this many decayed dwell seconds.
pub const SCORE_CAP: f64 = 12.0;
pub const SCORE_WEIGHT: f64 = 1.6;
/// Interaction contribution is capped at this many interactions.
pub const INTERACTION_CAP: u32 = 6;
pub const INTERACTION_WEIGHT: f64 = 0.3;
/// Recency boost right after a view; fades to zero over `RECENCY_FADE_MINUTES × 1.35`.
pub const RECENCY_PEAK: f64 = 1.35;
pub const RECENCY_FADE_MINUTES: f64 = 8.0;

/// `min(score, 12) × 1.6 + min(interactions, 6) × 0.3 + max(0, 1.35 − minutes / 8)`.
///
/// 0 when the item has no entry.
pub fn bonus(entry: Option<&AttentionEntry>, now: DateTime<Utc>) -> f64 {
    let Some(entry) = entry else {
        return 0.0;
    };
    let recency_minutes =
        ((now - entry.last_viewed).num_milliseconds() as f64 / MILLIS_PER_MINUTE).max(0.0);
    let recency_boost = (RECENCY_PEAK - recency_minutes / RECENCY_FADE_MINUTES).max(0.0);
    let score = if entry.score.is_finite() {
        entry.score.max(0.0)
    } else {
        0.0
    };

    score.min(SCORE_CAP) * SCORE_WEIGHT
        + f64::from(entry.interactions.min(INTERACTION_CAP)) * INTERACTION_WEIGHT
        + recency_boost
}
