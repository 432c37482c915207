//! Attention decay formulas.

use chrono::{DateTime, Utc};
use marketrank_core::config::AttentionConfig;
use marketrank_core::constants::MILLIS_PER_MINUTE;
use marketrank_core::AttentionEntry;

/// Minutes elapsed from `then` to `now`, never negative.
pub fn age_minutes(then: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - then).num_milliseconds().max(0) as f64 / MILLIS_PER_MINUTE
}

/// Load-time decay multiplier: `base^(ageMinutes / window)`.
///
/// Range: (0.0, 1.0] for a base in (0, 1).
pub fn load_multiplier(age_minutes: f64, base: f64, window_minutes: f64) -> f64 {
    if window_minutes <= 0.0 {
        return 1.0;
    }
    base.powf(age_minutes.max(0.0) / window_minutes)
}

/// Score after a flush: `max(0, (old + queuedSeconds) × flushDecay)`.
pub fn flushed_score(old: f64, queued_seconds: f64, flush_decay: f64) -> f64 {
    ((sanitize(old) + queued_seconds) * flush_decay).max(0.0)
}

/// Apply load-time decay to a persisted entry. Negative or non-finite
/// scores are treated as 0.
pub fn decay_entry(mut entry: AttentionEntry, now: DateTime<Utc>, config: &AttentionConfig) -> AttentionEntry {
    let multiplier = load_multiplier(
        age_minutes(entry.last_viewed, now),
        config.load_decay_base,
        config.load_decay_window_minutes,
    );
    entry.score = sanitize(entry.score) * multiplier;
    entry
}

/// An entry is pruned when its score has decayed to noise and it was never
/// interacted with.
pub fn should_prune(entry: &AttentionEntry, threshold: f64) -> bool {
    entry.score <= threshold && entry.interactions == 0
}

fn sanitize(score: f64) -> f64 {
    if score.is_finite() {
        score.max(0.0)
    } else {
        0.0
    }
}
