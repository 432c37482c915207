/// Storage key holding the serialized browsing-signal map.
pub const BROWSING_STORAGE_KEY: &str = "marketplace.browsing-signals";

/// Storage key holding the serialized attention map.
pub const ATTENTION_STORAGE_KEY: &str = "marketplace.attention-scores";

/// Maximum number of attention entries retained and persisted.
pub const MAX_ATTENTION_ENTRIES: usize = 32;

/// Maximum number of browsing signals surfaced to ranking.
pub const MAX_BROWSING_SIGNALS: usize = 6;

/// Maximum number of browsing keys whose exposure counts are tracked and
/// persisted. Keys outside the surfaced top still accumulate counts.
pub const MAX_TRACKED_BROWSING_KEYS: usize = 64;

/// Maximum number of detected needs.
pub const MAX_DETECTED_NEEDS: usize = 4;

/// Milliseconds per minute, used by every recency computation.
pub const MILLIS_PER_MINUTE: f64 = 60_000.0;
