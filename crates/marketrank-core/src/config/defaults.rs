// Single source of truth for all default values.

use crate::constants;

// --- Attention ---
pub const DEFAULT_ATTENTION_MAX_ENTRIES: usize = constants::MAX_ATTENTION_ENTRIES;
pub const DEFAULT_LOAD_DECAY_BASE: f64 = 0.94;
pub const DEFAULT_LOAD_DECAY_WINDOW_MINUTES: f64 = 18.0;
pub const DEFAULT_FLUSH_DECAY: f64 = 0.985;
pub const DEFAULT_PRUNE_THRESHOLD: f64 = 0.01;

// --- Browsing ---
pub const DEFAULT_BROWSING_MAX_SIGNALS: usize = constants::MAX_BROWSING_SIGNALS;
pub const DEFAULT_BROWSING_MAX_TRACKED: usize = constants::MAX_TRACKED_BROWSING_KEYS;

// --- Needs ---
pub const DEFAULT_MAX_NEEDS: usize = constants::MAX_DETECTED_NEEDS;
pub const DEFAULT_ENTERPRISE_TEAM_SIZE: u32 = 500;
pub const DEFAULT_TEAM_PRODUCTIVITY_SIZE: u32 = 120;

// --- Ranking ---
pub const DEFAULT_ACTIVE_NEED_TAG: f64 = 7.0;
pub const DEFAULT_ACTIVE_NEED_CATEGORY: f64 = 5.0;
pub const DEFAULT_ACTIVE_NEED_DESCRIPTION: f64 = 4.0;
pub const DEFAULT_NEED_TAG: f64 = 1.5;
pub const DEFAULT_NEED_DESCRIPTION: f64 = 1.0;
pub const DEFAULT_POPULARITY: f64 = 0.5;
pub const DEFAULT_INDUSTRY: f64 = 6.0;
pub const DEFAULT_BROWSING_TAG: f64 = 1.4;
pub const DEFAULT_BROWSING_DESCRIPTION: f64 = 1.0;
pub const DEFAULT_BROWSING_CATEGORY: f64 = 1.1;

// --- Aggregate ---
pub const DEFAULT_BACKGROUND_ENABLED: bool = true;
pub const DEFAULT_COMBO_SIZE: usize = 3;
pub const DEFAULT_COMBO_MIN_OVERLAP: usize = 2;
pub const DEFAULT_COMBO_OVERLAP_WEIGHT: f64 = 1.75;
pub const DEFAULT_COMBO_FOCUS_BONUS: f64 = 2.5;

// --- Search ---
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
