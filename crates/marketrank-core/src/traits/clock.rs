use chrono::{DateTime, Utc};

/// Source of "now" for every time-dependent computation.
pub trait IClock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
