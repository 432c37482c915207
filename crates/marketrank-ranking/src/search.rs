//! Debounced substring search over the ranked list.
//!
//! The filter is applied strictly after ranking: retained entries keep their
//! ranked order, and a blank query passes everything through.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use marketrank_core::config::SearchConfig;
use marketrank_core::text::{any_contains_ci, contains_ci};
use marketrank_core::{CatalogItem, IClock, ScoredEntry};
use tracing::debug;

/// Whether an item's name, description, category, vertical or tags contain
/// `query_lower`.
pub fn matches_query(item: &CatalogItem, query_lower: &str) -> bool {
    contains_ci(&item.name, query_lower)
        || contains_ci(&item.description, query_lower)
        || item
            .category
            .as_deref()
            .is_some_and(|c| contains_ci(c, query_lower))
        || item
            .vertical
            .as_deref()
            .is_some_and(|v| contains_ci(v, query_lower))
        || any_contains_ci(&item.tags, query_lower)
}

/// Filter a ranked list without reordering it.
pub fn filter_ranked(entries: &[ScoredEntry], query: &str) -> Vec<ScoredEntry> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return entries.to_vec();
    }
    entries
        .iter()
        .filter(|e| matches_query(&e.item, &query))
        .cloned()
        .collect()
}

/// Trailing-edge debounced query holder.
///
/// A query typed at `t` becomes active at the first [`poll`](Self::poll) at
/// or after `t + debounce`; typing again restarts the window.
pub struct SearchFilter {
    clock: Arc<dyn IClock>,
    debounce: Duration,
    pending: Option<(String, DateTime<Utc>)>,
    active: String,
}

impl SearchFilter {
    pub fn new(clock: Arc<dyn IClock>, config: &SearchConfig) -> Self {
        // Windows too large for a `Duration` saturate; such a query never activates.
        let debounce = i64::try_from(config.debounce_ms)
            .ok()
            .and_then(Duration::try_milliseconds)
            .unwrap_or(Duration::MAX);
        Self {
            clock,
            debounce,
            pending: None,
            active: String::new(),
        }
    }

    /// Record a typed query. It takes effect after the debounce window.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.pending = Some((query.into(), self.clock.now()));
    }

    /// Promote the pending query once its window has elapsed. Returns
    /// whether the active query changed.
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now();
        let ready = matches!(&self.pending, Some((_, at)) if now - *at >= self.debounce);
        if !ready {
            return false;
        }
        match self.pending.take() {
            Some((query, _)) if query != self.active => {
                debug!(query = %query, "search query applied");
                self.active = query;
                true
            }
            _ => false,
        }
    }

    /// The query currently filtering results.
    pub fn active_query(&self) -> &str {
        &self.active
    }

    /// The query still inside its debounce window, if any.
    pub fn pending_query(&self) -> Option<&str> {
        self.pending.as_ref().map(|(q, _)| q.as_str())
    }

    /// Narrow a ranked list by the active query.
    pub fn apply(&self, ranked: &[ScoredEntry]) -> Vec<ScoredEntry> {
        filter_ranked(ranked, &self.active)
    }

    /// Drop both the pending and the active query.
    pub fn clear(&mut self) {
        self.pending = None;
        self.active.clear();
    }
}
