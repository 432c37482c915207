//! BrowsingSignalStore: persisted, recency-weighted exposure to categories and tags.

pub mod ranking;

use std::collections::HashMap;
use std::sync::Arc;

use marketrank_core::config::BrowsingConfig;
use marketrank_core::text::{normalize_key, title_case};
use marketrank_core::{BrowsingSignal, IClock, IKeyValueStorage};
use tracing::debug;

use crate::persistence;

/// Exposure store. Tracks counts for up to `max_tracked` keys and surfaces
/// the top `max_signals`, ranked by (count desc, last seen desc).
pub struct BrowsingSignalStore {
    storage: Arc<dyn IKeyValueStorage>,
    clock: Arc<dyn IClock>,
    config: BrowsingConfig,
    /// Every tracked key in ranking order. This is what gets persisted.
    tracked: Vec<BrowsingSignal>,
    /// Top `max_signals` of `tracked`.
    ranked: Vec<BrowsingSignal>,
}

impl BrowsingSignalStore {
    /// Create an empty store. Call [`load`](Self::load) to restore persisted state.
    pub fn new(
        storage: Arc<dyn IKeyValueStorage>,
        clock: Arc<dyn IClock>,
        config: BrowsingConfig,
    ) -> Self {
        Self {
            storage,
            clock,
            config,
            tracked: Vec::new(),
            ranked: Vec::new(),
        }
    }

    /// Restore persisted signals. Missing or malformed data yields an empty
    /// store.
    pub fn load(&mut self) -> &[BrowsingSignal] {
        let persisted: Vec<BrowsingSignal> =
            persistence::read_json(self.storage.as_ref(), &self.config.storage_key)
                .unwrap_or_default();

        let mut by_key: HashMap<String, BrowsingSignal> = HashMap::new();
        for mut signal in persisted {
            let key = normalize_key(&signal.key);
            if key.is_empty() {
                continue;
            }
            signal.key = key.clone();
            match by_key.get_mut(&key) {
                Some(existing) => {
                    existing.count = existing.count.max(signal.count);
                    existing.last_seen = existing.last_seen.max(signal.last_seen);
                }
                None => {
                    by_key.insert(key, signal);
                }
            }
        }

        self.tracked = by_key.into_values().collect();
        self.rerank();
        debug!(
            signals = self.ranked.len(),
            tracked = self.tracked.len(),
            "browsing signals loaded"
        );
        &self.ranked
    }

    /// Record one exposure for every distinct non-empty descriptor, then
    /// re-rank and persist. Returns whether anything changed.
    pub fn record_exposure<S: AsRef<str>>(&mut self, descriptors: &[S]) -> bool {
        let _span = marketrank_observability::browsing_span!(descriptors.len()).entered();
        let now = self.clock.now();

        let mut seen_this_call: Vec<String> = Vec::new();
        for descriptor in descriptors {
            let raw = descriptor.as_ref();
            let key = normalize_key(raw);
            if key.is_empty() || seen_this_call.contains(&key) {
                continue;
            }
            let label = title_case(raw);
            match self.tracked.iter_mut().find(|s| s.key == key) {
                Some(existing) => {
                    existing.count = existing.count.saturating_add(1);
                    existing.last_seen = now;
                    existing.label = label;
                }
                None => self.tracked.push(BrowsingSignal {
                    key: key.clone(),
                    label,
                    count: 1,
                    last_seen: now,
                    weight: 0.0,
                }),
            }
            seen_this_call.push(key);
        }

        if seen_this_call.is_empty() {
            return false;
        }
        self.rerank();
        self.persist();
        true
    }

    /// Ranked signals, strongest first.
    pub fn signals(&self) -> &[BrowsingSignal] {
        &self.ranked
    }

    /// Every tracked signal in ranking order, including keys outside the
    /// surfaced top.
    pub fn tracked(&self) -> &[BrowsingSignal] {
        &self.tracked
    }

    /// Exposure count of a key, whether or not it is currently surfaced.
    pub fn count(&self, descriptor: &str) -> u32 {
        let key = normalize_key(descriptor);
        self.tracked
            .iter()
            .find(|s| s.key == key)
            .map_or(0, |s| s.count)
    }

    /// Display labels of the ranked signals.
    pub fn labels(&self) -> Vec<String> {
        self.ranked.iter().map(|s| s.label.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Forget every signal and remove the persisted key.
    pub fn clear(&mut self) {
        self.tracked.clear();
        self.ranked.clear();
        persistence::remove_key(self.storage.as_ref(), &self.config.storage_key);
    }

    fn rerank(&mut self) {
        let cap = self.config.max_tracked.max(self.config.max_signals);
        self.tracked = ranking::rank(std::mem::take(&mut self.tracked), cap);
        self.ranked = self
            .tracked
            .iter()
            .take(self.config.max_signals)
            .cloned()
            .collect();
    }

    fn persist(&self) {
        if self.tracked.is_empty() {
            persistence::remove_key(self.storage.as_ref(), &self.config.storage_key);
        } else {
            persistence::write_json(self.storage.as_ref(), &self.config.storage_key, &self.tracked);
        }
    }
}
