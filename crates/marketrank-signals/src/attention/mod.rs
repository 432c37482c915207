//! AttentionStore: persisted, decay-weighted dwell attention per catalog item.
//!
//! Two decay stages stack on every entry:
//! - load-time: `score × base^(ageMinutes / window)` when state is restored;
//! - flush-time: `(score + queuedSeconds) × flush_decay` whenever new dwell
//!   for the item is applied.

pub mod decay;
pub mod queue;

use std::collections::HashMap;
use std::sync::Arc;

use marketrank_core::config::AttentionConfig;
use marketrank_core::{AttentionEntry, IClock, IFlushScheduler, IKeyValueStorage};
use marketrank_observability::tracing_setup::events;
use tracing::debug;

use crate::persistence;
use queue::DwellQueue;

/// Dwell attention store. Never holds more than `max_entries` entries.
pub struct AttentionStore {
    storage: Arc<dyn IKeyValueStorage>,
    clock: Arc<dyn IClock>,
    scheduler: Arc<dyn IFlushScheduler>,
    config: AttentionConfig,
    entries: HashMap<String, AttentionEntry>,
    queue: DwellQueue,
}

impl AttentionStore {
    /// Create an empty store. Call [`load`](Self::load) to restore persisted state.
    pub fn new(
        storage: Arc<dyn IKeyValueStorage>,
        clock: Arc<dyn IClock>,
        scheduler: Arc<dyn IFlushScheduler>,
        config: AttentionConfig,
    ) -> Self {
        Self {
            storage,
            clock,
            scheduler,
            config,
            entries: HashMap::new(),
            queue: DwellQueue::new(),
        }
    }

    /// Restore persisted entries, applying load-time decay.
    ///
    /// Entries whose decayed score is at or below the prune threshold and
    /// that were never interacted with are dropped; the rest are trimmed to
    /// the highest-scoring `max_entries`.
    pub fn load(&mut self) -> &HashMap<String, AttentionEntry> {
        let now = self.clock.now();
        let persisted: Vec<AttentionEntry> =
            persistence::read_json(self.storage.as_ref(), &self.config.storage_key)
                .unwrap_or_default();
        let raw_count = persisted.len();

        let decayed: Vec<AttentionEntry> = persisted
            .into_iter()
            .filter(|e| !e.item_id.is_empty())
            .map(|e| decay::decay_entry(e, now, &self.config))
            .filter(|e| !decay::should_prune(e, self.config.prune_threshold))
            .collect();

        self.entries = top_entries(decayed, self.config.max_entries)
            .into_iter()
            .map(|e| (e.item_id.clone(), e))
            .collect();

        debug!(
            persisted = raw_count,
            retained = self.entries.len(),
            "attention entries loaded"
        );
        &self.entries
    }

    /// Queue a dwell observation. Ignored unless `delta_ms` is a finite
    /// positive number and `item_id` is non-empty.
    ///
    /// Events for the same item within one cycle are summed. Without a cycle
    /// scheduler the queue is flushed immediately.
    pub fn register_dwell(&mut self, item_id: &str, delta_ms: f64) -> bool {
        if item_id.is_empty() || !delta_ms.is_finite() || delta_ms <= 0.0 {
            debug!(item_id, delta_ms, "ignoring invalid dwell input");
            return false;
        }

        self.queue.push(item_id, delta_ms / 1000.0);
        if !self.scheduler.request_flush() {
            self.flush();
        }
        true
    }

    /// Apply every queued dwell: `score = max(0, (score + seconds) × flush_decay)`,
    /// one interaction per item, `last_viewed = now`. Trims and persists.
    ///
    /// Returns the number of items updated.
    pub fn flush(&mut self) -> usize {
        if self.queue.is_empty() {
            return 0;
        }
        let _span = marketrank_observability::attention_span!(self.queue.len()).entered();
        let now = self.clock.now();
        let batch = self.queue.drain();
        let updated = batch.len();

        for (item_id, seconds) in batch {
            let entry = self
                .entries
                .entry(item_id.clone())
                .or_insert_with(|| AttentionEntry::new(item_id, now));
            entry.score = decay::flushed_score(entry.score, seconds, self.config.flush_decay);
            entry.interactions = entry.interactions.saturating_add(1);
            entry.last_viewed = now;
        }

        if self.entries.len() > self.config.max_entries {
            let all: Vec<AttentionEntry> = self.entries.drain().map(|(_, e)| e).collect();
            self.entries = top_entries(all, self.config.max_entries)
                .into_iter()
                .map(|e| (e.item_id.clone(), e))
                .collect();
        }

        self.persist();
        events::dwell_flushed(updated, self.entries.len());
        updated
    }

    /// Write the highest-scoring `max_entries` entries, or remove the key
    /// when there are none. Failures are logged and otherwise ignored.
    pub fn persist(&self) {
        let top = top_entries(self.entries.values().cloned().collect(), self.config.max_entries);
        if top.is_empty() {
            persistence::remove_key(self.storage.as_ref(), &self.config.storage_key);
        } else {
            persistence::write_json(self.storage.as_ref(), &self.config.storage_key, &top);
        }
    }

    pub fn entries(&self) -> &HashMap<String, AttentionEntry> {
        &self.entries
    }

    pub fn get(&self, item_id: &str) -> Option<&AttentionEntry> {
        self.entries.get(item_id)
    }

    /// Items waiting for the next flush.
    pub fn pending_len(&self) -> usize {
        self.queue.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries and queued dwell, and remove the persisted key.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.queue.clear();
        persistence::remove_key(self.storage.as_ref(), &self.config.storage_key);
    }
}

/// Highest score first, ties by most recent view then id, truncated to `cap`.
pub fn top_entries(mut entries: Vec<AttentionEntry>, cap: usize) -> Vec<AttentionEntry> {
    entries.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(b.last_viewed.cmp(&a.last_viewed))
            .then_with(|| a.item_id.cmp(&b.item_id))
    });
    entries.truncate(cap);
    entries
}
