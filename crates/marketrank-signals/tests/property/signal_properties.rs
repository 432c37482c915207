use std::sync::Arc;

use chrono::Duration;
use marketrank_core::clock::ManualClock;
use marketrank_core::config::{AttentionConfig, BrowsingConfig};
use marketrank_core::constants::ATTENTION_STORAGE_KEY;
use marketrank_core::scheduler::{CycleScheduler, ImmediateFlush};
use marketrank_core::storage::InMemoryStorage;
use marketrank_core::{AttentionEntry, IKeyValueStorage};
use marketrank_signals::attention::decay;
use marketrank_signals::{AttentionStore, BrowsingSignalStore};
use proptest::prelude::*;

fn arb_entry() -> impl Strategy<Value = AttentionEntry> {
    (
        "[a-z]{1,6}",
        prop_oneof![-10.0f64..500.0, Just(f64::NAN), Just(0.0)],
        0u32..20,
        0i64..10_000,
    )
        .prop_map(|(item_id, score, interactions, minutes_ago)| AttentionEntry {
            item_id,
            score,
            interactions,
            last_viewed: test_fixtures::epoch() - Duration::minutes(minutes_ago),
        })
}

proptest! {
    #[test]
    fn load_is_bounded_and_non_negative(entries in prop::collection::vec(arb_entry(), 0..80)) {
        let storage = Arc::new(InMemoryStorage::new());
        // NaN does not survive JSON; persist what serde_json accepts.
        let sanitized: Vec<AttentionEntry> = entries
            .into_iter()
            .map(|mut e| { if !e.score.is_finite() { e.score = 0.0; } e })
            .collect();
        storage.set(ATTENTION_STORAGE_KEY, &serde_json::to_string(&sanitized).unwrap()).unwrap();

        let clock = Arc::new(ManualClock::new(test_fixtures::epoch()));
        let mut store = AttentionStore::new(storage, clock, Arc::new(ImmediateFlush), AttentionConfig::default());
        let loaded = store.load();
        prop_assert!(loaded.len() <= 32);
        prop_assert!(loaded.values().all(|e| e.score >= 0.0));
    }

    #[test]
    fn load_decay_is_monotonic(
        score in 0.0f64..1000.0,
        t1 in 0.0f64..10_000.0,
        dt in 0.0f64..10_000.0,
    ) {
        let config = AttentionConfig::default();
        let s1 = score * decay::load_multiplier(t1, config.load_decay_base, config.load_decay_window_minutes);
        let s2 = score * decay::load_multiplier(t1 + dt, config.load_decay_base, config.load_decay_window_minutes);
        prop_assert!(s2 <= s1 + f64::EPSILON);
        prop_assert!(s2 >= 0.0);
    }

    #[test]
    fn dwell_is_associative_within_one_cycle(
        parts in prop::collection::vec(1.0f64..5_000.0, 1..8),
    ) {
        let clock = Arc::new(ManualClock::new(test_fixtures::epoch()));
        let total: f64 = parts.iter().sum();

        let split_scheduler = Arc::new(CycleScheduler::new());
        let mut split = AttentionStore::new(
            Arc::new(InMemoryStorage::new()), clock.clone(), split_scheduler, AttentionConfig::default());
        for part in &parts {
            split.register_dwell("a", *part);
        }
        split.flush();

        let mut whole = AttentionStore::new(
            Arc::new(InMemoryStorage::new()), clock, Arc::new(ImmediateFlush), AttentionConfig::default());
        whole.register_dwell("a", total);

        let a = split.get("a").unwrap();
        let b = whole.get("a").unwrap();
        prop_assert!((a.score - b.score).abs() < 1e-6);
        prop_assert_eq!(a.interactions, b.interactions);
    }

    #[test]
    fn browsing_counts_never_decrease_and_cap_holds(
        batches in prop::collection::vec(prop::collection::vec("[a-e]{1,2}", 0..5), 1..20),
    ) {
        let clock = Arc::new(ManualClock::new(test_fixtures::epoch()));
        let mut store = BrowsingSignalStore::new(
            Arc::new(InMemoryStorage::new()), clock.clone(), BrowsingConfig::default());
        // At most 30 distinct keys, all within the tracked bound.
        let mut expected: std::collections::HashMap<String, u32> = Default::default();

        for batch in batches {
            clock.advance(Duration::seconds(1));
            let mut distinct = batch.clone();
            distinct.sort();
            distinct.dedup();
            for key in distinct {
                *expected.entry(key).or_default() += 1;
            }

            store.record_exposure(&batch);
            prop_assert!(store.len() <= 6);
            for (key, count) in &expected {
                prop_assert_eq!(store.count(key), *count);
            }
            let weights: Vec<f64> = store.signals().iter().map(|s| s.weight).collect();
            prop_assert!(weights.windows(2).all(|w| w[0] >= w[1]));
        }
    }
}
