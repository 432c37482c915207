use std::time::Duration;

use marketrank_aggregate::{compute_aggregates, AggregateEngine};
use marketrank_core::config::AggregateConfig;
use marketrank_core::{AggregateRequest, CatalogItem};
use proptest::prelude::*;

const WORDS: &[&str] = &["health", "finance", "automation", "analytics", "legal", "ops"];

fn arb_item() -> impl Strategy<Value = CatalogItem> {
    (
        "[a-z]{1,6}",
        proptest::sample::subsequence(WORDS, 0..4),
        proptest::option::of(proptest::sample::select(WORDS)),
        proptest::option::of(-2.0f64..9.0),
    )
        .prop_map(|(id, tags, category, roi)| {
            let mut item = CatalogItem::new(id.clone(), id).with_tags(tags.iter().copied());
            item.category = category.map(str::to_string);
            item.roi = roi;
            item
        })
}

fn arb_request() -> impl Strategy<Value = AggregateRequest> {
    (
        proptest::collection::vec(arb_item(), 0..16),
        proptest::sample::subsequence(WORDS, 0..5),
        proptest::option::of(proptest::sample::select(WORDS)),
    )
        .prop_map(|(catalog, signals, focus)| AggregateRequest {
            catalog,
            signals: signals.iter().map(|s| s.to_string()).collect(),
            focus: focus.map(str::to_string),
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn background_and_synchronous_paths_agree(request in arb_request()) {
        let config = AggregateConfig::default();
        let expected = compute_aggregates(&request, &config);

        let mut engine = AggregateEngine::new(config);
        let metrics = match engine.submit(request) {
            Some(metrics) => metrics,
            None => engine.wait_latest(Duration::from_secs(10)).unwrap(),
        };

        match (metrics.average_roi, expected.average_roi) {
            (Some(a), Some(b)) => prop_assert!((a - b).abs() < 1e-6),
            (a, b) => prop_assert_eq!(a, b),
        }
        prop_assert_eq!(
            metrics.top_category.map(|t| t.category),
            expected.top_category.map(|t| t.category)
        );
        prop_assert_eq!(
            metrics.combo.first().map(|c| c.id.clone()),
            expected.combo.first().map(|c| c.id.clone())
        );
    }

    #[test]
    fn combo_is_bounded_and_sorted(request in arb_request()) {
        let metrics = compute_aggregates(&request, &AggregateConfig::default());
        prop_assert!(metrics.combo.len() <= 3);
        for pair in metrics.combo.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        for entry in &metrics.combo {
            prop_assert!(entry.overlap >= 2);
        }
    }
}
