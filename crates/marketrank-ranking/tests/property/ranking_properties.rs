use std::collections::HashMap;

use marketrank_core::CatalogItem;
use marketrank_ranking::search::filter_ranked;
use marketrank_ranking::{RankingContext, RelevanceScorer};
use proptest::prelude::*;

const WORDS: &[&str] = &["health", "finance", "automation", "analytics", "legal", "ops"];

fn arb_item() -> impl Strategy<Value = CatalogItem> {
    (
        "[a-z]{1,8}",
        proptest::sample::subsequence(WORDS, 0..3),
        proptest::option::of(-3.0f64..10.0),
        proptest::option::of(0.0f64..5.0),
        proptest::sample::select(WORDS),
    )
        .prop_map(|(id, tags, roi, popularity, category)| {
            let mut item = CatalogItem::new(id.clone(), id)
                .with_tags(tags.iter().copied())
                .with_category(category);
            item.roi = roi;
            item.popularity = popularity;
            item
        })
}

proptest! {
    #[test]
    fn match_strength_is_normalized(
        catalog in proptest::collection::vec(arb_item(), 1..20),
        needs in proptest::sample::subsequence(WORDS, 0..4),
    ) {
        let needs: Vec<String> = needs.iter().map(|s| s.to_string()).collect();
        let attention = HashMap::new();
        let ctx = RankingContext {
            needs: &needs,
            active_need: needs.first().map(String::as_str),
            browsing: &[],
            industry: None,
            attention: &attention,
            now: test_fixtures::epoch(),
        };
        let ranked = RelevanceScorer::default().rank(&catalog, &ctx);

        prop_assert_eq!(ranked.len(), catalog.len());
        for entry in &ranked {
            prop_assert!((0.0..=1.0).contains(&entry.match_strength));
        }
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        if ranked[0].score >= 1.0 {
            prop_assert!((ranked[0].match_strength - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn search_filter_is_an_order_preserving_subset(
        catalog in proptest::collection::vec(arb_item(), 0..20),
        query in proptest::sample::select(WORDS),
    ) {
        let attention = HashMap::new();
        let ctx = RankingContext {
            needs: &[],
            active_need: None,
            browsing: &[],
            industry: None,
            attention: &attention,
            now: test_fixtures::epoch(),
        };
        let ranked = RelevanceScorer::default().rank(&catalog, &ctx);
        let filtered = filter_ranked(&ranked, query);

        let mut cursor = ranked.iter();
        for entry in &filtered {
            prop_assert!(cursor.any(|r| r == entry));
        }
    }
}
