use marketrank_core::config::NeedsConfig;
use marketrank_core::{CatalogItem, UserProfile};
use marketrank_needs::NeedDetector;
use proptest::prelude::*;

const TAGS: &[&str] = &["health", "Health", "finance", "ops", "analytics", "legal", "crm"];

fn arb_catalog() -> impl Strategy<Value = Vec<CatalogItem>> {
    proptest::collection::vec(
        proptest::sample::subsequence(TAGS, 0..4).prop_map(|tags| {
            CatalogItem::new("id", "name").with_tags(tags.iter().copied())
        }),
        0..12,
    )
}

fn arb_profile() -> impl Strategy<Value = Option<UserProfile>> {
    proptest::option::of(
        (
            proptest::option::of("[A-Za-z ]{0,12}"),
            proptest::option::of("[A-Za-z]{0,8}"),
            proptest::option::of(0u32..2000),
            proptest::collection::vec("[a-z ,;/|]{0,20}", 0..3),
        )
            .prop_map(|(industry, role, team_size, pain_points)| UserProfile {
                industry,
                role,
                team_size,
                pain_points,
                ..UserProfile::default()
            }),
    )
}

proptest! {
    #[test]
    fn needs_are_bounded_and_distinct(profile in arb_profile(), catalog in arb_catalog()) {
        let needs = NeedDetector::new(NeedsConfig::default()).detect(profile.as_ref(), &catalog);

        prop_assert!(needs.len() <= 4);
        let mut lowered: Vec<String> = needs.iter().map(|n| n.to_lowercase()).collect();
        prop_assert!(lowered.iter().all(|n| !n.trim().is_empty()));
        lowered.sort();
        lowered.dedup();
        prop_assert_eq!(lowered.len(), needs.len());
    }
}
