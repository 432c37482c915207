use marketrank_core::text::{contains_ci, normalize_key, title_case};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalize_key_is_idempotent(raw in "[ a-zA-Z\t]{0,24}") {
        let once = normalize_key(&raw);
        prop_assert_eq!(normalize_key(&once), once.clone());
        prop_assert!(!once.starts_with(' ') && !once.ends_with(' '));
        prop_assert!(!once.contains("  "));
    }

    #[test]
    fn title_case_words_are_capitalized(raw in "[ a-zA-Z_-]{0,24}") {
        let titled = title_case(&raw);
        for word in titled.split(' ').filter(|w| !w.is_empty()) {
            let first = word.chars().next().unwrap();
            prop_assert!(first.is_uppercase());
            prop_assert!(word.chars().skip(1).all(|c| !c.is_uppercase()));
        }
    }

    #[test]
    fn contains_ci_matches_any_casing(raw in "[a-zA-Z ]{1,16}") {
        let needle = raw.to_lowercase();
        prop_assert!(contains_ci(&raw.to_uppercase(), &needle));
        prop_assert!(contains_ci(&raw, &needle));
    }
}
