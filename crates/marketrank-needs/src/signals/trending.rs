//! Catalog-wide tag frequency.

use std::collections::HashMap;

use marketrank_core::text::{normalize_key, title_case};
use marketrank_core::CatalogItem;

/// Tags ordered by how many times they appear across the catalog,
/// most frequent first. Ties keep first-seen catalog order. Labels are
/// title-cased from the first spelling seen.
pub fn trending_tags(catalog: &[CatalogItem]) -> Vec<String> {
    // key → (count, first_seen, first spelling)
    let mut freq: HashMap<String, (usize, usize, &str)> = HashMap::new();
    let mut order = 0usize;

    for tag in catalog.iter().flat_map(|item| item.tags.iter()) {
        let key = normalize_key(tag);
        if key.is_empty() {
            continue;
        }
        freq.entry(key)
            .and_modify(|(count, _, _)| *count += 1)
            .or_insert_with(|| {
                order += 1;
                (1, order, tag.as_str())
            });
    }

    let mut ranked: Vec<(usize, usize, &str)> = freq.into_values().collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    ranked
        .into_iter()
        .map(|(_, _, tag)| title_case(tag))
        .collect()
}
