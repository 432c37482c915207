//! Case-insensitive text helpers shared by detection, scoring and search.

/// Trim, lowercase and collapse internal whitespace.
pub fn normalize_key(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Title-case a descriptor: `"supply-chain ops"` → `"Supply Chain Ops"`.
///
/// Hyphens and underscores separate words like whitespace does.
pub fn title_case(raw: &str) -> String {
    raw.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether `haystack` contains `needle_lower`, ignoring case.
///
/// `needle_lower` must already be lowercase. An empty needle never matches.
pub fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    !needle_lower.is_empty() && haystack.to_lowercase().contains(needle_lower)
}

/// Whether any string in `values` contains `needle_lower`, ignoring case.
pub fn any_contains_ci<S: AsRef<str>>(values: &[S], needle_lower: &str) -> bool {
    values.iter().any(|v| contains_ci(v.as_ref(), needle_lower))
}
