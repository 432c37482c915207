//! Need signal sources: declared profile fields and catalog trends.

pub mod explicit;
pub mod trending;

use marketrank_core::text::normalize_key;

/// Append `label` unless an equal label (ignoring case and spacing) is
/// already present or the list is full. Returns whether it was added.
pub fn push_unique(needs: &mut Vec<String>, label: &str, cap: usize) -> bool {
    if needs.len() >= cap {
        return false;
    }
    let key = normalize_key(label);
    if key.is_empty() || needs.iter().any(|n| normalize_key(n) == key) {
        return false;
    }
    needs.push(label.trim().to_string());
    true
}
