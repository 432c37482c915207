//! The pure aggregate computation shared by both execution paths.

use marketrank_core::config::AggregateConfig;
use marketrank_core::text::{any_contains_ci, contains_ci};
use marketrank_core::{AggregateMetrics, AggregateRequest, CatalogItem, ComboEntry, TopCategory};

/// Compute every aggregate for one request snapshot.
///
/// An empty catalog yields no average, no top category and an empty combo.
pub fn compute_aggregates(request: &AggregateRequest, config: &AggregateConfig) -> AggregateMetrics {
    AggregateMetrics {
        average_roi: average_roi(&request.catalog),
        top_category: top_category(&request.catalog),
        combo: combo(request, config),
    }
}

/// Mean of the finite ROI values, `None` when there are none.
pub fn average_roi(catalog: &[CatalogItem]) -> Option<f64> {
    let (sum, count) = catalog
        .iter()
        .filter_map(CatalogItem::numeric_roi)
        .fold((0.0, 0usize), |(sum, count), roi| (sum + roi, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Category with the best average ROI.
///
/// Items without a category (or vertical) are skipped; a missing ROI counts
/// as 0. Ties go to the larger category, then to the one seen first.
pub fn top_category(catalog: &[CatalogItem]) -> Option<TopCategory> {
    // (label, roi sum, count) in first-seen order
    let mut groups: Vec<(&str, f64, usize)> = Vec::new();
    for item in catalog {
        let Some(label) = item.category_label().map(str::trim) else {
            continue;
        };
        let roi = item.numeric_roi().unwrap_or(0.0);
        match groups.iter_mut().find(|(l, _, _)| *l == label) {
            Some(group) => {
                group.1 += roi;
                group.2 += 1;
            }
            None => groups.push((label, roi, 1)),
        }
    }

    let mut best: Option<TopCategory> = None;
    for (label, sum, count) in groups {
        let average_roi = sum / count as f64;
        let better = match &best {
            None => true,
            Some(current) => {
                average_roi > current.average_roi
                    || (average_roi == current.average_roi && count > current.count)
            }
        };
        if better {
            best = Some(TopCategory {
                category: label.to_string(),
                average_roi,
                count,
            });
        }
    }
    best
}

/// Items matching at least `combo_min_overlap` distinct signals, best first.
pub fn combo(request: &AggregateRequest, config: &AggregateConfig) -> Vec<ComboEntry> {
    let signals = distinct_signals(&request.signals);
    if signals.is_empty() {
        return Vec::new();
    }
    let focus_bonus = if request
        .focus
        .as_deref()
        .is_some_and(|f| !f.trim().is_empty())
    {
        config.combo_focus_bonus
    } else {
        0.0
    };

    let mut entries: Vec<ComboEntry> = request
        .catalog
        .iter()
        .filter_map(|item| {
            let category = item.category_label().unwrap_or("");
            let matched: Vec<String> = signals
                .iter()
                .filter(|(lower, _)| {
                    any_contains_ci(&item.tags, lower) || contains_ci(category, lower)
                })
                .map(|(_, label)| label.to_string())
                .collect();
            let overlap = matched.len();
            if overlap < config.combo_min_overlap.max(1) {
                return None;
            }
            Some(ComboEntry {
                id: item.id.clone(),
                name: item.name.clone(),
                score: item.numeric_roi().unwrap_or(0.0)
                    + config.combo_overlap_weight * overlap as f64
                    + focus_bonus,
                overlap,
                matched,
            })
        })
        .collect();

    entries.sort_by(|a, b| b.score.total_cmp(&a.score));
    entries.truncate(config.combo_size);
    entries
}

/// Signals trimmed and deduplicated case-insensitively, keeping the first
/// spelling. Returns (lowercase, original) pairs.
fn distinct_signals(signals: &[String]) -> Vec<(String, &str)> {
    let mut out: Vec<(String, &str)> = Vec::with_capacity(signals.len());
    for signal in signals {
        let trimmed = signal.trim();
        if trimmed.is_empty() {
            continue;
        }
        let lower = trimmed.to_lowercase();
        if !out.iter().any(|(l, _)| *l == lower) {
            out.push((lower, trimmed));
        }
    }
    out
}
