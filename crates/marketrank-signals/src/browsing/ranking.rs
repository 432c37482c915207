//! Ranking and weighting of browsing signals.

use std::cmp::Ordering;

use marketrank_core::BrowsingSignal;

/// Weight of the signal at `rank` (0-based) with `count` exposures:
/// `max(1, 5 - rank) + min(count, 5) × 0.3`.
pub fn signal_weight(rank: usize, count: u32) -> f64 {
    let positional = 5usize.saturating_sub(rank).max(1) as f64;
    positional + f64::from(count.min(5)) * 0.3
}

/// Ranking order: count desc, last seen desc, key asc.
pub fn compare(a: &BrowsingSignal, b: &BrowsingSignal) -> Ordering {
    b.count
        .cmp(&a.count)
        .then(b.last_seen.cmp(&a.last_seen))
        .then_with(|| a.key.cmp(&b.key))
}

/// Sort, keep the top `cap`, and assign weights.
pub fn rank(mut signals: Vec<BrowsingSignal>, cap: usize) -> Vec<BrowsingSignal> {
    signals.sort_by(compare);
    signals.truncate(cap);
    for (rank, signal) in signals.iter_mut().enumerate() {
        signal.weight = signal_weight(rank, signal.count);
    }
    signals
}
