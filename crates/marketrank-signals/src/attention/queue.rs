//! Per-cycle dwell coalescing queue.

use std::collections::BTreeMap;

/// Micro-batching buffer: seconds of dwell per item since the last flush.
/// Repeated events for the same item are summed, never dropped.
#[derive(Debug, Default)]
pub struct DwellQueue {
    pending: BTreeMap<String, f64>,
}

impl DwellQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item_id: &str, seconds: f64) {
        *self.pending.entry(item_id.to_string()).or_insert(0.0) += seconds;
    }

    /// Take everything queued so far, ordered by item id.
    pub fn drain(&mut self) -> Vec<(String, f64)> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
