use serde::{Deserialize, Serialize};

use super::CatalogItem;

/// Snapshot sent to the aggregate computation. Owns everything it needs so
/// it can cross a thread boundary without sharing mutable state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateRequest {
    pub catalog: Vec<CatalogItem>,
    /// Detected-need labels followed by browsing labels.
    pub signals: Vec<String>,
    /// The active need, if any.
    pub focus: Option<String>,
}

/// Category with the best average ROI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCategory {
    pub category: String,
    pub average_roi: f64,
    pub count: usize,
}

/// An item whose attributes strongly overlap the user's signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComboEntry {
    pub id: String,
    pub name: String,
    pub score: f64,
    pub overlap: usize,
    /// Signals the item matched, in signal order.
    pub matched: Vec<String>,
}

/// Derived catalog statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    pub average_roi: Option<f64>,
    pub top_category: Option<TopCategory>,
    pub combo: Vec<ComboEntry>,
}
