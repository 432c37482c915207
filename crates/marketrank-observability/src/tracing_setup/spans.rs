//! Span definitions per operation: ranking, aggregate, attention, browsing, search.

/// Create a ranking span.
#[macro_export]
macro_rules! ranking_span {
    ($item_count:expr, $active_need:expr) => {
        tracing::info_span!("marketrank.ranking", items = $item_count, active_need = ?$active_need)
    };
}

/// Create an aggregate computation span.
#[macro_export]
macro_rules! aggregate_span {
    ($path:expr, $item_count:expr) => {
        tracing::info_span!("marketrank.aggregate", path = %$path, items = $item_count)
    };
}

/// Create an attention flush span.
#[macro_export]
macro_rules! attention_span {
    ($queued:expr) => {
        tracing::debug_span!("marketrank.attention", queued = $queued)
    };
}

/// Create a browsing exposure span.
#[macro_export]
macro_rules! browsing_span {
    ($descriptor_count:expr) => {
        tracing::debug_span!("marketrank.browsing", descriptors = $descriptor_count)
    };
}

