//! # marketrank-ranking
//!
//! The relevance scorer and the search filter applied on top of its output.
//!
//! Ranking is a pure function of the catalog and the signal snapshot; the
//! search filter only narrows, never re-sorts.

pub mod scorer;
pub mod search;

pub use scorer::{RankingContext, RelevanceScorer, ScoreBreakdown, ScorerWeights};
pub use search::SearchFilter;
