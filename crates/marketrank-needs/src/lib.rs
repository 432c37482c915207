//! # marketrank-needs
//!
//! Derives up to four "need" labels from a user profile and the catalog,
//! and resolves the user's industry from their email domain.

pub mod detector;
pub mod industry;
pub mod signals;

pub use detector::NeedDetector;
pub use industry::IndustryResolver;
