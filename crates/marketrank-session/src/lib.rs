//! # marketrank-session
//!
//! [`MarketplaceSession`] is the single owner of every ranking component for
//! one user. It re-ranks synchronously whenever an input changes and hands
//! aggregate work to the background engine.

pub mod session;

pub use session::MarketplaceSession;
