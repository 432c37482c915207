mod aggregate_error;
mod marketrank_error;
mod persistence_error;

pub use aggregate_error::AggregateError;
pub use marketrank_error::MarketrankError;
pub use persistence_error::PersistenceError;

/// Convenience alias used throughout the workspace.
pub type MarketrankResult<T> = Result<T, MarketrankError>;
