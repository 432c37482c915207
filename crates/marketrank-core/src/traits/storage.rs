use crate::errors::MarketrankResult;

/// String key-value persistence boundary.
///
/// Implementations may fail (quota, I/O, corruption); callers in this
/// workspace treat every failure as best-effort and never propagate it to
/// ranking.
pub trait IKeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> MarketrankResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> MarketrankResult<()>;
    fn remove(&self, key: &str) -> MarketrankResult<()>;
}
