//! Best-effort JSON persistence shared by both stores.

use marketrank_core::IKeyValueStorage;
use marketrank_observability::tracing_setup::events;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Read and parse a payload. Missing, unreadable and malformed payloads all
/// yield `None`.
pub(crate) fn read_json<T: DeserializeOwned>(storage: &dyn IKeyValueStorage, key: &str) -> Option<T> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            events::persistence_failed(key, "read", &e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            events::persisted_state_discarded(key, &e.to_string());
            None
        }
    }
}

/// Serialize and write a payload. Returns whether the write landed.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    storage: &dyn IKeyValueStorage,
    key: &str,
    value: &T,
) -> bool {
    let payload = match serde_json::to_string(value) {
        Ok(payload) => payload,
        Err(e) => {
            events::persistence_failed(key, "serialize", &e);
            return false;
        }
    };
    match storage.set(key, &payload) {
        Ok(()) => true,
        Err(e) => {
            events::persistence_failed(key, "write", &e);
            false
        }
    }
}

/// Remove a key. Returns whether the removal landed.
pub(crate) fn remove_key(storage: &dyn IKeyValueStorage, key: &str) -> bool {
    match storage.remove(key) {
        Ok(()) => true,
        Err(e) => {
            events::persistence_failed(key, "remove", &e);
            false
        }
    }
}
