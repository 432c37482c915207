//! Test fixture loader for Marketrank catalogs, profiles and failure doubles.
//!
//! Provides typed deserialization of the fixture JSON files and helpers
//! shared by the tests of every crate.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, TimeZone, Utc};
use marketrank_core::errors::{MarketrankResult, PersistenceError};
use marketrank_core::{CatalogItem, IKeyValueStorage, UserProfile};
use serde::de::DeserializeOwned;

/// Root directory of the fixture data files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Twelve-item SaaS marketplace catalog.
pub fn saas_catalog() -> Vec<CatalogItem> {
    load_fixture("catalogs/saas_catalog.json")
}

/// Operations lead at a mid-size healthcare company.
pub fn healthcare_ops_profile() -> UserProfile {
    load_fixture("profiles/healthcare_ops.json")
}

/// Profile with no usable email and no declared industry.
pub fn anonymous_profile() -> UserProfile {
    load_fixture("profiles/anonymous.json")
}

/// The two-item catalog used by the worked ranking example:
/// `a` tagged health with ROI 5, `b` tagged finance with ROI 2.
pub fn health_finance_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("a", "Care Pathways").with_tags(["health"]).with_roi(5.0),
        CatalogItem::new("b", "Ledger Sync").with_tags(["finance"]).with_roi(2.0),
    ]
}

/// A fixed instant so time arithmetic in tests is exact.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 9, 30, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Storage whose reads succeed and whose writes always fail, counting the
/// attempts.
#[derive(Debug, Default)]
pub struct FailingStorage {
    pub payload: Option<String>,
    pub write_attempts: AtomicUsize,
}

impl FailingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Failing storage that still serves `payload` on every read.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
            write_attempts: AtomicUsize::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        self.write_attempts.load(Ordering::Relaxed)
    }
}

impl IKeyValueStorage for FailingStorage {
    fn get(&self, _key: &str) -> MarketrankResult<Option<String>> {
        Ok(self.payload.clone())
    }

    fn set(&self, key: &str, _value: &str) -> MarketrankResult<()> {
        self.write_attempts.fetch_add(1, Ordering::Relaxed);
        Err(PersistenceError::WriteFailed {
            key: key.to_string(),
            reason: "quota exceeded".to_string(),
        }
        .into())
    }

    fn remove(&self, key: &str) -> MarketrankResult<()> {
        self.write_attempts.fetch_add(1, Ordering::Relaxed);
        Err(PersistenceError::RemoveFailed {
            key: key.to_string(),
            reason: "storage disabled".to_string(),
        }
        .into())
    }
}
