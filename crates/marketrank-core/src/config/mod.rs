pub mod aggregate_config;
pub mod attention_config;
pub mod browsing_config;
pub mod defaults;
pub mod needs_config;
pub mod observability_config;
pub mod ranking_config;
pub mod search_config;

pub use aggregate_config::AggregateConfig;
pub use attention_config::AttentionConfig;
pub use browsing_config::BrowsingConfig;
pub use needs_config::NeedsConfig;
pub use observability_config::ObservabilityConfig;
pub use ranking_config::RankingConfig;
pub use search_config::SearchConfig;

use serde::{Deserialize, Serialize};

use crate::errors::MarketrankResult;

/// Root configuration. Every section falls back to its defaults, so a
/// partial (or empty) TOML document is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketrankConfig {
    pub attention: AttentionConfig,
    pub browsing: BrowsingConfig,
    pub needs: NeedsConfig,
    pub ranking: RankingConfig,
    pub aggregate: AggregateConfig,
    pub search: SearchConfig,
    pub observability: ObservabilityConfig,
}

impl MarketrankConfig {
    /// Parse a TOML document.
    pub fn from_toml(source: &str) -> MarketrankResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> MarketrankResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            crate::errors::MarketrankError::ConfigError {
                reason: format!("{}: {}", path.display(), e),
            }
        })?;
        Self::from_toml(&source)
    }
}
