use serde::{Deserialize, Serialize};

use super::defaults;

/// Need detection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NeedsConfig {
    /// Maximum number of detected needs, explicit and trending combined.
    pub max_needs: usize,
    /// Team sizes above this map to "Enterprise scale".
    pub enterprise_team_size: u32,
    /// Team sizes above this (and not enterprise) map to "Team productivity".
    pub team_productivity_size: u32,
}

impl Default for NeedsConfig {
    fn default() -> Self {
        Self {
            max_needs: defaults::DEFAULT_MAX_NEEDS,
            enterprise_team_size: defaults::DEFAULT_ENTERPRISE_TEAM_SIZE,
            team_productivity_size: defaults::DEFAULT_TEAM_PRODUCTIVITY_SIZE,
        }
    }
}
