//! NeedDetector: explicit profile signals first, trending catalog tags as fill.

use marketrank_core::config::NeedsConfig;
use marketrank_core::{CatalogItem, UserProfile};
use tracing::debug;

use crate::signals::{explicit, push_unique, trending};

/// Produces the ordered need list (at most `max_needs` labels).
#[derive(Debug, Clone, Default)]
pub struct NeedDetector {
    config: NeedsConfig,
}

impl NeedDetector {
    pub fn new(config: NeedsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NeedsConfig {
        &self.config
    }

    /// Detect needs for a (possibly absent) profile against the catalog.
    ///
    /// Explicit signals keep their declared order; trending tags fill the
    /// remaining slots. Duplicates are dropped case-insensitively, first
    /// occurrence wins.
    pub fn detect(&self, profile: Option<&UserProfile>, catalog: &[CatalogItem]) -> Vec<String> {
        let cap = self.config.max_needs;
        let mut needs = Vec::with_capacity(cap);

        if let Some(profile) = profile {
            for signal in explicit::explicit_signals(profile, &self.config) {
                push_unique(&mut needs, &signal, cap);
            }
        }

        let explicit_count = needs.len();
        if needs.len() < cap {
            for tag in trending::trending_tags(catalog) {
                if needs.len() >= cap {
                    break;
                }
                push_unique(&mut needs, &tag, cap);
            }
        }

        debug!(
            explicit = explicit_count,
            trending = needs.len() - explicit_count,
            "detected needs"
        );
        needs
    }
}
