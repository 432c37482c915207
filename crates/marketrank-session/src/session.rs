use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use marketrank_aggregate::AggregateEngine;
use marketrank_core::scheduler::{CycleScheduler, ImmediateFlush};
use marketrank_core::{
    AggregateMetrics, AggregateRequest, AttentionEntry, BrowsingSignal, CatalogItem, IClock,
    IFlushScheduler, IKeyValueStorage, MarketrankConfig, ScoredEntry, UserProfile,
};
use marketrank_needs::{IndustryResolver, NeedDetector};
use marketrank_ranking::{RankingContext, RelevanceScorer, ScoreBreakdown, SearchFilter};
use marketrank_signals::{AttentionStore, BrowsingSignalStore};
use tracing::{debug, info};
use uuid::Uuid;

/// One user's marketplace session.
///
/// All mutation happens through `&mut self` on the owner's thread; the only
/// other thread involved is the aggregate worker, which sees snapshots.
pub struct MarketplaceSession {
    id: Uuid,
    clock: Arc<dyn IClock>,
    /// Present when dwell flushes are deferred to [`on_cycle`](Self::on_cycle).
    cycle: Option<Arc<CycleScheduler>>,

    detector: NeedDetector,
    industry_resolver: IndustryResolver,
    browsing: BrowsingSignalStore,
    attention: AttentionStore,
    scorer: RelevanceScorer,
    search: SearchFilter,
    aggregates: AggregateEngine,

    catalog: Vec<CatalogItem>,
    profile: Option<UserProfile>,
    needs: Vec<String>,
    industry: Option<String>,
    active_need: Option<String>,
    ranked: Vec<ScoredEntry>,
    visible: Vec<ScoredEntry>,
}

impl MarketplaceSession {
    /// Session that applies dwell immediately.
    pub fn new(
        config: MarketrankConfig,
        storage: Arc<dyn IKeyValueStorage>,
        clock: Arc<dyn IClock>,
    ) -> Self {
        Self::build(config, storage, clock, None)
    }

    /// Session that coalesces dwell until the next [`on_cycle`](Self::on_cycle).
    pub fn with_cycle_scheduler(
        config: MarketrankConfig,
        storage: Arc<dyn IKeyValueStorage>,
        clock: Arc<dyn IClock>,
        scheduler: Arc<CycleScheduler>,
    ) -> Self {
        Self::build(config, storage, clock, Some(scheduler))
    }

    fn build(
        config: MarketrankConfig,
        storage: Arc<dyn IKeyValueStorage>,
        clock: Arc<dyn IClock>,
        cycle: Option<Arc<CycleScheduler>>,
    ) -> Self {
        let flush: Arc<dyn IFlushScheduler> = match &cycle {
            Some(scheduler) => scheduler.clone(),
            None => Arc::new(ImmediateFlush),
        };

        let mut browsing =
            BrowsingSignalStore::new(storage.clone(), clock.clone(), config.browsing.clone());
        browsing.load();
        let mut attention =
            AttentionStore::new(storage, clock.clone(), flush, config.attention.clone());
        attention.load();

        let session = Self {
            id: Uuid::new_v4(),
            search: SearchFilter::new(clock.clone(), &config.search),
            clock,
            cycle,
            detector: NeedDetector::new(config.needs.clone()),
            industry_resolver: IndustryResolver::new(),
            browsing,
            attention,
            scorer: RelevanceScorer::from_config(&config.ranking),
            aggregates: AggregateEngine::new(config.aggregate.clone()),
            catalog: Vec::new(),
            profile: None,
            needs: Vec::new(),
            industry: None,
            active_need: None,
            ranked: Vec::new(),
            visible: Vec::new(),
        };
        info!(
            session_id = %session.id,
            browsing_signals = session.browsing.len(),
            attention_entries = session.attention.len(),
            background_aggregates = session.aggregates.is_background(),
            "marketplace session started"
        );
        session
    }

    /// Replace the aggregate engine, e.g. with one built around a specific
    /// worker. The current catalog is resubmitted.
    pub fn with_aggregate_engine(mut self, engine: AggregateEngine) -> Self {
        self.aggregates.shutdown();
        self.aggregates = engine;
        if !self.catalog.is_empty() {
            self.request_aggregates();
        }
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// New catalog snapshot: re-detect needs, re-rank, recompute aggregates.
    pub fn set_catalog(&mut self, catalog: Vec<CatalogItem>) {
        self.catalog = catalog;
        self.refresh_profile_signals();
        self.rerank();
        self.request_aggregates();
    }

    /// New (or cleared) profile: re-detect needs and industry, re-rank,
    /// recompute aggregates.
    pub fn set_profile(&mut self, profile: Option<UserProfile>) {
        self.profile = profile;
        self.refresh_profile_signals();
        self.rerank();
        self.request_aggregates();
    }

    /// Focus the ranking on one need. Blank clears it. Returns whether the
    /// active need changed.
    pub fn set_active_need(&mut self, need: Option<&str>) -> bool {
        let need = need.map(str::trim).filter(|n| !n.is_empty()).map(str::to_string);
        if need == self.active_need {
            return false;
        }
        self.active_need = need;
        self.rerank();
        self.request_aggregates();
        true
    }

    /// Record exposure to category/tag descriptors.
    pub fn record_exposure<S: AsRef<str>>(&mut self, descriptors: &[S]) -> bool {
        let labels_before = self.browsing.labels();
        if !self.browsing.record_exposure(descriptors) {
            return false;
        }
        self.rerank();
        if self.browsing.labels() != labels_before {
            self.request_aggregates();
        }
        true
    }

    /// Record exposure to an item's category (or vertical) and tags.
    pub fn record_item_exposure(&mut self, item_id: &str) -> bool {
        let Some(item) = self.catalog.iter().find(|i| i.id == item_id) else {
            return false;
        };
        let descriptors: Vec<String> = item
            .category_label()
            .map(str::to_string)
            .into_iter()
            .chain(item.tags.iter().cloned())
            .collect();
        self.record_exposure(&descriptors)
    }

    /// Report dwell time on an item. Without a cycle scheduler the dwell is
    /// applied and the ranking refreshed immediately.
    pub fn register_dwell(&mut self, item_id: &str, delta_ms: f64) -> bool {
        if !self.attention.register_dwell(item_id, delta_ms) {
            return false;
        }
        if self.attention.pending_len() == 0 {
            self.rerank();
        }
        true
    }

    /// Update-cycle hook: apply coalesced dwell. Returns the number of items
    /// whose attention changed.
    pub fn on_cycle(&mut self) -> usize {
        if let Some(cycle) = &self.cycle {
            cycle.take_pending();
        }
        let updated = self.attention.flush();
        if updated > 0 {
            self.rerank();
        }
        updated
    }

    /// Record a typed search query. Applied by a later [`tick`](Self::tick).
    pub fn set_search_query(&mut self, query: &str) {
        self.search.set_query(query);
    }

    /// Promote a debounced query and collect aggregate responses. Returns
    /// whether anything visible changed.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        if self.search.poll() {
            self.visible = self.search.apply(&self.ranked);
            changed = true;
        }
        changed |= self.aggregates.poll();
        changed
    }

    /// Full ranking, best first.
    pub fn ranked(&self) -> &[ScoredEntry] {
        &self.ranked
    }

    /// Ranking narrowed by the active search query.
    pub fn visible(&self) -> &[ScoredEntry] {
        &self.visible
    }

    pub fn needs(&self) -> &[String] {
        &self.needs
    }

    pub fn industry(&self) -> Option<&str> {
        self.industry.as_deref()
    }

    pub fn active_need(&self) -> Option<&str> {
        self.active_need.as_deref()
    }

    pub fn search_query(&self) -> &str {
        self.search.active_query()
    }

    pub fn browsing_signals(&self) -> &[BrowsingSignal] {
        self.browsing.signals()
    }

    pub fn attention(&self) -> &HashMap<String, AttentionEntry> {
        self.attention.entries()
    }

    /// Latest aggregate metrics.
    pub fn aggregates(&self) -> &AggregateMetrics {
        self.aggregates.latest()
    }

    pub fn aggregate_engine(&self) -> &AggregateEngine {
        &self.aggregates
    }

    /// Block until the newest aggregate request is answered.
    pub fn wait_for_aggregates(&mut self, timeout: Duration) -> Option<AggregateMetrics> {
        self.aggregates.wait_latest(timeout)
    }

    /// Per-factor score of one catalog item in the current context.
    pub fn explain(&self, item_id: &str) -> Option<ScoreBreakdown> {
        let item = self.catalog.iter().find(|i| i.id == item_id)?;
        Some(self.scorer.explain(item, &self.context()))
    }

    /// Apply any queued dwell and stop the aggregate worker. Pending
    /// aggregate responses are discarded.
    pub fn shutdown(&mut self) {
        self.attention.flush();
        self.aggregates.shutdown();
        info!(session_id = %self.id, "marketplace session shut down");
    }

    fn refresh_profile_signals(&mut self) {
        let profile = self.profile.as_ref();
        self.needs = self.detector.detect(profile, &self.catalog);
        self.industry = self.industry_resolver.resolve(profile);
        debug!(
            session_id = %self.id,
            needs = ?self.needs,
            industry = ?self.industry,
            "profile signals refreshed"
        );
    }

    fn context(&self) -> RankingContext<'_> {
        RankingContext {
            needs: &self.needs,
            active_need: self.active_need.as_deref(),
            browsing: self.browsing.signals(),
            industry: self.industry.as_deref(),
            attention: self.attention.entries(),
            now: self.clock.now(),
        }
    }

    fn rerank(&mut self) {
        let ranked = self.scorer.rank(&self.catalog, &self.context());
        self.visible = self.search.apply(&ranked);
        self.ranked = ranked;
    }

    fn request_aggregates(&mut self) {
        let mut signals = self.needs.clone();
        signals.extend(self.browsing.labels());
        let request = AggregateRequest {
            catalog: self.catalog.clone(),
            signals,
            focus: self.active_need.clone(),
        };
        self.aggregates.submit(request);
    }
}
