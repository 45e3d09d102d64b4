//! Plan service: the async request/response entry point.
//!
//! Holds no state between invocations beyond the catalog, the provider, and
//! the selector's random source. Venue enrichment is strictly best-effort.

use std::time::Duration;

use anyhow::{Result, ensure};

use duet_core::{
    Catalog, DatePlan, EventStatus, PlanningContext, Selector, score_catalog,
};

use crate::enricher::venue_options;
use crate::provider::VenueProvider;

/// Simulated "thinking" latency shown to the user while plans are drawn.
pub const DEFAULT_THINKING_DELAY: Duration = Duration::from_millis(1500);

pub struct PlanService<P: VenueProvider> {
    catalog: Catalog,
    provider: P,
    selector: Selector,
    city: String,
    thinking_delay: Duration,
    venues_enabled: bool,
}

impl<P: VenueProvider> PlanService<P> {
    pub fn new(provider: P) -> Self {
        Self {
            catalog: Catalog::standard(),
            provider,
            selector: Selector::new(),
            city: "San Francisco".to_string(),
            thinking_delay: DEFAULT_THINKING_DELAY,
            venues_enabled: true,
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Deterministic selection for tests and reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.selector = Selector::with_seed(seed);
        self
    }

    pub fn with_thinking_delay(mut self, delay: Duration) -> Self {
        self.thinking_delay = delay;
        self
    }

    pub fn with_venues(mut self, enabled: bool) -> Self {
        self.venues_enabled = enabled;
        self
    }

    /// Generate `count` date plans for the month.
    ///
    /// Degrades gracefully: poor matches are never an error, and venue
    /// enrichment failures leave plans un-enriched rather than failing the
    /// call. Errors only on internal misconfiguration (empty catalog).
    pub async fn generate_plan(
        &mut self,
        total_budget: f64,
        count: usize,
        ctx: &PlanningContext,
    ) -> Result<Vec<DatePlan>> {
        ensure!(!self.catalog.is_empty(), "archetype catalog is empty");

        if self.thinking_delay > Duration::ZERO {
            tokio::time::sleep(self.thinking_delay).await;
        }

        let candidates = score_catalog(&self.catalog, ctx, total_budget, count);
        if candidates.is_empty() {
            tracing::warn!("no archetypes survived exclusion; returning empty plan");
            return Ok(Vec::new());
        }

        let mut plans = self.selector.select(candidates, count);

        if self.venues_enabled {
            let emotion = latest_rating(ctx).unwrap_or(0.5);
            let per_date_budget = total_budget / count.max(1) as f64;
            for plan in &mut plans {
                plan.place_options = venue_options(
                    &self.provider,
                    plan.category,
                    emotion,
                    per_date_budget,
                    &self.city,
                    &ctx.past_events,
                )
                .await;
            }
        }

        Ok(plans)
    }
}

/// Most recent completed rating, the emotional-intensity input to enrichment.
fn latest_rating(ctx: &PlanningContext) -> Option<f64> {
    ctx.past_events
        .iter()
        .rev()
        .find(|e| e.status == EventStatus::Completed)
        .and_then(|e| e.rating)
}
