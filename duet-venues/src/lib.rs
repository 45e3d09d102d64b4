//! duet-venues: venue provider, enrichment scoring, and the async plan service.

pub mod enricher;
pub mod places;
pub mod provider;
pub mod sample;
pub mod service;

pub use enricher::{
    EmotionBand, MAX_OPTIONS, budget_range, emotion_band, emotion_to_price_level, score_venue,
    venue_options,
};
pub use places::PlacesProvider;
pub use provider::{SearchRoute, Venue, VenueProvider, VenueQuery, search_route};
pub use service::{DEFAULT_THINKING_DELAY, PlanService};
