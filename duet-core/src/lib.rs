//! duet-core: pure planning engine for the Duet date planner.
//!
//! Scoring, selection, and history analysis are synchronous and allocation-
//! local; venue enrichment and I/O live in sibling crates.

pub mod catalog;
pub mod context;
pub mod history;
pub mod plan;
pub mod scorer;
pub mod selector;

pub use catalog::{ActivityArchetype, BudgetTier, Catalog, Category, Environment, Mood};
pub use context::{EnvironmentPref, PlanningContext, Weather};
pub use history::{
    EventStatus, HistoricalEvent, PriceDistribution, PriceRange, SPOT_ON_LABEL, SuccessPattern,
    analyze_history, analyze_spot_on_history,
};
pub use plan::{DatePlan, VenueCandidate};
pub use scorer::{EXCLUDED, SCORE_FLOOR, ScoredCandidate, score_archetype, score_catalog, target_tier};
pub use selector::{POOL_FLOOR, Selector};

/// Utility for parsing user-entered price strings
pub mod pricing {
    use regex::Regex;
    use std::sync::LazyLock;

    static PRICE_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("price regex"));

    /// Extract a numeric price from a formatted string.
    ///
    /// "Free" parses to 0.0; anything without a digit run is `None`.
    pub fn parse_price(raw: &str) -> Option<f64> {
        if raw.trim().eq_ignore_ascii_case("free") {
            return Some(0.0);
        }
        PRICE_RE.find(raw).and_then(|m| m.as_str().parse().ok())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_dollar_amount() {
            assert_eq!(parse_price("$70.00"), Some(70.0));
            assert_eq!(parse_price("70"), Some(70.0));
            assert_eq!(parse_price("about $15.50 for two"), Some(15.5));
        }

        #[test]
        fn test_parse_free() {
            assert_eq!(parse_price("Free"), Some(0.0));
            assert_eq!(parse_price("  free "), Some(0.0));
        }

        #[test]
        fn test_parse_garbage() {
            assert_eq!(parse_price(""), None);
            assert_eq!(parse_price("TBD"), None);
        }
    }
}

pub use pricing::parse_price;
