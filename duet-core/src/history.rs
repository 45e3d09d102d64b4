//! History analyzer: derives a success signal from past rated dates.
//!
//! Only completed events with a defined rating participate. The signal biases
//! scoring elsewhere; it is never a hard filter.

use serde::{Deserialize, Serialize};

use crate::pricing::parse_price;

/// Alignment threshold above which a rated event counts as a success.
pub const SUCCESS_RATING: f64 = 0.7;

/// Match label stored when both partners landed on the same read of the night.
pub const SPOT_ON_LABEL: &str = "Spot On ✨";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EventStatus {
    #[serde(rename = "scheduled")]
    Scheduled,
    #[serde(rename = "pending_review")]
    PendingReview,
    #[serde(rename = "completed")]
    Completed,
}

/// A past event as seen by the engine. Owned by the event store; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoricalEvent {
    pub title: String,
    /// Price as entered by the user; parsed leniently.
    pub price: String,
    pub status: EventStatus,
    /// Post-date alignment rating in [0, 1].
    pub rating: Option<f64>,
    /// Dashboard verdict text (e.g. "Spot On ✨").
    pub match_result: Option<String>,
}

impl HistoricalEvent {
    pub fn new(title: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
            status: EventStatus::Scheduled,
            rating: None,
            match_result: None,
        }
    }

    pub fn completed(mut self, rating: f64) -> Self {
        self.status = EventStatus::Completed;
        self.rating = Some(rating);
        self
    }

    pub fn with_match_result(mut self, label: impl Into<String>) -> Self {
        self.match_result = Some(label.into());
        self
    }

    /// True for events the learning layer may look at.
    pub fn is_rated(&self) -> bool {
        self.status == EventStatus::Completed && self.rating.is_some()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Counts of successful dates per rough price bucket.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceDistribution {
    pub low: usize,
    pub mid: usize,
    pub high: usize,
}

/// Summary of which price ranges historically correlated with high alignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuccessPattern {
    pub preferred_price_range: PriceRange,
    /// successes / total input events.
    pub success_rate: f64,
    pub avg_successful_price: f64,
    pub price_distribution: PriceDistribution,
}

/// Analyze past events for a success pattern. Pure; returns `None` when there
/// is no usable signal (no input, no qualifying events, no parseable prices).
pub fn analyze_history(events: &[HistoricalEvent]) -> Option<SuccessPattern> {
    analyze(events, false)
}

/// Like [`analyze_history`], but additionally requires the "Spot On" verdict.
/// Used when the signal feeds venue enrichment.
pub fn analyze_spot_on_history(events: &[HistoricalEvent]) -> Option<SuccessPattern> {
    analyze(events, true)
}

fn analyze(events: &[HistoricalEvent], require_spot_on: bool) -> Option<SuccessPattern> {
    if events.is_empty() {
        return None;
    }

    let successful: Vec<&HistoricalEvent> = events
        .iter()
        .filter(|e| {
            e.status == EventStatus::Completed
                && e.rating.is_some_and(|r| r > SUCCESS_RATING)
                && (!require_spot_on || e.match_result.as_deref() == Some(SPOT_ON_LABEL))
        })
        .collect();

    if successful.is_empty() {
        return None;
    }

    let prices: Vec<f64> = successful
        .iter()
        .filter_map(|e| parse_price(&e.price))
        .filter(|p| *p > 0.0)
        .collect();

    if prices.is_empty() {
        return None;
    }

    let mut distribution = PriceDistribution::default();
    for p in &prices {
        if *p < 40.0 {
            distribution.low += 1;
        } else if *p < 100.0 {
            distribution.mid += 1;
        } else {
            distribution.high += 1;
        }
    }

    let sum: f64 = prices.iter().sum();
    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(SuccessPattern {
        preferred_price_range: PriceRange { min, max },
        success_rate: successful.len() as f64 / events.len() as f64,
        avg_successful_price: sum / prices.len() as f64,
        price_distribution: distribution,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot_on(title: &str, price: &str, rating: f64) -> HistoricalEvent {
        HistoricalEvent::new(title, price)
            .completed(rating)
            .with_match_result(SPOT_ON_LABEL)
    }

    #[test]
    fn test_empty_input_returns_none() {
        assert_eq!(analyze_history(&[]), None);
        assert_eq!(analyze_spot_on_history(&[]), None);
    }

    #[test]
    fn test_no_completed_rated_events_returns_none() {
        let events = vec![
            HistoricalEvent::new("Picnic in the Park", "15.00"),
            HistoricalEvent::new("Italian Dinner", "70.00").completed(0.5),
        ];
        // A 0.5 rating is below the success threshold.
        assert_eq!(analyze_history(&events), None);
    }

    #[test]
    fn test_unparseable_prices_return_none() {
        let events = vec![spot_on("Stargazing Night", "Free", 0.9)];
        assert_eq!(analyze_history(&events), None);
    }

    #[test]
    fn test_pattern_from_successful_events() {
        let events = vec![
            spot_on("Italian Dinner", "70.00", 0.9),
            spot_on("Omakase Experience", "180.00", 0.8),
            HistoricalEvent::new("Bowling & Burgers", "55.00").completed(0.2),
            HistoricalEvent::new("Comedy Club", "50.00"),
        ];
        let pattern = analyze_history(&events).expect("pattern");
        assert_eq!(pattern.preferred_price_range.min, 70.0);
        assert_eq!(pattern.preferred_price_range.max, 180.0);
        assert_eq!(pattern.avg_successful_price, 125.0);
        assert_eq!(pattern.success_rate, 0.5);
        assert_eq!(pattern.price_distribution.mid, 1);
        assert_eq!(pattern.price_distribution.high, 1);
    }

    #[test]
    fn test_spot_on_filter_is_stricter() {
        let events = vec![
            spot_on("Italian Dinner", "70.00", 0.9),
            HistoricalEvent::new("Wine Tasting", "85.00")
                .completed(0.95)
                .with_match_result("You're in sync! 💖"),
        ];
        let general = analyze_history(&events).expect("pattern");
        let strict = analyze_spot_on_history(&events).expect("pattern");
        assert_eq!(general.preferred_price_range.max, 85.0);
        assert_eq!(strict.preferred_price_range.max, 70.0);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let events = vec![
            spot_on("Italian Dinner", "70.00", 0.9),
            spot_on("Pottery Class", "90.00", 0.75),
        ];
        let first = analyze_history(&events);
        let second = analyze_history(&events);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rating_exactly_at_threshold_does_not_count() {
        let events = vec![spot_on("Italian Dinner", "70.00", 0.7)];
        assert_eq!(analyze_history(&events), None);
    }
}
