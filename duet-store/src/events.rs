//! In-memory event store with the CRUD surface the planner consumes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use duet_core::{EventStatus, HistoricalEvent};

/// A stored date event. The engine only ever sees the [`HistoricalEvent`]
/// projection; the id and date are store-side bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredEvent {
    pub id: String,
    pub title: String,
    /// Numeric-ish price string as entered ("70.00").
    pub price: String,
    pub date: Option<NaiveDate>,
    pub status: EventStatus,
    pub rating: Option<f64>,
    pub match_result: Option<String>,
}

impl StoredEvent {
    /// Read-only projection for the planning engine.
    pub fn to_history(&self) -> HistoricalEvent {
        HistoricalEvent {
            title: self.title.clone(),
            price: self.price.clone(),
            status: self.status,
            rating: self.rating,
            match_result: self.match_result.clone(),
        }
    }
}

/// Ordered, append-mostly store of date events.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<StoredEvent>,
    next_id: u64,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_events(events: Vec<StoredEvent>) -> Self {
        let next_id = events.len() as u64;
        Self { events, next_id }
    }

    pub fn events(&self) -> &[StoredEvent] {
        &self.events
    }

    /// Projection of the full store for the planning engine.
    pub fn history(&self) -> Vec<HistoricalEvent> {
        self.events.iter().map(StoredEvent::to_history).collect()
    }

    /// Append a new scheduled event and return its id.
    pub fn add_event(
        &mut self,
        title: impl Into<String>,
        price: impl Into<String>,
        date: Option<NaiveDate>,
    ) -> String {
        self.next_id += 1;
        let id = format!("evt-{:04}", self.next_id);
        self.events.push(StoredEvent {
            id: id.clone(),
            title: title.into(),
            price: price.into(),
            date,
            status: EventStatus::Scheduled,
            rating: None,
            match_result: None,
        });
        id
    }

    /// Move an event into the review queue. Returns false for unknown ids.
    pub fn request_review(&mut self, id: &str) -> bool {
        self.update(id, |e| e.status = EventStatus::PendingReview)
    }

    /// Finalize a rating: marks the event completed with its alignment verdict.
    pub fn rate_event(&mut self, id: &str, rating: f64, match_result: impl Into<String>) -> bool {
        let label = match_result.into();
        self.update(id, move |e| {
            e.status = EventStatus::Completed;
            e.rating = Some(rating.clamp(0.0, 1.0));
            e.match_result = Some(label);
        })
    }

    /// Stash a rating without completing the event (user may still adjust it).
    pub fn save_draft_rating(
        &mut self,
        id: &str,
        rating: f64,
        match_result: impl Into<String>,
    ) -> bool {
        let label = match_result.into();
        self.update(id, move |e| {
            e.rating = Some(rating.clamp(0.0, 1.0));
            e.match_result = Some(label);
        })
    }

    /// Most recently touched event awaiting review, if any.
    pub fn pending_review_event(&self) -> Option<&StoredEvent> {
        self.events
            .iter()
            .rev()
            .find(|e| e.status == EventStatus::PendingReview)
    }

    /// Next upcoming scheduled event, if any.
    pub fn next_scheduled_event(&self) -> Option<&StoredEvent> {
        self.events.iter().find(|e| e.status == EventStatus::Scheduled)
    }

    fn update(&mut self, id: &str, f: impl FnOnce(&mut StoredEvent)) -> bool {
        match self.events.iter_mut().find(|e| e.id == id) {
            Some(event) => {
                f(event);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duet_core::{SPOT_ON_LABEL, analyze_history};

    #[test]
    fn test_add_event_defaults_to_scheduled() {
        let mut store = EventStore::new();
        let id = store.add_event("Date 1: Italian Dinner", "70.00", None);
        assert_eq!(id, "evt-0001");
        let event = &store.events()[0];
        assert_eq!(event.status, EventStatus::Scheduled);
        assert!(event.rating.is_none());
    }

    #[test]
    fn test_rate_event_completes_and_clamps() {
        let mut store = EventStore::new();
        let id = store.add_event("Date 1: Italian Dinner", "70.00", None);
        assert!(store.rate_event(&id, 1.4, SPOT_ON_LABEL));
        let event = &store.events()[0];
        assert_eq!(event.status, EventStatus::Completed);
        assert_eq!(event.rating, Some(1.0));
        assert_eq!(event.match_result.as_deref(), Some(SPOT_ON_LABEL));
    }

    #[test]
    fn test_unknown_id_is_a_noop() {
        let mut store = EventStore::new();
        assert!(!store.rate_event("evt-9999", 0.8, SPOT_ON_LABEL));
        assert!(!store.request_review("evt-9999"));
    }

    #[test]
    fn test_pending_review_returns_latest() {
        let mut store = EventStore::new();
        let a = store.add_event("Date 1: Picnic", "15.00", None);
        let b = store.add_event("Date 2: Bowling", "55.00", None);
        store.request_review(&a);
        store.request_review(&b);
        assert_eq!(store.pending_review_event().map(|e| e.id.as_str()), Some(b.as_str()));
    }

    #[test]
    fn test_draft_rating_keeps_status() {
        let mut store = EventStore::new();
        let id = store.add_event("Date 1: Picnic", "15.00", None);
        store.request_review(&id);
        store.save_draft_rating(&id, 0.6, "pending");
        let event = &store.events()[0];
        assert_eq!(event.status, EventStatus::PendingReview);
        assert_eq!(event.rating, Some(0.6));
    }

    #[test]
    fn test_history_projection_feeds_analyzer() {
        let mut store = EventStore::new();
        let id = store.add_event("Date 1: Italian Dinner", "70.00", None);
        store.rate_event(&id, 0.9, SPOT_ON_LABEL);
        store.add_event("Date 2: Picnic", "15.00", None);

        let pattern = analyze_history(&store.history()).expect("pattern");
        assert_eq!(pattern.avg_successful_price, 70.0);
        assert_eq!(pattern.success_rate, 0.5);
    }
}
