//! Per-request planning context: what the couple is in the mood for today.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Mood};
use crate::history::HistoricalEvent;

/// Requested environment. `Any` applies no filter.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum EnvironmentPref {
    Indoor,
    Outdoor,
    #[default]
    Any,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Weather {
    Sunny,
    Rainy,
}

/// Caller-supplied input to a single planning call. Read-only to the engine;
/// constructed fresh per request and never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlanningContext {
    pub mood: Option<Mood>,
    pub interests: Vec<Category>,
    pub environment: EnvironmentPref,
    pub weather: Option<Weather>,
    pub past_events: Vec<HistoricalEvent>,
}

impl PlanningContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    pub fn with_interests(mut self, interests: Vec<Category>) -> Self {
        self.interests = interests;
        self
    }

    pub fn with_environment(mut self, environment: EnvironmentPref) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = Some(weather);
        self
    }

    pub fn with_past_events(mut self, past_events: Vec<HistoricalEvent>) -> Self {
        self.past_events = past_events;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_is_unconstrained() {
        let ctx = PlanningContext::new();
        assert!(ctx.mood.is_none());
        assert!(ctx.interests.is_empty());
        assert_eq!(ctx.environment, EnvironmentPref::Any);
        assert!(ctx.weather.is_none());
        assert!(ctx.past_events.is_empty());
    }

    #[test]
    fn test_builder_chain() {
        let ctx = PlanningContext::new()
            .with_mood(Mood::Romantic)
            .with_interests(vec![Category::Food, Category::Music])
            .with_environment(EnvironmentPref::Indoor)
            .with_weather(Weather::Rainy);
        assert_eq!(ctx.mood, Some(Mood::Romantic));
        assert_eq!(ctx.interests.len(), 2);
        assert_eq!(ctx.weather, Some(Weather::Rainy));
    }
}
