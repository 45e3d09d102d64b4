//! Google-Places-style text search client.
//!
//! Any upstream problem (missing key, HTTP error, non-OK status, empty
//! results) falls back to the deterministic sample data, so the provider
//! contract of "never fail outward" holds.

use anyhow::{Result, bail};
use serde::Deserialize;

use crate::provider::{Venue, VenueProvider, VenueQuery, search_route};
use crate::sample;

const API_KEY_ENV: &str = "GOOGLE_PLACES_API_KEY";
const TEXT_SEARCH_URL: &str = "https://maps.googleapis.com/maps/api/place/textsearch/json";

/// Estimated cost for two at a given price level.
pub fn estimated_cost_for_level(price_level: u8) -> f64 {
    match price_level {
        1 => 30.0,
        2 => 70.0,
        3 => 150.0,
        _ => 300.0,
    }
}

const COMMON_CUISINES: [&str; 7] = [
    "italian", "japanese", "chinese", "mexican", "french", "thai", "indian",
];

/// Pull a cuisine label out of provider place types, if one is recognizable.
fn extract_cuisine(kinds: &[String]) -> Option<String> {
    for cuisine in COMMON_CUISINES {
        if kinds.iter().any(|k| k.contains(cuisine)) {
            let mut label = cuisine.to_string();
            label[..1].make_ascii_uppercase();
            return Some(label);
        }
    }
    None
}

pub struct PlacesProvider {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl PlacesProvider {
    /// Provider keyed from the environment; without a key every search goes
    /// straight to sample data.
    pub fn new() -> Self {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    pub fn with_api_key(key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: Some(key.into()),
        }
    }

    async fn text_search(&self, key: &str, query: &VenueQuery) -> Result<Vec<Venue>> {
        #[derive(Deserialize)]
        struct SearchResponse {
            status: String,
            #[serde(default)]
            results: Vec<PlaceResult>,
        }

        #[derive(Deserialize)]
        struct PlaceResult {
            place_id: String,
            name: String,
            formatted_address: Option<String>,
            vicinity: Option<String>,
            price_level: Option<u8>,
            rating: Option<f64>,
            user_ratings_total: Option<u32>,
            #[serde(default)]
            types: Vec<String>,
        }

        let place_type = query
            .category
            .map(|c| search_route(c).place_type)
            .unwrap_or("restaurant");
        let text = format!("{} in {}", query.query, query.location);

        let resp: SearchResponse = self
            .client
            .get(TEXT_SEARCH_URL)
            .query(&[("query", text.as_str()), ("type", place_type), ("key", key)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if resp.status != "OK" && resp.status != "ZERO_RESULTS" {
            bail!("places API status {}", resp.status);
        }

        let max = query.max_results.unwrap_or(20);
        let venues = resp
            .results
            .into_iter()
            .take(max)
            .map(|place| {
                let price_level = place.price_level.unwrap_or(2).clamp(1, 4);
                Venue {
                    id: place.place_id,
                    name: place.name,
                    address: place
                        .formatted_address
                        .or(place.vicinity)
                        .unwrap_or_default(),
                    price_level,
                    estimated_cost: estimated_cost_for_level(price_level),
                    rating: place.rating.unwrap_or(0.0),
                    review_count: place.user_ratings_total.unwrap_or(0),
                    cuisine: extract_cuisine(&place.types),
                    kinds: place.types,
                }
            })
            .collect();

        Ok(venues)
    }
}

impl Default for PlacesProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl VenueProvider for PlacesProvider {
    async fn search(&self, query: &VenueQuery) -> Vec<Venue> {
        let Some(key) = self.api_key.clone() else {
            return sample::venues_for(query);
        };

        match self.text_search(&key, query).await {
            Ok(venues) if !venues.is_empty() => venues,
            Ok(_) => {
                tracing::warn!(query = %query.query, "places search empty, using samples");
                sample::venues_for(query)
            }
            Err(err) => {
                tracing::warn!(error = %err, "places search failed, using samples");
                sample::venues_for(query)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duet_core::Category;

    #[test]
    fn test_cost_map() {
        assert_eq!(estimated_cost_for_level(1), 30.0);
        assert_eq!(estimated_cost_for_level(2), 70.0);
        assert_eq!(estimated_cost_for_level(3), 150.0);
        assert_eq!(estimated_cost_for_level(4), 300.0);
    }

    #[test]
    fn test_extract_cuisine() {
        let kinds = vec!["restaurant".to_string(), "japanese_restaurant".to_string()];
        assert_eq!(extract_cuisine(&kinds), Some("Japanese".to_string()));
        assert_eq!(extract_cuisine(&["park".to_string()]), None);
    }

    #[tokio::test]
    async fn test_keyless_provider_serves_samples() {
        let provider = PlacesProvider {
            client: reqwest::Client::new(),
            api_key: None,
        };
        let q = VenueQuery::for_category(Category::Food, "Austin", 2);
        let venues = provider.search(&q).await;
        assert_eq!(venues.len(), 5);
        assert!(venues[0].id.starts_with("food_"));
    }
}
