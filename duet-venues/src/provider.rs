//! Venue provider abstraction.
//!
//! Providers must never fail outward: on any upstream problem they fall back
//! internally (to sample data or an empty list). Plan generation treats venue
//! candidates as a best-effort garnish.

use serde::{Deserialize, Serialize};

use duet_core::{Category, VenueCandidate};

/// Search parameters handed to a provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueQuery {
    pub query: String,
    pub location: String,
    pub price_level: Option<u8>,
    pub min_rating: Option<f64>,
    pub max_results: Option<usize>,
    pub category: Option<Category>,
}

impl VenueQuery {
    /// Standard query for a plan category: routed search text, a 20-venue
    /// fetch pool, and a 4.0 rating floor.
    pub fn for_category(category: Category, location: &str, price_level: u8) -> Self {
        Self {
            query: search_route(category).query.to_string(),
            location: location.to_string(),
            price_level: Some(price_level),
            min_rating: Some(4.0),
            max_results: Some(20),
            category: Some(category),
        }
    }
}

/// How a category maps onto provider-side search vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct SearchRoute {
    pub query: &'static str,
    pub place_type: &'static str,
}

/// Category routing table for text search.
pub fn search_route(category: Category) -> SearchRoute {
    match category {
        Category::Food => SearchRoute { query: "restaurant", place_type: "restaurant" },
        Category::Nature => SearchRoute { query: "park", place_type: "park" },
        Category::Art => SearchRoute { query: "art gallery museum", place_type: "art_gallery" },
        Category::Active => SearchRoute { query: "gym sports activity", place_type: "gym" },
        Category::Music => SearchRoute { query: "music venue concert", place_type: "night_club" },
        Category::Nightlife => SearchRoute { query: "bar nightclub", place_type: "bar" },
    }
}

/// A venue as returned by a provider, before plan-level scoring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub address: String,
    pub price_level: u8,
    pub estimated_cost: f64,
    pub rating: f64,
    pub review_count: u32,
    pub kinds: Vec<String>,
    pub cuisine: Option<String>,
}

impl Venue {
    pub fn into_candidate(self) -> VenueCandidate {
        VenueCandidate {
            id: self.id,
            name: self.name,
            address: self.address,
            price_level: self.price_level,
            estimated_cost: self.estimated_cost,
            rating: self.rating,
            review_count: self.review_count,
            cuisine: self.cuisine,
            selected: false,
        }
    }
}

/// Async venue source. Implementations swallow upstream errors.
///
/// Callers await searches inline; nothing here is spawned, so the returned
/// futures carry no auto-trait bounds.
#[allow(async_fn_in_trait)]
pub trait VenueProvider {
    async fn search(&self, query: &VenueQuery) -> Vec<Venue>;
}
