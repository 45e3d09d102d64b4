//! Deterministic sample venues, used whenever the live provider is
//! unavailable. Keeps demos and offline development working end to end.

use duet_core::Category;

use crate::places::estimated_cost_for_level;
use crate::provider::{Venue, VenueQuery};

fn venue(
    id: &str,
    name: &str,
    street: &str,
    location: &str,
    price_level: u8,
    estimated_cost: f64,
    rating: f64,
    review_count: u32,
    kinds: &[&str],
    cuisine: Option<&str>,
) -> Venue {
    Venue {
        id: id.to_string(),
        name: name.to_string(),
        address: format!("{street}, {location}"),
        price_level,
        estimated_cost,
        rating,
        review_count,
        kinds: kinds.iter().map(|k| k.to_string()).collect(),
        cuisine: cuisine.map(str::to_string),
    }
}

/// Sample venues for a query, category-routed like the live search.
pub fn venues_for(query: &VenueQuery) -> Vec<Venue> {
    let level = query.price_level.unwrap_or(2).clamp(1, 4);
    let base = estimated_cost_for_level(level);
    let loc = if query.location.is_empty() {
        "San Francisco"
    } else {
        query.location.as_str()
    };

    let mut venues = match query.category {
        Some(Category::Nature) => vec![
            venue("nature_1", "Golden Gate Park", "Golden Gate Park", loc, 1, 0.0, 4.8, 15234, &["park", "tourist_attraction"], None),
            venue("nature_2", "Botanical Gardens", "1000 John F Kennedy Dr", loc, 1, 15.0, 4.6, 8234, &["botanical_garden", "park"], None),
            venue("nature_3", "Ocean Beach", "Ocean Beach", loc, 1, 0.0, 4.7, 11234, &["beach", "park"], None),
        ],
        Some(Category::Art) => vec![
            venue("art_1", "Museum of Modern Art", "151 3rd St", loc, 2, 25.0, 4.5, 15234, &["museum", "art_gallery"], None),
            venue("art_2", "Asian Art Museum", "200 Larkin St", loc, 2, 20.0, 4.6, 9234, &["museum"], None),
            venue("art_3", "Contemporary Art Gallery", "77 Geary St", loc, 1, 0.0, 4.4, 5234, &["art_gallery"], None),
        ],
        Some(Category::Active) => vec![
            venue("active_1", "Rock Climbing Gym", "1234 Mission St", loc, 2, 40.0, 4.7, 3234, &["gym", "sports_complex"], None),
            venue("active_2", "Strike Zone Lanes", "2345 Market St", loc, 2, 35.0, 4.3, 2234, &["bowling_alley"], None),
            venue("active_3", "Sunrise Yoga Studio", "3456 Valencia St", loc, 2, 30.0, 4.6, 4234, &["gym", "health"], None),
        ],
        Some(Category::Music) | Some(Category::Nightlife) => vec![
            venue("music_1", "Blue Note Basement", "456 Fillmore St", loc, 2, 50.0, 4.6, 5234, &["night_club", "bar", "music_venue"], None),
            venue("music_2", "The Back Room", "567 Castro St", loc, 2, 45.0, 4.5, 4234, &["music_venue", "bar"], None),
            venue("music_3", "Velvet Cocktail Bar", "678 Polk St", loc, 3, 60.0, 4.7, 6234, &["bar", "night_club"], None),
        ],
        // Food is the default, matching the live provider's routing.
        _ => vec![
            venue("food_1", "Bella Vista", "123 Main St", loc, level, base, 4.5, 234, &["restaurant", "italian_restaurant"], Some("Italian")),
            venue("food_2", "Sakura Sushi Bar", "456 Market St", loc, level, base + 10.0, 4.7, 189, &["restaurant", "japanese_restaurant"], Some("Japanese")),
            venue("food_3", "The Garden Bistro", "789 Oak Ave", loc, level, base - 5.0, 4.3, 156, &["restaurant", "vegetarian_restaurant"], Some("Vegetarian")),
            venue("food_4", "La Petite Maison", "321 Pine St", loc, level, base + 15.0, 4.6, 298, &["restaurant", "french_restaurant"], Some("French")),
            venue("food_5", "Spice Route", "654 Elm St", loc, level, base - 10.0, 4.4, 167, &["restaurant", "indian_restaurant"], Some("Indian")),
        ],
    };

    if let Some(max) = query.max_results {
        venues.truncate(max);
    }
    venues
}
