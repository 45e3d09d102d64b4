//! Venue enrichment: score provider candidates against budget and history.
//!
//! The emotional-intensity input (0-1) sets a target price level and an
//! acceptable cost band; venues are scored against both plus rating, review
//! volume, and — for Food — the historical success pattern.

use duet_core::{Category, HistoricalEvent, PriceRange, SuccessPattern, VenueCandidate,
    analyze_spot_on_history};

use crate::provider::{Venue, VenueProvider, VenueQuery};

/// Ranked venues attached to a plan.
pub const MAX_OPTIONS: usize = 10;

/// Map emotional intensity to a discrete price level 1-4.
pub fn emotion_to_price_level(emotion: f64) -> u8 {
    if emotion < 0.25 {
        1
    } else if emotion < 0.75 {
        2
    } else if emotion < 0.95 {
        3
    } else {
        4
    }
}

/// Named band for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmotionBand {
    Comfort,
    SpotOn,
    Treat,
}

pub fn emotion_band(emotion: f64) -> EmotionBand {
    if emotion < 0.25 {
        EmotionBand::Comfort
    } else if emotion < 0.75 {
        EmotionBand::SpotOn
    } else {
        EmotionBand::Treat
    }
}

/// Acceptable cost band around the base budget; wider and higher as the
/// target price level climbs.
pub fn budget_range(emotion: f64, base_budget: f64) -> PriceRange {
    let (min_mult, max_mult) = match emotion_to_price_level(emotion) {
        1 => (0.5, 1.2),
        2 => (0.8, 1.5),
        3 => (1.2, 2.0),
        _ => (1.5, 3.0),
    };
    PriceRange {
        min: base_budget * min_mult,
        max: base_budget * max_mult,
    }
}

/// Score one venue against the request. Price-level fit only matters for
/// Food; other categories have too little price-level signal upstream.
pub fn score_venue(
    venue: &Venue,
    category: Category,
    target_level: u8,
    band: &PriceRange,
    pattern: Option<&SuccessPattern>,
) -> f64 {
    let mut score = venue.rating * 10.0;

    if category == Category::Food {
        if venue.price_level == target_level {
            score += 20.0;
        } else if venue.price_level.abs_diff(target_level) == 1 {
            score += 10.0;
        } else {
            score -= 10.0;
        }
    }

    if band.contains(venue.estimated_cost) {
        score += 15.0;
    } else if venue.estimated_cost > band.max {
        score -= 20.0;
    }

    if category == Category::Food {
        if let Some(p) = pattern {
            if p.preferred_price_range.contains(venue.estimated_cost) {
                score += 25.0;
            }
        }
    }

    if venue.review_count > 100 {
        score += 5.0;
    }

    score
}

/// Fetch, score, and rank venue options for one plan.
///
/// Provider failure surfaces as an empty or fallback candidate list; a plan
/// without venue options remains valid.
pub async fn venue_options<P: VenueProvider>(
    provider: &P,
    category: Category,
    emotion: f64,
    base_budget: f64,
    city: &str,
    past_events: &[HistoricalEvent],
) -> Vec<VenueCandidate> {
    let target_level = emotion_to_price_level(emotion);
    let band = budget_range(emotion, base_budget);
    let pattern = if category == Category::Food {
        analyze_spot_on_history(past_events)
    } else {
        None
    };

    let query = VenueQuery::for_category(category, city, target_level);
    let venues = provider.search(&query).await;

    let mut scored: Vec<(f64, Venue)> = venues
        .into_iter()
        .map(|v| (score_venue(&v, category, target_level, &band, pattern.as_ref()), v))
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    scored
        .into_iter()
        .take(MAX_OPTIONS)
        .map(|(_, v)| v.into_candidate())
        .collect()
}
