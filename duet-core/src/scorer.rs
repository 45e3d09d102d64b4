//! Multi-factor archetype scoring against the planning context.
//!
//! All terms are additive; hard exclusions short-circuit with a sentinel score
//! that the post-scoring floor removes before ranking.

use crate::catalog::{ActivityArchetype, BudgetTier, Catalog, Environment};
use crate::context::{EnvironmentPref, PlanningContext, Weather};
use crate::history::SUCCESS_RATING;

/// Sentinel assigned to disqualified archetypes.
pub const EXCLUDED: f64 = -100.0;

/// Candidates at or below this are dropped before ranking. Catches the -100
/// exclusions and heavily tag-penalized entries without over-excluding
/// borderline cases.
pub const SCORE_FLOOR: f64 = -50.0;

/// Ratings below this penalize similar archetypes.
const FAILURE_RATING: f64 = 0.4;

/// An archetype paired with its score for the current request.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub archetype: &'a ActivityArchetype,
    pub score: f64,
}

/// Derive the target tier from the average budget per date.
pub fn target_tier(total_budget: f64, count: usize) -> BudgetTier {
    let avg = total_budget / count.max(1) as f64;
    if avg < 40.0 {
        BudgetTier::Low
    } else if avg > 120.0 {
        BudgetTier::High
    } else {
        BudgetTier::Mid
    }
}

/// Score one archetype. Signed, unbounded; `EXCLUDED` means disqualified.
///
/// The catalog is needed for the learning layer: past event titles are fuzzily
/// resolved back to archetypes so tag overlap can be computed.
pub fn score_archetype(
    archetype: &ActivityArchetype,
    ctx: &PlanningContext,
    target: BudgetTier,
    catalog: &Catalog,
) -> f64 {
    // Rain disqualifies outdoor plans outright.
    if ctx.weather == Some(Weather::Rainy) && archetype.environment == Environment::Outdoor {
        return EXCLUDED;
    }

    // Explicit environment preference is a hard filter; Any matches everything.
    match ctx.environment {
        EnvironmentPref::Indoor if archetype.environment != Environment::Indoor => return EXCLUDED,
        EnvironmentPref::Outdoor if archetype.environment != Environment::Outdoor => {
            return EXCLUDED;
        }
        _ => {}
    }

    let mut score = 0.0;

    if ctx.weather == Some(Weather::Sunny) && archetype.environment == Environment::Outdoor {
        score += 2.0;
    }

    if let Some(mood) = ctx.mood {
        if archetype.moods.contains(&mood) {
            score += 15.0;
            if archetype.moods.first() == Some(&mood) {
                score += 5.0;
            }
        }
    }

    if !ctx.interests.is_empty() && ctx.interests.contains(&archetype.category) {
        score += 10.0;
    }

    if archetype.budget_tier == target {
        score += 10.0;
    } else if archetype.budget_tier.is_adjacent(target) {
        score += 2.0;
    } else {
        score -= 10.0;
    }

    // Learning layer: reward tag overlap with well-rated past dates, punish
    // overlap with flops. Ratings in between carry no signal.
    for event in &ctx.past_events {
        if !event.is_rated() {
            continue;
        }
        let Some(rating) = event.rating else { continue };
        let Some(original) = catalog.resolve_title(&event.title) else {
            continue;
        };
        let shared = archetype
            .tags
            .iter()
            .filter(|t| original.tags.contains(t))
            .count() as f64;
        if shared == 0.0 {
            continue;
        }
        if rating > SUCCESS_RATING {
            score += 2.0 * shared;
        } else if rating < FAILURE_RATING {
            score -= 2.0 * shared;
        }
    }

    score
}

/// Score the whole catalog and drop disqualified entries.
pub fn score_catalog<'a>(
    catalog: &'a Catalog,
    ctx: &PlanningContext,
    total_budget: f64,
    count: usize,
) -> Vec<ScoredCandidate<'a>> {
    let target = target_tier(total_budget, count);
    catalog
        .archetypes()
        .iter()
        .map(|archetype| ScoredCandidate {
            archetype,
            score: score_archetype(archetype, ctx, target, catalog),
        })
        .filter(|c| c.score > SCORE_FLOOR)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Mood};
    use crate::history::HistoricalEvent;

    fn catalog() -> Catalog {
        Catalog::standard()
    }

    fn archetype<'a>(catalog: &'a Catalog, stem: &str) -> &'a ActivityArchetype {
        catalog
            .archetypes()
            .iter()
            .find(|a| a.title_stem() == stem)
            .expect("archetype")
    }

    #[test]
    fn test_target_tier_boundaries() {
        // avg = total / count, with count = 1 for direct control
        assert_eq!(target_tier(39.99, 1), BudgetTier::Low);
        assert_eq!(target_tier(40.0, 1), BudgetTier::Mid);
        assert_eq!(target_tier(120.0, 1), BudgetTier::Mid);
        assert_eq!(target_tier(120.01, 1), BudgetTier::High);
    }

    #[test]
    fn test_target_tier_zero_count_does_not_panic() {
        assert_eq!(target_tier(200.0, 0), BudgetTier::High);
    }

    #[test]
    fn test_rainy_excludes_every_outdoor_archetype() {
        let cat = catalog();
        let ctx = PlanningContext::new().with_weather(Weather::Rainy);
        for a in cat.archetypes() {
            let score = score_archetype(a, &ctx, BudgetTier::Mid, &cat);
            if a.environment == Environment::Outdoor {
                assert_eq!(score, EXCLUDED, "{} should be excluded", a.title);
            } else {
                assert!(score > SCORE_FLOOR, "{} should survive", a.title);
            }
        }
    }

    #[test]
    fn test_sunny_boosts_outdoor() {
        let cat = catalog();
        let picnic = archetype(&cat, "Picnic");
        let base = score_archetype(picnic, &PlanningContext::new(), BudgetTier::Low, &cat);
        let sunny = score_archetype(
            picnic,
            &PlanningContext::new().with_weather(Weather::Sunny),
            BudgetTier::Low,
            &cat,
        );
        assert_eq!(sunny - base, 2.0);
    }

    #[test]
    fn test_environment_preference_excludes_mismatch() {
        let cat = catalog();
        let picnic = archetype(&cat, "Picnic"); // Outdoor
        let jazz = archetype(&cat, "Live"); // Indoor

        let indoor = PlanningContext::new().with_environment(EnvironmentPref::Indoor);
        assert_eq!(score_archetype(picnic, &indoor, BudgetTier::Low, &cat), EXCLUDED);
        assert!(score_archetype(jazz, &indoor, BudgetTier::Mid, &cat) > SCORE_FLOOR);

        let outdoor = PlanningContext::new().with_environment(EnvironmentPref::Outdoor);
        assert_eq!(score_archetype(jazz, &outdoor, BudgetTier::Mid, &cat), EXCLUDED);
        assert!(score_archetype(picnic, &outdoor, BudgetTier::Low, &cat) > SCORE_FLOOR);
    }

    #[test]
    fn test_mood_match_and_primary_bonus() {
        let cat = catalog();
        let stargazing = archetype(&cat, "Stargazing"); // moods [Romantic, Relaxed]
        let neutral = score_archetype(stargazing, &PlanningContext::new(), BudgetTier::Low, &cat);

        let romantic = PlanningContext::new().with_mood(Mood::Romantic);
        let relaxed = PlanningContext::new().with_mood(Mood::Relaxed);
        let playful = PlanningContext::new().with_mood(Mood::Playful);

        // Primary affinity: +15 +5. Secondary: +15. No affinity: +0.
        assert_eq!(
            score_archetype(stargazing, &romantic, BudgetTier::Low, &cat) - neutral,
            20.0
        );
        assert_eq!(
            score_archetype(stargazing, &relaxed, BudgetTier::Low, &cat) - neutral,
            15.0
        );
        assert_eq!(
            score_archetype(stargazing, &playful, BudgetTier::Low, &cat) - neutral,
            0.0
        );
    }

    #[test]
    fn test_interest_match() {
        let cat = catalog();
        let dinner = archetype(&cat, "Italian"); // Food
        let base = score_archetype(dinner, &PlanningContext::new(), BudgetTier::Mid, &cat);
        let foodie = PlanningContext::new().with_interests(vec![Category::Food]);
        assert_eq!(
            score_archetype(dinner, &foodie, BudgetTier::Mid, &cat) - base,
            10.0
        );
        let nature = PlanningContext::new().with_interests(vec![Category::Nature]);
        assert_eq!(
            score_archetype(dinner, &nature, BudgetTier::Mid, &cat) - base,
            0.0
        );
    }

    #[test]
    fn test_tier_fit_exact_adjacent_far() {
        let cat = catalog();
        let ctx = PlanningContext::new();
        let picnic = archetype(&cat, "Picnic"); // Low
        assert_eq!(score_archetype(picnic, &ctx, BudgetTier::Low, &cat), 10.0);
        assert_eq!(score_archetype(picnic, &ctx, BudgetTier::Mid, &cat), 2.0);
        assert_eq!(score_archetype(picnic, &ctx, BudgetTier::High, &cat), -10.0);
    }

    #[test]
    fn test_history_boosts_similar_tags() {
        let cat = catalog();
        // Stargazing rated high; Picnic shares the "Nature" tag.
        let past = vec![
            HistoricalEvent::new("Date 1: Stargazing Night", "0").completed(0.9),
        ];
        let picnic = archetype(&cat, "Picnic");
        let base = score_archetype(picnic, &PlanningContext::new(), BudgetTier::Low, &cat);
        let ctx = PlanningContext::new().with_past_events(past);
        let boosted = score_archetype(picnic, &ctx, BudgetTier::Low, &cat);
        // Shared tags between Picnic and Stargazing: "Nature" -> +2.
        assert_eq!(boosted - base, 2.0);
    }

    #[test]
    fn test_history_penalizes_similar_tags_on_flop() {
        let cat = catalog();
        let past = vec![
            HistoricalEvent::new("Date 1: Stargazing Night", "0").completed(0.1),
        ];
        let sunset = archetype(&cat, "Sunset");
        let base = score_archetype(sunset, &PlanningContext::new(), BudgetTier::Low, &cat);
        let ctx = PlanningContext::new().with_past_events(past);
        let penalized = score_archetype(sunset, &ctx, BudgetTier::Low, &cat);
        // Shared tags between Sunset Beach Walk and Stargazing: Romantic, Nature -> -4.
        assert_eq!(base - penalized, 4.0);
    }

    #[test]
    fn test_history_midband_rating_is_neutral() {
        let cat = catalog();
        let past = vec![
            HistoricalEvent::new("Date 1: Stargazing Night", "0").completed(0.5),
        ];
        let picnic = archetype(&cat, "Picnic");
        let base = score_archetype(picnic, &PlanningContext::new(), BudgetTier::Low, &cat);
        let ctx = PlanningContext::new().with_past_events(past);
        assert_eq!(score_archetype(picnic, &ctx, BudgetTier::Low, &cat), base);
    }

    #[test]
    fn test_score_catalog_drops_excluded() {
        let cat = catalog();
        let ctx = PlanningContext::new().with_weather(Weather::Rainy);
        let candidates = score_catalog(&cat, &ctx, 200.0, 4);
        assert!(!candidates.is_empty());
        for c in &candidates {
            assert_eq!(c.archetype.environment, Environment::Indoor);
            assert!(c.score > SCORE_FLOOR);
        }
    }

    /// Budget 160 over 4 dates targets Mid; Mid-tier Food archetypes must
    /// outrank Low-tier non-Food ones when Food is the only interest.
    #[test]
    fn test_mid_food_scenario_ranking() {
        let cat = catalog();
        let ctx = PlanningContext::new().with_interests(vec![Category::Food]);
        assert_eq!(target_tier(160.0, 4), BudgetTier::Mid);
        let candidates = score_catalog(&cat, &ctx, 160.0, 4);

        for c in &candidates {
            let a = c.archetype;
            if a.budget_tier == BudgetTier::Mid && a.category == Category::Food {
                assert!(c.score >= 20.0, "{} scored {}", a.title, c.score);
            }
            if a.budget_tier == BudgetTier::Low && a.category != Category::Food {
                assert!(c.score <= 2.0, "{} scored {}", a.title, c.score);
            }
        }
    }
}
