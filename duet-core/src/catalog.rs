//! Static catalog of date archetypes.
//!
//! The catalog is built once at startup and passed by reference into scoring
//! and selection. It is never mutated after construction.

use serde::{Deserialize, Serialize};

/// Coarse cost bucket for an archetype.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BudgetTier {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "mid")]
    Mid,
    #[serde(rename = "high")]
    High,
}

impl BudgetTier {
    /// Ordinal position (Low=1, Mid=2, High=3), used for adjacency checks.
    pub fn ordinal(&self) -> i32 {
        match self {
            BudgetTier::Low => 1,
            BudgetTier::Mid => 2,
            BudgetTier::High => 3,
        }
    }

    /// True when the two tiers sit next to each other (Low/Mid or Mid/High).
    pub fn is_adjacent(&self, other: BudgetTier) -> bool {
        (self.ordinal() - other.ordinal()).abs() == 1
    }
}

/// Interest category. Also routes venue-provider searches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Nature,
    Art,
    Active,
    Music,
    Nightlife,
}

/// Where the activity happens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Environment {
    Indoor,
    Outdoor,
}

/// Mood labels the planner can match against archetype affinities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Mood {
    Energized,
    Relaxed,
    Romantic,
    Adventurous,
    Playful,
    Cozy,
}

/// A reusable date idea template.
///
/// `moods` is ordered: the first entry is the primary affinity and earns an
/// extra scoring bonus on an exact mood match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityArchetype {
    pub title: String,
    pub location: String,
    /// Formatted cost string, or the literal "Free".
    pub cost: String,
    pub tags: Vec<String>,
    pub description: String,
    pub budget_tier: BudgetTier,
    pub category: Category,
    pub moods: Vec<Mood>,
    pub environment: Environment,
}

impl ActivityArchetype {
    /// First word of the title, the join key for fuzzy history matching.
    pub fn title_stem(&self) -> &str {
        self.title.split_whitespace().next().unwrap_or(&self.title)
    }
}

/// Immutable archetype catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    archetypes: Vec<ActivityArchetype>,
}

impl Catalog {
    pub fn new(archetypes: Vec<ActivityArchetype>) -> Self {
        Self { archetypes }
    }

    pub fn archetypes(&self) -> &[ActivityArchetype] {
        &self.archetypes
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }

    /// Fuzzy reverse lookup: the first archetype whose title stem appears in
    /// the given event title. Lenient on purpose — event titles carry ordinal
    /// prefixes like "Date 2: Stargazing Night".
    pub fn resolve_title(&self, event_title: &str) -> Option<&ActivityArchetype> {
        self.archetypes
            .iter()
            .find(|a| event_title.contains(a.title_stem()))
    }

    /// The built-in catalog of 23 archetypes across all tiers and categories.
    pub fn standard() -> Self {
        fn entry(
            title: &str,
            location: &str,
            cost: &str,
            tags: &[&str],
            description: &str,
            budget_tier: BudgetTier,
            category: Category,
            moods: &[Mood],
            environment: Environment,
        ) -> ActivityArchetype {
            ActivityArchetype {
                title: title.to_string(),
                location: location.to_string(),
                cost: cost.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                description: description.to_string(),
                budget_tier,
                category,
                moods: moods.to_vec(),
                environment,
            }
        }

        use BudgetTier::*;
        use Category::*;
        use Environment::*;
        use Mood::*;

        Self::new(vec![
            // Low / free (< $30)
            entry(
                "Picnic in the Park 🧺",
                "Local City Park",
                "$15.00",
                &["Relaxing", "Nature", "Comfort"],
                "Simple pleasures are the best. Homemade sandwiches and fresh air.",
                Low, Nature, &[Relaxed, Cozy], Outdoor,
            ),
            entry(
                "Street Art Hunt 🎨",
                "Downtown Alleys",
                "Free",
                &["Active", "Urban", "Creative"],
                "Explore the city's hidden murals. Great for photos and walking.",
                Low, Art, &[Adventurous, Energized], Outdoor,
            ),
            entry(
                "Stargazing Night 🌌",
                "Observatory Hill",
                "Free",
                &["Romantic", "Nature", "Chill"],
                "Bring a blanket and a thermos of hot cocoa. Watch the stars together.",
                Low, Nature, &[Romantic, Relaxed], Outdoor,
            ),
            entry(
                "Home Movie Marathon 🎬",
                "Living Room",
                "$10.00",
                &["Cozy", "Indoor", "Chill"],
                "Popcorn, snacks, and your favorite trilogy. Pajamas mandatory.",
                Low, Art, &[Cozy, Relaxed], Indoor,
            ),
            entry(
                "Sunset Beach Walk 🌅",
                "West Coast Beach",
                "Free",
                &["Romantic", "Nature", "Active"],
                "Walk barefoot in the sand as the sun goes down. Classic and perfect.",
                Low, Nature, &[Romantic, Relaxed], Outdoor,
            ),
            entry(
                "Local Museum Day 🏛️",
                "City Museum",
                "$25.00",
                &["Culture", "Indoor", "Learning"],
                "Get cultured and discuss art or history. Often free for locals!",
                Low, Art, &[Relaxed, Cozy], Indoor,
            ),
            entry(
                "Farmer's Market Run 🥕",
                "Town Square",
                "$20.00",
                &["Foodie", "Morning", "Active"],
                "Support local. Buy fresh ingredients and cook a meal together later.",
                Low, Food, &[Energized, Cozy], Outdoor,
            ),
            entry(
                "Coffee Shop Board Games ☕",
                "The Daily Grind",
                "$18.00",
                &["Playful", "Indoor", "Chill"],
                "Sip lattes and get competitive with Scrabble or Catan.",
                Low, Food, &[Playful, Cozy], Indoor,
            ),
            // Mid range ($30 - $100)
            entry(
                "Italian Dinner 🍝",
                "Tony's Trattoria",
                "$70.00",
                &["Classic", "Romantic", "Food"],
                "Candlelight, pasta, and wine. You can't go wrong with the classics.",
                Mid, Food, &[Romantic, Cozy], Indoor,
            ),
            entry(
                "Ax Throwing & Arcade 🕹️",
                "The Rec Room",
                "$60.00",
                &["Fun", "Active", "Playful"],
                "Unleash your inner child. Competitive fun is great for bonding.",
                Mid, Active, &[Playful, Energized], Indoor,
            ),
            entry(
                "Pottery Class 🏺",
                "Clay Studio",
                "$90.00",
                &["Creative", "Learning", "Fun"],
                "Get your hands dirty! Create a mug or bowl to keep forever.",
                Mid, Art, &[Playful, Adventurous], Indoor,
            ),
            entry(
                "Live Jazz Club 🎷",
                "Blue Note Basement",
                "$80.00",
                &["Music", "Nightlife", "Classy"],
                "Smooth tunes and craft cocktails in an intimate setting.",
                Mid, Music, &[Romantic, Relaxed], Indoor,
            ),
            entry(
                "Botanical Garden 🌺",
                "City Gardens",
                "$40.00",
                &["Nature", "Beautiful", "Chill"],
                "Wander through exotic plants and flowers. Very instagrammable.",
                Mid, Nature, &[Relaxed, Romantic], Outdoor,
            ),
            entry(
                "Comedy Club 🎤",
                "Laugh Factory",
                "$50.00",
                &["Fun", "Nightlife", "Entertainment"],
                "Laughter is the best aphrodisiac. Catch a local set.",
                Mid, Nightlife, &[Playful, Energized], Indoor,
            ),
            entry(
                "Bowling & Burgers 🎳",
                "Strike Zone",
                "$55.00",
                &["Retro", "Active", "Fun"],
                "Classic date night. Rent the ugly shoes and aim for a strike.",
                Mid, Active, &[Playful, Energized], Indoor,
            ),
            entry(
                "Wine Tasting 🍷",
                "Local Vineyard",
                "$85.00",
                &["Classy", "Daytime", "Foodie"],
                "Sample a flight of local wines and learn about the process.",
                // Often indoors or covered.
                Mid, Food, &[Relaxed, Romantic], Indoor,
            ),
            // High / splurge (> $100)
            entry(
                "Michelin Tasting Menu 🌟",
                "Top Rated Fusion Spot",
                "$250.00",
                &["Fancy", "Foodie", "Experience"],
                "A culinary journey for the senses. Dress up and indulge.",
                High, Food, &[Romantic, Adventurous], Indoor,
            ),
            entry(
                "Luxury Spa Day 🧖",
                "Resort Spa",
                "$300.00",
                &["Pampering", "Chill", "Luxury"],
                "Ultimate relaxation. Massage, sauna, and zero worries.",
                High, Active, &[Relaxed, Cozy], Indoor,
            ),
            entry(
                "Helicopter Tour 🚁",
                "Helipad",
                "$400.00",
                &["Exciting", "View", "Once-in-a-lifetime"],
                "See the city from above. An unforgettable adrenaline rush.",
                High, Active, &[Adventurous, Energized], Outdoor,
            ),
            entry(
                "Weekend Getaway 🏨",
                "Boutique Hotel",
                "$500.00",
                &["Travel", "Romantic", "Escape"],
                "Pack a bag and escape reality for 48 hours.",
                High, Nature, &[Romantic, Cozy], Indoor,
            ),
            entry(
                "Private Boat Rental ⛵",
                "Marina",
                "$350.00",
                &["Water", "Luxury", "Private"],
                "Cruise the harbor on your own private vessel. Sunset recommended.",
                High, Nature, &[Adventurous, Romantic], Outdoor,
            ),
            entry(
                "Orchestra Night 🎻",
                "Grand Theater",
                "$200.00",
                &["Culture", "Fancy", "Nightout"],
                "Get dressed to the nines for a night of high culture.",
                High, Music, &[Romantic, Relaxed], Indoor,
            ),
            entry(
                "Omakase Experience 🍣",
                "Sushi Bar",
                "$180.00",
                &["Foodie", "Intimate", "Experience"],
                "Let the chef decide. Fresh fish flown in daily from Japan.",
                High, Food, &[Adventurous, Romantic], Indoor,
            ),
        ])
    }
}
