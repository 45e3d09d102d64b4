//! Output types: the proposed date plans handed back to the UI layer.

use serde::{Deserialize, Serialize};

use crate::catalog::{ActivityArchetype, Category};

/// A concrete place proposed to fulfill a plan, sourced from the venue provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VenueCandidate {
    pub id: String,
    pub name: String,
    pub address: String,
    /// 1 ($) through 4 ($$$$).
    pub price_level: u8,
    /// Estimated cost for two.
    pub estimated_cost: f64,
    pub rating: f64,
    pub review_count: u32,
    pub cuisine: Option<String>,
    pub selected: bool,
}

impl VenueCandidate {
    /// "$" through "$$$$".
    pub fn price_symbol(&self) -> String {
        "$".repeat(self.price_level.clamp(1, 4) as usize)
    }
}

/// One proposed date, relabeled with its 1-based position in the plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatePlan {
    pub title: String,
    pub location: String,
    pub cost: String,
    pub tags: Vec<String>,
    pub description: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub place_options: Vec<VenueCandidate>,
}

impl DatePlan {
    /// Build a plan from an archetype, prefixing the title with its ordinal.
    /// Any previous "Date N:" prefix on the source title is stripped first.
    pub fn from_archetype(archetype: &ActivityArchetype, ordinal: usize) -> Self {
        let base = archetype
            .title
            .rsplit(':')
            .next()
            .unwrap_or(&archetype.title)
            .trim();
        Self {
            title: format!("Date {ordinal}: {base}"),
            location: archetype.location.clone(),
            cost: archetype.cost.clone(),
            tags: archetype.tags.clone(),
            description: archetype.description.clone(),
            category: archetype.category,
            place_options: Vec::new(),
        }
    }
}
