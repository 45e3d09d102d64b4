//! Monthly goal settings: budget and date frequency.
//!
//! Values are kept as the raw strings the settings form produced; parsing is
//! lenient with silent defaults, never an error.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MONTHLY_BUDGET: f64 = 200.0;
pub const DEFAULT_DATES_PER_MONTH: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalSettings {
    pub monthly_budget: String,
    pub dates_per_month: String,
}

impl Default for GoalSettings {
    fn default() -> Self {
        Self {
            monthly_budget: "200".to_string(),
            dates_per_month: "4".to_string(),
        }
    }
}

impl GoalSettings {
    pub fn new(monthly_budget: impl Into<String>, dates_per_month: impl Into<String>) -> Self {
        Self {
            monthly_budget: monthly_budget.into(),
            dates_per_month: dates_per_month.into(),
        }
    }

    /// Parsed monthly budget, defaulting when absent or unparseable.
    pub fn budget(&self) -> f64 {
        self.monthly_budget
            .trim()
            .parse()
            .unwrap_or(DEFAULT_MONTHLY_BUDGET)
    }

    /// Parsed dates-per-month, defaulting when absent or unparseable.
    pub fn count(&self) -> usize {
        self.dates_per_month
            .trim()
            .parse()
            .unwrap_or(DEFAULT_DATES_PER_MONTH)
    }
}
