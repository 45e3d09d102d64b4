//! Ranked selection with a diversity shuffle.
//!
//! Top candidates form a pool that gets shuffled before the final draw, so
//! repeated requests with identical inputs still produce varied plans. The
//! random source is injected (seedable) so tests stay deterministic.

use std::cmp::Ordering;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::plan::DatePlan;
use crate::scorer::ScoredCandidate;

/// Minimum pool size drawn from, even for small counts.
pub const POOL_FLOOR: usize = 10;

pub struct Selector {
    rng: StdRng,
}

impl Selector {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic selector for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick `count` plans from the scored candidates.
    ///
    /// Sorts descending by score (ties arbitrary; the shuffle follows anyway),
    /// keeps the top `max(count, POOL_FLOOR)` as the pool, shuffles it, and
    /// takes the first `count`. When fewer candidates exist than requested,
    /// the shuffled pool is cycled, so the result can contain duplicates —
    /// a documented degenerate case, preferred over failing the request.
    /// Returns an empty list only when no candidates survived exclusion.
    pub fn select(&mut self, mut candidates: Vec<ScoredCandidate<'_>>, count: usize) -> Vec<DatePlan> {
        if count == 0 || candidates.is_empty() {
            return Vec::new();
        }

        candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        candidates.truncate(count.max(POOL_FLOOR));
        candidates.shuffle(&mut self.rng);

        (0..count)
            .map(|i| DatePlan::from_archetype(candidates[i % candidates.len()].archetype, i + 1))
            .collect()
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new()
    }
}
