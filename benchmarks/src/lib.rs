//! Shared helpers for forage benchmark suites.

use forage_harness::worlds::layouts;
use forage_harness::worlds::maze::MazeWorld;
use forage_kernel::grid::{FoodGrid, Position};
use forage_kernel::proof::canon::canonical_json_bytes;
use forage_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use forage_search::cost::Priority;
use forage_search::node::StateKey;
use forage_search::policy::SearchPolicy;
use forage_search::search::{search, SearchResult};

/// A named maze plus the policy it is benchmarked under.
pub struct Regime {
    pub name: &'static str,
    pub maze: MazeWorld,
    pub policy: SearchPolicy,
}

/// Every named layout that takes at least one expansion.
///
/// # Panics
///
/// Panics if a built-in layout fails to parse. Benchmark setup failures are
/// fatal.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    layouts::ALL
        .iter()
        .filter(|(name, _)| *name != "cleared")
        .map(|&(name, text)| Regime {
            name,
            maze: MazeWorld::parse(name, text).expect("built-in layout parses"),
            policy: SearchPolicy::default(),
        })
        .collect()
}

/// Run `search()` on a regime from its start configuration.
///
/// # Panics
///
/// Panics if `search()` returns an error. Benchmark runs are expected to succeed.
#[must_use]
pub fn run_search_only(regime: &Regime, policy: &SearchPolicy) -> SearchResult {
    search(regime.maze.start(), &regime.maze, policy).expect("search should succeed in benchmarks")
}

/// Hash of the outcome and audit graph of one run.
///
/// Computed before timing and compared after, so a benchmark that starts
/// measuring a different search fails loudly instead of reporting numbers.
///
/// # Panics
///
/// Panics if the graph cannot be serialized.
#[must_use]
pub fn determinism_guard(result: &SearchResult) -> ContentHash {
    let actions: Vec<&str> = result.outcome.actions().iter().map(|a| a.as_str()).collect();
    let graph_digest = result.graph.digest().expect("graph digest");
    let bytes = canonical_json_bytes(&serde_json::json!({
        "actions": actions,
        "graph_digest": graph_digest.as_str(),
        "outcome": result.outcome.as_str(),
    }))
    .expect("canonical guard json");
    canonical_hash(HashDomain::BenchGuard, &bytes)
}

/// A `side × side` grid with food on every `stride`-th cell.
///
/// # Panics
///
/// Panics if `side` is zero.
#[must_use]
pub fn striped_food(side: u32, stride: u32) -> FoodGrid {
    let cells = (0..side)
        .flat_map(|x| (0..side).map(move |y| Position::new(x, y)))
        .enumerate()
        .filter(|(i, _)| i % stride.max(1) as usize == 0)
        .map(|(_, p)| p);
    FoodGrid::with_food(side, side, cells).expect("positions are in bounds")
}

/// `n` priorities with many value-equal ties.
#[must_use]
pub fn tie_heavy_priorities(n: u64) -> Vec<Priority> {
    (0..n)
        .map(|i| Priority::ratio(i % 17 + 3, i % 3 + 1).unwrap_or(Priority::ZERO))
        .collect()
}

/// State key at `(x mod width, 0)` over `food`.
#[must_use]
pub fn key_at(x: u32, food: &FoodGrid) -> StateKey {
    StateKey {
        position: Position::new(x % food.width().max(1), 0),
        food: food.clone(),
    }
}
