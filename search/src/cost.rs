//! Cost model: backward cost, forward estimate and the frontier priority.
//!
//! `total = backward + forward` where
//!
//! - `backward = 1 + remaining_food + path_len`
//! - `forward  = distance_sum / remaining_food` (0 when no food remains)
//!
//! The backward term charges for food still on the grid as well as for
//! steps taken. The forward term is the average Manhattan distance
//! from the agent to the remaining food.
//!
//! Totals are exact rationals. Comparing by cross-multiplication keeps tie
//! decisions bit-reproducible, and the canonical JSON writer (integers only)
//! can record them as `numer`/`denom` pairs.

use std::cmp::Ordering;

use forage_kernel::grid::{Direction, FoodGrid, Position};

use crate::contract::ForageWorld;

/// Exact non-negative rational `numer / denom`, `denom > 0`.
///
/// Equality and ordering are by value: `2/1 == 4/2`.
#[derive(Debug, Clone, Copy)]
pub struct Priority {
    numer: u64,
    denom: u64,
}

impl Priority {
    pub const ZERO: Self = Self { numer: 0, denom: 1 };

    #[must_use]
    pub const fn whole(value: u64) -> Self {
        Self {
            numer: value,
            denom: 1,
        }
    }

    /// `numer / denom`, or `None` when `denom == 0`.
    #[must_use]
    pub const fn ratio(numer: u64, denom: u64) -> Option<Self> {
        if denom == 0 {
            None
        } else {
            Some(Self { numer, denom })
        }
    }

    #[must_use]
    pub const fn numer(self) -> u64 {
        self.numer
    }

    #[must_use]
    pub const fn denom(self) -> u64 {
        self.denom
    }

    /// `self + value`, saturating.
    #[must_use]
    pub fn plus_whole(self, value: u64) -> Self {
        Self {
            numer: self.numer.saturating_add(value.saturating_mul(self.denom)),
            denom: self.denom,
        }
    }

    #[must_use]
    pub fn is_whole(self) -> bool {
        self.numer % self.denom == 0
    }
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = u128::from(self.numer) * u128::from(other.denom);
        let rhs = u128::from(other.numer) * u128::from(self.denom);
        lhs.cmp(&rhs)
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.numer / self.denom)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

/// Number of cells still holding food.
#[must_use]
pub fn remaining_food_count(food: &FoodGrid) -> u64 {
    food.count() as u64
}

/// Sum of Manhattan distances from `position` to every remaining food cell.
#[must_use]
pub fn sum_of_manhattan_distances(position: Position, food: &FoodGrid) -> u64 {
    food.food_positions().map(|f| position.manhattan(f)).sum()
}

/// `1 + remaining + path_len`.
#[must_use]
pub fn backward_cost(path_len: usize, remaining: u64) -> u64 {
    1u64.saturating_add(remaining).saturating_add(path_len as u64)
}

/// Average remaining distance; exactly zero when no food remains.
#[must_use]
pub fn forward_estimate(distance_sum: u64, remaining: u64) -> Priority {
    Priority::ratio(distance_sum, remaining).unwrap_or(Priority::ZERO)
}

/// Every term of the cost model for one search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostBreakdown {
    pub remaining: u64,
    pub distance_sum: u64,
    pub backward: u64,
    pub forward: Priority,
    pub total: Priority,
}

impl CostBreakdown {
    /// Evaluate the cost model for an agent at `position` facing `food`
    /// after `path_len` moves.
    #[must_use]
    pub fn evaluate(position: Position, food: &FoodGrid, path_len: usize) -> Self {
        let remaining = remaining_food_count(food);
        let distance_sum = sum_of_manhattan_distances(position, food);
        let backward = backward_cost(path_len, remaining);
        let forward = forward_estimate(distance_sum, remaining);
        Self {
            remaining,
            distance_sum,
            backward,
            forward,
            total: forward.plus_whole(backward),
        }
    }
}

/// Frontier priority of `(config, path)`.
#[must_use]
pub fn total_cost<W: ForageWorld>(world: &W, config: &W::Config, path: &[Direction]) -> Priority {
    CostBreakdown::evaluate(world.position(config), world.food_grid(config), path.len()).total
}
