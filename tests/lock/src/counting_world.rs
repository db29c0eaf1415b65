//! A world wrapper that counts how often each state key is expanded.

use std::cell::RefCell;
use std::collections::BTreeMap;

use forage_kernel::grid::{Direction, FoodGrid, Position};
use forage_search::contract::{ForageWorld, WorldError};
use forage_search::node::StateKey;

/// Delegates to `inner` and tallies `successors` calls per state key.
pub struct CountingWorld<W> {
    pub inner: W,
    counts: RefCell<BTreeMap<StateKey, u32>>,
}

impl<W: ForageWorld> CountingWorld<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            counts: RefCell::new(BTreeMap::new()),
        }
    }

    /// `(key, times expanded)` for every key that was expanded at all.
    pub fn counts(&self) -> BTreeMap<StateKey, u32> {
        self.counts.borrow().clone()
    }

    pub fn total_calls(&self) -> u64 {
        self.counts.borrow().values().map(|&c| u64::from(c)).sum()
    }
}

impl<W: ForageWorld> ForageWorld for CountingWorld<W> {
    type Config = W::Config;

    fn world_id(&self) -> &str {
        self.inner.world_id()
    }

    fn position(&self, config: &Self::Config) -> Position {
        self.inner.position(config)
    }

    fn food_grid<'c>(&self, config: &'c Self::Config) -> &'c FoodGrid {
        self.inner.food_grid(config)
    }

    fn is_goal(&self, config: &Self::Config) -> bool {
        self.inner.is_goal(config)
    }

    fn successors(
        &self,
        config: &Self::Config,
    ) -> Result<Vec<(Self::Config, Direction)>, WorldError> {
        *self
            .counts
            .borrow_mut()
            .entry(StateKey::of(&self.inner, config))
            .or_insert(0) += 1;
        self.inner.successors(config)
    }
}
