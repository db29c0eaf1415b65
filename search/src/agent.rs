//! `PlanningAgent`: serves a cached plan one action per call.
//!
//! The agent plans lazily. Whenever its cache is empty it runs a full
//! search from the configuration it is handed and caches the resulting
//! actions; each call then pops one action. With nothing left to serve it
//! answers [`Direction::Stop`] instead of failing.

use std::collections::VecDeque;

use forage_kernel::grid::Direction;

use crate::contract::ForageWorld;
use crate::error::SearchError;
use crate::policy::SearchPolicy;
use crate::search::{search, SearchOutcome};

/// Per-agent plan cache over a world `W`.
pub struct PlanningAgent<W> {
    world: W,
    policy: SearchPolicy,
    plan: VecDeque<Direction>,
    last_outcome: Option<SearchOutcome>,
    searches_run: u64,
}

impl<W: ForageWorld> PlanningAgent<W> {
    /// Agent with the default (unbounded) policy.
    #[must_use]
    pub fn new(world: W) -> Self {
        Self::with_policy(world, SearchPolicy::default())
    }

    #[must_use]
    pub fn with_policy(world: W, policy: SearchPolicy) -> Self {
        Self {
            world,
            policy,
            plan: VecDeque::new(),
            last_outcome: None,
            searches_run: 0,
        }
    }

    /// Next action for the agent standing in `config`.
    ///
    /// Plans from `config` if the cache is empty. Returns `Stop` once no
    /// planned action remains, whether because the plan was consumed or
    /// because no plan exists.
    ///
    /// # Errors
    ///
    /// Propagates [`SearchError`] from a search triggered by this call. The
    /// cache stays empty in that case.
    pub fn next_action(&mut self, config: &W::Config) -> Result<Direction, SearchError> {
        if self.plan.is_empty() {
            self.replan(config)?;
        }
        Ok(self.plan.pop_front().unwrap_or(Direction::Stop))
    }

    fn replan(&mut self, config: &W::Config) -> Result<(), SearchError> {
        let result = search(config, &self.world, &self.policy)?;
        self.searches_run += 1;
        tracing::debug!(
            world_id = self.world.world_id(),
            outcome = result.outcome.as_str(),
            plan_len = result.outcome.actions().len(),
            searches_run = self.searches_run,
            "agent replanned"
        );
        self.plan = result.outcome.actions().iter().copied().collect();
        self.last_outcome = Some(result.outcome);
        Ok(())
    }

    /// Actions still cached, in serving order.
    pub fn remaining_plan(&self) -> impl Iterator<Item = Direction> + '_ {
        self.plan.iter().copied()
    }

    /// Outcome of the most recent search, if any ran.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&SearchOutcome> {
        self.last_outcome.as_ref()
    }

    /// Number of searches this agent has run.
    #[must_use]
    pub fn searches_run(&self) -> u64 {
        self.searches_run
    }

    #[must_use]
    pub fn world(&self) -> &W {
        &self.world
    }

    /// Drop the cached plan so the next call plans afresh.
    pub fn clear_plan(&mut self) {
        self.plan.clear();
    }
}
