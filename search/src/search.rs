//! Search entry point and expansion loop.

use forage_kernel::grid::Direction;

use crate::contract::ForageWorld;
use crate::cost::total_cost;
use crate::error::SearchError;
use crate::frontier::{BestFirstFrontier, ClosedSet};
use crate::graph::{ExpandEvent, SearchGraph, SearchGraphMetadata, TerminationReason};
use crate::node::StateKey;
use crate::policy::SearchPolicy;

/// How a search ended.
///
/// `Found(vec![])` (start already a goal) and `Exhausted` (no plan exists)
/// are distinct outcomes even though both carry no actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Actions from the start to a goal configuration.
    Found(Vec<Direction>),
    /// The frontier emptied without reaching a goal.
    Exhausted,
    /// The policy's expansion budget ran out first.
    BudgetExceeded,
}

impl SearchOutcome {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The planned actions; empty unless a goal was found.
    #[must_use]
    pub fn actions(&self) -> &[Direction] {
        match self {
            Self::Found(path) => path,
            Self::Exhausted | Self::BudgetExceeded => &[],
        }
    }

    /// Consume into the action sequence; empty unless a goal was found.
    #[must_use]
    pub fn into_actions(self) -> Vec<Direction> {
        match self {
            Self::Found(path) => path,
            Self::Exhausted | Self::BudgetExceeded => Vec::new(),
        }
    }

    /// Stable snake-case tag used in artifacts and logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::Exhausted => "exhausted",
            Self::BudgetExceeded => "budget_exceeded",
        }
    }
}

/// Result of a search execution: the outcome plus its audit trail.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub graph: SearchGraph,
}

/// Plan a path from `start` to a goal with the default (unbounded) policy
/// and no per-expansion audit events.
///
/// # Errors
///
/// Propagates [`SearchError::World`] from the world's queries.
pub fn plan_actions<W: ForageWorld>(
    start: &W::Config,
    world: &W,
) -> Result<SearchOutcome, SearchError> {
    let policy = SearchPolicy {
        record_expansions: false,
        ..SearchPolicy::default()
    };
    search(start, world, &policy).map(|r| r.outcome)
}

/// Run best-first search from `start`.
///
/// Pops the node of lowest total cost (oldest first on ties). A popped goal
/// ends the search. A popped key that was already expanded is discarded.
/// Otherwise the key is closed and every successor is pushed with
/// `parent path + [action]`, in the order the world produced them.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] before any step if the policy is
/// rejected, and [`SearchError::World`] as soon as the world fails; no
/// partial outcome is produced in either case.
pub fn search<W: ForageWorld>(
    start: &W::Config,
    world: &W,
    policy: &SearchPolicy,
) -> Result<SearchResult, SearchError> {
    policy.validate()?;
    let policy_digest = policy.digest()?;

    let root_fp = StateKey::of(world, start).fingerprint();
    tracing::debug!(
        world_id = world.world_id(),
        root = %root_fp,
        max_expansions = ?policy.max_expansions,
        "search started"
    );

    let mut frontier = BestFirstFrontier::new();
    let mut closed = ClosedSet::new();
    let mut expansions: Vec<ExpandEvent> = Vec::new();
    let mut total_pops: u64 = 0;
    let mut total_expansions: u64 = 0;
    let mut total_duplicates_discarded: u64 = 0;

    frontier.push(start.clone(), Vec::new(), total_cost(world, start, &[]));

    let (outcome, termination_reason) = loop {
        let Some(node) = frontier.pop() else {
            break (SearchOutcome::Exhausted, TerminationReason::FrontierExhausted);
        };
        total_pops += 1;

        if world.is_goal(&node.config) {
            let reason = TerminationReason::GoalReached {
                creation_order: node.creation_order,
                path_len: node.path.len() as u64,
            };
            break (SearchOutcome::Found(node.path), reason);
        }

        let key = StateKey::of(world, &node.config);
        if closed.contains(&key) {
            total_duplicates_discarded += 1;
            continue;
        }

        if policy.max_expansions.is_some_and(|cap| total_expansions >= cap) {
            break (
                SearchOutcome::BudgetExceeded,
                TerminationReason::ExpansionBudgetExceeded,
            );
        }

        let fingerprint = policy
            .record_expansions
            .then(|| key.fingerprint().hex_digest().to_string());
        closed.insert(key);

        let successors = world.successors(&node.config)?;
        let successors_pushed = successors.len() as u64;
        for (next, action) in successors {
            let mut path = Vec::with_capacity(node.path.len() + 1);
            path.extend_from_slice(&node.path);
            path.push(action);
            let priority = total_cost(world, &next, &path);
            frontier.push(next, path, priority);
        }

        tracing::trace!(
            expansion = total_expansions,
            priority = %node.priority,
            path_len = node.path.len(),
            successors = successors_pushed,
            frontier = frontier.len(),
            "expanded"
        );

        if let Some(state_fingerprint) = fingerprint {
            expansions.push(ExpandEvent {
                expansion_order: total_expansions,
                creation_order: node.creation_order,
                priority: node.priority,
                state_fingerprint,
                path_len: node.path.len() as u64,
                successors_pushed,
            });
        }
        total_expansions += 1;
    };

    tracing::debug!(
        outcome = outcome.as_str(),
        plan_len = outcome.actions().len(),
        expansions = total_expansions,
        duplicates = total_duplicates_discarded,
        frontier_high_water = frontier.high_water(),
        "search finished"
    );

    let graph = SearchGraph {
        expansions,
        metadata: SearchGraphMetadata {
            world_id: world.world_id().to_string(),
            root_state_fingerprint: root_fp.hex_digest().to_string(),
            policy_digest: policy_digest.as_str().to_string(),
            total_pops,
            total_expansions,
            total_pushed: frontier.pushed(),
            total_duplicates_discarded,
            frontier_high_water: frontier.high_water(),
            termination_reason,
        },
    };

    Ok(SearchResult { outcome, graph })
}
