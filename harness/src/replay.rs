//! Plan replay: re-apply a planned action sequence through a world.
//!
//! Replay shares no state with the search that produced the plan. At each
//! step it asks the world for successors and follows the one produced by
//! the planned action, so a plan that relied on a move the world does not
//! offer is caught at the step where it diverges.

use forage_kernel::grid::Direction;
use forage_search::contract::{ForageWorld, WorldError};

/// What replaying a plan established.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayVerdict {
    /// Every action applied and the final configuration has no food.
    GoalReached { steps: u64 },
    /// Every action applied but food remains.
    EndedOffGoal { steps: u64, remaining_food: u64 },
    /// `action` at index `step` is not among the world's successors.
    IllegalAction { step: u64, action: Direction },
}

impl ReplayVerdict {
    #[must_use]
    pub fn is_goal(&self) -> bool {
        matches!(self, Self::GoalReached { .. })
    }

    /// Stable snake-case tag used in artifacts.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::EndedOffGoal { .. } => "ended_off_goal",
            Self::IllegalAction { .. } => "illegal_action",
        }
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::GoalReached { steps } => serde_json::json!({
                "steps": steps,
                "verdict": self.as_str(),
            }),
            Self::EndedOffGoal {
                steps,
                remaining_food,
            } => serde_json::json!({
                "remaining_food": remaining_food,
                "steps": steps,
                "verdict": self.as_str(),
            }),
            Self::IllegalAction { step, action } => serde_json::json!({
                "action": action.as_str(),
                "step": step,
                "verdict": self.as_str(),
            }),
        }
    }
}

/// Replay failure that is not a verdict about the plan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error("world failed during replay: {0}")]
    World(#[from] WorldError),
}

/// Apply `actions` from `start` and report where the plan ends up.
///
/// # Errors
///
/// Returns [`ReplayError::World`] if the world rejects a configuration.
pub fn replay_plan<W: ForageWorld>(
    world: &W,
    start: &W::Config,
    actions: &[Direction],
) -> Result<ReplayVerdict, ReplayError> {
    let mut current = start.clone();
    for (step, &action) in actions.iter().enumerate() {
        let next = world
            .successors(&current)?
            .into_iter()
            .find_map(|(config, produced)| (produced == action).then_some(config));
        match next {
            Some(config) => current = config,
            None => {
                tracing::debug!(step, action = action.as_str(), "replay hit illegal action");
                return Ok(ReplayVerdict::IllegalAction {
                    step: step as u64,
                    action,
                });
            }
        }
    }

    let steps = actions.len() as u64;
    if world.is_goal(&current) {
        Ok(ReplayVerdict::GoalReached { steps })
    } else {
        Ok(ReplayVerdict::EndedOffGoal {
            steps,
            remaining_food: world.food_grid(&current).count() as u64,
        })
    }
}
