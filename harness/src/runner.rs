//! Planning runner: search, replay, and package the run as a bundle.
//!
//! # Pipeline
//!
//! ```text
//! search() → replay_plan() → canonical JSON artifacts → build_bundle()
//! ```
//!
//! The runner implements no search or hashing logic of its own; it wires
//! `forage_search` and the kernel's canonical JSON together.

use forage_kernel::proof::canon::{canonical_json_bytes, CanonError};
use forage_search::contract::ForageWorld;
use forage_search::error::SearchError;
use forage_search::policy::SearchPolicy;
use forage_search::search::{search, SearchOutcome};

use crate::bundle::{build_bundle, BundleError, PlanBundle, PLAN, REPLAY_REPORT, SEARCH_GRAPH};
use crate::replay::{replay_plan, ReplayError, ReplayVerdict};

/// Failure of a planning run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Replay(#[from] ReplayError),
    #[error(transparent)]
    Canon(#[from] CanonError),
    #[error(transparent)]
    Bundle(#[from] BundleError),
    /// Search reported a plan that does not replay to a goal.
    #[error("found plan of {plan_len} actions replays as {verdict}")]
    PlanDiverged { plan_len: usize, verdict: String },
}

/// A completed planning run.
#[derive(Debug, Clone)]
pub struct PlanRun {
    pub outcome: SearchOutcome,
    pub replay: ReplayVerdict,
    pub bundle: PlanBundle,
}

/// Plan from `start` under `policy` and package the run.
///
/// Every outcome is replayed (an empty plan replays in zero steps), so the
/// replay report always records where the plan leaves the agent.
///
/// # Errors
///
/// Returns [`RunError::PlanDiverged`] if a found plan does not replay to
/// a goal; otherwise propagates search, replay, or serialization errors.
pub fn run_plan<W: ForageWorld>(
    world: &W,
    start: &W::Config,
    policy: &SearchPolicy,
) -> Result<PlanRun, RunError> {
    let result = search(start, world, policy)?;
    let replay = replay_plan(world, start, result.outcome.actions())?;

    if result.outcome.is_found() && !replay.is_goal() {
        return Err(RunError::PlanDiverged {
            plan_len: result.outcome.actions().len(),
            verdict: replay.as_str().to_string(),
        });
    }

    let graph_bytes = result.graph.to_canonical_json_bytes()?;
    let plan_bytes = canonical_json_bytes(&plan_json(
        &result.outcome,
        &result.graph.metadata.world_id,
        &result.graph.metadata.policy_digest,
    ))?;
    let replay_bytes = canonical_json_bytes(&serde_json::json!({
        "replay": replay.to_json_value(),
        "schema_version": "replay_report.v1",
    }))?;

    let bundle = build_bundle(vec![
        (SEARCH_GRAPH.to_string(), graph_bytes, true),
        (PLAN.to_string(), plan_bytes, true),
        (REPLAY_REPORT.to_string(), replay_bytes, true),
    ])?;

    tracing::info!(
        world_id = world.world_id(),
        outcome = result.outcome.as_str(),
        replay = replay.as_str(),
        bundle_digest = %bundle.digest,
        "planning run complete"
    );

    Ok(PlanRun {
        outcome: result.outcome,
        replay,
        bundle,
    })
}

fn plan_json(outcome: &SearchOutcome, world_id: &str, policy_digest: &str) -> serde_json::Value {
    let actions: Vec<&str> = outcome.actions().iter().map(|a| a.as_str()).collect();
    serde_json::json!({
        "actions": actions,
        "outcome": outcome.as_str(),
        "plan_len": actions.len(),
        "policy_digest": policy_digest,
        "schema_version": "plan.v1",
        "world_id": world_id,
    })
}
