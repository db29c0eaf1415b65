//! `SearchGraph`: expansion-event audit log of one search run.
//!
//! The normative decision surface is the ordered list of [`ExpandEvent`]
//! entries: which key was expanded, when, at what priority, and how many
//! successors it pushed. Metadata carries aggregate counters and the
//! termination reason.

use forage_kernel::proof::canon::{canonical_json_bytes, CanonError};
use forage_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::cost::Priority;

/// The complete search audit trail.
#[derive(Debug, Clone)]
pub struct SearchGraph {
    /// Ordered expansion events (empty when the policy disables recording).
    pub expansions: Vec<ExpandEvent>,
    pub metadata: SearchGraphMetadata,
}

/// A single frontier pop that led to an expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEvent {
    /// Total order of expansions.
    pub expansion_order: u64,
    /// Push stamp of the expanded node.
    pub creation_order: u64,
    /// Priority the node was popped at.
    pub priority: Priority,
    /// Hex fingerprint of the expanded state key.
    pub state_fingerprint: String,
    /// Length of the path that reached the node.
    pub path_len: u64,
    /// Successors pushed by this expansion.
    pub successors_pushed: u64,
}

/// Aggregate metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGraphMetadata {
    pub world_id: String,
    pub root_state_fingerprint: String,
    pub policy_digest: String,

    // Counters
    pub total_pops: u64,
    pub total_expansions: u64,
    pub total_pushed: u64,
    pub total_duplicates_discarded: u64,
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReason,
}

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A popped node satisfied the goal predicate.
    GoalReached { creation_order: u64, path_len: u64 },
    /// The frontier emptied without reaching a goal.
    FrontierExhausted,
    /// `max_expansions` was reached.
    ExpansionBudgetExceeded,
}

impl TerminationReason {
    /// Stable snake-case tag used in artifacts and logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

// ---------------------------------------------------------------------------
// Canonical JSON serialization
// ---------------------------------------------------------------------------

impl SearchGraph {
    /// Serialize the graph to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchGraph, &bytes))
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
        })
    }
}

fn priority_to_json(p: Priority) -> serde_json::Value {
    serde_json::json!({"denom": p.denom(), "numer": p.numer()})
}

fn expand_event_to_json(e: &ExpandEvent) -> serde_json::Value {
    serde_json::json!({
        "creation_order": e.creation_order,
        "expansion_order": e.expansion_order,
        "path_len": e.path_len,
        "priority": priority_to_json(e.priority),
        "state_fingerprint": e.state_fingerprint,
        "successors_pushed": e.successors_pushed,
    })
}

fn metadata_to_json(m: &SearchGraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "frontier_high_water": m.frontier_high_water,
        "policy_digest": m.policy_digest,
        "root_state_fingerprint": m.root_state_fingerprint,
        "termination_reason": termination_reason_to_json(&m.termination_reason),
        "total_duplicates_discarded": m.total_duplicates_discarded,
        "total_expansions": m.total_expansions,
        "total_pops": m.total_pops,
        "total_pushed": m.total_pushed,
        "world_id": m.world_id,
    })
}

fn termination_reason_to_json(r: &TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::GoalReached {
            creation_order,
            path_len,
        } => serde_json::json!({
            "creation_order": creation_order,
            "path_len": path_len,
            "type": r.as_str(),
        }),
        TerminationReason::FrontierExhausted | TerminationReason::ExpansionBudgetExceeded => {
            serde_json::json!({"type": r.as_str()})
        }
    }
}
