//! Typed search errors.
//!
//! Running out of frontier is not an error: it is reported as
//! [`crate::search::SearchOutcome::Exhausted`]. `SearchError` covers
//! pre-flight policy rejection and world failures propagated out of the loop.

use crate::contract::WorldError;

/// Failure that stops a search call without an outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The policy was rejected before any step ran.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
    /// The world failed while answering a query.
    #[error(transparent)]
    World(#[from] WorldError),
    /// The audit graph could not be serialized.
    #[error("audit graph serialization failed: {detail}")]
    Serialization { detail: String },
}
