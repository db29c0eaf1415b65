//! Search policy types.

use forage_kernel::proof::canon::canonical_json_bytes;
use forage_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::error::SearchError;

/// Search budget and audit configuration.
///
/// The default is unbounded: the search runs until it reaches a goal or
/// empties the frontier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Stop after this many key expansions. `None` means no limit.
    pub max_expansions: Option<u64>,
    /// Record one event per expansion in the audit graph. Counters are
    /// always kept.
    pub record_expansions: bool,
}

impl SearchPolicy {
    /// Policy with an expansion budget and default auditing.
    #[must_use]
    pub fn with_budget(max_expansions: u64) -> Self {
        Self {
            max_expansions: Some(max_expansions),
            ..Self::default()
        }
    }

    /// Reject settings that would stop the search before it starts.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for a zero expansion budget.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1 when set".into(),
            });
        }
        Ok(())
    }

    /// Canonical JSON form.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "max_expansions": self.max_expansions,
            "record_expansions": self.record_expansions,
        })
    }

    /// Content hash of the canonical JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Serialization`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, SearchError> {
        let bytes = canonical_json_bytes(&self.to_json_value()).map_err(|e| {
            SearchError::Serialization {
                detail: e.to_string(),
            }
        })?;
        Ok(canonical_hash(HashDomain::SearchPolicy, &bytes))
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: None,
            record_expansions: true,
        }
    }
}
