//! Search nodes, dedup keys and the frontier ordering key.

use forage_kernel::grid::{Direction, FoodGrid, Position};
use forage_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::contract::ForageWorld;
use crate::cost::Priority;

/// Deduplication identity of a configuration: agent position + remaining food.
///
/// Two configurations reached by different paths but with the same position
/// and food pattern are the same search state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey {
    pub position: Position,
    pub food: FoodGrid,
}

impl StateKey {
    /// Derive the key of `config` through the world's queries.
    #[must_use]
    pub fn of<W: ForageWorld>(world: &W, config: &W::Config) -> Self {
        Self {
            position: world.position(config),
            food: world.food_grid(config).clone(),
        }
    }

    /// Canonical encoding: `position || food.identity_bytes()`.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let food = self.food.identity_bytes();
        let mut out = Vec::with_capacity(8 + food.len());
        out.extend_from_slice(&self.position.to_le_bytes());
        out.extend_from_slice(&food);
        out
    }

    /// Content hash used to name this state in audit artifacts.
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        canonical_hash(HashDomain::StateKey, &self.identity_bytes())
    }
}

/// A configuration on the frontier together with the path that reached it.
///
/// Each node owns its own path. Successors copy the parent path and append
/// one action, so sibling nodes never alias.
#[derive(Debug, Clone)]
pub struct SearchNode<C> {
    pub config: C,
    pub path: Vec<Direction>,
    /// Total cost computed once at push time.
    pub priority: Priority,
    /// Global push counter for first-in-first-out tie-breaking.
    pub creation_order: u64,
}

impl<C> SearchNode<C> {
    #[must_use]
    pub fn key(&self) -> FrontierKey {
        FrontierKey {
            priority: self.priority,
            creation_order: self.creation_order,
        }
    }
}

/// The frontier ordering key: `(priority, creation_order)`.
///
/// Lower priority first; among equal priorities the node pushed first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub priority: Priority,
    pub creation_order: u64,
}
