//! Best-first frontier and the closed (visited) set.
//!
//! The frontier is not a set: the same state may sit in it several times
//! under different paths. Only the first pop of a key is expanded; the
//! closed set records which keys that has already happened to.
//!
//! The closed set is a `BTreeSet` (not `HashSet`) so that iteration at
//! serialization boundaries is deterministic.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use forage_kernel::grid::Direction;

use crate::cost::Priority;
use crate::node::{FrontierKey, SearchNode, StateKey};

/// A frontier entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest priority, then oldest push, first).
#[derive(Debug)]
struct FrontierEntry<C> {
    key: Reverse<FrontierKey>,
    node: SearchNode<C>,
}

impl<C> PartialEq for FrontierEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<C> Eq for FrontierEntry<C> {}

impl<C> PartialOrd for FrontierEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<C> Ord for FrontierEntry<C> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Stable min-priority queue of search nodes.
///
/// Every push is stamped with a monotonically increasing `creation_order`,
/// which makes the pop order a total order: equal priorities come out
/// first-in-first-out.
pub struct BestFirstFrontier<C> {
    heap: BinaryHeap<FrontierEntry<C>>,
    next_creation_order: u64,
    high_water: u64,
}

impl<C> BestFirstFrontier<C> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_creation_order: 0,
            high_water: 0,
        }
    }

    /// Push `(config, path)` at `priority`. Returns the assigned creation order.
    pub fn push(&mut self, config: C, path: Vec<Direction>, priority: Priority) -> u64 {
        let creation_order = self.next_creation_order;
        self.next_creation_order += 1;
        let node = SearchNode {
            config,
            path,
            priority,
            creation_order,
        };
        self.heap.push(FrontierEntry {
            key: Reverse(node.key()),
            node,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        creation_order
    }

    /// Pop the best (lowest priority, oldest) node.
    #[must_use]
    pub fn pop(&mut self) -> Option<SearchNode<C>> {
        self.heap.pop().map(|e| e.node)
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total pushes so far.
    #[must_use]
    pub fn pushed(&self) -> u64 {
        self.next_creation_order
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl<C> Default for BestFirstFrontier<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Keys already expanded in the current search. Grows monotonically.
#[derive(Debug, Default)]
pub struct ClosedSet {
    keys: BTreeSet<StateKey>,
}

impl ClosedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` expanded. Returns `false` if it already was.
    pub fn insert(&mut self, key: StateKey) -> bool {
        self.keys.insert(key)
    }

    #[must_use]
    pub fn contains(&self, key: &StateKey) -> bool {
        self.keys.contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
