//! Forage Search: deterministic best-first planning over forage worlds.
//!
//! This crate depends only on `forage_kernel`. Concrete worlds live in
//! `forage_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! forage_kernel  ←  forage_search  ←  forage_harness
//! (grid, hashing)   (cost, frontier)   (maze world, bundles)
//! ```
//!
//! # Key types
//!
//! - [`ForageWorld`]: capability trait the engine consumes
//! - [`Priority`]: exact total cost used for frontier ordering
//! - [`StateKey`]: dedup identity (position + food grid)
//! - [`SearchOutcome`]: `Found(path)` / `Exhausted` / `BudgetExceeded`
//! - [`SearchGraph`]: canonical audit log of one search run
//! - [`PlanningAgent`]: cached-plan driver wrapper

#![forbid(unsafe_code)]

pub mod agent;
pub mod contract;
pub mod cost;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod policy;
pub mod search;


pub use agent::PlanningAgent;
pub use contract::{ForageWorld, WorldError};
pub use cost::Priority;
pub use error::SearchError;
pub use graph::SearchGraph;
pub use node::StateKey;
pub use policy::SearchPolicy;
pub use search::{plan_actions, search, SearchOutcome, SearchResult};
