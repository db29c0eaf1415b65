//! Forage world contract trait.

use forage_kernel::grid::{Direction, FoodGrid, Position};

/// Failure reported by a world while answering a query.
///
/// The engine never inspects or recovers from these; they terminate the
/// search call and reach the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// The configuration cannot be expanded (degenerate grid, agent inside
    /// a wall, and the like).
    #[error("malformed configuration: {detail}")]
    MalformedConfiguration { detail: String },
}

/// Capability interface of the grid engine the planner searches over.
///
/// Configurations are owned by the world; the engine only clones them into
/// search nodes and hands them back through these four queries.
///
/// # Contract
///
/// - `successors` must be deterministic: same configuration → same
///   `(configuration, action)` pairs in the same order.
/// - `is_goal` must agree with `food_grid(..).is_clear()`.
pub trait ForageWorld {
    /// A full snapshot of the puzzle state.
    type Config: Clone;

    /// Stable world identifier recorded in audit metadata.
    fn world_id(&self) -> &str;

    /// Agent position in `config`.
    fn position(&self, config: &Self::Config) -> Position;

    /// Remaining food in `config`.
    fn food_grid<'c>(&self, config: &'c Self::Config) -> &'c FoodGrid;

    /// Whether `config` has no food left.
    fn is_goal(&self, config: &Self::Config) -> bool;

    /// Legal `(next configuration, action)` pairs from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::MalformedConfiguration`] if `config` cannot be
    /// expanded.
    fn successors(
        &self,
        config: &Self::Config,
    ) -> Result<Vec<(Self::Config, Direction)>, WorldError>;
}

impl<W: ForageWorld + ?Sized> ForageWorld for &W {
    type Config = W::Config;

    fn world_id(&self) -> &str {
        (**self).world_id()
    }

    fn position(&self, config: &Self::Config) -> Position {
        (**self).position(config)
    }

    fn food_grid<'c>(&self, config: &'c Self::Config) -> &'c FoodGrid {
        (**self).food_grid(config)
    }

    fn is_goal(&self, config: &Self::Config) -> bool {
        (**self).is_goal(config)
    }

    fn successors(
        &self,
        config: &Self::Config,
    ) -> Result<Vec<(Self::Config, Direction)>, WorldError> {
        (**self).successors(config)
    }
}
