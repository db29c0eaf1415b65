//! Grid vocabulary: positions, moves and the remaining-food matrix.
//!
//! These are plain value types. Worlds own configurations built from them;
//! the search engine only reads them.

pub mod direction;
pub mod food;
pub mod position;

pub use direction::Direction;
pub use food::FoodGrid;
pub use position::Position;

/// Failure constructing or mutating a grid value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A cell coordinate lies outside the grid.
    #[error("cell ({x}, {y}) outside {width}x{height} grid")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    /// Grid dimensions differ from the ones the caller expects.
    #[error("malformed grid dimensions: {detail}")]
    Dimensions { detail: String },
}
