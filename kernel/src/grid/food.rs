//! `FoodGrid`: the boolean matrix of cells that still hold food.
//!
//! Cells are stored column-major (`x * height + y`). Equality, ordering and
//! hashing are structural over `(width, height, cells)`, so two grids with
//! the same remaining food are interchangeable as dedup keys no matter how
//! they were produced.

use super::position::Position;
use super::GridError;

/// Remaining-food matrix of a forage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FoodGrid {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl FoodGrid {
    /// An empty (food-free) grid.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![false; len],
        }
    }

    /// Build a grid with food at each of `positions`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if any position lies outside the grid.
    pub fn with_food(
        width: u32,
        height: u32,
        positions: impl IntoIterator<Item = Position>,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height);
        for p in positions {
            grid.set(p, true)?;
        }
        Ok(grid)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check that this grid is exactly `width` x `height`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Dimensions`] on any mismatch.
    pub fn ensure_dimensions(&self, width: u32, height: u32) -> Result<(), GridError> {
        if self.width == width && self.height == height {
            return Ok(());
        }
        Err(GridError::Dimensions {
            detail: format!(
                "food grid {}x{} does not match {}x{}",
                self.width, self.height, width, height
            ),
        })
    }

    fn index(&self, p: Position) -> Option<usize> {
        (p.x < self.width && p.y < self.height)
            .then(|| p.x as usize * self.height as usize + p.y as usize)
    }

    /// Whether `p` holds food. Cells outside the grid never do.
    #[must_use]
    pub fn has_food(&self, p: Position) -> bool {
        self.index(p).is_some_and(|i| self.cells[i])
    }

    /// Set or clear the food flag at `p`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `p` lies outside the grid.
    pub fn set(&mut self, p: Position, food: bool) -> Result<(), GridError> {
        let i = self.index(p).ok_or(GridError::OutOfBounds {
            x: p.x,
            y: p.y,
            width: self.width,
            height: self.height,
        })?;
        self.cells[i] = food;
        Ok(())
    }

    /// Copy of this grid with the food at `p` eaten (no-op if there is none).
    #[must_use]
    pub fn without(&self, p: Position) -> Self {
        let mut next = self.clone();
        if let Some(i) = next.index(p) {
            next.cells[i] = false;
        }
        next
    }

    /// Number of cells holding food.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    #[must_use]
    pub fn is_clear(&self) -> bool {
        !self.cells.iter().any(|&c| c)
    }

    /// Food cells in column-major order.
    pub fn food_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let height = self.height.max(1);
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(move |(i, _)| {
                // Grid dimensions are u32, so both quotient and remainder fit.
                #[allow(clippy::cast_possible_truncation)]
                let (x, y) = ((i / height as usize) as u32, (i % height as usize) as u32);
                Position::new(x, y)
            })
    }

    /// Canonical encoding: `width || height || packed cells` (LSB-first bits).
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(8 + self.cells.len().div_ceil(8));
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        for chunk in self.cells.chunks(8) {
            let byte = chunk
                .iter()
                .enumerate()
                .fold(0u8, |acc, (bit, &c)| acc | (u8::from(c) << bit));
            out.push(byte);
        }
        out
    }
}
