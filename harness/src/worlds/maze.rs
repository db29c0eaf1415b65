//! `MazeWorld`: a walled grid parsed from an ASCII layout.
//!
//! Layout characters:
//!
//! | char | cell        |
//! |------|-------------|
//! | `%`  | wall        |
//! | `.`  | food        |
//! | `P`  | agent start |
//! | ` `  | empty floor |
//!
//! The last text row is `y = 0`; `y` grows towards the top of the text.
//! Successors are generated North, South, East, West (walls and the grid
//! edge are skipped). Stepping onto food eats it.

use forage_kernel::grid::{Direction, FoodGrid, Position};
use forage_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use forage_search::contract::{ForageWorld, WorldError};

/// Layout parse failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout has no rows")]
    Empty,
    #[error("row {row} has width {width}, expected {expected}")]
    RaggedRow {
        row: usize,
        width: usize,
        expected: usize,
    },
    #[error("unknown layout character {ch:?} at row {row}, column {column}")]
    UnknownCell { ch: char, row: usize, column: usize },
    #[error("layout has no agent start `P`")]
    MissingAgent,
    #[error("layout has {count} agent starts, expected exactly one")]
    MultipleAgents { count: usize },
    #[error("layout dimension {len} exceeds u32")]
    TooLarge { len: usize },
}

/// A maze configuration: where the agent stands and what food is left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    pub position: Position,
    pub food: FoodGrid,
}

/// Static maze: walls plus the starting configuration.
#[derive(Debug, Clone)]
pub struct MazeWorld {
    id: String,
    width: u32,
    height: u32,
    /// Column-major, `x * height + y`.
    walls: Vec<bool>,
    start: MazeConfig,
    layout_digest: ContentHash,
}

impl MazeWorld {
    /// Parse `layout` into a maze named `id`.
    ///
    /// Leading and trailing empty lines are ignored; every remaining row must
    /// have the same width. A row of spaces is floor, not blank.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] for empty or ragged layouts, unknown
    /// characters, or a missing or repeated agent start.
    pub fn parse(id: &str, layout: &str) -> Result<Self, LayoutError> {
        let lines: Vec<&str> = layout.lines().collect();
        let first_row = lines.iter().position(|l| !l.is_empty());
        let last_row = lines.iter().rposition(|l| !l.is_empty());
        let rows: Vec<Vec<char>> = match (first_row, last_row) {
            (Some(first), Some(last)) => lines[first..=last]
                .iter()
                .map(|l| l.chars().collect::<Vec<char>>())
                .collect(),
            _ => Vec::new(),
        };

        let first = rows.first().ok_or(LayoutError::Empty)?;
        let expected = first.len();
        if expected == 0 {
            return Err(LayoutError::Empty);
        }
        let width = u32::try_from(expected).map_err(|_| LayoutError::TooLarge { len: expected })?;
        let height =
            u32::try_from(rows.len()).map_err(|_| LayoutError::TooLarge { len: rows.len() })?;

        let mut walls = vec![false; expected * rows.len()];
        let mut food = FoodGrid::new(width, height);
        let mut agents = Vec::new();

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(LayoutError::RaggedRow {
                    row,
                    width: cells.len(),
                    expected,
                });
            }
            // Row indices are bounded by `height`, columns by `width`.
            #[allow(clippy::cast_possible_truncation)]
            let y = height - 1 - row as u32;
            for (column, &ch) in cells.iter().enumerate() {
                #[allow(clippy::cast_possible_truncation)]
                let p = Position::new(column as u32, y);
                match ch {
                    '%' => walls[column * rows.len() + y as usize] = true,
                    '.' => food.set(p, true).map_err(|_| LayoutError::TooLarge {
                        len: column.max(row),
                    })?,
                    'P' => agents.push(p),
                    ' ' => {}
                    _ => return Err(LayoutError::UnknownCell { ch, row, column }),
                }
            }
        }

        let position = match agents.as_slice() {
            [] => return Err(LayoutError::MissingAgent),
            [p] => *p,
            many => return Err(LayoutError::MultipleAgents { count: many.len() }),
        };

        Ok(Self {
            id: id.to_string(),
            width,
            height,
            walls,
            start: MazeConfig { position, food },
            layout_digest: canonical_hash(HashDomain::MazeLayout, layout.as_bytes()),
        })
    }

    #[must_use]
    pub fn start(&self) -> &MazeConfig {
        &self.start
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Content hash of the layout text this maze was parsed from.
    #[must_use]
    pub fn layout_digest(&self) -> &ContentHash {
        &self.layout_digest
    }

    /// Whether `p` is a wall. Cells off the grid count as walls.
    #[must_use]
    pub fn is_wall(&self, p: Position) -> bool {
        if p.x >= self.width || p.y >= self.height {
            return true;
        }
        self.walls[p.x as usize * self.height as usize + p.y as usize]
    }

    /// Draw `config` back as layout text.
    #[must_use]
    pub fn render(&self, config: &MazeConfig) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let p = Position::new(x, y);
                let ch = if p == config.position {
                    'P'
                } else if self.is_wall(p) {
                    '%'
                } else if config.food.has_food(p) {
                    '.'
                } else {
                    ' '
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }

    fn check(&self, config: &MazeConfig) -> Result<(), WorldError> {
        config
            .food
            .ensure_dimensions(self.width, self.height)
            .map_err(|e| WorldError::MalformedConfiguration {
                detail: e.to_string(),
            })?;
        if self.is_wall(config.position) {
            return Err(WorldError::MalformedConfiguration {
                detail: format!("agent at {} stands in a wall", config.position),
            });
        }
        Ok(())
    }
}

impl ForageWorld for MazeWorld {
    type Config = MazeConfig;

    fn world_id(&self) -> &str {
        &self.id
    }

    fn position(&self, config: &MazeConfig) -> Position {
        config.position
    }

    fn food_grid<'c>(&self, config: &'c MazeConfig) -> &'c FoodGrid {
        &config.food
    }

    fn is_goal(&self, config: &MazeConfig) -> bool {
        config.food.is_clear()
    }

    fn successors(
        &self,
        config: &MazeConfig,
    ) -> Result<Vec<(MazeConfig, Direction)>, WorldError> {
        self.check(config)?;
        let mut out = Vec::with_capacity(Direction::MOVES.len());
        for direction in Direction::MOVES {
            let Some(next) = config.position.step(direction) else {
                continue;
            };
            if self.is_wall(next) {
                continue;
            }
            out.push((
                MazeConfig {
                    position: next,
                    food: config.food.without(next),
                },
                direction,
            ));
        }
        Ok(out)
    }
}
