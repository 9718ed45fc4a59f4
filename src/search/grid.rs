//! The grid a search runs over. A [`Grid`] is a rectangular array of
//! [`CellKind`]s and is never mutated once built; editing a board means
//! building a new grid.

use crate::parsers::{error_location, parse_grid_rows};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{self, Display};
use std::path::Path;
use strum::IntoEnumIterator;
use strum_macros::{EnumIs, EnumIter};
use thiserror::Error;

/// The kind of a single grid cell. The serialised form is the one-character
/// code used by grid files and the JSON protocol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumIs,
    strum_macros::Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
pub enum CellKind {
    #[serde(rename = "C")]
    Start,
    #[serde(rename = "S")]
    Goal,
    #[serde(rename = "_")]
    Empty,
    #[serde(rename = "A")]
    Difficult,
    #[serde(rename = "B")]
    Barrier,
    #[serde(rename = "F")]
    PowerUp,
}

impl CellKind {
    pub const fn symbol(self) -> char {
        match self {
            CellKind::Start => 'C',
            CellKind::Goal => 'S',
            CellKind::Empty => '_',
            CellKind::Difficult => 'A',
            CellKind::Barrier => 'B',
            CellKind::PowerUp => 'F',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::iter().find(|kind| kind.symbol() == symbol)
    }

    /// Cost of moving into a cell of this kind. Barriers are charged like
    /// ordinary cells when a power-up carries the path across them.
    pub const fn move_cost(self) -> u32 {
        match self {
            CellKind::Difficult => 2,
            _ => 1,
        }
    }
}

/// A `(row, col)` coordinate. Serialised as a two-element array.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Position> for (usize, usize) {
    fn from(position: Position) -> Self {
        (position.row, position.col)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Neighbour directions, in the order expansion visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,
    #[error("row {row} has {found} cells but row 0 has {expected}")]
    NotRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell {position} lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },
    #[error("grid has no {0} cell")]
    NotFound(CellKind),
    #[error("grid has {count} {kind} cells, expected exactly one")]
    NotUnique { kind: CellKind, count: usize },
    #[error("unrecognised grid text at line {line}, column {column}")]
    Parse { line: usize, column: usize },
    #[error("malformed JSON grid: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read grid file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<CellKind>>", into = "Vec<Vec<CellKind>>")]
pub struct Grid {
    /// Row-major cells.
    cells: Vec<CellKind>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Builds a grid from its rows. Fails if there are no cells or the rows
    /// differ in length. Start/goal uniqueness is not checked here, see
    /// [`Grid::validate`].
    pub fn new(rows: Vec<Vec<CellKind>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(GridError::Empty);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(GridError::NotRectangular {
                row,
                expected: cols,
                found,
            });
        }
        let num_rows = rows.len();
        Ok(Self {
            cells: rows.into_iter().flatten().collect(),
            rows: num_rows,
            cols,
        })
    }

    pub fn from_text(text: &str) -> Result<Self, GridError> {
        let (_, rows) = parse_grid_rows(text).map_err(|e| {
            let (line, column) = error_location(text, &e);
            GridError::Parse { line, column }
        })?;
        Self::new(rows)
    }

    pub fn from_json(text: &str) -> Result<Self, GridError> {
        let rows: Vec<Vec<CellKind>> = serde_json::from_str(text)?;
        Self::new(rows)
    }

    /// Reads a grid file. Files with a `.json` extension hold a JSON array of
    /// rows, anything else is read as grid text.
    pub fn from_path(path: &Path) -> Result<Self, GridError> {
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&text),
            _ => Self::from_text(&text),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.cols
    }

    pub fn get(&self, position: Position) -> Option<CellKind> {
        self.contains(position)
            .then(|| self.cells[position.row * self.cols + position.col])
    }

    pub fn cell_at(&self, position: Position) -> Result<CellKind, GridError> {
        self.get(position).ok_or(GridError::OutOfBounds {
            position,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellKind)> + '_ {
        self.cells.iter().enumerate().map(|(index, &kind)| {
            (Position::new(index / self.cols, index % self.cols), kind)
        })
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&cell| cell == kind).count()
    }

    /// The first cell of the given kind in row-major order. Callers that need
    /// the cell to be unique should go through [`Grid::validate`] first.
    pub fn find_unique(&self, kind: CellKind) -> Result<Position, GridError> {
        self.iter()
            .find(|&(_, cell)| cell == kind)
            .map(|(position, _)| position)
            .ok_or(GridError::NotFound(kind))
    }

    /// Checks that there is exactly one start and one goal, returning their
    /// positions.
    pub fn validate(&self) -> Result<(Position, Position), GridError> {
        for kind in [CellKind::Start, CellKind::Goal] {
            match self.count(kind) {
                0 => return Err(GridError::NotFound(kind)),
                1 => {}
                count => return Err(GridError::NotUnique { kind, count }),
            }
        }
        Ok((
            self.find_unique(CellKind::Start)?,
            self.find_unique(CellKind::Goal)?,
        ))
    }

    /// The in-bounds neighbours of `position` in up, down, left, right order.
    pub fn neighbours(
        &self,
        position: Position,
    ) -> impl Iterator<Item = (Direction, Position, CellKind)> + '_ {
        Direction::iter().filter_map(move |direction| {
            let (dr, dc) = direction.offset();
            let row = position.row.checked_add_signed(dr)?;
            let col = position.col.checked_add_signed(dc)?;
            let neighbour = Position::new(row, col);
            self.get(neighbour)
                .map(|kind| (direction, neighbour, kind))
        })
    }

    /// The grid as text with every `Empty` or `Difficult` cell on `path`
    /// drawn as `*`. Start, goal and power-up cells keep their symbols.
    pub fn render_path(&self, path: &[Position]) -> String {
        let on_path: HashSet<Position> = path.iter().copied().collect();
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| {
                        let position = Position::new(row, col);
                        let kind = self.cells[row * self.cols + col];
                        match kind {
                            CellKind::Empty | CellKind::Difficult
                                if on_path.contains(&position) =>
                            {
                                '*'
                            }
                            _ => kind.symbol(),
                        }
                    })
                    .collect::<String>()
            })
            .join("\n")
    }

    pub fn to_rows(&self) -> Vec<Vec<CellKind>> {
        self.cells
            .chunks(self.cols)
            .map(<[CellKind]>::to_vec)
            .collect()
    }
}

impl TryFrom<Vec<Vec<CellKind>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<CellKind>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<Grid> for Vec<Vec<CellKind>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|kind| kind.symbol()).collect::<String>())
            .join("\n");
        write!(f, "{}", text)
    }
}
