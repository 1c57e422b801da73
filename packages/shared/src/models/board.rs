use serde::{Deserialize, Serialize};

use crate::models::game::PlayerSymbol;

pub const BOARD_SIZE: usize = 9;

/// A single cell on the 3x3 grid. Serializes as "" / "X" / "O" so the
/// stored and wire shapes match the board the browser client renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[serde(rename = "")]
    Empty,
    X,
    O,
}

impl From<PlayerSymbol> for Cell {
    fn from(symbol: PlayerSymbol) -> Self {
        match symbol {
            PlayerSymbol::X => Cell::X,
            PlayerSymbol::O => Cell::O,
        }
    }
}

/// The 9-cell board, index 0-8 in row-major order:
///
/// ```text
/// 0 | 1 | 2
/// 3 | 4 | 5
/// 6 | 7 | 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board([Cell; BOARD_SIZE]);

impl Board {
    pub fn empty() -> Self {
        Board([Cell::Empty; BOARD_SIZE])
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.0
    }

    pub fn cell(&self, position: usize) -> Option<Cell> {
        self.0.get(position).copied()
    }

    /// True iff `position` is on the board and the cell there is empty.
    pub fn is_valid_position(&self, position: usize) -> bool {
        matches!(self.0.get(position), Some(Cell::Empty))
    }

    /// Returns a new board with `symbol` placed at `position`. The receiver
    /// is not modified; callers must not rely on aliasing. Out-of-range
    /// positions return the board unchanged (callers validate first).
    pub fn with_move(&self, position: usize, symbol: PlayerSymbol) -> Board {
        let mut cells = self.0;
        if let Some(cell) = cells.get_mut(position) {
            *cell = Cell::from(symbol);
        }
        Board(cells)
    }

    /// Indices of empty cells, ascending.
    pub fn available_positions(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(position, _)| position)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(|cell| *cell != Cell::Empty)
    }
}

#[cfg(test)]
impl Board {
    /// Build a board from 9 cell strings, for tests.
    pub fn from_strs(cells: [&str; BOARD_SIZE]) -> Self {
        let parsed = cells.map(|cell| match cell {
            "" => Cell::Empty,
            "X" => Cell::X,
            "O" => Cell::O,
            other => panic!("invalid cell: {:?}", other),
        });
        Board(parsed)
    }
}
