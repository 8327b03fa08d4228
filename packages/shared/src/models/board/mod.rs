pub mod messages;

use std::fmt;
use std::str::FromStr;

/// Number of cells on a 3x3 board.
pub const BOARD_SIZE: usize = 9;

/// A single square of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    X,
    O,
    Empty,
}

impl Cell {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' => Some(Cell::X),
            'O' => Some(Cell::O),
            '-' => Some(Cell::Empty),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Cell::X => 'X',
            Cell::O => 'O',
            Cell::Empty => '-',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    InvalidLength(usize),
    InvalidCell { index: usize, found: char },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidLength(len) => write!(
                f,
                "Invalid board: expected {} cells, got {}",
                BOARD_SIZE, len
            ),
            BoardError::InvalidCell { index, found } => write!(
                f,
                "Invalid board: unexpected '{}' at position {}",
                found, index
            ),
        }
    }
}

impl std::error::Error for BoardError {}

/// Tic-tac-toe board in row-major order.
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
/// Only constructed from a valid encoding, so every `Board` holds exactly
/// nine cells drawn from `X`, `O` and `-`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Indices of the cells still marked `-`.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Returns a copy of the board with `index` set to `cell`.
    pub fn with_cell(&self, index: usize, cell: Cell) -> Board {
        let mut cells = self.cells;
        cells[index] = cell;
        Board { cells }
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != BOARD_SIZE {
            return Err(BoardError::InvalidLength(len));
        }

        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (index, found) in s.chars().enumerate() {
            cells[index] =
                Cell::from_char(found).ok_or(BoardError::InvalidCell { index, found })?;
        }

        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.as_char())?;
        }
        Ok(())
    }
}
