//! Cell grid for one side of the game.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{Coord, GameError};
use crate::config::BOARD_SIZE;

pub type BB = BitBoard<u128, BOARD_SIZE>;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    ShipPresent,
    Hit,
    Miss,
}

impl CellState {
    /// `Hit` or `Miss`.
    pub fn is_attacked(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

/// A 10×10 grid of [`CellState`]. Used both for a side's own board and for
/// an attacker's view of the opponent, which never holds `ShipPresent`.
#[derive(Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a board with every cell `Empty`.
    pub fn new() -> Self {
        Board {
            cells: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<CellState, GameError> {
        check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<(), GameError> {
        check_bounds(row, col)?;
        self.cells[row][col] = state;
        Ok(())
    }

    /// Convenience lookup by [`Coord`].
    pub fn at(&self, coord: Coord) -> Result<CellState, GameError> {
        self.get(coord.row, coord.col)
    }

    pub fn count_cells_with_state(&self, state: CellState) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == state)
            .count()
    }

    /// Bit mask of the cells currently in `state`.
    pub fn mask_of(&self, state: CellState) -> BB {
        let mut mask = BB::new();
        for coord in self.coords_with_state(state) {
            // coordinates come from the grid itself
            let _ = mask.insert(coord.row, coord.col);
        }
        mask
    }

    /// Coordinates of every cell in `state`, row-major.
    pub fn coords_with_state(&self, state: CellState) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().enumerate().flat_map(move |(r, row)| {
            row.iter()
                .enumerate()
                .filter(move |(_, &cell)| cell == state)
                .map(move |(c, _)| Coord::new(r, c))
        })
    }

    /// Reset every cell to `Empty`.
    pub fn clear(&mut self) {
        self.cells = [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState; BOARD_SIZE]> {
        self.cells.iter()
    }
}

fn check_bounds(row: usize, col: usize) -> Result<(), GameError> {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return Err(GameError::OutOfBounds { row, col });
    }
    Ok(())
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in &self.cells {
            write!(f, "  ")?;
            for cell in row {
                let ch = match cell {
                    CellState::Empty => '.',
                    CellState::ShipPresent => 'S',
                    CellState::Hit => 'X',
                    CellState::Miss => 'o',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
