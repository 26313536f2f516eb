//! Common types for the engine: coordinates, directions and errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::config::BOARD_SIZE;
use crate::game::Phase;

/// A cell position on the board, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the coordinate lies on the board.
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// The neighbouring cell in `dir`, or `None` when it would leave the board.
    pub fn step(self, dir: Direction) -> Option<Coord> {
        let next = match dir {
            Direction::Up => Coord::new(self.row.checked_sub(1)?, self.col),
            Direction::Down => Coord::new(self.row + 1, self.col),
            Direction::Left => Coord::new(self.row, self.col.checked_sub(1)?),
            Direction::Right => Coord::new(self.row, self.col + 1),
        };
        next.in_bounds().then_some(next)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orthogonal direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Probe order used when a new hit is found.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Errors returned by board and session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate outside the board. Indicates a caller bug.
    OutOfBounds { row: usize, col: usize },
    /// Ship is out of bounds, overlaps or touches another ship.
    InvalidPlacement,
    /// The cell was already attacked.
    AlreadyAttacked,
    /// Random placement gave up.
    UnableToPlaceShip,
    /// Operation not allowed in the current phase.
    WrongPhase(Phase),
    /// A game needs a non-blank player name.
    EmptyName,
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => GameError::OutOfBounds { row, col },
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is off the board", row, col)
            }
            GameError::InvalidPlacement => write!(f, "Cannot place ship there"),
            GameError::AlreadyAttacked => write!(f, "Cell was already attacked"),
            GameError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            GameError::WrongPhase(phase) => write!(f, "Not allowed while {}", phase),
            GameError::EmptyName => write!(f, "Player name must not be empty"),
        }
    }
}

impl std::error::Error for GameError {}
