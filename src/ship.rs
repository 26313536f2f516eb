//! Ship definitions: fleet slots and immutable placed ships.

use core::fmt;

use crate::board::{Board, CellState, BB};
use crate::common::{Coord, GameError};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A fleet slot: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub const fn length(&self) -> usize {
        self.length
    }

    /// A ship of this type anchored at `anchor`.
    pub fn at(&self, anchor: Coord, orientation: Orientation) -> Ship {
        Ship::new(self.length, anchor, orientation)
    }
}

/// A ship placement: size, anchor and orientation. The anchor is the
/// top-most (vertical) or left-most (horizontal) cell.
///
/// Ships are plain values; nothing mutates a ship after it is built.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    size: usize,
    anchor: Coord,
    orientation: Orientation,
}

impl Ship {
    pub const fn new(size: usize, anchor: Coord, orientation: Orientation) -> Self {
        Self {
            size,
            anchor,
            orientation,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied cells, starting at the anchor. Cells may lie off the board
    /// for a ship that does not fit.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = self.anchor;
        let orientation = self.orientation;
        (0..self.size).map(move |i| match orientation {
            Orientation::Horizontal => Coord::new(row, col + i),
            Orientation::Vertical => Coord::new(row + i, col),
        })
    }

    /// Whether every occupied cell is on the board.
    pub fn fits(&self) -> bool {
        self.cells().all(Coord::in_bounds)
    }

    /// Occupancy mask. Fails with `OutOfBounds` when the ship does not fit.
    pub fn mask(&self) -> Result<BB, GameError> {
        Ok(BB::from_cells(self.cells())?)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// All occupied cells are `Hit` on `board`.
    pub fn is_sunk_on(&self, board: &Board) -> bool {
        self.cells()
            .all(|c| board.at(c) == Ok(CellState::Hit))
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ size: {}, anchor: ({}, {}), orientation: {:?} }}",
            self.size, self.anchor.row, self.anchor.col, self.orientation,
        )
    }
}

/// Sum of ship sizes in `fleet`.
pub fn total_cells(fleet: &[Ship]) -> usize {
    fleet.iter().map(Ship::size).sum()
}
