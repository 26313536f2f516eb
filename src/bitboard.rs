//! Square bit masks over the board, packed row-major into one unsigned word.
//!
//! Ships turn into occupancy masks and placement checks grow those masks by
//! one cell in every direction ([`BitBoard::halo`]) to enforce the no-touch
//! rule.

use core::fmt;
use core::ops::{BitAnd, BitOr, Not};

use num_traits::{PrimInt, Unsigned};

use crate::common::Coord;

/// Index outside the `N×N` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "bit ({}, {}) outside the grid", row, col)
            }
        }
    }
}

/// Set of cells on an `N×N` grid. Bit `row * N + col` is the cell
/// `(row, col)`; bits past `N * N` are always zero.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T: PrimInt + Unsigned, const N: usize> {
    bits: T,
}

impl<T: PrimInt + Unsigned, const N: usize> BitBoard<T, N> {
    pub fn new() -> Self {
        Self { bits: T::zero() }
    }

    fn bit(row: usize, col: usize) -> Result<T, BitBoardError> {
        if row >= N || col >= N {
            return Err(BitBoardError::IndexOutOfBounds { row, col });
        }
        Ok(T::one() << (row * N + col))
    }

    /// Every cell of the grid.
    fn full() -> T {
        let used = N * N;
        if used >= T::zero().count_zeros() as usize {
            !T::zero()
        } else {
            (T::one() << used) - T::one()
        }
    }

    /// One bit per row in column `col`.
    fn column(col: usize) -> T {
        (0..N).fold(T::zero(), |acc, row| acc | (T::one() << (row * N + col)))
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    pub fn contains(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        Ok(!(self.bits & Self::bit(row, col)?).is_zero())
    }

    pub fn insert(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.bits = self.bits | Self::bit(row, col)?;
        Ok(())
    }

    /// Mask holding exactly `cells`. Fails on the first cell off the grid.
    pub fn from_cells<I>(cells: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut board = Self::new();
        for cell in cells {
            board.insert(cell.row, cell.col)?;
        }
        Ok(board)
    }

    /// The mask grown by one cell in all eight directions, clipped to the
    /// grid.
    pub fn halo(&self) -> Self {
        let first = Self::column(0);
        let last = Self::column(N - 1);
        // shifting across a row boundary would wrap into the next row
        let wide = self.bits | ((self.bits & !last) << 1) | ((self.bits & !first) >> 1);
        let tall = wide | (wide << N) | (wide >> N);
        Self {
            bits: tall & Self::full(),
        }
    }

    /// Set cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..N * N)
            .filter(move |&i| !((self.bits >> i) & T::one()).is_zero())
            .map(|i| Coord::new(i / N, i % N))
    }
}

impl<T: PrimInt + Unsigned, const N: usize> Default for BitBoard<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimInt + Unsigned, const N: usize> fmt::Debug for BitBoard<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            for col in 0..N {
                let set = !((self.bits >> (row * N + col)) & T::one()).is_zero();
                f.write_str(if set { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: PrimInt + Unsigned, const N: usize> BitAnd for BitBoard<T, N> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T: PrimInt + Unsigned, const N: usize> BitOr for BitBoard<T, N> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

/// Complement within the grid.
impl<T: PrimInt + Unsigned, const N: usize> Not for BitBoard<T, N> {
    type Output = Self;

    fn not(self) -> Self {
        Self {
            bits: !self.bits & Self::full(),
        }
    }
}
