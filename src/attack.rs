//! Attack resolution: marks the target, detects sinks and wins.

use std::collections::HashSet;

use log::debug;

use crate::board::{Board, CellState};
use crate::common::{Coord, GameError};
use crate::ship::{total_cells, Ship};

/// Result of a resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    pub coord: Coord,
    pub was_hit: bool,
    /// Ship sunk by this attack, if any. Reported once per ship.
    pub newly_sunk: Option<Ship>,
    pub is_win: bool,
}

/// Ships of one side already reported sunk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SunkSet {
    ships: HashSet<Ship>,
}

impl SunkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, ship: &Ship) -> bool {
        self.ships.contains(ship)
    }

    /// Returns `false` if the ship was already recorded.
    pub fn insert(&mut self, ship: Ship) -> bool {
        self.ships.insert(ship)
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn clear(&mut self) {
        self.ships.clear();
    }
}

/// Fire at `coord`. `target` is the defender's own board, `view` is the
/// attacker's picture of it and `fleet` the defender's placed ships.
///
/// A cell already `Hit` or `Miss` on `view` is rejected with
/// `AlreadyAttacked` and nothing changes.
pub fn resolve(
    coord: Coord,
    target: &mut Board,
    view: &mut Board,
    fleet: &[Ship],
    sunk: &mut SunkSet,
) -> Result<AttackOutcome, GameError> {
    if view.at(coord)?.is_attacked() {
        return Err(GameError::AlreadyAttacked);
    }
    let was_hit = target.at(coord)? == CellState::ShipPresent;
    let mark = if was_hit {
        CellState::Hit
    } else {
        CellState::Miss
    };
    target.set(coord.row, coord.col, mark)?;
    view.set(coord.row, coord.col, mark)?;

    let newly_sunk = if was_hit {
        fleet
            .iter()
            .copied()
            .find(|ship| !sunk.contains(ship) && ship.is_sunk_on(target))
    } else {
        None
    };
    if let Some(ship) = newly_sunk {
        sunk.insert(ship);
    }

    let is_win = view.count_cells_with_state(CellState::Hit) == total_cells(fleet);
    debug!(
        "attack at {}: hit={} sunk={:?} win={}",
        coord, was_hit, newly_sunk, is_win
    );
    Ok(AttackOutcome {
        coord,
        was_hit,
        newly_sunk,
        is_win,
    })
}
