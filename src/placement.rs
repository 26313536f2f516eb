//! Ship placement rules: in bounds, no overlap, no touching (diagonals
//! included).

use log::{debug, warn};
use rand::Rng;

use crate::board::{Board, CellState};
use crate::common::{Coord, GameError};
use crate::config::{BOARD_SIZE, MAX_FLEET_ATTEMPTS, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship, ShipType};

/// Returns `true` when `ship` fits on `board` and neither its cells nor the
/// cells around them hold anything. Never mutates the board.
pub fn can_place(ship: &Ship, board: &Board) -> bool {
    let Ok(mask) = ship.mask() else {
        return false;
    };
    let taken = !board.mask_of(CellState::Empty);
    (mask.halo() & taken).is_empty()
}

/// Mark `ship` on `board` as `ShipPresent`.
pub fn place(ship: &Ship, board: &mut Board) -> Result<(), GameError> {
    if !can_place(ship, board) {
        return Err(GameError::InvalidPlacement);
    }
    for cell in ship.cells() {
        board.set(cell.row, cell.col, CellState::ShipPresent)?;
    }
    Ok(())
}

/// Returns a random legal placement of `ship_type` on `board`.
pub fn random_placement<R: Rng + ?Sized>(
    rng: &mut R,
    ship_type: ShipType,
    board: &Board,
) -> Result<Ship, GameError> {
    let len = ship_type.length();
    if len == 0 || len > BOARD_SIZE {
        return Err(GameError::UnableToPlaceShip);
    }
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let orient = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let max_r = if orient == Orientation::Vertical {
            BOARD_SIZE - len
        } else {
            BOARD_SIZE - 1
        };
        let max_c = if orient == Orientation::Horizontal {
            BOARD_SIZE - len
        } else {
            BOARD_SIZE - 1
        };
        let anchor = Coord::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
        let ship = ship_type.at(anchor, orient);
        if can_place(&ship, board) {
            return Ok(ship);
        }
    }
    Err(GameError::UnableToPlaceShip)
}

/// Place every ship type in order at random. A dead end clears the board and
/// starts the fleet over.
pub fn place_fleet_randomly<R: Rng + ?Sized>(
    rng: &mut R,
    types: &[ShipType],
    board: &mut Board,
) -> Result<Vec<Ship>, GameError> {
    'fleet: for attempt in 1..=MAX_FLEET_ATTEMPTS {
        board.clear();
        let mut fleet = Vec::with_capacity(types.len());
        for &ship_type in types {
            match random_placement(rng, ship_type, board) {
                Ok(ship) => {
                    place(&ship, board)?;
                    fleet.push(ship);
                }
                Err(GameError::UnableToPlaceShip) => {
                    debug!(
                        "fleet placement attempt {} stuck on {}; retrying",
                        attempt,
                        ship_type.name()
                    );
                    continue 'fleet;
                }
                Err(e) => return Err(e),
            }
        }
        return Ok(fleet);
    }
    board.clear();
    warn!("gave up placing fleet after {} attempts", MAX_FLEET_ATTEMPTS);
    Err(GameError::UnableToPlaceShip)
}
