use core::time::Duration;

use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments in the classic fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&FLEET);

/// Random anchors tried for a single ship before giving up on it.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 200;

/// Full-fleet restarts before random placement reports failure.
pub const MAX_FLEET_ATTEMPTS: usize = 50;

/// Pause the presentation inserts before surfacing the AI's shots.
pub const AI_TURN_DELAY: Duration = Duration::from_millis(500);

const fn fleet_cells(fleet: &[ShipType]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i].length();
        i += 1;
    }
    total
}
