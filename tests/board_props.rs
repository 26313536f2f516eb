use battleships::{
    place_fleet_randomly, resolve, Board, CellState, Coord, GameError, SunkSet, BOARD_SIZE, FLEET,
    TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_fleet_never_touches(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        let fleet = place_fleet_randomly(&mut rng, &FLEET, &mut board).unwrap();
        prop_assert_eq!(board.count_cells_with_state(CellState::ShipPresent), TOTAL_SHIP_CELLS);

        for (i, a) in fleet.iter().enumerate() {
            prop_assert!(a.fits());
            for b in &fleet[i + 1..] {
                for ca in a.cells() {
                    for cb in b.cells() {
                        let dr = ca.row.abs_diff(cb.row);
                        let dc = ca.col.abs_diff(cb.col);
                        prop_assert!(dr > 1 || dc > 1, "{:?} touches {:?}", a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn attack_idempotent(seed in any::<u64>(), row in 0..BOARD_SIZE, col in 0..BOARD_SIZE) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        let fleet = place_fleet_randomly(&mut rng, &FLEET, &mut board).unwrap();
        let mut view = Board::new();
        let mut sunk = SunkSet::new();

        // some earlier shots, ignoring repeats
        let earlier = rng.random_range(0..BOARD_SIZE * BOARD_SIZE / 2);
        for _ in 0..earlier {
            let c = Coord::new(rng.random_range(0..BOARD_SIZE), rng.random_range(0..BOARD_SIZE));
            if c != Coord::new(row, col) {
                let _ = resolve(c, &mut board, &mut view, &fleet, &mut sunk);
            }
        }

        let first = resolve(Coord::new(row, col), &mut board, &mut view, &fleet, &mut sunk).unwrap();
        let (board_after, view_after, sunk_after) = (board.clone(), view.clone(), sunk.clone());
        prop_assert_eq!(first.was_hit, board.get(row, col).unwrap() == CellState::Hit);

        let err = resolve(Coord::new(row, col), &mut board, &mut view, &fleet, &mut sunk).unwrap_err();
        prop_assert_eq!(err, GameError::AlreadyAttacked);
        prop_assert_eq!(board, board_after);
        prop_assert_eq!(view, view_after);
        prop_assert_eq!(sunk, sunk_after);
    }
}
