use battleships::{
    AttackOutcome, Board, CellState, Coord, Direction, HuntTarget, Mode, Orientation, Ship,
    Targeting,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Mark the shot on the view and report it to the strategy.
fn feed(ai: &mut HuntTarget, view: &mut Board, coord: Coord, hit: bool, sunk: Option<Ship>) {
    let state = if hit { CellState::Hit } else { CellState::Miss };
    view.set(coord.row, coord.col, state).unwrap();
    let outcome = AttackOutcome {
        coord,
        was_hit: hit,
        newly_sunk: sunk,
        is_win: false,
    };
    ai.handle_attack_result(&outcome, view);
}

fn queue_of(ai: &HuntTarget) -> Vec<Coord> {
    ai.queue().iter().copied().collect()
}

#[test]
fn test_first_hit_queues_neighbours_in_fixed_order() {
    let mut ai = HuntTarget::new();
    let mut view = Board::new();
    assert_eq!(ai.mode(), Mode::Searching);

    feed(&mut ai, &mut view, Coord::new(4, 4), true, None);

    assert_eq!(
        queue_of(&ai),
        vec![
            Coord::new(3, 4),
            Coord::new(5, 4),
            Coord::new(4, 3),
            Coord::new(4, 5)
        ]
    );
    assert_eq!(ai.anchor(), Some(Coord::new(4, 4)));
    assert_eq!(ai.last_direction(), Some(Direction::Right));
    assert_eq!(ai.mode(), Mode::Tracking);
}

#[test]
fn test_neighbours_skip_edges_and_attacked_cells() {
    let mut ai = HuntTarget::new();
    let mut view = Board::new();
    view.set(1, 0, CellState::Miss).unwrap();

    feed(&mut ai, &mut view, Coord::new(0, 0), true, None);

    assert_eq!(queue_of(&ai), vec![Coord::new(0, 1)]);
    assert_eq!(ai.last_direction(), Some(Direction::Right));
}

#[test]
fn test_misses_are_ignored() {
    let mut ai = HuntTarget::new();
    let mut view = Board::new();
    feed(&mut ai, &mut view, Coord::new(2, 2), false, None);
    assert_eq!(ai.mode(), Mode::Searching);
    assert!(ai.queue().is_empty());
}

#[test]
fn test_queue_is_drained_before_anchor_line() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut ai = HuntTarget::new();
    let mut view = Board::new();

    feed(&mut ai, &mut view, Coord::new(4, 4), true, None);

    let up = ai.select_target(&mut rng, &view).unwrap();
    assert_eq!(up, Coord::new(3, 4));
    feed(&mut ai, &mut view, up, false, None);

    let down = ai.select_target(&mut rng, &view).unwrap();
    assert_eq!(down, Coord::new(5, 4));
    // a second hit refills the queue around itself
    feed(&mut ai, &mut view, down, true, None);
    assert_eq!(
        queue_of(&ai),
        vec![Coord::new(6, 4), Coord::new(5, 3), Coord::new(5, 5)]
    );
    assert_eq!(ai.anchor(), Some(Coord::new(4, 4)));

    for expected in [Coord::new(6, 4), Coord::new(5, 3), Coord::new(5, 5)] {
        let shot = ai.select_target(&mut rng, &view).unwrap();
        assert_eq!(shot, expected);
        feed(&mut ai, &mut view, shot, false, None);
    }
    assert!(ai.queue().is_empty());
    assert_eq!(ai.last_direction(), Some(Direction::Right));

    // queue empty: step off the anchor opposite to the last direction
    let left = ai.select_target(&mut rng, &view).unwrap();
    assert_eq!(left, Coord::new(4, 3));
    assert_eq!(ai.last_direction(), Some(Direction::Left));
    feed(&mut ai, &mut view, left, false, None);

    let right = ai.select_target(&mut rng, &view).unwrap();
    assert_eq!(right, Coord::new(4, 5));
    feed(&mut ai, &mut view, right, false, None);

    // both arms end in misses: tracking is abandoned and the shot is random
    let random = ai.select_target(&mut rng, &view).unwrap();
    assert_eq!(view.at(random).unwrap(), CellState::Empty);
    assert_eq!(ai.anchor(), None);
    assert_eq!(ai.last_direction(), None);
    assert_eq!(ai.mode(), Mode::Searching);
}

#[test]
fn test_attacked_anchor_step_abandons_tracking() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut ai = HuntTarget::new();
    let mut view = Board::new();
    // the only open neighbour of the anchor is to the right
    view.set(3, 4, CellState::Miss).unwrap();
    view.set(5, 4, CellState::Miss).unwrap();
    view.set(4, 3, CellState::Hit).unwrap();

    feed(&mut ai, &mut view, Coord::new(4, 4), true, None);
    assert_eq!(queue_of(&ai), vec![Coord::new(4, 5)]);
    assert_eq!(ai.last_direction(), Some(Direction::Right));

    let shot = ai.select_target(&mut rng, &view).unwrap();
    assert_eq!(shot, Coord::new(4, 5));
    feed(&mut ai, &mut view, shot, false, None);

    // one step left of the anchor is already hit: no walking past it
    let next = ai.select_target(&mut rng, &view).unwrap();
    assert_eq!(view.at(next).unwrap(), CellState::Empty);
    assert_eq!(ai.anchor(), None);
    assert_eq!(ai.last_direction(), None);
    assert_eq!(ai.mode(), Mode::Searching);
}

#[test]
fn test_anchor_step_off_board_abandons_tracking() {
    let mut rng = SmallRng::seed_from_u64(12);
    let mut ai = HuntTarget::new();
    let mut view = Board::new();
    view.set(1, 0, CellState::Miss).unwrap();

    // corner hit: only the right neighbour is queued
    feed(&mut ai, &mut view, Coord::new(0, 0), true, None);
    let shot = ai.select_target(&mut rng, &view).unwrap();
    assert_eq!(shot, Coord::new(0, 1));
    feed(&mut ai, &mut view, shot, false, None);

    // stepping left of (0,0) leaves the board
    let next = ai.select_target(&mut rng, &view).unwrap();
    assert_eq!(view.at(next).unwrap(), CellState::Empty);
    assert_eq!(ai.anchor(), None);
    assert_eq!(ai.mode(), Mode::Searching);
}

#[test]
fn test_sink_clears_tracking() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut ai = HuntTarget::new();
    let mut view = Board::new();
    let ship = Ship::new(2, Coord::new(4, 4), Orientation::Horizontal);

    feed(&mut ai, &mut view, Coord::new(4, 4), true, None);
    assert_eq!(ai.mode(), Mode::Tracking);
    feed(&mut ai, &mut view, Coord::new(4, 5), true, Some(ship));

    assert_eq!(ai.mode(), Mode::Searching);
    assert!(ai.queue().is_empty());
    assert_eq!(ai.anchor(), None);
    assert_eq!(ai.last_direction(), None);
    let next = ai.select_target(&mut rng, &view).unwrap();
    assert_eq!(view.at(next).unwrap(), CellState::Empty);
}

#[test]
fn test_search_never_repeats_and_ends_when_board_is_full() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut ai = HuntTarget::new();
    let mut view = Board::new();
    for _ in 0..100 {
        let shot = ai.select_target(&mut rng, &view).unwrap();
        assert_eq!(view.at(shot).unwrap(), CellState::Empty);
        feed(&mut ai, &mut view, shot, false, None);
    }
    assert_eq!(ai.select_target(&mut rng, &view), None);
}

#[test]
fn test_reset_forgets_state() {
    let mut ai = HuntTarget::new();
    let mut view = Board::new();
    feed(&mut ai, &mut view, Coord::new(7, 7), true, None);
    ai.reset();
    assert_eq!(ai.mode(), Mode::Searching);
    assert!(ai.queue().is_empty());
}
