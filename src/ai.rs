//! Hunt/target shot selection for the computer opponent.
//!
//! The AI only ever looks at its own view of the player's board, so it sees
//! hits and misses but never ship positions.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::attack::AttackOutcome;
use crate::board::{Board, CellState};
use crate::common::{Coord, Direction};

/// Interface implemented by anything that picks shots for the AI side.
pub trait Targeting {
    /// Choose the next cell to attack on `view`. `None` means every cell has
    /// already been attacked.
    fn select_target(&mut self, rng: &mut SmallRng, view: &Board) -> Option<Coord>;

    /// Inform the strategy of the outcome of its last shot. `view` already
    /// carries the new mark.
    fn handle_attack_result(&mut self, _outcome: &AttackOutcome, _view: &Board) {}

    /// Forget everything learned during the current game.
    fn reset(&mut self) {}
}

/// Whether the hunt/target AI is still looking for a ship or working one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Searching,
    Tracking,
}

/// Random search until a hit, then probe the neighbours of that hit, then
/// step off the first hit opposite to the last probe direction.
#[derive(Debug, Clone, Default)]
pub struct HuntTarget {
    queue: VecDeque<Coord>,
    anchor: Option<Coord>,
    last_direction: Option<Direction>,
}

impl HuntTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        if self.anchor.is_some() || !self.queue.is_empty() {
            Mode::Tracking
        } else {
            Mode::Searching
        }
    }

    /// Cells waiting to be probed, front first.
    pub fn queue(&self) -> &VecDeque<Coord> {
        &self.queue
    }

    /// First hit of the ship currently being tracked.
    pub fn anchor(&self) -> Option<Coord> {
        self.anchor
    }

    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    fn clear(&mut self) {
        self.queue.clear();
        self.anchor = None;
        self.last_direction = None;
    }

    /// Uniform pick among the cells not yet attacked.
    fn search(rng: &mut SmallRng, view: &Board) -> Option<Coord> {
        let open: Vec<Coord> = view.coords_with_state(CellState::Empty).collect();
        if open.is_empty() {
            return None;
        }
        Some(open[rng.random_range(0..open.len())])
    }

    /// The cell one step from `from` in `dir`, if it is still unattacked.
    /// `None` when that step leaves the board or lands on a hit or miss.
    fn step_from_anchor(from: Coord, dir: Direction, view: &Board) -> Option<Coord> {
        let next = from.step(dir)?;
        (view.at(next) == Ok(CellState::Empty)).then_some(next)
    }
}

impl Targeting for HuntTarget {
    fn select_target(&mut self, rng: &mut SmallRng, view: &Board) -> Option<Coord> {
        while let Some(coord) = self.queue.pop_front() {
            if view.at(coord) == Ok(CellState::Empty) {
                return Some(coord);
            }
        }
        if let (Some(anchor), Some(dir)) = (self.anchor, self.last_direction) {
            let back = dir.opposite();
            if let Some(coord) = Self::step_from_anchor(anchor, back, view) {
                self.last_direction = Some(back);
                return Some(coord);
            }
        }
        // anchor step blocked: drop back to searching for this shot
        self.anchor = None;
        self.last_direction = None;
        Self::search(rng, view)
    }

    fn handle_attack_result(&mut self, outcome: &AttackOutcome, view: &Board) {
        if !outcome.was_hit {
            return;
        }
        // any sink ends tracking, even with other hits still queued
        if outcome.newly_sunk.is_some() {
            self.clear();
            return;
        }
        let hit = outcome.coord;
        if self.anchor.is_none() {
            self.anchor = Some(hit);
        }
        // probe around the newest hit
        self.queue.clear();
        for dir in Direction::ALL {
            let Some(next) = hit.step(dir) else {
                continue;
            };
            if view.at(next) == Ok(CellState::Empty) {
                self.queue.push_back(next);
                self.last_direction = Some(dir);
            }
        }
    }

    fn reset(&mut self) {
        self.clear();
    }
}
