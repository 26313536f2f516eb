//! Turn orchestration: placement, the player's shots, the AI's replies and
//! the end of the game.

use core::fmt;
use std::sync::Arc;

use log::{debug, info, warn};
use rand::rngs::SmallRng;

use crate::ai::{HuntTarget, Targeting};
use crate::attack::{self, AttackOutcome, SunkSet};
use crate::board::Board;
use crate::common::{Coord, GameError};
use crate::config::{FLEET, NUM_SHIPS};
use crate::placement;
use crate::result::{Clock, GameResult, Outcome, ResultLog};
use crate::ship::{Orientation, Ship};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// The player is placing `FLEET[ship_index]`.
    Placing { ship_index: usize },
    Playing,
    GameOver(Outcome),
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Placing { ship_index } => write!(f, "placing ship {}", ship_index + 1),
            Phase::Playing => write!(f, "playing"),
            Phase::GameOver(outcome) => write!(f, "game over ({})", outcome),
        }
    }
}

/// Which side fired a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attacker {
    Player,
    Ai,
}

/// One resolved shot and the message it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shot {
    pub attacker: Attacker,
    pub outcome: AttackOutcome,
    pub message: String,
}

/// Everything that happened in response to one player attack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub player_shot: Shot,
    /// AI shots that followed, in order. Empty when the player hit or won.
    pub ai_shots: Vec<Shot>,
    pub phase: Phase,
}

/// Which fleet slot the player is placing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementProgress {
    pub ship_index: usize,
    pub ship_name: String,
    pub ship_size: usize,
}

/// Read-only picture of the session for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub phase: Phase,
    pub player_name: String,
    pub message: String,
    /// The player's own board, ships included.
    pub player_board: Board,
    /// The player's view of the AI board: hits and misses only.
    pub enemy_view: Board,
    pub placement: Option<PlacementProgress>,
    /// Finished games, newest first.
    pub history: Vec<GameResult>,
}

/// One side's board, fleet and knowledge of the opponent.
#[derive(Debug, Default)]
struct Side {
    board: Board,
    fleet: Vec<Ship>,
    sunk: SunkSet,
    /// This side's view of the opponent's board.
    view: Board,
}

impl Side {
    fn reset(&mut self) {
        self.board.clear();
        self.fleet.clear();
        self.sunk.clear();
        self.view.clear();
    }
}

/// A single-player game against the computer.
pub struct GameSession<A: Targeting = HuntTarget> {
    phase: Phase,
    player_name: String,
    message: String,
    player: Side,
    ai: Side,
    targeting: A,
    rng: SmallRng,
    results: Arc<dyn ResultLog>,
    clock: Arc<dyn Clock>,
}

impl GameSession<HuntTarget> {
    /// Start a game against the hunt/target AI.
    pub fn new_game(
        name: &str,
        rng: SmallRng,
        results: Arc<dyn ResultLog>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, GameError> {
        Self::start_game(name, HuntTarget::new(), rng, results, clock)
    }
}

impl<A: Targeting> GameSession<A> {
    /// Start a game: empty boards, AI fleet placed, player placing the first
    /// ship.
    pub fn start_game(
        name: &str,
        targeting: A,
        rng: SmallRng,
        results: Arc<dyn ResultLog>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, GameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }
        let mut session = Self {
            phase: Phase::Placing { ship_index: 0 },
            player_name: name.to_string(),
            message: String::new(),
            player: Side::default(),
            ai: Side::default(),
            targeting,
            rng,
            results,
            clock,
        };
        session.reset()?;
        info!("game started for {}", session.player_name);
        Ok(session)
    }

    /// Throw the current game away and start over with the same player.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.reset()?;
        info!("game restarted for {}", self.player_name);
        Ok(())
    }

    fn reset(&mut self) -> Result<(), GameError> {
        self.player.reset();
        self.ai.reset();
        self.targeting.reset();
        self.ai.fleet = placement::place_fleet_randomly(&mut self.rng, &FLEET, &mut self.ai.board)?;
        self.phase = Phase::Placing { ship_index: 0 };
        self.message = format!("Welcome, {}! Place your ships.", self.player_name);
        Ok(())
    }

    /// Place the next ship of the player's fleet with its anchor at `coord`.
    pub fn submit_placement(
        &mut self,
        coord: Coord,
        orientation: Orientation,
    ) -> Result<Ship, GameError> {
        let Phase::Placing { ship_index } = self.phase else {
            return Err(GameError::WrongPhase(self.phase));
        };
        let ship_type = FLEET[ship_index];
        let ship = ship_type.at(coord, orientation);
        if let Err(e) = placement::place(&ship, &mut self.player.board) {
            self.message = "Cannot place ship there. Try again.".to_string();
            return Err(e);
        }
        self.player.fleet.push(ship);
        debug!("{} placed: {:?}", ship_type.name(), ship);

        let next = ship_index + 1;
        if next == NUM_SHIPS {
            self.phase = Phase::Playing;
            self.message = format!("{}, attack the enemy board!", self.player_name);
            info!("all ships placed, battle begins");
        } else {
            self.phase = Phase::Placing { ship_index: next };
            self.message = format!(
                "{} placed. Place your {} (size {}).",
                ship_type.name(),
                FLEET[next].name(),
                FLEET[next].length()
            );
        }
        Ok(ship)
    }

    /// Fire at the AI board. A hit lets the player go again; a miss hands
    /// the turn to the AI, which keeps firing until it misses or wins.
    pub fn submit_attack(&mut self, coord: Coord) -> Result<TurnReport, GameError> {
        if self.phase != Phase::Playing {
            return Err(GameError::WrongPhase(self.phase));
        }
        let outcome = attack::resolve(
            coord,
            &mut self.ai.board,
            &mut self.player.view,
            &self.ai.fleet,
            &mut self.ai.sunk,
        )?;
        let player_shot = self.record_shot(Attacker::Player, outcome);

        let mut ai_shots = Vec::new();
        if !outcome.is_win && !outcome.was_hit {
            self.run_ai_turn(&mut ai_shots);
        }
        Ok(TurnReport {
            player_shot,
            ai_shots,
            phase: self.phase,
        })
    }

    /// AI shots until a miss or a win. A pick the board rejects ends the AI
    /// turn; it never surfaces as an error of the player's attack.
    fn run_ai_turn(&mut self, shots: &mut Vec<Shot>) {
        loop {
            let Some(coord) = self.targeting.select_target(&mut self.rng, &self.ai.view) else {
                warn!("AI has no cell left to attack");
                self.message = "Your turn.".to_string();
                return;
            };
            let outcome = match attack::resolve(
                coord,
                &mut self.player.board,
                &mut self.ai.view,
                &self.player.fleet,
                &mut self.player.sunk,
            ) {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!("AI picked an invalid target {}: {}", coord, e);
                    self.message = "Your turn.".to_string();
                    return;
                }
            };
            self.targeting.handle_attack_result(&outcome, &self.ai.view);
            shots.push(self.record_shot(Attacker::Ai, outcome));
            if outcome.is_win || !outcome.was_hit {
                return;
            }
        }
    }

    fn record_shot(&mut self, attacker: Attacker, outcome: AttackOutcome) -> Shot {
        let message = if outcome.is_win {
            let (outcome, text) = match attacker {
                Attacker::Player => (Outcome::Win, "you win!"),
                Attacker::Ai => (Outcome::Loss, "you lose!"),
            };
            self.finish(outcome);
            format!("{}, {}", self.player_name, text)
        } else {
            shot_message(attacker, &outcome)
        };
        self.message.clone_from(&message);
        Shot {
            attacker,
            outcome,
            message,
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.phase = Phase::GameOver(outcome);
        let result = GameResult::new(self.player_name.clone(), outcome, self.clock.now_millis());
        info!("game over for {}: {}", self.player_name, outcome);
        if let Err(e) = self.results.append(result) {
            warn!("failed to record game result: {:#}", e);
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Latest user-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn player_board(&self) -> &Board {
        &self.player.board
    }

    /// The player's view of the AI board.
    pub fn enemy_view(&self) -> &Board {
        &self.player.view
    }

    /// Ships the player has placed so far.
    pub fn player_fleet(&self) -> &[Ship] {
        &self.player.fleet
    }

    pub fn targeting(&self) -> &A {
        &self.targeting
    }

    pub fn placement_progress(&self) -> Option<PlacementProgress> {
        match self.phase {
            Phase::Placing { ship_index } => {
                let ship_type = FLEET[ship_index];
                Some(PlacementProgress {
                    ship_index,
                    ship_name: ship_type.name().to_string(),
                    ship_size: ship_type.length(),
                })
            }
            Phase::Playing | Phase::GameOver(_) => None,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let history = self.results.list_all().unwrap_or_else(|e| {
            warn!("failed to read game history: {:#}", e);
            Vec::new()
        });
        Snapshot {
            phase: self.phase,
            player_name: self.player_name.clone(),
            message: self.message.clone(),
            player_board: self.player.board.clone(),
            enemy_view: self.player.view.clone(),
            placement: self.placement_progress(),
            history,
        }
    }
}

fn shot_message(attacker: Attacker, outcome: &AttackOutcome) -> String {
    let mut message = String::new();
    message.push_str(match (attacker, outcome.was_hit) {
        (Attacker::Player, true) => "Hit! ",
        (Attacker::Player, false) => "Miss. ",
        (Attacker::Ai, true) => "AI hit your ship! ",
        (Attacker::Ai, false) => "AI missed. ",
    });
    if outcome.newly_sunk.is_some() {
        message.push_str("Sunk! ");
    }
    message.push_str(match (attacker, outcome.was_hit) {
        (Attacker::Player, true) => "Go again.",
        (Attacker::Player, false) => "AI's turn.",
        (Attacker::Ai, true) => "AI's turn again.",
        (Attacker::Ai, false) => "Your turn.",
    });
    message
}
