use std::sync::Arc;

use battleships::{
    place_fleet_randomly, Board, GameSession, HuntTarget, MemoryResultLog, Phase, ResultLog,
    SystemClock, Targeting, FLEET,
};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Plays one complete game with the player side driven by a second
/// hunt/target AI and prints a JSON summary.
fn main() -> anyhow::Result<()> {
    battleships::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));

    let log = Arc::new(MemoryResultLog::new());
    let mut session = GameSession::new_game(
        "sim",
        SmallRng::seed_from_u64(seed),
        log.clone(),
        Arc::new(SystemClock),
    )?;

    let mut layout = Board::new();
    for ship in place_fleet_randomly(&mut rng, &FLEET, &mut layout)? {
        session.submit_placement(ship.anchor(), ship.orientation())?;
    }

    let mut player = HuntTarget::new();
    let mut player_shots = 0usize;
    let mut ai_shots = 0usize;
    while session.phase() == Phase::Playing {
        let Some(coord) = player.select_target(&mut rng, session.enemy_view()) else {
            break;
        };
        let report = session.submit_attack(coord)?;
        player.handle_attack_result(&report.player_shot.outcome, session.enemy_view());
        player_shots += 1;
        ai_shots += report.ai_shots.len();
    }

    let winner = match session.phase() {
        Phase::GameOver(outcome) => Some(outcome.to_string()),
        Phase::Placing { .. } | Phase::Playing => None,
    };
    let result = json!({
        "seed": seed,
        "player_shots": player_shots,
        "ai_shots": ai_shots,
        "outcome": winner,
        "results_recorded": log.list_all()?.len(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
