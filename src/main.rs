use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use battleships::ui::{describe_shot, parse_coord, parse_orientation, render_snapshot};
use battleships::{
    init_logging, AsyncResultLog, GameError, GameSession, JsonlResultLog, Orientation, Phase,
    ResultLog, SystemClock, AI_TURN_DELAY,
};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Where finished games are recorded (JSON lines).
    #[arg(long, global = true, default_value = "battleships-results.jsonl")]
    results: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long)]
        name: String,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Show finished games, newest first.
    History,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let store: Arc<dyn ResultLog> = Arc::new(JsonlResultLog::new(cli.results));

    match cli.command {
        Commands::Play { name, seed } => {
            let rng = match seed {
                Some(s) => SmallRng::seed_from_u64(s),
                None => SmallRng::from_rng(&mut rand::rng()),
            };
            let (log, writer) = AsyncResultLog::spawn(store);
            let session = GameSession::new_game(&name, rng, Arc::new(log), Arc::new(SystemClock))?;
            run_game(session).await?;
            // session (and with it the sender) is gone; let the backlog flush
            writer.await?;
        }
        Commands::History => {
            let results = store.list_all()?;
            if results.is_empty() {
                println!("No games recorded yet.");
            }
            for result in results {
                println!(
                    "{:>15}  {:<20} {}",
                    result.timestamp(),
                    result.player_name(),
                    result.outcome()
                );
            }
        }
    }
    Ok(())
}

fn prompt(phase: Phase) -> &'static str {
    match phase {
        Phase::Placing { .. } => "place (e.g. A1 h, q to quit)> ",
        Phase::Playing => "fire (e.g. C4, q to quit)> ",
        Phase::GameOver(_) => "r to play again, q to quit> ",
    }
}

async fn run_game(mut session: GameSession) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("{}", render_snapshot(&session.snapshot()));
        print!("{}", prompt(session.phase()));
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(());
        }
        if line.eq_ignore_ascii_case("r") {
            session.restart()?;
            continue;
        }

        match session.phase() {
            Phase::Placing { .. } => {
                let mut parts = line.split_whitespace();
                let coord = parts.next().and_then(parse_coord);
                let orientation = parts
                    .next()
                    .map_or(Some(Orientation::Horizontal), parse_orientation);
                match (coord, orientation) {
                    (Some(coord), Some(orientation)) => {
                        // the session message already explains a rejection
                        let _ = session.submit_placement(coord, orientation);
                    }
                    _ => println!("Invalid input"),
                }
            }
            Phase::Playing => {
                let Some(coord) = parse_coord(line) else {
                    println!("Invalid coordinate");
                    continue;
                };
                match session.submit_attack(coord) {
                    Ok(report) => {
                        println!("{}", describe_shot(&report.player_shot));
                        for shot in &report.ai_shots {
                            tokio::time::sleep(AI_TURN_DELAY).await;
                            println!("{}", describe_shot(shot));
                        }
                    }
                    Err(GameError::AlreadyAttacked) => println!("You already fired there."),
                    Err(e) => return Err(e.into()),
                }
            }
            Phase::GameOver(_) => println!("The game is over."),
        }
    }
}
