//! Finished-game records and the port they are written through.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use core::fmt;

/// How a game ended, from the human player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Win,
    Loss,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Loss => write!(f, "loss"),
        }
    }
}

/// One completed game. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameResult {
    player_name: String,
    outcome: Outcome,
    /// Milliseconds since the Unix epoch.
    timestamp: u64,
}

impl GameResult {
    pub fn new(player_name: impl Into<String>, outcome: Outcome, timestamp: u64) -> Self {
        Self {
            player_name: player_name.into(),
            outcome,
            timestamp,
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

/// Append-only history of finished games.
///
/// Appends are fire-and-forget from the engine's point of view: a failed
/// append is logged and otherwise ignored.
pub trait ResultLog: Send + Sync {
    fn append(&self, result: GameResult) -> anyhow::Result<()>;

    /// All results, newest first.
    fn list_all(&self) -> anyhow::Result<Vec<GameResult>>;
}

/// Orders results in insertion order into newest-first order. Equal
/// timestamps keep the later append first.
pub fn newest_first(mut results: Vec<GameResult>) -> Vec<GameResult> {
    results.reverse();
    results.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    results
}

/// Result log kept in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryResultLog {
    results: Mutex<Vec<GameResult>>,
}

impl MemoryResultLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultLog for MemoryResultLog {
    fn append(&self, result: GameResult) -> anyhow::Result<()> {
        self.results
            .lock()
            .map_err(|_| anyhow::anyhow!("result log lock poisoned"))?
            .push(result);
        Ok(())
    }

    fn list_all(&self) -> anyhow::Result<Vec<GameResult>> {
        let results = self
            .results
            .lock()
            .map_err(|_| anyhow::anyhow!("result log lock poisoned"))?
            .clone();
        Ok(newest_first(results))
    }
}

/// Source of result timestamps.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
