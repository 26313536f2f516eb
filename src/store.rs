#![cfg(feature = "persist")]

//! Durable result logs.
//!
//! [`JsonlResultLog`] keeps one JSON object per line in a plain file.
//! [`AsyncResultLog`] puts a tokio task in front of any blocking log so that
//! recording a result never holds up the game.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::Context;
use log::{debug, warn};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::result::{newest_first, GameResult, ResultLog};

/// Result log stored as JSON lines at `path`.
#[derive(Debug)]
pub struct JsonlResultLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonlResultLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultLog for JsonlResultLog {
    fn append(&self, result: GameResult) -> anyhow::Result<()> {
        let mut line = serde_json::to_string(&result)?;
        line.push('\n');
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| anyhow::anyhow!("result log lock poisoned"))?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening {}", self.path.display()))?;
        file.write_all(line.as_bytes())
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }

    fn list_all(&self) -> anyhow::Result<Vec<GameResult>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };
        let mut results = Vec::new();
        for (n, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<GameResult>(line) {
                Ok(result) => results.push(result),
                Err(e) => warn!("{}:{}: skipping unreadable result: {}", self.path.display(), n + 1, e),
            }
        }
        Ok(newest_first(results))
    }
}

/// Forwards appends to a background task that writes them through `inner`.
///
/// Must be created inside a tokio runtime. Dropping every handle closes the
/// channel; the writer task finishes once the backlog is written.
pub struct AsyncResultLog {
    tx: mpsc::UnboundedSender<GameResult>,
    inner: Arc<dyn ResultLog>,
}

impl AsyncResultLog {
    pub fn spawn(inner: Arc<dyn ResultLog>) -> (Self, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::unbounded_channel::<GameResult>();
        let store = inner.clone();
        let handle = tokio::spawn(async move {
            while let Some(result) = rx.recv().await {
                let store = store.clone();
                match tokio::task::spawn_blocking(move || store.append(result)).await {
                    Ok(Ok(())) => debug!("game result written"),
                    Ok(Err(e)) => warn!("failed to write game result: {:#}", e),
                    Err(e) => warn!("result writer task failed: {}", e),
                }
            }
        });
        (Self { tx, inner }, handle)
    }
}

impl ResultLog for AsyncResultLog {
    fn append(&self, result: GameResult) -> anyhow::Result<()> {
        self.tx
            .send(result)
            .map_err(|_| anyhow::anyhow!("result writer has stopped"))
    }

    /// Reads through to the backing log; results still queued are not
    /// visible yet.
    fn list_all(&self) -> anyhow::Result<Vec<GameResult>> {
        self.inner.list_all()
    }
}
