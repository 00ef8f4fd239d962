//! End-of-game result records and the sinks they are appended to.
//!
//! The original program pushed each finished game as a row to a shared
//! spreadsheet. Here the sink is a trait: the process constructs one handle at
//! start-up and every game appends through it, so tests can swap in an
//! in-memory stub.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::Outcome;

/// Read-only projection of a finished game, built exactly once at game end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    /// Unique session identifier.
    pub session: String,
    /// Player display name.
    pub player: String,
    /// Unix timestamp (seconds) of game completion.
    pub timestamp: u64,
    pub player_hits: usize,
    pub opponent_hits: usize,
    /// Outcome label: "win", "loss" or "tie".
    pub outcome: String,
}

impl ResultSummary {
    pub fn new(
        session: &str,
        player: &str,
        player_hits: usize,
        opponent_hits: usize,
        outcome: Outcome,
    ) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            session: session.to_owned(),
            player: player.to_owned(),
            timestamp,
            player_hits,
            opponent_hits,
            outcome: outcome.label().to_owned(),
        }
    }
}

/// Failure to persist a result row. The game outcome itself stays valid; the
/// caller may log and continue or retry the write.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write result row: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode result row: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Append-only row store for finished games.
pub trait RecordSink {
    fn append(&mut self, summary: &ResultSummary) -> Result<(), SinkError>;
}

/// Sink that appends one JSON object per line to a file, creating it on first
/// use.
#[derive(Debug, Clone)]
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_owned(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for JsonlSink {
    fn append(&mut self, summary: &ResultSummary) -> Result<(), SinkError> {
        let row = serde_json::to_string(summary)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{row}")?;
        log::info!("recorded result for session {} to {:?}", summary.session, self.path);
        Ok(())
    }
}

/// In-memory sink for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    rows: Vec<ResultSummary>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[ResultSummary] {
        &self.rows
    }
}

impl RecordSink for MemorySink {
    fn append(&mut self, summary: &ResultSummary) -> Result<(), SinkError> {
        self.rows.push(summary.clone());
        Ok(())
    }
}
