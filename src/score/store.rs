use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// File-backed high score: a single integer in a text file.
///
/// The file is read once when the store opens; a missing or unreadable
/// file reads as zero. `record` persists only scores that beat the best
/// so far, so the stored value never decreases across sessions.
pub struct HighScoreStore {
    path: PathBuf,
    best: u32,
}

impl HighScoreStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = fs::read_to_string(&path)
            .ok()
            .and_then(|contents| contents.trim().parse().ok())
            .unwrap_or(0);

        Self { path, best }
    }

    /// Best score on record
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Report an ending score. Returns true (and writes the file) only
    /// when it strictly beats the best so far.
    pub fn record(&mut self, score: u32) -> Result<bool> {
        if score <= self.best {
            return Ok(false);
        }

        self.best = score;
        fs::write(&self.path, score.to_string())
            .with_context(|| format!("failed to write high score to {}", self.path.display()))?;

        Ok(true)
    }
}
