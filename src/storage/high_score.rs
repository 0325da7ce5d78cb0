//! High score persistence
//!
//! The score lives in a plain text file holding nothing but the decimal
//! number. Reading is forgiving: a missing or garbled file means no score yet.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Default file name, relative to the working directory
pub const DEFAULT_HIGH_SCORE_FILE: &str = "highscore.txt";

/// Somewhere the best score survives between runs
pub trait HighScoreStore {
    /// Read the stored score; 0 when there is none
    fn load(&self) -> u32;

    /// Replace the stored score
    fn save(&mut self, score: u32) -> Result<()>;
}

/// Stores the score in a text file
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> u32 {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::debug!(path = ?self.path, %err, "no high score file, starting from 0");
                return 0;
            }
        };

        let first_line = contents.lines().next().unwrap_or("");
        match first_line.trim().parse::<u32>() {
            Ok(score) => score,
            Err(err) => {
                tracing::debug!(path = ?self.path, %err, "unreadable high score, starting from 0");
                0
            }
        }
    }

    fn save(&mut self, score: u32) -> Result<()> {
        fs::write(&self.path, score.to_string())
            .with_context(|| format!("Failed to write high score to {:?}", self.path))
    }
}

/// Keeps the score in memory; nothing outlives the process
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    score: u32,
    saves: usize,
}

impl MemoryHighScoreStore {
    pub fn new(score: u32) -> Self {
        Self { score, saves: 0 }
    }

    /// How many times `save` has been called
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> u32 {
        self.score
    }

    fn save(&mut self, score: u32) -> Result<()> {
        self.score = score;
        self.saves += 1;
        Ok(())
    }
}
