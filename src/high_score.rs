//! High-score persistence: a single decimal number in a plain-text file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GameError, Result};

/// Where the all-time high score lives between sessions.
pub trait HighScoreStore {
    /// Read the stored score. Missing or unreadable storage yields `0`.
    fn load(&self) -> u32;

    fn save(&mut self, score: u32) -> Result<()>;
}

#[derive(Clone, Debug)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for HighScoreFile {
    fn load(&self) -> u32 {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return 0,
            Err(e) => {
                tracing::warn!("read high score {}: {e}; starting from 0", self.path.display());
                return 0;
            }
        };
        match text.trim().parse() {
            Ok(score) => score,
            Err(e) => {
                tracing::warn!(
                    "high score file {} is not a number ({e}); starting from 0",
                    self.path.display()
                );
                0
            }
        }
    }

    fn save(&mut self, score: u32) -> Result<()> {
        fs::write(&self.path, score.to_string()).map_err(|source| GameError::HighScoreWrite {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-process store for headless runs and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryHighScore {
    pub score: u32,
    pub saves: usize,
}

impl HighScoreStore for MemoryHighScore {
    fn load(&self) -> u32 {
        self.score
    }

    fn save(&mut self, score: u32) -> Result<()> {
        self.score = score;
        self.saves += 1;
        Ok(())
    }
}
