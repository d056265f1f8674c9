//! Error types for configuration loading and high-score persistence.

use std::path::PathBuf;

/// Errors surfaced by the game's I/O edges.
///
/// Nothing in the frame loop propagates these: callers apply a local policy
/// (defaults on read, a logged warning on write) and keep playing.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// Config file could not be read
    #[error("read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for `GameConfig`
    #[error("parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// High score file could not be written
    #[error("write high score {}: {source}", path.display())]
    HighScoreWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for game I/O operations
pub type Result<T> = std::result::Result<T, GameError>;
