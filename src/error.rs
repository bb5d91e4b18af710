//! Error types for the engine

use std::path::PathBuf;

use thiserror::Error;

/// A move the caller asked for that cannot be applied.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("position ({row}, {col}) is outside the 15x15 board")]
    OutOfBounds { row: usize, col: usize },

    #[error("position ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("it is not {0:?}'s turn")]
    NotYourTurn(crate::board::Player),
}

/// Failure of the move selector.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Caller asked for a move on a board with no empty cell left.
    #[error("no empty cell left to play")]
    BoardFull,

    #[error(transparent)]
    Move(#[from] MoveError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("search depth {0} is out of range (1-6)")]
    InvalidDepth(u8),
}

/// Malformed text board fixture.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("expected 15 rows, got {got}")]
    RowCount { got: usize },

    #[error("row {row} has {got} cells, expected 15")]
    RowLength { row: usize, got: usize },

    #[error("invalid character '{found}' at ({row}, {col})")]
    InvalidCell { row: usize, col: usize, found: char },
}
