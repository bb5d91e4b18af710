//! Five-in-a-row engine for a 15x15 board
//!
//! One human (X, moves first) plays against the computer (O):
//! - 15x15 board, fixed
//! - 5-in-a-row to win (overlines allowed)
//! - Full board without a five is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Line scanning and win detection
//! - [`eval`]: Position evaluation and line patterns
//! - [`search`]: Candidate moves and alpha-beta search
//! - [`engine`]: Move selection for the computer
//! - [`game`]: Turn order and outcome tracking
//! - [`config`]: Engine settings, loadable from TOML
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Game, GameOutcome, Pos};
//!
//! let mut game = Game::new();
//! let mut engine = AIEngine::new();
//!
//! game.apply_human_move(Pos::new(7, 7)).unwrap();
//! if game.outcome() == GameOutcome::InProgress {
//!     let reply = game.apply_computer_move(&mut engine).unwrap();
//!     println!("AI plays {}", reply.best_move);
//! }
//! ```
//!
//! # Search
//!
//! The computer searches a fixed number of plies (2 by default) with
//! minimax and alpha-beta pruning over empty cells next to existing stones.
//! Decided positions score +/-10000 adjusted by remaining depth; depth
//! cutoffs use the line-pattern heuristic.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{choose_move, AIEngine, MoveResult, MoveSource};
pub use error::{ConfigError, EngineError, MoveError, ParseBoardError};
pub use game::{apply_human_move, outcome, Game, GameOutcome};
pub use rules::{check_win, find_winner};
pub use search::{SearchResult, Searcher};
