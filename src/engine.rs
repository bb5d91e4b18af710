//! Move selection for the computer opponent
//!
//! The engine runs the alpha-beta search from the current position with O
//! to move and an unbounded window. When the search yields no move (the
//! position is already decided, or nothing was searchable) it falls back to
//! a uniformly random empty cell. On a full board there is nothing to pick
//! and the engine says so instead of inventing a coordinate.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Player, Pos};
//!
//! let mut engine = AIEngine::new();
//! let mut board = Board::new();
//! board.set(Pos::new(7, 7), Player::X).unwrap();
//!
//! let result = engine.choose_move(&board).unwrap();
//! board.set(result.best_move, Player::O).unwrap();
//! println!("Computer plays {} (score {})", result.best_move, result.score);
//! ```

use std::time::Instant;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Pos};
use crate::config::EngineConfig;
use crate::error::{ConfigError, EngineError};
use crate::search::{Searcher, INF};

/// Where the chosen move came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// Best move of the alpha-beta search
    Search,
    /// Random empty cell after the search produced no move
    RandomFallback,
}

/// Result of a move selection with search statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub best_move: Pos,
    /// Search score of the position (0 for a fallback move)
    pub score: i32,
    pub source: MoveSource,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

/// The computer player.
///
/// Keeps no state between moves apart from its random generator; every
/// decision re-searches from scratch.
#[derive(Debug)]
pub struct AIEngine {
    searcher: Searcher,
    config: EngineConfig,
    rng: StdRng,
}

impl AIEngine {
    /// Engine with the default configuration (depth 2).
    #[must_use]
    pub fn new() -> Self {
        Self::build(EngineConfig::default())
    }

    /// Engine with a custom configuration.
    ///
    /// ```
    /// use gomoku::{AIEngine, EngineConfig};
    ///
    /// let engine = AIEngine::with_config(EngineConfig::default().with_depth(3)).unwrap();
    /// assert_eq!(engine.depth(), 3);
    /// ```
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            searcher: Searcher::new(),
            config,
            rng,
        }
    }

    /// Pick the computer's move on `board`.
    ///
    /// Callers check for a finished game before asking; a decided but not
    /// full board still gets a (random) move back.
    pub fn choose_move(&mut self, board: &Board) -> Result<MoveResult, EngineError> {
        let start = Instant::now();
        let result = self
            .searcher
            .search(board, self.config.depth, true, -INF, INF);
        let time_ms = start.elapsed().as_millis() as u64;

        if let Some(best_move) = result.best_move {
            debug!(
                "search depth {} picked {} score {} ({} nodes, {} cutoffs, {}ms)",
                self.config.depth,
                best_move,
                result.score,
                result.stats.nodes,
                result.stats.cutoffs,
                time_ms
            );
            return Ok(MoveResult {
                best_move,
                score: result.score,
                source: MoveSource::Search,
                time_ms,
                nodes: result.stats.nodes,
            });
        }

        let best_move = self.random_move(board)?;
        warn!("search produced no move, playing random cell {}", best_move);
        Ok(MoveResult {
            best_move,
            score: 0,
            source: MoveSource::RandomFallback,
            time_ms: start.elapsed().as_millis() as u64,
            nodes: result.stats.nodes,
        })
    }

    /// Uniformly random empty cell.
    fn random_move(&mut self, board: &Board) -> Result<Pos, EngineError> {
        let empty: Vec<Pos> = board.empty_cells().collect();
        empty
            .choose(&mut self.rng)
            .copied()
            .ok_or(EngineError::BoardFull)
    }

    /// Change the search depth.
    pub fn set_depth(&mut self, depth: u8) -> Result<(), ConfigError> {
        let config = self.config.clone().with_depth(depth);
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn depth(&self) -> u8 {
        self.config.depth
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot move selection with a default engine.
pub fn choose_move(board: &Board) -> Result<MoveResult, EngineError> {
    AIEngine::new().choose_move(board)
}
