//! Minimax search with alpha-beta pruning
//!
//! O is the maximizing side and X the minimizing side; scores are always
//! from O's point of view (see [`crate::eval::evaluate`]).
//!
//! # Features
//!
//! - Terminal detection with a full-board winner scan at every node
//! - Heuristic evaluation at the depth cutoff
//! - Move generation with proximity filtering
//! - Commit/rollback of probe stones on a private copy of the board
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Player, Pos};
//! use gomoku::search::{Searcher, INF};
//!
//! let mut board = Board::new();
//! board.set(Pos::new(7, 7), Player::X).unwrap();
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&board, 2, true, -INF, INF);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use crate::board::{Board, Player, Pos};
use crate::eval::{evaluate, PatternScore};
use crate::rules::find_winner;

use super::candidates::candidates;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = i32::MAX;

/// Base score of a decided game, adjusted by remaining depth
pub const WIN_SCORE: i32 = PatternScore::FIVE;

/// Search statistics for diagnostics and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root included
    pub nodes: u64,
    /// Times the remaining candidates of a node were skipped
    pub cutoffs: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` for terminal positions or when no candidate existed
    pub best_move: Option<Pos>,
    /// Minimax score of the position, positive favours O
    pub score: i32,
    pub stats: SearchStats,
}

/// Depth-limited alpha-beta searcher.
///
/// Holds only per-search counters; nothing carries over between calls.
#[derive(Debug, Default)]
pub struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `board` to `depth` plies.
    ///
    /// `maximizing` is true when O is to move. The caller's board is never
    /// touched: probes are played on a copy and taken back before returning.
    #[must_use]
    pub fn search(
        &mut self,
        board: &Board,
        depth: u8,
        maximizing: bool,
        alpha: i32,
        beta: i32,
    ) -> SearchResult {
        self.stats = SearchStats::default();

        let mut work_board = *board;
        let (score, best_move) = self.alpha_beta(&mut work_board, depth, maximizing, alpha, beta);
        debug_assert_eq!(&work_board, board, "search must undo every probe");

        SearchResult {
            best_move,
            score,
            stats: self.stats,
        }
    }

    /// Statistics of the last search
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<Pos>) {
        self.stats.nodes += 1;

        match find_winner(board) {
            Some(Player::O) => return (WIN_SCORE - i32::from(depth), None),
            Some(Player::X) => return (-WIN_SCORE + i32::from(depth), None),
            None => {}
        }
        if depth == 0 || board.is_full() {
            return (evaluate(board), None);
        }

        let mover = if maximizing { Player::O } else { Player::X };
        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mv in candidates(board) {
            board.place_stone(mv, mover);
            let (score, _) = self.alpha_beta(board, depth - 1, !maximizing, alpha, beta);
            board.remove_stone(mv);

            // Strict improvement only: ties keep the earlier candidate
            if maximizing {
                if score > best_score || best_move.is_none() {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score || best_move.is_none() {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        (best_score, best_move)
    }
}

/// One-shot search with a fresh [`Searcher`].
#[must_use]
pub fn search(board: &Board, depth: u8, maximizing: bool, alpha: i32, beta: i32) -> SearchResult {
    Searcher::new().search(board, depth, maximizing, alpha, beta)
}
