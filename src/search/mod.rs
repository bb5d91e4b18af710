//! Search module for the computer opponent
//!
//! Contains:
//! - Candidate move generation near existing stones
//! - Depth-limited minimax with alpha-beta pruning

pub mod alphabeta;
pub mod candidates;

pub use alphabeta::{search, SearchResult, SearchStats, Searcher, INF, WIN_SCORE};
pub use candidates::candidates;
