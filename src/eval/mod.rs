//! Evaluation module for board positions
//!
//! Scores a position by the line potential of every stone on it:
//! - Line patterns (twos, threes, fours, fives)
//! - Openness of each line's ends
//!
//! O's stones count positive and X's negative, so higher is better for
//! the computer.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, score_cell};
pub use patterns::{line_score, PatternScore};
