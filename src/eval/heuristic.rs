//! Heuristic evaluation function for board positions
//!
//! Every stone contributes the line potential it has in the four
//! directions. The sum is zero-sum: O's stones add, X's stones subtract.
//! Used by the search only at depth cutoffs where no side has won yet.

use crate::board::{Board, Cell, Player, Pos};
use crate::rules::{scan_line, DIRECTIONS};

use super::patterns::line_score;

/// Cells scanned each way from a stone
const SCAN_REACH: u32 = 4;

/// Line potential of `player` at `pos`, summed over the four directions.
///
/// `pos` is treated as holding `player`'s stone, so this also scores a
/// hypothetical move on an empty cell.
#[must_use]
#[inline]
pub fn score_cell(board: &Board, pos: Pos, player: Player) -> i32 {
    DIRECTIONS
        .iter()
        .map(|&dir| line_score(scan_line(board, pos, dir, player, SCAN_REACH)))
        .sum()
}

/// Evaluate the board from the computer's (O's) point of view.
///
/// Positive values favour O, negative values favour X. The empty board
/// scores 0 and swapping every stone's colour negates the score.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    board
        .occupied()
        .iter_ones()
        .map(|pos| match board.get(pos) {
            Cell::O => score_cell(board, pos, Player::O),
            Cell::X => -score_cell(board, pos, Player::X),
            Cell::Empty => 0,
        })
        .sum()
}
