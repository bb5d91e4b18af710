//! Win condition checking
//!
//! A side wins with five or more of its stones in an unbroken line,
//! horizontally, vertically or on either diagonal. Overlines count.

use crate::board::{Board, Player, Pos};

use super::line::{scan_line, DIRECTIONS};

/// Stones in a row needed to win
pub const WIN_LENGTH: u32 = 5;

/// Check whether the stone at `pos` completes a five for `player`.
///
/// Only the four lines through `pos` are examined, so this is the check to
/// run after a move when the last-played cell is known.
#[inline]
pub fn check_win(board: &Board, pos: Pos, player: Player) -> bool {
    if board.get(pos).player() != Some(player) {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&dir| scan_line(board, pos, dir, player, WIN_LENGTH - 1).count >= WIN_LENGTH)
}

/// Scan every stone in row-major order and return the first winner found.
///
/// Used where the last move is unknown, such as search-tree nodes.
pub fn find_winner(board: &Board) -> Option<Player> {
    board.occupied().iter_ones().find_map(|pos| {
        let player = board.get(pos).player()?;
        check_win(board, pos, player).then_some(player)
    })
}

/// Full board with no five on it
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && find_winner(board).is_none()
}
