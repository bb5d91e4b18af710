//! Candidate move generation
//!
//! Limits the branching factor to empty cells touching an existing stone
//! (8-neighbourhood). Far-away cells are never tried; at the shallow depths
//! this engine searches that is an accepted loss of accuracy.

use crate::board::{Board, Pos, TOTAL_CELLS};

/// Generate candidate moves near existing stones.
///
/// Order: stones in row-major order, each adding its unseen empty
/// neighbours row offset first, then column offset. When no stone has an
/// empty neighbour (including the empty board) every empty cell is
/// returned in row-major order. A full board yields nothing.
#[must_use]
pub fn candidates(board: &Board) -> Vec<Pos> {
    let mut moves = Vec::with_capacity(64);
    let mut seen = [false; TOTAL_CELLS];

    for pos in board.occupied().iter_ones() {
        for dr in -1..=1 {
            for dc in -1..=1 {
                let Some(next) = pos.offset(dr, dc, 1) else {
                    continue;
                };
                let idx = next.to_index();
                if seen[idx] || !board.is_empty(next) {
                    continue;
                }
                seen[idx] = true;
                moves.push(next);
            }
        }
    }

    if moves.is_empty() {
        moves.extend(board.empty_cells());
    }

    moves
}
