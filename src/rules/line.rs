//! Directional line scanning shared by win detection and evaluation
//!
//! From an origin stone, walk outward in both senses of one direction and
//! count consecutive stones of the same side. A walk ends at the first cell
//! that is not the scanning side's; running off the board or into an
//! opposing stone also marks that end as blocked.

use crate::board::{Board, Cell, Player, Pos};

/// Direction vectors for line checking (4 directions)
/// Each direction is scanned both ways, so these cover all 8 senses.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Result of scanning one line through an origin stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineRun {
    /// Consecutive stones including the origin
    pub count: u32,
    /// Ends closed by the board edge or an opposing stone (0-2)
    pub blocked: u32,
}

/// Walk one sense of a direction. Returns (stones found, blocked).
#[inline]
fn scan_ray(
    board: &Board,
    pos: Pos,
    (dr, dc): (i32, i32),
    player: Player,
    max_steps: u32,
) -> (u32, bool) {
    let own = Cell::from(player);
    let mut count = 0;
    for step in 1..=max_steps as i32 {
        let Some(next) = pos.offset(dr, dc, step) else {
            return (count, true);
        };
        match board.get(next) {
            cell if cell == own => count += 1,
            Cell::Empty => return (count, false),
            _ => return (count, true),
        }
    }
    (count, false)
}

/// Scan the line through `pos` along `dir`, at most `max_steps` cells each way.
///
/// The origin is counted as `player`'s stone; callers only scan from
/// occupied cells of that side.
#[inline]
pub fn scan_line(
    board: &Board,
    pos: Pos,
    dir: (i32, i32),
    player: Player,
    max_steps: u32,
) -> LineRun {
    let (forward, forward_blocked) = scan_ray(board, pos, dir, player, max_steps);
    let (backward, backward_blocked) =
        scan_ray(board, pos, (-dir.0, -dir.1), player, max_steps);

    LineRun {
        count: 1 + forward + backward,
        blocked: u32::from(forward_blocked) + u32::from(backward_blocked),
    }
}
