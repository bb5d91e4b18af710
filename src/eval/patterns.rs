//! Pattern scores for line evaluation
//!
//! Each line through a stone is classified by its length and how many of
//! its ends are closed, then looked up here.

use crate::rules::LineRun;

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row
    pub const FIVE: i32 = 10_000;

    /// Open four: _OOOO_
    pub const OPEN_FOUR: i32 = 1_000;
    /// Closed four: XOOOO_ or _OOOOX
    pub const CLOSED_FOUR: i32 = 200;

    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 100;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: i32 = 30;

    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 10;
}

/// Score of a single scanned line.
///
/// Lines closed at both ends and lone stones are worth nothing; a closed
/// two scores nothing either.
#[inline]
pub fn line_score(run: LineRun) -> i32 {
    match (run.count, run.blocked) {
        (count, _) if count >= 5 => PatternScore::FIVE,
        (4, 0) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::CLOSED_FOUR,
        (3, 0) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 0) => PatternScore::OPEN_TWO,
        _ => 0,
    }
}
