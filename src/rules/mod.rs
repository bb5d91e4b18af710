//! Game rules: line scanning and win detection
//!
//! Five or more in a row wins; a full board without a five is a draw.

pub mod line;
pub mod win;

// Re-exports for convenient access
pub use line::{scan_line, LineRun, DIRECTIONS};
pub use win::{check_win, find_winner, is_draw, WIN_LENGTH};
