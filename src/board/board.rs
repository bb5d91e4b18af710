//! Board structure with one bitboard per side

use std::fmt;

use super::bitboard::Bitboard;
use super::{Cell, Player, Pos, BOARD_SIZE, TOTAL_CELLS};
use crate::error::{MoveError, ParseBoardError};

/// Game board. Cheap to clone; the search works on its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Human stones
    pub x: Bitboard,
    /// Computer stones
    pub o: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            x: Bitboard::new(),
            o: Bitboard::new(),
        }
    }

    /// Build a board from 15 text rows of `.`, `X` and `O`.
    ///
    /// Whitespace inside a row is ignored so fixtures can be spaced out.
    pub fn from_rows(rows: &[&str]) -> Result<Self, ParseBoardError> {
        if rows.len() != BOARD_SIZE {
            return Err(ParseBoardError::RowCount { got: rows.len() });
        }

        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != BOARD_SIZE {
                return Err(ParseBoardError::RowLength {
                    row,
                    got: cells.len(),
                });
            }
            for (col, ch) in cells.into_iter().enumerate() {
                let pos = Pos::new(row as u8, col as u8);
                match ch {
                    '.' => {}
                    'X' | 'x' => board.place_stone(pos, Player::X),
                    'O' | 'o' => board.place_stone(pos, Player::O),
                    other => {
                        return Err(ParseBoardError::InvalidCell {
                            row,
                            col,
                            found: other,
                        })
                    }
                }
            }
        }
        Ok(board)
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.x.get(pos) {
            Cell::X
        } else if self.o.get(pos) {
            Cell::O
        } else {
            Cell::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.x.get(pos) && !self.o.get(pos)
    }

    /// Place a stone on an empty cell.
    pub fn set(&mut self, pos: Pos, player: Player) -> Result<(), MoveError> {
        if !Pos::is_valid(i32::from(pos.row), i32::from(pos.col)) {
            return Err(MoveError::OutOfBounds {
                row: pos.row as usize,
                col: pos.col as usize,
            });
        }
        if !self.is_empty(pos) {
            return Err(MoveError::Occupied {
                row: pos.row as usize,
                col: pos.col as usize,
            });
        }
        self.place_stone(pos, player);
        Ok(())
    }

    /// Place a stone without checking the target.
    /// Search probes pair this with `remove_stone`; everything else goes
    /// through `set`.
    #[inline]
    pub(crate) fn place_stone(&mut self, pos: Pos, player: Player) {
        debug_assert!(self.is_empty(pos));
        match player {
            Player::X => self.x.set(pos),
            Player::O => self.o.set(pos),
        }
    }

    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.x.clear(pos);
        self.o.clear(pos);
    }

    /// All stones of both sides
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.x | self.o
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.x.count() + self.o.count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.x.is_empty() && self.o.is_empty()
    }

    /// True iff no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.x = Bitboard::new();
        self.o = Bitboard::new();
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&pos| self.is_empty(pos))
    }

    /// Same position with every X and O swapped.
    pub fn swapped(&self) -> Board {
        Board {
            x: self.o,
            o: self.x,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..BOARD_SIZE {
            write!(f, "{:3}", c)?;
        }
        writeln!(f)?;

        for r in 0..BOARD_SIZE {
            write!(f, "{:2} ", r)?;
            for c in 0..BOARD_SIZE {
                let ch = match self.get(Pos::new(r as u8, c as u8)) {
                    Cell::X => 'X',
                    Cell::O => 'O',
                    Cell::Empty => '.',
                };
                write!(f, "{:>3}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
