//! Board coordinates.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::bitboard::Bitboard;
use crate::direction::Direction;
use crate::error::MoveError;

/// A cell on the 8x8 board, from A1 to H8.
///
/// Rows map to ranks and columns map to files, so `(row, col)` and the
/// algebraic name agree as follows:
///
/// ```text
///        col 0  1  2  3  4  5  6  7
///            A  B  C  D  E  F  G  H
/// row 0 (1) 00 01 02 03 04 05 06 07
/// row 1 (2) 08 09 10 11 12 13 14 15
/// row 2 (3) 16 17 18 19 20 21 22 23
/// row 3 (4) 24 25 26 27 28 29 30 31
/// row 4 (5) 32 33 34 35 36 37 38 39
/// row 5 (6) 40 41 42 43 44 45 46 47
/// row 6 (7) 48 49 50 51 52 53 54 55
/// row 7 (8) 56 57 58 59 60 61 62 63
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 8;
/// Number of cells on the board.
pub const TOTAL_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

#[rustfmt::skip]
const ALL_SQUARES: [Square; TOTAL_SQUARES] = {
    use Square::*;
    [
        A1, B1, C1, D1, E1, F1, G1, H1,
        A2, B2, C2, D2, E2, F2, G2, H2,
        A3, B3, C3, D3, E3, F3, G3, H3,
        A4, B4, C4, D4, E4, F4, G4, H4,
        A5, B5, C5, D5, E5, F5, G5, H5,
        A6, B6, C6, D6, E6, F6, G6, H6,
        A7, B7, C7, D7, E7, F7, G7, H7,
        A8, B8, C8, D8, E8, F8, G8, H8,
    ]
};

impl Square {
    /// Returns a bitboard with only this square's bit set.
    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::new(1 << self as u8)
    }

    /// Returns the index of this square (0-63, `row * 8 + col`).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Converts an index into a `Square`.
    ///
    /// # Arguments
    ///
    /// * `index` - `row * 8 + col`.
    ///
    /// # Returns
    ///
    /// `Some(Square)` for indices 0-63, `None` otherwise.
    #[inline]
    pub fn from_index(index: usize) -> Option<Square> {
        ALL_SQUARES.get(index).copied()
    }

    /// Converts a `(row, col)` pair into a `Square`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if either coordinate is 8 or larger.
    pub fn from_row_col(row: usize, col: usize) -> Result<Square, MoveError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveError::OutOfRange { row, col });
        }
        Ok(ALL_SQUARES[row * BOARD_SIZE + col])
    }

    /// Returns the row (0-7). Row 0 is rank 1.
    #[inline]
    pub const fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// Returns the column (0-7). Column 0 is file A.
    #[inline]
    pub const fn col(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Returns the neighbouring square one step in `dir`, or `None` when the
    /// step would leave the board.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Square> {
        let (dr, dc) = dir.delta();
        let row = self.row().checked_add_signed(dr)?;
        let col = self.col().checked_add_signed(dc)?;
        Square::from_row_col(row, col).ok()
    }

    /// Iterates over all 64 squares from A1 to H8 in index order.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Square> {
        ALL_SQUARES.into_iter()
    }
}

/// Error returned when parsing algebraic notation fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Input is not exactly two characters.
    #[error("Invalid square format: must be 2 characters (e.g., 'a1')")]
    InvalidFormat,
    /// File character outside a-h / A-H.
    #[error("Invalid file '{0}': must be a-h or A-H")]
    InvalidFile(char),
    /// Rank character outside 1-8.
    #[error("Invalid rank '{0}': must be 1-8")]
    InvalidRank(char),
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses algebraic notation such as `"d3"` (case-insensitive, surrounding
    /// whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareError::InvalidFormat);
        };

        let file = file_char.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(SquareError::InvalidFile(file_char));
        }
        if !('1'..='8').contains(&rank_char) {
            return Err(SquareError::InvalidRank(rank_char));
        }

        let col = (file as u8 - b'a') as usize;
        let row = (rank_char as u8 - b'1') as usize;
        Ok(ALL_SQUARES[row * BOARD_SIZE + col])
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (self.col() as u8 + b'a') as char;
        let rank = (self.row() as u8 + b'1') as char;
        write!(f, "{file}{rank}")
    }
}
