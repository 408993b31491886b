//! Othello board representation using bitboards.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::cell::Cell;
use crate::error::Result;
use crate::flip;
use crate::legality;
use crate::player::Player;
use crate::square::{Square, TOTAL_SQUARES};
use crate::terminal;

/// An 8x8 Othello board.
///
/// The board holds one bitboard per player. The two sets are kept disjoint by
/// every constructor and every update, so each cell is exactly one of empty,
/// owned by `A`, or owned by `B`, and the three counts always sum to 64.
///
/// `Board` is `Copy`; every update returns a new value and leaves the
/// original untouched.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    /// Discs owned by player `A`.
    a: Bitboard,
    /// Discs owned by player `B`.
    b: Bitboard,
}

impl Default for Board {
    /// Creates a board with the standard starting position.
    ///
    /// The initial position has:
    /// - `B` discs on (3,3) and (4,4) (D4, E5)
    /// - `A` discs on (3,4) and (4,3) (E4, D5)
    fn default() -> Self {
        Board {
            a: Square::E4.bitboard() | Square::D5.bitboard(),
            b: Square::D4.bitboard() | Square::E5.bitboard(),
        }
    }
}

impl Board {
    /// Creates a new `Board` with the initial setup.
    pub fn new() -> Board {
        Default::default()
    }

    /// Alias of [`Board::new`], named after the start-of-game layout.
    pub fn initial() -> Board {
        Board::new()
    }

    /// Creates a board with no discs.
    pub const fn empty_board() -> Board {
        Board {
            a: Bitboard::EMPTY,
            b: Bitboard::EMPTY,
        }
    }

    /// Creates a `Board` from a string representation.
    ///
    /// Whitespace is ignored; the remaining 64 characters describe the cells
    /// from A1 to H8 in row-major order:
    /// - `'A'` / `'a'` for a disc of player `A`
    /// - `'B'` / `'b'` for a disc of player `B`
    /// - `'-'` for empty cells
    ///
    /// # Returns
    /// `Some(Board)` if the string holds exactly 64 valid cell characters,
    /// `None` otherwise.
    pub fn from_string(board_string: &str) -> Option<Board> {
        let mut board = Board::empty_board();
        let mut cells = board_string.chars().filter(|c| !c.is_whitespace());

        for sq in Square::iter() {
            let c = cells.next()?;
            if c == '-' {
                continue;
            }
            board = board.with_placement(sq, Player::from_char(c)?);
        }

        if cells.next().is_some() {
            return None;
        }
        Some(board)
    }

    /// Gets the cell at `(row, col)`.
    ///
    /// # Errors
    /// [`MoveError::OutOfRange`](crate::error::MoveError::OutOfRange) if either
    /// coordinate is outside `0..8`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        Ok(self.cell_at(Square::from_row_col(row, col)?))
    }

    /// Gets the cell at a square.
    #[inline]
    pub fn cell_at(&self, sq: Square) -> Cell {
        if self.a.contains(sq) {
            Cell::Occupied(Player::A)
        } else if self.b.contains(sq) {
            Cell::Occupied(Player::B)
        } else {
            Cell::Empty
        }
    }

    /// Returns the discs owned by `player`.
    #[inline(always)]
    pub fn discs(&self, player: Player) -> Bitboard {
        match player {
            Player::A => self.a,
            Player::B => self.b,
        }
    }

    /// Returns the number of discs `player` has on the board.
    #[inline(always)]
    pub fn count(&self, player: Player) -> u32 {
        self.discs(player).count()
    }

    /// Gets the empty squares.
    #[inline(always)]
    pub fn empty(&self) -> Bitboard {
        !(self.a | self.b)
    }

    /// Returns the number of empty squares on the board.
    #[inline(always)]
    pub fn empty_count(&self) -> u32 {
        self.empty().count()
    }

    /// Checks if a given square is empty.
    #[inline]
    pub fn is_square_empty(&self, sq: Square) -> bool {
        self.empty().contains(sq)
    }

    /// Returns a board with `sq` set to `player`.
    ///
    /// This is a low-level primitive: it performs no legality check and flips
    /// nothing. A disc of the other player on `sq` is replaced.
    #[inline]
    pub fn with_placement(&self, sq: Square, player: Player) -> Board {
        self.with_discs(sq.bitboard(), player)
    }

    /// Returns a board where every cell in `cells` belongs to `player`.
    #[inline]
    pub(crate) fn with_discs(&self, cells: Bitboard, player: Player) -> Board {
        match player {
            Player::A => Board {
                a: self.a | cells,
                b: self.b & !cells,
            },
            Player::B => Board {
                a: self.a & !cells,
                b: self.b | cells,
            },
        }
    }

    /// Checks if placing a disc of `player` on `sq` is legal.
    ///
    /// See [`legality::is_legal`].
    #[inline]
    pub fn is_legal_move(&self, sq: Square, player: Player) -> bool {
        legality::is_legal(self, sq, player)
    }

    /// Returns a bitboard of every legal target for `player`.
    #[inline]
    pub fn get_moves(&self, player: Player) -> Bitboard {
        legality::legal_moves(self, player)
    }

    /// Checks if `player` has at least one legal move.
    #[inline]
    pub fn has_legal_moves(&self, player: Player) -> bool {
        terminal::has_any_legal_move(self, player)
    }

    /// Checks if the game is over (neither player can make a move).
    #[inline]
    pub fn is_game_over(&self) -> bool {
        terminal::is_terminal(self)
    }

    /// Places a disc of `player` on `sq` and flips every outflanked disc.
    ///
    /// # Errors
    /// [`MoveError::IllegalMove`](crate::error::MoveError::IllegalMove) if the
    /// placement brackets nothing.
    #[inline]
    pub fn make_move(&self, sq: Square, player: Player) -> Result<Board> {
        flip::apply_move(self, sq, player)
    }

    /// Converts the board to a string representation.
    ///
    /// The output is an 8x8 grid, row 0 first, with `'A'`, `'B'` and `'-'`,
    /// rows separated by newlines. [`Board::from_string`] reads it back.
    pub fn to_string_as_board(&self) -> String {
        let mut s = String::with_capacity(TOTAL_SQUARES + 8);
        for sq in Square::iter() {
            if sq.index() > 0 && sq.col() == 0 {
                s.push('\n');
            }
            s.push(self.cell_at(sq).to_char());
        }
        s
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_as_board())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoveError;

    #[test]
    fn test_default_board() {
        let board = Board::default();
        assert_eq!(board.count(Player::A), 2);
        assert_eq!(board.count(Player::B), 2);
        assert_eq!(board.empty_count(), 60);
        assert_eq!(board, Board::new());
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn test_initial_layout() {
        let board = Board::initial();
        assert_eq!(board.get(3, 3), Ok(Cell::Occupied(Player::B)));
        assert_eq!(board.get(3, 4), Ok(Cell::Occupied(Player::A)));
        assert_eq!(board.get(4, 3), Ok(Cell::Occupied(Player::A)));
        assert_eq!(board.get(4, 4), Ok(Cell::Occupied(Player::B)));

        let occupied = Square::iter()
            .filter(|&sq| !board.cell_at(sq).is_empty())
            .count();
        assert_eq!(occupied, 4);
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(8, 0), Err(MoveError::OutOfRange { row: 8, col: 0 }));
        assert_eq!(board.get(0, 8), Err(MoveError::OutOfRange { row: 0, col: 8 }));
        assert_eq!(board.get(0, 0), Ok(Cell::Empty));
        assert_eq!(board.get(7, 7), Ok(Cell::Empty));
    }

    #[test]
    fn test_with_placement() {
        let board = Board::new();
        let placed = board.with_placement(Square::A1, Player::B);

        assert_eq!(placed.cell_at(Square::A1), Cell::Occupied(Player::B));
        assert_eq!(placed.count(Player::B), 3);
        // No flipping and the original board is untouched.
        assert_eq!(placed.count(Player::A), 2);
        assert_eq!(board.cell_at(Square::A1), Cell::Empty);

        // Overwriting the other player's disc keeps the sets disjoint.
        let overwritten = board.with_placement(Square::D4, Player::A);
        assert_eq!(overwritten.cell_at(Square::D4), Cell::Occupied(Player::A));
        assert_eq!(
            overwritten.count(Player::A) + overwritten.count(Player::B) + overwritten.empty_count(),
            64
        );
    }

    #[test]
    fn test_from_string() {
        let board_string = "--------\
                            --------\
                            --------\
                            ---BA---\
                            ---AB---\
                            --------\
                            --------\
                            --------";
        let board = Board::from_string(board_string).unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_from_string_rejects_bad_input() {
        assert_eq!(Board::from_string("---"), None);
        assert_eq!(Board::from_string(&"-".repeat(65)), None);
        assert_eq!(Board::from_string(&"X".repeat(64)), None);
        assert!(Board::from_string(&"-".repeat(64)).is_some());
    }

    #[test]
    fn test_discs_and_empty() {
        let board = Board::new();
        assert!(board.discs(Player::A).contains(Square::E4));
        assert!(board.discs(Player::A).contains(Square::D5));
        assert!(board.discs(Player::B).contains(Square::D4));
        assert!(board.discs(Player::B).contains(Square::E5));

        assert!(board.is_square_empty(Square::A1));
        assert!(!board.is_square_empty(Square::D4));
        assert!(!board.empty().contains(Square::E5));
    }

    #[test]
    fn test_to_string_as_board() {
        let board = Board::new();
        let s = board.to_string_as_board();
        let lines: Vec<&str> = s.split('\n').collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[3], "---BA---");
        assert_eq!(lines[4], "---AB---");
        assert_eq!(Board::from_string(&s), Some(board));
    }

    #[test]
    fn test_display() {
        let board = Board::new();
        let expected_display = "--------\n\
                                --------\n\
                                --------\n\
                                ---BA---\n\
                                ---AB---\n\
                                --------\n\
                                --------\n\
                                --------";
        assert_eq!(format!("{board}"), expected_display);
    }

    #[test]
    fn test_make_move_delegates_to_flip() {
        let board = Board::new();
        let next = board.make_move(Square::D3, Player::A).unwrap();
        assert_eq!(next.cell_at(Square::D4), Cell::Occupied(Player::A));
        assert_eq!(
            board.make_move(Square::A1, Player::A),
            Err(MoveError::IllegalMove { square: Square::A1 })
        );
    }

    #[test]
    fn test_is_game_over() {
        assert!(!Board::new().is_game_over());
        assert!(Board::empty_board().is_game_over());
    }
}
