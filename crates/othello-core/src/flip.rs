//! Disc flip calculation for move execution.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::direction::Direction;
use crate::error::{MoveError, Result};
use crate::legality::bracketed_run;
use crate::player::Player;
use crate::square::Square;

/// Calculates which opponent discs would be flipped by placing a disc of
/// `player` at the given square.
///
/// Every direction is walked against the pre-move board, so a run converted
/// in one direction never influences another.
///
/// # Returns
///
/// A bitboard of all outflanked opponent discs. Returns an empty bitboard if
/// `sq` is occupied or nothing is outflanked (illegal move).
pub fn flips(board: &Board, sq: Square, player: Player) -> Bitboard {
    if !board.is_square_empty(sq) {
        return Bitboard::EMPTY;
    }

    Direction::ALL
        .iter()
        .fold(Bitboard::EMPTY, |acc, &dir| {
            acc | bracketed_run(board, sq, player, dir)
        })
}

/// Places a disc of `player` on `sq` and converts every outflanked disc.
///
/// The input board is not modified; the updated position is returned.
///
/// # Errors
///
/// [`MoveError::IllegalMove`] if the placement is not legal for `player`.
pub fn apply_move(board: &Board, sq: Square, player: Player) -> Result<Board> {
    let flipped = flips(board, sq, player);
    if flipped.is_empty() {
        return Err(MoveError::IllegalMove { square: sq });
    }
    Ok(board.with_discs(flipped.set(sq), player))
}
