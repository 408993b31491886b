//! Legal move determination (the outflank rule).
//!
//! A placement is legal when the target cell is empty and, in at least one of
//! the eight directions, the cells next to it form a run of one or more
//! opposing discs that is closed by a disc of the mover. A mover's disc
//! directly adjacent to the target does not count.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::direction::Direction;
use crate::error::Result;
use crate::player::Player;
use crate::square::Square;

/// Walks outward from `sq` in `dir` and returns the opposing discs that a
/// disc of `player` on `sq` would bracket in that direction.
///
/// The walk stops at the first cell that is not an opposing disc. The run is
/// returned only if that cell is in bounds and owned by `player`; otherwise
/// (empty cell, board edge, or an own disc with no opposing disc before it)
/// the result is empty. The occupancy of `sq` itself is not inspected.
pub(crate) fn bracketed_run(board: &Board, sq: Square, player: Player, dir: Direction) -> Bitboard {
    let own = board.discs(player);
    let theirs = board.discs(player.opponent());

    let mut run = Bitboard::EMPTY;
    let mut cursor = sq.step(dir);
    while let Some(next) = cursor {
        if theirs.contains(next) {
            run = run.set(next);
            cursor = next.step(dir);
        } else if own.contains(next) {
            return run;
        } else {
            break;
        }
    }
    Bitboard::EMPTY
}

/// Checks whether `player` may place a disc on `sq`.
///
/// Pure query; it can be asked for either player regardless of whose turn
/// it is.
pub fn is_legal(board: &Board, sq: Square, player: Player) -> bool {
    board.is_square_empty(sq)
        && Direction::ALL
            .iter()
            .any(|&dir| !bracketed_run(board, sq, player, dir).is_empty())
}

/// Coordinate-based form of [`is_legal`].
///
/// # Errors
/// [`MoveError::OutOfRange`](crate::error::MoveError::OutOfRange) if `row` or
/// `col` is outside `0..8`.
pub fn is_legal_at(board: &Board, row: usize, col: usize, player: Player) -> Result<bool> {
    let sq = Square::from_row_col(row, col)?;
    Ok(is_legal(board, sq, player))
}

/// Returns every square where `player` may legally place a disc.
pub fn legal_moves(board: &Board, player: Player) -> Bitboard {
    board
        .empty()
        .iter()
        .filter(|&sq| is_legal(board, sq, player))
        .collect()
}
