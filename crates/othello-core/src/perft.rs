//! Move-generation node counter.
//!
//! Walks the game tree from a position and counts the positions reached after
//! exactly `depth` placements. The player to move alternates on every ply and
//! no pass is ever generated, so a position where the mover has no legal move
//! contributes nothing below it.

use crate::board::Board;
use crate::player::Player;

/// Executes a perft run starting from the standard initial position with
/// `A` to move.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand. A depth of `1` counts the
///   immediate legal moves.
///
/// # Returns
///
/// The number of positions reached after exactly `depth` plies.
pub fn perft_root(depth: u32) -> u64 {
    perft(&Board::new(), Player::A, depth)
}

/// Counts the positions reached from `board` after `depth` plies, `player`
/// moving first.
pub fn perft(board: &Board, player: Player, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.get_moves(player);
    if depth == 1 {
        return moves.count() as u64;
    }

    moves
        .iter()
        .filter_map(|sq| board.make_move(sq, player).ok())
        .map(|next| perft(&next, player.opponent(), depth - 1))
        .sum()
}
