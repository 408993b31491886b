//! End-of-game detection and outcome.

use std::fmt;

use crate::board::Board;
use crate::legality;
use crate::player::Player;
use crate::score::Score;
use crate::square::Square;

/// Checks whether `player` has at least one legal placement on `board`.
///
/// Scans the 64 cells in index order and stops at the first legal one.
pub fn has_any_legal_move(board: &Board, player: Player) -> bool {
    Square::iter().any(|sq| legality::is_legal(board, sq, player))
}

/// Checks whether neither player can move.
pub fn is_terminal(board: &Board) -> bool {
    !has_any_legal_move(board, Player::A) && !has_any_legal_move(board, Player::B)
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The player with strictly more discs.
    Winner(Player),
    /// Both players have the same number of discs.
    Tie,
}

impl Outcome {
    /// Decides the outcome from the final disc counts.
    pub fn from_score(score: &Score) -> Outcome {
        let (a, b) = (score.get(Player::A), score.get(Player::B));
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::A),
            std::cmp::Ordering::Less => Outcome::Winner(Player::B),
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    /// Returns the winning player, or `None` for a tie.
    pub const fn winner(self) -> Option<Player> {
        match self {
            Outcome::Winner(p) => Some(p),
            Outcome::Tie => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(p) => write!(f, "{p} wins"),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}
