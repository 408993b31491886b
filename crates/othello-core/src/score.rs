//! Disc counts derived from a board.

use std::fmt;

use crate::board::Board;
use crate::player::Player;

/// Number of discs each player has on the board.
///
/// A `Score` is always computed from a [`Board`] with [`Score::of`]; it has no
/// setters, so it cannot drift from the position it was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    a: u32,
    b: u32,
}

impl Score {
    /// Counts the discs of both players on `board`.
    #[inline]
    pub fn of(board: &Board) -> Score {
        Score {
            a: board.count(Player::A),
            b: board.count(Player::B),
        }
    }

    /// Returns the disc count of `player`.
    #[inline]
    pub const fn get(&self, player: Player) -> u32 {
        match player {
            Player::A => self.a,
            Player::B => self.b,
        }
    }

    /// Returns the total number of discs on the board.
    #[inline]
    pub const fn total(&self) -> u32 {
        self.a + self.b
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A: {}, B: {}", self.a, self.b)
    }
}
