//! The two sides of the game.

/// One of the two players.
///
/// `A` moves first. The character forms used in board strings are `'A'`
/// and `'B'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Both players, first mover first.
    pub const BOTH: [Player; 2] = [Player::A, Player::B];

    /// Returns the other player. `p.opponent().opponent() == p`.
    #[inline(always)]
    pub const fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Converts the player to its character representation.
    pub const fn to_char(self) -> char {
        match self {
            Player::A => 'A',
            Player::B => 'B',
        }
    }

    /// Parses `'A'`/`'B'` (case-insensitive).
    pub fn from_char(c: char) -> Option<Player> {
        match c.to_ascii_uppercase() {
            'A' => Some(Player::A),
            'B' => Some(Player::B),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
