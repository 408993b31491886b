//! Contents of a single board cell.

use crate::player::Player;

/// Represents the contents of a cell.
///
/// * `Empty` - No disc.
/// * `Occupied(p)` - A disc showing player `p`'s colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    /// Converts the cell to its character representation.
    ///
    /// # Returns
    ///
    /// * `'-'` for `Cell::Empty`
    /// * `'A'` / `'B'` for an occupied cell
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Occupied(p) => p.to_char(),
        }
    }

    /// Returns the owner of the disc, if any.
    #[inline]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(p),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}
