//! Bitboard operations and types.
//!
//! This module provides a [`Bitboard`] type that represents a set of cells on the
//! 8x8 board using a single `u64`, where bit `row * 8 + col` corresponds to a cell
//! (bit 0 = A1, bit 63 = H8).

use crate::square::Square;

/// Newtype wrapper for a 64-bit cell set (bit 0 = A1, bit 63 = H8).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Bitboard(u64);

impl Bitboard {
    /// The empty set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Creates a new bitboard from raw bits.
    ///
    /// # Arguments
    ///
    /// * `bits` - Raw 64-bit value where each bit represents a cell.
    #[inline(always)]
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits)
    }

    /// Returns a new bitboard with the bit at the given square set.
    ///
    /// # Arguments
    ///
    /// * `sq` - The square to set.
    ///
    /// # Returns
    ///
    /// A new `Bitboard` with the specified square's bit set.
    #[inline(always)]
    pub const fn set(self, sq: Square) -> Self {
        Bitboard(self.0 | sq.bitboard().0)
    }

    /// Returns a new bitboard with the bit at the given square removed.
    ///
    /// # Arguments
    ///
    /// * `sq` - The square to clear.
    ///
    /// # Returns
    ///
    /// A new `Bitboard` with the specified square's bit cleared.
    #[inline(always)]
    pub const fn remove(self, sq: Square) -> Self {
        Bitboard(self.0 & !sq.bitboard().0)
    }

    /// Checks if the bitboard contains the bit at the given square.
    #[inline(always)]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & sq.bitboard().0 != 0
    }

    /// Checks if the bitboard has no bits set.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count, 0-64).
    #[inline(always)]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns the square corresponding to the least significant set bit.
    ///
    /// # Returns
    ///
    /// `Some(Square)` for the LSB position, or `None` if the bitboard is empty.
    #[inline(always)]
    pub fn lsb_square(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Square::from_index(self.0.trailing_zeros() as usize)
        }
    }

    /// Returns an iterator over all set squares in the bitboard.
    ///
    /// # Returns
    ///
    /// A [`BitboardIterator`] that yields each set square in LSB-first order.
    #[inline(always)]
    pub fn iter(self) -> BitboardIterator {
        BitboardIterator::new(self)
    }
}

// Operator trait implementations

impl std::ops::BitAnd for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl std::ops::Not for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

// Conversion trait implementations

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter().fold(Bitboard::EMPTY, Bitboard::set)
    }
}

// Iterator support

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIterator;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        BitboardIterator::new(self)
    }
}

// Display trait

impl std::fmt::Display for Bitboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for sq in Square::iter() {
            if self.contains(sq) {
                write!(f, "1")?;
            } else {
                write!(f, ".")?;
            }
            if sq.col() == 7 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// An iterator that yields each set bit position in a bitboard as a `Square`.
pub struct BitboardIterator {
    bitboard: Bitboard,
}

impl BitboardIterator {
    /// Creates a new `BitboardIterator`.
    #[inline(always)]
    pub fn new(bitboard: Bitboard) -> BitboardIterator {
        BitboardIterator { bitboard }
    }
}

impl Iterator for BitboardIterator {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let square = self.bitboard.lsb_square()?;
        self.bitboard = self.bitboard.remove(square);
        Some(square)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bitboard.count() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIterator {}
