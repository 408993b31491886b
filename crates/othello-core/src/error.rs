//! Error kinds reported by the rules engine.

use thiserror::Error;

use crate::square::Square;

/// Reasons a placement (or a coordinate lookup) can be rejected.
///
/// None of these are transient: the same state and arguments always
/// produce the same error.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Row or column outside `0..8`. Always a caller bug.
    #[error("coordinates ({row}, {col}) are outside the 8x8 board")]
    OutOfRange { row: usize, col: usize },
    /// The target cell does not outflank any opposing disc.
    #[error("illegal move at {square}")]
    IllegalMove { square: Square },
    /// Placement attempted after neither player can move.
    #[error("game already over, no new moves are accepted")]
    GameAlreadyOver,
}

pub type Result<T> = core::result::Result<T, MoveError>;
