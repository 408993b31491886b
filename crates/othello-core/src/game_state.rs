//! Game state management.
//!
//! This module provides the `GameState` struct which holds the current
//! position, the player to move and the end-of-game flag, and drives one
//! placement at a time: validate, flip, rescore, hand the turn over, and
//! check whether either player can still move.
//!
//! The turn always passes to the opponent after a successful placement. No
//! pass is inserted when the opponent has no legal move; in that case the
//! new state reports [`GameState::is_stuck`] and every placement is rejected
//! until a new game is started.

use log::{debug, trace};

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::error::{MoveError, Result};
use crate::flip;
use crate::player::Player;
use crate::score::Score;
use crate::square::Square;
use crate::terminal::{self, Outcome};

/// Represents the state of one game.
///
/// A `GameState` is a plain value. [`GameState::place`] never modifies the
/// state it is called on; it returns the successor or an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// The current board position.
    board: Board,
    /// Which player's turn it is to move.
    side_to_move: Player,
    /// Neither player has a legal move on `board`.
    terminal: bool,
    /// Disc counts of `board`.
    score: Score,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the initial position.
    ///
    /// The initial position has 4 discs in the center (2 per player) with
    /// `A` to move first.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Player::A)
    }

    /// Creates a game state from an existing board position.
    ///
    /// The end-of-game flag and the score are derived from `board`.
    ///
    /// # Arguments
    ///
    /// * `board` - The board position to start from
    /// * `side_to_move` - Which player moves next
    pub fn from_board(board: Board, side_to_move: Player) -> Self {
        Self {
            board,
            side_to_move,
            terminal: terminal::is_terminal(&board),
            score: Score::of(&board),
        }
    }

    /// Returns a reference to the current board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns which player's turn it is to move.
    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    /// Returns the disc count of both players.
    pub fn scores(&self) -> Score {
        self.score
    }

    /// Checks if the game has ended (neither player can move).
    pub fn is_game_over(&self) -> bool {
        self.terminal
    }

    /// Returns the outcome once the game is over, `None` while it is running.
    pub fn winner(&self) -> Option<Outcome> {
        self.terminal.then(|| Outcome::from_score(&self.score))
    }

    /// Returns the legal targets for the player to move.
    pub fn legal_moves(&self) -> Bitboard {
        self.board.get_moves(self.side_to_move)
    }

    /// Checks if the player to move has no legal placement although the game
    /// is not over.
    pub fn is_stuck(&self) -> bool {
        !self.terminal && !self.board.has_legal_moves(self.side_to_move)
    }

    /// Places a disc for the player to move at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// * [`MoveError::GameAlreadyOver`] if the game has ended
    /// * [`MoveError::OutOfRange`] if `row` or `col` is outside `0..8`
    /// * [`MoveError::IllegalMove`] if the placement outflanks nothing
    pub fn place(&self, row: usize, col: usize) -> Result<GameState> {
        if self.terminal {
            trace!("rejected ({row}, {col}): game already over");
            return Err(MoveError::GameAlreadyOver);
        }
        let sq = Square::from_row_col(row, col)?;
        self.place_at(sq)
    }

    /// Places a disc for the player to move on `sq`.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameAlreadyOver`] or [`MoveError::IllegalMove`], as for
    /// [`GameState::place`].
    pub fn place_at(&self, sq: Square) -> Result<GameState> {
        if self.terminal {
            trace!("rejected {sq}: game already over");
            return Err(MoveError::GameAlreadyOver);
        }

        let mover = self.side_to_move;
        let board = flip::apply_move(&self.board, sq, mover).inspect_err(|err| {
            trace!("rejected {sq} for {mover}: {err}");
        })?;

        let next = Self::from_board(board, mover.opponent());
        debug!("{mover} plays {sq} ({})", next.score);

        if let Some(outcome) = next.winner() {
            debug!("game over: {outcome} ({})", next.score);
        } else if next.is_stuck() {
            debug!("{} has no legal move", next.side_to_move);
        }

        Ok(next)
    }
}
