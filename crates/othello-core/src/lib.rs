//! Rules engine for Othello.
//!
//! The engine owns board representation, legal-move determination, disc
//! flipping, turn alternation, scoring and end-of-game detection. Hosts drive
//! a game through the functions re-exported at the crate root:
//!
//! ```
//! use othello_core::{Outcome, Player};
//!
//! let game = othello_core::new_game();
//! let game = othello_core::place(&game, 2, 3).unwrap();
//! assert_eq!(othello_core::scores(&game).get(Player::A), 4);
//! assert!(!othello_core::is_over(&game));
//! assert_eq!(othello_core::winner(&game), None::<Outcome>);
//! ```

pub mod bitboard;
pub mod board;
pub mod cell;
pub mod direction;
pub mod error;
pub mod flip;
pub mod game_state;
pub mod legality;
pub mod perft;
pub mod player;
pub mod score;
pub mod square;
pub mod terminal;

pub use board::Board;
pub use cell::Cell;
pub use error::MoveError;
pub use game_state::GameState;
pub use player::Player;
pub use score::Score;
pub use square::Square;
pub use terminal::Outcome;

/// Starts a new game: initial board, `A` to move.
pub fn new_game() -> GameState {
    GameState::new()
}

/// Places a disc for the player to move. See [`GameState::place`].
pub fn place(state: &GameState, row: usize, col: usize) -> error::Result<GameState> {
    state.place(row, col)
}

/// Returns the disc counts of the current position.
pub fn scores(state: &GameState) -> Score {
    state.scores()
}

/// Checks whether neither player can move.
pub fn is_over(state: &GameState) -> bool {
    state.is_game_over()
}

/// Returns the winner or a tie once the game is over.
pub fn winner(state: &GameState) -> Option<Outcome> {
    state.winner()
}
