//! Game session for the Othello CLI.
//!
//! This module provides the `GameSession` struct which wraps the core
//! game state and adds CLI-specific display capabilities.

use colored::{ColoredString, Colorize};
use log::info;
use othello_core::{
    cell::Cell, error::MoveError, flip, game_state::GameState, player::Player, square::Square,
    terminal::Outcome,
};

use crate::parse::parse_move_string;

/// One game as seen by the terminal host.
///
/// This is a thin wrapper around the core `GameState` that remembers the
/// last placement and prints the position with colors.
pub struct GameSession {
    /// Core game state
    core: GameState,
    /// Square of the last accepted placement
    last_move: Option<Square>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates a new session in the initial position.
    pub fn new() -> Self {
        Self {
            core: GameState::new(),
            last_move: None,
        }
    }

    /// Returns the core game state.
    pub fn state(&self) -> &GameState {
        &self.core
    }

    /// Returns the square of the last accepted placement.
    pub fn last_move(&self) -> Option<Square> {
        self.last_move
    }

    /// Discards the current game and starts over.
    pub fn restart(&mut self) {
        info!("new game");
        *self = Self::new();
    }

    /// Places a disc for the player to move on `sq`.
    ///
    /// # Returns
    /// The number of discs flipped. On error the session is left unchanged.
    pub fn play(&mut self, sq: Square) -> Result<u32, MoveError> {
        let next = self.core.place_at(sq)?;
        Ok(self.advance(next, sq))
    }

    /// Places a disc for the player to move at `(row, col)`.
    ///
    /// # Returns
    /// The number of discs flipped. On error the session is left unchanged.
    pub fn place(&mut self, row: usize, col: usize) -> Result<u32, MoveError> {
        let next = self.core.place(row, col)?;
        let sq = Square::from_row_col(row, col)?;
        Ok(self.advance(next, sq))
    }

    fn advance(&mut self, next: GameState, sq: Square) -> u32 {
        let flipped = flip::flips(self.core.board(), sq, self.core.side_to_move()).count();
        self.core = next;
        self.last_move = Some(sq);
        flipped
    }

    /// Plays a concatenated move string such as `"d3c3c4"`.
    ///
    /// Stops at the first move the engine rejects; the moves before it stay
    /// on the board.
    pub fn play_moves(&mut self, moves: &str) -> Result<(), String> {
        for (i, sq) in parse_move_string(moves)?.into_iter().enumerate() {
            self.play(sq)
                .map_err(|err| format!("Move {} ({sq}) rejected: {err}", i + 1))?;
        }
        Ok(())
    }

    /// Returns the legal targets of the player to move, in board order.
    pub fn legal_moves(&self) -> Vec<Square> {
        self.core.legal_moves().iter().collect()
    }

    /// Returns a one-line summary of the game status.
    pub fn status_line(&self) -> String {
        let score = self.core.scores();
        match self.core.winner() {
            Some(outcome) => format!("Game over: {outcome} ({score})"),
            None if self.core.is_stuck() => format!(
                "{} has no legal move; start a new game with 'new' ({score})",
                self.core.side_to_move()
            ),
            None => format!("{} to move ({score})", self.core.side_to_move()),
        }
    }

    /// Prints a colored representation of the board to the terminal.
    pub fn print(&self) {
        let board = self.core.board();
        let side_to_move = self.core.side_to_move();
        let legal = self.core.legal_moves();
        let score = self.core.scores();

        // Header
        println!("      a   b   c   d   e   f   g   h");
        println!("    ┌───┬───┬───┬───┬───┬───┬───┬───┐");

        for (y, row) in Square::iter().collect::<Vec<_>>().chunks(8).enumerate() {
            print!("  {} │", y + 1);

            for &sq in row {
                let is_last_move = Some(sq) == self.last_move;
                let symbol = match board.cell_at(sq) {
                    Cell::Occupied(player) if is_last_move => {
                        paint(player, " ● ").on_bright_black()
                    }
                    Cell::Occupied(player) => paint(player, " ● "),
                    Cell::Empty if legal.contains(sq) => " · ".bright_cyan(),
                    Cell::Empty => "   ".normal(),
                };
                print!("{symbol}│");
            }

            // Side information
            match y {
                2 if !self.core.is_game_over() => {
                    println!("   {}", paint(side_to_move, &format!("{side_to_move}'s turn")));
                }
                3 => println!(
                    "   A: {}",
                    paint(Player::A, &format!("{:2}", score.get(Player::A)))
                ),
                4 => println!(
                    "   B: {}",
                    paint(Player::B, &format!("{:2}", score.get(Player::B)))
                ),
                6 => match self.core.winner() {
                    Some(Outcome::Winner(player)) => {
                        println!("   {}", paint(player, &format!("{player} wins!")))
                    }
                    Some(Outcome::Tie) => println!("   {}", "Tie".bright_cyan()),
                    None if self.core.is_stuck() => println!(
                        "   {}",
                        format!("{side_to_move} has no legal move").bright_red()
                    ),
                    None => println!(),
                },
                7 if self.core.is_game_over() => {
                    println!("   {}", "*** Game Over ***".bright_red())
                }
                _ => println!(),
            }

            if y < 7 {
                println!("    ├───┼───┼───┼───┼───┼───┼───┼───┤");
            }
        }

        // Footer
        println!("    └───┴───┴───┴───┴───┴───┴───┴───┘");
    }
}

/// Colors text in the player's color.
fn paint(player: Player, text: &str) -> ColoredString {
    match player {
        Player::A => text.bright_green(),
        Player::B => text.bright_yellow(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_moves() {
        let mut session = GameSession::new();
        session.play_moves("d3c3c4").unwrap();
        assert_eq!(session.state().scores().get(Player::A), 5);
        assert_eq!(session.state().scores().get(Player::B), 2);
        assert_eq!(session.state().side_to_move(), Player::B);
        assert_eq!(session.last_move, Some(Square::C4));
    }

    #[test]
    fn test_play_moves_stops_at_rejected_move() {
        let mut session = GameSession::new();
        let err = session.play_moves("d3a1c4").unwrap_err();
        assert_eq!(err, "Move 2 (a1) rejected: illegal move at a1");
        assert_eq!(session.state().side_to_move(), Player::B);
        assert_eq!(session.last_move, Some(Square::D3));
    }

    #[test]
    fn test_place_out_of_range_keeps_session() {
        let mut session = GameSession::new();
        assert_eq!(
            session.place(8, 2),
            Err(MoveError::OutOfRange { row: 8, col: 2 })
        );
        assert_eq!(*session.state(), GameState::new());
        assert_eq!(session.last_move, None);

        assert_eq!(session.place(2, 3), Ok(1));
        assert_eq!(session.last_move, Some(Square::D3));
    }

    #[test]
    fn test_legal_moves_in_board_order() {
        let session = GameSession::new();
        assert_eq!(
            session.legal_moves(),
            vec![Square::D3, Square::C4, Square::F5, Square::E6]
        );
    }

    #[test]
    fn test_status_line() {
        let mut session = GameSession::new();
        assert_eq!(session.status_line(), "A to move (A: 2, B: 2)");

        assert_eq!(session.play(Square::D3), Ok(1));
        assert_eq!(session.status_line(), "B to move (A: 4, B: 1)");

        session.restart();
        assert_eq!(*session.state(), GameState::new());
        assert_eq!(session.last_move, None);
    }
}
