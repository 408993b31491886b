//! Interactive prompt for two human players sharing one terminal.

use log::debug;
use othello_core::error::MoveError;
use rustyline::{DefaultEditor, error::ReadlineError};

use crate::game::GameSession;
use crate::parse::{Command, parse_command};

const HELP: &str = "\
Commands:
  <square>      place a disc, e.g. d3
  <row> <col>   place a disc by zero-based coordinates, e.g. 2 3
  moves         list the legal moves of the player to move
  new           start a new game (alias: restart)
  help          show this help
  quit          leave the program";

/// Main prompt loop.
///
/// Prints the board, reads one command per line and applies it to the
/// session until the user quits or closes the input.
///
/// # Arguments
/// * `session` - The game to continue from
pub fn ui_loop(mut session: GameSession) -> Result<(), String> {
    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;

    session.print();
    println!("{}\n", session.status_line());

    loop {
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.to_string()),
        };
        let _ = rl.add_history_entry(line.as_str());

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("{err}\n");
                continue;
            }
        };
        debug!("command: {command:?}");

        let mover = session.state().side_to_move();
        let result = match command {
            Command::Place(sq) => session.play(sq),
            Command::PlaceAt { row, col } => session.place(row, col),
            Command::Moves => {
                let moves: Vec<String> =
                    session.legal_moves().iter().map(|sq| sq.to_string()).collect();
                if moves.is_empty() {
                    println!("{} has no legal move.\n", session.state().side_to_move());
                } else {
                    println!("{}\n", moves.join(" "));
                }
                continue;
            }
            Command::Restart => {
                session.restart();
                println!();
                session.print();
                println!("{}\n", session.status_line());
                continue;
            }
            Command::Help => {
                println!("{HELP}\n");
                continue;
            }
            Command::Quit => break,
        };

        match result {
            Ok(flipped) => {
                println!();
                session.print();
                if let Some(sq) = session.last_move() {
                    println!("{mover} plays {sq}, flipping {flipped}.");
                }
                println!("{}\n", session.status_line());
            }
            Err(err) => println!("{}\n", describe(&err)),
        }
    }

    Ok(())
}

/// Formats a rejected placement for the prompt.
fn describe(err: &MoveError) -> String {
    match err {
        MoveError::OutOfRange { .. } => format!("{err}. Rows and columns run from 0 to 7."),
        MoveError::IllegalMove { .. } => format!("{err}. Type 'moves' to list the legal ones."),
        MoveError::GameAlreadyOver => format!("{err}. Type 'new' to play again."),
    }
}
