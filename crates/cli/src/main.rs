mod game;
mod parse;
mod ui;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::game::GameSession;

#[derive(Parser, Debug)]
#[command(name = "othello", about = "Play Othello in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,

    /// Moves to play before handing over, e.g. "d3c3c4"
    #[arg(long, global = true, value_name = "STRING")]
    moves: Option<String>,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Print the position after --moves and exit
    Show,
}

fn main() {
    let args = Cli::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    let (session, preplayed) = start_session(args.moves.as_deref());
    if let Err(err) = &preplayed {
        eprintln!("{err}");
    }

    match args.command {
        Some(SubCommands::Show) => {
            session.print();
            preplayed.unwrap_or_else(|_| std::process::exit(1));
        }
        None => {
            ui::ui_loop(session).unwrap_or_else(|err| {
                eprintln!("Failed to run UI: {err}");
                std::process::exit(1);
            });
        }
    }
}

/// Creates the session and plays `moves` on it, if given.
///
/// The session is returned even when a move is rejected; it then holds the
/// position before the rejected move.
fn start_session(moves: Option<&str>) -> (GameSession, Result<(), String>) {
    let mut session = GameSession::new();
    let result = match moves {
        Some(moves) => session.play_moves(moves),
        None => Ok(()),
    };
    (session, result)
}
