//! Parsing helpers for the interactive prompt.

use othello_core::square::Square;

/// A command typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a disc on a square given in algebraic notation.
    Place(Square),
    /// Place a disc at raw `(row, col)` coordinates. Range checking is left
    /// to the engine.
    PlaceAt { row: usize, col: usize },
    Moves,
    Restart,
    Help,
    Quit,
}

/// Parses one prompt line. Returns `Ok(None)` for a blank line.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut parts = line.split_whitespace();
    let Some(cmd) = parts.next() else {
        return Ok(None);
    };

    let command = match (cmd, parts.next()) {
        ("moves" | "m", None) => Command::Moves,
        ("restart" | "new" | "n", None) => Command::Restart,
        ("help" | "h" | "?", None) => Command::Help,
        ("quit" | "q" | "exit", None) => Command::Quit,
        (row, Some(col)) => {
            let (row, col) = parse_row_col(row, col)?;
            Command::PlaceAt { row, col }
        }
        (sq, None) => match sq.parse::<Square>() {
            Ok(sq) => Command::Place(sq),
            Err(_) => return Err(format!("Unknown command: {sq}")),
        },
    };

    if parts.next().is_some() {
        return Err(format!("Too many arguments: {}", line.trim()));
    }
    Ok(Some(command))
}

/// Parses a `row col` pair of non-negative integers.
pub fn parse_row_col(row: &str, col: &str) -> Result<(usize, usize), String> {
    let parse = |s: &str| {
        s.parse::<usize>()
            .map_err(|_| format!("Invalid coordinate: '{s}'"))
    };
    Ok((parse(row)?, parse(col)?))
}

/// Parses a concatenated move string like "d3c3c4" into a list of squares.
///
/// Reads two characters at a time, interpreting each pair as a square in algebraic notation.
pub fn parse_move_string(input: &str) -> Result<Vec<Square>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if !input.is_ascii() {
        return Err("Input must be ASCII".to_string());
    }
    if !input.len().is_multiple_of(2) {
        return Err("Input length must be even (each move is 2 characters)".to_string());
    }

    let mut moves = Vec::with_capacity(input.len() / 2);
    for i in (0..input.len()).step_by(2) {
        let move_str = &input[i..i + 2];
        match move_str.parse::<Square>() {
            Ok(sq) => moves.push(sq),
            Err(_) => {
                return Err(format!(
                    "Invalid square at position {}: '{move_str}'",
                    (i / 2) + 1
                ));
            }
        }
    }
    Ok(moves)
}
