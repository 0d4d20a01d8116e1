//! Parsing of the lines typed at the prompt.

use draughts_core::MoveRequest;

/// A command typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play a move such as `c3-d4` or `c3xe5`.
    Move(MoveRequest),
    /// List the legal moves.
    Moves,
    Undo,
    New,
    Board,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line; `None` for anything unrecognised.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        let command = match line.to_ascii_lowercase().as_str() {
            "moves" | "m" => Command::Moves,
            "undo" | "u" => Command::Undo,
            "new" | "n" => Command::New,
            "board" | "b" => Command::Board,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => Command::Move(MoveRequest::from_notation(other)?),
        };
        Some(command)
    }
}

pub const HELP: &str = "\
commands:
  c3-d4   move a piece (also c3xe5 for a capture)
  moves   list legal moves
  undo    take back your last turn
  new     start a new game
  board   show the board
  quit    leave";
