use std::str::FromStr;

use tictactoe_common::games::tictactoe::{CELL_COUNT, Difficulty, GameMode};

pub const HELP_TEXT: &str = "\
Commands:
  1-9                 place your mark (1 is top-left, 9 is bottom-right)
  r, reset            start a new game
  mode <m>            two-player or vs-computer (starts a new game)
  difficulty <d>      easy, medium or hard (starts a new game)
  help                show this text
  q, quit             leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index.
    Place(usize),
    Reset,
    Mode(GameMode),
    Difficulty(Difficulty),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(head) = words.next() else {
            return Err("Type a cell number 1-9, or 'help'".to_string());
        };
        let argument = words.next();
        if words.next().is_some() {
            return Err(format!("Too many words in '{}'", s.trim()));
        }

        match (head.to_ascii_lowercase().as_str(), argument) {
            ("r" | "reset", None) => Ok(Command::Reset),
            ("help" | "h" | "?", None) => Ok(Command::Help),
            ("q" | "quit" | "exit", None) => Ok(Command::Quit),
            ("mode", Some(value)) => value.parse().map(Command::Mode),
            ("difficulty", Some(value)) => value.parse().map(Command::Difficulty),
            ("mode" | "difficulty", None) => Err(format!("'{}' needs a value", head)),
            (word, None) => parse_cell(word),
            _ => Err(format!("Unknown command '{}'", s.trim())),
        }
    }
}

fn parse_cell(word: &str) -> Result<Command, String> {
    let number: usize = word
        .parse()
        .map_err(|_| format!("Unknown command '{}', type 'help'", word))?;
    if !(1..=CELL_COUNT).contains(&number) {
        return Err(format!("Cell must be between 1 and {}", CELL_COUNT));
    }
    Ok(Command::Place(number - 1))
}
