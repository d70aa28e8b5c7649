//! Text commands for the terminal front end.
//!
//! Each input line parses into one [`Command`]. Parsing is pure so the
//! shell loop only has to dispatch.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place the next mark on a square (0-8)
    Play { square: usize },
    /// Jump to a recorded step
    GoTo { step: usize },
    /// Step the cursor back by one
    Back,
    /// Step the cursor forward by one
    Forward,
    /// Print the move list
    Moves,
    /// Write a checkpoint
    Save { path: PathBuf },
    /// Resume from a checkpoint
    Load { path: PathBuf },
    /// Discard the game and start over
    New,
    Help,
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{command}' needs an argument: {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("{what} {value} is out of range")]
    NegativeIndex { what: &'static str, value: i64 },

    #[error("Unexpected extra input '{0}'")]
    TrailingInput(String),
}

pub const HELP: &str = "\
commands:
  play <0-8>     place the next mark (a bare number works too)
  goto <step>    show the board at a recorded step
  back, forward  step through the history
  moves          list recorded steps
  save <path>    write a checkpoint
  load <path>    resume from a checkpoint
  new            start a new game
  help           show this text
  quit           leave";

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or(CommandError::Empty)?;
        let arg = words.next();
        if let Some(extra) = words.next() {
            return Err(CommandError::TrailingInput(extra.to_string()));
        }

        let command = match head.to_ascii_lowercase().as_str() {
            "play" | "p" => Command::Play {
                square: parse_index(require(arg, "play", "a square 0-8")?, "Square")?,
            },
            "goto" | "g" => Command::GoTo {
                step: parse_index(require(arg, "goto", "a step number")?, "Step")?,
            },
            "back" | "b" | "undo" => Command::Back,
            "forward" | "f" | "redo" => Command::Forward,
            "moves" | "m" | "history" => Command::Moves,
            "save" => Command::Save {
                path: require(arg, "save", "a file path")?.into(),
            },
            "load" => Command::Load {
                path: require(arg, "load", "a file path")?.into(),
            },
            "new" => Command::New,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other if other.chars().all(|c| c.is_ascii_digit()) => {
                if let Some(extra) = arg {
                    return Err(CommandError::TrailingInput(extra.to_string()));
                }
                Command::Play {
                    square: parse_index(other, "Square")?,
                }
            }
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        if let (Some(extra), false) = (arg, command.takes_argument()) {
            return Err(CommandError::TrailingInput(extra.to_string()));
        }
        Ok(command)
    }

    fn takes_argument(&self) -> bool {
        matches!(
            self,
            Command::Play { .. } | Command::GoTo { .. } | Command::Save { .. } | Command::Load { .. }
        )
    }
}

fn require<'a>(
    arg: Option<&'a str>,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    arg.ok_or(CommandError::MissingArgument { command, expected })
}

/// Parse a signed number and refuse negatives, so `goto -1` is reported as
/// out of range rather than as garbage.
fn parse_index(text: &str, what: &'static str) -> Result<usize, CommandError> {
    let value: i64 = text
        .parse()
        .map_err(|_| CommandError::InvalidNumber(text.to_string()))?;
    usize::try_from(value).map_err(|_| CommandError::NegativeIndex { what, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_play() {
        assert_eq!(Command::parse("play 4"), Ok(Command::Play { square: 4 }));
        assert_eq!(Command::parse("  P 0 "), Ok(Command::Play { square: 0 }));
        assert_eq!(Command::parse("7"), Ok(Command::Play { square: 7 }));
    }

    #[test]
    fn parses_navigation() {
        assert_eq!(Command::parse("goto 3"), Ok(Command::GoTo { step: 3 }));
        assert_eq!(Command::parse("back"), Ok(Command::Back));
        assert_eq!(Command::parse("redo"), Ok(Command::Forward));
        assert_eq!(Command::parse("moves"), Ok(Command::Moves));
    }

    #[test]
    fn negative_goto_is_out_of_range() {
        assert_eq!(
            Command::parse("goto -1"),
            Err(CommandError::NegativeIndex {
                what: "Step",
                value: -1
            })
        );
    }

    #[test]
    fn negative_square_names_the_square() {
        let err = Command::parse("play -1").unwrap_err();
        assert_eq!(
            err,
            CommandError::NegativeIndex {
                what: "Square",
                value: -1
            }
        );
        assert_eq!(err.to_string(), "Square -1 is out of range");
    }

    #[test]
    fn parses_paths() {
        assert_eq!(
            Command::parse("save game.json"),
            Ok(Command::Save {
                path: PathBuf::from("game.json")
            })
        );
        assert_eq!(
            Command::parse("load /tmp/g.bin"),
            Ok(Command::Load {
                path: PathBuf::from("/tmp/g.bin")
            })
        );
    }

    #[test]
    fn missing_argument_is_reported() {
        assert!(matches!(
            Command::parse("play"),
            Err(CommandError::MissingArgument { command: "play", .. })
        ));
        assert!(matches!(
            Command::parse("save"),
            Err(CommandError::MissingArgument { command: "save", .. })
        ));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(Command::parse(""), Err(CommandError::Empty));
        assert_eq!(
            Command::parse("jump"),
            Err(CommandError::Unknown("jump".to_string()))
        );
        assert_eq!(
            Command::parse("play four"),
            Err(CommandError::InvalidNumber("four".to_string()))
        );
        assert_eq!(
            Command::parse("quit now"),
            Err(CommandError::TrailingInput("now".to_string()))
        );
        assert_eq!(
            Command::parse("3 4"),
            Err(CommandError::TrailingInput("4".to_string()))
        );
        assert_eq!(
            Command::parse("play 1 2"),
            Err(CommandError::TrailingInput("2".to_string()))
        );
    }
}
