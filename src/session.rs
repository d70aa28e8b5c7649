//! Imperative shell around a [`Game`].
//!
//! The session owns the one current game value and replaces it with the
//! result of each accepted command. Rejected commands leave it untouched.

use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::command::{Command, HELP};
use crate::config::{CheckpointFormat, Config};
use crate::tictactoe::{Board, Game, GameError, Mark};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),

    #[error("Nothing to undo")]
    AtStart,

    #[error("Nothing to redo")]
    AtEnd,

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// What the front end should print after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Board,
    Moves,
    Help(&'static str),
    Saved(PathBuf),
    Loaded(PathBuf),
    Quit,
}

#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            game: Game::new(config.first_player),
            config,
        }
    }

    pub fn with_game(config: Config, game: Game) -> Self {
        Self { game, config }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn handle(&mut self, command: Command) -> Result<Reply, SessionError> {
        tracing::debug!(?command, "handling command");
        match command {
            Command::Play { square } => {
                self.game = self.game.select_square(square)?;
                Ok(Reply::Board)
            }
            Command::GoTo { step } => {
                self.game = self.game.go_to_step(step)?;
                Ok(Reply::Board)
            }
            Command::Back => {
                let step = self.game.step().checked_sub(1).ok_or(SessionError::AtStart)?;
                self.game = self.game.go_to_step(step)?;
                Ok(Reply::Board)
            }
            Command::Forward => {
                if self.game.history().is_at_latest() {
                    return Err(SessionError::AtEnd);
                }
                self.game = self.game.go_to_step(self.game.step() + 1)?;
                Ok(Reply::Board)
            }
            Command::Moves => Ok(Reply::Moves),
            Command::Save { path } => {
                self.save(&path)?;
                Ok(Reply::Saved(path))
            }
            Command::Load { path } => {
                self.game = load_game(&path, self.config.first_player)?;
                Ok(Reply::Loaded(path))
            }
            Command::New => {
                self.game = Game::new(self.config.first_player);
                Ok(Reply::Board)
            }
            Command::Help => Ok(Reply::Help(HELP)),
            Command::Quit => Ok(Reply::Quit),
        }
    }

    fn save(&self, path: &Path) -> Result<(), SessionError> {
        let checkpoint = self.game.checkpoint();
        let bytes = match self.config.checkpoint_format {
            CheckpointFormat::Json => checkpoint.to_json()?.into_bytes(),
            CheckpointFormat::Binary => checkpoint.to_binary()?,
        };

        // Write `<name>.tmp` next to the target, then rename over it
        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        std::fs::write(&tmp, bytes).map_err(|source| io_error(&tmp, source))?;
        if let Err(source) = std::fs::rename(&tmp, path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(io_error(path, source));
        }
        tracing::info!(path = %path.display(), id = %checkpoint.id, "saved checkpoint");
        Ok(())
    }

    /// Board, status line and the step being shown.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (row, line) in self.game.current_board().to_string().lines().enumerate() {
            let _ = writeln!(out, " {line}   {}", square_hint(row));
        }
        let _ = write!(
            out,
            "{}  (step {} of {})",
            self.game.status(),
            self.game.step(),
            self.game.history().len() - 1
        );
        out
    }

    pub fn render_moves(&self) -> String {
        self.game
            .moves()
            .iter()
            .map(|m| {
                let marker = if m.is_current { '>' } else { ' ' };
                format!("{marker} {:>2}. {}", m.step, m.label)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn square_hint(row: usize) -> String {
    (row * 3..row * 3 + 3).map(|i| i.to_string()).collect()
}

fn io_error(path: &Path, source: std::io::Error) -> SessionError {
    SessionError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Read a checkpoint in either format. JSON files start with `{`.
pub fn load_game(path: &Path, fallback_first: Mark) -> Result<Game, SessionError> {
    let bytes = std::fs::read(path).map_err(|source| io_error(path, source))?;
    let checkpoint = match bytes.iter().copied().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') => {
            let text = String::from_utf8(bytes)
                .map_err(|e| CheckpointError::Decode(e.to_string()))?;
            Checkpoint::<Board>::from_json(&text)?
        }
        _ => Checkpoint::<Board>::from_binary(&bytes)?,
    };
    let game = Game::from_checkpoint(checkpoint, fallback_first)?;
    tracing::info!(path = %path.display(), steps = game.history().len(), "loaded checkpoint");
    Ok(game)
}
