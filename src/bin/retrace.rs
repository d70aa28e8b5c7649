//! Interactive tic-tac-toe with time travel.
//!
//! Reads one command per line from stdin. Run `retrace --help` for flags and
//! type `help` at the prompt for commands.

use anyhow::{Context, Result};
use clap::Parser;
use retrace::command::Command;
use retrace::config::Config;
use retrace::session::{load_game, Reply, Session};
use retrace::tictactoe::Mark;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "retrace", about = "Tic-tac-toe with a rewindable move history")]
struct Cli {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Resume from a checkpoint written by `save`
    #[arg(long)]
    resume: Option<PathBuf>,

    /// Who moves first (overrides the config file)
    #[arg(long, value_parser = parse_mark)]
    first: Option<Mark>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn parse_mark(text: &str) -> Result<Mark, String> {
    match text {
        "x" | "X" => Ok(Mark::X),
        "o" | "O" => Ok(Mark::O),
        other => Err(format!("expected x or o, got '{other}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(first) = cli.first {
        config.first_player = first;
    }

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!("retrace starting");

    let mut session = match &cli.resume {
        Some(path) => {
            let game = load_game(path, config.first_player)
                .with_context(|| format!("Failed to resume from {}", path.display()))?;
            Session::with_game(config, game)
        }
        None => Session::new(config),
    };

    run(&mut session, io::stdin().lock(), io::stdout().lock())
}

fn run(session: &mut Session, input: impl BufRead, mut out: impl Write) -> Result<()> {
    writeln!(out, "{}", session.render())?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            write!(out, "> ")?;
            out.flush()?;
            continue;
        }

        let reply = Command::parse(&line)
            .map_err(anyhow::Error::from)
            .and_then(|command| session.handle(command).map_err(anyhow::Error::from));

        match reply {
            Ok(Reply::Quit) => return Ok(()),
            Ok(Reply::Board) => writeln!(out, "{}", session.render())?,
            Ok(Reply::Moves) => writeln!(out, "{}", session.render_moves())?,
            Ok(Reply::Help(text)) => writeln!(out, "{text}")?,
            Ok(Reply::Saved(path)) => writeln!(out, "saved to {}", path.display())?,
            Ok(Reply::Loaded(path)) => {
                writeln!(out, "loaded {}", path.display())?;
                writeln!(out, "{}", session.render())?;
            }
            Err(e) => writeln!(out, "error: {e}")?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }

    Ok(())
}
