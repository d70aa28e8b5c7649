//! Replay and Branch
//!
//! This example plays a short game, rewinds it, and plays a different line.
//!
//! Key concepts:
//! - Every move appends an immutable board to the history
//! - Going back only moves the cursor; nothing is lost until the next move
//! - A move made after going back discards the abandoned future
//! - Checkpoints capture the whole history for later resumption
//!
//! Run with: cargo run --example replay

use retrace::tictactoe::{Game, GameError, Mark};

fn show(title: &str, game: &Game) {
    println!("--- {title} ---");
    println!("{}", game.current_board());
    println!("{}", game.status());
    for entry in game.moves() {
        let marker = if entry.is_current { "->" } else { "  " };
        println!("{marker} {}", entry.label);
    }
    println!();
}

fn main() -> Result<(), GameError> {
    println!("=== Replay and Branch Example ===\n");

    let mut game = Game::new(Mark::X);
    for square in [4, 0, 8, 2] {
        game = game.select_square(square)?;
    }
    show("After four moves", &game);

    let rewound = game.go_to_step(2)?;
    show("Back at move #2 (future still listed)", &rewound);

    let branched = rewound.select_square(6)?;
    show("New move after going back (future discarded)", &branched);

    let checkpoint = branched.checkpoint();
    match checkpoint.to_json() {
        Ok(json) => println!("Checkpoint is {} bytes of JSON", json.len()),
        Err(e) => println!("Checkpoint failed: {e}"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
