//! Basic example of driving the puzzle engine

use slide_core::{Board, Difficulty, Engine, RecordStore};

fn main() {
    // Generate a puzzle
    println!("Shuffling a Medium board...\n");
    let engine = Engine::with_seed(Difficulty::Medium, 42);
    println!("{}", engine.board());

    // Drive a position we can finish by hand: one tile out of place
    let board = Board::from_cells([1, 0, 2, 3, 4, 5, 6, 7, 8]).expect("valid permutation");
    let mut engine = Engine::from_board(board);

    // Cell 5 is not next to the blank, so nothing happens
    let rejected = engine.attempt_move(5);
    println!("sliding cell 5: moved={}", rejected.moved);

    // Cell 0 is, and sliding it finishes the puzzle
    let outcome = engine.attempt_move(0);
    println!(
        "sliding cell 0: moved={} solved={}",
        outcome.moved, outcome.solved
    );
    println!("\nSolved in {} moves", engine.moves());

    // Best records persist as a single integer
    let path = std::env::temp_dir().join("slide_basic_record.json");
    let mut store = RecordStore::open(&path);
    match store.record_win(engine.moves()) {
        Ok(best) => println!("Best on file: {}", best),
        Err(err) => eprintln!("Warning: record not saved: {}", err),
    }
}
