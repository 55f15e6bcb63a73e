#![warn(clippy::all)]

use anyhow::{Context, Result};
use conway_board::Board;
use tracing_subscriber::EnvFilter;

const GENERATIONS_VAR: &str = "CONWAY_GENERATIONS";
const DEFAULT_GENERATIONS: u64 = 31;

// a glider in the top-left corner and a blinker near the bottom-right one
const SEED_CELLS: [(i64, i64); 8] = [
    (0, 2),
    (1, 0),
    (1, 2),
    (2, 1),
    (2, 2),
    (6, 7),
    (7, 7),
    (8, 7),
];

fn generations() -> Result<u64> {
    match std::env::var(GENERATIONS_VAR) {
        Ok(value) => value.parse().with_context(|| {
            format!(
                "{} must be a non-negative integer, got {:?}",
                GENERATIONS_VAR, value
            )
        }),
        Err(_) => Ok(DEFAULT_GENERATIONS),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut board = Board::new(10, 10)?;
    for (i, j) in SEED_CELLS {
        board.set_cell(i, j, true)?;
    }
    println!("{}", board);

    for i in 0..generations()? {
        board.iterate_once();
        println!("Iteration {}:", i);
        println!("{}", board);
    }

    board.resize(5, 5)?;
    println!("Resized to 5x5:");
    println!("{}", board);
    board.resize(10, 10)?;
    println!("Resized back to 10x10:");
    println!("{}", board);

    println!(
        "Population after {} generations: {}",
        board.generation(),
        board.population()
    );
    Ok(())
}
