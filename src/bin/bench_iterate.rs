use conway_board::Board;
use std::time::Instant;

const SIDE: i64 = 2048;
const GENERATIONS: u64 = 64;

fn main() {
    let timer = Instant::now();
    let mut board = Board::random(SIDE, SIDE, Some(42), None).expect("failed to build board");
    println!("Time to build board: {:?}", timer.elapsed());

    let timer = Instant::now();
    board.iterate(GENERATIONS);
    let elapsed = timer.elapsed();
    println!("Time on {} generations: {:?}", GENERATIONS, elapsed);
    println!(
        "Cells per second: {:.3e}",
        (SIDE * SIDE) as f64 * GENERATIONS as f64 / elapsed.as_secs_f64()
    );
    println!("Population: {}", board.population());
}
