//! Example demonstrating seeded puzzle generation.
//!
//! Generates a puzzle and prints the seed, problem, and solution. Pass a
//! seed to reproduce a specific puzzle:
//!
//! ```sh
//! cargo run --example generate -- --seed 1592111697 --reveals 30
//! ```

use std::process;

use clap::Parser;
use sudotty_generator::PuzzleGenerator;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed to reproduce a puzzle; random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of clue draws.
    #[arg(long, value_name = "COUNT", default_value_t = PuzzleGenerator::DEFAULT_REVEAL_COUNT)]
    reveals: usize,

    /// Board size (must be a perfect square).
    #[arg(long, value_name = "N", default_value_t = 9)]
    size: u8,
}

fn main() {
    let args = Args::parse();
    let generator = PuzzleGenerator::new()
        .with_board_size(args.size)
        .with_reveal_count(args.reveals);

    let result = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };
    let puzzle = match result {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("generation failed: {err}");
            process::exit(1);
        }
    };

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem ({} clues):", puzzle.problem.filled_count());
    println!("{}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("{}", puzzle.solution);
}
