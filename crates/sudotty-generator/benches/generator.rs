//! Benchmarks for seeded puzzle generation.
//!
//! Measures the complete generation path (backtracking fill plus clue
//! reveal) for a handful of fixed seeds, so runs stay reproducible while
//! still covering several search shapes.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sudotty_generator::PuzzleGenerator;

const SEEDS: [u64; 3] = [42, 1_592_111_697, 0xdead_beef];

fn bench_generate(c: &mut Criterion) {
    let generator = PuzzleGenerator::new();

    for seed in SEEDS {
        c.bench_with_input(
            BenchmarkId::new("generate", format!("seed_{seed}")),
            &seed,
            |b, &seed| {
                b.iter(|| generator.generate_with_seed(hint::black_box(seed)));
            },
        );
    }
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
