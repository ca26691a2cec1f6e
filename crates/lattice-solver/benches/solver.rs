//! Benchmarks for working lattice multiplications.
//!
//! # Benchmarks
//!
//! - **`solve`**: Builds the lattice, sums its diagonals, and assembles the
//!   product for operand pairs of increasing length.
//! - **`diagonal_summation`**: Sums the diagonals of a prebuilt lattice only.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::{hint, time::Duration};

use criterion::{BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};
use lattice_core::{Lattice, Operand};
use lattice_solver::{DiagonalSummation, LatticeSolution};

const OPERANDS: [(u64, u64); 4] = [
    (321, 12),
    (98_765, 4_321),
    (123_456_789, 987_654_321),
    (u64::MAX, u64::MAX),
];

fn operands(pair: (u64, u64)) -> (Operand, Operand) {
    (Operand::new(pair.0).unwrap(), Operand::new(pair.1).unwrap())
}

fn bench_solve(c: &mut Criterion) {
    for pair in OPERANDS {
        let (a, b) = operands(pair);
        c.bench_with_input(
            BenchmarkId::new("solve", format!("{a}x{b}")),
            &(a, b),
            |bench, &(a, b)| {
                bench.iter(|| LatticeSolution::solve(hint::black_box(a), hint::black_box(b)));
            },
        );
    }
}

fn bench_diagonal_summation(c: &mut Criterion) {
    for pair in OPERANDS {
        let (a, b) = operands(pair);
        let lattice = Lattice::from_operands(a, b);
        c.bench_with_input(
            BenchmarkId::new("diagonal_summation", format!("{a}x{b}")),
            &lattice,
            |bench, lattice| {
                bench.iter(|| DiagonalSummation::run(hint::black_box(lattice)));
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(5));
    targets =
        bench_solve,
        bench_diagonal_summation
);
criterion_main!(benches);
