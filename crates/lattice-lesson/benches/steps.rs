//! Benchmarks for deriving lesson steps.
//!
//! # Benchmarks
//!
//! - **`all_steps`**: Builds every step snapshot of a lesson, as the
//!   all-steps view does.
//! - **`last_step`**: Builds only the final snapshot.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench steps
//! ```

use std::{hint, time::Duration};

use criterion::{BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};
use lattice_core::Operand;
use lattice_lesson::Lesson;

const OPERANDS: [(u64, u64); 3] = [(321, 12), (98_765, 4_321), (123_456_789, 987_654_321)];

fn lessons() -> impl Iterator<Item = (String, Lesson)> {
    OPERANDS.into_iter().map(|(a, b)| {
        let lesson = Lesson::new(Operand::new(a).unwrap(), Operand::new(b).unwrap());
        (format!("{a}x{b}"), lesson)
    })
}

fn bench_all_steps(c: &mut Criterion) {
    for (name, lesson) in lessons() {
        c.bench_with_input(BenchmarkId::new("all_steps", name), &lesson, |b, lesson| {
            b.iter(|| hint::black_box(lesson).steps().count());
        });
    }
}

fn bench_last_step(c: &mut Criterion) {
    for (name, lesson) in lessons() {
        c.bench_with_input(BenchmarkId::new("last_step", name), &lesson, |b, lesson| {
            b.iter(|| {
                let lesson = hint::black_box(lesson);
                lesson.step(lesson.last_index())
            });
        });
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(5));
    targets =
        bench_all_steps,
        bench_last_step
);
criterion_main!(benches);
