use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lifegrid::{Cell, LifeEngine};
use std::{collections::HashSet, hint::black_box};

fn make_living(width: i32, height: i32) -> HashSet<Cell> {
    let mut living = HashSet::new();
    for row in 0..height {
        for col in 0..width {
            if (row + col) % 3 == 0 {
                living.insert(Cell::new(row, col));
            }
        }
    }
    living
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for size in [64, 128, 256] {
        let engine = LifeEngine::new(size, size);
        let living = make_living(size, size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &living, |b, living| {
            b.iter(|| engine.step(black_box(living)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
