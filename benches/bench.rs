use criterion::{black_box, criterion_group, criterion_main, Criterion};

use npuzzle_solver::{solve, Heuristic};

const START_3X2: &[u8] = &[1, 5, 2, 4, 0, 3];
const GOAL_3X2: &[u8] = &[1, 2, 3, 4, 5, 0];

const START_3X3: &[u8] = &[2, 4, 3, 1, 5, 0, 7, 8, 6];
const GOAL_3X3: &[u8] = &[1, 2, 3, 4, 5, 6, 7, 8, 0];

fn criterion_bench(c: &mut Criterion) {
    c.bench_function("zero_3x2", |b| {
        b.iter(|| {
            solve(
                black_box(START_3X2),
                black_box(GOAL_3X2),
                3,
                2,
                Heuristic::Zero,
            )
        })
    });

    c.bench_function("misplaced_3x3", |b| {
        b.iter(|| {
            solve(
                black_box(START_3X3),
                black_box(GOAL_3X3),
                3,
                3,
                Heuristic::Misplaced,
            )
        })
    });

    c.bench_function("manhattan_3x3", |b| {
        b.iter(|| {
            solve(
                black_box(START_3X3),
                black_box(GOAL_3X3),
                3,
                3,
                Heuristic::Manhattan,
            )
        })
    });
}

criterion_group!(benches, criterion_bench);
criterion_main!(benches);
