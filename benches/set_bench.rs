use criterion::{black_box, criterion_group, criterion_main, Criterion};
use universe_set::prelude::*;

fn universe_benchmark(c: &mut Criterion) {
    c.bench_function("universe_new_4096", |b| {
        b.iter(|| {
            let universe: Universe<usize> = (0..4096).collect();
            black_box(universe)
        })
    });

    let universe: Universe<usize> = (0..4096).collect();
    c.bench_function("universe_position_of", |b| {
        b.iter(|| black_box(universe.position_of(&2048)))
    });
}

fn insert_benchmark(c: &mut Criterion) {
    let universe: Universe<usize> = (0..4096).collect();

    c.bench_function("insert_4096_positions", |b| {
        b.iter(|| {
            let mut subset = universe.empty_subset();
            for pos in 0..4096 {
                subset.insert(black_box(pos));
            }
            black_box(subset)
        })
    });

    let subset = universe.subset_from((0..4096).step_by(7)).unwrap();
    c.bench_function("contains_4096_queries", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for pos in 0..4096 {
                if subset.contains(black_box(pos)) {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
}

fn algebra_benchmark(c: &mut Criterion) {
    let universe: Universe<usize> = (0..4096).collect();
    let evens = universe.subset_from((0..4096).step_by(2)).unwrap();
    let thirds = universe.subset_from((0..4096).step_by(3)).unwrap();

    c.bench_function("union_4096_bits", |b| {
        b.iter(|| black_box(evens.union(&thirds).unwrap()))
    });

    c.bench_function("intersection_4096_bits", |b| {
        b.iter(|| black_box(evens.intersection(&thirds).unwrap()))
    });

    c.bench_function("symmetric_difference_4096_bits", |b| {
        b.iter(|| black_box(evens.symmetric_difference(&thirds).unwrap()))
    });

    c.bench_function("complement_4096_bits", |b| {
        b.iter(|| black_box(evens.complement()))
    });
}

fn iteration_benchmark(c: &mut Criterion) {
    let universe: Universe<usize> = (0..4096).collect();
    let dense = universe.subset_from(0..4096).unwrap();
    let sparse = universe.subset_from((0..4096).step_by(64)).unwrap();

    c.bench_function("iterate_dense_4096", |b| {
        b.iter(|| {
            let mut sum = 0usize;
            for elem in &dense {
                sum += elem;
            }
            black_box(sum)
        })
    });

    c.bench_function("iterate_sparse_64_of_4096", |b| {
        b.iter(|| {
            let mut sum = 0usize;
            for elem in &sparse {
                sum += elem;
            }
            black_box(sum)
        })
    });

    c.bench_function("positions_sparse_64_of_4096", |b| {
        b.iter(|| black_box(sparse.positions().count()))
    });
}

criterion_group!(
    benches,
    universe_benchmark,
    insert_benchmark,
    algebra_benchmark,
    iteration_benchmark
);
criterion_main!(benches);
