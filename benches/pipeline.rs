//! Benchmarks for the artgen pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use artgen::{evaluate, seeded_rng, synthesize, ChannelTrees, TreeBuilder};

// -- Building benchmarks --

fn bench_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("building");
    let builder = TreeBuilder::default();

    group.bench_function("build_tree_7_9", |b| {
        let mut rng = seeded_rng(1);
        b.iter(|| builder.build(&mut rng, black_box(7), black_box(9)))
    });

    group.bench_function("build_channels_7_9", |b| {
        let mut rng = seeded_rng(2);
        b.iter(|| ChannelTrees::build(&builder, &mut rng, black_box(7), black_box(9)))
    });

    group.finish();
}

// -- Evaluation benchmarks --

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation");
    let tree = TreeBuilder::default().build(&mut seeded_rng(3), 7, 9);

    group.bench_function("evaluate_point", |b| {
        b.iter(|| evaluate(black_box(&tree), black_box(0.25), black_box(-0.5)))
    });

    group.finish();
}

// -- Synthesis benchmarks --

fn bench_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesis");
    let trees = ChannelTrees::build(&TreeBuilder::default(), &mut seeded_rng(4), 7, 9);

    group.bench_function("synthesize_64x64", |b| {
        b.iter(|| synthesize(black_box(&trees), 64, 64).unwrap())
    });

    group.bench_function("synthesize_350x350", |b| {
        b.iter(|| synthesize(black_box(&trees), 350, 350).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_building, bench_evaluation, bench_synthesis);
criterion_main!(benches);
