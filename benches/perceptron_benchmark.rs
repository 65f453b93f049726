use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_perceptron::{matrix::Matrix2, neural::Perceptron};

fn train_or(iterations: usize) {
    let mut p = Perceptron::new(2, 1).unwrap();

    let inputs: Matrix2<f64> = Matrix2::from_array([[0, 0], [0, 1], [1, 0], [1, 1]]).into();
    let targets: Matrix2<f64> = Matrix2::from_array([[0], [1], [1], [1]]).into();

    assert_eq!(Ok(()), p.train(&inputs, &targets, iterations));
}

fn train_wide(iterations: usize) {
    let mut p = Perceptron::new(16, 8).unwrap();

    let inputs = Matrix2::new(64, 16);
    let targets = Matrix2::new(64, 8);

    assert_eq!(Ok(()), p.train(&inputs, &targets, iterations));
}

fn activate(p: &Perceptron, inputs: &Matrix2<f64>) {
    assert!(p.activate(inputs).is_ok());
}

fn bench_activate(c: &mut Criterion) {
    let small = Perceptron::new(2, 1).unwrap();
    let wide = Perceptron::new(16, 8).unwrap();

    let input_small = Matrix2::new(10, 2);
    let input_medium = Matrix2::new(1_000, 2);
    let input_wide_small = Matrix2::new(10, 16);
    let input_wide_medium = Matrix2::new(1_000, 16);

    c.bench_function("activate small 10 inputs", |b| {
        b.iter(|| activate(black_box(&small), black_box(&input_small)))
    });
    c.bench_function("activate small 1,000 inputs", |b| {
        b.iter(|| activate(black_box(&small), black_box(&input_medium)))
    });

    c.bench_function("activate wide 10 inputs", |b| {
        b.iter(|| activate(black_box(&wide), black_box(&input_wide_small)))
    });
    c.bench_function("activate wide 1,000 inputs", |b| {
        b.iter(|| activate(black_box(&wide), black_box(&input_wide_medium)))
    });
}

fn bench_train_or(c: &mut Criterion) {
    c.bench_function("train or 10 iterations", |b| {
        b.iter(|| train_or(black_box(10)))
    });
    c.bench_function("train or 10,000 iterations", |b| {
        b.iter(|| train_or(black_box(10_000)))
    });
}

fn bench_train_wide(c: &mut Criterion) {
    c.bench_function("train wide 10 iterations", |b| {
        b.iter(|| train_wide(black_box(10)))
    });
    c.bench_function("train wide 1,000 iterations", |b| {
        b.iter(|| train_wide(black_box(1_000)))
    });
}

criterion_group!(benches, bench_activate, bench_train_or, bench_train_wide);
criterion_main!(benches);
