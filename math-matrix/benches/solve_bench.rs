use criterion::{Criterion, black_box, criterion_group, criterion_main};
use math_audio_matrix::{Matrix, MatrixExpr, SolveConfig, solve, solve_with, transpose};
use rand::Rng;

const N: usize = 100;

fn random_system() -> (Matrix<f64, N, N>, Matrix<f64, N, 1>) {
    let mut rng = rand::rng();
    let mut a = Matrix::from_fn(|_, _| rng.random_range(-1.0..1.0));
    for i in 1..=N {
        a[(i, i)] += N as f64;
    }
    let b = Matrix::from_fn(|_, _| rng.random_range(-100.0..100.0));
    (a, b)
}

fn bench_solve(c: &mut Criterion) {
    let (a, b) = random_system();

    c.bench_function("gauss_solve_100", |bench| {
        bench.iter(|| solve(black_box(&a), black_box(&b)))
    });

    let config = SolveConfig::robust(1e-12);
    c.bench_function("gauss_solve_100_pivoted", |bench| {
        bench.iter(|| solve_with(black_box(&a), black_box(&b), &config))
    });
}

fn bench_expressions(c: &mut Criterion) {
    let (a, _) = random_system();

    c.bench_function("lazy_symmetric_part_100", |bench| {
        bench.iter(|| {
            let sym: Matrix<f64, N, N> = ((&a + transpose(&a)) * 0.5).evaluate().unwrap();
            black_box(sym)
        })
    });

    c.bench_function("eager_dot_100", |bench| bench.iter(|| black_box(a.dot(&a))));
}

criterion_group!(benches, bench_solve, bench_expressions);
criterion_main!(benches);
