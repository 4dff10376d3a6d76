use criterion::{black_box, Criterion, criterion_group, criterion_main};
use utmatrix::{MatVec, TriangularMatrix, Vector};

fn bench_vector_ops(c: &mut Criterion) {
    let n = 100_000;
    let a = Vector::from_vec((0..n).map(|i| (i as f64).sin()).collect(), 0).unwrap();
    let b = Vector::from_vec((0..n).map(|i| (i as f64).cos()).collect(), 0).unwrap();

    c.bench_function("vector dot", |ben| {
        ben.iter(|| black_box(&a).dot(black_box(&b)).unwrap())
    });

    c.bench_function("vector add", |ben| {
        ben.iter(|| black_box(&a).try_add(black_box(&b)).unwrap())
    });

    c.bench_function("vector scalar mul", |ben| {
        ben.iter(|| black_box(&a) * 2.5)
    });
}

fn bench_triangular(c: &mut Criterion) {
    let n = 300;
    let mut m = TriangularMatrix::<f64>::new(n as isize).unwrap();
    for (i, row) in m.rows_mut().enumerate() {
        for (k, value) in row.iter_mut().enumerate() {
            *value = ((i * n + k) as f64).sin();
        }
    }
    let other = m.clone();
    let x: Vec<f64> = (0..n).map(|i| (i as f64).cos()).collect();
    let mut y = vec![0.0; n];

    c.bench_function("triangular add", |ben| {
        ben.iter(|| black_box(&m).try_add(black_box(&other)).unwrap())
    });

    c.bench_function("triangular matvec", |ben| {
        ben.iter(|| m.matvec(black_box(&x), &mut y))
    });
}

criterion_group!(benches, bench_vector_ops, bench_triangular);
criterion_main!(benches);
