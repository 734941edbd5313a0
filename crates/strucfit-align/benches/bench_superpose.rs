use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use strucfit_align::{rmsd, tm_score, Superposition};

fn create_random_points(num_points: usize) -> Vec<[f64; 3]> {
    (0..num_points)
        .map(|_| {
            [
                rand::random::<f64>() * 10.0,
                rand::random::<f64>() * 10.0,
                rand::random::<f64>() * 10.0,
            ]
        })
        .collect()
}

fn bench_superposition(c: &mut Criterion) {
    let mut group = c.benchmark_group("superposition");

    for num_points in [10, 100, 1000, 10000].iter() {
        group.throughput(criterion::Throughput::Elements(*num_points as u64));
        let parameter_string = format!("{}", num_points);

        let fixed = create_random_points(*num_points);
        let moving = create_random_points(*num_points);

        group.bench_with_input(
            BenchmarkId::new("superposition", &parameter_string),
            &(&fixed, &moving),
            |b, i| {
                let (fixed, moving) = (i.0, i.1);
                b.iter(|| {
                    let superposition = Superposition::new(fixed, moving).unwrap();
                    black_box(superposition);
                });
            },
        );
    }
}

fn bench_scores(c: &mut Criterion) {
    let mut group = c.benchmark_group("scores");

    for num_points in [10, 100, 1000, 10000].iter() {
        group.throughput(criterion::Throughput::Elements(*num_points as u64));
        let parameter_string = format!("{}", num_points);

        let first = create_random_points(*num_points);
        let second = create_random_points(*num_points);

        group.bench_with_input(
            BenchmarkId::new("rmsd", &parameter_string),
            &(&first, &second),
            |b, i| {
                let (first, second) = (i.0, i.1);
                b.iter(|| {
                    let score = rmsd(first, second).unwrap();
                    black_box(score);
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("tm_score", &parameter_string),
            &(&first, &second),
            |b, i| {
                let (first, second) = (i.0, i.1);
                b.iter(|| {
                    let score = tm_score(first, second, first.len(), second.len()).unwrap();
                    black_box(score);
                });
            },
        );
    }
}

criterion_group!(benches, bench_superposition, bench_scores);
criterion_main!(benches);
