use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use strucfit_3d::{linalg, utils};

// transform_points3d_col using faer with cols point by point
fn transform_points3d_col(
    src_points: &[[f64; 3]],
    rotation: &[[f64; 3]; 3],
    translation: &[f64; 3],
    dst_points: &mut [[f64; 3]],
) {
    assert_eq!(src_points.len(), dst_points.len());

    let rotation_mat = faer::Mat::<f64>::from_fn(3, 3, |i, j| rotation[i][j]);
    let translation_col = faer::col![translation[0], translation[1], translation[2]];

    for (point_dst, point_src) in dst_points.iter_mut().zip(src_points.iter()) {
        let point_src_col = faer::col![point_src[0], point_src[1], point_src[2]];
        let point_dst_col = rotation_mat.transpose() * point_src_col + &translation_col;
        for (i, point_dst_col_val) in point_dst_col.iter().enumerate().take(3) {
            point_dst[i] = *point_dst_col_val;
        }
    }
}

fn bench_transform_points3d(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_points3d");

    for num_points in [100, 1000, 10000, 100000].iter() {
        group.throughput(criterion::Throughput::Elements(*num_points as u64));
        let parameter_string = format!("{}", num_points);

        let src_points = vec![[2.0, 2.0, 2.0]; *num_points];
        let rotation = [[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        let translation = [1.0, 2.0, 3.0];
        let mut dst_points = vec![[0.0; 3]; src_points.len()];

        group.bench_with_input(
            BenchmarkId::new("transform_points3d", &parameter_string),
            &(&src_points, &rotation, &translation, &mut dst_points),
            |b, i| {
                let (src, rot, trans, mut dst) = (i.0, i.1, i.2, i.3.clone());
                b.iter(|| {
                    linalg::transform_points3d(src, rot, trans, &mut dst).unwrap();
                    black_box(());
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("transform_points3d_col", &parameter_string),
            &(&src_points, &rotation, &translation, &mut dst_points),
            |b, i| {
                let (src, rot, trans, mut dst) = (i.0, i.1, i.2, i.3.clone());
                b.iter(|| {
                    transform_points3d_col(src, rot, trans, &mut dst);
                    black_box(());
                });
            },
        );
    }
}

// matmul33 through faer views, for comparison against the unrolled version
fn matmul33_faer(a: &[[f64; 3]; 3], b: &[[f64; 3]; 3], m: &mut [[f64; 3]; 3]) {
    let a_mat = utils::array33_to_faer_mat33(a);
    let b_mat = utils::array33_to_faer_mat33(b);
    let prod = a_mat * b_mat;
    *m = utils::faer_mat33_to_array33(prod.as_ref());
}

fn bench_matmul33(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul33");

    let a_mat = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
    let b_mat = [[9.0, 8.0, 7.0], [6.0, 5.0, 4.0], [3.0, 2.0, 1.0]];
    let mut m_mat = [[0.0; 3]; 3];

    group.bench_function(BenchmarkId::new("matmul33", ""), |b| {
        b.iter(|| {
            linalg::matmul33(&a_mat, &b_mat, &mut m_mat);
            black_box(());
        });
    });

    group.bench_function(BenchmarkId::new("matmul33_faer", ""), |b| {
        b.iter(|| {
            matmul33_faer(&a_mat, &b_mat, &mut m_mat);
            black_box(());
        });
    });
}

criterion_group!(benches, bench_transform_points3d, bench_matmul33);
criterion_main!(benches);
