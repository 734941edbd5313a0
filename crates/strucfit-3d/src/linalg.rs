use crate::utils;

/// Transform a set of points using a rotation and translation.
///
/// Points are treated as row vectors: each destination point is `p · R + t`.
///
/// # Arguments
///
/// * `src_points` - A set of points to be transformed.
/// * `rotation` - A rotation matrix.
/// * `translation` - A translation vector.
/// * `dst_points` - A pre-allocated vector to store the transformed points.
///
/// PRECONDITION: dst_points is a pre-allocated vector of the same size as source.
///
/// Example:
///
/// ```
/// use strucfit_3d::linalg::transform_points3d;
///
/// let src_points = vec![[2.0, 2.0, 2.0], [3.0, 4.0, 5.0]];
/// let rotation = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
/// let translation = [0.0, 0.0, 0.0];
/// let mut dst_points = vec![[0.0; 3]; src_points.len()];
/// transform_points3d(&src_points, &rotation, &translation, &mut dst_points).unwrap();
/// ```
pub fn transform_points3d(
    src_points: &[[f64; 3]],
    rotation: &[[f64; 3]; 3],
    translation: &[f64; 3],
    dst_points: &mut [[f64; 3]],
) -> Result<(), &'static str> {
    if src_points.len() != dst_points.len() {
        return Err("source and destination points must have the same length");
    }

    // create views of the rotation and translation matrices
    let rotation_mat = utils::array33_to_faer_mat33(rotation);
    let translation_col = utils::array3_to_faer_col(translation);

    // create view of the source points
    let points_in_src = {
        let src_points_slice = unsafe {
            std::slice::from_raw_parts(src_points.as_ptr() as *const f64, src_points.len() * 3)
        };
        // SAFETY: src_points_slice is an Nx3 matrix where each row represents a 3D point
        faer::mat::from_row_major_slice(src_points_slice, src_points.len(), 3)
    };

    // create a mutable view of the destination points
    let mut points_in_dst = {
        let dst_points_slice = unsafe {
            std::slice::from_raw_parts_mut(
                dst_points.as_mut_ptr() as *mut f64,
                dst_points.len() * 3,
            )
        };
        // SAFETY: dst_points_slice is a 3xN matrix where each column represents a 3D point
        faer::mat::from_column_major_slice_mut(dst_points_slice, 3, dst_points.len())
    };

    // row convention: dstᵀ = Rᵀ · srcᵀ, computed on the transposed views
    faer::linalg::matmul::matmul(
        &mut points_in_dst,
        rotation_mat.transpose(),
        points_in_src.transpose(),
        None,
        1.0,
        faer::Parallelism::None,
    );

    // SAFETY: translation is guaranteed to be length 3 by construction
    let (tx, ty, tz) = unsafe {
        (
            translation_col.read_unchecked(0),
            translation_col.read_unchecked(1),
            translation_col.read_unchecked(2),
        )
    };

    // SAFETY: points_in_dst is a 3xN matrix where each column represents a 3D point
    // The unchecked reads/writes are within bounds as we're only accessing indices 0,1,2
    for mut col in points_in_dst.col_iter_mut() {
        unsafe {
            col.write_unchecked(0, col.read_unchecked(0) + tx);
            col.write_unchecked(1, col.read_unchecked(1) + ty);
            col.write_unchecked(2, col.read_unchecked(2) + tz);
        }
    }

    Ok(())
}

/// Multiply two 3x3 matrices into a pre-allocated output.
///
/// # Arguments
///
/// * `a` - The left matrix.
/// * `b` - The right matrix.
/// * `m` - A pre-allocated matrix to store the product `a · b`.
pub fn matmul33(a: &[[f64; 3]; 3], b: &[[f64; 3]; 3], m: &mut [[f64; 3]; 3]) {
    for (i, row) in m.iter_mut().enumerate() {
        for (j, val) in row.iter_mut().enumerate() {
            *val = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
        }
    }
}

/// Transpose of a 3x3 matrix.
pub fn transpose33(m: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    [
        [m[0][0], m[1][0], m[2][0]],
        [m[0][1], m[1][1], m[2][1]],
        [m[0][2], m[1][2], m[2][2]],
    ]
}

/// Determinant of a 3x3 matrix.
///
/// Example:
///
/// ```
/// use strucfit_3d::linalg::det33;
///
/// let identity = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
/// assert_eq!(det33(&identity), 1.0);
/// ```
pub fn det33(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}
