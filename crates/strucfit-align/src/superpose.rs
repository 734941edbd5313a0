use serde::Serialize;

use crate::error::AlignError;
use strucfit_3d::{linalg, ops, utils};

/// Optimal rigid-body superposition of two matched point sets.
///
/// Computes the proper rotation and translation that best overlay a moving
/// point set onto a fixed one in the least-squares sense, via singular value
/// decomposition of the cross-covariance matrix of the centered sets (the
/// Kabsch algorithm). When the unconstrained SVD optimum is a reflection, the
/// right singular vector of the smallest singular value is negated so that
/// the rotation always has determinant +1.
///
/// The whole computation happens at construction and the result is immutable.
/// Points are treated as row vectors: a point `p` in the moving frame maps
/// into the fixed frame as `p · R + t`. The transform can be applied to any
/// point derived from the moving structure, not just the fitted subset.
///
/// Example:
///
/// ```
/// use strucfit_align::Superposition;
///
/// // the fixed fragment is the moving one rotated 90 degrees about z
/// let fixed = vec![[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]];
/// let moving = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
///
/// let superposition = Superposition::new(&fixed, &moving)?;
/// let det = strucfit_3d::linalg::det33(superposition.rotation());
/// assert!((det - 1.0).abs() < 1e-9);
/// # Ok::<(), strucfit_align::AlignError>(())
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Superposition {
    rotation: [[f64; 3]; 3],
    translation: [f64; 3],
    fixed_centroid: [f64; 3],
    moving_centroid: [f64; 3],
}

impl Superposition {
    /// Compute the superposition of `moving` onto `fixed`.
    ///
    /// A single point pair is degenerate but defined: the rotation carries no
    /// information, while the translation still maps the moving point onto
    /// the fixed one.
    ///
    /// # Arguments
    ///
    /// * `fixed` - Point set kept in place.
    /// * `moving` - Point set to be mapped onto `fixed`; point `i` of `moving`
    ///   corresponds to point `i` of `fixed`.
    ///
    /// # Errors
    ///
    /// Returns [`AlignError::MismatchedLengths`] if the two sets differ in
    /// size, and [`AlignError::EmptyPointSets`] if they contain no points.
    pub fn new(fixed: &[[f64; 3]], moving: &[[f64; 3]]) -> Result<Self, AlignError> {
        if fixed.len() != moving.len() {
            return Err(AlignError::MismatchedLengths(fixed.len(), moving.len()));
        }
        if fixed.is_empty() {
            return Err(AlignError::EmptyPointSets);
        }

        let fixed_centroid = ops::centroid(fixed);
        let moving_centroid = ops::centroid(moving);

        // centered copies; the caller's data stays untouched
        let fixed_centered = ops::center_points(fixed, &fixed_centroid);
        let moving_centered = ops::center_points(moving, &moving_centroid);

        // create views of the centered sets as Nx3 matrices
        let fixed_mat = {
            let fixed_slice = unsafe {
                std::slice::from_raw_parts(
                    fixed_centered.as_ptr() as *const f64,
                    fixed_centered.len() * 3,
                )
            };
            // SAFETY: fixed_slice is an Nx3 matrix where each row represents a 3D point
            faer::mat::from_row_major_slice(fixed_slice, fixed_centered.len(), 3)
        };
        let moving_mat = {
            let moving_slice = unsafe {
                std::slice::from_raw_parts(
                    moving_centered.as_ptr() as *const f64,
                    moving_centered.len() * 3,
                )
            };
            // SAFETY: moving_slice is an Nx3 matrix where each row represents a 3D point
            faer::mat::from_row_major_slice(moving_slice, moving_centered.len(), 3)
        };

        // cross-covariance of the centered sets: C = movingᵀ · fixed
        let mut covariance = faer::Mat::<f64>::zeros(3, 3);
        faer::linalg::matmul::matmul(
            &mut covariance,
            moving_mat.transpose(),
            fixed_mat,
            None,
            1.0,
            faer::Parallelism::None,
        );

        // the right singular vectors come back as the columns of v
        let svd = covariance.svd();
        let u = utils::faer_mat33_to_array33(svd.u());
        let mut v = utils::faer_mat33_to_array33(svd.v());

        let mut rotation = rotation_from_factors(&v, &u);

        let det = linalg::det33(&rotation);
        if det < 0.0 {
            // the unconstrained optimum is a reflection; negating the right
            // singular vector of the smallest singular value restores a
            // proper rotation
            log::debug!("svd yielded a reflection (det = {det}), negating third singular vector");
            for row in v.iter_mut() {
                row[2] = -row[2];
            }
            rotation = rotation_from_factors(&v, &u);
        }

        // maps the moving centroid onto the fixed centroid
        let mut translation = [0.0; 3];
        for (j, val) in translation.iter_mut().enumerate() {
            *val = fixed_centroid[j]
                - (moving_centroid[0] * rotation[0][j]
                    + moving_centroid[1] * rotation[1][j]
                    + moving_centroid[2] * rotation[2][j]);
        }

        Ok(Self {
            rotation,
            translation,
            fixed_centroid,
            moving_centroid,
        })
    }

    /// The rotation of the transform, acting on row vectors.
    ///
    /// Always a proper rotation: orthonormal with determinant +1.
    pub fn rotation(&self) -> &[[f64; 3]; 3] {
        &self.rotation
    }

    /// The translation of the transform, applied after the rotation.
    pub fn translation(&self) -> &[f64; 3] {
        &self.translation
    }

    /// Centroid of the fixed point set.
    pub fn fixed_centroid(&self) -> &[f64; 3] {
        &self.fixed_centroid
    }

    /// Centroid of the moving point set.
    pub fn moving_centroid(&self) -> &[f64; 3] {
        &self.moving_centroid
    }

    /// The combined 4x4 homogeneous transform.
    ///
    /// Acts on column vectors `[x, y, z, 1]ᵀ`: the upper-left 3x3 block is
    /// the transposed rotation and the last column the translation. This is
    /// the same map as `p · R + t` on row vectors.
    pub fn transformation(&self) -> [[f64; 4]; 4] {
        let mut matrix = [[0.0; 4]; 4];
        for (i, row) in matrix.iter_mut().take(3).enumerate() {
            for (j, val) in row.iter_mut().take(3).enumerate() {
                *val = self.rotation[j][i];
            }
            row[3] = self.translation[i];
        }
        matrix[3][3] = 1.0;
        matrix
    }
}

/// Rotation candidate (V · Uᵀ)ᵀ from the factors of the covariance SVD.
fn rotation_from_factors(v: &[[f64; 3]; 3], u: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    let mut vut = [[0.0; 3]; 3];
    linalg::matmul33(v, &linalg::transpose33(u), &mut vut);
    linalg::transpose33(&vut)
}
