use crate::error::AlignError;
use strucfit_3d::ops;

/// Compute the root-mean-square deviation between two matched point sets.
///
/// The sets are compared as given; apply a [`Superposition`](crate::Superposition)
/// first to measure the deviation after optimal overlay.
///
/// # Arguments
///
/// * `a` - First point set.
/// * `b` - Second point set, matched pairwise with `a`.
///
/// # Errors
///
/// Returns [`AlignError::MismatchedLengths`] if the two sets differ in size,
/// and [`AlignError::EmptyPointSets`] if they contain no points.
///
/// Example:
///
/// ```
/// use strucfit_align::rmsd;
///
/// let a = vec![[0.0, 0.0, 0.0]];
/// let b = vec![[3.0, 4.0, 0.0]];
/// assert_eq!(rmsd(&a, &b)?, 5.0);
/// # Ok::<(), strucfit_align::AlignError>(())
/// ```
pub fn rmsd(a: &[[f64; 3]], b: &[[f64; 3]]) -> Result<f64, AlignError> {
    if a.len() != b.len() {
        return Err(AlignError::MismatchedLengths(a.len(), b.len()));
    }
    if a.is_empty() {
        return Err(AlignError::EmptyPointSets);
    }
    let sum_squares: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(p, q)| {
            p.iter()
                .zip(q.iter())
                .map(|(x, y)| (x - y).powi(2))
                .sum::<f64>()
        })
        .sum();
    Ok((sum_squares / a.len() as f64).sqrt())
}

/// Compute the TM-score of an alignment, normalized by the shorter structure.
///
/// The aligned coordinate pairs `a` and `b` are scored as given, typically
/// after a [`Superposition`](crate::Superposition) has been applied. Unlike
/// the RMSD, the TM-score is length-normalized and bounded in (0, 1], with
/// 1 meaning a perfect match; scores above roughly 0.5 indicate structures
/// of the same fold.
///
/// # Arguments
///
/// * `a` - Aligned coordinates drawn from the first structure.
/// * `b` - Aligned coordinates drawn from the second structure, matched
///   pairwise with `a`.
/// * `len1` - Residue count of the full first structure.
/// * `len2` - Residue count of the full second structure.
///
/// # Errors
///
/// Returns [`AlignError::MismatchedLengths`] if the two sets differ in size,
/// [`AlignError::EmptyPointSets`] if they contain no points, and
/// [`AlignError::AlignmentLongerThanStructure`] if either full length is
/// smaller than the number of aligned pairs.
///
/// Example:
///
/// ```
/// use strucfit_align::tm_score;
///
/// let coords: Vec<[f64; 3]> = (0..20).map(|i| [i as f64 * 3.8, 0.0, 0.0]).collect();
/// let score = tm_score(&coords, &coords, 20, 20)?;
/// assert_eq!(score, 1.0);
/// # Ok::<(), strucfit_align::AlignError>(())
/// ```
pub fn tm_score(
    a: &[[f64; 3]],
    b: &[[f64; 3]],
    len1: usize,
    len2: usize,
) -> Result<f64, AlignError> {
    validate_scored_sets(a, b, len1, len2)?;
    Ok(tm_score_normalized(a, b, len1.min(len2)))
}

/// Compute the TM-score of an alignment, normalized by the longer structure.
///
/// Same score as [`tm_score`] except that the longer of the two full lengths
/// drives both the normalization and the distance scale, which penalizes
/// alignments covering only a small part of a large structure.
///
/// # Errors
///
/// Rejects the same inputs as [`tm_score`].
pub fn tm_score_max_norm(
    a: &[[f64; 3]],
    b: &[[f64; 3]],
    len1: usize,
    len2: usize,
) -> Result<f64, AlignError> {
    validate_scored_sets(a, b, len1, len2)?;
    Ok(tm_score_normalized(a, b, len1.max(len2)))
}

fn validate_scored_sets(
    a: &[[f64; 3]],
    b: &[[f64; 3]],
    len1: usize,
    len2: usize,
) -> Result<(), AlignError> {
    if a.len() != b.len() {
        return Err(AlignError::MismatchedLengths(a.len(), b.len()));
    }
    if a.is_empty() {
        return Err(AlignError::EmptyPointSets);
    }
    if len1 < a.len() {
        return Err(AlignError::AlignmentLongerThanStructure(len1, a.len()));
    }
    if len2 < b.len() {
        return Err(AlignError::AlignmentLongerThanStructure(len2, b.len()));
    }
    Ok(())
}

/// Distance scale d0 for a structure of `norm_len` residues.
///
/// Negative below 15 residues, which keeps the per-pair terms finite.
fn d0(norm_len: usize) -> f64 {
    1.24 * (norm_len as f64 - 15.0).cbrt() - 1.8
}

fn tm_score_normalized(a: &[[f64; 3]], b: &[[f64; 3]], norm_len: usize) -> f64 {
    let d0 = d0(norm_len);
    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(p, q)| {
            let norm_dist = ops::euclidean_distance(p, q) / d0;
            1.0 / (1.0 + norm_dist * norm_dist)
        })
        .sum();
    sum / norm_len as f64
}
