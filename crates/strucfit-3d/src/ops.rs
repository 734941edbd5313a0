/// Utility function to compute the Euclidean distance between two points.
///
/// # Arguments
///
/// * `a` - A point in 3D space.
/// * `b` - Another point in 3D space.
///
/// # Returns
///
/// The Euclidean distance between the two points.
///
/// Example:
/// ```
/// use strucfit_3d::ops::euclidean_distance;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [4.0, 5.0, 6.0];
/// let dst = euclidean_distance(&a, &b);
/// ```
pub fn euclidean_distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)).sqrt()
}

/// Compute the centroid (mean position) of a set of points.
///
/// # Arguments
///
/// * `points` - A set of points in 3D space.
///
/// # Returns
///
/// The centroid of the points, or the origin if the set is empty.
///
/// Example:
/// ```
/// use strucfit_3d::ops::centroid;
///
/// let points = vec![[0.0, 0.0, 0.0], [2.0, 4.0, 6.0]];
/// assert_eq!(centroid(&points), [1.0, 2.0, 3.0]);
/// ```
pub fn centroid(points: &[[f64; 3]]) -> [f64; 3] {
    if points.is_empty() {
        return [0.0; 3];
    }

    let mut center = [0.0; 3];
    for point in points {
        center[0] += point[0];
        center[1] += point[1];
        center[2] += point[2];
    }

    let num_points = points.len() as f64;
    [
        center[0] / num_points,
        center[1] / num_points,
        center[2] / num_points,
    ]
}

/// Subtract a center from every point, returning centered copies.
///
/// The input points are left untouched.
///
/// # Arguments
///
/// * `points` - A set of points in 3D space.
/// * `center` - The position to subtract from each point.
///
/// # Returns
///
/// A new vector with the centered points.
pub fn center_points(points: &[[f64; 3]], center: &[f64; 3]) -> Vec<[f64; 3]> {
    points
        .iter()
        .map(|point| {
            [
                point[0] - center[0],
                point[1] - center[1],
                point[2] - center[2],
            ]
        })
        .collect()
}
