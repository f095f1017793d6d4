//! Correlation of two frequency vectors.
//!
//! The coefficient is computed from the centered vectors,
//! `r = (u - ū)·(v - v̄) / (|u - ū| |v - v̄|)`. The normalization factor of the
//! covariance (population or sample) cancels out, so no convention has to be
//! chosen.

use crate::error::SimilarityError;
use approx::AbsDiffEq;
use ndarray::{Array1, ArrayView1};

/// Correlation distance `1 - r`, clipped into `[0, 2]`.
pub fn correlation_distance(
    u: ArrayView1<f64>,
    v: ArrayView1<f64>,
) -> Result<f64, SimilarityError> {
    if u.len() != v.len() {
        return Err(SimilarityError::LengthMismatch {
            left: u.len(),
            right: v.len(),
        });
    }

    let uc = centered(u)?;
    let vc = centered(v)?;

    let uv = uc.dot(&vc);
    let uu = uc.dot(&uc);
    let vv = vc.dot(&vc);

    let dist = 1.0 - uv / (uu * vv).sqrt();
    Ok(dist.max(0.0).min(2.0))
}

/// Pearson correlation coefficient in `[-1, 1]`.
pub fn pearson_correlation(
    u: ArrayView1<f64>,
    v: ArrayView1<f64>,
) -> Result<f64, SimilarityError> {
    Ok(1.0 - correlation_distance(u, v)?)
}

// fails for vectors whose deviation from the mean is only rounding noise.
fn centered(u: ArrayView1<f64>) -> Result<Array1<f64>, SimilarityError> {
    let n = u.len();
    if n == 0 {
        return Err(SimilarityError::ZeroVariance);
    }
    let mean = u.sum() / n as f64;
    let uc = u.mapv(|x| x - mean);

    // bound of the rounding error of the mean, summed over n entries
    let scale = u.iter().fold(0.0f64, |acc, x| acc.max(x.abs()));
    let tolerance = scale * f64::EPSILON * n as f64 * (n as f64).sqrt();
    let norm = uc.dot(&uc).sqrt();
    if !norm.is_finite() || norm.abs_diff_eq(&0.0, tolerance) {
        return Err(SimilarityError::ZeroVariance);
    }
    Ok(uc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::arr1;

    #[test]
    fn test_identical() {
        let u = arr1(&[0.1, 0.2, 0.3, 0.4]);
        assert_abs_diff_eq!(1.0, pearson_correlation(u.view(), u.view()).unwrap(), epsilon = 1e-12);
        assert_abs_diff_eq!(
            0.0,
            correlation_distance(u.view(), u.view()).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_anti_correlated() {
        let u = arr1(&[0.1, 0.2, 0.3, 0.4]);
        let v = arr1(&[0.4, 0.3, 0.2, 0.1]);
        assert_abs_diff_eq!(
            -1.0,
            pearson_correlation(u.view(), v.view()).unwrap(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            2.0,
            correlation_distance(u.view(), v.view()).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_known_value() {
        // centered: (-1, 0, 1) and (-1, -1, 2) -> 3 / sqrt(2 * 6)
        let u = arr1(&[1.0, 2.0, 3.0]);
        let v = arr1(&[1.0, 1.0, 4.0]);
        let expected = 3.0 / 12.0f64.sqrt();
        assert_abs_diff_eq!(
            expected,
            pearson_correlation(u.view(), v.view()).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_scale_invariant() {
        let u = arr1(&[1.0, 2.0, 7.0, 3.0]);
        let v = arr1(&[2.0, 2.5, 5.0, 1.0]);
        let r = pearson_correlation(u.view(), v.view()).unwrap();
        let scaled = u.mapv(|x| x / 13.0);
        assert_abs_diff_eq!(
            r,
            pearson_correlation(scaled.view(), v.view()).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_zero_variance() {
        let uniform = arr1(&[1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0]);
        let v = arr1(&[0.2, 0.3, 0.5]);
        assert_eq!(
            Err(SimilarityError::ZeroVariance),
            pearson_correlation(uniform.view(), v.view())
        );
        assert_eq!(
            Err(SimilarityError::ZeroVariance),
            pearson_correlation(v.view(), uniform.view())
        );
        let empty = Array1::<f64>::zeros(0);
        assert_eq!(
            Err(SimilarityError::ZeroVariance),
            pearson_correlation(empty.view(), empty.view())
        );
    }

    #[test]
    fn test_length_mismatch() {
        let u = arr1(&[0.2, 0.8]);
        let v = arr1(&[0.2, 0.3, 0.5]);
        assert_eq!(
            Err(SimilarityError::LengthMismatch { left: 2, right: 3 }),
            correlation_distance(u.view(), v.view())
        );
    }
}
