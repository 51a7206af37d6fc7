//! Interval statistics
//!
//! Variance is the population variance (divisor N). The pooled-variance
//! weighting in the matcher depends on it.

use crate::error::{AuthError, Result};

/// Reduce interval samples (seconds) to `(mean, population variance)`
pub fn reduce(intervals: &[f64]) -> Result<(f64, f64)> {
    if intervals.is_empty() {
        return Err(AuthError::InvalidInput(
            "cannot compute statistics of an empty interval sequence".into(),
        ));
    }

    let n = intervals.len() as f64;
    let mean = intervals.iter().sum::<f64>() / n;
    let variance = intervals.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

    Ok((mean, variance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value() {
        let (mean, variance) = reduce(&[0.137]).unwrap();
        assert_eq!(mean, 0.137);
        assert_eq!(variance, 0.0);
    }

    #[test]
    fn test_one_two_three() {
        let (mean, variance) = reduce(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(mean, 2.0);
        assert!((variance - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_population_not_sample_variance() {
        let (_, variance) = reduce(&[2.0, 4.0]).unwrap();
        assert_eq!(variance, 1.0);
    }

    #[test]
    fn test_empty_is_invalid_input() {
        assert!(matches!(reduce(&[]), Err(AuthError::InvalidInput(_))));
    }
}
