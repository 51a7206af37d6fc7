//! Per-reference Student's t comparison
//!
//! Each stored record is tested against the attempt on its own:
//!
//! ```text
//! S = (S_ref + S_att) * (n - 1) / (2n - 1)
//! t = |M_ref - M_att| / sqrt(S * 2 / n)
//! ```
//!
//! with `n` the number of intervals per sample and S the population
//! variances. A record matches when `t` is below the critical value.

use crate::profile::{ProfileRecord, ReferenceProfile};
use log::debug;

/// t statistic between one reference record and an attempt, `n` intervals each
pub fn t_statistic(reference: &ProfileRecord, attempt: &ProfileRecord, n: usize) -> f64 {
    let n = n as f64;
    let pooled = (reference.variance + attempt.variance) * (n - 1.0) / (2.0 * n - 1.0);
    (reference.mean - attempt.mean).abs() / (pooled * 2.0 / n).sqrt()
}

/// Outcome of one attempt against the whole profile
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchResult {
    /// Reference records the attempt matched
    pub match_count: usize,
    /// Size of the profile compared against
    pub references: usize,
    pub accepted: bool,
}

impl MatchResult {
    pub fn ratio(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.match_count as f64 / self.references as f64
        }
    }
}

/// Compares attempts against a reference profile
#[derive(Clone, Copy, Debug)]
pub struct MatchEngine {
    acceptance_threshold: f64,
}

impl MatchEngine {
    pub fn new(acceptance_threshold: f64) -> Self {
        MatchEngine {
            acceptance_threshold,
        }
    }

    /// Count the records whose t statistic stays below `critical_value`
    pub fn compare(
        &self,
        reference: &ReferenceProfile,
        attempt: &ProfileRecord,
        critical_value: f64,
    ) -> MatchResult {
        let n = reference.sample_size();
        // NaN (zero pooled variance, equal means) never compares below
        let match_count = reference
            .records()
            .iter()
            .map(|r| t_statistic(r, attempt, n))
            .filter(|&t| t < critical_value)
            .count();

        let mut result = MatchResult {
            match_count,
            references: reference.len(),
            accepted: false,
        };
        result.accepted = result.ratio() >= self.acceptance_threshold;

        debug!(
            "attempt matched {}/{} references (t_r = {})",
            match_count,
            reference.len(),
            critical_value
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T_R_7: f64 = 2.3646;

    fn profile(records: &[(f64, f64)]) -> ReferenceProfile {
        ReferenceProfile::new(
            records
                .iter()
                .map(|&(m, s)| ProfileRecord::new("secret01", m, s))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_close_attempt_matches() {
        let reference = profile(&[(0.10, 0.0004)]);
        let attempt = ProfileRecord::new("secret01", 0.102, 0.0005);

        let t = t_statistic(&reference.records()[0], &attempt, 7);
        assert!(t > 0.0 && t < 0.2, "t = {}", t);

        let engine = MatchEngine::new(0.9);
        let first = engine.compare(&reference, &attempt, T_R_7);
        assert_eq!(first.match_count, 1);
        assert!(first.accepted);
        assert_eq!(engine.compare(&reference, &attempt, T_R_7), first);
    }

    #[test]
    fn test_statistic_by_hand() {
        // S = 0.0018 * 4 / 9 = 0.0008, sqrt(0.0008 * 2 / 5) = sqrt(0.00032)
        let reference = ProfileRecord::new("abcdef", 0.2, 0.001);
        let attempt = ProfileRecord::new("abcdef", 0.25, 0.0008);
        let t = t_statistic(&reference, &attempt, 5);
        assert!((t - 0.05 / 0.00032f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_distant_attempt_does_not_match() {
        let reference = profile(&[(0.10, 0.0004), (0.11, 0.0004)]);
        let attempt = ProfileRecord::new("secret01", 0.40, 0.0004);

        let result = MatchEngine::new(0.9).compare(&reference, &attempt, T_R_7);
        assert_eq!(result.match_count, 0);
        assert!(!result.accepted);
    }

    #[test]
    fn test_threshold_is_not_strict() {
        let mut records = vec![(0.10, 0.0004); 9];
        records.push((0.90, 0.0004));
        let reference = profile(&records);
        let attempt = ProfileRecord::new("secret01", 0.10, 0.0004);

        let result = MatchEngine::new(0.9).compare(&reference, &attempt, T_R_7);
        assert_eq!(result.match_count, 9);
        assert_eq!(result.ratio(), 0.9);
        assert!(result.accepted);
    }

    #[test]
    fn test_zero_variance_never_matches() {
        let reference = profile(&[(0.10, 0.0), (0.20, 0.0)]);
        let attempt = ProfileRecord::new("secret01", 0.10, 0.0);

        let result = MatchEngine::new(0.9).compare(&reference, &attempt, T_R_7);
        assert_eq!(result.match_count, 0);
    }
}
