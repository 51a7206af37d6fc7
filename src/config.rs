//! Session configuration and the Student's t critical-value table
//!
//! Everything the matcher and the session controller treat as a constant
//! lives here and is handed to them explicitly.

use crate::error::{AuthError, Result};
use std::ops::RangeInclusive;

/// Default number of capture+compare rounds per authentication
pub const DEFAULT_ATTEMPTS: usize = 5;

/// Default fraction of matching references needed to accept
pub const DEFAULT_ACCEPTANCE_THRESHOLD: f64 = 0.9;

/// Two alpha values closer than this are the same level
const ALPHA_EPSILON: f64 = 1e-9;

/// One row of the critical-value table
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CriticalValue {
    /// Significance level
    pub alpha: f64,
    /// Number of intervals per sample
    pub sample_size: usize,
    /// Threshold for the t statistic
    pub t: f64,
}

/// Explicit (alpha, sample size) -> critical value table
#[derive(Clone, Debug)]
pub struct CriticalValueTable {
    entries: Vec<CriticalValue>,
}

impl CriticalValueTable {
    pub fn new(entries: Vec<CriticalValue>) -> Self {
        CriticalValueTable { entries }
    }

    /// Look up the threshold for `alpha` at `sample_size` intervals
    pub fn lookup(&self, alpha: f64, sample_size: usize) -> Result<f64> {
        self.entries
            .iter()
            .find(|e| e.sample_size == sample_size && (e.alpha - alpha).abs() < ALPHA_EPSILON)
            .map(|e| e.t)
            .ok_or(AuthError::UnsupportedAlpha { alpha, sample_size })
    }

    /// Distinct alpha values, in table order
    pub fn alphas(&self) -> Vec<f64> {
        let mut alphas: Vec<f64> = Vec::new();
        for entry in &self.entries {
            if !alphas.iter().any(|a| (a - entry.alpha).abs() < ALPHA_EPSILON) {
                alphas.push(entry.alpha);
            }
        }
        alphas
    }

    /// Whether any alpha has an entry for this sample size
    pub fn supports_sample_size(&self, sample_size: usize) -> bool {
        self.entries.iter().any(|e| e.sample_size == sample_size)
    }
}

impl Default for CriticalValueTable {
    /// Two-sided alpha = 0.05 for 5..=9 intervals
    fn default() -> Self {
        let rows = [(5, 2.5706), (6, 2.4469), (7, 2.3646), (8, 2.306), (9, 2.2622)];
        CriticalValueTable::new(
            rows.iter()
                .map(|&(sample_size, t)| CriticalValue {
                    alpha: 0.05,
                    sample_size,
                    t,
                })
                .collect(),
        )
    }
}

/// Parameters shared by enrollment and authentication
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Capture+compare rounds per authentication
    pub attempts: usize,
    /// Ratio at or above which an attempt / a session is accepted
    pub acceptance_threshold: f64,
    /// Allowed secret word length, in characters
    pub word_len: RangeInclusive<usize>,
    pub critical_values: CriticalValueTable,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            attempts: DEFAULT_ATTEMPTS,
            acceptance_threshold: DEFAULT_ACCEPTANCE_THRESHOLD,
            word_len: 6..=10,
            critical_values: CriticalValueTable::default(),
        }
    }
}

impl SessionConfig {
    /// Validate a candidate secret word against the length limits
    pub fn check_word(&self, word: &str) -> Result<()> {
        let len = word.chars().count();
        if self.word_len.contains(&len) {
            Ok(())
        } else {
            Err(AuthError::InvalidConfiguration(format!(
                "the length of {} must be in range [{}, {}]",
                word,
                self.word_len.start(),
                self.word_len.end()
            )))
        }
    }
}
