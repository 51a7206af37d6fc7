//! Profile records
//!
//! One record per timed repetition of the secret word. A reference profile
//! is the ordered set of records sharing one key.

use crate::error::{AuthError, Result};
use crate::keystroke::{reduce, KeystrokeSample};
use serde::{Deserialize, Serialize};

/// Statistics of one repetition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// The typed word
    pub key: String,
    /// Mean interval, seconds
    #[serde(rename = "M")]
    pub mean: f64,
    /// Population variance of the intervals
    #[serde(rename = "S")]
    pub variance: f64,
}

impl ProfileRecord {
    pub fn new(key: impl Into<String>, mean: f64, variance: f64) -> Self {
        ProfileRecord {
            key: key.into(),
            mean,
            variance,
        }
    }

    /// Reduce a captured sample to its statistics
    pub fn from_sample(sample: &KeystrokeSample) -> Result<Self> {
        let (mean, variance) = reduce(&sample.intervals)?;
        Ok(ProfileRecord::new(sample.typed.clone(), mean, variance))
    }
}

/// Enrolled typing rhythm for one secret word
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceProfile {
    records: Vec<ProfileRecord>,
}

impl ReferenceProfile {
    /// Build a profile; records must be non-empty, share one key and hold
    /// finite, non-negative statistics
    pub fn new(records: Vec<ProfileRecord>) -> Result<Self> {
        let first = records
            .first()
            .ok_or_else(|| AuthError::CorruptProfile("profile has no records".into()))?;

        for (row, record) in records.iter().enumerate() {
            if record.key != first.key {
                return Err(AuthError::CorruptProfile(format!(
                    "row {} has key {:?}, expected {:?}",
                    row + 1,
                    record.key,
                    first.key
                )));
            }
            if !record.mean.is_finite() || record.mean < 0.0 {
                return Err(AuthError::CorruptProfile(format!(
                    "row {} has invalid mean {}",
                    row + 1,
                    record.mean
                )));
            }
            if !record.variance.is_finite() || record.variance < 0.0 {
                return Err(AuthError::CorruptProfile(format!(
                    "row {} has invalid variance {}",
                    row + 1,
                    record.variance
                )));
            }
        }

        Ok(ReferenceProfile { records })
    }

    /// The secret word
    pub fn key(&self) -> &str {
        &self.records[0].key
    }

    /// Intervals per sample: one less than the key length
    pub fn sample_size(&self) -> usize {
        self.key().chars().count().saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[ProfileRecord] {
        &self.records
    }
}
