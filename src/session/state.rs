//! Authentication session state
//!
//! Maintains:
//! - Per-attempt match results against the loaded profile
//! - Session timing
//! - The final acceptance ratio and verdict

use crate::session::matching::MatchResult;
use std::time::Instant;

/// Session verdict
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Acceptance ratio reached the threshold
    Successful,
    Failed,
}

/// Aggregate result of one authentication session
#[derive(Clone, Debug, PartialEq)]
pub struct SessionOutcome {
    pub total_matches: usize,
    /// References x attempts
    pub total_comparisons: usize,
    pub acceptance_ratio: f64,
    pub attempts_accepted: usize,
    pub attempts: usize,
    pub verdict: Verdict,
}

impl SessionOutcome {
    pub fn new(
        total_matches: usize,
        references: usize,
        attempts: usize,
        attempts_accepted: usize,
        acceptance_threshold: f64,
    ) -> Self {
        let total_comparisons = references * attempts;
        let acceptance_ratio = if total_comparisons == 0 {
            0.0
        } else {
            total_matches as f64 / total_comparisons as f64
        };
        let verdict = if acceptance_ratio >= acceptance_threshold {
            Verdict::Successful
        } else {
            Verdict::Failed
        };

        SessionOutcome {
            total_matches,
            total_comparisons,
            acceptance_ratio,
            attempts_accepted,
            attempts,
            verdict,
        }
    }

    /// Fraction of attempts that were individually rejected
    pub fn rejected_attempt_fraction(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            (self.attempts - self.attempts_accepted) as f64 / self.attempts as f64
        }
    }

    pub fn is_successful(&self) -> bool {
        self.verdict == Verdict::Successful
    }
}

/// Accumulates attempt results while a session runs
#[derive(Clone, Debug)]
pub struct ValidationSession {
    /// Records in the loaded profile
    references: usize,
    /// Attempts the session will run
    planned_attempts: usize,
    results: Vec<MatchResult>,
    start_time: Option<Instant>,
}

impl ValidationSession {
    pub fn new(references: usize, planned_attempts: usize) -> Self {
        ValidationSession {
            references,
            planned_attempts,
            results: Vec::with_capacity(planned_attempts),
            start_time: None,
        }
    }

    /// Start the session timer
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get session duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    pub fn record_attempt(&mut self, result: MatchResult) {
        self.results.push(result);
    }

    pub fn attempts_recorded(&self) -> usize {
        self.results.len()
    }

    pub fn is_complete(&self) -> bool {
        self.results.len() >= self.planned_attempts
    }

    /// Aggregate the recorded attempts
    pub fn outcome(&self, acceptance_threshold: f64) -> SessionOutcome {
        let total_matches = self.results.iter().map(|r| r.match_count).sum();
        let attempts_accepted = self.results.iter().filter(|r| r.accepted).count();
        SessionOutcome::new(
            total_matches,
            self.references,
            self.results.len(),
            attempts_accepted,
            acceptance_threshold,
        )
    }
}
