//! Keystroke timing: capture and reduction to statistics
//!
//! # Components
//! - `capture.rs`: Timed character-by-character capture of a fixed word
//! - `stats.rs`: Mean and population variance of interval samples

pub mod capture;
pub mod stats;

pub use capture::{KeyPress, KeySource, KeystrokeSample, TimingCapture};
pub use stats::reduce;
