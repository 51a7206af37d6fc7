//! Timed capture of a fixed word
//!
//! Features:
//! - One character per read, echoed as it arrives
//! - Interval between the completion of consecutive reads
//! - Retry from scratch until the typed word matches

use crate::error::{AuthError, Result};
use log::{debug, warn};
use std::io::Write;
use std::time::Instant;

/// A character and the instant its read completed
#[derive(Clone, Copy, Debug)]
pub struct KeyPress {
    pub ch: char,
    pub at: Instant,
}

/// Blocking, character-at-a-time input source
pub trait KeySource {
    /// Prepare the source for a capture (e.g. raw mode)
    fn begin(&mut self) -> Result<()> {
        Ok(())
    }

    /// Block until the next character is typed
    fn read_key(&mut self) -> Result<KeyPress>;

    /// Restore the source after a capture
    fn end(&mut self) -> Result<()> {
        Ok(())
    }
}

/// The typed word with its N-1 inter-character intervals (seconds)
#[derive(Clone, Debug, PartialEq)]
pub struct KeystrokeSample {
    pub typed: String,
    pub intervals: Vec<f64>,
}

/// Result of a single pass over the expected word
#[derive(Clone, Debug, PartialEq)]
pub enum CaptureAttempt {
    Matched(KeystrokeSample),
    /// The typed word differed; the sample was discarded
    Mismatch { typed: String },
}

/// Captures timed samples of a word from a key source
pub struct TimingCapture<K: KeySource> {
    keys: K,
}

impl<K: KeySource> TimingCapture<K> {
    pub fn new(keys: K) -> Self {
        TimingCapture { keys }
    }

    /// Capture `expected`, retrying until it is typed correctly
    pub fn capture_word<W: Write>(
        &mut self,
        expected: &str,
        out: &mut W,
    ) -> Result<KeystrokeSample> {
        let mut retries = 0u32;
        loop {
            match self.capture_once(expected, out)? {
                CaptureAttempt::Matched(sample) => {
                    debug!(
                        "captured {} intervals after {} retries: {:?}",
                        sample.intervals.len(),
                        retries,
                        sample.intervals
                    );
                    return Ok(sample);
                }
                CaptureAttempt::Mismatch { typed } => {
                    retries += 1;
                    warn!("typed word mismatch (retry {})", retries);
                    let err = AuthError::InputMismatch {
                        expected: expected.to_string(),
                        typed,
                    };
                    write!(out, "\nERROR: {}. So try again...\n", err)?;
                    out.flush()?;
                }
            }
        }
    }

    /// Read exactly `expected.chars().count()` characters once
    pub fn capture_once<W: Write>(
        &mut self,
        expected: &str,
        out: &mut W,
    ) -> Result<CaptureAttempt> {
        self.keys.begin()?;
        let read = self.read_word(expected.chars().count(), out);
        let ended = self.keys.end();
        let (typed, intervals) = read?;
        ended?;

        if typed == expected {
            Ok(CaptureAttempt::Matched(KeystrokeSample { typed, intervals }))
        } else {
            Ok(CaptureAttempt::Mismatch { typed })
        }
    }

    fn read_word<W: Write>(&mut self, len: usize, out: &mut W) -> Result<(String, Vec<f64>)> {
        let mut typed = String::with_capacity(len);
        let mut intervals = Vec::with_capacity(len.saturating_sub(1));
        let mut previous: Option<Instant> = None;

        for _ in 0..len {
            let key = self.keys.read_key()?;
            if let Some(prev) = previous {
                intervals.push(key.at.duration_since(prev).as_secs_f64());
            }
            previous = Some(key.at);

            typed.push(key.ch);
            // raw mode: no implicit carriage return
            if key.ch == '\n' {
                write!(out, "\r\n")?;
            } else {
                write!(out, "{}", key.ch)?;
            }
            out.flush()?;
        }

        Ok((typed, intervals))
    }

    #[cfg(test)]
    pub fn keys_mut(&mut self) -> &mut K {
        &mut self.keys
    }
}
