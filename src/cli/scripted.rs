//! Scripted stand-ins for the terminal, used by tests
//!
//! Key delays are synthetic, so captured intervals are exact.

use crate::cli::prompt::Prompter;
use crate::error::{AuthError, Result};
use crate::keystroke::{KeyPress, KeySource};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Replays characters with fixed delays (milliseconds) between reads
pub struct ScriptedKeys {
    origin: Instant,
    clock: Duration,
    script: VecDeque<(char, u64)>,
    open: i32,
}

impl ScriptedKeys {
    pub fn new() -> Self {
        ScriptedKeys {
            origin: Instant::now(),
            clock: Duration::ZERO,
            script: VecDeque::new(),
            open: 0,
        }
    }

    /// Queue one key arriving `delay_ms` after the previous one
    pub fn push_key(&mut self, ch: char, delay_ms: u64) {
        self.script.push_back((ch, delay_ms));
    }

    /// Queue a whole word; `intervals_ms` are the gaps after the first key
    pub fn type_word(&mut self, word: &str, intervals_ms: &[u64]) {
        for (i, ch) in word.chars().enumerate() {
            let delay = if i == 0 {
                750
            } else {
                intervals_ms[(i - 1) % intervals_ms.len()]
            };
            self.push_key(ch, delay);
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.script.is_empty()
    }

    /// Keys not yet read
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Captures begun but not ended
    pub fn open_captures(&self) -> i32 {
        self.open
    }
}

impl KeySource for ScriptedKeys {
    fn begin(&mut self) -> Result<()> {
        self.open += 1;
        Ok(())
    }

    fn read_key(&mut self) -> Result<KeyPress> {
        // Running out of script behaves like the user pressing Esc
        let (ch, delay) = self.script.pop_front().ok_or(AuthError::Interrupted)?;
        self.clock += Duration::from_millis(delay);
        Ok(KeyPress {
            ch,
            at: self.origin + self.clock,
        })
    }

    fn end(&mut self) -> Result<()> {
        self.open -= 1;
        Ok(())
    }
}

/// Answers prompts from a fixed list and records what was asked
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        ScriptedPrompt {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompt {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.asked.push(prompt.to_string());
        self.answers.pop_front().ok_or(AuthError::Interrupted)
    }
}
