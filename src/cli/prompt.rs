//! Line-based prompts (menu choice, secret word, counts, alpha)

use crate::error::{AuthError, Result};
use std::io::{self, BufRead, Write};

/// Asks the user a question and returns the trimmed answer
pub trait Prompter {
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Cooked-mode prompts on stdin/stdout
pub struct TerminalPrompt;

impl Prompter for TerminalPrompt {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        // EOF on stdin: nobody is left to answer
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(AuthError::Interrupted);
        }
        Ok(line.trim().to_string())
    }
}
