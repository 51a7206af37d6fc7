//! User-facing text: prompts, notices and session results
//!
//! Everything is written through a caller-supplied writer so that the
//! session controller can be driven against an in-memory buffer.

use crate::session::SessionOutcome;
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};

/// Terminal display manager
pub struct Display {
    /// Emit ANSI colors
    colored: bool,
}

impl Display {
    /// Colored output for an interactive terminal
    pub fn simple() -> Self {
        Display { colored: true }
    }

    /// No escape sequences
    pub fn plain() -> Self {
        Display { colored: false }
    }

    fn paint<W: Write>(&self, out: &mut W, color: Color, text: &str) -> io::Result<()> {
        if self.colored {
            queue!(out, SetForegroundColor(color), Print(text), ResetColor)?;
        } else {
            queue!(out, Print(text))?;
        }
        Ok(())
    }

    /// Program banner
    pub fn show_banner<W: Write>(&self, out: &mut W, profile: &str) -> io::Result<()> {
        self.paint(out, Color::Cyan, "Keystroke dynamics authentication")?;
        writeln!(out, " | profile: {}", profile)?;
        out.flush()
    }

    /// Header before one timed repetition
    pub fn show_repetition<W: Write>(&self, out: &mut W, index: usize) -> io::Result<()> {
        write!(out, "\n[{}] ", index)?;
        self.paint(out, Color::Yellow, "Enter etalon: ")?;
        out.flush()
    }

    /// Recoverable problem the user should see
    pub fn show_error<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        self.paint(out, Color::Red, "ERROR: ")?;
        writeln!(out, "{}", message)?;
        out.flush()
    }

    /// Neutral status line
    pub fn show_info<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        writeln!(out, "{}", message)?;
        out.flush()
    }

    /// Final acceptance ratio and verdict
    pub fn show_outcome<W: Write>(&self, out: &mut W, outcome: &SessionOutcome) -> io::Result<()> {
        writeln!(out, "\n\nP={:?}", outcome.acceptance_ratio)?;
        writeln!(
            out,
            "Attempts accepted: {}/{} (rejected fraction {:.2})",
            outcome.attempts_accepted,
            outcome.attempts,
            outcome.rejected_attempt_fraction()
        )?;
        if outcome.is_successful() {
            self.paint(out, Color::Green, "====> Validation successful")?;
        } else {
            self.paint(out, Color::Red, "====> Validation failed")?;
        }
        writeln!(out, "\n")?;
        out.flush()
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::simple()
    }
}
