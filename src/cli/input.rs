//! Keystroke input handling using crossterm
//!
//! Features:
//! - Blocking single-key reads in raw mode
//! - Completion timestamp taken as soon as the key event arrives
//! - Ctrl+C / Escape abort the capture

use crate::error::{AuthError, Result};
use crate::keystroke::{KeyPress, KeySource};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

/// Reads keys from the terminal
pub struct InputHandler {
    raw: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        InputHandler { raw: false }
    }

    /// Check if key event is an exit signal (Ctrl+C or Escape)
    pub fn is_exit(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Esc => true,
            _ => false,
        }
    }

    /// Convert key event to the character it types, if any
    pub fn key_to_char(key: &KeyEvent) -> Option<char> {
        match key.code {
            KeyCode::Char(c) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                {
                    Some(c)
                } else {
                    None
                }
            }
            KeyCode::Enter => Some('\n'),
            KeyCode::Tab => Some('\t'),
            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl KeySource for InputHandler {
    fn begin(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        self.raw = true;
        Ok(())
    }

    fn read_key(&mut self) -> Result<KeyPress> {
        loop {
            if let Event::Key(key) = event::read()? {
                let at = Instant::now();
                // Windows reports releases too
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if Self::is_exit(&key) {
                    return Err(AuthError::Interrupted);
                }
                if let Some(ch) = Self::key_to_char(&key) {
                    return Ok(KeyPress { ch, at });
                }
            }
        }
    }

    fn end(&mut self) -> Result<()> {
        if self.raw {
            crossterm::terminal::disable_raw_mode()?;
            self.raw = false;
        }
        Ok(())
    }
}

impl Drop for InputHandler {
    fn drop(&mut self) {
        // Best effort cleanup
        let _ = self.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_exit_keys() {
        assert!(InputHandler::is_exit(&key(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(InputHandler::is_exit(&key(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!InputHandler::is_exit(&key(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_key_to_char() {
        assert_eq!(
            InputHandler::key_to_char(&key(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Some('Q')
        );
        assert_eq!(
            InputHandler::key_to_char(&key(KeyCode::Enter, KeyModifiers::NONE)),
            Some('\n')
        );
        assert_eq!(
            InputHandler::key_to_char(&key(KeyCode::Char('x'), KeyModifiers::ALT)),
            None
        );
        assert_eq!(
            InputHandler::key_to_char(&key(KeyCode::Left, KeyModifiers::NONE)),
            None
        );
    }
}
