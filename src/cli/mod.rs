//! CLI Interface: User input and terminal rendering
//!
//! # Components
//! - `input.rs`: Timed keystroke capture using crossterm
//! - `prompt.rs`: Line prompts for menu choices and parameters
//! - `display.rs`: User-facing messages and results

pub mod display;
pub mod input;
pub mod prompt;

#[cfg(test)]
pub mod scripted;

pub use display::Display;
pub use input::InputHandler;
pub use prompt::{Prompter, TerminalPrompt};
