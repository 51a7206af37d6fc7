//! Keystroke Dynamics Authentication
//!
//! Single-user, single-process CLI demo. Enrolls the typing rhythm of a
//! secret word and later accepts or rejects login attempts with a
//! per-sample Student's t-test.

mod cli;
mod config;
mod error;
mod keystroke;
mod logging;
mod profile;
mod session;

use clap::Parser;
use crossterm::tty::IsTty;
use cli::{Display, InputHandler, TerminalPrompt};
use config::SessionConfig;
use profile::{store::DEFAULT_PROFILE_FILE, ProfileStore};
use session::SessionController;
use std::error::Error;
use std::io;

#[derive(Parser, Debug)]
#[command(name = "keystroke-auth")]
#[command(about = "Keystroke dynamics authentication with a per-sample t-test")]
struct Args {
    /// Path to the reference profile CSV
    #[arg(short, long, default_value = DEFAULT_PROFILE_FILE)]
    profile: String,

    /// Enable debug logging (overridden by KEYSTROKE_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    logging::init_logger(args.verbose);

    let stdout = io::stdout();
    let display = if stdout.is_tty() {
        Display::simple()
    } else {
        Display::plain()
    };

    let mut controller = SessionController::new(
        InputHandler::new(),
        TerminalPrompt,
        stdout,
        display,
        ProfileStore::new(&args.profile),
        SessionConfig::default(),
    );
    controller.run()?;

    Ok(())
}
