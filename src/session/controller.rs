//! Interactive flow: menu, enrollment and authentication
//!
//! Every re-prompt is an explicit loop; nothing recurses. Recoverable
//! errors are shown to the user and send them back to the menu.

use crate::cli::{Display, Prompter};
use crate::config::SessionConfig;
use crate::error::{AuthError, Result};
use crate::keystroke::{KeySource, TimingCapture};
use crate::profile::{ProfileRecord, ProfileStore, ReferenceProfile};
use crate::session::matching::MatchEngine;
use crate::session::state::{SessionOutcome, ValidationSession};
use log::{info, warn};
use std::io::Write;

const MENU_PROMPT: &str = "Enter '1' to create etalons, '2' to validate or 'q' to quit: ";

/// Top-level menu entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Enroll,
    Authenticate,
    Quit,
    Invalid(String),
}

impl MenuChoice {
    pub fn parse(answer: &str) -> Self {
        match answer {
            "1" => MenuChoice::Enroll,
            "2" => MenuChoice::Authenticate,
            "q" => MenuChoice::Quit,
            other => MenuChoice::Invalid(other.to_string()),
        }
    }
}

/// Drives enrollment and authentication over the given terminal parts
pub struct SessionController<K: KeySource, P: Prompter, W: Write> {
    capture: TimingCapture<K>,
    prompt: P,
    out: W,
    display: Display,
    store: ProfileStore,
    config: SessionConfig,
    engine: MatchEngine,
}

impl<K: KeySource, P: Prompter, W: Write> SessionController<K, P, W> {
    pub fn new(
        keys: K,
        prompt: P,
        out: W,
        display: Display,
        store: ProfileStore,
        config: SessionConfig,
    ) -> Self {
        let engine = MatchEngine::new(config.acceptance_threshold);
        SessionController {
            capture: TimingCapture::new(keys),
            prompt,
            out,
            display,
            store,
            config,
            engine,
        }
    }

    /// Menu loop until the user quits or stdin closes
    pub fn run(&mut self) -> Result<()> {
        let profile_path = self.store.path().display().to_string();
        self.display.show_banner(&mut self.out, &profile_path)?;

        loop {
            let answer = match self.prompt.ask(MENU_PROMPT) {
                Ok(answer) => answer,
                Err(AuthError::Interrupted) => break,
                Err(e) => return Err(e),
            };

            let result = match MenuChoice::parse(&answer) {
                MenuChoice::Enroll => self.enroll().map(|_| ()),
                MenuChoice::Authenticate => self.authenticate().map(|_| ()),
                MenuChoice::Quit => break,
                MenuChoice::Invalid(option) => {
                    self.display
                        .show_info(&mut self.out, &format!("Invalid option: {}", option))?;
                    continue;
                }
            };

            if let Err(e) = result {
                if !e.is_recoverable() {
                    return Err(e);
                }
                warn!("returning to menu: {}", e);
                writeln!(self.out)?;
                self.display.show_error(&mut self.out, &e.to_string())?;
            }
        }

        info!("quit");
        Ok(())
    }

    /// Create and persist a reference profile.
    ///
    /// Returns `None` when the user declines to overwrite an existing one.
    pub fn enroll(&mut self) -> Result<Option<ReferenceProfile>> {
        if self.store.exists() {
            let answer = self.prompt.ask(&format!(
                "Enter 'y' if you want to overwrite {}, otherwise 'n': ",
                self.store.path().display()
            ))?;
            if answer != "y" {
                info!("kept existing profile");
                return Ok(None);
            }
        }

        let word = self.ask_word()?;
        let count = self.ask_count()?;

        let mut records = Vec::with_capacity(count);
        for index in 1..=count {
            records.push(self.capture_record(&word, index)?);
        }

        let profile = ReferenceProfile::new(records)?;
        self.store.save(&profile)?;
        writeln!(self.out)?;
        self.display
            .show_info(&mut self.out, "Etalons created successfully")?;

        Ok(Some(profile))
    }

    /// Score fresh attempts against the stored profile
    pub fn authenticate(&mut self) -> Result<SessionOutcome> {
        let profile = self.store.load()?;
        let sample_size = profile.sample_size();
        if !self.config.critical_values.supports_sample_size(sample_size) {
            return Err(AuthError::InvalidConfiguration(format!(
                "no critical values for {} intervals",
                sample_size
            )));
        }

        let critical_value = self.ask_key_and_alpha(&profile)?;

        let mut session = ValidationSession::new(profile.len(), self.config.attempts);
        session.start();
        while !session.is_complete() {
            let index = session.attempts_recorded() + 1;
            let attempt = self.capture_record(profile.key(), index)?;
            let result = self.engine.compare(&profile, &attempt, critical_value);
            info!(
                "attempt {}: {}/{} references matched",
                index, result.match_count, result.references
            );
            session.record_attempt(result);
        }

        let outcome = session.outcome(self.config.acceptance_threshold);
        info!(
            "session finished in {:.1}s: P={} ({:?})",
            session.duration_secs(),
            outcome.acceptance_ratio,
            outcome.verdict
        );
        self.display.show_outcome(&mut self.out, &outcome)?;

        Ok(outcome)
    }

    fn capture_record(&mut self, word: &str, index: usize) -> Result<ProfileRecord> {
        self.display.show_repetition(&mut self.out, index)?;
        let sample = self.capture.capture_word(word, &mut self.out)?;
        ProfileRecord::from_sample(&sample)
    }

    fn ask_word(&mut self) -> Result<String> {
        loop {
            let word = self.prompt.ask(&format!(
                "Create etalon word (len between {} and {}): ",
                self.config.word_len.start(),
                self.config.word_len.end()
            ))?;
            match self.config.check_word(&word) {
                Ok(()) => return Ok(word),
                Err(e) => self.display.show_error(&mut self.out, &e.to_string())?,
            }
        }
    }

    fn ask_count(&mut self) -> Result<usize> {
        loop {
            let answer = self.prompt.ask("Enter number of etalons: ")?;
            match answer.parse::<usize>() {
                Ok(count) if count >= 1 => return Ok(count),
                _ => self.display.show_error(
                    &mut self.out,
                    &format!("number of etalons must be a positive integer, got {:?}", answer),
                )?,
            }
        }
    }

    /// Confirm the key word, then resolve alpha to a critical value.
    /// Any rejection starts over from the key word.
    fn ask_key_and_alpha(&mut self, profile: &ReferenceProfile) -> Result<f64> {
        let alphas = self.config.critical_values.alphas();
        loop {
            let key = self.prompt.ask("Enter your key word: ")?;
            if key != profile.key() {
                self.display
                    .show_error(&mut self.out, &format!("{} is wrong!", key))?;
                continue;
            }

            let answer = self
                .prompt
                .ask(&format!("Enter alpha for t_r {:?}: ", alphas))?;
            let alpha = match answer.parse::<f64>() {
                Ok(alpha) => alpha,
                Err(_) => {
                    self.display
                        .show_error(&mut self.out, &format!("alpha {} is not a number", answer))?;
                    continue;
                }
            };

            match self
                .config
                .critical_values
                .lookup(alpha, profile.sample_size())
            {
                Ok(critical_value) => return Ok(critical_value),
                Err(e) => self.display.show_error(&mut self.out, &e.to_string())?,
            }
        }
    }
}
