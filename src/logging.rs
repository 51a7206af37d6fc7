//! Logger setup
//!
//! Logs go to stderr so they never mix with the echoed keystrokes on stdout.
//! Level comes from `KEYSTROKE_LOG`, falling back to the default passed in.

use env_logger::{Builder, Env, Target};
use log::debug;
use std::sync::Once;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "KEYSTROKE_LOG";

static INIT: Once = Once::new();

/// Initialize the logging system once per process
pub fn init_logger(verbose: bool) {
    INIT.call_once(|| {
        let default_level = if verbose { "debug" } else { "warn" };
        let env = Env::default().filter_or(LOG_ENV, default_level);

        Builder::from_env(env)
            .format_timestamp_millis()
            .target(Target::Stderr)
            .init();

        debug!("logging initialized (default level {})", default_level);
    });
}
