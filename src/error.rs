//! Error taxonomy for capture, profile storage and matching

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuthError>;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{typed} isn't equal {expected}")]
    InputMismatch { expected: String, typed: String },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("alpha {alpha} is not supported for {sample_size} intervals")]
    UnsupportedAlpha { alpha: f64, sample_size: usize },

    #[error("reference profile {} doesn't exist", .0.display())]
    MissingProfile(PathBuf),

    #[error("reference profile is corrupt: {0}")]
    CorruptProfile(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("capture interrupted")]
    Interrupted,

    #[error("cannot write {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl AuthError {
    /// Errors that send the user back to the menu instead of ending the process.
    /// `Io` is reserved for the terminal itself.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AuthError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_names_both_words() {
        let err = AuthError::InputMismatch {
            expected: "secret01".into(),
            typed: "secret02".into(),
        };
        assert_eq!(err.to_string(), "secret02 isn't equal secret01");
    }

    #[test]
    fn test_terminal_io_is_not_recoverable() {
        let io = AuthError::Io(std::io::Error::new(std::io::ErrorKind::Other, "tty gone"));
        assert!(!io.is_recoverable());
        assert!(AuthError::Interrupted.is_recoverable());
        assert!(AuthError::MissingProfile(PathBuf::from("etalons.csv")).is_recoverable());
        let disk_full = AuthError::Storage {
            path: PathBuf::from("etalons.csv"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "no space left"),
        };
        assert!(disk_full.is_recoverable());
    }
}
