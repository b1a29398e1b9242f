//! Application error types with rich context

use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Classification Errors
    // ─────────────────────────────────────────────────────────────
    /// The goto flag was the last argument; nothing followed it.
    #[error("file path not specified after -g option")]
    MissingTarget,

    /// The token after the goto flag had no `:` separator.
    #[error("failed to extract file path from {token:?} (expected FILE:LINE)")]
    MalformedTarget { token: String },

    /// An incoming argument was not valid UTF-8.
    #[error("argument is not valid UTF-8: {argument:?}")]
    NonUnicodeArgument { argument: OsString },

    // ─────────────────────────────────────────────────────────────
    // Launch Errors
    // ─────────────────────────────────────────────────────────────
    /// The downstream binary could not replace this process.
    #[error("unable to spawn {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn malformed_target(token: impl Into<String>) -> Self {
        Self::MalformedTarget {
            token: token.into(),
        }
    }

    pub fn non_unicode_argument(argument: impl Into<OsString>) -> Self {
        Self::NonUnicodeArgument {
            argument: argument.into(),
        }
    }

    pub fn spawn(program: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error comes from a bad invocation (as opposed to a
    /// launch or infrastructure failure)
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Error::MissingTarget | Error::MalformedTarget { .. } | Error::NonUnicodeArgument { .. }
        )
    }
}
