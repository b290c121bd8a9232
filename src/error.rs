//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Which of the two input lines an alignment error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// The line of chord names.
    Chord,
    /// The lyric line under it.
    Lyric,
}

impl fmt::Display for LineRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chord => f.write_str("chord line"),
            Self::Lyric => f.write_str("lyric line"),
        }
    }
}

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// Input the aligner refuses to guess about (tabs, oversized lines)
    #[error("Malformed {line}: {reason}: {content:?}")]
    MalformedInput {
        /// Which line was rejected.
        line: LineRole,
        /// The offending line, verbatim.
        content: String,
        /// Why it was rejected.
        reason: String,
    },

    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<PathBuf>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Chart conversion error pinned to a source line
    #[error("Chart error at line {line_number}: {source}")]
    Parse {
        /// 1-based line number in the chart.
        line_number: usize,
        /// The alignment failure for that line.
        source: Box<Error>,
    },

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create a malformed-input error for the given line
    pub fn malformed(
        line: LineRole,
        content: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedInput {
            line,
            content: content.into(),
            reason: reason.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config {
            message: message.into(),
            hint,
        }
    }

    /// Attach a chart line number to an alignment error
    pub fn at_line(self, line_number: usize) -> Self {
        Self::Parse {
            line_number,
            source: Box::new(self),
        }
    }

    /// Whether this error (or the one it wraps) is a malformed-input rejection
    pub fn is_malformed(&self) -> bool {
        match self {
            Self::MalformedInput { .. } => true,
            Self::Parse { source, .. } => source.is_malformed(),
            _ => false,
        }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io {
            source: e,
            path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn malformed_names_the_line() {
        let err = Error::malformed(LineRole::Chord, "G\tC", "tab characters are not supported");
        let msg = err.to_string();
        assert!(msg.contains("chord line"));
        assert!(msg.contains("G\\tC"));
        assert!(err.is_malformed());
    }

    #[test]
    fn line_context_keeps_kind() {
        let err = Error::malformed(LineRole::Lyric, "x", "too long");
        let err = err.at_line(7);
        assert!(err.is_malformed());
        assert!(err.to_string().starts_with("Chart error at line 7"));
    }

    #[test]
    fn config_error_includes_hint() {
        let err = Error::config("bad split style", "Use 'hyphen' or 'space'");
        match err {
            Error::Config { hint, .. } => assert!(hint.contains("hyphen")),
            _ => panic!("Expected Config error"),
        }
    }
}
