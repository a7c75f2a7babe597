//! Error type shared by stages that only need a one-line diagnostic.
//!
//! Each pipeline stage (lexer, parser, translator, driver) defines its own
//! error enum carrying stage-specific data, but all of them render down to a
//! [`SpannedError`] for display to the user: `{stage}: {message} (line {line})`.

use crate::span::Line;
use std::fmt;

/// A human-readable error tied to a source line.
///
/// This is the type a `prog` driver prints to stderr before exiting non-zero;
/// it is not meant to be programmatically matched on (stage-specific error
/// enums exist for that).
#[derive(Debug, Clone)]
pub struct SpannedError {
    pub stage: &'static str,
    pub message: String,
    pub line: Option<Line>,
}

impl SpannedError {
    pub fn new(stage: &'static str, message: impl Into<String>, line: Option<Line>) -> Self {
        Self {
            stage,
            message: message.into(),
            line,
        }
    }
}

impl fmt::Display for SpannedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}: {} (line {})", self.stage, self.message, line),
            None => write!(f, "{}: {}", self.stage, self.message),
        }
    }
}

impl std::error::Error for SpannedError {}

/// Alias for `std::result::Result<T, SpannedError>`.
pub type Result<T> = std::result::Result<T, SpannedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_stage_message_and_line() {
        let err = SpannedError::new("lexer", "unexpected character", Some(Line(3)));
        assert_eq!(err.to_string(), "lexer: unexpected character (line 3)");
    }

    #[test]
    fn display_omits_line_when_absent() {
        let err = SpannedError::new("driver", "missing compiler", None);
        assert_eq!(err.to_string(), "driver: missing compiler");
    }
}
