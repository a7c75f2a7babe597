//! Driver-level errors: the external-tool contract, plus a thin wrapper
//! tying the lexer/parser/translator's own error types to one exit path.

use std::process::ExitStatus;

/// Failure to locate or successfully run the external C++ compiler.
#[derive(Debug)]
pub enum ExternalToolError {
    /// Neither `CXX` nor any of the candidate compiler names was found.
    CompilerNotFound,
    /// The compiler ran but exited non-zero.
    CompilerFailed { status: ExitStatus },
}

impl std::fmt::Display for ExternalToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExternalToolError::CompilerNotFound => write!(
                f,
                "no C++ compiler found (set CXX, or install c++, g++, or clang++)"
            ),
            ExternalToolError::CompilerFailed { status } => {
                write!(f, "C++ compiler exited with {status}")
            }
        }
    }
}

impl std::error::Error for ExternalToolError {}

/// The single error type `main` handles: every stage's own error type
/// folded into one, with a uniform `"<stage>: <message>"` rendering.
#[derive(Debug)]
pub enum DriverError {
    Io(String),
    Lex(quo_syntax::LexError),
    Parse(quo_syntax::ParseError),
    Translate(quo_cxxgen::TranslatorError),
    Tool(ExternalToolError),
}

impl std::fmt::Display for DriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriverError::Io(message) => write!(f, "io error: {message}"),
            DriverError::Lex(e) => write!(f, "lex error: {e}"),
            DriverError::Parse(e) => write!(f, "{e}"),
            DriverError::Translate(e) => write!(f, "{e}"),
            DriverError::Tool(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DriverError {}

impl From<ExternalToolError> for DriverError {
    fn from(e: ExternalToolError) -> Self {
        DriverError::Tool(e)
    }
}

/// Exit code `main` should use for a given failure: a compiler's own exit
/// code on a compile failure, `1` for every other stage's error.
pub fn exit_code(err: &DriverError) -> i32 {
    match err {
        DriverError::Tool(ExternalToolError::CompilerFailed { status }) => status.code().unwrap_or(1),
        _ => 1,
    }
}
