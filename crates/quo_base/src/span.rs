//! Source location tracking.
//!
//! Quo errors are reported by 1-based line number (see [`Line`]), matching
//! how the reference lexer and parser surface diagnostics. [`Span`] tracks
//! byte offsets within a single line's lexeme and is used internally by the
//! lexer to slice the original source.

/// A byte-offset range within the source text of a single token's lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset of the first character (inclusive).
    pub start: usize,
    /// Byte offset past the last character (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a span from byte offsets.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if this span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A 1-based source line number.
///
/// Line 1 is the first line of the file. Quo diagnostics are always reported
/// against a `Line`, never a byte offset, because the grammar has no
/// multi-line tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Line(pub usize);

impl Line {
    pub const START: Line = Line(1);

    pub fn advance(self) -> Line {
        Line(self.0 + 1)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
