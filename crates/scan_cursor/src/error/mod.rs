//! Lexing errors.

use crate::Position;

/// Result alias for fallible cursor operations.
pub type LexResult<T> = Result<T, LexError>;

/// An expectation failure.
///
/// The message is already annotated with the location it was raised at
/// (`"<msg> at line L, column C"`). The same location is kept in structured
/// form so callers can render their own diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LexError {
    message: String,
    loc: Position,
    offset: usize,
}

impl LexError {
    pub(crate) fn new(message: String, loc: Position, offset: usize) -> Self {
        LexError {
            message,
            loc,
            offset,
        }
    }

    /// The position-annotated message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Line and column the error was raised at.
    pub fn loc(&self) -> Position {
        self.loc
    }

    /// Byte offset the error was raised at.
    pub fn offset(&self) -> usize {
        self.offset
    }
}
