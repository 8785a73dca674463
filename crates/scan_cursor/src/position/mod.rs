//! Line/column locations.
//!
//! A [`Position`] is a snapshot of a [`Lexer`](crate::Lexer)'s logical
//! location. The lexer never stores one; it builds a fresh value on each
//! [`get_loc()`](crate::Lexer::get_loc) call.

use std::fmt;

/// 1-based line and column pair.
///
/// The column counts characters (Unicode scalar values), not bytes.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawPosition")
)]
pub struct Position {
    line: u32,
    column: u32,
}

impl Position {
    /// Location of the first character of any input.
    pub const START: Position = Position { line: 1, column: 1 };

    /// Create a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        debug_assert!(line >= 1 && column >= 1, "positions are 1-based");
        Position { line, column }
    }

    /// 1-based line number.
    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column number.
    #[inline]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

/// Unchecked wire form, validated into a [`Position`] on deserialize.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPosition {
    line: u32,
    column: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPosition> for Position {
    type Error = &'static str;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        if raw.line == 0 || raw.column == 0 {
            return Err("line and column are 1-based");
        }
        Ok(Position {
            line: raw.line,
            column: raw.column,
        })
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
