//! Character cursor over an in-memory source string.
//!
//! The cursor steps one `char` at a time and tracks three pieces of state:
//! the byte offset into the input, and a 1-based line and column.
//!
//! # Newline Bookkeeping
//!
//! [`Lexer::advance`] treats every character the same, `\n` included. It
//! bumps the column and never touches the line counter. A caller that steps
//! over a line break must report it with [`Lexer::new_line`], or use
//! [`Lexer::skip_single_newline`], which consumes `\n` or `\r\n` and reports
//! it in one step. This keeps the choice of line-ending convention with the
//! caller.
//!
//! Debug builds log a warning when the cursor steps past a `\n` that was
//! never reported. Release builds skip the check.

use tracing::{debug, trace, warn};

use crate::{LexError, LexResult, Position};

/// Clamp a `usize` count into the `u32` line/column domain.
fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Mutable cursor over an immutable source string.
///
/// # Invariant
///
/// `position` always sits on a `char` boundary of `input`, or equals
/// `input.len()` at end of input.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    input: &'a str,
    /// Byte offset of the next unread character.
    position: usize,
    line: u32,
    /// Characters consumed since the last reported line start, plus one.
    column: u32,
    /// A `\n` was stepped over and not yet reported via `new_line`.
    pending_newline: bool,
}

impl<'a> Lexer<'a> {
    /// Create a cursor at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            line: 1,
            column: 1,
            pending_newline: false,
        }
    }

    /// The complete input buffer.
    #[inline]
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    /// The character at the cursor, or `None` at end of input.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.view().chars().next()
    }

    /// Step past the current character.
    ///
    /// Moves by the character's UTF-8 width and bumps the column by one.
    /// Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.peek() else {
            return;
        };
        if self.pending_newline {
            self.check_unreported_newline();
        }
        self.position += c.len_utf8();
        self.column = self.column.saturating_add(1);
        self.pending_newline = c == '\n';
    }

    /// Record a line break: next line, column 1.
    ///
    /// Pure bookkeeping. The byte offset does not move; call this right after
    /// stepping over the line break itself.
    #[inline]
    pub fn new_line(&mut self) {
        self.line = self.line.saturating_add(1);
        self.column = 1;
        self.pending_newline = false;
    }

    /// Consume one `\n` or `\r\n` and record the line break.
    ///
    /// Does nothing if the cursor is not at a line break. A lone `\r` is not
    /// a line break.
    pub fn skip_single_newline(&mut self) {
        let rest = self.view();
        if rest.starts_with("\r\n") {
            self.advance();
            self.advance();
        } else if rest.starts_with('\n') {
            self.advance();
        } else {
            return;
        }
        self.new_line();
        trace!(pos = self.position, line = self.line, "newline");
    }

    /// Skip spaces, tabs and carriage returns.
    ///
    /// Stops before `\n`, so significant line breaks are never swallowed.
    pub fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\r') = self.peek() {
            self.advance();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Expectations
    // ─────────────────────────────────────────────────────────────────────────

    /// Consume `ch` or fail.
    ///
    /// On mismatch the cursor does not move and the error carries `msg`, or a
    /// default `expected 'c', found 'x'` message, annotated with the current
    /// location.
    #[inline]
    pub fn expect_char(&mut self, ch: char, msg: Option<&str>) -> LexResult<()> {
        match self.peek() {
            Some(c) if c == ch => {
                self.advance();
                trace!(pos = self.position, ch = ?ch, "expect_char");
                Ok(())
            }
            found => Err(self.make_expect_char_error(ch, found, msg)),
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_char_error(
        &self,
        ch: char,
        found: Option<char>,
        msg: Option<&str>,
    ) -> LexError {
        let message = match (msg, found) {
            (Some(msg), _) => msg.to_owned(),
            (None, Some(found)) => format!("expected {ch:?}, found {found:?}"),
            (None, None) => format!("expected {ch:?}, found end of input"),
        };
        debug!(
            pos = self.position,
            line = self.line,
            column = self.column,
            expected = ?ch,
            "expect_char failed"
        );
        self.error_at(&message)
    }

    /// Consume the literal `s` or fail.
    ///
    /// Matching is all-or-nothing: either every character of `s` is consumed,
    /// stepping exactly as repeated [`advance`](Self::advance) calls would,
    /// or the cursor stays put and an error is returned. The empty string
    /// always matches.
    pub fn expect_string(&mut self, s: &str, msg: Option<&str>) -> LexResult<()> {
        if !self.view().starts_with(s) {
            return Err(self.make_expect_string_error(s, msg));
        }
        for _ in s.chars() {
            self.advance();
        }
        trace!(pos = self.position, literal = s, "expect_string");
        Ok(())
    }

    #[cold]
    #[inline(never)]
    fn make_expect_string_error(&self, s: &str, msg: Option<&str>) -> LexError {
        let message = match msg {
            Some(msg) => msg.to_owned(),
            None => format!("expected {s:?}"),
        };
        debug!(
            pos = self.position,
            line = self.line,
            column = self.column,
            expected = s,
            "expect_string failed"
        );
        self.error_at(&message)
    }

    /// The unread remainder of the input.
    ///
    /// Lets callers match literal prefixes in one step, then hand the
    /// remaining suffix back through [`update_view`](Self::update_view).
    #[inline]
    pub fn view(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// Move the cursor to the start of `new_view`.
    ///
    /// `new_view` must be a suffix of [`view()`](Self::view), borrowed from
    /// the same buffer. Every skipped `\n` counts as a reported line break,
    /// every other skipped character as one column.
    ///
    /// A view that is not such a suffix leaves the cursor untouched.
    pub fn update_view(&mut self, new_view: &'a str) {
        let Some(start) = self.suffix_offset(new_view) else {
            warn!(
                pos = self.position,
                view_len = new_view.len(),
                "update_view: view is not a suffix of the remaining input"
            );
            return;
        };
        let input = self.input;
        let skipped = &input[self.position..start];
        if skipped.is_empty() {
            return;
        }
        if self.pending_newline {
            self.check_unreported_newline();
        }

        let bytes = skipped.as_bytes();
        match memchr::memrchr(b'\n', bytes) {
            Some(last) => {
                let newlines = memchr::memchr_iter(b'\n', bytes).count();
                self.line = self.line.saturating_add(saturating_u32(newlines));
                let tail = skipped[last + 1..].chars().count();
                self.column = saturating_u32(tail).saturating_add(1);
            }
            None => {
                let chars = skipped.chars().count();
                self.column = self.column.saturating_add(saturating_u32(chars));
            }
        }
        self.pending_newline = false;
        trace!(
            from = self.position,
            to = start,
            line = self.line,
            column = self.column,
            "update_view"
        );
        self.position = start;
    }

    /// Byte offset at which `view` starts, if it is a suffix of the
    /// remaining input.
    fn suffix_offset(&self, view: &str) -> Option<usize> {
        let base = self.input.as_ptr() as usize;
        let offset = (view.as_ptr() as usize).checked_sub(base)?;
        let is_suffix = offset >= self.position
            && offset <= self.input.len()
            && offset + view.len() == self.input.len()
            && self.input.is_char_boundary(offset);
        is_suffix.then_some(offset)
    }

    /// Current line and column.
    #[inline]
    pub fn get_loc(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Current byte offset.
    #[inline]
    pub fn get_position(&self) -> usize {
        self.position
    }

    /// Format `msg` with the current location: `"<msg> at line L, column C"`.
    ///
    /// Only formats; raising is up to the caller.
    pub fn error(&self, msg: &str) -> String {
        format!("{msg} at {}", self.get_loc())
    }

    /// Build a [`LexError`] for `msg` at the current location.
    pub fn error_at(&self, msg: &str) -> LexError {
        LexError::new(self.error(msg), self.get_loc(), self.position)
    }

    /// Warn about a `\n` that was stepped over without `new_line`.
    fn check_unreported_newline(&self) {
        if cfg!(debug_assertions) {
            warn!(
                pos = self.position,
                line = self.line,
                column = self.column,
                "stepped past a newline that was never reported; line/column are out of sync"
            );
        }
    }
}
