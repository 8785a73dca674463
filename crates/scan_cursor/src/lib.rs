//! Character-level scanning primitives for handwritten parsers.
//!
//! This crate provides the layer beneath a tokenizer: a [`Lexer`] cursor
//! over an in-memory string that can be peeked, advanced one character at a
//! time, and asked where it is. It knows nothing about any grammar.
//!
//! - [`Position`]: 1-based line/column snapshot
//! - [`Lexer`]: the cursor, with whitespace/newline helpers, expectation
//!   matching and view-based bulk prefix matching
//! - [`LexError`]: the single failure kind, already annotated with a location
//!
//! # Example
//!
//! ```
//! use scan_cursor::{Lexer, Position};
//!
//! let mut lexer = Lexer::new("key = \"value\"\nnext");
//! lexer.expect_string("key", None)?;
//! lexer.skip_whitespace();
//! lexer.expect_char('=', None)?;
//! lexer.skip_whitespace();
//!
//! // Bulk-match a quoted literal through the view.
//! let rest = lexer.view().strip_prefix("\"value\"").unwrap_or(lexer.view());
//! lexer.update_view(rest);
//!
//! lexer.skip_single_newline();
//! assert_eq!(lexer.get_loc(), Position::new(2, 1));
//! assert_eq!(lexer.peek(), Some('n'));
//! # Ok::<(), scan_cursor::LexError>(())
//! ```
//!
//! Logging goes through `tracing`; the crate never installs a subscriber.

mod error;
mod lexer;
mod position;

pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use position::Position;
