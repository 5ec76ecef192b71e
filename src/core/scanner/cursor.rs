//! Read source text one character at a time on behalf of the host.
//!
//! The external scanner never owns the input. The host hands it a cursor
//! through the `LexerCursor` trait, which exposes lookahead, single-step
//! advance, an end-of-input test, and the two ways a scanner reports a
//! token back: the result symbol and the end mark. The end mark is separate
//! from the advancing position because a scanner may look past the token it
//! ends up producing.
//!
//! `StringCursor` is the in-memory implementation used by the literal
//! driver and by tests. Besides the trait, it offers host-side operations
//! (restoring a saved position, reading back the mark and the result
//! symbol, slicing text between positions) that a scanner has no access to.
//!
//! Positions are 1-based (line, column); offsets count Unicode scalar
//! values from the start of the input.
//!
//! ## Examples
//! ```
//! # use cool_scanner::core::scanner::{LexerCursor, StringCursor};
//! let mut cursor = StringCursor::new("ab");
//! assert_eq!(cursor.lookahead(), Some('a'));
//! cursor.advance();
//! cursor.mark_end();
//! cursor.advance();
//! assert!(cursor.eof());
//! assert_eq!(cursor.marked_end().map(|p| p.offset), Some(1));
//! ```

use crate::core::scanner::tokens::{ExternalToken, SymbolLocation};

/// Track a location in the input.
///
/// Stores 1-based `line` and `column` and a character `offset`.
///
/// ## Examples
/// ```
/// # use cool_scanner::core::scanner::Position;
/// let p = Position::new(1, 1, 0);
/// assert_eq!(p.line, 1);
/// assert_eq!(p.column, 1);
/// assert_eq!(p.offset, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: usize,
}

impl Position {
    /// Create a new position with explicit line, column, and offset.
    #[must_use]
    pub fn new(line: u32, column: u32, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Convert to a `SymbolLocation` (line and column only).
    #[must_use]
    pub fn to_symbol_location(&self) -> SymbolLocation {
        SymbolLocation {
            line: self.line,
            column: self.column,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1, 0)
    }
}

/// The view of the input an external scanner works with.
///
/// Implementations must be consistent: after `advance()`, `lookahead()`
/// reports the character following the one consumed. `advance()` at end of
/// input is a no-op. Nothing in this trait moves backwards.
pub trait LexerCursor: std::fmt::Debug {
    /// Returns the next unconsumed character, or `None` at end of input.
    fn lookahead(&self) -> Option<char>;

    /// Consumes the lookahead character and returns it, or `None` at end.
    fn advance(&mut self) -> Option<char>;

    /// Returns `true` when no input remains.
    fn eof(&self) -> bool {
        self.lookahead().is_none()
    }

    /// Commits the current position as the end of the token being scanned.
    fn mark_end(&mut self);

    /// Records the kind of token the scanner produced.
    fn set_result_symbol(&mut self, token: ExternalToken);

    /// Returns the current position.
    fn position(&self) -> Position;
}

/// Provide a `LexerCursor` over a UTF-8 `&str`.
///
/// Tracks newlines and columns as characters are advanced. Offsets index an
/// internal `Vec<char>` captured at creation time.
#[derive(Debug, Clone)]
pub struct StringCursor {
    // Pre-collected Unicode scalar values for random access.
    chars: Vec<char>,
    position: Position,
    marked_end: Option<Position>,
    result_symbol: Option<ExternalToken>,
}

impl StringCursor {
    /// Creates a cursor at the start of `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            position: Position::default(),
            marked_end: None,
            result_symbol: None,
        }
    }

    /// Creates a cursor positioned after the first `offset` characters.
    ///
    /// Offsets past the end leave the cursor at end of input.
    ///
    /// ## Examples
    /// ```
    /// # use cool_scanner::core::scanner::{LexerCursor, StringCursor};
    /// let cursor = StringCursor::at_offset("\"abc\"", 1);
    /// assert_eq!(cursor.lookahead(), Some('a'));
    /// assert_eq!(cursor.position().column, 2);
    /// ```
    #[must_use]
    pub fn at_offset(input: &str, offset: usize) -> Self {
        let mut cursor = Self::new(input);
        for _ in 0..offset {
            if cursor.advance().is_none() {
                break;
            }
        }
        cursor
    }

    /// Returns the position committed by the last `mark_end`, if any.
    #[must_use]
    pub fn marked_end(&self) -> Option<Position> {
        self.marked_end
    }

    /// Returns the token kind recorded by the last scan, if any.
    #[must_use]
    pub fn result_symbol(&self) -> Option<ExternalToken> {
        self.result_symbol
    }

    /// Moves the cursor to a previously observed `position`.
    ///
    /// This is a host operation: the host rewinds to the end mark after a
    /// successful scan, or to the starting point after a rejected one. The
    /// end mark and result symbol are cleared so the next scan starts clean.
    pub fn restore(&mut self, position: Position) {
        self.position = position;
        self.marked_end = None;
        self.result_symbol = None;
    }

    /// Returns the text between two offsets, clamped to the input.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// Returns the characters after the current position.
    #[must_use]
    pub fn remaining(&self) -> String {
        self.slice(self.position.offset, self.chars.len())
    }
}

impl LexerCursor for StringCursor {
    fn lookahead(&self) -> Option<char> {
        self.chars.get(self.position.offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.lookahead()?;
        self.position.offset += 1;
        if ch == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some(ch)
    }

    fn mark_end(&mut self) {
        self.marked_end = Some(self.position);
    }

    fn set_result_symbol(&mut self, token: ExternalToken) {
        self.result_symbol = Some(token);
    }

    fn position(&self) -> Position {
        self.position
    }
}
