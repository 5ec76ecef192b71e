//! Drive the external scanner across a whole string literal.
//!
//! The Cool grammar declares
//!
//! ```text
//! string_literal: '"' repeat(choice(string_content, escape_sequence)) '"'
//! escape_sequence: /\\[bntf"]/
//! ```
//!
//! `StringLiteralRecognizer` plays the host's part for that rule: it
//! matches the quotes itself, asks the external scanner for content with
//! only `StringContent` valid, falls back to an escape sequence when the
//! scanner declines, and rewinds the cursor to the committed end mark after
//! each accepted scan. It does not tokenize anything else.
//!
//! ## Examples
//! ```
//! # use cool_scanner::core::scanner::{parse_string_literal, StringPart};
//! let literal = parse_string_literal("\"hello\" + x")?;
//! assert_eq!(literal.raw(), "hello");
//! assert_eq!(literal.parts(), &[StringPart::Content("hello".into())]);
//! # Ok::<(), cool_scanner::core::scanner::LexError>(())
//! ```

use tracing::debug;

use crate::core::scanner::cursor::{LexerCursor, Position, StringCursor};
use crate::core::scanner::error::LexError;
use crate::core::scanner::external::{CoolScanner, ScanResult};
use crate::core::scanner::tokens::{ExternalToken, SymbolSpan, ValidTokens};

/// Characters allowed after a backslash in an `escape_sequence` token.
const ESCAPE_CHARS: [char; 5] = ['b', 'n', 't', 'f', '"'];

/// One token between the quotes of a string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringPart {
    /// Text produced by the external scanner.
    Content(String),
    /// An escape sequence; holds the character after the backslash.
    Escape(char),
}

impl StringPart {
    /// Returns the source text of this part.
    #[must_use]
    pub fn source(&self) -> String {
        match self {
            StringPart::Content(text) => text.clone(),
            StringPart::Escape(ch) => format!("\\{ch}"),
        }
    }
}

/// A string literal split into the tokens the grammar sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    parts: Vec<StringPart>,
    span: SymbolSpan,
}

impl StringLiteral {
    /// Returns the parts in source order. Empty for `""`.
    #[must_use]
    pub fn parts(&self) -> &[StringPart] {
        &self.parts
    }

    /// Returns the span from the opening quote to past the closing quote.
    #[must_use]
    pub fn span(&self) -> &SymbolSpan {
        &self.span
    }

    /// Returns the source text between the quotes.
    #[must_use]
    pub fn raw(&self) -> String {
        self.parts.iter().map(StringPart::source).collect()
    }
}

/// Recognize a double-quoted string literal using the external scanner.
#[derive(Debug, Default)]
pub struct StringLiteralRecognizer {
    scanner: CoolScanner,
}

impl StringLiteralRecognizer {
    /// Creates a recognizer backed by a default `CoolScanner`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recognizer backed by `scanner`.
    #[must_use]
    pub fn with_scanner(scanner: CoolScanner) -> Self {
        Self { scanner }
    }

    /// Returns `true` if a string literal starts at the cursor.
    #[must_use]
    pub fn can_handle(&self, input: &dyn LexerCursor) -> bool {
        input.lookahead() == Some('"')
    }

    /// Consumes a complete string literal, closing quote included.
    ///
    /// ## Errors
    /// Returns `LexError` when the literal does not start with a quote, when
    /// input ends before the closing quote, or when content is neither
    /// accepted by the scanner nor an escape sequence.
    pub fn consume(
        &self,
        input: &mut StringCursor,
    ) -> Result<StringLiteral, LexError> {
        let start = input.position();
        if input.advance() != Some('"') {
            return Err(error_at("Expected opening quote", start, start));
        }

        let mut parts = Vec::new();
        loop {
            if input.lookahead() == Some('"') {
                input.advance();
                break;
            }

            let attempt = input.position();
            let valid = ValidTokens::only(ExternalToken::StringContent);
            match self.scanner.scan_tokens(input, valid) {
                ScanResult::Accepted { end, .. } => {
                    parts.push(StringPart::Content(
                        input.slice(attempt.offset, end.offset),
                    ));
                    input.restore(end);
                    continue;
                }
                ScanResult::Rejected => input.restore(attempt),
            }

            if let Some(escape) = Self::consume_escape(input) {
                parts.push(StringPart::Escape(escape));
                continue;
            }

            let here = input.position();
            // Nothing left that could close the literal on this line.
            let message = if input.remaining().find(['"', '\n']).is_none() {
                "Unterminated string literal"
            } else {
                "Invalid string content"
            };
            debug!(line = here.line, column = here.column, message);
            return Err(error_at(message, start, here));
        }

        Ok(StringLiteral {
            parts,
            span: SymbolSpan {
                start: start.to_symbol_location(),
                end: input.position().to_symbol_location(),
            },
        })
    }

    fn consume_escape(input: &mut StringCursor) -> Option<char> {
        let start = input.position();
        if input.advance() != Some('\\') {
            input.restore(start);
            return None;
        }
        match input.lookahead() {
            Some(ch) if ESCAPE_CHARS.contains(&ch) => {
                input.advance();
                Some(ch)
            }
            _ => {
                input.restore(start);
                None
            }
        }
    }
}

fn error_at(message: &str, start: Position, end: Position) -> LexError {
    LexError::new(
        message.to_string(),
        SymbolSpan {
            start: start.to_symbol_location(),
            end: end.to_symbol_location(),
        },
    )
}

/// Parse the string literal at the start of `input`.
///
/// ## Errors
/// Returns `LexError` under the same conditions as
/// `StringLiteralRecognizer::consume`.
pub fn parse_string_literal(input: &str) -> Result<StringLiteral, LexError> {
    let mut cursor = StringCursor::new(input);
    StringLiteralRecognizer::new().consume(&mut cursor)
}
