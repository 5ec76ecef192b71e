//! Errors raised while scanning string literals.
//!
//! `Rejection` names why the external scanner declined to produce a token.
//! The host only ever sees `false`; the cause exists for logging and tests.
//! `LexError` is returned by the literal driver when a whole string literal
//! cannot be tokenized.

use thiserror::Error;

use crate::core::scanner::tokens::SymbolSpan;

/// Why a string-content scan was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The host is probing during error recovery.
    #[error("error recovery in progress")]
    ErrorRecovery,
    /// String content is not valid at this parse position.
    #[error("string content not expected here")]
    NotExpected,
    /// Input ended before the closing quote.
    #[error("end of input inside string")]
    EndOfInput,
    /// A raw newline appeared without a preceding backslash.
    #[error("unescaped newline inside string")]
    UnescapedNewline,
    /// A NUL character appeared while NUL rejection is enabled.
    #[error("NUL character inside string")]
    NulCharacter,
    /// The closing quote came before any content.
    #[error("empty string content")]
    EmptyContent,
}

/// Describe a lexical error with a diagnostic span.
///
/// ## Examples
/// ```
/// # use cool_scanner::core::scanner::{LexError, SymbolLocation, SymbolSpan};
/// let span = SymbolSpan::point(SymbolLocation { line: 1, column: 1 });
/// let err = LexError::new("oops".into(), span);
/// assert!(err.message().contains("oops"));
/// assert_eq!(err.to_string(), "Lexical error: oops");
/// ```
#[derive(Debug, Clone, Error)]
#[error("Lexical error: {message}")]
pub struct LexError {
    message: String,
    span: SymbolSpan,
}

impl LexError {
    /// Creates a new lexical error.
    #[must_use]
    pub fn new(message: String, span: SymbolSpan) -> Self {
        Self { message, span }
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the span where the error occurred.
    #[must_use]
    pub fn span(&self) -> &SymbolSpan {
        &self.span
    }
}
