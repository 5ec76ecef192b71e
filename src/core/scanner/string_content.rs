//! Scan the body of a double-quoted string literal.
//!
//! The scanner starts just after the opening quote and consumes characters
//! until the lookahead is the closing quote. It never consumes that quote;
//! the grammar matches it as its own token. Content is rejected when it
//! reaches end of input, contains a newline not preceded by an unescaped
//! backslash, or is empty. The grammar represents `""` by the absence of a
//! content token, so an empty body must not produce one.
//!
//! Escape tracking covers newlines only. With the default options a quote
//! at the loop top ends the content even when the previous character was a
//! backslash, so `he\"llo"` yields `he\`. `EscapedQuotePolicy::Continues`
//! lifts that for grammars that keep `\"` inside content.

use tracing::trace;

use crate::core::scanner::config::{EscapedQuotePolicy, ScannerOptions};
use crate::core::scanner::cursor::LexerCursor;
use crate::core::scanner::error::Rejection;
use crate::core::scanner::tokens::ExternalToken;

/// Scan string content at the cursor.
///
/// On success the result symbol is `StringContent` and the end mark sits
/// before the closing quote. On rejection neither is touched; the cursor
/// may have advanced past the point of failure.
///
/// ## Errors
/// Returns the `Rejection` that stopped the scan.
///
/// ## Examples
/// ```
/// # use cool_scanner::core::scanner::*;
/// let mut cursor = StringCursor::new("hello\" rest");
/// scan_string_content(&mut cursor, &ScannerOptions::default())?;
/// assert_eq!(cursor.marked_end().map(|p| p.offset), Some(5));
/// assert_eq!(cursor.result_symbol(), Some(ExternalToken::StringContent));
/// # Ok::<(), Rejection>(())
/// ```
pub fn scan_string_content(
    cursor: &mut dyn LexerCursor,
    options: &ScannerOptions,
) -> Result<(), Rejection> {
    let start = cursor.position();
    let mut has_content = false;
    let mut escape_char = false;

    loop {
        if cursor.lookahead() == Some('"')
            && !(escape_char
                && options.escaped_quote == EscapedQuotePolicy::Continues)
        {
            break;
        }
        if cursor.eof() {
            trace!(offset = start.offset, "string content hit end of input");
            return Err(Rejection::EndOfInput);
        }
        has_content = true;

        let Some(ch) = cursor.advance() else {
            return Err(Rejection::EndOfInput);
        };
        match ch {
            // An escaped backslash is plain content and clears the escape.
            '\\' => escape_char = !escape_char,
            '\n' if !escape_char => {
                trace!(
                    line = cursor.position().line,
                    "unescaped newline in string content"
                );
                return Err(Rejection::UnescapedNewline);
            }
            '\0' if options.reject_nul => {
                return Err(Rejection::NulCharacter);
            }
            _ => escape_char = false,
        }
    }

    if !has_content {
        trace!(offset = start.offset, "empty string content");
        return Err(Rejection::EmptyContent);
    }

    cursor.set_result_symbol(ExternalToken::StringContent);
    cursor.mark_end();
    trace!(
        start = start.offset,
        end = cursor.position().offset,
        "accepted string content"
    );
    Ok(())
}
