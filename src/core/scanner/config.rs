//! Configure string-content scanning.
//!
//! `ScannerOptions` holds the few policy knobs the scanner exposes. The
//! defaults reproduce the grammar's established behavior: a quote always
//! ends the content, even right after a backslash, and NUL is ordinary
//! content. Options are fixed for the lifetime of a scanner.
//!
//! ## Examples
//! ```
//! # use cool_scanner::core::scanner::config::*;
//! let opts = ScannerOptions {
//!     escaped_quote: EscapedQuotePolicy::Continues,
//!     ..Default::default()
//! };
//! assert!(!opts.reject_nul);
//! assert_eq!(opts.escaped_quote, EscapedQuotePolicy::Continues);
//! ```

/// How a quote immediately after an unescaped backslash is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapedQuotePolicy {
    /// The quote ends the content; the backslash stays in it.
    #[default]
    Terminates,
    /// The quote is consumed as content and scanning continues.
    Continues,
}

/// Policy knobs for string-content scanning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannerOptions {
    /// Treatment of `\"` inside string content.
    pub escaped_quote: EscapedQuotePolicy,
    /// Reject content containing the NUL character.
    pub reject_nul: bool,
}

impl ScannerOptions {
    /// Set the escaped-quote policy.
    #[must_use]
    pub fn with_escaped_quote(mut self, policy: EscapedQuotePolicy) -> Self {
        self.escaped_quote = policy;
        self
    }

    /// Enable or disable NUL rejection.
    #[must_use]
    pub fn with_reject_nul(mut self, reject_nul: bool) -> Self {
        self.reject_nul = reject_nul;
        self
    }
}
