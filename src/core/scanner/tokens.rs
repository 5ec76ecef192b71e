//! External token kinds and source coordinates shared with the host parser.
//!
//! This module declares the token kinds the external scanner exchanges with
//! the host, the set type the host uses to announce which of them are valid
//! at the current parse position, and the spans reported by the literal
//! driver.
//!
//! # Model
//! - `ExternalToken` enumerates the kinds listed in the grammar's
//!   `externals` array, in the same order. The discriminant is the index the
//!   host uses in its valid-symbol flags.
//! - `ValidTokens` is a bitset over `ExternalToken`.
//! - `SymbolLocation` records a single position as `(line, column)`.
//! - `SymbolSpan` records a contiguous region `[start, end]`.

use std::fmt;

/// Token kinds declared as externals by the Cool grammar.
///
/// Order matters: it mirrors the grammar's `externals` list, and the host
/// addresses valid-symbol flags by this index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExternalToken {
    /// The body of a double-quoted string, without the quotes.
    StringContent = 0,
    /// Never produced. Valid only while the host probes during error
    /// recovery, when every external is marked valid at once.
    ErrorSentinel = 1,
}

impl ExternalToken {
    /// Every external token, in grammar order.
    pub const ALL: [ExternalToken; 2] =
        [ExternalToken::StringContent, ExternalToken::ErrorSentinel];

    /// Returns the index of this kind in the host's valid-symbol flags.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the kind at `index` in grammar order, if any.
    ///
    /// ## Examples
    /// ```
    /// # use cool_scanner::core::scanner::ExternalToken;
    /// assert_eq!(
    ///     ExternalToken::from_index(0),
    ///     Some(ExternalToken::StringContent)
    /// );
    /// assert_eq!(ExternalToken::from_index(7), None);
    /// ```
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the grammar name of this kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ExternalToken::StringContent => "string_content",
            ExternalToken::ErrorSentinel => "_error_sentinel",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for ExternalToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of external tokens the host accepts at the current position.
///
/// ## Examples
/// ```
/// # use cool_scanner::core::scanner::{ExternalToken, ValidTokens};
/// let valid = ValidTokens::only(ExternalToken::StringContent);
/// assert!(valid.contains(ExternalToken::StringContent));
/// assert!(!valid.is_error_recovery());
/// assert!(ValidTokens::all().is_error_recovery());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ValidTokens {
    bits: u8,
}

impl ValidTokens {
    /// A set with no valid tokens.
    #[must_use]
    pub fn empty() -> Self {
        Self { bits: 0 }
    }

    /// A set with every external token valid, as during error recovery.
    #[must_use]
    pub fn all() -> Self {
        ExternalToken::ALL
            .iter()
            .fold(Self::empty(), |set, &token| set.with(token))
    }

    /// A set containing exactly `token`.
    #[must_use]
    pub fn only(token: ExternalToken) -> Self {
        Self::empty().with(token)
    }

    /// Returns a copy of this set with `token` added.
    #[must_use]
    pub fn with(self, token: ExternalToken) -> Self {
        Self {
            bits: self.bits | token.bit(),
        }
    }

    /// Builds a set from the host's boolean flags, indexed in grammar order.
    ///
    /// Missing trailing flags count as `false`; extra flags are ignored.
    ///
    /// ## Examples
    /// ```
    /// # use cool_scanner::core::scanner::{ExternalToken, ValidTokens};
    /// let valid = ValidTokens::from_flags(&[true, false]);
    /// assert_eq!(valid, ValidTokens::only(ExternalToken::StringContent));
    /// ```
    #[must_use]
    pub fn from_flags(flags: &[bool]) -> Self {
        ExternalToken::ALL
            .iter()
            .zip(flags)
            .filter(|&(_, &valid)| valid)
            .fold(Self::empty(), |set, (&token, _)| set.with(token))
    }

    /// Returns `true` if `token` is valid.
    #[must_use]
    pub fn contains(self, token: ExternalToken) -> bool {
        self.bits & token.bit() != 0
    }

    /// Returns `true` if no token is valid.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns `true` when the host is probing during error recovery.
    ///
    /// The sentinel is never valid in a real parse state, so its presence
    /// alone identifies the probe.
    #[must_use]
    pub fn is_error_recovery(self) -> bool {
        self.contains(ExternalToken::ErrorSentinel)
    }

    /// Iterates over the valid tokens in grammar order.
    pub fn tokens(self) -> impl Iterator<Item = ExternalToken> {
        ExternalToken::ALL
            .into_iter()
            .filter(move |&token| self.contains(token))
    }
}

impl FromIterator<ExternalToken> for ValidTokens {
    fn from_iter<I: IntoIterator<Item = ExternalToken>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

/// A position in the source text.
///
/// Positions are expressed as 1-based line and column numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolLocation {
    /// Line number of the position.
    pub line: u32,
    /// Column number of the position.
    pub column: u32,
}

/// A contiguous range in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSpan {
    /// The start location of the span.
    pub start: SymbolLocation,
    /// The end location of the span.
    pub end: SymbolLocation,
}

impl SymbolSpan {
    /// A span that starts and ends at `location`.
    #[must_use]
    pub fn point(location: SymbolLocation) -> Self {
        Self {
            start: location.clone(),
            end: location,
        }
    }
}
