//! The external scanner interface the host parser calls into.
//!
//! A host that delegates tokens to an external scanner requires five entry
//! points: create, destroy, serialize, deserialize and scan. The Cool
//! scanner keeps no state between calls, so the lifecycle hooks do nothing
//! and serialization writes zero bytes. All mutable state lives in locals of
//! a single `scan` call.
//!
//! During error recovery the host first calls `scan` with every external
//! marked valid. The grammar declares an unused `ErrorSentinel` external
//! for exactly this reason; when it is valid the scanner declines without
//! reading input.
//!
//! ## Examples
//! ```
//! # use cool_scanner::core::scanner::*;
//! let mut scanner = CoolScanner::create();
//! let mut cursor = StringCursor::new("hi\"");
//! let valid = ValidTokens::only(ExternalToken::StringContent);
//! assert!(scanner.scan(&mut cursor, valid));
//! assert_eq!(cursor.result_symbol(), Some(ExternalToken::StringContent));
//!
//! let mut cursor = StringCursor::new("hi\"");
//! assert!(!scanner.scan(&mut cursor, ValidTokens::all()));
//! ```

use tracing::trace;

use crate::core::scanner::config::ScannerOptions;
use crate::core::scanner::cursor::{LexerCursor, Position};
use crate::core::scanner::error::Rejection;
use crate::core::scanner::string_content::scan_string_content;
use crate::core::scanner::tokens::{ExternalToken, ValidTokens};

/// Outcome of one scan as observed by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanResult {
    /// A token was produced; `end` is the committed token boundary.
    Accepted { end: Position, token: ExternalToken },
    /// No token could be produced here.
    Rejected,
}

impl ScanResult {
    /// Returns `true` for `Accepted`.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, ScanResult::Accepted { .. })
    }

    /// Returns the produced token, if any.
    #[must_use]
    pub fn token(&self) -> Option<ExternalToken> {
        match self {
            ScanResult::Accepted { token, .. } => Some(*token),
            ScanResult::Rejected => None,
        }
    }

    /// Returns the committed end position, if any.
    #[must_use]
    pub fn end(&self) -> Option<Position> {
        match self {
            ScanResult::Accepted { end, .. } => Some(*end),
            ScanResult::Rejected => None,
        }
    }
}

/// Entry points a host parser requires from an external scanner.
pub trait ExternalScanner {
    /// Creates scanner state. Called once when the language is set.
    fn create() -> Self
    where
        Self: Sized;

    /// Releases scanner state.
    fn destroy(self)
    where
        Self: Sized,
    {
    }

    /// Writes the state into `buffer` and returns the number of bytes used.
    fn serialize(&self, buffer: &mut [u8]) -> usize;

    /// Restores the state written by `serialize`.
    fn deserialize(&mut self, buffer: &[u8]);

    /// Tries to produce one of the `valid` tokens at the cursor.
    ///
    /// On `true` the host reads the result symbol and end mark back from
    /// the cursor.
    fn scan(&mut self, cursor: &mut dyn LexerCursor, valid: ValidTokens)
    -> bool;
}

/// External scanner for the Cool grammar.
///
/// Holds only its options. Every call to `scan` starts from fresh local
/// state, so rerunning a scan from the same cursor position always yields
/// the same result.
#[derive(Debug, Clone, Default)]
pub struct CoolScanner {
    options: ScannerOptions,
}

impl CoolScanner {
    /// Creates a scanner with explicit options.
    #[must_use]
    pub fn with_options(options: ScannerOptions) -> Self {
        Self { options }
    }

    /// Returns the options in effect.
    #[must_use]
    pub fn options(&self) -> &ScannerOptions {
        &self.options
    }

    /// Scans at the cursor and reports the outcome as a `ScanResult`.
    ///
    /// The error sentinel is checked before anything else so that recovery
    /// probes never consume input.
    pub fn scan_tokens(
        &self,
        cursor: &mut dyn LexerCursor,
        valid: ValidTokens,
    ) -> ScanResult {
        match self.try_scan(cursor, valid) {
            Ok(end) => ScanResult::Accepted {
                end,
                token: ExternalToken::StringContent,
            },
            Err(rejection) => {
                trace!(%rejection, "string content rejected");
                ScanResult::Rejected
            }
        }
    }

    fn try_scan(
        &self,
        cursor: &mut dyn LexerCursor,
        valid: ValidTokens,
    ) -> Result<Position, Rejection> {
        if valid.is_error_recovery() {
            return Err(Rejection::ErrorRecovery);
        }
        if !valid.contains(ExternalToken::StringContent) {
            return Err(Rejection::NotExpected);
        }
        scan_string_content(cursor, &self.options)?;
        // scan_string_content marks the end at the current position.
        Ok(cursor.position())
    }
}

impl ExternalScanner for CoolScanner {
    fn create() -> Self {
        Self::default()
    }

    fn serialize(&self, _buffer: &mut [u8]) -> usize {
        0
    }

    fn deserialize(&mut self, _buffer: &[u8]) {}

    fn scan(
        &mut self,
        cursor: &mut dyn LexerCursor,
        valid: ValidTokens,
    ) -> bool {
        self.scan_tokens(cursor, valid).is_accepted()
    }
}
