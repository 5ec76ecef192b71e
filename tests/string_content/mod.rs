//! String Content Integration Test Utilities
//!
//! Helpers that position a cursor just past an opening quote, run the
//! external scanner the way the host does, and report what it committed.

use cool_scanner::core::scanner::{
    CoolScanner, ExternalScanner, ExternalToken, LexerCursor, ScanResult,
    ScannerOptions, StringCursor, ValidTokens,
};
use std::sync::Once;

/// What the host observes after one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observed {
    pub accepted: bool,
    pub result: ScanResult,
    pub content: Option<String>,
    pub cursor_offset: usize,
}

/// Install a test subscriber once; `RUST_LOG=trace` shows scan decisions.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env(),
            )
            .with_test_writer()
            .try_init();
    });
}

/// The valid set of an ordinary string-content position.
pub fn content_valid() -> ValidTokens {
    ValidTokens::only(ExternalToken::StringContent)
}

/// Scan `body` (the text after an opening quote) with default options.
pub fn scan_body(body: &str) -> Observed {
    scan_body_with(body, content_valid(), &ScannerOptions::default())
}

/// Scan `body` with an explicit valid set and options.
pub fn scan_body_with(
    body: &str,
    valid: ValidTokens,
    options: &ScannerOptions,
) -> Observed {
    init_tracing();

    let source = format!("\"{body}");
    let mut cursor = StringCursor::at_offset(&source, 1);
    let mut scanner = CoolScanner::with_options(options.clone());

    let result = scanner.scan_tokens(&mut cursor, valid);
    let accepted = {
        let mut replay = StringCursor::at_offset(&source, 1);
        scanner.scan(&mut replay, valid)
    };

    let content = cursor
        .marked_end()
        .map(|end| cursor.slice(1, end.offset));

    Observed {
        accepted,
        result,
        content,
        cursor_offset: cursor.position().offset,
    }
}

/// Assert that `body` is accepted with exactly `expected` as content.
pub fn assert_content(body: &str, expected: &str) {
    let observed = scan_body(body);
    assert!(observed.accepted, "{body:?} should be accepted");
    assert_eq!(
        observed.result.token(),
        Some(ExternalToken::StringContent),
        "accepted scan should produce string content"
    );
    assert_eq!(
        observed.content.as_deref(),
        Some(expected),
        "content of {body:?}"
    );
}

/// Assert that `body` is rejected and nothing was committed.
pub fn assert_rejected(body: &str) {
    let observed = scan_body(body);
    assert!(!observed.accepted, "{body:?} should be rejected");
    assert_eq!(observed.result, ScanResult::Rejected);
    assert_eq!(observed.content, None, "rejection must not mark an end");
}
