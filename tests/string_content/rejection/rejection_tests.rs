//! Rejection Tests
//!
//! Every rejection cause: empty content, end of input, unescaped newline,
//! the error-recovery probe, and content not being expected.

use crate::string_content::{assert_rejected, scan_body, scan_body_with};

use cool_scanner::core::scanner::{
    ExternalToken, ScanResult, ScannerOptions, ValidTokens,
};

#[test]
fn immediate_quote_is_empty() {
    assert_rejected("\"");
}

#[test]
fn empty_rejection_consumes_nothing() {
    let observed = scan_body("\"");
    assert_eq!(observed.cursor_offset, 1);
}

#[test]
fn end_of_input_before_quote() {
    assert_rejected("hello");
}

#[test]
fn end_of_input_immediately() {
    assert_rejected("");
}

#[test]
fn trailing_backslash_at_end_of_input() {
    assert_rejected("abc\\");
}

#[test]
fn raw_newline() {
    assert_rejected("line1\nline2\"");
}

#[test]
fn raw_newline_first() {
    assert_rejected("\nline2\"");
}

#[test]
fn raw_newline_stops_at_newline() {
    let observed = scan_body("ab\ncd\"");
    // Opening quote, `a`, `b`, newline.
    assert_eq!(observed.cursor_offset, 4);
}

#[test]
fn escaped_backslash_then_newline() {
    assert_rejected("a\\\\\nb\"");
}

#[test]
fn newline_after_spent_escape() {
    assert_rejected("a\\b\nc\"");
}

#[test]
fn sentinel_rejects_valid_content() {
    for valid in [
        ValidTokens::all(),
        ValidTokens::only(ExternalToken::ErrorSentinel),
    ] {
        let observed =
            scan_body_with("hello\"", valid, &ScannerOptions::default());
        assert!(!observed.accepted);
        assert_eq!(observed.result, ScanResult::Rejected);
        assert_eq!(observed.cursor_offset, 1, "probe must not read input");
    }
}

#[test]
fn content_not_expected() {
    let observed = scan_body_with(
        "hello\"",
        ValidTokens::empty(),
        &ScannerOptions::default(),
    );
    assert!(!observed.accepted);
    assert_eq!(observed.cursor_offset, 1);
}

#[test]
fn nul_rejected_only_when_enabled() {
    let valid = ValidTokens::only(ExternalToken::StringContent);
    let strict = ScannerOptions::default().with_reject_nul(true);
    assert!(!scan_body_with("a\0b\"", valid, &strict).accepted);
    assert!(scan_body("a\0b\"").accepted);
}
