//! Accepted Content Tests
//!
//! Inputs the scanner accepts, and exactly where it commits the boundary.

use crate::string_content::{assert_content, scan_body};

use cool_scanner::core::scanner::Position;

#[test]
fn simple_word() {
    assert_content("hello\"", "hello");
}

#[test]
fn boundary_sits_before_closing_quote() {
    let observed = scan_body("hello\"");
    let end = observed.result.end().expect("accepted");
    // Offset counts the opening quote at 0.
    assert_eq!(end, Position::new(1, 7, 6));
    assert_eq!(observed.cursor_offset, 6, "closing quote is not consumed");
}

#[test]
fn escaped_quote_terminates_content() {
    // The quote after a backslash still ends the content.
    assert_content("he\\\"llo\"", "he\\");
}

#[test]
fn escaped_newline_spans_lines() {
    assert_content("line1\\\nline2\"", "line1\\\nline2");
    let end = scan_body("line1\\\nline2\"").result.end().expect("accepted");
    assert_eq!(end.line, 2);
    assert_eq!(end.column, 6);
}

#[test]
fn single_character() {
    assert_content("x\"", "x");
}

#[test]
fn single_backslash_before_quote() {
    assert_content("\\\"", "\\");
}

#[test]
fn escape_letters_stay_raw() {
    assert_content("tab\\there\\n\"", "tab\\there\\n");
}

#[test]
fn whitespace_only_content() {
    assert_content("   \t \"", "   \t ");
}

#[test]
fn carriage_return_is_plain_content() {
    assert_content("a\rb\"", "a\rb");
}

#[test]
fn unicode_content() {
    assert_content("héllo wörld ✓\"", "héllo wörld ✓");
}

#[test]
fn only_first_quote_counts() {
    let observed = scan_body("a\" + \"b\"");
    assert_eq!(observed.content.as_deref(), Some("a"));
}

#[test]
fn triple_backslash_newline_is_escaped() {
    assert_content("a\\\\\\\nb\"", "a\\\\\\\nb");
}

#[test]
fn several_escaped_newlines() {
    assert_content("a\\\nb\\\nc\"", "a\\\nb\\\nc");
}
