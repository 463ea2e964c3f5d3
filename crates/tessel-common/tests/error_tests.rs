//! Tests for error positioning and classification.

use strum::IntoEnumIterator;
use tessel_common::{ErrorCategory, ParseError, ParseErrorKind};
use tessel_common::warning::{clear_warnings, warn_once};

#[test]
fn test_position_on_first_line() {
    let err = ParseError::at(ParseErrorKind::UnexpectedDoctype, "abc<!DOCTYPE html>", 3);
    assert_eq!(err.line, 1);
    assert_eq!(err.column, 4);
    assert_eq!(err.position, 3);
    assert_eq!(err.snippet, "<!DOCTYPE html>");
}

#[test]
fn test_position_after_newlines() {
    let source = "<div>\n  <p>\n  </span>";
    let position = source.find("</span>").unwrap();
    let err = ParseError::at(ParseErrorKind::ExpectedEndOfInput, source, position);
    assert_eq!(err.line, 3);
    assert_eq!(err.column, 3);
}

#[test]
fn test_column_counts_characters_not_bytes() {
    let source = "héllo<";
    let err = ParseError::at(ParseErrorKind::syntax("bad"), source, source.len() - 1);
    assert_eq!(err.column, 6);
}

#[test]
fn test_position_clamped_and_snapped() {
    let source = "é";
    let err = ParseError::at(ParseErrorKind::syntax("bad"), source, 1);
    assert_eq!(err.position, 0);

    let err = ParseError::at(ParseErrorKind::syntax("bad"), source, 99);
    assert_eq!(err.position, source.len());
    assert_eq!(err.snippet, "");
}

#[test]
fn test_snippet_stops_at_newline() {
    let err = ParseError::at(ParseErrorKind::syntax("bad"), "ab\ncd", 0);
    assert_eq!(err.snippet, "ab");
}

#[test]
fn test_display_includes_message_and_location() {
    let kind = ParseErrorKind::EndTagMismatch {
        expected: "div".to_string(),
        found: "span".to_string(),
    };
    let err = ParseError::at(kind, "</span>", 0);
    let message = err.to_string();
    assert!(message.contains("Expected \"div\" end tag, found \"span\""));
    assert!(message.contains("line 1, column 1"));
}

#[test]
fn test_categories() {
    assert_eq!(
        ParseErrorKind::UnexpectedDoctype.category(),
        ErrorCategory::Structural
    );
    assert_eq!(
        ParseErrorKind::ExpectedEndTagToken.category(),
        ErrorCategory::Internal
    );
    assert_eq!(
        ParseErrorKind::SpecialInRawText {
            tag: "textarea".to_string()
        }
        .category(),
        ErrorCategory::Unsupported
    );
    assert_eq!(
        ParseErrorKind::syntax("Unclosed HTML comment").category(),
        ErrorCategory::Syntax
    );
}

#[test]
fn test_category_names() {
    let names: Vec<String> = ErrorCategory::iter().map(|c| c.to_string()).collect();
    assert_eq!(names, ["structural", "internal", "unsupported", "syntax"]);
}

#[test]
fn test_warn_once_deduplicates() {
    clear_warnings();
    assert!(warn_once("Test", "dedup check"));
    assert!(!warn_once("Test", "dedup check"));
    assert!(warn_once("Other", "dedup check"));
}
