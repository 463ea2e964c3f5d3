//! Tests for character reference lexing and decoding.

use tessel_common::warning::clear_warnings;
use tessel_html::Scanner;
use tessel_html::parser::{code_point_to_string, code_point_to_utf16, decode_char_ref};
use tessel_html::tokenizer::get_character_reference;
use tessel_html::tokenizer::named_character_references::{lookup_entity, lookup_legacy_entity};

/// Helper to lex one reference from the start of `input`, outside attributes
fn lex(input: &str) -> Option<(String, Vec<u32>, String)> {
    let mut scanner: Scanner = Scanner::new(input);
    get_character_reference(&mut scanner, false, None)
        .unwrap()
        .map(|reference| (reference.html, reference.code_points, scanner.rest().to_string()))
}

fn lex_err(input: &str) -> String {
    let mut scanner: Scanner = Scanner::new(input);
    get_character_reference(&mut scanner, false, None)
        .unwrap_err()
        .kind
        .to_string()
}

// ========== Decoding ==========

#[test]
fn test_utf16_single_unit() {
    assert_eq!(code_point_to_utf16(0x41), vec![0x41]);
    assert_eq!(code_point_to_utf16(0xD7FF), vec![0xD7FF]);
    assert_eq!(code_point_to_utf16(0xE000), vec![0xE000]);
    assert_eq!(code_point_to_utf16(0xFFFF), vec![0xFFFF]);
}

#[test]
fn test_utf16_surrogate_pair() {
    assert_eq!(code_point_to_utf16(0x1F600), vec![0xD83D, 0xDE00]);
    assert_eq!(code_point_to_utf16(0x10000), vec![0xD800, 0xDC00]);
    assert_eq!(code_point_to_utf16(0x10FFFF), vec![0xDBFF, 0xDFFF]);
}

#[test]
fn test_utf16_invalid_is_empty() {
    assert!(code_point_to_utf16(0xD800).is_empty());
    assert!(code_point_to_utf16(0xDFFF).is_empty());
    assert!(code_point_to_utf16(0x11_0000).is_empty());
}

#[test]
fn test_code_point_to_string() {
    assert_eq!(code_point_to_string(0x41), "A");
    assert_eq!(code_point_to_string(0x1F600), "\u{1F600}");
    assert_eq!(code_point_to_string(0xDC00), "");
}

#[test]
fn test_decode_concatenates_in_order() {
    let char_ref = decode_char_ref("&fjlig;", &[0x66, 0x6A]);
    assert_eq!(char_ref.html, "&fjlig;");
    assert_eq!(char_ref.text, "fj");

    let emoji = decode_char_ref("&#x1F600;", &[0x1F600]);
    assert_eq!(emoji.text_utf16(), vec![0xD83D, 0xDE00]);
}

// ========== Numeric references ==========

#[test]
fn test_decimal_and_hex() {
    assert_eq!(
        lex("&#65;x"),
        Some(("&#65;".to_string(), vec![65], "x".to_string()))
    );
    assert_eq!(
        lex("&#x41;"),
        Some(("&#x41;".to_string(), vec![0x41], String::new()))
    );
    assert_eq!(
        lex("&#X1f600;"),
        Some(("&#X1f600;".to_string(), vec![0x1F600], String::new()))
    );
}

#[test]
fn test_numeric_requires_semicolon() {
    assert!(lex_err("&#65 ").contains("semicolon"));
}

#[test]
fn test_numeric_requires_digits() {
    assert!(lex_err("&#;").contains("&#"));
    assert!(lex_err("&#xg;").contains("&#"));
}

#[test]
fn test_illegal_code_points() {
    assert!(lex_err("&#0;").contains("Illegal codepoint"));
    assert!(lex_err("&#xD800;").contains("Illegal codepoint"));
    assert!(lex_err("&#x110000;").contains("Illegal codepoint"));
    assert!(lex_err("&#99999999999;").contains("Illegal codepoint"));
}

// ========== Named references ==========

#[test]
fn test_named_with_semicolon() {
    assert_eq!(
        lex("&amp;rest"),
        Some(("&amp;".to_string(), vec![0x26], "rest".to_string()))
    );
    assert_eq!(
        lex("&NotEqualTilde;"),
        Some(("&NotEqualTilde;".to_string(), vec![0x2242, 0x338], String::new()))
    );
}

#[test]
fn test_legacy_without_semicolon() {
    assert_eq!(
        lex("&lt b"),
        Some(("&lt".to_string(), vec![0x3C], " b".to_string()))
    );
    // Only legacy names may drop the semicolon.
    assert_eq!(lex("&hellip"), None);
}

#[test]
fn test_legacy_before_equals_in_attribute() {
    let mut scanner: Scanner = Scanner::new("&amp=1");
    assert_eq!(get_character_reference(&mut scanner, true, None).unwrap(), None);
    assert_eq!(scanner.rest(), "&amp=1");

    let mut scanner: Scanner = Scanner::new("&amp=1");
    assert!(get_character_reference(&mut scanner, false, None).unwrap().is_some());
}

#[test]
fn test_not_a_reference() {
    assert_eq!(lex("& x"), None);
    assert_eq!(lex("&<"), None);
    assert_eq!(lex("&&"), None);
    assert_eq!(lex("&"), None);
    assert_eq!(lex("x"), None);
}

#[test]
fn test_allowed_char_stops_reference() {
    let mut scanner: Scanner = Scanner::new("&\"");
    assert_eq!(get_character_reference(&mut scanner, true, Some('"')).unwrap(), None);
}

#[test]
fn test_unknown_name_is_not_a_reference() {
    clear_warnings();
    let mut scanner: Scanner = Scanner::new("&bogus;");
    assert_eq!(get_character_reference(&mut scanner, false, None).unwrap(), None);
    assert_eq!(scanner.pos(), 0);
}

#[test]
fn test_entity_table_lookups() {
    assert_eq!(lookup_entity("amp"), Some(&[0x26][..]));
    assert_eq!(lookup_entity("Afr"), Some(&[0x1D504][..]));
    assert_eq!(lookup_entity("bogus"), None);
    assert_eq!(lookup_legacy_entity("copy"), Some(&[0xA9][..]));
    assert_eq!(lookup_legacy_entity("trade"), None);
}
