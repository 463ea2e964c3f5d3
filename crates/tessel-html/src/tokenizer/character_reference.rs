//! Character reference lexing.
//!
//! [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
//!
//! Numeric references must be terminated with `;` and name a valid, non-NUL,
//! non-surrogate code point; anything else is fatal. Named references come
//! from a fixed table. An `&` that does not start a reference is left for the
//! caller to emit as a literal character.

use tessel_common::ParseError;
use tessel_common::warning::warn_once;

use super::named_character_references::{lookup_entity, lookup_legacy_entity};
use super::token::{AttrFragment, Token};
use crate::scanner::Scanner;

/// A lexed character reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterReference {
    /// Source spelling, e.g. `&#x41;`.
    pub html: String,
    /// Unicode scalar values it stands for.
    pub code_points: Vec<u32>,
}

impl<P> From<CharacterReference> for Token<P> {
    fn from(reference: CharacterReference) -> Self {
        Self::CharRef {
            html: reference.html,
            code_points: reference.code_points,
        }
    }
}

impl<P> From<CharacterReference> for AttrFragment<P> {
    fn from(reference: CharacterReference) -> Self {
        Self::CharRef {
            html: reference.html,
            code_points: reference.code_points,
        }
    }
}

/// Try to read a character reference at the scanner's position.
///
/// `in_attribute` enables the attribute-value rule for legacy names: `&amp=`
/// is left alone. `allowed_char` is the "additional allowed character"
/// (the closing quote of the attribute value), which never starts a reference.
///
/// Returns `Ok(None)`, without consuming anything, when the input does not
/// start a reference.
///
/// # Errors
///
/// Fails on malformed numeric references.
pub fn get_character_reference<P>(
    scanner: &mut Scanner<P>,
    in_attribute: bool,
    allowed_char: Option<char>,
) -> Result<Option<CharacterReference>, ParseError> {
    let Some(after) = scanner.rest().strip_prefix('&') else {
        return Ok(None);
    };
    let next = after.chars().next();

    match next {
        None | Some('\t' | '\n' | '\x0C' | '\r' | ' ' | '<' | '&') => Ok(None),
        Some(c) if Some(c) == allowed_char => Ok(None),
        Some('#') => get_numeric_reference(scanner).map(Some),
        Some(_) => Ok(get_named_reference(scanner, in_attribute)),
    }
}

/// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
fn get_numeric_reference<P>(scanner: &mut Scanner<P>) -> Result<CharacterReference, ParseError> {
    let rest = scanner.rest();
    let hex = rest[2..].starts_with(['x', 'X']);
    let digits_start = if hex { 3 } else { 2 };
    let digits_len = rest[digits_start..]
        .bytes()
        .take_while(|b| if hex { b.is_ascii_hexdigit() } else { b.is_ascii_digit() })
        .count();

    if digits_len == 0 {
        return Err(scanner.syntax_error("Invalid numerical character reference starting with &#"));
    }
    let digits_end = digits_start + digits_len;
    if !rest[digits_end..].starts_with(';') {
        return Err(scanner.syntax_error("Numerical character reference must end with semicolon"));
    }

    let radix = if hex { 16 } else { 10 };
    // Only overflow can fail here; that is out of range anyway.
    let code_point = u32::from_str_radix(&rest[digits_start..digits_end], radix).unwrap_or(u32::MAX);
    let html = rest[..=digits_end].to_string();

    if code_point == 0 || (0xD800..=0xDFFF).contains(&code_point) || code_point > 0x10_FFFF {
        return Err(scanner.syntax_error(format!(
            "Illegal codepoint in numerical character reference: {html}"
        )));
    }

    scanner.advance(html.len());
    Ok(CharacterReference {
        html,
        code_points: vec![code_point],
    })
}

/// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
fn get_named_reference<P>(scanner: &mut Scanner<P>, in_attribute: bool) -> Option<CharacterReference> {
    let rest = scanner.rest();
    let name_len = rest[1..].bytes().take_while(u8::is_ascii_alphanumeric).count();
    if name_len == 0 {
        return None;
    }
    let name = &rest[1..=name_len];
    let after = &rest[1 + name_len..];

    let (code_points, html_len) = if after.starts_with(';') {
        if let Some(code_points) = lookup_entity(name) {
            (code_points, name_len + 2)
        } else {
            let _ = warn_once(
                "Tokenizer",
                &format!("unknown named character reference &{name}; left as text"),
            );
            return None;
        }
    } else {
        let code_points = lookup_legacy_entity(name)?;
        if in_attribute && after.starts_with('=') {
            return None;
        }
        (code_points, name_len + 1)
    };

    let html = rest[..html_len].to_string();
    scanner.advance(html_len);
    Some(CharacterReference {
        html,
        code_points: code_points.to_vec(),
    })
}
