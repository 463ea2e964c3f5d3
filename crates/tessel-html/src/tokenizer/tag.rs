//! Start and end tag lexing.
//!
//! [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
//! through [§ 13.2.5.42 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state),
//! flattened into straight-line reads. Every parse error in those states is
//! fatal here.

use tessel_common::ParseError;
use tessel_dom::SPECIALS_ATTRIBUTE;

use super::character_reference::get_character_reference;
use super::helpers::{is_whitespace, skip_whitespace};
use super::token::{AttrFragment, TagToken, TokenAttrs};
use crate::scanner::{Scanner, TemplateTagPosition};

/// Read a tag. The scanner must be at `<` followed by a letter, or at `</`.
///
/// # Errors
///
/// Fails on malformed names, attributes and values, on unclosed tags, and on
/// end tags that carry attributes or a self-closing flag.
pub fn get_tag_token<P>(scanner: &mut Scanner<P>) -> Result<TagToken<P>, ParseError> {
    scanner.advance(1);
    let is_end = scanner.starts_with("/");
    if is_end {
        scanner.advance(1);
    }

    let name = get_tag_name(scanner)?;
    let mut attrs = TokenAttrs::default();
    let mut self_closing = false;

    loop {
        skip_whitespace(scanner);
        match scanner.peek() {
            None => return Err(scanner.syntax_error("Unclosed tag")),
            Some('>') => {
                scanner.advance(1);
                break;
            }
            Some('/') => {
                if !scanner.starts_with("/>") {
                    return Err(scanner.syntax_error("Expected > after / in tag"));
                }
                scanner.advance(2);
                self_closing = true;
                break;
            }
            Some(_) => {}
        }

        if !is_end {
            let start = scanner.pos();
            if let Some(payload) = scanner.get_special_tag(TemplateTagPosition::InStartTag)? {
                attrs
                    .entry(SPECIALS_ATTRIBUTE.to_string())
                    .or_default()
                    .push(AttrFragment::Special(payload));
                continue;
            }
            if scanner.pos() != start {
                continue;
            }
        }

        let attr_name = get_attribute_name(scanner)?;
        if attrs.contains_key(&attr_name) {
            return Err(scanner.syntax_error(format!("Duplicate attribute in tag: {attr_name}")));
        }
        let value = get_attribute_value(scanner)?;
        let _ = attrs.insert(attr_name, value);
    }

    if is_end && !attrs.is_empty() {
        return Err(scanner.syntax_error("End tag can't have attributes"));
    }
    if is_end && self_closing {
        return Err(scanner.syntax_error("End tag can't have trailing slash"));
    }

    Ok(TagToken {
        name,
        attrs,
        is_end,
        self_closing,
    })
}

/// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
///
/// `[a-zA-Z][^\t\n\f\r />{\0]*`, lowercased.
fn get_tag_name<P>(scanner: &mut Scanner<P>) -> Result<String, ParseError> {
    if !scanner.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err(scanner.syntax_error("Expected tag name"));
    }
    let rest = scanner.rest();
    let len = rest
        .find(|c: char| is_whitespace(c) || matches!(c, '/' | '>' | '{' | '\0'))
        .unwrap_or(rest.len());
    let name = rest[..len].to_ascii_lowercase();
    scanner.advance(len);
    Ok(name)
}

/// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
fn get_attribute_name<P>(scanner: &mut Scanner<P>) -> Result<String, ParseError> {
    let rest = scanner.rest();
    let len = rest
        .find(|c: char| is_whitespace(c) || matches!(c, '/' | '>' | '='))
        .unwrap_or(rest.len());
    let name = &rest[..len];

    if name.is_empty() {
        return Err(scanner.syntax_error("Expected attribute name in tag"));
    }
    if name.contains(['"', '\'', '<', '\0']) {
        return Err(scanner.syntax_error(format!("Invalid character in attribute name: {name}")));
    }

    let name = name.to_ascii_lowercase();
    scanner.advance(len);
    Ok(name)
}

/// [§ 13.2.5.35 Before attribute value state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-value-state)
///
/// A name with no `=` has an empty value.
fn get_attribute_value<P>(scanner: &mut Scanner<P>) -> Result<Vec<AttrFragment<P>>, ParseError> {
    skip_whitespace(scanner);
    if !scanner.starts_with("=") {
        return Ok(Vec::new());
    }
    scanner.advance(1);
    skip_whitespace(scanner);

    match scanner.peek() {
        Some(quote @ ('"' | '\'')) => {
            scanner.advance(1);
            get_quoted_value(scanner, quote)
        }
        Some('>') | None => Err(scanner.syntax_error("Missing attribute value")),
        Some(_) => get_unquoted_value(scanner),
    }
}

/// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
fn get_quoted_value<P>(
    scanner: &mut Scanner<P>,
    quote: char,
) -> Result<Vec<AttrFragment<P>>, ParseError> {
    let mut fragments = Vec::new();
    loop {
        match scanner.peek() {
            None => return Err(scanner.syntax_error("Unclosed attribute in tag")),
            Some(c) if c == quote => {
                scanner.advance(1);
                return Ok(fragments);
            }
            Some('\0') => return Err(scanner.syntax_error("Unexpected NULL character in attribute value")),
            Some(_) => {}
        }
        if read_value_fragment(scanner, &mut fragments, quote)? {
            continue;
        }
        let text = take_run(scanner, |c| c == quote || matches!(c, '&' | '{' | '\0'));
        push_chars(&mut fragments, &text);
    }
}

/// [§ 13.2.5.38 Attribute value (unquoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state)
fn get_unquoted_value<P>(scanner: &mut Scanner<P>) -> Result<Vec<AttrFragment<P>>, ParseError> {
    let mut fragments = Vec::new();
    loop {
        match scanner.peek() {
            None => return Ok(fragments),
            Some(c) if is_whitespace(c) || c == '>' => return Ok(fragments),
            Some(c @ ('"' | '\'' | '<' | '=' | '`')) => {
                return Err(scanner.syntax_error(format!(
                    "Unexpected character in unquoted attribute value: {c}"
                )));
            }
            Some('\0') => return Err(scanner.syntax_error("Unexpected NULL character in attribute value")),
            Some(_) => {}
        }
        if read_value_fragment(scanner, &mut fragments, '>')? {
            continue;
        }
        let text = take_run(scanner, |c| {
            is_whitespace(c) || matches!(c, '>' | '&' | '{' | '"' | '\'' | '<' | '=' | '`' | '\0')
        });
        push_chars(&mut fragments, &text);
    }
}

/// Try a placeholder or a character reference at the current position.
///
/// Returns true if input was consumed.
fn read_value_fragment<P>(
    scanner: &mut Scanner<P>,
    fragments: &mut Vec<AttrFragment<P>>,
    allowed_char: char,
) -> Result<bool, ParseError> {
    let start = scanner.pos();
    if let Some(payload) = scanner.get_special_tag(TemplateTagPosition::InAttribute)? {
        fragments.push(AttrFragment::Special(payload));
        return Ok(true);
    }
    if scanner.pos() != start {
        return Ok(true);
    }

    if scanner.starts_with("&") {
        match get_character_reference(scanner, true, Some(allowed_char))? {
            Some(reference) => fragments.push(reference.into()),
            None => {
                scanner.advance(1);
                push_chars(fragments, "&");
            }
        }
        return Ok(true);
    }
    Ok(false)
}

/// Consume the next character plus everything up to the first `stop`.
fn take_run<P>(scanner: &mut Scanner<P>, stop: impl Fn(char) -> bool) -> String {
    let rest = scanner.rest();
    let first_len = rest.chars().next().map_or(0, char::len_utf8);
    let len = rest[first_len..]
        .find(stop)
        .map_or(rest.len(), |i| i + first_len);
    let text = rest[..len].to_string();
    scanner.advance(len);
    text
}

fn push_chars<P>(fragments: &mut Vec<AttrFragment<P>>, text: &str) {
    if let Some(AttrFragment::Chars(last)) = fragments.last_mut() {
        last.push_str(text);
    } else {
        fragments.push(AttrFragment::Chars(text.to_string()));
    }
}
