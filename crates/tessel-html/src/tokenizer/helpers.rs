//! Lexing helpers for character data, comments and doctypes.

use tessel_common::ParseError;

use super::token::Token;
use crate::scanner::Scanner;

/// [§ 12.1.4 ASCII whitespace](https://infra.spec.whatwg.org/#ascii-whitespace)
///
/// "ASCII whitespace is U+0009 TAB, U+000A LF, U+000C FF, U+000D CR,
/// or U+0020 SPACE."
pub(crate) const fn is_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0C' | '\r' | ' ')
}

/// Consume any run of whitespace.
pub(crate) fn skip_whitespace<P>(scanner: &mut Scanner<P>) {
    let len = scanner
        .rest()
        .find(|c: char| !is_whitespace(c))
        .unwrap_or_else(|| scanner.rest().len());
    scanner.advance(len);
}

/// Read a run of character data.
///
/// The run cannot start with `&`, `<` or NUL, and stops before any of those
/// or before `{`, so that a placeholder hook gets a look at every `{`.
pub fn get_chars<P>(scanner: &mut Scanner<P>) -> Option<String> {
    let rest = scanner.rest();
    let first = rest.chars().next().filter(|c| !matches!(c, '&' | '<' | '\0'))?;
    let first_len = first.len_utf8();
    let len = rest[first_len..]
        .find(['&', '<', '\0', '{'])
        .map_or(rest.len(), |i| i + first_len);

    let text = rest[..len].to_string();
    scanner.advance(len);
    Some(text)
}

/// [§ 13.2.5.43 Comment start state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-state)
///
/// Read `<!--...-->`. The scanner must be at `<!--`.
///
/// # Errors
///
/// The comment must be closed, and its text may not start with `>` or `->`,
/// contain `--`, or end with `-`.
pub fn get_comment<P>(scanner: &mut Scanner<P>) -> Result<Token<P>, ParseError> {
    let body = &scanner.rest()["<!--".len()..];
    let Some(end) = body.find("-->") else {
        return Err(scanner.syntax_error("Unclosed HTML comment"));
    };
    let text = &body[..end];

    if text.starts_with('>') || text.starts_with("->") {
        return Err(scanner.syntax_error("HTML comment can't start with > or ->"));
    }
    if text.contains("--") {
        return Err(scanner.syntax_error("HTML comment can't contain --"));
    }
    if text.ends_with('-') {
        return Err(scanner.syntax_error("HTML comment can't end with -"));
    }

    let text = text.to_string();
    scanner.advance("<!--".len() + end + "-->".len());
    Ok(Token::Comment(text))
}

/// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
///
/// Read `<!DOCTYPE ...>`. The details are discarded: a doctype is never
/// valid in a fragment, and the tree builder rejects it on sight.
///
/// # Errors
///
/// Fails if the doctype is never closed.
pub fn get_doctype<P>(scanner: &mut Scanner<P>) -> Result<Token<P>, ParseError> {
    let Some(end) = scanner.rest().find('>') else {
        return Err(scanner.syntax_error("Unclosed DOCTYPE"));
    };
    scanner.advance(end + 1);
    Ok(Token::Doctype)
}
