//! HTML fragment tokenizer.
//!
//! Implements a strict subset of [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! of the WHATWG HTML Living Standard: the data and RCDATA states, tags,
//! comments, doctypes and character references. Tokens are pulled one at a
//! time by the tree builder; every tokenizer parse error is fatal.

/// Character reference parsing per § 13.2.5.72.
pub mod character_reference;
/// Character data, comment and doctype lexing.
pub mod helpers;
/// Named character reference lookup table per § 13.5.
pub mod named_character_references;
/// Start and end tag lexing.
pub mod tag;
/// Token types produced by the tokenizer.
pub mod token;

use tessel_common::ParseError;

use crate::scanner::{Scanner, TemplateTagPosition};
pub use character_reference::{CharacterReference, get_character_reference};
pub use helpers::{get_chars, get_comment, get_doctype};
pub use tag::get_tag_token;
pub use token::{AttrFragment, TagToken, Token, TokenAttrs};

/// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
/// and [§ 13.2.5.2 RCDATA state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-state)
///
/// Which content the tokenizer is reading. The mode only changes which
/// position the placeholder hook is told about, and lets a stray `<` through
/// as text in RCDATA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataMode {
    /// Ordinary element content.
    #[default]
    Normal,
    /// The body of a raw-text element.
    RcData,
}

impl DataMode {
    const fn hook_position(self) -> TemplateTagPosition {
        match self {
            Self::Normal => TemplateTagPosition::Element,
            Self::RcData => TemplateTagPosition::InRcdata,
        }
    }
}

/// Read the next token.
///
/// Returns `Ok(None)` at end of input, and also when the placeholder hook
/// consumed input without producing a payload (a "null token").
///
/// # Errors
///
/// Every malformed construct is fatal: a bare `<`, `<!` that is neither a
/// comment nor a doctype, NUL characters, and anything the tag, comment and
/// character reference readers reject.
pub fn get_html_token<P>(
    scanner: &mut Scanner<P>,
    mode: DataMode,
) -> Result<Option<Token<P>>, ParseError> {
    if scanner.is_eof() {
        return Ok(None);
    }

    let start = scanner.pos();
    if let Some(payload) = scanner.get_special_tag(mode.hook_position())? {
        return Ok(Some(Token::Special(payload)));
    }
    if scanner.pos() != start {
        return Ok(None);
    }

    if let Some(text) = get_chars(scanner) {
        return Ok(Some(Token::Chars(text)));
    }

    let rest = scanner.rest();
    let token = if rest.starts_with('&') {
        match get_character_reference(scanner, false, None)? {
            Some(reference) => reference.into(),
            None => {
                scanner.advance(1);
                Token::Chars("&".to_string())
            }
        }
    } else if mode == DataMode::RcData && rest.starts_with('<') {
        scanner.advance(1);
        Token::Chars("<".to_string())
    } else if rest.starts_with("<!--") {
        get_comment(scanner)?
    } else if scanner.starts_with_ignore_ascii_case("<!doctype") {
        get_doctype(scanner)?
    } else if rest.starts_with("<!") {
        return Err(scanner.syntax_error("Unexpected \"<!\" not followed by comment or DOCTYPE"));
    } else if rest.starts_with("</") || starts_with_tag_open(rest) {
        Token::Tag(get_tag_token(scanner)?)
    } else if rest.starts_with('<') {
        return Err(scanner.syntax_error("Unexpected \"<\" not followed by tag name"));
    } else {
        return Err(scanner.syntax_error("Unexpected NULL character"));
    };
    Ok(Some(token))
}

/// [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
fn starts_with_tag_open(rest: &str) -> bool {
    let mut chars = rest.chars();
    chars.next() == Some('<') && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
}
