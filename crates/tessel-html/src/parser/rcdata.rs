//! Raw-text element bodies.
//!
//! [§ 13.2.5.2 RCDATA state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-state)

use tessel_common::{ParseError, ParseErrorKind};
use tessel_dom::{Compact, Node};

use super::char_ref::decode_char_ref;
use super::content::{FragmentParser, push_text};
use crate::scanner::Scanner;
use crate::tokenizer::{DataMode, Token, get_html_token};
use crate::tokenizer::helpers::is_whitespace;

/// Elements whose body is text and character references only.
pub const RAW_TEXT_ELEMENTS: &[&str] = &["textarea"];

/// Returns true if the scanner is at `</tag_name` followed by whitespace,
/// `/`, `>` or the end of input. The name is compared ASCII
/// case-insensitively.
#[must_use]
pub fn is_looking_at_end_tag<P>(scanner: &Scanner<P>, tag_name: &str) -> bool {
    let Some(rest) = scanner.rest().strip_prefix("</") else {
        return false;
    };
    let matches_name = rest
        .as_bytes()
        .get(..tag_name.len())
        .is_some_and(|name| name.eq_ignore_ascii_case(tag_name.as_bytes()));
    if !matches_name {
        return false;
    }
    rest[tag_name.len()..]
        .chars()
        .next()
        .is_none_or(|c| is_whitespace(c) || matches!(c, '/' | '>'))
}

impl<P> FragmentParser<'_, P> {
    /// Read the body of the raw-text element `tag_name` up to its end tag.
    ///
    /// Any `<` that does not start that end tag is plain text.
    ///
    /// # Errors
    ///
    /// Placeholders are not supported here, and only character data and
    /// character references may appear.
    pub fn get_rcdata(
        &self,
        scanner: &mut Scanner<P>,
        tag_name: &str,
    ) -> Result<Compact<Node<P>>, ParseError> {
        let mut items = Vec::new();

        while !scanner.is_eof() {
            if is_looking_at_end_tag(scanner, tag_name) || self.should_stop(scanner) {
                break;
            }

            if scanner.starts_with("<") {
                push_text(&mut items, "<".to_string());
                scanner.advance(1);
                continue;
            }

            let Some(token) = get_html_token(scanner, DataMode::RcData)? else {
                continue;
            };

            match token {
                Token::Chars(text) => push_text(&mut items, text),
                Token::CharRef { html, code_points } => {
                    items.push(self.registry().create_char_ref(decode_char_ref(html, &code_points)));
                }
                Token::Special(_) => {
                    return Err(scanner.fatal(ParseErrorKind::SpecialInRawText {
                        tag: tag_name.to_string(),
                    }));
                }
                other => {
                    return Err(scanner.fatal(ParseErrorKind::UnexpectedToken {
                        kind: other.kind_name().to_string(),
                    }));
                }
            }
        }

        Ok(Compact::from_vec(items))
    }
}
