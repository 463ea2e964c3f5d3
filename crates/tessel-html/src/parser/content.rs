//! Element content tree builder.

use tessel_common::{ParseError, ParseErrorKind};
use tessel_dom::{Compact, Node, Special, TagRegistry};

use super::attributes::parse_attrs;
use super::char_ref::decode_char_ref;
use super::rcdata::RAW_TEXT_ELEMENTS;
use crate::scanner::Scanner;
use crate::tokenizer::{DataMode, TagToken, Token, get_html_token};

/// Predicate consulted between tokens; returning true ends the current
/// content run as if an end tag had been reached.
pub type StopPredicate<P> = dyn Fn(&Scanner<P>) -> bool;

/// Builds content trees from a scanner.
///
/// The parser itself is stateless: all position state lives in the
/// [`Scanner`], which is borrowed mutably down the recursion, one frame per
/// open element.
pub struct FragmentParser<'a, P> {
    registry: &'a dyn TagRegistry<P>,
    should_stop: Option<&'a StopPredicate<P>>,
}

impl<'a, P> FragmentParser<'a, P> {
    /// A parser that constructs nodes through `registry`.
    #[must_use]
    pub fn new(registry: &'a dyn TagRegistry<P>) -> Self {
        Self {
            registry,
            should_stop: None,
        }
    }

    /// Stop content runs early whenever `predicate` returns true.
    #[must_use]
    pub fn with_stop_predicate(mut self, predicate: &'a StopPredicate<P>) -> Self {
        self.should_stop = Some(predicate);
        self
    }

    /// Returns true if a stop predicate is installed.
    #[must_use]
    pub const fn has_stop_predicate(&self) -> bool {
        self.should_stop.is_some()
    }

    pub(super) fn should_stop(&self, scanner: &Scanner<P>) -> bool {
        self.should_stop.is_some_and(|predicate| predicate(scanner))
    }

    pub(super) const fn registry(&self) -> &'a dyn TagRegistry<P> {
        self.registry
    }

    /// Read element content up to the next `</`, the end of input, or the
    /// point where the stop predicate fires.
    ///
    /// Adjacent character data always lands in a single text node.
    ///
    /// # Errors
    ///
    /// Fails on any tokenizer error, a doctype, a self-closing non-void
    /// element, and a missing or mismatched end tag.
    pub fn get_content(&self, scanner: &mut Scanner<P>) -> Result<Compact<Node<P>>, ParseError> {
        let mut items = Vec::new();

        while !scanner.is_eof() {
            if scanner.starts_with("</") || self.should_stop(scanner) {
                break;
            }

            let Some(token) = get_html_token(scanner, DataMode::Normal)? else {
                continue;
            };

            match token {
                Token::Doctype => return Err(scanner.fatal(ParseErrorKind::UnexpectedDoctype)),
                Token::Chars(text) => push_text(&mut items, text),
                Token::CharRef { html, code_points } => {
                    items.push(self.registry.create_char_ref(decode_char_ref(html, &code_points)));
                }
                Token::Comment(text) => items.push(self.registry.create_comment(text)),
                Token::Special(payload) => items.push(Node::Special(Special::new(payload))),
                Token::Tag(tag) => items.push(self.get_element(scanner, tag)?),
            }
        }

        Ok(Compact::from_vec(items))
    }

    /// Build the element opened by `tag`, reading its body and end tag.
    fn get_element(&self, scanner: &mut Scanner<P>, tag: TagToken<P>) -> Result<Node<P>, ParseError> {
        if tag.is_end {
            return Err(scanner.fatal(ParseErrorKind::UnexpectedEndTag));
        }

        let is_void = self.registry.is_void_element(&tag.name);
        if tag.self_closing && !is_void {
            return Err(scanner.fatal(ParseErrorKind::SelfClosingNonVoid { tag: tag.name }));
        }

        let TagToken { name, attrs, .. } = tag;
        let attrs = parse_attrs(attrs);
        if is_void {
            return Ok(self.registry.create_element(&name, attrs, Vec::new()));
        }

        let content = if RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
            // A newline right after the start tag is not content.
            if scanner.starts_with("\n") {
                scanner.advance(1);
            }
            self.get_rcdata(scanner, &name)?
        } else {
            self.get_content(scanner)?
        };

        if !scanner.starts_with("</") {
            return Err(scanner.fatal(ParseErrorKind::ExpectedEndTag { tag: name }));
        }

        let end = match get_html_token(scanner, DataMode::Normal)? {
            Some(Token::Tag(end)) if end.is_end => end,
            _ => return Err(scanner.fatal(ParseErrorKind::ExpectedEndTagToken)),
        };
        if end.name != name {
            return Err(scanner.fatal(ParseErrorKind::EndTagMismatch {
                expected: name,
                found: end.name,
            }));
        }

        Ok(self.registry.create_element(&name, attrs, content.into_vec()))
    }
}

impl<P> std::fmt::Debug for FragmentParser<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FragmentParser")
            .field("should_stop", &self.should_stop.is_some())
            .finish_non_exhaustive()
    }
}

/// Append character data, merging into a trailing text node.
pub(super) fn push_text<P>(items: &mut Vec<Node<P>>, text: String) {
    if let Some(Node::Text(last)) = items.last_mut() {
        last.push_str(&text);
    } else {
        items.push(Node::Text(text));
    }
}
