//! HTML fragment parser for template languages.
//!
//! # Scope
//!
//! This crate implements:
//! - **Scanner**: the shared input cursor, with a pluggable hook that
//!   recognizes templating placeholders (`{{...}}` and the like)
//! - **Tokenizer** ([WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization))
//!   - Data and RCDATA states, tags, comments, doctypes
//!   - Numeric and named character references
//! - **Content parser**: builds a tree of elements, text, character
//!   references, comments and placeholders, where each element must be closed
//!   by its own end tag
//!
//! # Not Implemented
//!
//! - Insertion modes and implied end tags
//! - Error recovery: every error is fatal
//! - Script, style and other raw-text elements besides `textarea`
//!
//! # Example
//! ```
//! use tessel_html::parse_fragment;
//!
//! let nodes = parse_fragment("<p>Hello &amp; welcome</p>").unwrap();
//! assert_eq!(nodes.len(), 1);
//! ```

/// Content-model tree builder.
pub mod parser;
/// Input cursor and placeholder hook.
pub mod scanner;
/// HTML fragment tokenizer.
pub mod tokenizer;

use std::fmt;
use std::rc::Rc;

use tessel_common::{ParseError, ParseErrorKind};
use tessel_dom::{Compact, HtmlTags, Node, Payload, TagRegistry};

pub use parser::{FragmentParser, StopPredicate};
pub use scanner::{Scanner, SpecialTagHook, TemplateTagPosition};
pub use tokenizer::{DataMode, Token, get_html_token};

/// Optional behavior for [`parse_fragment_with`].
pub struct ParseOptions<P = Payload> {
    /// Placeholder hook installed on the scanner before parsing. A hook the
    /// scanner already has is replaced.
    pub special_hook: Option<Rc<dyn SpecialTagHook<P>>>,
    /// Consulted between tokens. When it is set, parsing may end before the
    /// input does, and the caller picks up from the scanner's position.
    pub should_stop: Option<Box<StopPredicate<P>>>,
}

impl<P> Default for ParseOptions<P> {
    fn default() -> Self {
        Self {
            special_hook: None,
            should_stop: None,
        }
    }
}

impl<P> ParseOptions<P> {
    /// Install a placeholder hook.
    #[must_use]
    pub fn with_special_hook(mut self, hook: impl SpecialTagHook<P> + 'static) -> Self {
        self.special_hook = Some(Rc::new(hook));
        self
    }

    /// Install a stop predicate.
    #[must_use]
    pub fn with_stop_predicate(mut self, predicate: impl Fn(&Scanner<P>) -> bool + 'static) -> Self {
        self.should_stop = Some(Box::new(predicate));
        self
    }
}

impl<P> fmt::Debug for ParseOptions<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseOptions")
            .field("special_hook", &self.special_hook.is_some())
            .field("should_stop", &self.should_stop.is_some())
            .finish()
    }
}

/// What [`parse_fragment_with`] reads from.
#[derive(Debug)]
pub enum FragmentInput<'a, P = Payload> {
    /// Parse a string from its start.
    Source(&'a str),
    /// Continue from an existing scanner's position. The scanner is left
    /// wherever parsing stopped.
    Scanner(&'a mut Scanner<P>),
}

impl<'a, P> From<&'a str> for FragmentInput<'a, P> {
    fn from(source: &'a str) -> Self {
        Self::Source(source)
    }
}

impl<'a, P> From<&'a mut Scanner<P>> for FragmentInput<'a, P> {
    fn from(scanner: &'a mut Scanner<P>) -> Self {
        Self::Scanner(scanner)
    }
}

/// Parse an HTML fragment with the standard HTML void elements and no
/// placeholder support.
///
/// # Errors
///
/// Returns the first error encountered; no partial tree is produced.
pub fn parse_fragment(source: &str) -> Result<Compact<Node>, ParseError> {
    parse_fragment_with(source, ParseOptions::default(), &HtmlTags)
}

/// Parse an HTML fragment.
///
/// Without a stop predicate the whole input must be consumed; a stray end
/// tag at the top level is an error.
///
/// # Errors
///
/// Returns the first error encountered; no partial tree is produced.
pub fn parse_fragment_with<'a, P: 'a>(
    input: impl Into<FragmentInput<'a, P>>,
    options: ParseOptions<P>,
    registry: &dyn TagRegistry<P>,
) -> Result<Compact<Node<P>>, ParseError> {
    let ParseOptions {
        special_hook,
        should_stop,
    } = options;

    let mut owned;
    let scanner = match input.into() {
        FragmentInput::Source(source) => {
            owned = Scanner::new(source);
            &mut owned
        }
        FragmentInput::Scanner(scanner) => scanner,
    };
    if let Some(hook) = special_hook {
        scanner.set_special_hook(hook);
    }

    let mut parser = FragmentParser::new(registry);
    if let Some(predicate) = should_stop.as_deref() {
        parser = parser.with_stop_predicate(predicate);
    }

    let content = parser.get_content(scanner)?;
    if !parser.has_stop_predicate() && !scanner.is_eof() {
        return Err(scanner.fatal(ParseErrorKind::ExpectedEndOfInput));
    }
    Ok(content)
}
