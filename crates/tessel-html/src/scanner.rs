//! The input cursor shared by the tokenizer and the tree builder.
//!
//! A [`Scanner`] owns the source text and a byte position into it. One
//! scanner is borrowed mutably down the whole recursive parse; whichever frame
//! is active is the only reader.

use std::fmt;
use std::rc::Rc;

use strum_macros::{Display, EnumIter};
use tessel_common::{ParseError, ParseErrorKind};
use tessel_dom::Payload;

/// Where in the markup a placeholder hook is being asked to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum TemplateTagPosition {
    /// In element content, where a node may appear.
    Element,
    /// Inside a start tag, where an attribute name may appear.
    InStartTag,
    /// Inside a quoted or unquoted attribute value.
    InAttribute,
    /// In the body of a raw-text element such as `textarea`.
    InRcdata,
}

/// Recognizes templating placeholders in the input.
///
/// The hook looks at [`Scanner::rest`]. On a match it advances the scanner
/// past the placeholder and returns its payload. It may also advance without
/// returning a payload (for example to swallow a template comment), in which
/// case the tokenizer produces no token for the consumed text. Returning
/// `Ok(None)` without advancing means "no placeholder here".
pub trait SpecialTagHook<P = Payload> {
    /// Try to read a placeholder at the scanner's position.
    ///
    /// # Errors
    ///
    /// Implementations report malformed placeholders with [`Scanner::fatal`].
    fn get_special_tag(
        &self,
        scanner: &mut Scanner<P>,
        position: TemplateTagPosition,
    ) -> Result<Option<P>, ParseError>;
}

impl<P, F> SpecialTagHook<P> for F
where
    F: Fn(&mut Scanner<P>, TemplateTagPosition) -> Result<Option<P>, ParseError>,
{
    fn get_special_tag(
        &self,
        scanner: &mut Scanner<P>,
        position: TemplateTagPosition,
    ) -> Result<Option<P>, ParseError> {
        self(scanner, position)
    }
}

/// Source text plus a cursor, with the fatal-error primitive.
pub struct Scanner<P = Payload> {
    input: String,
    pos: usize,
    special_hook: Option<Rc<dyn SpecialTagHook<P>>>,
}

impl<P> Scanner<P> {
    /// Create a scanner positioned at the start of `input`, with no
    /// placeholder hook.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            pos: 0,
            special_hook: None,
        }
    }

    /// Attach a placeholder hook. It stays attached for the scanner's lifetime.
    #[must_use]
    pub fn with_special_hook(mut self, hook: impl SpecialTagHook<P> + 'static) -> Self {
        self.special_hook = Some(Rc::new(hook));
        self
    }

    /// Attach a shared placeholder hook, replacing any previous one.
    pub fn set_special_hook(&mut self, hook: Rc<dyn SpecialTagHook<P>>) {
        self.special_hook = Some(hook);
    }

    /// Returns true if a placeholder hook is attached.
    #[must_use]
    pub const fn has_special_hook(&self) -> bool {
        self.special_hook.is_some()
    }

    /// Ask the attached hook for a placeholder at the current position.
    ///
    /// Returns `Ok(None)` when no hook is attached.
    ///
    /// # Errors
    ///
    /// Propagates whatever the hook reports.
    pub fn get_special_tag(
        &mut self,
        position: TemplateTagPosition,
    ) -> Result<Option<P>, ParseError> {
        match self.special_hook.clone() {
            Some(hook) => hook.get_special_tag(self, position),
            None => Ok(None),
        }
    }

    /// The whole source text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Current byte offset.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Returns true once every byte has been consumed.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The unconsumed input.
    #[must_use]
    pub fn rest(&self) -> &str {
        &self.input[self.pos..]
    }

    /// The next character, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns true if the unconsumed input starts with `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Returns true if the unconsumed input starts with `prefix`, comparing
    /// ASCII letters case-insensitively.
    #[must_use]
    pub fn starts_with_ignore_ascii_case(&self, prefix: &str) -> bool {
        self.rest()
            .as_bytes()
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
    }

    /// Move forward by `bytes`, stopping at the end of input.
    ///
    /// `bytes` must land on a character boundary.
    pub fn advance(&mut self, bytes: usize) {
        self.pos = (self.pos + bytes).min(self.input.len());
        debug_assert!(self.input.is_char_boundary(self.pos));
    }

    /// Consume and return the next character.
    pub fn advance_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Build the fatal error for `kind` at the current position.
    ///
    /// The caller aborts with it: `return Err(scanner.fatal(...))`.
    #[must_use]
    pub fn fatal(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::at(kind, &self.input, self.pos)
    }

    /// Build a tokenizer error at the current position.
    #[must_use]
    pub fn syntax_error(&self, message: impl Into<String>) -> ParseError {
        self.fatal(ParseErrorKind::syntax(message))
    }
}

impl<P> fmt::Debug for Scanner<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("pos", &self.pos)
            .field("len", &self.input.len())
            .field("rest", &self.rest().chars().take(20).collect::<String>())
            .field("special_hook", &self.special_hook.is_some())
            .finish()
    }
}
