//! Fatal parse errors.
//!
//! Every error raised while parsing a fragment is fatal: the parse aborts at
//! the first violation and the error travels back to the caller through `?`.
//! There is no recovery and no partial tree.

use strum_macros::{Display, EnumIter};
use thiserror::Error;

/// Broad classification of a [`ParseErrorKind`].
///
/// Callers that only care whether the input was wrong (as opposed to a
/// scanner/parser contract violation) can branch on this instead of matching
/// every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ErrorCategory {
    /// The fragment violates the content model (bad nesting, stray doctype...).
    #[strum(serialize = "structural")]
    Structural,
    /// The scanner and parser disagree about the token stream. Always a defect.
    #[strum(serialize = "internal")]
    Internal,
    /// Valid input that this parser deliberately does not handle.
    #[strum(serialize = "unsupported")]
    Unsupported,
    /// The tokenizer could not lex the input.
    #[strum(serialize = "syntax")]
    Syntax,
}

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A `<!DOCTYPE>` appeared inside fragment content.
    #[error("Unexpected Doctype")]
    UnexpectedDoctype,

    /// A non-void element was written with `/>`.
    #[error("Only certain elements like BR, HR, IMG, etc. are allowed to self-close (found <{tag}/>)")]
    SelfClosingNonVoid {
        /// Name of the offending element.
        tag: String,
    },

    /// Element content ended without reaching an end tag.
    #[error("Expected \"{tag}\" end tag")]
    ExpectedEndTag {
        /// Name of the element left open.
        tag: String,
    },

    /// An end tag closed a different element than the one open.
    #[error("Expected \"{expected}\" end tag, found \"{found}\"")]
    EndTagMismatch {
        /// Name of the element left open.
        expected: String,
        /// Name written in the end tag.
        found: String,
    },

    /// Top-level content stopped before the end of the input.
    #[error("Expected EOF")]
    ExpectedEndOfInput,

    /// An end tag reached the start-tag branch of the content parser.
    #[error("Assertion failed: didn't expect end tag")]
    UnexpectedEndTag,

    /// The token read after `</` was not an end tag.
    #[error("Assertion failed: expected end tag")]
    ExpectedEndTagToken,

    /// A token kind that the current parsing mode cannot accept.
    #[error("Unknown or unexpected token type: {kind}")]
    UnexpectedToken {
        /// Kind name of the token.
        kind: String,
    },

    /// A placeholder appeared in the body of a raw-text element.
    #[error("NOT IMPLEMENTED: Can't have template tags in {tag}")]
    SpecialInRawText {
        /// Name of the raw-text element.
        tag: String,
    },

    /// The tokenizer rejected the input.
    #[error("{0}")]
    Syntax(String),
}

impl ParseErrorKind {
    /// Classify this error.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::UnexpectedDoctype
            | Self::SelfClosingNonVoid { .. }
            | Self::ExpectedEndTag { .. }
            | Self::EndTagMismatch { .. }
            | Self::ExpectedEndOfInput => ErrorCategory::Structural,
            Self::UnexpectedEndTag | Self::ExpectedEndTagToken | Self::UnexpectedToken { .. } => {
                ErrorCategory::Internal
            }
            Self::SpecialInRawText { .. } => ErrorCategory::Unsupported,
            Self::Syntax(_) => ErrorCategory::Syntax,
        }
    }

    /// Shorthand for a tokenizer error.
    #[must_use]
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax(message.into())
    }
}

/// A fatal error, positioned in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {line}, column {column}, near \"{snippet}\"")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// Byte offset into the source where the error was raised.
    pub position: usize,
    /// 1-based line number of `position`.
    pub line: usize,
    /// 1-based column (in characters) of `position`.
    pub column: usize,
    /// A few characters of input starting at `position`.
    pub snippet: String,
}

impl ParseError {
    /// Number of characters of remaining input kept in [`ParseError::snippet`].
    pub const SNIPPET_LEN: usize = 20;

    /// Build an error for `kind` raised at byte `position` of `source`.
    ///
    /// `position` is clamped to the source length and snapped back to a
    /// character boundary.
    #[must_use]
    pub fn at(kind: ParseErrorKind, source: &str, position: usize) -> Self {
        let mut position = position.min(source.len());
        while !source.is_char_boundary(position) {
            position -= 1;
        }

        let consumed = &source[..position];
        let line = consumed.matches('\n').count() + 1;
        let line_start = consumed.rfind('\n').map_or(0, |i| i + 1);
        let column = consumed[line_start..].chars().count() + 1;
        let snippet = source[position..]
            .chars()
            .take(Self::SNIPPET_LEN)
            .take_while(|&c| c != '\n')
            .collect();

        Self {
            kind,
            position,
            line,
            column,
            snippet,
        }
    }

    /// Classify this error.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}
