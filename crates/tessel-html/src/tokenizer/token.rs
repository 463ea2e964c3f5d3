use std::fmt;

use indexmap::IndexMap;
use strum_macros::IntoStaticStr;
use tessel_dom::Payload;

/// Attribute fragments of a tag, keyed by lowercased attribute name, in source
/// order.
///
/// Placeholders written where an attribute name could go are collected under
/// [`SPECIALS_ATTRIBUTE`](tessel_dom::SPECIALS_ATTRIBUTE).
pub type TokenAttrs<P = Payload> = IndexMap<String, Vec<AttrFragment<P>>>;

/// A lexical token.
///
/// Tokens are produced one at a time and consumed immediately by the tree
/// builder.
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
pub enum Token<P = Payload> {
    /// `<!DOCTYPE ...>`. Never valid inside a fragment.
    Doctype,

    /// Character data.
    Chars(String),

    /// A character reference.
    CharRef {
        /// Source spelling, e.g. `&amp;`.
        html: String,
        /// The Unicode scalar values it stands for (usually one).
        code_points: Vec<u32>,
    },

    /// `<!--...-->`, holding the text between the delimiters.
    Comment(String),

    /// A placeholder recognized by the scanner's hook.
    Special(P),

    /// A start or end tag.
    Tag(TagToken<P>),
}

/// A start or end tag.
#[derive(Debug, Clone, PartialEq)]
pub struct TagToken<P = Payload> {
    /// Lowercased tag name.
    pub name: String,
    /// Attribute value fragments. Always empty for end tags.
    pub attrs: TokenAttrs<P>,
    /// `</name>` rather than `<name>`.
    pub is_end: bool,
    /// Written as `<name/>`.
    pub self_closing: bool,
}

impl<P> TagToken<P> {
    /// A start tag with no attributes.
    #[must_use]
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: TokenAttrs::default(),
            is_end: false,
            self_closing: false,
        }
    }

    /// An end tag.
    #[must_use]
    pub fn end(name: impl Into<String>) -> Self {
        Self {
            is_end: true,
            ..Self::start(name)
        }
    }
}

/// One piece of an attribute value, as lexed.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrFragment<P = Payload> {
    /// Literal characters.
    Chars(String),
    /// A character reference.
    CharRef {
        /// Source spelling.
        html: String,
        /// Unicode scalar values.
        code_points: Vec<u32>,
    },
    /// A placeholder.
    Special(P),
}

impl<P> Token<P> {
    /// Variant name, for diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        self.into()
    }
}

impl<P> fmt::Display for Token<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doctype => write!(f, "<!DOCTYPE>"),
            Self::Chars(text) => write!(f, "Chars({text:?})"),
            Self::CharRef { html, code_points } => {
                write!(f, "CharRef({html}")?;
                for cp in code_points {
                    write!(f, " U+{cp:04X}")?;
                }
                write!(f, ")")
            }
            Self::Comment(text) => write!(f, "<!--{text}-->"),
            Self::Special(_) => write!(f, "Special"),
            Self::Tag(tag) => {
                write!(f, "<")?;
                if tag.is_end {
                    write!(f, "/")?;
                }
                write!(f, "{}", tag.name)?;
                for (name, fragments) in &tag.attrs {
                    write!(f, " {name}")?;
                    if !fragments.is_empty() {
                        write!(f, "=\"")?;
                        for fragment in fragments {
                            match fragment {
                                AttrFragment::Chars(text) => write!(f, "{text}")?,
                                AttrFragment::CharRef { html, .. } => write!(f, "{html}")?,
                                AttrFragment::Special(_) => write!(f, "{{Special}}")?,
                            }
                        }
                        write!(f, "\"")?;
                    }
                }
                if tag.self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
        }
    }
}
