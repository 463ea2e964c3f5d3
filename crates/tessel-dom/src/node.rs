//! Content nodes.
//!
//! The parser builds these bottom-up: each element owns its children outright,
//! there are no parent pointers, and nothing is mutated once a subtree has
//! been handed to its parent.

use indexmap::IndexMap;
use serde::Serialize;

use crate::compact::Compact;

/// Default payload carried by placeholder nodes: an opaque JSON object.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Name of the pseudo-attribute that collects every placeholder written in
/// attribute-name position of a start tag (e.g. `<div {{attrs}}>`).
pub const SPECIALS_ATTRIBUTE: &str = "$specials";

/// Value of one attribute. [`Compact::Absent`] stands for the empty string.
pub type AttributeValue<P = Payload> = Compact<AttrPart<P>>;

/// Attributes of an element, in source order.
pub type AttributeMap<P = Payload> = IndexMap<String, AttributeValue<P>>;

/// A node in the parsed content tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum Node<P = Payload> {
    /// Character data. The parser never emits two of these in a row.
    Text(String),
    /// A decoded character reference.
    CharRef(CharRef),
    /// `<!-- ... -->`
    Comment(String),
    /// A templating placeholder.
    Special(Special<P>),
    /// An element with its attributes and children.
    Element(Element<P>),
}

impl<P> Node<P> {
    /// Create a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create an element node.
    #[must_use]
    pub fn element(
        tag_name: impl Into<String>,
        attrs: Option<AttributeMap<P>>,
        children: Vec<Self>,
    ) -> Self {
        Self::Element(Element {
            tag_name: tag_name.into(),
            attrs,
            children,
        })
    }

    /// Kind name, used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::CharRef(_) => "CharRef",
            Self::Comment(_) => "Comment",
            Self::Special(_) => "Special",
            Self::Element(_) => "Element",
        }
    }

    /// Text content if this is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Element data if this is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element<P>> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }
}

/// Element data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element<P = Payload> {
    /// Tag name exactly as the tokenizer produced it.
    pub tag_name: String,
    /// `None` when the start tag had no attributes at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attrs: Option<AttributeMap<P>>,
    /// Child nodes in document order. Always empty for void elements.
    pub children: Vec<Node<P>>,
}

impl<P> Element<P> {
    /// Look up an attribute value by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&AttributeValue<P>> {
        self.attrs.as_ref().and_then(|attrs| attrs.get(name))
    }
}

/// A character reference, keeping both its source spelling and its meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CharRef {
    /// Source text, e.g. `&amp;`.
    pub html: String,
    /// Decoded text, e.g. `&`.
    #[serde(rename = "str")]
    pub text: String,
}

impl CharRef {
    /// Create a character reference node value.
    #[must_use]
    pub fn new(html: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            text: text.into(),
        }
    }

    /// The decoded text as UTF-16 code units.
    #[must_use]
    pub fn text_utf16(&self) -> Vec<u16> {
        self.text.encode_utf16().collect()
    }
}

/// An opaque templating placeholder.
///
/// The parser stores the payload and hands it back untouched; see
/// [`Special::element_view`](crate::render) for how it is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Special<P = Payload> {
    /// The payload produced by the scanner's placeholder hook.
    pub value: P,
}

impl<P> Special<P> {
    /// Wrap a payload.
    #[must_use]
    pub const fn new(value: P) -> Self {
        Self { value }
    }
}

/// One piece of an attribute value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum AttrPart<P = Payload> {
    /// Literal text. Adjacent text pieces are always merged.
    Text(String),
    /// A decoded character reference.
    CharRef(CharRef),
    /// A placeholder inside the value.
    Special(Special<P>),
}

impl<P> AttrPart<P> {
    /// Text content if this is a text part.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl<P> From<&str> for AttrPart<P> {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl<P> AttributeValue<P> {
    /// The value as plain text, if it consists only of text (or is empty).
    #[must_use]
    pub fn as_plain_text(&self) -> Option<String> {
        self.iter()
            .map(|part| part.as_text())
            .collect::<Option<Vec<&str>>>()
            .map(|parts| parts.concat())
    }
}
