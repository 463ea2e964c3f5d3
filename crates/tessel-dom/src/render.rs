//! Constructor-notation rendering of content trees.
//!
//! Every element, real or synthetic, goes through one generic path
//! ([`element_to_code`]) that renders `name(attrs, child, child...)`. Text
//! becomes a quoted string, character references render as
//! `CharRef("&amp;", "&")` and comments as `Comment("...")`:
//!
//! ```text
//! div({"title": ["a", CharRef("&amp;", "&"), "b"]}, "hi", br())
//! ```
//!
//! Attribute values normally hold only strings. Placeholders are rendered by
//! projecting them onto a synthetic `Special` element whose attributes are the
//! payload entries; payloads may contain numbers, booleans and the like, so the
//! projection also switches on [`RenderOptions::allow_all_primitives`].

use serde_json::Value;
use thiserror::Error;

use crate::compact::Compact;
use crate::node::{AttrPart, AttributeMap, AttributeValue, CharRef, Element, Node, Payload, Special};

/// Tag name of the synthetic element a placeholder renders as.
pub const SPECIAL_TAG_NAME: &str = "Special";

/// Options threaded through rendering.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Accept non-string primitive attribute values (numbers, booleans, null).
    pub allow_all_primitives: bool,
}

/// Rendering failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A non-string primitive reached an element that does not accept one.
    #[error("attribute \"{attr}\" of <{tag}> has a non-string primitive value")]
    DisallowedPrimitive {
        /// Element being rendered.
        tag: String,
        /// Offending attribute.
        attr: String,
    },
}

/// A primitive attribute value of a synthetic element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// A string.
    String(String),
    /// A number, in its source notation.
    Number(String),
    /// `true` or `false`.
    Bool(bool),
    /// `null`.
    Null,
    /// A nested array or object, already serialized.
    Structured(String),
}

impl Literal {
    /// Strings are always accepted; everything else needs
    /// [`RenderOptions::allow_all_primitives`].
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    fn to_code(&self) -> String {
        match self {
            Self::String(s) => quote(s),
            Self::Number(n) | Self::Structured(n) => n.clone(),
            Self::Bool(b) => b.to_string(),
            Self::Null => "null".to_string(),
        }
    }
}

impl From<&Value> for Literal {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::String(s.clone()),
            Value::Number(n) => Self::Number(n.to_string()),
            Value::Bool(b) => Self::Bool(*b),
            Value::Null => Self::Null,
            Value::Array(_) | Value::Object(_) => Self::Structured(value.to_string()),
        }
    }
}

/// Placeholder payloads that can be presented as element attributes.
pub trait SpecialAttrs {
    /// The payload's entries, in order.
    fn special_attrs(&self) -> Vec<(String, Literal)>;
}

impl SpecialAttrs for Payload {
    fn special_attrs(&self) -> Vec<(String, Literal)> {
        self.iter()
            .map(|(name, value)| (name.clone(), Literal::from(value)))
            .collect()
    }
}

/// Attributes as seen by the generic element path.
#[derive(Debug, Clone)]
pub enum ViewAttrs<'a, P> {
    /// The tag had no attributes.
    None,
    /// Attributes of a parsed element.
    Map(&'a AttributeMap<P>),
    /// Primitive attributes of a synthetic element.
    Literals(Vec<(String, Literal)>),
}

/// Anything that renders as an element.
#[derive(Debug, Clone)]
pub struct ElementView<'a, P> {
    /// Element name.
    pub tag_name: &'a str,
    /// Element attributes.
    pub attrs: ViewAttrs<'a, P>,
    /// Element children.
    pub children: &'a [Node<P>],
}

impl<'a, P> From<&'a Element<P>> for ElementView<'a, P> {
    fn from(element: &'a Element<P>) -> Self {
        Self {
            tag_name: &element.tag_name,
            attrs: element.attrs.as_ref().map_or(ViewAttrs::None, ViewAttrs::Map),
            children: &element.children,
        }
    }
}

impl<P: SpecialAttrs> Special<P> {
    /// Present this placeholder as a childless `Special` element whose
    /// attributes are the payload entries.
    ///
    /// Returns the view together with a copy of `options` that accepts every
    /// primitive type, since payloads are not restricted to strings.
    #[must_use]
    pub fn element_view(&self, options: &RenderOptions) -> (ElementView<'_, P>, RenderOptions) {
        let mut options = *options;
        options.allow_all_primitives = true;
        let view = ElementView {
            tag_name: SPECIAL_TAG_NAME,
            attrs: ViewAttrs::Literals(self.value.special_attrs()),
            children: &[],
        };
        (view, options)
    }
}

/// Render a parse result: `null`, a single node, or `[node, node, ...]`.
///
/// # Errors
///
/// Returns [`RenderError::DisallowedPrimitive`] if a primitive reaches an
/// element that does not accept it.
pub fn to_code<P: SpecialAttrs>(
    content: &Compact<Node<P>>,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    match content {
        Compact::Absent => Ok("null".to_string()),
        Compact::Single(node) => node_to_code(node, options),
        Compact::Many(nodes) => {
            let parts = nodes
                .iter()
                .map(|node| node_to_code(node, options))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("[{}]", parts.join(", ")))
        }
    }
}

/// Render one node.
///
/// # Errors
///
/// See [`to_code`].
pub fn node_to_code<P: SpecialAttrs>(
    node: &Node<P>,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    match node {
        Node::Text(text) => Ok(quote(text)),
        Node::CharRef(char_ref) => Ok(char_ref_to_code(char_ref)),
        Node::Comment(text) => Ok(format!("Comment({})", quote(text))),
        Node::Special(special) => {
            let (view, options) = special.element_view(options);
            element_to_code(&view, &options)
        }
        Node::Element(element) => element_to_code(&ElementView::from(element), options),
    }
}

/// The generic element path: `name(attrs?, children...)`.
///
/// # Errors
///
/// See [`to_code`].
pub fn element_to_code<P: SpecialAttrs>(
    view: &ElementView<'_, P>,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let mut args = Vec::with_capacity(view.children.len() + 1);

    match &view.attrs {
        ViewAttrs::None => {}
        ViewAttrs::Map(attrs) => {
            let entries = attrs
                .iter()
                .map(|(name, value)| {
                    Ok(format!("{}: {}", quote(name), attr_value_to_code(value, options)?))
                })
                .collect::<Result<Vec<_>, RenderError>>()?;
            args.push(format!("{{{}}}", entries.join(", ")));
        }
        ViewAttrs::Literals(literals) => {
            let mut entries = Vec::with_capacity(literals.len());
            for (name, literal) in literals {
                if !literal.is_string() && !options.allow_all_primitives {
                    return Err(RenderError::DisallowedPrimitive {
                        tag: view.tag_name.to_string(),
                        attr: name.clone(),
                    });
                }
                entries.push(format!("{}: {}", quote(name), literal.to_code()));
            }
            args.push(format!("{{{}}}", entries.join(", ")));
        }
    }

    for child in view.children {
        args.push(node_to_code(child, options)?);
    }

    Ok(format!("{}({})", view.tag_name, args.join(", ")))
}

fn attr_value_to_code<P: SpecialAttrs>(
    value: &AttributeValue<P>,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    match value {
        Compact::Absent => Ok(quote("")),
        Compact::Single(part) => attr_part_to_code(part, options),
        Compact::Many(parts) => {
            let parts = parts
                .iter()
                .map(|part| attr_part_to_code(part, options))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("[{}]", parts.join(", ")))
        }
    }
}

fn attr_part_to_code<P: SpecialAttrs>(
    part: &AttrPart<P>,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    match part {
        AttrPart::Text(text) => Ok(quote(text)),
        AttrPart::CharRef(char_ref) => Ok(char_ref_to_code(char_ref)),
        AttrPart::Special(special) => {
            let (view, options) = special.element_view(options);
            element_to_code(&view, &options)
        }
    }
}

fn char_ref_to_code(char_ref: &CharRef) -> String {
    format!("CharRef({}, {})", quote(&char_ref.html), quote(&char_ref.text))
}

fn quote(text: &str) -> String {
    format!("{text:?}")
}
