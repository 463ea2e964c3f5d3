//! Tag registry: which names are void, and how nodes get constructed.
//!
//! The parser never consults global state for this. A registry is passed in
//! explicitly, so tests (or an embedding template language) can supply their
//! own.

use crate::node::{AttributeMap, CharRef, Element, Node, Payload};

/// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
///
/// "Void elements: area, base, br, col, embed, hr, img, input, link, meta,
/// source, track, wbr"
///
/// Plus the obsolete `command`, `keygen` and `param`, which still parse as void.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Maps tag names to constructors and reports which names are void.
pub trait TagRegistry<P = Payload> {
    /// Returns true if `name` can have neither children nor an end tag.
    fn is_void_element(&self, name: &str) -> bool;

    /// Construct an element. `attrs` is `None` when the tag had no attributes.
    fn create_element(
        &self,
        name: &str,
        attrs: Option<AttributeMap<P>>,
        children: Vec<Node<P>>,
    ) -> Node<P> {
        Node::Element(Element {
            tag_name: name.to_string(),
            attrs,
            children,
        })
    }

    /// Construct a comment node.
    fn create_comment(&self, text: String) -> Node<P> {
        Node::Comment(text)
    }

    /// Construct a character reference node.
    fn create_char_ref(&self, char_ref: CharRef) -> Node<P> {
        Node::CharRef(char_ref)
    }
}

/// The standard HTML registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlTags;

impl<P> TagRegistry<P> for HtmlTags {
    fn is_void_element(&self, name: &str) -> bool {
        VOID_ELEMENTS.contains(&name)
    }
}
