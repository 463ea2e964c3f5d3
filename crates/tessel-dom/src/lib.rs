//! Content tree for the Tessel fragment parser.
//!
//! The parser in `tessel-html` produces [`Node`]s: text, decoded character
//! references, comments, opaque templating placeholders ([`Special`]), and
//! elements that own their children. Results come back in the
//! [`Compact`] absent / single / many shape.
//!
//! This crate also holds the pieces the parser calls into but does not own:
//! - the [`TagRegistry`] deciding which elements are void and constructing nodes
//! - the constructor-notation [`render`]er, which treats placeholders as
//!   synthetic `Special` elements
//! - a debug [`print_tree`]

/// The absent / single / many result shape.
pub mod compact;
/// Node types.
pub mod node;
/// Void-element registry and node constructors.
pub mod registry;
/// Constructor-notation rendering.
pub mod render;
/// Debug tree printing.
pub mod tree;

pub use compact::Compact;
pub use node::{
    AttrPart, AttributeMap, AttributeValue, CharRef, Element, Node, Payload, SPECIALS_ATTRIBUTE,
    Special,
};
pub use registry::{HtmlTags, TagRegistry, VOID_ELEMENTS};
pub use render::{RenderError, RenderOptions};
pub use tree::{format_tree, print_tree};
