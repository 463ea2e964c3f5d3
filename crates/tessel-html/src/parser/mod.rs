//! Content-model tree builder.
//!
//! Unlike [§ 13.2.6 Tree construction](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction),
//! there are no insertion modes, no implied end tags and no error recovery:
//! every element is closed explicitly by its own end tag, and anything else
//! aborts the parse.

/// Attribute value assembly.
pub mod attributes;
/// Character reference decoding.
pub mod char_ref;
/// Element content parsing.
pub mod content;
/// Raw-text element bodies.
pub mod rcdata;

pub use attributes::{parse_attrs, value_to_text};
pub use char_ref::{code_point_to_string, code_point_to_utf16, decode_char_ref};
pub use content::{FragmentParser, StopPredicate};
pub use rcdata::{RAW_TEXT_ELEMENTS, is_looking_at_end_tag};
