//! Attribute value assembly.

use tessel_dom::{AttrPart, AttributeMap, AttributeValue, Compact, SPECIALS_ATTRIBUTE, Special};

use super::char_ref::decode_char_ref;
use crate::tokenizer::{AttrFragment, TokenAttrs};

/// Turn a tag token's raw attributes into the element's attribute map.
///
/// Returns `None` when the tag had no attributes. Each value is folded into
/// parts (text runs merged), then collapsed to the [`Compact`] shape, except
/// [`SPECIALS_ATTRIBUTE`], which always stays a sequence.
#[must_use]
pub fn parse_attrs<P>(attrs: TokenAttrs<P>) -> Option<AttributeMap<P>> {
    if attrs.is_empty() {
        return None;
    }

    let map = attrs
        .into_iter()
        .map(|(name, fragments)| {
            let parts = assemble_parts(fragments);
            let value = if name == SPECIALS_ATTRIBUTE {
                Compact::Many(parts)
            } else {
                Compact::from_vec(parts)
            };
            (name, value)
        })
        .collect::<AttributeMap<P>>();
    Some(map)
}

/// Fold lexed fragments into value parts.
fn assemble_parts<P>(fragments: Vec<AttrFragment<P>>) -> Vec<AttrPart<P>> {
    let mut parts: Vec<AttrPart<P>> = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        match fragment {
            AttrFragment::Chars(text) => {
                if let Some(AttrPart::Text(last)) = parts.last_mut() {
                    last.push_str(&text);
                } else {
                    parts.push(AttrPart::Text(text));
                }
            }
            AttrFragment::CharRef { html, code_points } => {
                parts.push(AttrPart::CharRef(decode_char_ref(html, &code_points)));
            }
            AttrFragment::Special(payload) => parts.push(AttrPart::Special(Special::new(payload))),
        }
    }
    parts
}

/// The value as a single string, with character references decoded and
/// placeholders skipped.
#[must_use]
pub fn value_to_text<P>(value: &AttributeValue<P>) -> String {
    value
        .iter()
        .filter_map(|part| match part {
            AttrPart::Text(text) => Some(text.as_str()),
            AttrPart::CharRef(char_ref) => Some(char_ref.text.as_str()),
            AttrPart::Special(_) => None,
        })
        .collect()
}
