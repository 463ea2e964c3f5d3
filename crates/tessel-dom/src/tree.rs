//! Indented debug view of a content tree.

use std::fmt::Debug;

use crate::compact::Compact;
use crate::node::{AttrPart, AttributeValue, Node};

/// Render a parse result as an indented outline, one node per line.
#[must_use]
pub fn format_tree<P: Debug>(content: &Compact<Node<P>>) -> String {
    let mut out = String::new();
    for node in content {
        format_node(node, 0, &mut out);
    }
    out
}

/// Print a parse result for debugging.
pub fn print_tree<P: Debug>(content: &Compact<Node<P>>) {
    print!("{}", format_tree(content));
}

fn format_node<P: Debug>(node: &Node<P>, indent: usize, out: &mut String) {
    let prefix = "  ".repeat(indent);
    match node {
        Node::Element(element) => {
            match &element.attrs {
                Some(attrs) if !attrs.is_empty() => {
                    let attrs: Vec<String> = attrs
                        .iter()
                        .map(|(k, v)| {
                            if v.is_absent() {
                                k.clone()
                            } else {
                                format!("{k}=\"{}\"", format_attr_value(v))
                            }
                        })
                        .collect();
                    out.push_str(&format!("{prefix}<{} {}>\n", element.tag_name, attrs.join(" ")));
                }
                _ => out.push_str(&format!("{prefix}<{}>\n", element.tag_name)),
            }
            for child in &element.children {
                format_node(child, indent + 1, out);
            }
        }
        Node::Text(data) => {
            let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
            out.push_str(&format!("{prefix}\"{display}\"\n"));
        }
        Node::CharRef(char_ref) => {
            out.push_str(&format!("{prefix}{} => {:?}\n", char_ref.html, char_ref.text));
        }
        Node::Comment(data) => {
            out.push_str(&format!("{prefix}<!--{data}-->\n"));
        }
        Node::Special(special) => {
            out.push_str(&format!("{prefix}{{{{ {:?} }}}}\n", special.value));
        }
    }
}

fn format_attr_value<P: Debug>(value: &AttributeValue<P>) -> String {
    value
        .iter()
        .map(|part| match part {
            AttrPart::Text(text) => text.clone(),
            AttrPart::CharRef(char_ref) => char_ref.html.clone(),
            AttrPart::Special(special) => format!("{{{{ {:?} }}}}", special.value),
        })
        .collect()
}
