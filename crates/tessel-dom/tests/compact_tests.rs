//! Tests for the compact result shape and node helpers.

use tessel_dom::{AttrPart, AttributeValue, CharRef, Compact, HtmlTags, Node, TagRegistry};

#[test]
fn test_from_vec_collapses() {
    assert_eq!(Compact::<i32>::from_vec(vec![]), Compact::Absent);
    assert_eq!(Compact::from_vec(vec![1]), Compact::Single(1));
    assert_eq!(Compact::from_vec(vec![1, 2]), Compact::Many(vec![1, 2]));
}

#[test]
fn test_into_vec_expands() {
    assert!(Compact::<i32>::Absent.into_vec().is_empty());
    assert_eq!(Compact::Single(7).into_vec(), vec![7]);
    assert_eq!(Compact::Many(vec![1, 2, 3]).into_vec(), vec![1, 2, 3]);
}

#[test]
fn test_slice_view_and_len() {
    let single = Compact::Single("a");
    assert_eq!(single.as_slice(), &["a"]);
    assert_eq!(single.len(), 1);
    assert!(!single.is_empty());

    let absent = Compact::<&str>::default();
    assert!(absent.is_absent());
    assert!(absent.is_empty());
    assert_eq!(absent.len(), 0);
}

#[test]
fn test_collect_and_iterate() {
    let compact: Compact<i32> = (1..=3).collect();
    assert_eq!(compact.len(), 3);
    let doubled: Vec<i32> = compact.iter().map(|n| n * 2).collect();
    assert_eq!(doubled, vec![2, 4, 6]);
    let owned: Vec<i32> = compact.into_iter().collect();
    assert_eq!(owned, vec![1, 2, 3]);
}

#[test]
fn test_serializes_as_null_item_or_array() {
    let absent = Compact::<String>::Absent;
    let single = Compact::Single("x".to_string());
    let many = Compact::Many(vec!["x".to_string(), "y".to_string()]);
    assert_eq!(serde_json::to_string(&absent).unwrap(), "null");
    assert_eq!(serde_json::to_string(&single).unwrap(), "\"x\"");
    assert_eq!(serde_json::to_string(&many).unwrap(), "[\"x\",\"y\"]");
}

#[test]
fn test_plain_text_attribute_value() {
    let empty: AttributeValue = Compact::Absent;
    assert_eq!(empty.as_plain_text().as_deref(), Some(""));

    let text: AttributeValue = Compact::Single(AttrPart::from("main"));
    assert_eq!(text.as_plain_text().as_deref(), Some("main"));

    let mixed: AttributeValue = Compact::Many(vec![
        AttrPart::from("a"),
        AttrPart::CharRef(CharRef::new("&amp;", "&")),
    ]);
    assert_eq!(mixed.as_plain_text(), None);
}

#[test]
fn test_char_ref_utf16() {
    let grin = CharRef::new("&#x1F600;", "\u{1F600}");
    assert_eq!(grin.text_utf16(), vec![0xD83D, 0xDE00]);
}

#[test]
fn test_node_helpers() {
    let node: Node = Node::element("p", None, vec![Node::text("hi")]);
    assert_eq!(node.kind_name(), "Element");
    let element = node.as_element().unwrap();
    assert_eq!(element.tag_name, "p");
    assert_eq!(element.children[0].as_text(), Some("hi"));
    assert!(element.attr("id").is_none());
}

#[test]
fn test_html_void_elements() {
    let tags = HtmlTags;
    for name in ["br", "hr", "img", "input", "meta", "wbr"] {
        assert!(TagRegistry::<()>::is_void_element(&tags, name), "{name}");
    }
    for name in ["div", "span", "textarea", "BR"] {
        assert!(!TagRegistry::<()>::is_void_element(&tags, name), "{name}");
    }
}

#[test]
fn test_default_constructors() {
    let tags = HtmlTags;
    let comment: Node = tags.create_comment(" hi ".to_string());
    assert_eq!(comment, Node::Comment(" hi ".to_string()));

    let char_ref: Node = tags.create_char_ref(CharRef::new("&lt;", "<"));
    assert_eq!(char_ref, Node::CharRef(CharRef::new("&lt;", "<")));

    let element: Node = tags.create_element("br", None, Vec::new());
    assert_eq!(element, Node::element("br", None, Vec::new()));
}
