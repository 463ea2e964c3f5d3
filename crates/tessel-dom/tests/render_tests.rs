//! Tests for constructor-notation rendering and the placeholder projection.

use serde_json::json;
use tessel_dom::render::{
    ElementView, Literal, SPECIAL_TAG_NAME, ViewAttrs, element_to_code, node_to_code, to_code,
};
use tessel_dom::{
    AttrPart, AttributeMap, CharRef, Compact, Node, Payload, RenderError, RenderOptions, Special,
    format_tree,
};

fn payload(value: serde_json::Value) -> Payload {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("payload must be an object"),
    }
}

#[test]
fn test_render_nested_elements() {
    let tree: Node = Node::element(
        "div",
        None,
        vec![
            Node::text("a"),
            Node::element("b", None, vec![Node::text("c")]),
            Node::text("d"),
        ],
    );
    let code = node_to_code(&tree, &RenderOptions::default()).unwrap();
    assert_eq!(code, r#"div("a", b("c"), "d")"#);
}

#[test]
fn test_render_attributes() {
    let mut attrs = AttributeMap::new();
    let _ = attrs.insert("checked".to_string(), Compact::Absent);
    let _ = attrs.insert(
        "title".to_string(),
        Compact::Many(vec![
            AttrPart::from("a"),
            AttrPart::CharRef(CharRef::new("&amp;", "&")),
            AttrPart::from("b"),
        ]),
    );
    let tree: Node = Node::element("input", Some(attrs), Vec::new());
    let code = node_to_code(&tree, &RenderOptions::default()).unwrap();
    assert_eq!(
        code,
        r#"input({"checked": "", "title": ["a", CharRef("&amp;", "&"), "b"]})"#
    );
}

#[test]
fn test_render_compact_shapes() {
    let options = RenderOptions::default();
    assert_eq!(to_code::<Payload>(&Compact::Absent, &options).unwrap(), "null");
    assert_eq!(
        to_code::<Payload>(&Compact::Single(Node::text("x")), &options).unwrap(),
        "\"x\""
    );
    let many = Compact::Many(vec![Node::text("x"), Node::Comment(" c ".to_string())]);
    assert_eq!(
        to_code::<Payload>(&many, &options).unwrap(),
        r#"["x", Comment(" c ")]"#
    );
}

#[test]
fn test_special_projects_to_synthetic_element() {
    let special = Special::new(payload(json!({"kind": "mustache", "depth": 2})));
    let (view, options) = special.element_view(&RenderOptions::default());
    assert_eq!(view.tag_name, SPECIAL_TAG_NAME);
    assert!(view.children.is_empty());
    assert!(options.allow_all_primitives);
    match view.attrs {
        ViewAttrs::Literals(literals) => {
            assert_eq!(literals.len(), 2);
            assert!(literals.contains(&("depth".to_string(), Literal::Number("2".to_string()))));
        }
        _ => panic!("expected literal attributes"),
    }
}

#[test]
fn test_special_renders_primitives() {
    let node: Node = Node::Special(Special::new(payload(json!({"path": "name", "escaped": true}))));
    let code = node_to_code(&node, &RenderOptions::default()).unwrap();
    assert!(code.starts_with("Special({"));
    assert!(code.contains(r#""path": "name""#));
    assert!(code.contains(r#""escaped": true"#));
}

#[test]
fn test_special_inside_attribute_value() {
    let mut attrs = AttributeMap::new();
    let _ = attrs.insert(
        "class".to_string(),
        Compact::Many(vec![
            AttrPart::from("btn-"),
            AttrPart::Special(Special::new(payload(json!({"path": "kind"})))),
        ]),
    );
    let node: Node = Node::element("a", Some(attrs), Vec::new());
    let code = node_to_code(&node, &RenderOptions::default()).unwrap();
    assert_eq!(code, r#"a({"class": ["btn-", Special({"path": "kind"})]})"#);
}

#[test]
fn test_generic_path_rejects_primitives_without_option() {
    let view: ElementView<'_, Payload> = ElementView {
        tag_name: "Widget",
        attrs: ViewAttrs::Literals(vec![("size".to_string(), Literal::Number("3".to_string()))]),
        children: &[],
    };
    let err = element_to_code(&view, &RenderOptions::default()).unwrap_err();
    assert_eq!(
        err,
        RenderError::DisallowedPrimitive {
            tag: "Widget".to_string(),
            attr: "size".to_string(),
        }
    );

    let allowed = RenderOptions {
        allow_all_primitives: true,
    };
    assert_eq!(element_to_code(&view, &allowed).unwrap(), r#"Widget({"size": 3})"#);
}

#[test]
fn test_literal_from_json() {
    assert_eq!(Literal::from(&json!("s")), Literal::String("s".to_string()));
    assert_eq!(Literal::from(&json!(null)), Literal::Null);
    assert_eq!(Literal::from(&json!(false)), Literal::Bool(false));
    assert_eq!(Literal::from(&json!([1, 2])), Literal::Structured("[1,2]".to_string()));
    assert!(Literal::from(&json!("s")).is_string());
    assert!(!Literal::from(&json!(1)).is_string());
}

#[test]
fn test_format_tree_outline() {
    let mut attrs = AttributeMap::new();
    let _ = attrs.insert("id".to_string(), Compact::Single(AttrPart::from("main")));
    let tree: Compact<Node> = Compact::Single(Node::element(
        "div",
        Some(attrs),
        vec![
            Node::text("a b"),
            Node::CharRef(CharRef::new("&amp;", "&")),
            Node::element("br", None, Vec::new()),
        ],
    ));
    let outline = format_tree(&tree);
    assert_eq!(
        outline,
        "<div id=\"main\">\n  \"a\u{00B7}b\"\n  &amp; => \"&\"\n  <br>\n"
    );
}

#[test]
fn test_node_json_shape() {
    let node: Node = Node::element(
        "p",
        None,
        vec![Node::text("x"), Node::CharRef(CharRef::new("&lt;", "<"))],
    );
    let value = serde_json::to_value(&node).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "Element",
            "value": {
                "tag_name": "p",
                "children": [
                    {"type": "Text", "value": "x"},
                    {"type": "CharRef", "value": {"html": "&lt;", "str": "<"}}
                ]
            }
        })
    );
}
