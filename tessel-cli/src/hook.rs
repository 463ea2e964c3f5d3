//! Demo placeholder syntax for `--placeholders`.

use serde_json::Value;
use tessel_common::ParseError;
use tessel_dom::Payload;
use tessel_html::{Scanner, TemplateTagPosition};

/// Recognize `{{expr}}`, `{{{expr}}}` and `{{! comment }}`.
///
/// Comments are consumed without producing a placeholder.
pub fn mustache(
    scanner: &mut Scanner,
    position: TemplateTagPosition,
) -> Result<Option<Payload>, ParseError> {
    let rest = scanner.rest();
    if !rest.starts_with("{{") {
        return Ok(None);
    }

    let (open, close) = if rest.starts_with("{{{") {
        ("{{{", "}}}")
    } else {
        ("{{", "}}")
    };
    let Some(len) = rest[open.len()..].find(close) else {
        return Err(scanner.syntax_error(format!("Expected \"{close}\" to close template tag")));
    };
    let body = rest[open.len()..open.len() + len].trim().to_string();
    scanner.advance(open.len() + len + close.len());

    if body.starts_with('!') {
        return Ok(None);
    }
    if body.is_empty() {
        return Err(scanner.syntax_error("Empty template tag"));
    }

    let mut payload = Payload::new();
    let _ = payload.insert("path".to_string(), Value::String(body));
    let _ = payload.insert("escaped".to_string(), Value::Bool(open == "{{"));
    let _ = payload.insert("position".to_string(), Value::String(position.to_string()));
    Ok(Some(payload))
}
