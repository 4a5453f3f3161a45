//! Accessors for raw Lottie document nodes
//!
//! The document is kept as a decoded `serde_json::Value`; these helpers are the
//! only place that knows which JSON fields carry names and references.

use serde_json::Value;

/// Field holding the display name of a layer, shape or asset.
pub const NAME_KEY: &str = "nm";
/// Field holding the id of the precomp a layer refers to.
pub const REFERENCE_KEY: &str = "refId";
/// Top-level collection of reusable precomps.
pub const ASSETS_KEY: &str = "assets";
/// Identifier of an entry in `assets`.
pub const ID_KEY: &str = "id";

/// Name of a node, if it carries a non-empty string `nm`.
pub fn name_of(node: &Value) -> Option<&str> {
    node.get(NAME_KEY)
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
}

/// Reference id of a node, if its `refId` is a string.
pub fn reference_of(node: &Value) -> Option<&str> {
    node.get(REFERENCE_KEY).and_then(Value::as_str)
}

/// Identifier of an asset entry, if its `id` is a string.
pub fn id_of(node: &Value) -> Option<&str> {
    node.get(ID_KEY).and_then(Value::as_str)
}

/// Structured children of a value in document order.
///
/// Objects yield their field values, arrays their elements. Scalars and
/// `null` are skipped: they never produce tree nodes. Object field order is
/// the document's own order (`serde_json` is built with `preserve_order`).
pub fn structured_children<'a>(
    node: &'a Value,
) -> impl Iterator<Item = (Option<&'a str>, &'a Value)> + 'a {
    let fields: Box<dyn Iterator<Item = (Option<&'a str>, &'a Value)> + 'a> = match node {
        Value::Object(map) => Box::new(map.iter().map(|(k, v)| (Some(k.as_str()), v))),
        Value::Array(items) => Box::new(items.iter().map(|v| (None, v))),
        _ => Box::new(std::iter::empty()),
    };
    fields.filter(|(_, value)| is_structured(value))
}

fn is_structured(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}
