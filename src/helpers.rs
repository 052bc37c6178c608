//! Shape-narrowing utilities shared by every validation stage.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

pub const OBJECTS: &str = "objects";
pub const OBJECT_FIELDS: &str = "object_fields";
pub const OBJECT_TRIGGERS: &str = "object_triggers";

/// Display value used when an entity's identifying key is absent.
pub const UNDEFINED: &str = "(undefined)";

static SETTING_PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*setting\s*\.\s*[A-Za-z0-9_-]+(?:\s*\.\s*[A-Za-z0-9_-]+)*\s*\}\}").unwrap()
});

pub type Entity = Map<String, Value>;

/// Keep only the map-shaped elements of an array. Anything that is not an
/// array yields nothing.
pub fn extract_map_entries(value: Option<&Value>) -> Vec<&Entity> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_object).collect())
        .unwrap_or_default()
}

/// Map-shaped entries of one of the document's named collections.
pub fn collection<'a>(doc: &'a Value, name: &str) -> Vec<&'a Entity> {
    extract_map_entries(doc.get(name))
}

/// Combined element count of a condition group's `all` and `any` arrays.
/// Members that are not arrays contribute nothing.
pub fn count_conditions(group: Option<&Value>) -> usize {
    let Some(group) = group.and_then(Value::as_object) else {
        return 0;
    };
    ["all", "any"]
        .iter()
        .filter_map(|name| group.get(*name).and_then(Value::as_array))
        .map(Vec::len)
        .sum()
}

/// True when a value is absent, `null`, or a whitespace-only string.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// Render a possibly-absent identifier for an error context.
pub fn safe_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other @ (Value::Array(_) | Value::Object(_))) => other.to_string(),
        _ => UNDEFINED.to_string(),
    }
}

/// The owning object key of a field or trigger, whatever its type, unless it
/// is blank.
pub fn owning_object_key(entity: &Entity) -> Option<&Value> {
    let object_key = entity.get("object_key");
    if is_blank(object_key) { None } else { object_key }
}

/// Whether `text` contains a `{{ setting.name }}` template token.
pub fn contains_setting_placeholder(text: &str) -> bool {
    SETTING_PLACEHOLDER_RE.is_match(text)
}
