use crate::error::{ErrorKind, ValidationError};
use crate::helpers::*;
use serde_json::Value;

/// Report fields and triggers whose `object_key` names no declared object.
///
/// Keys are compared as JSON values, so an `object_key` of `123` only
/// resolves against an object whose `key` is the number `123`. Entities
/// with a blank `object_key` are skipped; the schema stage has already
/// rejected them.
pub fn validate(doc: &Value) -> Vec<ValidationError> {
    let declared: Vec<&Value> = collection(doc, OBJECTS)
        .into_iter()
        .filter_map(|object| object.get("key"))
        .filter(|key| !is_blank(Some(*key)))
        .collect();

    let mut errors = Vec::new();
    for (name, kind) in [
        (OBJECT_FIELDS, ErrorKind::InvalidObjectReferenceInFields),
        (OBJECT_TRIGGERS, ErrorKind::InvalidObjectReferenceInTriggers),
    ] {
        for entity in collection(doc, name) {
            let Some(object_key) = owning_object_key(entity) else {
                continue;
            };
            if !declared.contains(&object_key) {
                errors.push(
                    ValidationError::new(kind)
                        .with("item_identifier", safe_value(entity.get("key")))
                        .with("object_key", safe_value(Some(object_key))),
                );
            }
        }
    }
    errors
}
