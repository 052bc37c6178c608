//! Top-level shape gate. Anything it reports stops the pipeline.

use crate::error::{ErrorKind, ValidationError};
use crate::helpers::{OBJECT_FIELDS, OBJECT_TRIGGERS, OBJECTS};
use serde_json::Value;

const COLLECTIONS: [(&str, ErrorKind); 3] = [
    (OBJECTS, ErrorKind::InvalidObjectsStructure),
    (OBJECT_FIELDS, ErrorKind::InvalidObjectFieldsStructure),
    (OBJECT_TRIGGERS, ErrorKind::InvalidObjectTriggersStructure),
];

/// Check that the document is a non-empty map whose collections, when
/// present, are arrays.
pub fn validate(doc: &Value) -> Vec<ValidationError> {
    let Some(map) = doc.as_object() else {
        return vec![ValidationError::new(ErrorKind::InvalidRequirementsStructure)];
    };

    let nothing_declared = COLLECTIONS.iter().all(|(name, _)| match map.get(*name) {
        None => true,
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    });
    if map.is_empty() || nothing_declared {
        return vec![ValidationError::new(ErrorKind::EmptyRequirements)];
    }

    COLLECTIONS
        .iter()
        .filter(|(name, _)| map.get(*name).is_some_and(|v| !v.is_array()))
        .map(|(_, kind)| ValidationError::new(*kind))
        .collect()
}
