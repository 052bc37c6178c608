//! Error list → YAML / JSON report.

use crate::error::{SerializeError, ValidationError};

/// Serialize an error list to a YAML string, one `{kind, context}` entry per
/// error, in validation order.
pub fn serialize_errors(errors: &[ValidationError]) -> Result<String, SerializeError> {
    // Go through serde_json::Value so context keys keep their order.
    let value = serde_json::to_value(errors).map_err(|e| SerializeError {
        message: format!("failed to convert errors to JSON value: {}", e),
    })?;

    serde_saphyr::to_string(&value).map_err(|e| SerializeError {
        message: format!("failed to serialize to YAML: {}", e),
    })
}

/// Serialize an error list to a compact JSON string.
pub fn to_json(errors: &[ValidationError]) -> Result<String, SerializeError> {
    serde_json::to_string(errors).map_err(|e| SerializeError {
        message: format!("failed to serialize to JSON: {}", e),
    })
}
