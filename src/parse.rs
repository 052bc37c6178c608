use crate::error::{ParseError, ParseErrorKind};
use serde_json::Value;

/// Parse a YAML or JSON string into an untyped requirements document.
///
/// Performs deserialization only. Any root shape is returned as-is: a
/// document that is an array or a scalar is the validator's concern, not a
/// parse failure.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    if input.trim().is_empty() {
        return Err(syntax_error("empty input".to_string()));
    }

    // JSON is valid YAML, so one deserializer covers both.
    serde_saphyr::from_str(input).map_err(|e| syntax_error(e.to_string()))
}

pub(crate) fn syntax_error(message: String) -> ParseError {
    ParseError {
        kind: ParseErrorKind::Syntax,
        message,
        line: None,
        column: None,
    }
}
