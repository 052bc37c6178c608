use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Named values attached to a [`ValidationError`], in insertion order.
pub type Context = serde_json::Map<String, Value>;

/// Broad family a [`ErrorKind`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Structural,
    Size,
    Limits,
    Schema,
    Placeholder,
    Reference,
}

/// Every symbolic error kind the validator can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    // Structural
    InvalidRequirementsStructure,
    EmptyRequirements,
    InvalidObjectsStructure,
    InvalidObjectFieldsStructure,
    InvalidObjectTriggersStructure,
    // Size
    ExcessivePayloadSize,
    // Limits
    ExcessiveObjects,
    ExcessiveFields,
    ExcessiveSelectionFields,
    ExcessiveFieldOptions,
    ExcessiveRelationshipFilterConditions,
    ExcessiveTriggers,
    ExcessiveTriggerConditions,
    ExcessiveTriggerActions,
    // Schema
    MissingObjectSchemaKey,
    MissingFieldSchemaKey,
    MissingTriggerSchemaKey,
    InvalidTriggerConditionsStructure,
    EmptyTriggerConditions,
    InvalidTriggerActionsStructure,
    EmptyTriggerActions,
    // Placeholder
    ObjectSettingPlaceholderNotAllowed,
    FieldSettingPlaceholderNotAllowed,
    TriggerSettingPlaceholderNotAllowed,
    // Reference
    InvalidObjectReferenceInFields,
    InvalidObjectReferenceInTriggers,
}

impl ErrorKind {
    /// The stable snake_case name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidRequirementsStructure => "invalid_requirements_structure",
            ErrorKind::EmptyRequirements => "empty_requirements",
            ErrorKind::InvalidObjectsStructure => "invalid_objects_structure",
            ErrorKind::InvalidObjectFieldsStructure => "invalid_object_fields_structure",
            ErrorKind::InvalidObjectTriggersStructure => "invalid_object_triggers_structure",
            ErrorKind::ExcessivePayloadSize => "excessive_payload_size",
            ErrorKind::ExcessiveObjects => "excessive_objects",
            ErrorKind::ExcessiveFields => "excessive_fields",
            ErrorKind::ExcessiveSelectionFields => "excessive_selection_fields",
            ErrorKind::ExcessiveFieldOptions => "excessive_field_options",
            ErrorKind::ExcessiveRelationshipFilterConditions => {
                "excessive_relationship_filter_conditions"
            }
            ErrorKind::ExcessiveTriggers => "excessive_triggers",
            ErrorKind::ExcessiveTriggerConditions => "excessive_trigger_conditions",
            ErrorKind::ExcessiveTriggerActions => "excessive_trigger_actions",
            ErrorKind::MissingObjectSchemaKey => "missing_object_schema_key",
            ErrorKind::MissingFieldSchemaKey => "missing_field_schema_key",
            ErrorKind::MissingTriggerSchemaKey => "missing_trigger_schema_key",
            ErrorKind::InvalidTriggerConditionsStructure => "invalid_trigger_conditions_structure",
            ErrorKind::EmptyTriggerConditions => "empty_trigger_conditions",
            ErrorKind::InvalidTriggerActionsStructure => "invalid_trigger_actions_structure",
            ErrorKind::EmptyTriggerActions => "empty_trigger_actions",
            ErrorKind::ObjectSettingPlaceholderNotAllowed => "object_setting_placeholder_not_allowed",
            ErrorKind::FieldSettingPlaceholderNotAllowed => "field_setting_placeholder_not_allowed",
            ErrorKind::TriggerSettingPlaceholderNotAllowed => {
                "trigger_setting_placeholder_not_allowed"
            }
            ErrorKind::InvalidObjectReferenceInFields => "invalid_object_reference_in_fields",
            ErrorKind::InvalidObjectReferenceInTriggers => "invalid_object_reference_in_triggers",
        }
    }

    pub fn category(self) -> Category {
        use ErrorKind::*;
        match self {
            InvalidRequirementsStructure
            | EmptyRequirements
            | InvalidObjectsStructure
            | InvalidObjectFieldsStructure
            | InvalidObjectTriggersStructure => Category::Structural,
            ExcessivePayloadSize => Category::Size,
            ExcessiveObjects
            | ExcessiveFields
            | ExcessiveSelectionFields
            | ExcessiveFieldOptions
            | ExcessiveRelationshipFilterConditions
            | ExcessiveTriggers
            | ExcessiveTriggerConditions
            | ExcessiveTriggerActions => Category::Limits,
            MissingObjectSchemaKey
            | MissingFieldSchemaKey
            | MissingTriggerSchemaKey
            | InvalidTriggerConditionsStructure
            | EmptyTriggerConditions
            | InvalidTriggerActionsStructure
            | EmptyTriggerActions => Category::Schema,
            ObjectSettingPlaceholderNotAllowed
            | FieldSettingPlaceholderNotAllowed
            | TriggerSettingPlaceholderNotAllowed => Category::Placeholder,
            InvalidObjectReferenceInFields | InvalidObjectReferenceInTriggers => {
                Category::Reference
            }
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single problem found in a requirements document.
///
/// Carries no message text: turning `kind` + `context` into user-facing
/// wording is left to the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub kind: ErrorKind,
    #[serde(default)]
    pub context: Context,
}

impl ValidationError {
    pub fn new(kind: ErrorKind) -> Self {
        ValidationError {
            kind,
            context: Context::new(),
        }
    }

    /// Append a named context value, builder style.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.context.insert(key.to_string(), value.into());
        self
    }

    /// Look up a context value by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.context.get(key)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if self.context.is_empty() {
            return Ok(());
        }
        f.write_str(" {")?;
        for (i, (key, value)) in self.context.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match value {
                Value::String(s) => write!(f, "{}: {}", key, s)?,
                other => write!(f, "{}: {}", key, other)?,
            }
        }
        f.write_str("}")
    }
}

impl std::error::Error for ValidationError {}

/// Error kind for parse failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    Syntax,
}

/// Produced by `parse` when the input text is not YAML or JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(line), Some(col)) = (self.line, self.column) {
            write!(f, "{}:{}: {}", line, col, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ParseError {}

/// Serialization error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerializeError {
    pub message: String,
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SerializeError {}

/// Combined error type for the `load` entry point.
#[derive(Clone, Debug)]
pub enum RequirementsError {
    Parse(ParseError),
    Validation(ValidationError),
}

impl fmt::Display for RequirementsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequirementsError::Parse(e) => write!(f, "Parse error: {}", e),
            RequirementsError::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for RequirementsError {}
