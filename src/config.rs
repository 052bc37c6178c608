//! Resource ceilings and required-key tables.
//!
//! [`Limits::default`] reproduces the platform ceilings exactly. Alternate
//! limits can be built in code or read from a partial YAML/JSON override.

use serde::{Deserialize, Serialize};

pub const MAX_OBJECTS: usize = 50;
pub const MAX_FIELDS_PER_OBJECT: usize = 10;
pub const MAX_TRIGGERS_PER_OBJECT: usize = 20;
pub const MAX_CONDITIONS_PER_TRIGGER: usize = 50;
pub const MAX_ACTIONS_PER_TRIGGER: usize = 25;
pub const MAX_CONDITIONS_IN_RELATIONSHIP_FILTER: usize = 20;
/// Applies to dropdown and multiselect fields separately.
pub const MAX_SELECTION_FIELDS_PER_OBJECT: usize = 5;
pub const MAX_OPTIONS_PER_SELECTION_FIELD: usize = 10;
pub const MAX_PAYLOAD_SIZE_BYTES: usize = 1_048_576;

pub const OBJECT_REQUIRED_KEYS: &[&str] =
    &["key", "title", "title_pluralized", "include_in_list_view"];
pub const FIELD_REQUIRED_KEYS: &[&str] = &["key", "title", "type", "object_key"];
pub const TRIGGER_REQUIRED_KEYS: &[&str] = &["key", "object_key", "title", "actions", "conditions"];

/// Field types subject to the selection-field and option ceilings.
pub const SELECTION_FIELD_TYPES: &[&str] = &["dropdown", "multiselect"];

/// Ceilings enforced by the validator. A value equal to its limit passes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    pub max_objects: usize,
    pub max_fields_per_object: usize,
    pub max_triggers_per_object: usize,
    pub max_conditions_per_trigger: usize,
    pub max_actions_per_trigger: usize,
    pub max_conditions_in_relationship_filter: usize,
    pub max_selection_fields_per_object: usize,
    pub max_options_per_selection_field: usize,
    pub max_payload_size_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_objects: MAX_OBJECTS,
            max_fields_per_object: MAX_FIELDS_PER_OBJECT,
            max_triggers_per_object: MAX_TRIGGERS_PER_OBJECT,
            max_conditions_per_trigger: MAX_CONDITIONS_PER_TRIGGER,
            max_actions_per_trigger: MAX_ACTIONS_PER_TRIGGER,
            max_conditions_in_relationship_filter: MAX_CONDITIONS_IN_RELATIONSHIP_FILTER,
            max_selection_fields_per_object: MAX_SELECTION_FIELDS_PER_OBJECT,
            max_options_per_selection_field: MAX_OPTIONS_PER_SELECTION_FIELD,
            max_payload_size_bytes: MAX_PAYLOAD_SIZE_BYTES,
        }
    }
}

impl Limits {
    /// Read a limits override from YAML (or JSON). Keys left out keep their
    /// default value; unknown keys are rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`](crate::error::ParseError) if the text does not
    /// deserialize into `Limits`.
    pub fn from_yaml(input: &str) -> Result<Limits, crate::error::ParseError> {
        if input.trim().is_empty() {
            return Ok(Limits::default());
        }
        serde_saphyr::from_str(input).map_err(|e| crate::parse::syntax_error(e.to_string()))
    }
}
