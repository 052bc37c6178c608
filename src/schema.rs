//! Schema completeness, trigger condition/action structure, and the setting
//! placeholder scan.
//!
//! [`validate`] covers required keys and trigger structure. The placeholder
//! scan is exposed separately as [`scan_placeholders`] because it only means
//! something once every entity carries its identifying keys.

use crate::config::{FIELD_REQUIRED_KEYS, OBJECT_REQUIRED_KEYS, TRIGGER_REQUIRED_KEYS};
use crate::error::{ErrorKind, ValidationError};
use crate::helpers::*;
use serde_json::Value;

/// Which collection an entity came from. Drives error kinds and the name of
/// the entity's own key in error contexts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EntityKind {
    Object,
    Field,
    Trigger,
}

impl EntityKind {
    const ALL: [EntityKind; 3] = [EntityKind::Object, EntityKind::Field, EntityKind::Trigger];

    fn collection(self) -> &'static str {
        match self {
            EntityKind::Object => OBJECTS,
            EntityKind::Field => OBJECT_FIELDS,
            EntityKind::Trigger => OBJECT_TRIGGERS,
        }
    }

    fn required_keys(self) -> &'static [&'static str] {
        match self {
            EntityKind::Object => OBJECT_REQUIRED_KEYS,
            EntityKind::Field => FIELD_REQUIRED_KEYS,
            EntityKind::Trigger => TRIGGER_REQUIRED_KEYS,
        }
    }

    fn missing_key_kind(self) -> ErrorKind {
        match self {
            EntityKind::Object => ErrorKind::MissingObjectSchemaKey,
            EntityKind::Field => ErrorKind::MissingFieldSchemaKey,
            EntityKind::Trigger => ErrorKind::MissingTriggerSchemaKey,
        }
    }

    fn placeholder_kind(self) -> ErrorKind {
        match self {
            EntityKind::Object => ErrorKind::ObjectSettingPlaceholderNotAllowed,
            EntityKind::Field => ErrorKind::FieldSettingPlaceholderNotAllowed,
            EntityKind::Trigger => ErrorKind::TriggerSettingPlaceholderNotAllowed,
        }
    }

    fn identity_label(self) -> &'static str {
        match self {
            EntityKind::Object => "object_key",
            EntityKind::Field => "field_key",
            EntityKind::Trigger => "trigger_key",
        }
    }

    /// Append the entity's identity: its own key and, for fields and
    /// triggers, the owning object key.
    fn identify(self, err: ValidationError, entity: &Entity) -> ValidationError {
        let err = err.with(self.identity_label(), safe_value(entity.get("key")));
        match self {
            EntityKind::Object => err,
            EntityKind::Field | EntityKind::Trigger => {
                err.with("object_key", safe_value(entity.get("object_key")))
            }
        }
    }

    fn error(self, kind: ErrorKind, entity: &Entity) -> ValidationError {
        self.identify(ValidationError::new(kind), entity)
    }
}

/// Required-key completeness for every entity, followed by the structure of
/// each trigger's `conditions` and `actions`.
pub fn validate(doc: &Value) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for kind in EntityKind::ALL {
        for entity in collection(doc, kind.collection()) {
            missing_keys(kind, entity, &mut errors);
        }
    }
    for trigger in collection(doc, OBJECT_TRIGGERS) {
        trigger_conditions(trigger, &mut errors);
        trigger_actions(trigger, &mut errors);
    }
    errors
}

// ─── Required keys ──────────────────────────────────────────────────────────

fn missing_keys(kind: EntityKind, entity: &Entity, errors: &mut Vec<ValidationError>) {
    for key in kind.required_keys() {
        if is_blank(entity.get(*key)) {
            let err = ValidationError::new(kind.missing_key_kind()).with("missing_key", *key);
            errors.push(kind.identify(err, entity));
        }
    }
}

// ─── Trigger structure ──────────────────────────────────────────────────────

/// A condition group is a map with `all` and/or `any`, every present member
/// an array.
fn is_condition_group(value: &Value) -> bool {
    let Some(group) = value.as_object() else {
        return false;
    };
    let members: Vec<&Value> = ["all", "any"]
        .iter()
        .filter_map(|name| group.get(*name))
        .collect();
    !members.is_empty() && members.iter().all(|member| member.is_array())
}

fn trigger_conditions(trigger: &Entity, errors: &mut Vec<ValidationError>) {
    let conditions = match trigger.get("conditions") {
        None | Some(Value::Null) => return,
        Some(conditions) => conditions,
    };
    if !is_condition_group(conditions) {
        errors.push(EntityKind::Trigger.error(ErrorKind::InvalidTriggerConditionsStructure, trigger));
    } else if count_conditions(Some(conditions)) == 0 {
        errors.push(EntityKind::Trigger.error(ErrorKind::EmptyTriggerConditions, trigger));
    }
}

fn trigger_actions(trigger: &Entity, errors: &mut Vec<ValidationError>) {
    match trigger.get("actions") {
        None | Some(Value::Null) => {}
        Some(Value::Array(actions)) if actions.is_empty() => {
            errors.push(EntityKind::Trigger.error(ErrorKind::EmptyTriggerActions, trigger));
        }
        Some(Value::Array(_)) => {}
        Some(_) => {
            errors.push(EntityKind::Trigger.error(ErrorKind::InvalidTriggerActionsStructure, trigger));
        }
    }
}

// ─── Setting placeholders ───────────────────────────────────────────────────

/// Report every top-level string property that contains a
/// `{{ setting.name }}` token. Requirements are provisioned before settings
/// are resolved, so they cannot reference settings.
pub fn scan_placeholders(doc: &Value) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for kind in EntityKind::ALL {
        for entity in collection(doc, kind.collection()) {
            for (property, value) in entity {
                let Some(text) = value.as_str() else {
                    continue;
                };
                if contains_setting_placeholder(text) {
                    errors.push(
                        kind.error(kind.placeholder_kind(), entity)
                            .with("property_name", property.as_str())
                            .with("property_value", text),
                    );
                }
            }
        }
    }
    errors
}
