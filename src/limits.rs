//! Cardinality ceilings for objects, fields and triggers.
//!
//! Every ceiling is checked independently and all violations are returned.
//! Fields and triggers without a usable `object_key` are skipped here; the
//! schema stage reports them.

use crate::config::{Limits, SELECTION_FIELD_TYPES};
use crate::error::{ErrorKind, ValidationError};
use crate::helpers::*;
use indexmap::IndexMap;
use serde_json::Value;

pub fn validate(doc: &Value, limits: &Limits) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let objects = collection(doc, OBJECTS);
    let fields = owned_entities(doc, OBJECT_FIELDS);
    let triggers = owned_entities(doc, OBJECT_TRIGGERS);

    object_count(&objects, limits, &mut errors);
    fields_per_object(&fields, limits, &mut errors);
    selection_fields_per_object(&fields, limits, &mut errors);
    options_per_selection_field(&fields, limits, &mut errors);
    relationship_filter_conditions(&fields, limits, &mut errors);
    triggers_per_object(&triggers, limits, &mut errors);
    conditions_per_trigger(&triggers, limits, &mut errors);
    actions_per_trigger(&triggers, limits, &mut errors);

    errors
}

/// An entity paired with its non-blank owning object key.
struct Owned<'a> {
    object_key: &'a Value,
    entity: &'a Entity,
}

impl Owned<'_> {
    fn display_object_key(&self) -> String {
        safe_value(Some(self.object_key))
    }
}

fn owned_entities<'a>(doc: &'a Value, name: &str) -> Vec<Owned<'a>> {
    collection(doc, name)
        .into_iter()
        .filter_map(|entity| {
            owning_object_key(entity).map(|object_key| Owned { object_key, entity })
        })
        .collect()
}

/// Count entities per owning object, in order of first appearance. Keys are
/// grouped by their JSON encoding, so `123` and `"123"` stay apart; each
/// group is labelled with the display form of its key.
fn group_counts<'a, 'b>(entities: impl Iterator<Item = &'b Owned<'a>>) -> Vec<(String, usize)>
where
    'a: 'b,
{
    let mut groups: IndexMap<String, (String, usize)> = IndexMap::new();
    for owned in entities {
        groups
            .entry(owned.object_key.to_string())
            .or_insert_with(|| (owned.display_object_key(), 0))
            .1 += 1;
    }
    groups.into_values().collect()
}

fn field_type(entity: &Entity) -> Option<&str> {
    entity.get("type").and_then(Value::as_str)
}

// ─── Objects ────────────────────────────────────────────────────────────────

fn object_count(objects: &[&Entity], limits: &Limits, errors: &mut Vec<ValidationError>) {
    if objects.len() > limits.max_objects {
        errors.push(
            ValidationError::new(ErrorKind::ExcessiveObjects)
                .with("max", limits.max_objects)
                .with("count", objects.len()),
        );
    }
}

// ─── Fields ─────────────────────────────────────────────────────────────────

fn fields_per_object(fields: &[Owned<'_>], limits: &Limits, errors: &mut Vec<ValidationError>) {
    for (object_key, count) in group_counts(fields.iter()) {
        if count > limits.max_fields_per_object {
            errors.push(
                ValidationError::new(ErrorKind::ExcessiveFields)
                    .with("max", limits.max_fields_per_object)
                    .with("count", count)
                    .with("object_key", object_key),
            );
        }
    }
}

fn selection_fields_per_object(
    fields: &[Owned<'_>],
    limits: &Limits,
    errors: &mut Vec<ValidationError>,
) {
    for selection_type in SELECTION_FIELD_TYPES {
        let matching = fields
            .iter()
            .filter(|owned| field_type(owned.entity) == Some(*selection_type));
        for (object_key, count) in group_counts(matching) {
            if count > limits.max_selection_fields_per_object {
                errors.push(
                    ValidationError::new(ErrorKind::ExcessiveSelectionFields)
                        .with("max", limits.max_selection_fields_per_object)
                        .with("count", count)
                        .with("object_key", object_key)
                        .with("field_type", *selection_type),
                );
            }
        }
    }
}

fn options_per_selection_field(
    fields: &[Owned<'_>],
    limits: &Limits,
    errors: &mut Vec<ValidationError>,
) {
    for owned in fields {
        let is_selection =
            field_type(owned.entity).is_some_and(|t| SELECTION_FIELD_TYPES.contains(&t));
        if !is_selection {
            continue;
        }
        let Some(options) = owned
            .entity
            .get("custom_field_options")
            .and_then(Value::as_array)
        else {
            continue;
        };
        if options.len() > limits.max_options_per_selection_field {
            errors.push(
                ValidationError::new(ErrorKind::ExcessiveFieldOptions)
                    .with("max", limits.max_options_per_selection_field)
                    .with("count", options.len())
                    .with("field_key", safe_value(owned.entity.get("key")))
                    .with("object_key", owned.display_object_key()),
            );
        }
    }
}

fn relationship_filter_conditions(
    fields: &[Owned<'_>],
    limits: &Limits,
    errors: &mut Vec<ValidationError>,
) {
    for owned in fields {
        let Some(filter) = owned.entity.get("relationship_filter") else {
            continue;
        };
        let count = count_conditions(Some(filter));
        if count > limits.max_conditions_in_relationship_filter {
            errors.push(
                ValidationError::new(ErrorKind::ExcessiveRelationshipFilterConditions)
                    .with("max", limits.max_conditions_in_relationship_filter)
                    .with("count", count)
                    .with("field_key", safe_value(owned.entity.get("key")))
                    .with("object_key", owned.display_object_key()),
            );
        }
    }
}

// ─── Triggers ───────────────────────────────────────────────────────────────

fn triggers_per_object(triggers: &[Owned<'_>], limits: &Limits, errors: &mut Vec<ValidationError>) {
    for (object_key, count) in group_counts(triggers.iter()) {
        if count > limits.max_triggers_per_object {
            errors.push(
                ValidationError::new(ErrorKind::ExcessiveTriggers)
                    .with("max", limits.max_triggers_per_object)
                    .with("count", count)
                    .with("object_key", object_key),
            );
        }
    }
}

fn conditions_per_trigger(
    triggers: &[Owned<'_>],
    limits: &Limits,
    errors: &mut Vec<ValidationError>,
) {
    for owned in triggers {
        let count = count_conditions(owned.entity.get("conditions"));
        if count > limits.max_conditions_per_trigger {
            errors.push(
                ValidationError::new(ErrorKind::ExcessiveTriggerConditions)
                    .with("max", limits.max_conditions_per_trigger)
                    .with("count", count)
                    .with("trigger_key", safe_value(owned.entity.get("key"))),
            );
        }
    }
}

fn actions_per_trigger(triggers: &[Owned<'_>], limits: &Limits, errors: &mut Vec<ValidationError>) {
    for owned in triggers {
        let count = owned
            .entity
            .get("actions")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);
        if count > limits.max_actions_per_trigger {
            errors.push(
                ValidationError::new(ErrorKind::ExcessiveTriggerActions)
                    .with("max", limits.max_actions_per_trigger)
                    .with("count", count)
                    .with("trigger_key", safe_value(owned.entity.get("key"))),
            );
        }
    }
}
