use appreq::error::{Category, ErrorKind};
use appreq::validate::validate;
use proptest::prelude::*;
use serde_json::{Map, Value, json};
use std::collections::HashSet;

/// Strategy for arbitrary JSON values, biased toward the keys the validator
/// looks at so that deep stages actually get exercised.
fn arb_value() -> impl Strategy<Value = Value> {
    let key = prop_oneof![
        Just("key".to_string()),
        Just("title".to_string()),
        Just("type".to_string()),
        Just("object_key".to_string()),
        Just("conditions".to_string()),
        Just("actions".to_string()),
        Just("all".to_string()),
        Just("any".to_string()),
        Just("custom_field_options".to_string()),
        Just("relationship_filter".to_string()),
        "[a-z_]{1,8}",
    ];
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z ]{0,10}".prop_map(Value::String),
        Just(json!("{{ setting.x }}")),
        Just(json!("dropdown")),
    ];
    leaf.prop_recursive(4, 48, 6, move |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((key.clone(), inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn arb_document() -> impl Strategy<Value = Value> {
    (
        prop::option::of(arb_value()),
        prop::option::of(arb_value()),
        prop::option::of(arb_value()),
    )
        .prop_map(|(objects, fields, triggers)| {
            let mut doc = Map::new();
            if let Some(v) = objects {
                doc.insert("objects".to_string(), v);
            }
            if let Some(v) = fields {
                doc.insert("object_fields".to_string(), v);
            }
            if let Some(v) = triggers {
                doc.insert("object_triggers".to_string(), v);
            }
            Value::Object(doc)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Same input, same ordered output.
    #[test]
    fn validation_is_deterministic(doc in arb_document()) {
        prop_assert_eq!(validate(&doc), validate(&doc));
    }

    // Any root that is not a map yields exactly one structure error.
    #[test]
    fn non_map_root_fails_fast(items in prop::collection::vec(arb_value(), 0..5)) {
        let errors = validate(&Value::Array(items));
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(errors[0].kind, ErrorKind::InvalidRequirementsStructure);
        prop_assert!(errors[0].context.is_empty());
    }

    // Output never mixes stages, except limits with schema.
    #[test]
    fn errors_come_from_a_single_stage(doc in arb_document()) {
        let errors = validate(&doc);
        let mut categories: HashSet<Category> = errors.iter().map(|e| e.kind.category()).collect();
        if categories.remove(&Category::Limits) {
            categories.remove(&Category::Schema);
        }
        prop_assert!(categories.len() <= 1, "mixed stages: {:?}", errors);
    }
}
