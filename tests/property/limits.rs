use appreq::config::*;
use appreq::error::ErrorKind;
use appreq::validate::{Validator, validate};
use proptest::prelude::*;
use serde_json::{Value, json};

fn object(i: usize) -> Value {
    json!({
        "key": format!("o{}", i),
        "title": "Object",
        "title_pluralized": "Objects",
        "include_in_list_view": true
    })
}

fn trigger_with(all: usize, any: usize, actions: usize) -> Value {
    json!({
        "key": "t",
        "object_key": "o0",
        "title": "T",
        "conditions": {
            "all": vec![json!({ "field": "a" }); all],
            "any": vec![json!({ "field": "b" }); any]
        },
        "actions": vec![json!({ "action": "notify" }); actions]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // excessive_objects appears exactly when the count passes the ceiling.
    #[test]
    fn object_ceiling_is_inclusive(n in 1usize..80) {
        let objects: Vec<Value> = (0..n).map(object).collect();
        let errors = validate(&json!({ "objects": objects }));
        if n > MAX_OBJECTS {
            prop_assert_eq!(errors.len(), 1);
            prop_assert_eq!(errors[0].kind, ErrorKind::ExcessiveObjects);
            prop_assert_eq!(errors[0].get("count"), Some(&json!(n)));
        } else {
            prop_assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
        }
    }

    // Condition count is the sum of both groups, checked against the ceiling.
    #[test]
    fn trigger_condition_count_is_summed(all in 0usize..40, any in 0usize..40) {
        prop_assume!(all + any > 0);
        let doc = json!({ "objects": [object(0)], "object_triggers": [trigger_with(all, any, 1)] });
        let errors = validate(&doc);
        let reported = errors
            .iter()
            .find(|e| e.kind == ErrorKind::ExcessiveTriggerConditions);
        if all + any > MAX_CONDITIONS_PER_TRIGGER {
            let err = reported.expect("condition ceiling should be reported");
            prop_assert_eq!(err.get("count"), Some(&json!(all + any)));
        } else {
            prop_assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
        }
    }

    // Custom limits are honored instead of the platform defaults.
    #[test]
    fn custom_action_ceiling(max in 1usize..10, actions in 1usize..20) {
        let limits = Limits { max_actions_per_trigger: max, ..Limits::default() };
        let doc = json!({ "objects": [object(0)], "object_triggers": [trigger_with(1, 0, actions)] });
        let errors = Validator::new(limits).validate(&doc);
        prop_assert_eq!(
            errors.iter().any(|e| e.kind == ErrorKind::ExcessiveTriggerActions),
            actions > max
        );
    }
}
