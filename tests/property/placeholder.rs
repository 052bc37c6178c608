use appreq::helpers::contains_setting_placeholder;
use proptest::prelude::*;

/// Strategy for dotted or hyphenated setting names.
fn arb_setting_name() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9_-]{1,8}", 1..4)
}

fn arb_space() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Whitespace around braces and dots never hides a placeholder.
    #[test]
    fn detects_spaced_placeholders(
        segments in arb_setting_name(),
        pad in arb_space(),
        prefix in "[a-z ]{0,10}",
        suffix in "[a-z ]{0,10}",
    ) {
        let dotted = segments.join(&format!("{pad}.{pad}"));
        let text = format!("{prefix}{{{{{pad}setting{pad}.{pad}{dotted}{pad}}}}}{suffix}");
        prop_assert!(contains_setting_placeholder(&text), "missed: {:?}", text);
    }

    // Text without the opening braces can never match.
    #[test]
    fn brace_free_text_is_clean(text in "[a-zA-Z0-9 ._-]{0,40}") {
        prop_assert!(!contains_setting_placeholder(&text));
    }
}
