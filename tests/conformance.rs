use appreq::parse::parse;
use appreq::validate::validate;
use std::path::PathBuf;

fn suite_path() -> PathBuf {
    std::env::var("APPREQ_CONFORMANCE_SUITE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/conformance/suite.yaml")
        })
}

/// A single validation test case from the suite.
#[derive(Debug, serde::Deserialize)]
struct TestCase {
    name: String,
    id: String,
    input: String,
    expected: Expected,
}

#[derive(Debug, serde::Deserialize)]
struct Expected {
    #[serde(default)]
    valid: Option<bool>,
    #[serde(default)]
    errors: Option<Vec<ExpectedError>>,
}

#[derive(Debug, serde::Deserialize)]
struct ExpectedError {
    kind: String,
    #[serde(default)]
    context: Option<serde_json::Map<String, serde_json::Value>>,
}

#[test]
fn validate_conformance_suite() {
    let path = suite_path();
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read conformance suite {:?}: {}", path, e));
    let cases: Vec<TestCase> = serde_saphyr::from_str(&content).unwrap();
    assert!(!cases.is_empty(), "conformance suite is empty");

    let mut failed = 0;

    for case in &cases {
        let doc = match parse(&case.input) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("  FAIL [{}] {}: parse error: {}", case.id, case.name, e);
                failed += 1;
                continue;
            }
        };

        let errors = validate(&doc);
        let mut case_ok = true;

        if let Some(true) = case.expected.valid {
            if !errors.is_empty() {
                eprintln!(
                    "  FAIL [{}] {}: expected valid but got {} errors",
                    case.id,
                    case.name,
                    errors.len()
                );
                for err in &errors {
                    eprintln!("    - {}", err);
                }
                case_ok = false;
            }
        } else if let Some(expected) = &case.expected.errors {
            let actual: Vec<&str> = errors.iter().map(|e| e.kind.as_str()).collect();
            let wanted: Vec<&str> = expected.iter().map(|e| e.kind.as_str()).collect();
            if actual != wanted {
                eprintln!(
                    "  FAIL [{}] {}: expected kinds {:?}, got {:?}",
                    case.id, case.name, wanted, actual
                );
                case_ok = false;
            } else {
                for (exp, err) in expected.iter().zip(&errors) {
                    if let Some(context) = &exp.context
                        && *context != err.context
                    {
                        eprintln!(
                            "  FAIL [{}] {}: context mismatch for {}: expected {:?}, got {:?}",
                            case.id, case.name, exp.kind, context, err.context
                        );
                        case_ok = false;
                    }
                }
            }
        } else {
            eprintln!("  FAIL [{}] {}: case has no expectation", case.id, case.name);
            case_ok = false;
        }

        if !case_ok {
            failed += 1;
        }
    }

    eprintln!(
        "conformance: {} passed, {} failed",
        cases.len() - failed,
        failed
    );
    assert_eq!(failed, 0, "{} conformance case(s) failed", failed);
}
