#![cfg(feature = "serde")]

//! Integration tests for serde support in eqset.
//!
//! Sets serialize as sequences. Deserializing collapses duplicates, so any
//! sequence is accepted.

use eqset::persistent::EqSet;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
struct Reading {
    sensor: String,
    value: f64,
}

// =============================================================================
// EqSet Integration Tests
// =============================================================================

#[rstest]
fn test_eq_set_json_roundtrip() {
    let set: EqSet<i32> = (1..=10).collect();
    let json = serde_json::to_string(&set).unwrap();
    let restored: EqSet<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(set, restored);
}

#[rstest]
fn test_eq_set_serializes_as_sequence() {
    let set = EqSet::singleton("only");
    assert_eq!(serde_json::to_string(&set).unwrap(), r#"["only"]"#);

    let empty: EqSet<i32> = EqSet::new();
    assert_eq!(serde_json::to_string(&empty).unwrap(), "[]");
}

#[rstest]
#[case("[1, 2, 2, 3, 1]", &[1, 2, 3])]
#[case("[]", &[])]
#[case("[7, 7, 7]", &[7])]
fn test_eq_set_deserialize_collapses_duplicates(#[case] json: &str, #[case] expected: &[i32]) {
    let restored: EqSet<i32> = serde_json::from_str(json).unwrap();
    let expected: EqSet<i32> = expected.iter().copied().collect();

    assert_eq!(restored, expected);
    assert_eq!(restored.len(), expected.len());
}

#[rstest]
fn test_eq_set_of_structs_roundtrip() {
    let set = EqSet::from([
        Reading {
            sensor: "north".to_string(),
            value: 1.5,
        },
        Reading {
            sensor: "south".to_string(),
            value: -0.25,
        },
    ]);

    let json = serde_json::to_string(&set).unwrap();
    let restored: EqSet<Reading> = serde_json::from_str(&json).unwrap();
    assert_eq!(set, restored);
}

#[rstest]
fn test_eq_set_nested_roundtrip() {
    let nested = EqSet::from([EqSet::from([1, 2]), EqSet::from([3]), EqSet::new()]);

    let json = serde_json::to_string(&nested).unwrap();
    let restored: EqSet<EqSet<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(nested, restored);
}

#[rstest]
fn test_eq_set_rejects_non_sequence() {
    let result: Result<EqSet<i32>, _> = serde_json::from_str(r#"{"a": 1}"#);
    assert!(result.is_err());
}

// =============================================================================
// Harness Reports
// =============================================================================

#[cfg(feature = "harness")]
#[rstest]
fn test_suite_report_json_roundtrip() {
    use eqset::harness::HarnessConfig;
    use eqset::harness::laws::{SuiteReport, standard_suite};

    let report = standard_suite(&HarnessConfig::default().with_cases(8));
    let json = serde_json::to_string(&report).unwrap();
    let restored: SuiteReport = serde_json::from_str(&json).unwrap();

    assert_eq!(report, restored);
}
