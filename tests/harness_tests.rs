#![cfg(feature = "harness")]
//! Integration tests for the randomized property harness.
//!
//! These tests drive the harness the way a caller would: with the stock law
//! suite, with custom element sources, and with a property that is known to
//! be false so that the reported counterexample can be inspected.

use eqset::harness::laws::{STANDARD_LAWS, standard_suite};
use eqset::harness::{GeneratedCase, HarnessConfig, SetGenerator, check, ensure};
use eqset::persistent::EqSet;
use rand::Rng;
use rand::rngs::SmallRng;
use rstest::rstest;

/// A weakly typed element: two-dimensional points compared by value.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: f64,
    y: f64,
}

fn random_point(rng: &mut SmallRng) -> Point {
    Point {
        x: f64::from(rng.gen_range(-50..50_i32)) / 4.0,
        y: f64::from(rng.gen_range(-50..50_i32)) / 4.0,
    }
}

// =============================================================================
// Standard Suite
// =============================================================================

#[rstest]
fn test_standard_suite_with_defaults() {
    let report = standard_suite(&HarnessConfig::default());

    assert!(report.is_success(), "{:?}", report.first_failure());
    assert_eq!(report.reports.len(), STANDARD_LAWS.len());
    assert!(
        report
            .reports
            .iter()
            .all(|law| law.cases_run == HarnessConfig::DEFAULT_CASES)
    );
}

#[rstest]
#[case(HarnessConfig::default().with_seed(0).with_cases(40))]
#[case(HarnessConfig::default().with_seed(u64::MAX).with_cases(40))]
#[case(HarnessConfig::default().with_max_growth(1).with_cases(80))]
#[case(HarnessConfig::default().with_max_growth(16).with_cases(20))]
fn test_standard_suite_across_configurations(#[case] config: HarnessConfig) {
    let report = standard_suite(&config);

    assert!(report.is_success(), "{:?}", report.first_failure());
    assert_eq!(report.config, config);
}

#[rstest]
fn test_law_names_are_unique() {
    let names: EqSet<&str> = STANDARD_LAWS.iter().map(|(name, _)| *name).collect();
    assert_eq!(names.len(), STANDARD_LAWS.len());
}

// =============================================================================
// Custom Sources
// =============================================================================

#[rstest]
fn test_point_sets_have_no_duplicates() {
    let config = HarnessConfig::default().with_cases(30);
    let report = check(
        "points collapse",
        &config,
        SetGenerator::new(&config, random_point),
        |case: &GeneratedCase<Point>| {
            ensure(case.set.len() == case.distinct.len(), || {
                format!("{} distinct points, set of {}", case.distinct.len(), case.set.len())
            })?;
            case.sequence.iter().try_for_each(|point| {
                ensure(case.set.contains(point), || format!("{point:?} missing"))
            })
        },
    );

    assert!(report.is_success(), "{:?}", report.failure);
    assert_eq!(report.cases_run, 30);
}

#[rstest]
fn test_string_source_with_small_domain_exhausts() {
    let config = HarnessConfig::default().with_cases(100);
    let words = ["alpha", "beta", "gamma", "delta"];
    let generator = SetGenerator::new(&config, |rng: &mut SmallRng| {
        words[rng.gen_range(0..words.len())].to_string()
    });

    let report = check("always", &config, generator, |_| Ok(()));

    assert!(report.is_success());
    assert!(report.cases_run < 100);
    assert!(report.cases_run >= 3);
}

// =============================================================================
// Counterexamples
// =============================================================================

#[rstest]
fn test_false_property_is_reported_with_reproducible_context() {
    let config = HarnessConfig::default().with_seed(11);
    let bounded = |case: &GeneratedCase<i32>| {
        ensure(case.set.len() < 5, || format!("size {}", case.set.len()))
    };

    let first = check("smaller than five", &config, SetGenerator::integers(&config), bounded);
    let second = check("smaller than five", &config, SetGenerator::integers(&config), bounded);

    let failure = first.failure.clone().expect("sets of five elements are generated");
    assert_eq!(first, second);
    assert_eq!(failure.seed, 11);
    assert!(failure.set_size >= 5);
    assert!(failure.to_string().contains("smaller than five"));
    assert!(failure.to_string().contains("seed 11"));
}

#[rstest]
fn test_empty_set_is_the_first_case() {
    let config = HarnessConfig::default();
    let report = check(
        "non empty",
        &config,
        SetGenerator::integers(&config),
        |case| ensure(case.set.non_empty(), || "empty".to_string()),
    );

    let failure = report.failure.expect("the first case is empty");
    assert_eq!(failure.case_index, 0);
    assert_eq!(failure.set_size, 0);
    assert_eq!(report.cases_run, 1);
}

#[rstest]
fn test_zero_cases_checks_nothing() {
    let config = HarnessConfig::default().with_cases(0);
    let report = check(
        "never evaluated",
        &config,
        SetGenerator::integers(&config),
        |_| Err("evaluated".to_string()),
    );

    assert!(report.is_success());
    assert_eq!(report.cases_run, 0);
}
