//! Running properties over generated sets.

use std::fmt;

use rand::rngs::SmallRng;

use super::{GeneratedCase, HarnessConfig, SetGenerator};

/// The first counterexample found for a property.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyFailure {
    /// Name of the property that failed.
    pub property: String,
    /// Seed of the run; rerunning with it reproduces the failure.
    pub seed: u64,
    /// Index of the failing case in the generated sequence.
    pub case_index: usize,
    /// Number of elements of the failing set.
    pub set_size: usize,
    /// Debug rendering of the failing set.
    pub rendered_set: String,
    /// What the property reported.
    pub message: String,
}

impl fmt::Display for PropertyFailure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "property `{}` failed on case {} (seed {}, size {}): {}; set = {}",
            self.property,
            self.case_index,
            self.seed,
            self.set_size,
            self.message,
            self.rendered_set
        )
    }
}

impl std::error::Error for PropertyFailure {}

/// Outcome of checking one property.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyReport {
    /// Name of the property.
    pub property: String,
    /// Number of cases the property was evaluated on, including a failing one.
    pub cases_run: usize,
    /// The counterexample, if one was found.
    pub failure: Option<PropertyFailure>,
}

impl PropertyReport {
    /// Returns `true` if no counterexample was found.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Checks `property` against up to `config.cases` sets from `generator`.
///
/// Stops at the first case for which `property` returns `Err`, recording the
/// error message together with enough context to reproduce it.
pub fn check<T, F, P>(
    name: &str,
    config: &HarnessConfig,
    generator: SetGenerator<T, F>,
    mut property: P,
) -> PropertyReport
where
    T: Clone + PartialEq + fmt::Debug,
    F: FnMut(&mut SmallRng) -> T,
    P: FnMut(&GeneratedCase<T>) -> Result<(), String>,
{
    let mut cases_run = 0;
    for case in generator.take(config.cases) {
        cases_run += 1;
        if let Err(message) = property(&case) {
            return PropertyReport {
                property: name.to_string(),
                cases_run,
                failure: Some(counterexample(name, config, &case, message)),
            };
        }
    }

    PropertyReport {
        property: name.to_string(),
        cases_run,
        failure: None,
    }
}

/// Describes the set a property failed on, as it was actually built.
fn counterexample<T: fmt::Debug>(
    name: &str,
    config: &HarnessConfig,
    case: &GeneratedCase<T>,
    message: String,
) -> PropertyFailure {
    PropertyFailure {
        property: name.to_string(),
        seed: config.seed,
        case_index: case.index,
        set_size: case.set.len(),
        rendered_set: format!("{:?}", case.set),
        message,
    }
}

/// Turns a boolean check into a property result.
///
/// `message` is only evaluated when `condition` is `false`.
///
/// # Errors
///
/// Returns `Err(message())` if `condition` is `false`.
pub fn ensure<M>(condition: bool, message: M) -> Result<(), String>
where
    M: FnOnce() -> String,
{
    if condition { Ok(()) } else { Err(message()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistent::EqSet;
    use rstest::rstest;

    #[rstest]
    fn test_check_runs_every_case_on_success() {
        let config = HarnessConfig::default().with_cases(12);
        let report = check("always", &config, SetGenerator::integers(&config), |_| Ok(()));

        assert!(report.is_success());
        assert_eq!(report.cases_run, 12);
    }

    #[rstest]
    fn test_check_stops_at_first_counterexample() {
        let config = HarnessConfig::default().with_cases(50);
        let report = check(
            "at most three elements",
            &config,
            SetGenerator::integers(&config),
            |case| ensure(case.set.len() <= 3, || format!("size {}", case.set.len())),
        );

        let failure = report.failure.expect("a set larger than three is generated");
        assert_eq!(report.cases_run, failure.case_index + 1);
        assert!(failure.set_size > 3);
        assert_eq!(failure.seed, config.seed);
        assert_eq!(failure.property, "at most three elements");
    }

    #[rstest]
    fn test_counterexample_reports_size_of_built_set() {
        let case = GeneratedCase {
            index: 3,
            distinct: vec![1, 2, 3],
            sequence: vec![1, 2, 3],
            set: EqSet::from([1, 2]),
        };
        let failure = counterexample("size law", &HarnessConfig::default(), &case, "short".to_string());

        assert_eq!(failure.set_size, 2);
        assert_eq!(failure.case_index, 3);
        assert_eq!(failure.seed, HarnessConfig::DEFAULT_SEED);
    }

    #[rstest]
    fn test_failure_display_names_property_and_seed() {
        let failure = PropertyFailure {
            property: "example".to_string(),
            seed: 9,
            case_index: 4,
            set_size: 1,
            rendered_set: "{5}".to_string(),
            message: "broken".to_string(),
        };

        assert_eq!(
            failure.to_string(),
            "property `example` failed on case 4 (seed 9, size 1): broken; set = {5}"
        );
    }

    #[rstest]
    #[case(true, Ok(()))]
    #[case(false, Err("nope".to_string()))]
    fn test_ensure(#[case] condition: bool, #[case] expected: Result<(), String>) {
        assert_eq!(ensure(condition, || "nope".to_string()), expected);
    }
}
