//! The stock suite of set laws.
//!
//! Every law is checked against `i32` sets from [`SetGenerator::integers`].
//! Laws that relate two sets pair the generated set with a companion derived
//! from it, which overlaps the generated set without being equal to it.

use super::{GeneratedCase, HarnessConfig, PropertyFailure, PropertyReport, SetGenerator, check, ensure};
use crate::persistent::EqSet;

/// A law over a generated case.
pub type Law = fn(&GeneratedCase<i32>) -> Result<(), String>;

/// The laws run by [`standard_suite`], with their names.
pub const STANDARD_LAWS: &[(&str, Law)] = &[
    ("no duplicates", no_duplicates),
    ("size law", size_law),
    ("emptiness law", emptiness_law),
    ("membership", membership),
    ("idempotent insert", idempotent_insert),
    ("remove then contains", remove_then_contains),
    ("union/intersection/difference algebra", set_algebra),
    ("subset/eq consistency", subset_eq_consistency),
    ("proper subset law", proper_subset_law),
    ("round trip", round_trip),
    ("order independence", order_independence),
];

/// Reports of every law in a suite run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuiteReport {
    /// The configuration the suite ran with.
    pub config: HarnessConfig,
    /// One report per law, in [`STANDARD_LAWS`] order.
    pub reports: Vec<PropertyReport>,
}

impl SuiteReport {
    /// Returns `true` if every law held on every case.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.reports.iter().all(PropertyReport::is_success)
    }

    /// Returns the failure of the first law that failed.
    #[must_use]
    pub fn first_failure(&self) -> Option<&PropertyFailure> {
        self.reports
            .iter()
            .find_map(|report| report.failure.as_ref())
    }
}

/// Runs every law in [`STANDARD_LAWS`].
///
/// # Examples
///
/// ```rust
/// use eqset::harness::HarnessConfig;
/// use eqset::harness::laws::standard_suite;
///
/// let report = standard_suite(&HarnessConfig::default().with_cases(20));
/// assert!(report.is_success(), "{:?}", report.first_failure());
/// ```
#[must_use]
pub fn standard_suite(config: &HarnessConfig) -> SuiteReport {
    let reports = STANDARD_LAWS
        .iter()
        .map(|(name, law)| check(name, config, SetGenerator::integers(config), *law))
        .collect();

    SuiteReport {
        config: *config,
        reports,
    }
}

fn duplicate_free(set: &EqSet<i32>) -> bool {
    let elements = set.to_vec();
    elements
        .iter()
        .enumerate()
        .all(|(index, element)| !elements[index + 1..].contains(element))
}

fn companion(set: &EqSet<i32>) -> EqSet<i32> {
    set.filter(|element| element % 2 == 0)
        .union(&set.map(|element| element.wrapping_add(1)))
}

fn no_duplicates(case: &GeneratedCase<i32>) -> Result<(), String> {
    let set = &case.set;
    let other = companion(set);
    let (even, odd) = set.partition(|element| element % 2 == 0);
    let some_member = case.distinct.first().copied().unwrap_or_default();

    let derived = [
        ("collect", set.clone()),
        ("insert", set.insert(0).insert(some_member)),
        ("remove", set.remove(&some_member)),
        ("union", set.union(&other)),
        ("intersection", set.intersection(&other)),
        ("difference", set.difference(&other)),
        ("symmetric difference", set.symmetric_difference(&other)),
        ("map", set.map(|element| element / 3)),
        ("filter map", set.filter_map(|element| (element % 3 != 0).then_some(element / 5))),
        ("replace", set.replace(&some_member, 0)),
        ("partition (matching)", even),
        ("partition (rest)", odd),
        ("flatten", EqSet::from([set.clone(), other.clone()]).flatten()),
    ];

    derived.iter().try_for_each(|(operation, result)| {
        ensure(duplicate_free(result), || {
            format!("{operation} produced a duplicate: {result:?}")
        })
    })
}

fn size_law(case: &GeneratedCase<i32>) -> Result<(), String> {
    ensure(case.set.len() == case.distinct.len(), || {
        format!(
            "collected {} distinct values into a set of size {}",
            case.distinct.len(),
            case.set.len()
        )
    })
}

fn emptiness_law(case: &GeneratedCase<i32>) -> Result<(), String> {
    ensure(case.set.is_empty() == case.sequence.is_empty(), || {
        format!(
            "is_empty() = {} for a sequence of length {}",
            case.set.is_empty(),
            case.sequence.len()
        )
    })?;
    ensure(case.set.non_empty() != case.set.is_empty(), || {
        "non_empty() agrees with is_empty()".to_string()
    })
}

fn membership(case: &GeneratedCase<i32>) -> Result<(), String> {
    case.sequence.iter().try_for_each(|element| {
        ensure(case.set.contains(element), || {
            format!("{element} was collected but is not a member")
        })
    })?;
    ensure(
        case.set.for_all(|element| case.distinct.contains(element)),
        || "the set holds an element that was never collected".to_string(),
    )
}

fn idempotent_insert(case: &GeneratedCase<i32>) -> Result<(), String> {
    case.distinct.iter().try_for_each(|element| {
        let inserted = case.set.insert(*element);
        ensure(inserted == case.set && inserted.len() == case.set.len(), || {
            format!("inserting present element {element} changed the set")
        })
    })
}

fn remove_then_contains(case: &GeneratedCase<i32>) -> Result<(), String> {
    case.distinct.iter().try_for_each(|element| {
        let removed = case.set.remove(element);
        ensure(!removed.contains(element), || {
            format!("{element} is still a member after removal")
        })?;
        ensure(removed.len() + 1 == case.set.len(), || {
            format!("removing {element} did not shrink the set by one")
        })
    })
}

fn set_algebra(case: &GeneratedCase<i32>) -> Result<(), String> {
    let left = &case.set;
    let right = companion(left);
    let intersection = left.intersection(&right);
    let union = left.union(&right);

    ensure(intersection.is_subset_of(left), || {
        "intersection is not a subset of the left set".to_string()
    })?;
    ensure(intersection.is_subset_of(&right), || {
        "intersection is not a subset of the right set".to_string()
    })?;
    ensure(left.is_subset_of(&union), || {
        "left set is not a subset of the union".to_string()
    })?;
    ensure(right.is_subset_of(&union), || {
        "right set is not a subset of the union".to_string()
    })?;
    ensure(left.difference(left).is_empty(), || {
        "difference with itself is not empty".to_string()
    })?;
    ensure(left.difference(&right).is_disjoint(&right), || {
        "difference shares elements with the subtracted set".to_string()
    })?;
    ensure(union.set_eq(&right.union(left)), || {
        "union is not commutative".to_string()
    })
}

fn subset_eq_consistency(case: &GeneratedCase<i32>) -> Result<(), String> {
    let left = &case.set;
    let right = companion(left);
    let intersection = left.intersection(&right);

    let pairs = [
        (left, &right),
        (&right, left),
        (left, left),
        (&intersection, left),
    ];
    pairs.iter().try_for_each(|(first, second)| {
        let mutual = first.is_subset_of(second) && second.is_subset_of(first);
        ensure(first.set_eq(second) == mutual, || {
            format!("set_eq disagrees with mutual subset for {first:?} and {second:?}")
        })
    })
}

fn proper_subset_law(case: &GeneratedCase<i32>) -> Result<(), String> {
    let left = &case.set;
    let right = companion(left);
    let intersection = left.intersection(&right);

    let pairs = [
        (left, &right),
        (&right, left),
        (left, left),
        (&intersection, left),
    ];
    pairs.iter().try_for_each(|(first, second)| {
        let proper = first.is_proper_subset_of(second);
        ensure(!proper || (first.is_subset_of(second) && !first.set_eq(second)), || {
            format!("{first:?} is a proper subset of {second:?} but not a strict subset")
        })
    })?;

    case.distinct.first().map_or(Ok(()), |element| {
        ensure(left.remove(element).is_proper_subset_of(left), || {
            format!("removing {element} did not yield a proper subset")
        })
    })
}

fn round_trip(case: &GeneratedCase<i32>) -> Result<(), String> {
    let collected: EqSet<i32> = case.set.to_vec().into_iter().collect();
    ensure(collected == case.set, || {
        "collecting to_vec() does not give back the set".to_string()
    })?;

    let drained: EqSet<i32> = case.set.clone().into_iter().collect();
    ensure(drained == case.set, || {
        "collecting into_iter() does not give back the set".to_string()
    })
}

fn order_independence(case: &GeneratedCase<i32>) -> Result<(), String> {
    let reversed: EqSet<i32> = case.sequence.iter().rev().copied().collect();
    ensure(reversed == case.set, || {
        "collecting the reversed sequence gives a different set".to_string()
    })?;

    let right = companion(&case.set);
    ensure(
        reversed.union(&right) == case.set.union(&right)
            && reversed.intersection(&right) == case.set.intersection(&right)
            && reversed.difference(&right) == case.set.difference(&right),
        || "set algebra depends on the order elements were collected in".to_string(),
    )
}
