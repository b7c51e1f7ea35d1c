//! Randomized property harness for [`EqSet`](crate::persistent::EqSet).
//!
//! The harness generates sets of strictly increasing size from a seeded
//! random source and checks properties against each of them, stopping at the
//! first counterexample. Given the same [`HarnessConfig`], a run always sees
//! the same sets, so reproducing a failure only needs the seed it reports.
//!
//! - [`SetGenerator`]: seeded generator of [`GeneratedCase`]s
//! - [`check`]: runs one property over a generator
//! - [`laws::standard_suite`]: the stock set laws over `i32` sets
//!
//! # Examples
//!
//! ```rust
//! use eqset::harness::{HarnessConfig, SetGenerator, check, ensure};
//!
//! let config = HarnessConfig::default().with_cases(16);
//! let report = check("insert is idempotent", &config, SetGenerator::integers(&config), |case| {
//!     case.distinct.iter().try_for_each(|element| {
//!         ensure(case.set.insert(*element) == case.set, || format!("insert({element}) grew the set"))
//!     })
//! });
//!
//! assert!(report.is_success());
//! assert_eq!(report.cases_run, 16);
//! ```

mod config;
mod generator;
pub mod laws;
mod runner;

pub use config::HarnessConfig;
pub use generator::{GeneratedCase, SetGenerator};
pub use runner::{PropertyFailure, PropertyReport, check, ensure};
