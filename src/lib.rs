//! # eqset
//!
//! Persistent sets for element types that only support equality comparison.
//!
//! ## Overview
//!
//! The standard library's sets need either `Hash + Eq` or `Ord`. Some element
//! types have neither, such as floating point values or records holding them,
//! and sets of such values. This library provides
//! [`EqSet`](persistent::EqSet), a set that requires nothing but [`PartialEq`]
//! from its elements and pays for it with linear-time lookups.
//!
//! - **Persistent Set**: `EqSet`, an immutable set with structural sharing
//! - **Type Classes**: `Foldable`, `Semigroup`, `Monoid` instances for `EqSet`
//! - **Property Harness**: a seeded generator and law suite for set invariants
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Foldable, Semigroup, Monoid)
//! - `persistent`: The `EqSet` container
//! - `arc`: Share backing nodes through `Arc` instead of `Rc`
//! - `serde`: Serialize and deserialize `EqSet` as a sequence
//! - `harness`: Randomized property harness
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use eqset::prelude::*;
//!
//! let set: EqSet<f64> = [1.5, 2.5, 2.5].into_iter().collect();
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(&2.5));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use eqset::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "harness")]
pub mod harness;
