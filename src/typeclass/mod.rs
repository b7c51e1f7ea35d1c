//! Type class traits for functional programming abstractions.
//!
//! This module provides the type classes that [`EqSet`](crate::persistent::EqSet)
//! participates in:
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Foldable`]: Folding over structures to produce summary values
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! For sets, the semigroup operation is union and the identity element is the
//! empty set.
//!
//! # Examples
//!
//! ```rust
//! use eqset::persistent::EqSet;
//! use eqset::typeclass::{Foldable, Monoid, Semigroup};
//!
//! let left: EqSet<i32> = [1, 2].into_iter().collect();
//! let right: EqSet<i32> = [2, 3].into_iter().collect();
//!
//! let union = left.combine(right);
//! assert_eq!(union.len(), 3);
//!
//! let total = union.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(total, 6);
//!
//! assert!(EqSet::<i32>::empty().is_empty());
//! ```

mod foldable;
mod higher;
mod monoid;
mod semigroup;

pub use foldable::Foldable;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
