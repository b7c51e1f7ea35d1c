//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! For all `a` of type `T`:
//!
//! ```text
//! T::empty().combine(a) == a    // left identity
//! a.combine(T::empty()) == a    // right identity
//! ```
//!
//! plus associativity, inherited from [`Semigroup`].

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use eqset::persistent::EqSet;
/// use eqset::typeclass::{Monoid, Semigroup};
///
/// let set: EqSet<i32> = [1, 2].into_iter().collect();
/// assert_eq!(EqSet::empty().combine(set.clone()), set);
/// assert_eq!(set.clone().combine(EqSet::empty()), set);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this method always returns a value
    /// (the identity element for empty iterators).
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}
