//! Foldable type class - folding over data structures.
//!
//! A `Foldable` can have its elements reduced into a single summary value.
//! For unordered structures like [`EqSet`](crate::persistent::EqSet) the
//! traversal order is unspecified, so only folds whose result does not depend
//! on order (sums, counts, unions) are meaningful.
//!
//! # Laws
//!
//! ## Consistency between `fold_left` and `fold_right`
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))  // when f is associative and commutative
//! ```
//!
//! ## Consistency with `to_list`
//!
//! ```text
//! fa.fold_left(init, f) == fa.to_list().into_iter().fold(init, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use eqset::persistent::EqSet;
//! use eqset::typeclass::Foldable;
//!
//! let numbers: EqSet<i32> = (1..=5).collect();
//! let sum = numbers.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A type class for data structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
///
/// # Provided Methods
///
/// - `fold_map`: Map each element to a `Monoid` and combine results
/// - `is_empty`: Check if the structure has no elements
/// - `length`: Count the number of elements
/// - `to_list`: Convert to a `Vec`
/// - `find`: Find an element matching a predicate
/// - `exists`: Check if any element matches a predicate
/// - `for_all`: Check if all elements match a predicate
pub trait Foldable: TypeConstructor {
    /// Folds the structure with an accumulator, left-associatively.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure with an accumulator, right-associatively.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a `Monoid` and combines all results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::persistent::EqSet;
    /// use eqset::typeclass::Foldable;
    ///
    /// let numbers: EqSet<i32> = [1, 2, 3].into_iter().collect();
    /// let parities: EqSet<i32> = numbers.fold_map(|element| EqSet::singleton(element % 2));
    /// assert_eq!(parities.len(), 2);
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Converts the structure to a `Vec` containing all elements.
    ///
    /// The order of elements is determined by the fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds an element satisfying a predicate.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Checks if any element satisfies the predicate.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Checks if all elements satisfy the predicate.
    ///
    /// Returns `true` for an empty structure.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}
