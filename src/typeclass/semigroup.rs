//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use eqset::persistent::EqSet;
//! use eqset::typeclass::Semigroup;
//!
//! let left: EqSet<i32> = [1, 2].into_iter().collect();
//! let right: EqSet<i32> = [2, 3].into_iter().collect();
//! let expected: EqSet<i32> = [1, 2, 3].into_iter().collect();
//!
//! assert_eq!(left.combine(right), expected);
//! ```

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// All implementations must satisfy associativity:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    /// Types can override this for more efficient implementations.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::persistent::EqSet;
    /// use eqset::typeclass::Semigroup;
    ///
    /// let sets = vec![EqSet::singleton(1), EqSet::singleton(2), EqSet::singleton(1)];
    /// assert_eq!(EqSet::reduce_all(sets).map(|set| set.len()), Some(2));
    ///
    /// let none: Vec<EqSet<i32>> = vec![];
    /// assert!(EqSet::reduce_all(none).is_none());
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}
