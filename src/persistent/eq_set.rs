//! Persistent (immutable) set over equality-only element types.
//!
//! This module provides [`EqSet`], an immutable set whose elements need to
//! implement nothing more than [`PartialEq`].
//!
//! # Overview
//!
//! Without hashing or ordering, the only way to find an element is to compare
//! it against every stored one. `EqSet` accepts that cost:
//!
//! - O(n) `contains`, `insert` and `remove`
//! - O(n * m) union, intersection, difference and subset tests
//! - O(n) `len`: the backing list does not cache its length
//!
//! In exchange it works for element types no other set in the standard
//! library accepts, and every operation returns a new set that shares the
//! untouched part of its input's storage.
//!
//! # Unspecified Order
//!
//! A set has no order. Nothing in this API depends on the order in which the
//! backing list happens to hold its elements, except iteration and the
//! [`Display`](fmt::Display) and [`Debug`](fmt::Debug) renderings, whose order
//! is unspecified. Converting to an ordered representation goes through
//! [`EqSet::to_ordered_set`], which orders by a key the caller supplies.
//!
//! # Examples
//!
//! ```rust
//! use eqset::persistent::EqSet;
//!
//! let set = EqSet::new().insert(1.5).insert(2.5).insert(1.5);
//! assert_eq!(set.len(), 2);
//!
//! let removed = set.remove(&1.5);
//! assert_eq!(set.len(), 2);     // Original unchanged
//! assert_eq!(removed.len(), 1); // New version
//! ```
//!
//! # Set Operations
//!
//! ```rust
//! use eqset::persistent::EqSet;
//!
//! let set_a: EqSet<i32> = [1, 2, 3].into_iter().collect();
//! let set_b: EqSet<i32> = [2, 3, 4].into_iter().collect();
//!
//! assert_eq!(set_a.union(&set_b), EqSet::from([1, 2, 3, 4]));
//! assert_eq!(set_a.intersection(&set_b), EqSet::from([2, 3]));
//! assert_eq!(set_a.difference(&set_b), EqSet::from([1]));
//! assert!(set_a.intersection(&set_b).is_proper_subset_of(&set_a));
//! ```

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::iter::{FromIterator, Sum};
use std::ops::Range;

use super::cons_list::{ConsList, ConsListIntoIterator, ConsListIterator};
use crate::typeclass::{Foldable, Monoid, Semigroup, TypeConstructor};

// =============================================================================
// EqSet Definition
// =============================================================================

/// A persistent (immutable) set that only requires [`PartialEq`] of its
/// elements.
///
/// The backing list never holds two elements that compare equal. Every
/// operation that produces a set preserves this.
///
/// # Time Complexity
///
/// | Operation              | Complexity        |
/// |------------------------|-------------------|
/// | `new`, `singleton`     | O(1)              |
/// | `is_empty`             | O(1)              |
/// | `len`                  | O(n)              |
/// | `contains`             | O(n)              |
/// | `insert`, `remove`     | O(n)              |
/// | `replace`              | O(n)              |
/// | `filter`, `partition`  | O(n)              |
/// | `map`, `filter_map`    | O(n²)             |
/// | `union`                | O(n * m)          |
/// | `intersection`         | O(n * m)          |
/// | `difference`           | O(n * m)          |
/// | `is_subset_of`         | O(n * m)          |
/// | `set_eq`, `==`         | O(n * m)          |
/// | `subsets`              | O(2ⁿ)             |
///
/// # Examples
///
/// ```rust
/// use eqset::persistent::EqSet;
///
/// let set = EqSet::singleton(42);
/// assert!(set.contains(&42));
/// assert!(!set.contains(&0));
/// ```
pub struct EqSet<T> {
    elements: ConsList<T>,
}

impl<T> EqSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::persistent::EqSet;
    ///
    /// let set: EqSet<i32> = EqSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: ConsList::new(),
        }
    }

    /// Wraps a list already known to be free of duplicates.
    #[inline]
    fn from_distinct(elements: ConsList<T>) -> Self {
        Self { elements }
    }

    /// Adds an element the caller knows is not a member.
    #[inline]
    fn prepend_distinct(&self, element: T) -> Self {
        Self::from_distinct(self.elements.cons(element))
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(n): the size is counted, not cached.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if the set contains at least one element.
    #[inline]
    #[must_use]
    pub const fn non_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns an iterator over the elements, in unspecified order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> EqSetIterator<'_, T> {
        EqSetIterator {
            inner: self.elements.iter(),
        }
    }

    /// Counts the elements satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::persistent::EqSet;
    ///
    /// let set = EqSet::range(0, 10);
    /// assert_eq!(set.count(|element| element % 3 == 0), 4);
    /// ```
    pub fn count<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|element| predicate(*element)).count()
    }

    /// Returns `true` if some element satisfies `predicate`.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// An empty set satisfies every predicate.
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Sums `function` applied to every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::persistent::EqSet;
    ///
    /// let words: EqSet<&str> = ["a", "bb", "ccc"].into_iter().collect();
    /// assert_eq!(words.sum_with(|word| word.len()), 6);
    /// ```
    pub fn sum_with<S, F>(&self, function: F) -> S
    where
        S: Sum<S>,
        F: FnMut(&T) -> S,
    {
        self.iter().map(function).sum()
    }

    /// Returns a greatest element under `compare`, or `None` if empty.
    ///
    /// When several elements compare as greatest, which one is returned is
    /// unspecified.
    pub fn maximum_by<F>(&self, mut compare: F) -> Option<&T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.iter().max_by(|left, right| compare(*left, *right))
    }

    /// Returns a least element under `compare`, or `None` if empty.
    ///
    /// When several elements compare as least, which one is returned is
    /// unspecified.
    pub fn minimum_by<F>(&self, mut compare: F) -> Option<&T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.iter().min_by(|left, right| compare(*left, *right))
    }

    /// Applies `function` to every element, collapsing equal images.
    ///
    /// When two elements map to equal values, one of them survives; which
    /// one is unspecified.
    ///
    /// # Complexity
    ///
    /// O(n²): every image is inserted with a membership scan.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::persistent::EqSet;
    ///
    /// let set: EqSet<i32> = [-2, -1, 1, 2, 3].into_iter().collect();
    /// let magnitudes = set.map(|element| element.abs());
    /// assert_eq!(magnitudes, EqSet::from([1, 2, 3]));
    /// ```
    pub fn map<U, F>(&self, mut function: F) -> EqSet<U>
    where
        U: PartialEq,
        F: FnMut(&T) -> U,
    {
        self.iter()
            .fold(EqSet::new(), |set, element| set.insert(function(element)))
    }

    /// Applies `function` to every element, keeping the `Some` images and
    /// collapsing equal ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::persistent::EqSet;
    ///
    /// let set: EqSet<&str> = ["1", "x", "01", "2"].into_iter().collect();
    /// let parsed = set.filter_map(|text| text.parse::<i32>().ok());
    /// assert_eq!(parsed, EqSet::from([1, 2]));
    /// ```
    pub fn filter_map<U, F>(&self, mut function: F) -> EqSet<U>
    where
        U: PartialEq,
        F: FnMut(&T) -> Option<U>,
    {
        self.iter().fold(EqSet::new(), |set, element| {
            match function(element) {
                Some(image) => set.insert(image),
                None => set,
            }
        })
    }

    /// Collects the images of `function` into an ordered set.
    ///
    /// This is the one conversion that exposes an order, and that order comes
    /// from the target type, not from this set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::persistent::EqSet;
    ///
    /// let set: EqSet<f64> = [2.5, 0.5, 1.5].into_iter().collect();
    /// let ordered = set.to_ordered_set(|element| (element * 10.0) as i64);
    /// assert_eq!(ordered.into_iter().collect::<Vec<_>>(), vec![5, 15, 25]);
    /// ```
    pub fn to_ordered_set<U, F>(&self, function: F) -> BTreeSet<U>
    where
        U: Ord,
        F: FnMut(&T) -> U,
    {
        self.iter().map(function).collect()
    }

    /// Returns the set of values in `[begin, end)`.
    ///
    /// Returns the empty set when `begin >= end`.
    ///
    /// # Complexity
    ///
    /// O(end - begin): a range never repeats a value, so no membership checks
    /// are made.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::persistent::EqSet;
    ///
    /// assert_eq!(EqSet::range(2, 5), EqSet::from([2, 3, 4]));
    /// assert!(EqSet::range(5, 2).is_empty());
    /// ```
    pub fn range(begin: T, end: T) -> Self
    where
        Range<T>: Iterator<Item = T>,
    {
        Self::from_distinct((begin..end).fold(ConsList::new(), |list, value| list.cons(value)))
    }
}

impl<T: PartialEq> EqSet<T> {
    /// Creates a set containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().prepend_distinct(element)
    }

    /// Returns `true` if some element of the set equals `element`.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    /// Inserts an element into the set.
    ///
    /// If an equal element is already present, returns a set equal to
    /// `self` (sharing all of its storage) and drops `element`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::persistent::EqSet;
    ///
    /// let set1 = EqSet::new().insert(1);
    /// let set2 = set1.insert(2);
    ///
    /// assert_eq!(set1.len(), 1); // Original unchanged
    /// assert_eq!(set2.len(), 2); // New version
    /// assert_eq!(set2.insert(2), set2);
    /// ```
    #[must_use]
    pub fn insert(&self, element: T) -> Self {
        if self.contains(&element) {
            self.clone()
        } else {
            self.prepend_distinct(element)
        }
    }

    /// Builds a set by repeatedly applying `function` to a state.
    ///
    /// `function` returns the next element and state, or `None` to stop.
    /// Equal elements produced along the way collapse into one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::persistent::EqSet;
    ///
    /// // Collatz orbit of 6: 6, 3, 10, 5, 16, 8, 4, 2, 1
    /// let orbit = EqSet::unfold(6_u32, |value| {
    ///     (value != 0).then(|| {
    ///         let next = match value {
    ///             1 => 0,
    ///             even if even % 2 == 0 => even / 2,
    ///             odd => 3 * odd + 1,
    ///         };
    ///         (value, next)
    ///     })
    /// });
    /// assert_eq!(orbit.len(), 9);
    /// ```
    pub fn unfold<S, F>(state: S, mut function: F) -> Self
    where
        F: FnMut(S) -> Option<(T, S)>,
    {
        let mut set = Self::new();
        let mut state = state;
        while let Some((element, next_state)) = function(state) {
            set = set.insert(element);
            state = next_state;
        }
        set
    }

    /// Drains `iterable` into a set, collapsing equal elements.
    ///
    /// Equivalent to `iterable.into_iter().collect()`.
    pub fn from_iterable<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        iterable.into_iter().collect()
    }

    /// Returns `true` if every element of `self` is a member of `other`.
    ///
    /// # Complexity
    ///
    /// O(n * m)
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is a member of `self`.
    #[must_use]
    pub fn is_superset_of(&self, other: &Self) -> bool {
        other.is_subset_of(self)
    }

    /// Returns `true` if `self` is a subset of `other` with strictly fewer
    /// elements.
    ///
    /// The sizes are compared first, walking both sets only as far as the
    /// shorter one, so the O(n * m) subset scan is skipped whenever `self` is
    /// not smaller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::persistent::EqSet;
    ///
    /// let small = EqSet::from([1, 2]);
    /// let large = EqSet::from([1, 2, 3]);
    ///
    /// assert!(small.is_proper_subset_of(&large));
    /// assert!(!small.is_proper_subset_of(&small));
    /// ```
    #[must_use]
    pub fn is_proper_subset_of(&self, other: &Self) -> bool {
        self.elements.size_less_than(&other.elements) && self.is_subset_of(other)
    }

    /// Returns `true` if both sets hold the same elements.
    ///
    /// Sizes are compared first and a mismatch returns early. With equal sizes
    /// and no duplicates on either side, `self ⊆ other` already implies
    /// `other ⊆ self`, so only one subset scan is made.
    #[must_use]
    pub fn set_eq(&self, other: &Self) -> bool {
        self.elements.size_eq(&other.elements) && self.is_subset_of(other)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        !self.iter().any(|element| other.contains(element))
    }
}

impl<T: Clone + PartialEq> EqSet<T> {
    /// Removes an element from the set.
    ///
    /// If no element equals `element`, returns a set equal to `self`, sharing
    /// all of its storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::persistent::EqSet;
    ///
    /// let set = EqSet::from([1, 2]);
    /// let removed = set.remove(&1);
    ///
    /// assert_eq!(set.len(), 2);     // Original unchanged
    /// assert_eq!(removed.len(), 1); // New version
    /// assert_eq!(removed.remove(&1), removed);
    /// ```
    #[must_use]
    pub fn remove(&self, element: &T) -> Self {
        self.elements
            .remove_opt(element)
            .map_or_else(|| self.clone(), Self::from_distinct)
    }

    /// Returns the union of two sets.
    ///
    /// Every element of `other` is inserted into `self`, so elements present
    /// in both collapse into one.
    ///
    /// # Complexity
    ///
    /// O(n * m)
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        other.iter().fold(self.clone(), |set, element| {
            if set.contains(element) {
                set
            } else {
                set.prepend_distinct(element.clone())
            }
        })
    }

    /// Returns the elements of `self` that are also in `other`.
    ///
    /// # Complexity
    ///
    /// O(n * m)
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self::from_distinct(self.elements.filter(|element| other.contains(element)))
    }

    /// Returns the elements of `self` that are not in `other`.
    ///
    /// Every element of `other` is removed from `self` in turn.
    ///
    /// # Complexity
    ///
    /// O(n * m)
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        other
            .iter()
            .fold(self.clone(), |set, element| set.remove(element))
    }

    /// Returns the elements in exactly one of the two sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::persistent::EqSet;
    ///
    /// let set_a = EqSet::from([1, 2, 3]);
    /// let set_b = EqSet::from([2, 3, 4]);
    /// assert_eq!(set_a.symmetric_difference(&set_b), EqSet::from([1, 4]));
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let only_self = self.difference(other);
        let only_other = other.difference(self);
        // The two halves are disjoint, so concatenation cannot duplicate.
        Self::from_distinct(only_self.elements.append_unordered(&only_other.elements))
    }

    /// Keeps the elements satisfying `predicate`.
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::from_distinct(self.elements.filter(predicate))
    }

    /// Splits the set into `(matching, non_matching)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::persistent::EqSet;
    ///
    /// let (even, odd) = EqSet::range(0, 6).partition(|element| element % 2 == 0);
    /// assert_eq!(even, EqSet::from([0, 2, 4]));
    /// assert_eq!(odd, EqSet::from([1, 3, 5]));
    /// ```
    #[must_use]
    pub fn partition<P>(&self, predicate: P) -> (Self, Self)
    where
        P: FnMut(&T) -> bool,
    {
        let (matching, rest) = self.elements.partition(predicate);
        (Self::from_distinct(matching), Self::from_distinct(rest))
    }

    /// Replaces `source` with `target`.
    ///
    /// If `source` is not a member, returns a set equal to `self`. Otherwise
    /// `source` is removed and `target` inserted; if `target` was already a
    /// member the set shrinks by one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::persistent::EqSet;
    ///
    /// let set = EqSet::from([1, 2, 3]);
    /// assert_eq!(set.replace(&1, 10), EqSet::from([10, 2, 3]));
    /// assert_eq!(set.replace(&1, 2), EqSet::from([2, 3]));
    /// assert_eq!(set.replace(&7, 10), set);
    /// ```
    #[must_use]
    pub fn replace(&self, source: &T, target: T) -> Self {
        match self.elements.remove_opt(source) {
            Some(rest) => Self::from_distinct(rest).insert(target),
            None => self.clone(),
        }
    }

    /// Returns the set of all subsets.
    ///
    /// Starting from `{∅}`, each element doubles the family: the existing
    /// subsets are joined with a copy of each one extended by the element.
    /// An extended subset cannot already hold the element, and no old subset
    /// holds it, so the two halves never overlap.
    ///
    /// # Complexity
    ///
    /// O(2ⁿ) subsets are built.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::persistent::EqSet;
    ///
    /// let power = EqSet::from([1, 2, 3]).subsets();
    /// assert_eq!(power.len(), 8);
    /// assert!(power.contains(&EqSet::from([1, 3])));
    /// assert!(power.contains(&EqSet::new()));
    /// ```
    #[must_use]
    pub fn subsets(&self) -> EqSet<Self> {
        self.iter()
            .fold(EqSet::singleton(Self::new()), |family, element| {
                let extended = family.iter().fold(ConsList::new(), |list, subset| {
                    list.cons(subset.prepend_distinct(element.clone()))
                });
                EqSet::from_distinct(extended.append_unordered(&family.elements))
            })
    }

    /// Returns the elements as a `Vec`, in unspecified order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Clone + PartialEq> EqSet<EqSet<T>> {
    /// Unions every inner set together.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eqset::persistent::EqSet;
    ///
    /// let nested = EqSet::from([EqSet::from([1, 2]), EqSet::from([2, 3]), EqSet::new()]);
    /// assert_eq!(nested.flatten(), EqSet::from([1, 2, 3]));
    /// ```
    #[must_use]
    pub fn flatten(&self) -> EqSet<T> {
        EqSet::combine_all(self.iter().cloned())
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of an [`EqSet`].
pub struct EqSetIterator<'a, T> {
    inner: ConsListIterator<'a, T>,
}

impl<'a, T> Iterator for EqSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// An owning iterator over the elements of an [`EqSet`].
///
/// Elements held only by the consumed set are moved out; elements whose
/// storage is shared with another set are cloned.
pub struct EqSetIntoIterator<T> {
    inner: ConsListIntoIterator<T>,
}

impl<T: Clone> Iterator for EqSetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for EqSet<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
        }
    }
}

impl<T> Default for EqSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> FromIterator<T> for EqSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |set, element| set.insert(element))
    }
}

impl<T: PartialEq> Extend<T> for EqSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            if !self.contains(&element) {
                *self = self.prepend_distinct(element);
            }
        }
    }
}

impl<T: PartialEq, const N: usize> From<[T; N]> for EqSet<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: PartialEq> From<Vec<T>> for EqSet<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Clone> IntoIterator for EqSet<T> {
    type Item = T;
    type IntoIter = EqSetIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        EqSetIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a EqSet<T> {
    type Item = &'a T;
    type IntoIter = EqSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for EqSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.set_eq(other)
    }
}

impl<T: Eq> Eq for EqSet<T> {}

impl<T: fmt::Debug> fmt::Debug for EqSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the set as `Set(e1, e2, ...)`.
///
/// The order of the elements in the output is unspecified.
impl<T: fmt::Display> fmt::Display for EqSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Set(")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, ")")
    }
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(EqSet<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(EqSet<i32>: Send, Sync);

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for EqSet<T> {
    type Inner = T;
    type WithType<B> = EqSet<B>;
}

impl<T: Clone> Foldable for EqSet<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        // A set has no order to reverse, so this visits elements in the same
        // order as `fold_left`.
        self.into_iter()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.elements.len()
    }
}

impl<T: Clone + PartialEq> Semigroup for EqSet<T> {
    fn combine(self, other: Self) -> Self {
        self.union(&other)
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.union(other)
    }
}

impl<T: Clone + PartialEq> Monoid for EqSet<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for EqSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct EqSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> EqSetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for EqSetVisitor<T>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    type Value = EqSet<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Duplicates in the input collapse on insertion.
        let mut set = EqSet::new();
        while let Some(element) = seq.next_element()? {
            set = set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for EqSet<T>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(EqSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
