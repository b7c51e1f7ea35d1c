//! Persistent singly-linked list backing [`EqSet`](super::EqSet).
//!
//! `ConsList` stores elements in `ReferenceCounter`-shared nodes, so a list
//! derived from another (by prepending, or by removing an element) shares
//! every node after the point where they differ:
//!
//! ```text
//! list1:                 3 -> 2 -> 1 -> nil
//! list1.cons(4):    4 -> [3 -> 2 -> 1 -> nil]
//! list1 without 2:  3' -> [1 -> nil]          // only the prefix is copied
//! ```
//!
//! None of the helpers here promise anything about the order of their
//! output. The set built on top never exposes order, so each helper is free
//! to emit elements in whatever order is cheapest to produce.
//!
//! The list does not cache its length. Size comparisons go
//! through [`ConsList::size_less_than`] and [`ConsList::size_eq`], which walk
//! both lists in lockstep and stop at the shorter one.

use std::fmt;

use super::ReferenceCounter;

/// A single cell of the list.
struct Node<T> {
    /// The element stored in this node.
    element: T,
    /// Reference to the next node (if any).
    next: Option<ReferenceCounter<Self>>,
}

/// A persistent (immutable) singly-linked list.
///
/// # Time Complexity
///
/// | Operation          | Complexity   |
/// |--------------------|--------------|
/// | `new`              | O(1)         |
/// | `cons`             | O(1)         |
/// | `is_empty`         | O(1)         |
/// | `len`              | O(n)         |
/// | `contains`         | O(n)         |
/// | `remove_opt`       | O(n)         |
/// | `filter`           | O(n)         |
/// | `partition`        | O(n)         |
/// | `append_unordered` | O(n)         |
/// | `size_less_than`   | O(min(n, m)) |
/// | `size_eq`          | O(min(n, m)) |
pub(crate) struct ConsList<T> {
    head: Option<ReferenceCounter<Node<T>>>,
}

impl<T> ConsList<T> {
    /// Creates a new empty list.
    #[inline]
    pub(crate) const fn new() -> Self {
        Self { head: None }
    }

    /// Prepends an element, sharing the whole of `self` as the tail.
    #[inline]
    #[must_use]
    pub(crate) fn cons(&self, element: T) -> Self {
        Self {
            head: Some(ReferenceCounter::new(Node {
                element,
                next: self.head.clone(),
            })),
        }
    }

    #[inline]
    pub(crate) const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts the elements by walking the list.
    pub(crate) fn len(&self) -> usize {
        self.iter().count()
    }

    #[inline]
    pub(crate) fn iter(&self) -> ConsListIterator<'_, T> {
        ConsListIterator {
            current: self.head.as_ref(),
        }
    }

    /// Returns `true` if `self` has strictly fewer elements than `other`.
    ///
    /// Both lists are consumed pairwise; the walk ends as soon as either one
    /// runs out, so comparing a short list against a long one costs only the
    /// length of the short one.
    pub(crate) fn size_less_than(&self, other: &Self) -> bool {
        let mut left = self.iter();
        let mut right = other.iter();
        loop {
            match (left.next(), right.next()) {
                (_, None) => return false,
                (None, Some(_)) => return true,
                (Some(_), Some(_)) => {}
            }
        }
    }

    /// Returns `true` if both lists have the same number of elements.
    ///
    /// Uses the same lockstep walk as [`Self::size_less_than`].
    pub(crate) fn size_eq(&self, other: &Self) -> bool {
        let mut left = self.iter();
        let mut right = other.iter();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(_), Some(_)) => {}
                _ => return false,
            }
        }
    }
}

impl<T: PartialEq> ConsList<T> {
    pub(crate) fn contains(&self, element: &T) -> bool {
        self.iter().any(|candidate| candidate == element)
    }
}

impl<T: Clone> ConsList<T> {
    /// Removes one occurrence of `element`.
    ///
    /// Returns `None` when no element compares equal, so callers can branch
    /// on the outcome without a second membership scan. When found, the
    /// nodes before the match are copied and the nodes after it are shared.
    pub(crate) fn remove_opt(&self, element: &T) -> Option<Self>
    where
        T: PartialEq,
    {
        let mut prefix: Vec<&T> = Vec::new();
        let mut current = self.head.as_ref();

        while let Some(node) = current {
            if node.element == *element {
                let suffix = Self {
                    head: node.next.clone(),
                };
                return Some(
                    prefix
                        .into_iter()
                        .rev()
                        .fold(suffix, |list, kept| list.cons(kept.clone())),
                );
            }
            prefix.push(&node.element);
            current = node.next.as_ref();
        }
        None
    }

    /// Keeps the elements satisfying `predicate`.
    pub(crate) fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|element| predicate(*element))
            .fold(Self::new(), |list, element| list.cons(element.clone()))
    }

    /// Splits into `(matching, non_matching)`.
    pub(crate) fn partition<P>(&self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .fold((Self::new(), Self::new()), |(matching, rest), element| {
                if predicate(element) {
                    (matching.cons(element.clone()), rest)
                } else {
                    (matching, rest.cons(element.clone()))
                }
            })
    }

    /// Returns a list holding the elements of both lists.
    ///
    /// The elements of `self` are pushed onto `other`, whose nodes are
    /// shared as-is. The result is in neither input's order.
    pub(crate) fn append_unordered(&self, other: &Self) -> Self {
        self.iter()
            .fold(other.clone(), |list, element| list.cons(element.clone()))
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the elements of a [`ConsList`].
pub(crate) struct ConsListIterator<'a, T> {
    current: Option<&'a ReferenceCounter<Node<T>>>,
}

impl<'a, T> Iterator for ConsListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            &node.element
        })
    }
}

/// An owning iterator over the elements of a [`ConsList`].
///
/// Nodes this iterator holds the only reference to are unwrapped and their
/// elements moved out; elements of shared nodes are cloned.
pub(crate) struct ConsListIntoIterator<T> {
    list: ConsList<T>,
}

impl<T: Clone> Iterator for ConsListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.head.take()?;
        match ReferenceCounter::try_unwrap(node) {
            Ok(Node { element, next }) => {
                self.list.head = next;
                Some(element)
            }
            Err(shared) => {
                self.list.head = shared.next.clone();
                Some(shared.element.clone())
            }
        }
    }
}

impl<T: Clone> IntoIterator for ConsList<T> {
    type Item = T;
    type IntoIter = ConsListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ConsListIntoIterator { list: self }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for ConsList<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

// Unlinks uniquely owned nodes one at a time; the derived drop would recurse
// once per node.
impl<T> Drop for ConsList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            current = match ReferenceCounter::try_unwrap(node) {
                Ok(mut node) => node.next.take(),
                Err(_) => None,
            };
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ConsList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
