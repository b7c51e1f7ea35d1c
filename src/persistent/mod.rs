//! Persistent (immutable) data structures.
//!
//! This module provides [`EqSet`], an immutable set over element types that
//! only implement [`PartialEq`]. Its elements live in a crate-private
//! persistent cons list, so deriving a new set from an old one shares every
//! node the operation did not have to touch.
//!
//! # Structural Sharing
//!
//! ```rust
//! use eqset::persistent::EqSet;
//!
//! let set: EqSet<i32> = [1, 2, 3].into_iter().collect();
//!
//! // The original set is preserved
//! let extended = set.insert(4);
//! assert_eq!(set.len(), 3);
//! assert_eq!(extended.len(), 4);
//!
//! // Set operations
//! let other: EqSet<i32> = [2, 3, 4].into_iter().collect();
//! assert_eq!(set.union(&other).len(), 4);        // {1, 2, 3, 4}
//! assert_eq!(set.intersection(&other).len(), 2); // {2, 3}
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod cons_list;
mod eq_set;

pub use eq_set::EqSet;
pub use eq_set::EqSetIntoIterator;
pub use eq_set::EqSetIterator;

// =============================================================================
// Tests
// =============================================================================
