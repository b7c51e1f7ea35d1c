//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `EqSet<_>` directly.
//! [`TypeConstructor`] records the applied type and a way to re-apply the
//! constructor to another type, which is what [`Foldable`](super::Foldable)
//! builds on.
//!
//! # Example
//!
//! ```rust
//! use eqset::persistent::EqSet;
//! use eqset::typeclass::TypeConstructor;
//!
//! fn relabel<F: TypeConstructor>(_: &F) -> F::WithType<String>
//! where
//!     F::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let numbers: EqSet<i32> = EqSet::singleton(1);
//! let labels: EqSet<String> = relabel(&numbers);
//! assert!(labels.is_empty());
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` should be equivalent to `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `EqSet<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
