/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

#![deny(missing_docs)]

//! Algebraic structures for combining values.
//!
//! This crate provides the small set of type classes the error
//! algebra in `fallible` is built on: a value is *combinable* when it
//! forms a semigroup, and an error type must be combinable for two
//! failures to be accumulated rather than one of them discarded.
//!
//! # Quick Start
//!
//! ```rust
//! use algebra::Monoid;
//! use algebra::Semigroup;
//!
//! // Integers combine by addition.
//! assert_eq!(1i32.combine(&2).combine(&3), 6);
//!
//! // Vectors combine by concatenation.
//! let errors = vec!["too short"].combine(&vec!["no digits"]);
//! assert_eq!(errors, vec!["too short", "no digits"]);
//!
//! // Empty is the identity for combine.
//! assert_eq!(String::concat(["a".to_string(), "b".to_string()]), "ab");
//! ```
//!
//! # Core Concepts
//!
//! - **Semigroup**: A type with an associative binary operation
//!   (`combine`). Examples: addition, string concatenation, appending
//!   error lists.
//!
//! - **Monoid**: A semigroup with an identity element (`empty`).
//!   Examples: 0 for addition, empty string for concatenation.
//!
//! - **CommutativeMonoid**: A monoid where combine is commutative.
//!
//! - **Semiring**: A commutative monoid under `combine` (addition)
//!   that also carries an associative `combine_multiplicate`
//!   (multiplication) with identity `one`, distributing over
//!   addition.
//!
//! # Provided Instances
//!
//! - Integers: `combine = +`, `empty = 0`, and a semiring
//!   with `combine_multiplicate = *`, `one = 1`. Both wrap on
//!   overflow, so the laws hold over the full range.
//! - `String`, `Vec<T>`: concatenation, `empty` is the empty value.
//! - `Option<S>`: combines present values, `None` is the identity.
//! - [`Product<T>`]: numeric wrapper where `combine = *`.

mod primitives;

pub use primitives::Product;
pub use primitives::Semi;

// Semigroup

/// A **semigroup**: a type with an associative binary operation.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `a.combine(b).combine(c) == a.combine(b.combine(c))`
///
/// # Example
///
/// ```rust
/// use algebra::Semigroup;
///
/// #[derive(Clone, Debug, PartialEq, Eq)]
/// struct Log(Vec<String>);
///
/// impl Semigroup for Log {
///     fn combine(&self, other: &Self) -> Self {
///         Log(self.0.combine(&other.0))
///     }
/// }
///
/// let x = Log(vec!["a".into()]);
/// let y = Log(vec!["b".into()]);
/// let z = Log(vec!["c".into()]);
/// assert_eq!(x.combine(&y).combine(&z), x.combine(&y.combine(&z)));
/// ```
pub trait Semigroup: Sized {
    /// Combine two elements associatively.
    fn combine(&self, other: &Self) -> Self;

    /// In-place combine.
    fn combine_assign(&mut self, other: &Self) {
        *self = self.combine(other);
    }

    /// Combine a finite iterator of values. Returns `None` for empty
    /// iterators, since a semigroup has no identity to fall back on.
    fn combine_all<I>(iter: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        iter.into_iter().reduce(|acc, x| acc.combine(&x))
    }
}

// Monoid

/// A **monoid**: a semigroup with an identity element.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `a.combine(b).combine(c) == a.combine(b.combine(c))`
/// - **Left identity**: `empty().combine(a) == a`
/// - **Right identity**: `a.combine(empty()) == a`
///
/// # Example
///
/// ```rust
/// use algebra::Monoid;
/// use algebra::Semigroup;
///
/// let x = 3;
/// assert_eq!(i32::empty().combine(&x), x);
/// assert_eq!(x.combine(&i32::empty()), x);
/// assert_eq!(i32::concat(vec![1, 2, 3]), 6);
/// ```
pub trait Monoid: Semigroup {
    /// The identity element.
    fn empty() -> Self;

    /// Fold an iterator using combine, starting from empty.
    fn concat<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        iter.into_iter()
            .fold(Self::empty(), |acc, x| acc.combine(&x))
    }
}

// CommutativeMonoid

/// A **commutative monoid**: a monoid where combine is commutative.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `a.combine(b).combine(c) == a.combine(b.combine(c))`
/// - **Commutative**: `a.combine(b) == b.combine(a)`
/// - **Identity**: `a.combine(empty()) == a == empty().combine(a)`
pub trait CommutativeMonoid: Monoid {}

// Semiring

/// A **semiring**: a commutative monoid under `combine` (read as
/// addition) together with a second associative operation,
/// `combine_multiplicate` (read as multiplication), that has its own
/// identity `one`.
///
/// Laws (not enforced by type system):
///
/// - `(Self, combine, zero)` is a commutative monoid.
/// - `(Self, combine_multiplicate, one)` is a monoid.
/// - **Distributive**: `a * (b + c) == a * b + a * c` and
///   `(a + b) * c == a * c + b * c`
/// - **Annihilation**: `zero * a == zero == a * zero`
///
/// # Example
///
/// ```rust
/// use algebra::CommutativeMonoid;
/// use algebra::Monoid;
/// use algebra::Semigroup;
/// use algebra::Semiring;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// struct Money(i64);
///
/// impl Semigroup for Money {
///     fn combine(&self, other: &Self) -> Self {
///         Money(self.0 + other.0)
///     }
/// }
///
/// impl Monoid for Money {
///     fn empty() -> Self {
///         Money(0)
///     }
/// }
///
/// impl CommutativeMonoid for Money {}
///
/// impl Semiring for Money {
///     fn one() -> Self {
///         Money(1)
///     }
///
///     fn combine_multiplicate(&self, other: &Self) -> Self {
///         Money(self.0 * other.0)
///     }
/// }
///
/// assert_eq!(Money(1).combine(&Money(2)), Money(3));
/// assert_eq!(Money(2).combine_multiplicate(&Money(3)), Money(6));
/// ```
pub trait Semiring: CommutativeMonoid {
    /// The additive identity. Same as [`Monoid::empty`].
    fn zero() -> Self {
        Self::empty()
    }

    /// The multiplicative identity.
    fn one() -> Self;

    /// Multiply two elements associatively.
    fn combine_multiplicate(&self, other: &Self) -> Self;

    /// Multiply every element of an iterator, starting from `one`.
    fn product<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        iter.into_iter()
            .fold(Self::one(), |acc, x| acc.combine_multiplicate(&x))
    }
}

// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct Money(i64);

    impl Semigroup for Money {
        fn combine(&self, other: &Self) -> Self {
            Money(self.0 + other.0)
        }
    }

    impl Monoid for Money {
        fn empty() -> Self {
            Money(0)
        }
    }

    impl CommutativeMonoid for Money {}

    impl Semiring for Money {
        fn one() -> Self {
            Money(1)
        }

        fn combine_multiplicate(&self, other: &Self) -> Self {
            Money(self.0 * other.0)
        }
    }

    #[test]
    fn semigroup_combine_works() {
        assert_eq!(Money(3).combine(&Money(5)), Money(8));
    }

    #[test]
    fn semigroup_is_associative() {
        let x = Money(1);
        let y = Money(2);
        let z = Money(3);
        assert_eq!(x.combine(&y).combine(&z), x.combine(&y.combine(&z)));
    }

    #[test]
    fn combine_assign_matches_combine() {
        let mut x = Money(4);
        x.combine_assign(&Money(6));
        assert_eq!(x, Money(10));
    }

    #[test]
    fn combine_all_empty_is_none() {
        let empty: Vec<Money> = vec![];
        assert_eq!(Money::combine_all(empty), None);
        assert_eq!(
            Money::combine_all(vec![Money(1), Money(2)]),
            Some(Money(3))
        );
    }

    #[test]
    fn monoid_has_identity() {
        let x = Money(5);
        assert_eq!(Money::empty().combine(&x), x);
        assert_eq!(x.combine(&Money::empty()), x);
    }

    #[test]
    fn monoid_concat_empty_is_identity() {
        let empty: Vec<Money> = vec![];
        assert_eq!(Money::concat(empty), Money::empty());
    }

    #[test]
    fn custom_semiring() {
        assert_eq!(Money(1).combine(&Money(2)), Money(3));
        assert_eq!(Money(2).combine_multiplicate(&Money(3)), Money(6));
        assert_eq!(Money::zero(), Money(0));
        assert_eq!(Money::product(vec![Money(2), Money(3), Money(4)]), Money(24));
    }

    #[test]
    fn semiring_distributes() {
        let (a, b, c) = (Money(2), Money(3), Money(7));
        assert_eq!(
            a.combine_multiplicate(&b.combine(&c)),
            a.combine_multiplicate(&b).combine(&a.combine_multiplicate(&c))
        );
    }

    #[test]
    fn zero_annihilates() {
        let a = Money(9);
        assert_eq!(Money::zero().combine_multiplicate(&a), Money::zero());
        assert_eq!(a.combine_multiplicate(&Money::zero()), Money::zero());
    }
}
