/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Instances for std types, plus the `Product` and `Semi` wrappers.

use std::ops::Add;
use std::ops::Mul;

use serde::Deserialize;
use serde::Serialize;

use super::CommutativeMonoid;
use super::Monoid;
use super::Semigroup;
use super::Semiring;

// Integers: combine = wrapping +, combine_multiplicate = wrapping *

macro_rules! integer_semiring {
    ($($t:ty),* $(,)?) => {
        $(
            impl Semigroup for $t {
                fn combine(&self, other: &Self) -> Self {
                    self.wrapping_add(*other)
                }
            }

            impl Monoid for $t {
                fn empty() -> Self {
                    0
                }
            }

            impl CommutativeMonoid for $t {}

            impl Semiring for $t {
                fn one() -> Self {
                    1
                }

                fn combine_multiplicate(&self, other: &Self) -> Self {
                    self.wrapping_mul(*other)
                }
            }
        )*
    };
}

integer_semiring!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

// String / Vec<T>: combine = concatenation

impl Semigroup for String {
    fn combine(&self, other: &Self) -> Self {
        let mut out = String::with_capacity(self.len() + other.len());
        out.push_str(self);
        out.push_str(other);
        out
    }

    fn combine_assign(&mut self, other: &Self) {
        self.push_str(other);
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(&self, other: &Self) -> Self {
        let mut out = Vec::with_capacity(self.len() + other.len());
        out.extend_from_slice(self);
        out.extend_from_slice(other);
        out
    }

    fn combine_assign(&mut self, other: &Self) {
        self.extend_from_slice(other);
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

// Option<S>: combine present values, None is the identity

impl<S: Semigroup + Clone> Semigroup for Option<S> {
    fn combine(&self, other: &Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.combine(b)),
            (Some(a), None) => Some(a.clone()),
            (None, Some(b)) => Some(b.clone()),
            (None, None) => None,
        }
    }
}

impl<S: Semigroup + Clone> Monoid for Option<S> {
    fn empty() -> Self {
        None
    }
}

// Product<T>: combine = *

/// Newtype wrapper for a numeric type where `combine` is
/// multiplication.
///
/// - `combine = a * b`
/// - `empty = 1`
///
/// # Example
/// ```
/// use algebra::Monoid;
/// use algebra::Product;
///
/// let p = Product::concat(vec![Product(2), Product(3), Product(4)]);
/// assert_eq!(p, Product(24));
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize
)]
pub struct Product<T>(pub T);

impl<T: Mul<Output = T> + Clone> Semigroup for Product<T> {
    fn combine(&self, other: &Self) -> Self {
        Product(self.0.clone() * other.0.clone())
    }
}

impl<T: Mul<Output = T> + Clone + num_traits::One> Monoid for Product<T> {
    fn empty() -> Self {
        Product(T::one())
    }
}

impl<T: Mul<Output = T> + Clone + num_traits::One> CommutativeMonoid for Product<T> {}

impl<T> From<T> for Product<T> {
    fn from(value: T) -> Self {
        Product(value)
    }
}

impl<T> Product<T> {
    /// Get the inner value.
    pub fn get(&self) -> &T {
        &self.0
    }
}

// Semi<T>: operator syntax over a semiring

/// Lifts a [`Semiring`] into the `+` and `*` operators.
///
/// `+` is [`Semigroup::combine`] and `*` is
/// [`Semiring::combine_multiplicate`].
///
/// # Example
/// ```
/// use algebra::Semi;
///
/// assert_eq!(Semi(1) + Semi(2), Semi(3));
/// assert_eq!(Semi(2) * Semi(3), Semi(6));
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize
)]
pub struct Semi<T>(pub T);

impl<T: Semiring> Add for Semi<T> {
    type Output = Semi<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Semi(self.0.combine(&rhs.0))
    }
}

impl<T: Semiring> Mul for Semi<T> {
    type Output = Semi<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        Semi(self.0.combine_multiplicate(&rhs.0))
    }
}

impl<T> Semi<T> {
    /// Unwrap the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn integer_semigroup_is_addition() {
        assert_eq!(1i32.combine(&2).combine(&3), 6);
        assert_eq!(3i32.combine(&2).combine(&1), 6);
    }

    #[test]
    fn integer_semiring() {
        assert_eq!(1i64.combine(&2), 3);
        assert_eq!(2i64.combine_multiplicate(&3), 6);
        assert_eq!(u8::zero(), 0);
        assert_eq!(u8::one(), 1);
    }

    #[test]
    fn integer_overflow_wraps() {
        assert_eq!(i32::MAX.combine(&1), i32::MIN);
        assert_eq!(u8::MAX.combine_multiplicate(&2), 254);
        assert_eq!(u64::concat(vec![u64::MAX, 2]), 1);
        assert_eq!((Semi(i8::MIN) * Semi(-1)).into_inner(), i8::MIN);
    }

    #[test]
    fn semiring_operators() {
        assert_eq!(Semi(1) + Semi(2), Semi(3));
        assert_eq!(Semi(2) * Semi(3), Semi(6));
        assert_eq!((Semi(2) + Semi(3) * Semi(4)).into_inner(), 14);
    }

    #[test]
    fn option_semigroup() {
        assert_eq!(Some(1).combine(&Some(2)), Some(3));
        assert_eq!(Some(1).combine(&None), Some(1));
        assert_eq!(None.combine(&Some(4)), Some(4));
        assert_eq!(None::<i32>.combine(&None), None);
        assert_eq!(Option::<i32>::empty(), None);
    }

    #[test]
    fn vec_and_string_concatenate() {
        assert_eq!(vec![1, 2].combine(&vec![3]), vec![1, 2, 3]);
        assert_eq!("ab".to_string().combine(&"c".to_string()), "abc");

        let mut s = String::from("x");
        s.combine_assign(&"y".to_string());
        assert_eq!(s, "xy");
    }

    #[test]
    fn product_monoid() {
        assert_eq!(Product(3).combine(&Product(5)), Product(15));
        assert_eq!(Product::<u32>::empty(), Product(1));
        assert_eq!(Product::from(7).get(), &7);
    }

    fn assert_associative<S: Semigroup + PartialEq + std::fmt::Debug>(a: S, b: S, c: S) {
        assert_eq!(a.combine(&b).combine(&c), a.combine(&b.combine(&c)));
    }

    proptest! {
        #[test]
        fn integers_associate(
            a in -1_000_000i64..1_000_000,
            b in -1_000_000i64..1_000_000,
            c in -1_000_000i64..1_000_000,
        ) {
            assert_associative(a, b, c);
        }

        #[test]
        fn strings_associate(a in ".{0,8}", b in ".{0,8}", c in ".{0,8}") {
            assert_associative(a, b, c);
        }

        #[test]
        fn vecs_associate(
            a in prop::collection::vec(any::<u8>(), 0..6),
            b in prop::collection::vec(any::<u8>(), 0..6),
            c in prop::collection::vec(any::<u8>(), 0..6),
        ) {
            assert_associative(a, b, c);
        }

        #[test]
        fn options_associate(
            a in prop::option::of(-1000i32..1000),
            b in prop::option::of(-1000i32..1000),
            c in prop::option::of(-1000i32..1000),
        ) {
            assert_associative(a, b, c);
        }

        #[test]
        fn products_associate(a in -100i64..100, b in -100i64..100, c in -100i64..100) {
            assert_associative(Product(a), Product(b), Product(c));
        }

        #[test]
        fn integer_semiring_distributes(
            a in -1000i64..1000,
            b in -1000i64..1000,
            c in -1000i64..1000,
        ) {
            prop_assert_eq!(
                a.combine_multiplicate(&b.combine(&c)),
                a.combine_multiplicate(&b).combine(&a.combine_multiplicate(&c))
            );
            prop_assert_eq!(
                a.combine(&b).combine_multiplicate(&c),
                a.combine_multiplicate(&c).combine(&b.combine_multiplicate(&c))
            );
        }
    }
}
