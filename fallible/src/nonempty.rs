/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! An ordered sequence with at least one element.
//!
//! [`NonEmpty<T>`] is the error carrier for accumulated validation
//! failures: an `Invalid` value always holds at least one reason, so
//! the type keeps the head separate from the (possibly empty) tail
//! and no operation can produce an empty sequence.
//!
//! ```
//! use fallible::nel;
//!
//! let list = nel![1, 2, 3, 4, 5];
//! assert_eq!(*list.head(), 1);
//! assert_eq!(list.clone().fold(0, |acc, n| acc + n), 15);
//! assert_eq!(*list.map(|n| n + 1).head(), 2);
//! ```
//!
//! Multi-sequence combinators ([`NonEmpty::zip`],
//! [`NonEmpty::zip3`]) require aligned lengths. A mismatch is a
//! programming error and panics; [`NonEmpty::try_zip`] is the
//! checked variant.

use std::slice;

use algebra::Semigroup;
use serde::Deserialize;
use serde::Serialize;

/// Construction from an empty source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot build a non-empty sequence from an empty source")]
pub struct EmptyError;

/// Aligned combinators were given sequences of different lengths.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("length mismatch: expected {expected} elements, got {got}")]
pub struct LengthMismatch {
    /// Length of the receiver.
    pub expected: usize,
    /// Length of the offending argument.
    pub got: usize,
}

/// Builds a [`NonEmpty`] from one or more expressions.
///
/// ```
/// use fallible::nel;
///
/// let xs = nel!["a", "b"];
/// assert_eq!(xs.len(), 2);
/// ```
#[macro_export]
macro_rules! nel {
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::NonEmpty::from_parts($head, vec![$($tail),*])
    };
}

/// An ordered sequence guaranteed to contain at least one element.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<T>", try_from = "Vec<T>")]
#[serde(bound(serialize = "T: Clone + Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct NonEmpty<T> {
    head: T,
    tail: Vec<T>,
}

#[allow(clippy::len_without_is_empty)] // never empty
impl<T> NonEmpty<T> {
    /// A one-element sequence.
    pub fn new(head: T) -> Self {
        Self {
            head,
            tail: Vec::new(),
        }
    }

    /// A sequence from its first element and the rest.
    pub fn from_parts(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Returns `None` when `items` is empty.
    pub fn from_vec(mut items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        let tail = items.split_off(1);
        let head = items.pop()?;
        Some(Self { head, tail })
    }

    /// The first element.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Take the first element, dropping the rest.
    pub fn into_head(self) -> T {
        self.head
    }

    /// Everything after the first element.
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// The last element.
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Number of elements, always at least one.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Element at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&T> {
        match index {
            0 => Some(&self.head),
            n => self.tail.get(n - 1),
        }
    }

    /// Iterate over references in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: Some(&self.head),
            tail: self.tail.iter(),
        }
    }

    /// Apply `f` to every element, preserving order.
    pub fn map<U, F>(self, mut f: F) -> NonEmpty<U>
    where
        F: FnMut(T) -> U,
    {
        NonEmpty {
            head: f(self.head),
            tail: self.tail.into_iter().map(f).collect(),
        }
    }

    /// Apply `f` to every element and concatenate the results in
    /// order.
    pub fn flat_map<U, F>(self, mut f: F) -> NonEmpty<U>
    where
        F: FnMut(T) -> NonEmpty<U>,
    {
        let mut out = f(self.head);
        for item in self.tail {
            let NonEmpty { head, tail } = f(item);
            out.tail.push(head);
            out.tail.extend(tail);
        }
        out
    }

    /// Left fold from `init`.
    pub fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, f)
    }

    /// Left fold seeded with the head. Total, unlike
    /// [`Iterator::reduce`].
    pub fn reduce<F>(self, f: F) -> T
    where
        F: FnMut(T, T) -> T,
    {
        self.tail.into_iter().fold(self.head, f)
    }

    /// Concatenate `other` after `self`.
    pub fn append(mut self, other: NonEmpty<T>) -> Self {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }

    /// Pair elements position by position.
    ///
    /// # Panics
    ///
    /// If `other` has a different length. Use [`NonEmpty::try_zip`]
    /// to handle a mismatch.
    pub fn zip<U>(self, other: NonEmpty<U>) -> NonEmpty<(T, U)> {
        match self.try_zip(other) {
            Ok(zipped) => zipped,
            Err(e) => panic!("NonEmpty::zip: {}", e),
        }
    }

    /// Pair elements position by position, failing on a length
    /// mismatch.
    pub fn try_zip<U>(self, other: NonEmpty<U>) -> Result<NonEmpty<(T, U)>, LengthMismatch> {
        check_aligned(self.len(), other.len())?;
        Ok(NonEmpty {
            head: (self.head, other.head),
            tail: self.tail.into_iter().zip(other.tail).collect(),
        })
    }

    /// Combine three aligned sequences position by position.
    ///
    /// # Panics
    ///
    /// If the lengths differ.
    pub fn zip3<U, V, R, F>(self, b: NonEmpty<U>, c: NonEmpty<V>, mut f: F) -> NonEmpty<R>
    where
        F: FnMut(T, U, V) -> R,
    {
        let aligned = check_aligned(self.len(), b.len())
            .and(check_aligned(self.len(), c.len()));
        if let Err(e) = aligned {
            panic!("NonEmpty::zip3: {}", e);
        }
        self.zip(b).zip(c).map(|((t, u), v)| f(t, u, v))
    }

    /// Convert into a `Vec`, head first.
    pub fn into_vec(self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        out.push(self.head);
        out.extend(self.tail);
        out
    }
}

fn check_aligned(expected: usize, got: usize) -> Result<(), LengthMismatch> {
    if expected == got {
        Ok(())
    } else {
        Err(LengthMismatch { expected, got })
    }
}

impl<T: Clone> Semigroup for NonEmpty<T> {
    fn combine(&self, other: &Self) -> Self {
        self.clone().append(other.clone())
    }

    fn combine_assign(&mut self, other: &Self) {
        self.tail.push(other.head.clone());
        self.tail.extend_from_slice(&other.tail);
    }
}

impl<T> From<NonEmpty<T>> for Vec<T> {
    fn from(items: NonEmpty<T>) -> Self {
        items.into_vec()
    }
}

impl<T> TryFrom<Vec<T>> for NonEmpty<T> {
    type Error = EmptyError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        NonEmpty::from_vec(items).ok_or(EmptyError)
    }
}

impl<T> IntoIterator for NonEmpty<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<'a, T> IntoIterator for &'a NonEmpty<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`NonEmpty`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    head: Option<&'a T>,
    tail: slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.head.take().or_else(|| self.tail.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.head.is_some()) + self.tail.len();
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn head_fold_map() {
        let list = nel![1, 2, 3, 4, 5];
        assert_eq!(*list.head(), 1);
        assert_eq!(list.tail(), &[2, 3, 4, 5]);
        assert_eq!(*list.last(), 5);
        assert_eq!(list.clone().fold(0, |acc, n| acc + n), 15);
        assert_eq!(*list.map(|n| n + 1).head(), 2);
    }

    #[test]
    fn from_vec_rejects_empty() {
        assert_eq!(NonEmpty::<i32>::from_vec(vec![]), None);
        assert_eq!(NonEmpty::try_from(Vec::<i32>::new()), Err(EmptyError));
        assert_eq!(NonEmpty::from_vec(vec![7, 8]), Some(nel![7, 8]));
    }

    #[test]
    fn flat_map_is_cartesian() {
        let ones = nel![1, 2, 3];
        let twos = nel![4, 5];
        let combined = ones.flat_map(|one| twos.clone().map(|two| one + two));
        assert_eq!(combined, nel![5, 6, 6, 7, 7, 8]);
    }

    #[derive(Debug, PartialEq)]
    struct Person {
        id: u64,
        name: &'static str,
        year: u32,
    }

    #[test]
    fn zip3_builds_records() {
        let ids = nel![1, 2];
        let names = nel!["William Alvin Howard", "Haskell Curry"];
        let years = nel![1926, 1990];

        let people = ids.zip3(names, years, |id, name, year| Person { id, name, year });
        assert_eq!(people.len(), 2);
        assert_eq!(
            people.head(),
            &Person {
                id: 1,
                name: "William Alvin Howard",
                year: 1926
            }
        );
    }

    #[test]
    fn try_zip_reports_mismatch() {
        let err = nel![1, 2, 3].try_zip(nel!["a"]).unwrap_err();
        assert_eq!(
            err,
            LengthMismatch {
                expected: 3,
                got: 1
            }
        );
        assert_eq!(err.to_string(), "length mismatch: expected 3 elements, got 1");
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn zip_panics_on_mismatch() {
        let _ = nel![1, 2].zip(nel![1]);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn zip3_panics_on_mismatch() {
        let _ = nel![1, 2].zip3(nel![1, 2], nel![1], |a, b, c| a + b + c);
    }

    #[test]
    fn iter_and_get() {
        let list = nel!['a', 'b', 'c'];
        assert_eq!(list.iter().len(), 3);
        assert_eq!(list.iter().collect::<String>(), "abc");
        assert_eq!(list.get(0), Some(&'a'));
        assert_eq!(list.get(2), Some(&'c'));
        assert_eq!(list.get(3), None);
        assert_eq!(list.reduce(|a, _| a), 'a');
    }

    #[test]
    fn serde_as_plain_list() {
        let list = nel![1, 2, 3];
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: NonEmpty<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
        assert!(serde_json::from_str::<NonEmpty<i32>>("[]").is_err());
    }

    fn arb_nel() -> impl Strategy<Value = NonEmpty<u8>> {
        (any::<u8>(), prop::collection::vec(any::<u8>(), 0..5))
            .prop_map(|(head, tail)| NonEmpty::from_parts(head, tail))
    }

    proptest! {
        #[test]
        fn combine_is_associative(a in arb_nel(), b in arb_nel(), c in arb_nel()) {
            prop_assert_eq!(a.combine(&b).combine(&c), a.combine(&b.combine(&c)));
        }

        #[test]
        fn combine_concatenates_in_order(a in arb_nel(), b in arb_nel()) {
            let mut expected = a.clone().into_vec();
            expected.extend(b.clone());
            prop_assert_eq!(a.combine(&b).into_vec(), expected);
        }

        #[test]
        fn combine_assign_matches_combine(a in arb_nel(), b in arb_nel()) {
            let mut c = a.clone();
            c.combine_assign(&b);
            prop_assert_eq!(c, a.combine(&b));
        }
    }
}
