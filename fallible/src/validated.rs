/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Success, or failure that accumulates.
//!
//! [`Validated<E, T>`] is the error-accumulating counterpart of
//! `Result<T, E>`. Where `and_then` on a `Result` discards every step
//! after the first failure, combining two `Invalid` values here keeps
//! both failures, joined with the error type's [`Semigroup`]
//! operation (left operand first). The usual error type is a
//! [`NonEmpty`] list of reasons, spelled [`ValidatedNel`].
//!
//! ```
//! use fallible::invalid_nel;
//! use fallible::nel;
//! use fallible::valid;
//! use fallible::Validated;
//! use fallible::ValidatedNel;
//!
//! let name: ValidatedNel<&str, &str> = valid("ada");
//! let age: ValidatedNel<&str, u32> = invalid_nel("age missing");
//! let email: ValidatedNel<&str, &str> = invalid_nel("no @");
//!
//! let both = age.zip_by(email, |a, e| (a, e));
//! assert_eq!(both, Validated::Invalid(nel!["age missing", "no @"]));
//! assert!(name.is_valid());
//! ```

use algebra::Semigroup;
use serde::Deserialize;
use serde::Serialize;

use crate::nonempty::NonEmpty;

/// A success value or an accumulated failure.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Validated<E, T> {
    /// Every check passed.
    Valid(T),
    /// At least one check failed.
    Invalid(E),
}

/// A [`Validated`] whose failure is a non-empty list of reasons.
pub type ValidatedNel<E, T> = Validated<NonEmpty<E>, T>;

/// `Valid(value)`.
pub fn valid<E, T>(value: T) -> Validated<E, T> {
    Validated::Valid(value)
}

/// `Invalid(error)`.
pub fn invalid<E, T>(error: E) -> Validated<E, T> {
    Validated::Invalid(error)
}

/// `Invalid` with a single reason.
pub fn invalid_nel<E, T>(error: E) -> ValidatedNel<E, T> {
    Validated::Invalid(NonEmpty::new(error))
}

fn accumulate<E: Semigroup>(acc: &mut Option<E>, error: E) {
    *acc = Some(match acc.take() {
        Some(mut errors) => {
            errors.combine_assign(&error);
            errors
        }
        None => error,
    });
}

impl<E, T> Validated<E, T> {
    /// Whether this is `Valid`.
    pub fn is_valid(&self) -> bool {
        matches!(self, Validated::Valid(_))
    }

    /// Whether this is `Invalid`.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Borrow both channels.
    pub fn as_ref(&self) -> Validated<&E, &T> {
        match self {
            Validated::Valid(value) => Validated::Valid(value),
            Validated::Invalid(e) => Validated::Invalid(e),
        }
    }

    /// Transform the success value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validated<E, U> {
        match self {
            Validated::Valid(value) => Validated::Valid(f(value)),
            Validated::Invalid(e) => Validated::Invalid(e),
        }
    }

    /// Transform the failure.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Validated<F, T> {
        match self {
            Validated::Valid(value) => Validated::Valid(value),
            Validated::Invalid(e) => Validated::Invalid(f(e)),
        }
    }

    /// Total case analysis.
    pub fn fold<R>(self, if_invalid: impl FnOnce(E) -> R, if_valid: impl FnOnce(T) -> R) -> R {
        match self {
            Validated::Valid(value) => if_valid(value),
            Validated::Invalid(e) => if_invalid(e),
        }
    }

    /// Sequential bind. Short-circuits like `Result::and_then`; use
    /// [`Validated::zip_by`] to accumulate independent checks.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Validated<E, U>) -> Validated<E, U> {
        match self {
            Validated::Valid(value) => f(value),
            Validated::Invalid(e) => Validated::Invalid(e),
        }
    }

    /// Replace the failure with the outcome of `f`, which may
    /// recover or fail with a different error.
    pub fn handle_error_with<F>(self, f: impl FnOnce(E) -> Validated<F, T>) -> Validated<F, T> {
        match self {
            Validated::Valid(value) => Validated::Valid(value),
            Validated::Invalid(e) => f(e),
        }
    }

    /// Combine with an independent check. Both valid: `f` of both
    /// values. Otherwise every present error, `self`'s first.
    pub fn zip_by<U, R>(
        self,
        other: Validated<E, U>,
        f: impl FnOnce(T, U) -> R,
    ) -> Validated<E, R>
    where
        E: Semigroup,
    {
        match (self, other) {
            (Validated::Valid(a), Validated::Valid(b)) => Validated::Valid(f(a, b)),
            (Validated::Invalid(e), Validated::Valid(_))
            | (Validated::Valid(_), Validated::Invalid(e)) => Validated::Invalid(e),
            (Validated::Invalid(mut left), Validated::Invalid(right)) => {
                left.combine_assign(&right);
                Validated::Invalid(left)
            }
        }
    }

    /// Lossless conversion: `Valid(v)` to `Ok(v)`, `Invalid(e)` to
    /// `Err(e)` with every accumulated error kept.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validated::Valid(value) => Ok(value),
            Validated::Invalid(e) => Err(e),
        }
    }

    /// The success value, if any.
    pub fn ok(self) -> Option<T> {
        self.into_result().ok()
    }
}

impl<E, T> ValidatedNel<E, T> {
    /// Lossy conversion keeping only the first error; the remaining
    /// errors are dropped.
    pub fn into_first_error(self) -> Result<T, E> {
        self.into_result().map_err(NonEmpty::into_head)
    }
}

/// Combine three independent checks. Errors are accumulated in
/// argument order.
pub fn zip3<E, A, B, C, R>(
    a: Validated<E, A>,
    b: Validated<E, B>,
    c: Validated<E, C>,
    f: impl FnOnce(A, B, C) -> R,
) -> Validated<E, R>
where
    E: Semigroup,
{
    a.zip_by(b, |a, b| (a, b)).zip_by(c, |(a, b), c| f(a, b, c))
}

/// Applies `f` to *every* item, without short-circuiting.
///
/// All valid: `Valid` of the successes in order. Otherwise `Invalid`
/// of every failing item's errors combined in the original order.
pub fn traverse<I, A, B, E, F>(items: I, mut f: F) -> Validated<E, Vec<B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Validated<E, B>,
    E: Semigroup,
{
    let mut values = Vec::new();
    let mut errors = None;
    let mut failed = 0usize;
    for item in items {
        match f(item) {
            Validated::Valid(value) if errors.is_none() => values.push(value),
            Validated::Valid(_) => {}
            Validated::Invalid(e) => {
                failed += 1;
                accumulate(&mut errors, e);
            }
        }
    }
    match errors {
        None => Validated::Valid(values),
        Some(e) => {
            tracing::debug!(failed, "traverse accumulated failures");
            Validated::Invalid(e)
        }
    }
}

/// [`traverse`] with the identity function.
pub fn sequence<I, E, T>(items: I) -> Validated<E, Vec<T>>
where
    I: IntoIterator<Item = Validated<E, T>>,
    E: Semigroup,
{
    traverse(items, |v| v)
}

impl<E: Semigroup, T> FromIterator<Validated<E, T>> for Validated<E, Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Validated<E, T>>>(iter: I) -> Self {
        sequence(iter)
    }
}

impl<E, T> From<Result<T, E>> for Validated<E, T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validated::Valid(value),
            Err(e) => Validated::Invalid(e),
        }
    }
}

impl<E, T> From<Validated<E, T>> for Result<T, E> {
    fn from(validated: Validated<E, T>) -> Self {
        validated.into_result()
    }
}

/// Valid values combine with `T`'s operation; any failure wins and
/// failures combine with `E`'s.
impl<E, T> Semigroup for Validated<E, T>
where
    E: Semigroup + Clone,
    T: Semigroup + Clone,
{
    fn combine(&self, other: &Self) -> Self {
        match (self, other) {
            (Validated::Valid(a), Validated::Valid(b)) => Validated::Valid(a.combine(b)),
            (Validated::Invalid(e), Validated::Valid(_))
            | (Validated::Valid(_), Validated::Invalid(e)) => Validated::Invalid(e.clone()),
            (Validated::Invalid(a), Validated::Invalid(b)) => Validated::Invalid(a.combine(b)),
        }
    }
}
