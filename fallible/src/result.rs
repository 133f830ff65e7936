/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Right-biased success/failure.
//!
//! `std::result::Result<T, E>` is the Either of this crate: `map`,
//! `and_then` and `unwrap_or_else` act on `Ok` and pass `Err` through
//! unchanged, and `map_err` does the converse. [`ResultExt`] supplies
//! the recovery and case-analysis combinators std does not, and
//! [`traverse`] and [`either`] give short-circuiting composition
//! over many steps.
//!
//! ```
//! use fallible::err;
//! use fallible::ok;
//!
//! assert_eq!(ok::<_, &str>(5).and_then(|x| ok(x + 1)), Ok(6));
//! assert_eq!(err::<i32, _>("e").and_then(|x| ok(x + 1)), Err("e"));
//! ```

use std::convert::Infallible;

use crate::nonempty::NonEmpty;
use crate::validated::Validated;
use crate::validated::ValidatedNel;

/// `Ok(value)`.
pub fn ok<T, E>(value: T) -> Result<T, E> {
    Ok(value)
}

/// `Err(error)`.
pub fn err<T, E>(error: E) -> Result<T, E> {
    Err(error)
}

/// `Ok(if_true())` when `flag` holds, `Err(if_false())` otherwise.
/// Only the selected branch is evaluated.
pub fn cond<T, E>(
    flag: bool,
    if_false: impl FnOnce() -> E,
    if_true: impl FnOnce() -> T,
) -> Result<T, E> {
    if flag {
        Ok(if_true())
    } else {
        Err(if_false())
    }
}

/// Applies `f` to each item in order and collects the successes.
///
/// Stops at the first `Err` and returns it; items after the failing
/// one are never passed to `f`.
///
/// ```
/// use fallible::traverse;
///
/// let parsed = traverse(["1", "2", "3"], |s| s.parse::<i32>());
/// assert_eq!(parsed, Ok(vec![1, 2, 3]));
/// assert!(traverse(["1", "x", "3"], |s| s.parse::<i32>()).is_err());
/// ```
pub fn traverse<I, A, B, E, F>(items: I, mut f: F) -> Result<Vec<B>, E>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Result<B, E>,
{
    let items = items.into_iter();
    let mut out = Vec::with_capacity(items.size_hint().0);
    for (index, item) in items.enumerate() {
        match f(item) {
            Ok(value) => out.push(value),
            Err(e) => {
                tracing::debug!(index, "traverse short-circuited");
                return Err(e);
            }
        }
    }
    Ok(out)
}

/// Runs `block` as a composition over fallible steps.
///
/// Every `?` inside the block binds a step: on `Err` the block ends
/// immediately with that error (converted with `From` into the
/// block's error type) and no later statement runs; on `Ok` the
/// unwrapped value is available to the rest of the block. Because of
/// that conversion the block's error type has to be named, either on
/// the binding or with a turbofish.
///
/// ```
/// use fallible::either;
///
/// #[derive(Debug, PartialEq)]
/// struct NotFound;
///
/// fn lookup(key: &str) -> Result<u32, NotFound> {
///     match key {
///         "a" => Ok(1),
///         "b" => Ok(2),
///         _ => Err(NotFound),
///     }
/// }
///
/// let found: Result<u32, NotFound> = either(|| {
///     let a = lookup("a")?;
///     let b = lookup("b")?;
///     Ok(a + b)
/// });
/// assert_eq!(found, Ok(3));
///
/// let missing = either::<_, NotFound, _>(|| {
///     let a = lookup("a")?;
///     let z = lookup("z")?;
///     Ok(a + z)
/// });
/// assert_eq!(missing, Err(NotFound));
/// ```
pub fn either<T, E, F>(block: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    block()
}

/// Combinators `Result` lacks.
pub trait ResultExt<T, E>: Sized {
    /// Total case analysis.
    fn fold<R>(self, if_err: impl FnOnce(E) -> R, if_ok: impl FnOnce(T) -> R) -> R;

    /// Recover every failure; the result has no failure channel.
    fn handle_error(self, f: impl FnOnce(E) -> T) -> Result<T, Infallible>;

    /// Recover with a step that may itself fail with a different
    /// error type.
    fn handle_error_with<F>(self, f: impl FnOnce(E) -> Result<T, F>) -> Result<T, F>;

    /// The success value, or `f` applied to the error.
    fn get_or_handle(self, f: impl FnOnce(E) -> T) -> T;

    /// Exchange the channels.
    fn swap(self) -> Result<E, T>;

    /// Whether this is `Ok` holding a value equal to `value`.
    fn ok_contains(&self, value: &T) -> bool
    where
        T: PartialEq;

    /// Accumulating view with the error as a one-element sequence.
    fn into_validated_nel(self) -> ValidatedNel<E, T>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn fold<R>(self, if_err: impl FnOnce(E) -> R, if_ok: impl FnOnce(T) -> R) -> R {
        match self {
            Ok(value) => if_ok(value),
            Err(e) => if_err(e),
        }
    }

    fn handle_error(self, f: impl FnOnce(E) -> T) -> Result<T, Infallible> {
        Ok(self.unwrap_or_else(f))
    }

    fn handle_error_with<F>(self, f: impl FnOnce(E) -> Result<T, F>) -> Result<T, F> {
        self.or_else(f)
    }

    fn get_or_handle(self, f: impl FnOnce(E) -> T) -> T {
        self.unwrap_or_else(f)
    }

    fn swap(self) -> Result<E, T> {
        match self {
            Ok(value) => Err(value),
            Err(e) => Ok(e),
        }
    }

    fn ok_contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(self, Ok(v) if v == value)
    }

    fn into_validated_nel(self) -> ValidatedNel<E, T> {
        match self {
            Ok(value) => Validated::Valid(value),
            Err(e) => Validated::Invalid(NonEmpty::new(e)),
        }
    }
}

/// Failure when an `Ok` holds no value.
pub trait ErrIfNone<T, E> {
    /// `Ok(Some(v))` becomes `Ok(v)`, `Ok(None)` becomes
    /// `Err(default())`, and `Err` passes through.
    fn err_if_none(self, default: impl FnOnce() -> E) -> Result<T, E>;
}

impl<T, E> ErrIfNone<T, E> for Result<Option<T>, E> {
    fn err_if_none(self, default: impl FnOnce() -> E) -> Result<T, E> {
        self.and_then(|value| value.ok_or_else(default))
    }
}

/// Unwraps a result whose failure channel is uninhabited.
pub fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
