/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Presence or absence of a value.
//!
//! `std::option::Option` already provides `map`, `and_then` (flat
//! map), `unwrap_or_else` (lazy default) and `zip`. This module adds
//! the remaining combinators as [`OptionExt`], constructors, and the
//! [`option`] composition block.

/// `Some(value)`.
pub fn some<T>(value: T) -> Option<T> {
    Some(value)
}

/// `None`, with the element type chosen by the caller.
pub fn none<T>() -> Option<T> {
    None
}

/// Lift a possibly-absent value into an `Option`. Absence is already
/// `None` in Rust, so the value passes through unchanged.
///
/// ```
/// use fallible::from_nullable;
///
/// assert_eq!(from_nullable(None::<&str>).unwrap_or_else(|| "x"), "x");
/// assert_eq!(from_nullable(Some("y")).unwrap_or_else(|| "x"), "y");
/// ```
pub fn from_nullable<T>(value: Option<T>) -> Option<T> {
    value
}

/// Present only if all three inputs are present.
pub fn zip3<A, B, C, R, F>(a: Option<A>, b: Option<B>, c: Option<C>, f: F) -> Option<R>
where
    F: FnOnce(A, B, C) -> R,
{
    match (a, b, c) {
        (Some(a), Some(b), Some(c)) => Some(f(a, b, c)),
        _ => None,
    }
}

/// Runs `block` as a composition over optional steps.
///
/// Every `?` inside the block is a bind: the first absent step ends
/// the block with `None` and no later statement runs.
///
/// ```
/// use fallible::option;
///
/// let sum = option(|| {
///     let a = Some(1)?;
///     let b = Some(1 + a)?;
///     let c = Some(1 + b)?;
///     Some(a + b + c)
/// });
/// assert_eq!(sum, Some(6));
/// ```
pub fn option<T, F>(block: F) -> Option<T>
where
    F: FnOnce() -> Option<T>,
{
    block()
}

/// Combinators `Option` lacks.
pub trait OptionExt<T> {
    /// Total case analysis: `if_none` when absent, `if_some` on the
    /// value otherwise.
    fn fold<R>(self, if_none: impl FnOnce() -> R, if_some: impl FnOnce(T) -> R) -> R;

    /// Present only if both are present, combined by `f`.
    fn zip_by<U, R>(self, other: Option<U>, f: impl FnOnce(T, U) -> R) -> Option<R>;
}

impl<T> OptionExt<T> for Option<T> {
    fn fold<R>(self, if_none: impl FnOnce() -> R, if_some: impl FnOnce(T) -> R) -> R {
        match self {
            Some(value) => if_some(value),
            None => if_none(),
        }
    }

    fn zip_by<U, R>(self, other: Option<U>, f: impl FnOnce(T, U) -> R) -> Option<R> {
        self.zip(other).map(|(a, b)| f(a, b))
    }
}
