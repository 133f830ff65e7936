/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Deferred fallible computations.
//!
//! An [`Effect<E, A>`] is a composition block that has been built but
//! not yet run. Inside the body, `?` binds a step and returning `Err`
//! short-circuits (the "shift" of the block); [`ensure`] and
//! [`ensure_some`] express guards in the same style. Nothing runs
//! until [`Effect::run`], which consumes the effect, so an effect
//! can be run at most once.

use std::convert::Infallible;
use std::fmt;

use crate::catch::catch;
use crate::catch::Caught;

/// `Ok(())` when `condition` holds, `Err(error())` otherwise.
pub fn ensure<E>(condition: bool, error: impl FnOnce() -> E) -> Result<(), E> {
    if condition {
        Ok(())
    } else {
        Err(error())
    }
}

/// The value inside `value`, or `Err(error())` when absent.
pub fn ensure_some<T, E>(value: Option<T>, error: impl FnOnce() -> E) -> Result<T, E> {
    value.ok_or_else(error)
}

/// Build an effect from a block.
///
/// ```
/// use fallible::effect;
/// use fallible::ensure;
///
/// #[derive(Debug, PartialEq)]
/// struct EmptyPath;
///
/// let read = |path: &'static str| effect(move || ensure(!path.is_empty(), || EmptyPath));
///
/// assert_eq!(read("").run(), Err(EmptyPath));
/// assert_eq!(read("I'm not empty").run(), Ok(()));
/// ```
pub fn effect<E: 'static, A: 'static>(
    body: impl FnOnce() -> Result<A, E> + 'static,
) -> Effect<E, A> {
    Effect::new(body)
}

/// A computation that, when run, succeeds with `A` or fails with `E`.
pub struct Effect<E, A> {
    body: Box<dyn FnOnce() -> Result<A, E>>,
}

impl<E, A> fmt::Debug for Effect<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Effect").finish_non_exhaustive()
    }
}

impl<E: 'static, A: 'static> Effect<E, A> {
    /// See [`effect`].
    pub fn new(body: impl FnOnce() -> Result<A, E> + 'static) -> Self {
        Self {
            body: Box::new(body),
        }
    }

    /// An effect that succeeds with `value`.
    pub fn succeed(value: A) -> Self {
        Self::new(move || Ok(value))
    }

    /// An effect that fails with `error`.
    pub fn fail(error: E) -> Self {
        Self::new(move || Err(error))
    }

    /// Run the body.
    pub fn run(self) -> Result<A, E> {
        (self.body)()
    }

    /// Transform the success value.
    pub fn map<B: 'static>(self, f: impl FnOnce(A) -> B + 'static) -> Effect<E, B> {
        Effect::new(move || self.run().map(f))
    }

    /// Transform the failure.
    pub fn map_err<F: 'static>(self, f: impl FnOnce(E) -> F + 'static) -> Effect<F, A> {
        Effect::new(move || self.run().map_err(f))
    }

    /// Sequence `f` after this effect; `f` does not run on failure.
    pub fn flat_map<B: 'static>(
        self,
        f: impl FnOnce(A) -> Effect<E, B> + 'static,
    ) -> Effect<E, B> {
        Effect::new(move || self.run().and_then(|a| f(a).run()))
    }

    /// Recover every failure.
    pub fn handle_error(self, f: impl FnOnce(E) -> A + 'static) -> Effect<Infallible, A> {
        Effect::new(move || Ok(self.run().unwrap_or_else(f)))
    }

    /// Recover with an effect that may fail with a different error.
    pub fn handle_error_with<F: 'static>(
        self,
        f: impl FnOnce(E) -> Effect<F, A> + 'static,
    ) -> Effect<F, A> {
        Effect::new(move || match self.run() {
            Ok(value) => Ok(value),
            Err(e) => f(e).run(),
        })
    }

    /// Fold both outcomes into a success.
    pub fn redeem<B: 'static>(
        self,
        recover: impl FnOnce(E) -> B + 'static,
        transform: impl FnOnce(A) -> B + 'static,
    ) -> Effect<Infallible, B> {
        Effect::new(move || Ok(self.run().map_or_else(recover, transform)))
    }

    /// Capture panics from the body as `Ok(Err(Caught))`; structural
    /// failures stay in the error channel.
    pub fn attempt(self) -> Effect<E, Result<A, Caught>> {
        Effect::new(move || match catch(move || self.run()) {
            Ok(Ok(value)) => Ok(Ok(value)),
            Ok(Err(e)) => Err(e),
            Err(caught) => Ok(Err(caught)),
        })
    }
}
