/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The single bridge from panics to structural failures.
//!
//! Everything else in this crate represents failure as data. [`catch`]
//! is where an unexpected panic is turned into an `Err(Caught)`.
//! A panic raised with a [`Fatal`] payload is never captured and
//! keeps unwinding; aborts (out of memory, stack overflow) terminate
//! the process before any handler could observe them.

use std::any::Any;
use std::panic;
use std::panic::AssertUnwindSafe;

/// A panic captured by [`catch`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("caught panic: {message}")]
pub struct Caught {
    message: String,
}

impl Caught {
    /// Wrap a message as if it had been caught.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The panic message, or a placeholder for non-string payloads.
    pub fn message(&self) -> &str {
        &self.message
    }

    fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "<non-string panic payload>".to_string()
        };
        Self { message }
    }
}

/// Panic payload that [`catch`] re-raises instead of capturing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fatal(pub String);

impl Fatal {
    /// Panic with a `Fatal` payload.
    pub fn raise(reason: impl Into<String>) -> ! {
        panic::panic_any(Fatal(reason.into()))
    }
}

/// Run `thunk`, turning a panic into `Err(Caught)`.
///
/// The thunk is treated as unwind safe: it must not leave shared
/// state half-updated when it panics.
///
/// ```
/// use fallible::catch;
///
/// let boom = catch(|| -> i32 { panic!("blow up!") });
/// assert_eq!(boom.unwrap_err().message(), "blow up!");
/// assert_eq!(catch(|| 1 + 1), Ok(2));
/// ```
pub fn catch<T>(thunk: impl FnOnce() -> T) -> Result<T, Caught> {
    match panic::catch_unwind(AssertUnwindSafe(thunk)) {
        Ok(value) => Ok(value),
        Err(payload) => {
            if payload.is::<Fatal>() {
                panic::resume_unwind(payload);
            }
            let caught = Caught::from_payload(payload);
            tracing::warn!(panic = caught.message(), "captured panic");
            Err(caught)
        }
    }
}

/// Run a fallible computation and dispatch every outcome to a handler.
///
/// - `Ok(t)` goes to `success`, `Err(e)` to `error`, a captured panic
///   to `throwable`.
/// - If `success` or `error` fails, its failure goes to `throwable`.
/// - If `throwable` fails, its failure goes to `unrecoverable`.
///
/// Handlers run under [`catch`] as well, so a panic in one is routed
/// the same way as an explicit `Err`.
pub fn resolve<T, E, R>(
    f: impl FnOnce() -> Result<T, E>,
    success: impl FnOnce(T) -> Result<R, Caught>,
    error: impl FnOnce(E) -> Result<R, Caught>,
    throwable: impl FnOnce(Caught) -> Result<R, Caught>,
    unrecoverable: impl FnOnce(Caught) -> R,
) -> R {
    let handled = match catch(f) {
        Ok(Ok(value)) => catch(|| success(value)).and_then(|r| r),
        Ok(Err(e)) => catch(|| error(e)).and_then(|r| r),
        Err(caught) => Err(caught),
    };
    match handled {
        Ok(out) => out,
        Err(caught) => match catch(|| throwable(caught)).and_then(|r| r) {
            Ok(out) => out,
            Err(caught) => {
                tracing::warn!(panic = caught.message(), "unrecoverable failure");
                unrecoverable(caught)
            }
        },
    }
}
