/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Stack-safe lazy evaluation.
//!
//! An [`Eval<A>`] describes how to compute an `A` as data: a ready
//! value, a suspended thunk, or a bind of one step into the next.
//! [`Eval::value`] drives those steps from an explicit continuation
//! stack on the heap, so chains of any depth (including mutual
//! recursion through [`Eval::defer`] or [`Eval::flat_map`]) run in
//! constant native stack.
//!
//! ```
//! use fallible::Eval;
//!
//! fn even(n: u32) -> Eval<bool> {
//!     Eval::always(move || n == 0).flat_map(move |zero| {
//!         if zero { Eval::now(true) } else { odd(n - 1) }
//!     })
//! }
//!
//! fn odd(n: u32) -> Eval<bool> {
//!     Eval::always(move || n == 0).flat_map(move |zero| {
//!         if zero { Eval::now(false) } else { even(n - 1) }
//!     })
//! }
//!
//! assert!(!odd(100_000).value());
//! ```

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::mem;

type Erased = Box<dyn Any>;
type Continuation = Box<dyn FnOnce(Erased) -> Step>;

enum Step {
    Done(Erased),
    Suspend(Box<dyn FnOnce() -> Step>),
    Bind(Inner, Continuation),
}

/// The step a `Bind` runs first. Left-nested binds form a chain as
/// long as the program, so it is unlinked in a loop when dropped.
struct Inner(Box<Step>);

impl Inner {
    fn new(step: Step) -> Self {
        Self(Box::new(step))
    }

    fn take(&mut self) -> Step {
        mem::replace(&mut *self.0, Step::Done(Box::new(())))
    }

    fn into_step(mut self) -> Step {
        self.take()
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        let mut next = self.take();
        while let Step::Bind(inner, _) = &mut next {
            let step = inner.take();
            next = step;
        }
    }
}

/// A lazily evaluated, stack-safe computation producing an `A`.
pub struct Eval<A> {
    step: Step,
    _marker: PhantomData<fn() -> A>,
}

impl<A> fmt::Debug for Eval<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.step {
            Step::Done(_) => "Done",
            Step::Suspend(_) => "Suspend",
            Step::Bind(..) => "Bind",
        };
        f.debug_struct("Eval").field("step", &state).finish()
    }
}

fn downcast<A: 'static>(value: Erased) -> A {
    match value.downcast::<A>() {
        Ok(value) => *value,
        // Each continuation is typed by the `flat_map` that built it.
        Err(_) => unreachable!("eval step produced a value of the wrong type"),
    }
}

impl<A: 'static> Eval<A> {
    fn from_step(step: Step) -> Self {
        Self {
            step,
            _marker: PhantomData,
        }
    }

    /// An already computed value.
    pub fn now(value: A) -> Self {
        Self::from_step(Step::Done(Box::new(value)))
    }

    /// A value computed by `f` when the evaluation is driven.
    pub fn always(f: impl FnOnce() -> A + 'static) -> Self {
        Self::from_step(Step::Suspend(Box::new(move || Step::Done(Box::new(f())))))
    }

    /// A computation produced by `f` when the evaluation is driven.
    /// Use this to break direct recursion.
    pub fn defer(f: impl FnOnce() -> Eval<A> + 'static) -> Self {
        Self::from_step(Step::Suspend(Box::new(move || f().step)))
    }

    /// Sequence `f` after this computation.
    pub fn flat_map<B: 'static>(self, f: impl FnOnce(A) -> Eval<B> + 'static) -> Eval<B> {
        Eval::from_step(Step::Bind(
            Inner::new(self.step),
            Box::new(move |value| f(downcast(value)).step),
        ))
    }

    /// Transform the result.
    pub fn map<B: 'static>(self, f: impl FnOnce(A) -> B + 'static) -> Eval<B> {
        self.flat_map(move |a| Eval::now(f(a)))
    }

    /// Run the computation to completion.
    pub fn value(self) -> A {
        let mut current = self.step;
        let mut stack: Vec<Continuation> = Vec::new();
        loop {
            current = match current {
                Step::Done(value) => match stack.pop() {
                    Some(k) => k(value),
                    None => return downcast(value),
                },
                Step::Suspend(thunk) => thunk(),
                Step::Bind(inner, k) => {
                    stack.push(k);
                    inner.into_step()
                }
            };
        }
    }
}
