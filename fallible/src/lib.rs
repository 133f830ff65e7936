/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Typed failure handling: values that may be absent, may have failed,
//! or may have failed for several reasons at once.
//!
//! | shape | type | on failure |
//! |---|---|---|
//! | optional | `Option<T>` + [`OptionExt`] | `None` |
//! | fail fast | `Result<T, E>` + [`ResultExt`] | first `Err` wins |
//! | accumulating | [`Validated<E, T>`] / [`ValidatedNel`] | every `Invalid` is combined |
//!
//! Accumulated errors are carried in a [`NonEmpty`] list, whose
//! combination comes from the [`algebra::Semigroup`] instances. The
//! [`Strategy`] switch picks between fail-fast and accumulating
//! evaluation of the same rules.
//!
//! Sequential composition uses `?` inside [`either`] and [`option`]
//! blocks. [`catch`] and [`resolve`] bridge panics into values;
//! [`Eval`] runs deep recursion without growing the stack; [`Effect`]
//! defers a fallible block until it is run.

#![deny(missing_docs)]

pub mod catch;
pub mod config;
pub mod effect;
pub mod eval;
pub mod nonempty;
pub mod option;
pub mod result;
pub mod strategy;
pub mod validated;

pub use catch::catch;
pub use catch::resolve;
pub use catch::Caught;
pub use catch::Fatal;
pub use config::Config;
pub use config::ConfigError;
pub use effect::effect;
pub use effect::ensure;
pub use effect::ensure_some;
pub use effect::Effect;
pub use eval::Eval;
pub use nonempty::EmptyError;
pub use nonempty::LengthMismatch;
pub use nonempty::NonEmpty;
pub use option::from_nullable;
pub use option::none;
pub use option::option;
pub use option::some;
pub use option::OptionExt;
pub use result::cond;
pub use result::either;
pub use result::err;
pub use result::into_ok;
pub use result::ok;
pub use result::traverse;
pub use result::ErrIfNone;
pub use result::ResultExt;
pub use strategy::Strategy;
pub use validated::invalid;
pub use validated::invalid_nel;
pub use validated::valid;
pub use validated::Validated;
pub use validated::ValidatedNel;
