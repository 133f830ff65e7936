/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Choosing between fail-fast and error-accumulating evaluation.
//!
//! The same rule set can be evaluated two ways. [`Strategy::FailFast`]
//! stops at the first failure; [`Strategy::ErrorAccumulation`] runs
//! everything and reports every failure in declaration order. Both
//! report through `Result<_, NonEmpty<E>>` so callers handle one
//! shape regardless of the strategy in effect.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::config::ConfigError;
use crate::nonempty::NonEmpty;
use crate::result;
use crate::validated;
use crate::validated::Validated;
use crate::validated::ValidatedNel;

/// How a batch of checks reports failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Stop at the first failure.
    FailFast,
    /// Run every check and report all failures.
    #[default]
    ErrorAccumulation,
}

impl Strategy {
    fn as_str(self) -> &'static str {
        match self {
            Strategy::FailFast => "fail_fast",
            Strategy::ErrorAccumulation => "error_accumulation",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fail_fast" => Ok(Strategy::FailFast),
            "error_accumulation" => Ok(Strategy::ErrorAccumulation),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

/// A check applied to a subject.
pub type Rule<'a, A, E> = &'a dyn Fn(&A) -> Result<(), E>;

/// Map `f` over `items` under `strategy`.
///
/// With [`Strategy::FailFast`] the first invalid item stops the
/// traversal and its errors are returned. With
/// [`Strategy::ErrorAccumulation`] every item is visited and the errors
/// of all invalid items are concatenated in order.
pub fn traverse<I, A, B, E, F>(
    strategy: Strategy,
    items: I,
    mut f: F,
) -> Result<Vec<B>, NonEmpty<E>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> ValidatedNel<E, B>,
    E: Clone,
{
    match strategy {
        Strategy::FailFast => result::traverse(items, |a| f(a).into_result()),
        Strategy::ErrorAccumulation => validated::traverse(items, f).into_result(),
    }
}

/// Evaluate `rules` against `subject` under `strategy`.
///
/// ```
/// use fallible::strategy::check;
/// use fallible::strategy::Rule;
/// use fallible::Strategy;
///
/// let not_empty = |s: &&str| if s.is_empty() { Err("empty") } else { Ok(()) };
/// let has_at = |s: &&str| if s.contains('@') { Ok(()) } else { Err("no @") };
/// let short = |s: &&str| if s.len() <= 3 { Ok(()) } else { Err("too long") };
/// let rules: [Rule<&str, &str>; 3] = [&not_empty, &has_at, &short];
///
/// let errors = check(Strategy::ErrorAccumulation, &"nowhere", &rules).unwrap_err();
/// assert_eq!(errors.into_vec(), vec!["no @", "too long"]);
///
/// let errors = check(Strategy::FailFast, &"nowhere", &rules).unwrap_err();
/// assert_eq!(errors.into_vec(), vec!["no @"]);
/// ```
pub fn check<A, E>(
    strategy: Strategy,
    subject: &A,
    rules: &[Rule<'_, A, E>],
) -> Result<(), NonEmpty<E>>
where
    E: Clone,
{
    let outcome = match strategy {
        Strategy::FailFast => rules
            .iter()
            .try_for_each(|rule| rule(subject).map_err(NonEmpty::new)),
        Strategy::ErrorAccumulation => validated::traverse(rules, |rule| {
            Validated::from(rule(subject)).map_err(NonEmpty::new)
        })
        .map(|_| ())
        .into_result(),
    };
    if let Err(errors) = &outcome {
        tracing::debug!(%strategy, failed = errors.len(), "rule check failed");
    }
    outcome
}
