//! Shared stages for the integration tests.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use composable::{Label, Stage};
use thiserror::Error;

/// Errors raised by the fallible test stages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("cannot take the square root of {0}")]
    NegativeRoot(i64),

    #[error("{0} overflowed")]
    Overflow(&'static str),
}

pub fn square() -> Stage<i64, MathError> {
    Stage::fallible_named("square", |x: i64| {
        x.checked_mul(x).ok_or(MathError::Overflow("square"))
    })
}

pub fn double() -> Stage<i64, MathError> {
    Stage::fallible_named("double", |x: i64| {
        x.checked_mul(2).ok_or(MathError::Overflow("double"))
    })
}

pub fn add(n: i64) -> Stage<i64, MathError> {
    Stage::fallible_partial("add", [Label::value(n)], move |x: i64| {
        x.checked_add(n).ok_or(MathError::Overflow("add"))
    })
}

/// Integer square root that rejects negative input.
pub fn isqrt() -> Stage<i64, MathError> {
    Stage::fallible_named("isqrt", |x: i64| {
        if x < 0 {
            return Err(MathError::NegativeRoot(x));
        }
        // The float estimate can be off by one either way near i64::MAX.
        let mut root = (x as f64).sqrt() as i64;
        while root.checked_mul(root).is_none_or(|sq| sq > x) {
            root -= 1;
        }
        while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= x) {
            root += 1;
        }
        Ok(root)
    })
}

/// A pass-through stage that counts its calls.
pub fn counter(calls: &Arc<AtomicUsize>) -> Stage<i64, MathError> {
    let calls = Arc::clone(calls);
    Stage::named("counter", move |x: i64| {
        calls.fetch_add(1, Ordering::SeqCst);
        x
    })
}
