//! Pipelines of unary functions.
//!
//! A [`Composable`] wraps an ordered sequence of [`Stage`]s and can be called
//! like a single function. Pipelines are combined with named methods rather
//! than operators:
//!
//! - [`Composable::compose_after`] — `f ∘ g`, runs `g` then `f`
//! - [`Composable::compose_before`] — the mirror of `compose_after`
//! - [`Composable::pipe_into`] — left-to-right, runs `self` then `other`
//! - [`Composable::pipe_from`] — composes a function in front, or runs a value
//!
//! Composition operands are an explicit [`Operand`]; passing a plain value
//! where a function is required fails with [`Error::InvalidArgument`].
//!
//! Each stage carries a [`Label`] so a pipeline can render itself, for
//! example `double | partial(add, 1) | square`.

mod composable;
mod error;
mod label;
pub mod math;
mod operand;
mod stage;

pub use composable::Composable;
pub use error::{Error, Operation};
pub use label::{Label, Style, StyleError};
pub use operand::{Operand, Piped};
pub use stage::Stage;
