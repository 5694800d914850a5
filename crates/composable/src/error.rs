use std::fmt;

use thiserror::Error;

/// Errors raised while building a [`Composable`](crate::Composable).
///
/// Stage failures during [`call`](crate::Composable::call) are never wrapped
/// in this type; they reach the caller as the stage's own error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An operand that had to be a function or pipeline was a plain value.
    #[error("{0}: input must be callable")]
    InvalidArgument(Operation),
}

/// The operation that rejected an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// [`Composable::try_new`](crate::Composable::try_new).
    Construct,

    /// [`compose_after`](crate::Composable::compose_after) or
    /// [`compose_before`](crate::Composable::compose_before).
    Compose,

    /// [`pipe_into`](crate::Composable::pipe_into).
    Pipe,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Construct => "construct",
            Operation::Compose => "compose",
            Operation::Pipe => "pipe",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_operation() {
        assert_eq!(
            Error::InvalidArgument(Operation::Construct).to_string(),
            "construct: input must be callable"
        );
        assert_eq!(
            Error::InvalidArgument(Operation::Pipe).to_string(),
            "pipe: input must be callable"
        );
    }
}
