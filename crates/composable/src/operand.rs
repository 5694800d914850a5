use crate::{Composable, Stage};

/// Anything that can appear on the other side of a composition.
///
/// Construction and composition accept only `Function` and `Pipeline`;
/// a `Value` is rejected with [`Error::InvalidArgument`](crate::Error).
/// [`Composable::pipe_from`] is the one place a `Value` is welcome: it is
/// run through the pipeline immediately.
#[derive(Debug, Clone)]
pub enum Operand<T, E> {
    /// A single stage.
    Function(Stage<T, E>),

    /// An existing pipeline, whose stages are copied.
    Pipeline(Composable<T, E>),

    /// A plain input value.
    Value(T),
}

impl<T: 'static, E: 'static> Operand<T, E> {
    /// Wraps an infallible function as an anonymous stage operand.
    pub fn function<F>(function: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        Self::Function(Stage::new(function))
    }
}

impl<T, E> Operand<T, E> {
    /// Wraps a plain value.
    pub fn value(value: T) -> Self {
        Self::Value(value)
    }

    /// Returns `true` for `Function` and `Pipeline` operands.
    pub fn is_callable(&self) -> bool {
        !matches!(self, Operand::Value(_))
    }
}

impl<T, E> From<Stage<T, E>> for Operand<T, E> {
    fn from(stage: Stage<T, E>) -> Self {
        Self::Function(stage)
    }
}

impl<T, E> From<Composable<T, E>> for Operand<T, E> {
    fn from(pipeline: Composable<T, E>) -> Self {
        Self::Pipeline(pipeline)
    }
}

impl<T, E> From<&Composable<T, E>> for Operand<T, E> {
    fn from(pipeline: &Composable<T, E>) -> Self {
        Self::Pipeline(pipeline.clone())
    }
}

/// The result of [`Composable::pipe_from`].
#[derive(Debug, Clone)]
pub enum Piped<T, E> {
    /// A function or pipeline was piped in, producing a longer pipeline.
    Pipeline(Composable<T, E>),

    /// A value was piped in and run through the pipeline.
    Output(T),
}

impl<T, E> Piped<T, E> {
    /// Returns the output if a value was piped in.
    pub fn into_output(self) -> Option<T> {
        match self {
            Piped::Output(output) => Some(output),
            Piped::Pipeline(_) => None,
        }
    }

    /// Returns the pipeline if a function or pipeline was piped in.
    pub fn into_pipeline(self) -> Option<Composable<T, E>> {
        match self {
            Piped::Pipeline(pipeline) => Some(pipeline),
            Piped::Output(_) => None,
        }
    }

    /// Returns a reference to the output, if any.
    pub fn output(&self) -> Option<&T> {
        match self {
            Piped::Output(output) => Some(output),
            Piped::Pipeline(_) => None,
        }
    }
}
