use std::{convert::Infallible, fmt};

use tracing::{debug, trace};

use crate::{Error, Label, Operand, Operation, Piped, Stage, Style, label::Rendered};

/// A pipeline of unary functions that can itself be called like one.
///
/// A `Composable` holds an ordered, never-empty sequence of [`Stage`]s.
/// Stage 0 runs first; each stage's output is the next stage's input.
///
/// Pipelines grow in two directions:
///
/// - [`compose_after`](Self::compose_after) is mathematical composition:
///   `f.compose_after(g)` is `f ∘ g`, which runs `g` and then `f`.
/// - [`pipe_into`](Self::pipe_into) reads left to right:
///   `g.pipe_into(f)` also runs `g` and then `f`.
///
/// Every composition returns a new pipeline and leaves its operands alone.
/// Stage functions are shared, so copying a pipeline is cheap.
///
/// # Example
///
/// ```
/// use composable::{Composable, Stage};
///
/// let square: Composable<i32> = Composable::named("square", |x| x * x);
/// let double: Stage<i32> = Stage::named("double", |x| 2 * x);
/// let add_one: Stage<i32> = Stage::named("add_one", |x| x + 1);
///
/// // square(double(add_one(x)))
/// let pipeline = square.compose_after(double)?.compose_after(add_one)?;
/// assert_eq!(pipeline.call(3), Ok(64));
/// assert_eq!(pipeline.to_string(), "add_one | double | square");
/// # Ok::<(), composable::Error>(())
/// ```
pub struct Composable<T, E = Infallible> {
    stages: Vec<Stage<T, E>>,
}

impl<T: 'static, E: 'static> Composable<T, E> {
    /// Creates a pipeline that returns its input unchanged.
    #[must_use]
    pub fn identity() -> Self {
        Self::from_stage(Stage::identity())
    }

    /// Wraps an infallible function as a single anonymous stage.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        Self::from_stage(Stage::new(function))
    }

    /// Wraps an infallible function as a single named stage.
    pub fn named<F>(name: impl Into<String>, function: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        Self::from_stage(Stage::named(name, function))
    }

    /// Wraps a function that may fail as a single anonymous stage.
    pub fn fallible<F>(function: F) -> Self
    where
        F: Fn(T) -> Result<T, E> + Send + Sync + 'static,
    {
        Self::from_stage(Stage::fallible(function))
    }
}

impl<T, E> Composable<T, E> {
    /// Creates a pipeline holding exactly `stage`.
    pub fn from_stage(stage: Stage<T, E>) -> Self {
        Self {
            stages: vec![stage],
        }
    }

    /// Creates a pipeline from a function or an existing pipeline.
    ///
    /// A pipeline operand has its stages copied; later compositions on the
    /// result never affect it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `operand` is a plain value.
    pub fn try_new(operand: impl Into<Operand<T, E>>) -> Result<Self, Error> {
        Self::from_operand(operand.into(), Operation::Construct)
    }

    fn from_operand(operand: Operand<T, E>, operation: Operation) -> Result<Self, Error> {
        match operand {
            Operand::Function(stage) => Ok(Self::from_stage(stage)),
            Operand::Pipeline(pipeline) => Ok(pipeline),
            Operand::Value(_) => {
                debug!(%operation, "rejected a value where a function was required");
                Err(Error::InvalidArgument(operation))
            }
        }
    }

    /// Runs `input` through every stage in order.
    ///
    /// # Errors
    ///
    /// Returns the first stage error unchanged. Stages after the failing one
    /// are not called.
    pub fn call(&self, input: T) -> Result<T, E> {
        trace!(stages = self.stages.len(), "calling pipeline");
        self.stages
            .iter()
            .try_fold(input, |value, stage| stage.call(value))
    }

    /// Returns `self ∘ other`: a pipeline that runs `other`, then `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `other` is a plain value.
    pub fn compose_after(&self, other: impl Into<Operand<T, E>>) -> Result<Self, Error> {
        let first = Self::from_operand(other.into(), Operation::Compose)?;
        Ok(first.followed_by(self))
    }

    /// Returns `other ∘ self`: a pipeline that runs `self`, then `other`.
    ///
    /// Produces the same stage order as `other.compose_after(self)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `other` is a plain value.
    pub fn compose_before(&self, other: impl Into<Operand<T, E>>) -> Result<Self, Error> {
        let last = Self::from_operand(other.into(), Operation::Compose)?;
        Ok(self.followed_by(&last))
    }

    /// Pipes this pipeline's output into `other`.
    ///
    /// `a.pipe_into(b)?.pipe_into(c)?` runs `a`, then `b`, then `c`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `other` is a plain value.
    /// Values enter a pipeline through [`pipe_from`](Self::pipe_from).
    pub fn pipe_into(&self, other: impl Into<Operand<T, E>>) -> Result<Self, Error> {
        let last = Self::from_operand(other.into(), Operation::Pipe)?;
        last.compose_after(self)
    }

    /// Pipes `other` into this pipeline.
    ///
    /// - A function or pipeline is composed in front of this one, giving
    ///   [`Piped::Pipeline`] that runs `other` first.
    /// - A value is run through this pipeline now, giving [`Piped::Output`].
    ///
    /// # Errors
    ///
    /// Returns the first stage error when a value is piped in.
    ///
    /// # Example
    ///
    /// ```
    /// use composable::{Composable, Operand, Stage};
    ///
    /// let g: Stage<i32> = Stage::named("g", |x| 2 * x);
    /// let f: Stage<i32> = Stage::named("f", |x| x + 1);
    /// let start: Composable<i32> = Composable::identity();
    /// let pipeline = start.pipe_into(g)?.pipe_into(f)?;
    ///
    /// let piped = pipeline.pipe_from(Operand::value(5)).unwrap();
    /// assert_eq!(piped.into_output(), Some(11));
    /// # Ok::<(), composable::Error>(())
    /// ```
    pub fn pipe_from(&self, other: impl Into<Operand<T, E>>) -> Result<Piped<T, E>, E> {
        match other.into() {
            Operand::Function(stage) => {
                Ok(Piped::Pipeline(Self::from_stage(stage).followed_by(self)))
            }
            Operand::Pipeline(pipeline) => Ok(Piped::Pipeline(pipeline.followed_by(self))),
            Operand::Value(value) => self.call(value).map(Piped::Output),
        }
    }

    fn followed_by(&self, next: &Self) -> Self {
        let stages: Vec<_> = self.stages.iter().chain(&next.stages).cloned().collect();
        trace!(stages = stages.len(), "composed pipeline");
        Self { stages }
    }

    /// Returns the stages in application order.
    pub fn stages(&self) -> &[Stage<T, E>] {
        &self.stages
    }

    /// Returns the stage labels in application order.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.stages.iter().map(Stage::label)
    }

    /// Returns the number of stages, which is always at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Renders the pipeline as its stage names joined by the style's separator.
    #[must_use]
    pub fn render(&self, style: &Style) -> String {
        self.rendered_labels(style).join(style.separator())
    }

    fn rendered_labels(&self, style: &Style) -> Vec<String> {
        self.labels()
            .enumerate()
            .map(|(position, label)| label.render(position, style))
            .collect()
    }
}

impl<T: 'static, E: 'static> Default for Composable<T, E> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T, E> From<Stage<T, E>> for Composable<T, E> {
    fn from(stage: Stage<T, E>) -> Self {
        Self::from_stage(stage)
    }
}

impl<T, E> Clone for Composable<T, E> {
    fn clone(&self) -> Self {
        Self {
            stages: self.stages.clone(),
        }
    }
}

impl<T, E> fmt::Display for Composable<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Style::default()))
    }
}

impl<T, E> fmt::Debug for Composable<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.rendered_labels(&Style::default());
        f.debug_list()
            .entries(rendered.iter().map(|label| Rendered(label)))
            .finish()
    }
}
