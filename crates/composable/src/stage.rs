use std::{convert::Infallible, fmt, sync::Arc};

use crate::Label;

type StageFn<T, E> = dyn Fn(T) -> Result<T, E> + Send + Sync;

/// One unary function in a pipeline, paired with the [`Label`] used to
/// render it.
///
/// The function is opaque: a `Stage` only knows how to call it. Infallible
/// functions are lifted into `Ok`, fallible ones keep their own error type,
/// which a pipeline hands back to its caller untouched.
///
/// Cloning a `Stage` is cheap; clones share the same function.
///
/// # Example
///
/// ```
/// use composable::{Stage, Style};
///
/// let double: Stage<i32> = Stage::named("double", |x| 2 * x);
/// assert_eq!(double.call(21), Ok(42));
/// assert_eq!(double.label().render(0, &Style::default()), "double");
/// ```
pub struct Stage<T, E = Infallible> {
    function: Arc<StageFn<T, E>>,
    label: Label,
}

impl<T: 'static, E: 'static> Stage<T, E> {
    /// Wraps an infallible function as an anonymous stage.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        Self::fallible(move |input| Ok(function(input)))
    }

    /// Wraps an infallible function under the given name.
    pub fn named<F>(name: impl Into<String>, function: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        Self::new(function).with_label(Label::named(name))
    }

    /// Wraps a function that may fail as an anonymous stage.
    pub fn fallible<F>(function: F) -> Self
    where
        F: Fn(T) -> Result<T, E> + Send + Sync + 'static,
    {
        Self {
            function: Arc::new(function),
            label: Label::Anonymous,
        }
    }

    /// Wraps a function that may fail under the given name.
    pub fn fallible_named<F>(name: impl Into<String>, function: F) -> Self
    where
        F: Fn(T) -> Result<T, E> + Send + Sync + 'static,
    {
        Self::fallible(function).with_label(Label::named(name))
    }

    /// Wraps a function that has some arguments already bound.
    ///
    /// Rendered as `partial(<function>, <arg>, ...)`.
    pub fn partial<F, I>(function: impl Into<Label>, args: I, f: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
        I: IntoIterator,
        I::Item: Into<Label>,
    {
        Self::new(f).with_label(Label::partial(function, args))
    }

    /// Wraps a function that may fail and has some arguments already bound.
    ///
    /// Rendered as `partial(<function>, <arg>, ...)`.
    pub fn fallible_partial<F, I>(function: impl Into<Label>, args: I, f: F) -> Self
    where
        F: Fn(T) -> Result<T, E> + Send + Sync + 'static,
        I: IntoIterator,
        I::Item: Into<Label>,
    {
        Self::fallible(f).with_label(Label::partial(function, args))
    }

    /// A stage that returns its input unchanged.
    #[must_use]
    pub fn identity() -> Self {
        Self::named("identity", |input| input)
    }
}

impl<U: 'static, E: 'static> Stage<Vec<U>, E> {
    /// Applies `inner` to every element, in order.
    ///
    /// The first element that fails aborts the whole stage with that error.
    /// Rendered as `partial(map, <inner>)`.
    #[must_use]
    pub fn map(inner: Stage<U, E>) -> Self {
        let label = Label::partial(Label::Map, [inner.label]);
        let function = inner.function;

        Self {
            function: Arc::new(move |items: Vec<U>| -> Result<Vec<U>, E> {
                items.into_iter().map(|item| function(item)).collect()
            }),
            label,
        }
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// Rendered as `partial(filter, <name>)`.
    pub fn filter<P>(name: impl Into<String>, predicate: P) -> Self
    where
        P: Fn(&U) -> bool + Send + Sync + 'static,
    {
        let label = Label::partial(Label::Filter, [Label::named(name)]);

        Self {
            function: Arc::new(move |items: Vec<U>| -> Result<Vec<U>, E> {
                Ok(items.into_iter().filter(|item| predicate(item)).collect())
            }),
            label,
        }
    }
}

impl<T, E> Stage<T, E> {
    /// Replaces this stage's label.
    #[must_use]
    pub fn with_label(mut self, label: Label) -> Self {
        self.label = label;
        self
    }

    /// Returns this stage's label.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Calls the wrapped function.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped function returns.
    pub fn call(&self, input: T) -> Result<T, E> {
        (self.function)(input)
    }
}

impl<T, E> Clone for Stage<T, E> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
            label: self.label.clone(),
        }
    }
}

impl<T, E> fmt::Debug for Stage<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stage")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
