use std::fmt::{self, Display};

use thiserror::Error;

/// How a stage is named when a pipeline is rendered.
///
/// Closures carry no name of their own, so each [`Stage`](crate::Stage) holds
/// a `Label` chosen by whoever built it. Rendering is a pure function of the
/// label and the stage's position in the pipeline.
///
/// | Label                          | Renders as                   |
/// |--------------------------------|------------------------------|
/// | `Anonymous`                    | `stage 2` (position-based)   |
/// | `Named("square")`              | `square`                     |
/// | `Partial { add, [Value(1)] }`  | `partial(add, 1)`            |
/// | `Map` / `Filter`               | `map` / `filter`             |
/// | `Value("1")`                   | `1`                          |
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Label {
    /// No name; rendered from the stage's position.
    #[default]
    Anonymous,

    /// The function's own name.
    Named(String),

    /// A function with some arguments bound ahead of time.
    Partial {
        /// The function being partially applied.
        function: Box<Label>,

        /// The bound arguments, in order.
        args: Vec<Label>,
    },

    /// The built-in element-wise `map` primitive.
    Map,

    /// The built-in element-wise `filter` primitive.
    Filter,

    /// The textual form of a bound argument value.
    Value(String),
}

impl Label {
    /// Creates a label from a function name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Creates a label for `function` with `args` bound.
    pub fn partial<I>(function: impl Into<Label>, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Label>,
    {
        Self::Partial {
            function: Box::new(function.into()),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a label for a bound argument from its `Display` form.
    pub fn value(value: impl Display) -> Self {
        Self::Value(value.to_string())
    }

    /// Renders this label for the stage at `position` using `style`.
    #[must_use]
    pub fn render(&self, position: usize, style: &Style) -> String {
        let mut out = String::new();
        self.write_to(&mut out, position, style);
        out
    }

    fn write_to(&self, out: &mut String, position: usize, style: &Style) {
        match self {
            Label::Anonymous => {
                out.push_str(&format!("{} {position}", style.anonymous_prefix));
            }
            Label::Named(name) | Label::Value(name) => out.push_str(name),
            Label::Map => out.push_str("map"),
            Label::Filter => out.push_str("filter"),
            Label::Partial { function, args } => {
                out.push_str("partial(");
                function.write_to(out, position, style);
                for arg in args {
                    out.push_str(", ");
                    arg.write_to(out, position, style);
                }
                out.push(')');
            }
        }
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

impl From<String> for Label {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

/// Rendering options for a pipeline.
///
/// Deserialized styles go through [`Style::new`], so they are validated too.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawStyle"))]
pub struct Style {
    separator: String,
    anonymous_prefix: String,
}

/// Unvalidated mirror of [`Style`] used as the deserialization source.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawStyle {
    separator: String,
    anonymous_prefix: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RawStyle> for Style {
    type Error = StyleError;

    fn try_from(raw: RawStyle) -> Result<Self, Self::Error> {
        Style::new(raw.separator, raw.anonymous_prefix)
    }
}

/// Errors that can occur when validating a [`Style`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StyleError {
    #[error("separator must not be empty")]
    EmptySeparator,

    #[error("anonymous prefix must not be empty")]
    EmptyPrefix,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            separator: " | ".to_owned(),
            anonymous_prefix: "stage".to_owned(),
        }
    }
}

impl Style {
    /// Creates a validated style.
    ///
    /// # Errors
    ///
    /// Returns an error if `separator` or `anonymous_prefix` is empty.
    pub fn new(
        separator: impl Into<String>,
        anonymous_prefix: impl Into<String>,
    ) -> Result<Self, StyleError> {
        let separator = separator.into();
        let anonymous_prefix = anonymous_prefix.into();

        if separator.is_empty() {
            return Err(StyleError::EmptySeparator);
        }
        if anonymous_prefix.is_empty() {
            return Err(StyleError::EmptyPrefix);
        }

        Ok(Self {
            separator,
            anonymous_prefix,
        })
    }

    /// Returns the text placed between rendered stages.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Returns the word used to name anonymous stages.
    #[must_use]
    pub fn anonymous_prefix(&self) -> &str {
        &self.anonymous_prefix
    }
}

/// Writes a pre-rendered label without quoting, for `Debug` lists.
pub(crate) struct Rendered<'a>(pub(crate) &'a str);

impl fmt::Debug for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
