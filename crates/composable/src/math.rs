//! Ready-made named stages for numeric pipelines.
//!
//! Each stage carries a label, so pipelines built from these render
//! readably without any extra naming:
//!
//! ```
//! use composable::{Composable, math};
//!
//! let pipeline: Composable<i32> = Composable::from_stage(math::add(1))
//!     .pipe_into(math::multiply(2))?
//!     .pipe_into(math::square())?;
//!
//! assert_eq!(pipeline.call(2), Ok(36));
//! assert_eq!(pipeline.to_string(), "partial(add, 1) | partial(multiply, 2) | square");
//! # Ok::<(), composable::Error>(())
//! ```

use std::{
    fmt::Display,
    ops::{Add, Mul},
};

use crate::{Label, Stage};

/// Returns its input unchanged.
pub fn identity<T: 'static, E: 'static>() -> Stage<T, E> {
    Stage::identity()
}

/// Multiplies the input by itself.
pub fn square<T, E>() -> Stage<T, E>
where
    T: Mul<Output = T> + Copy + 'static,
    E: 'static,
{
    Stage::named("square", |x: T| x * x)
}

/// Adds `n` to the input. Rendered as `partial(add, n)`.
pub fn add<T, E>(n: T) -> Stage<T, E>
where
    T: Add<Output = T> + Copy + Display + Send + Sync + 'static,
    E: 'static,
{
    Stage::partial("add", [Label::value(n)], move |x: T| x + n)
}

/// Multiplies the input by `n`. Rendered as `partial(multiply, n)`.
pub fn multiply<T, E>(n: T) -> Stage<T, E>
where
    T: Mul<Output = T> + Copy + Display + Send + Sync + 'static,
    E: 'static,
{
    Stage::partial("multiply", [Label::value(n)], move |x: T| x * n)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{Composable, Style};

    #[test]
    fn integer_stages() {
        let add_one: Stage<i32> = add(1);
        let double: Stage<i32> = multiply(2);
        let sq: Stage<i32> = square();

        assert_eq!(add_one.call(4), Ok(5));
        assert_eq!(double.call(4), Ok(8));
        assert_eq!(sq.call(-4), Ok(16));
        assert_eq!(identity::<i32, ()>().call(9), Ok(9));
    }

    #[test]
    fn stage_labels() {
        let style = Style::default();

        assert_eq!(add::<i32, ()>(1).label().render(0, &style), "partial(add, 1)");
        assert_eq!(
            multiply::<f64, ()>(0.5).label().render(0, &style),
            "partial(multiply, 0.5)"
        );
        assert_eq!(square::<u8, ()>().label().render(0, &style), "square");
        assert_eq!(identity::<u8, ()>().label().render(0, &style), "identity");
    }

    #[test]
    fn float_pipeline() {
        let pipeline: Composable<f64> = Composable::from_stage(multiply(0.5))
            .pipe_into(add(0.25))
            .and_then(|p| p.pipe_into(square()))
            .unwrap();

        // ((3 * 0.5) + 0.25)^2 = 3.0625
        assert_relative_eq!(pipeline.call(3.0).unwrap(), 3.0625);
    }

    #[test]
    fn composed_right_to_left() {
        // square(multiply(2, add(1, x))) = (2(x + 1))^2
        let pipeline: Composable<i64> = Composable::from_stage(square())
            .compose_after(multiply(2))
            .and_then(|p| p.compose_after(add(1)))
            .unwrap();

        assert_eq!(pipeline.call(3), Ok(64));
    }
}
