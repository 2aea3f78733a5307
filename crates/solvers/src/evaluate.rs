use findroots_core::{Point, ScalarFunction};

use crate::Error;

/// Evaluates the function at `x`, rejecting NaN and infinite values.
///
/// # Errors
///
/// Returns [`Error::NonFiniteEvaluation`] if `f(x)` is not finite.
pub(crate) fn evaluate<F>(function: &F, x: f64) -> Result<Point, Error>
where
    F: ScalarFunction + ?Sized,
{
    let point = Point::new(x, function.call(x));
    if point.is_finite() {
        Ok(point)
    } else {
        Err(Error::NonFiniteEvaluation { x, value: point.fx })
    }
}

/// Rejects an initial guess that is NaN or infinite.
pub(crate) fn check_guess(value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteGuess { value })
    }
}
