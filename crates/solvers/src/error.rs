use thiserror::Error;

use crate::bisection::BracketError;

/// Errors that can occur while solving.
///
/// Running out of iterations is not an error; it is reported through
/// [`Status::MaxIters`](crate::Status::MaxIters).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("initial guess is not finite: {value}")]
    NonFiniteGuess { value: f64 },

    #[error("flat secant: f({p0}) and f({p1}) are both {value}")]
    FlatSecant { p0: f64, p1: f64, value: f64 },

    #[error("non-finite function value {value} at x = {x}")]
    NonFiniteEvaluation { x: f64, value: f64 },
}
