/// A function mapping one real number to another.
///
/// Solvers only ever borrow the function, so it must be callable through a
/// shared reference. Functions should be deterministic: the solvers assume
/// that evaluating the same `x` twice yields the same value.
///
/// Any `Fn(f64) -> f64` closure or function pointer implements this trait.
/// Types that carry parameters can implement it directly.
pub trait ScalarFunction {
    /// Evaluates the function at `x`.
    fn call(&self, x: f64) -> f64;
}

impl<F> ScalarFunction for F
where
    F: Fn(f64) -> f64,
{
    fn call(&self, x: f64) -> f64 {
        self(x)
    }
}
