/// An `x` value with the function value evaluated there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The x value.
    pub x: f64,

    /// The function value at x.
    pub fx: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, fx: f64) -> Self {
        Self { x, fx }
    }

    /// Returns true if the function value is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.fx.is_finite()
    }
}
