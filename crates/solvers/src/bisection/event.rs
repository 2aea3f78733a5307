use findroots_core::Point;

/// Iteration event emitted by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Bracket whose midpoint was evaluated.
    pub bracket: [f64; 2],

    /// The midpoint and its function value.
    pub midpoint: Point,

    /// Half the width of `bracket`.
    pub half_width: f64,
}
