/// Indicates how a solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped because the next step would divide by a near-zero value.
    ///
    /// The reported `x` is the solver's last iterate and is not a converged
    /// result.
    Degenerate,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a root-finding solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the root (or fixed point, for Steffensen's method).
    pub x: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// Convergence measure when the solver finished.
    ///
    /// This is the bracket half-width for bisection and the last step size
    /// for the secant and Steffensen methods.
    pub tol: f64,
}

impl Solution {
    pub(crate) fn new(status: Status, x: f64, iters: usize, tol: f64) -> Self {
        Self {
            status,
            x,
            iters,
            tol,
        }
    }

    /// Returns true if the solver met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
