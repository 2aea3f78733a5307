use thiserror::Error;

/// Default tolerance on the convergence measure of every method.
///
/// Bisection compares it against the bracket half-width, secant and
/// Steffensen against the size of the last step.
pub const TOLERANCE: f64 = 1e-8;

/// Default iteration budget shared by all methods.
pub const MAX_ITERATIONS: usize = 1000;

/// Default threshold below which Steffensen's second difference is treated
/// as zero.
pub const DENOMINATOR_GUARD: f64 = 1e-7;

/// Configuration shared by the bisection, secant, and Steffensen solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_tol: f64,
    denominator_guard: f64,
}

/// Errors that can occur when configuring a solver.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no function was provided to the solver")]
    MissingFunction,

    #[error("max_iters must be at least 1")]
    ZeroIters,

    #[error("x_tol must be finite and non-negative")]
    XTol,

    #[error("denominator_guard must be finite and non-negative")]
    DenominatorGuard,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: MAX_ITERATIONS,
            x_tol: TOLERANCE,
            denominator_guard: DENOMINATOR_GUARD,
        }
    }
}

impl Config {
    /// Creates a new config with validated limits.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or if a tolerance is negative
    /// or non-finite.
    pub fn new(max_iters: usize, x_tol: f64, denominator_guard: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::ZeroIters);
        }
        if !x_tol.is_finite() || x_tol < 0.0 {
            return Err(ConfigError::XTol);
        }
        if !denominator_guard.is_finite() || denominator_guard < 0.0 {
            return Err(ConfigError::DenominatorGuard);
        }

        Ok(Self {
            max_iters,
            x_tol,
            denominator_guard,
        })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the tolerance on the convergence measure.
    #[must_use]
    pub fn x_tol(&self) -> f64 {
        self.x_tol
    }

    /// Returns the near-zero threshold for Steffensen's denominator.
    #[must_use]
    pub fn denominator_guard(&self) -> f64 {
        self.denominator_guard
    }
}
