//! Bisection, secant, and Steffensen solvers for scalar equations.
//!
//! Each method lives in its own module with a pure `solve` function that
//! accepts an [`Observer`](findroots_core::Observer) and returns a
//! [`Solution`]. The [`Solver`] facade binds a function once, runs any of the
//! three methods, and reports outcomes through `tracing`.
//!
//! # Solvers
//!
//! - [`bisection`] — guaranteed convergence on a bracketed interval
//! - [`secant`] — superlinear convergence from two nearby guesses
//! - [`steffensen`] — accelerated fixed-point iteration from one guess
//!
//! # Example
//!
//! ```
//! use findroots_solvers::{Solver, Status};
//!
//! let f = |x: f64| x * x - 4.0;
//! let solver = Solver::new(&f);
//!
//! let solution = solver.bisection(0.0, 3.0).expect("sign change on [0, 3]");
//! assert_eq!(solution.status, Status::Converged);
//! assert!((solution.x - 2.0).abs() < 1e-8);
//! ```

mod action;
mod config;
mod error;
mod evaluate;
mod method;
mod report;
mod solution;
mod solver;

pub mod bisection;
pub mod secant;
pub mod steffensen;

pub use action::Action;
pub use config::{Config, ConfigError, DENOMINATOR_GUARD, MAX_ITERATIONS, TOLERANCE};
pub use error::Error;
pub use method::Method;
pub use solution::{Solution, Status};
pub use solver::Solver;
