//! Bisection for single-variable root finding.
//!
//! # Algorithm
//!
//! Bisection halves a bracket `[a, b]` across which `f` changes sign. Each
//! iteration evaluates the midpoint `p = a + (b - a) / 2` and keeps the half
//! that still holds the sign change. The solver converges when `f(p)` is
//! exactly zero or when the half-width `(b - a) / 2` drops to the configured
//! tolerance, checked in that order.
//!
//! # Preconditions
//!
//! The endpoints must be finite and distinct, and `f(a)` and `f(b)` must have
//! opposite signs. Reversed endpoints are reordered. An endpoint where `f` is
//! exactly zero is returned immediately with zero iterations.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per midpoint evaluation, before checking
//! convergence. Observers can return [`Action::StopEarly`] to halt with the
//! current midpoint.

mod bracket;
mod event;

pub use bracket::{Bracket, BracketError, Sign};
pub use event::Event;

use findroots_core::{Observer, ScalarFunction};

use crate::{Action, Config, Error, Solution, Status, evaluate::evaluate};

use bracket::Bounds;

/// Finds a root of `function` inside `bracket` using bisection.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, does not bracket a sign
/// change, or if `function` produces a non-finite value.
pub fn solve<F, Obs>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFunction + ?Sized,
    Obs: Observer<Event, Action>,
{
    let [left, right] = Bounds::new(bracket)?.as_array();

    let left = evaluate(function, left)?;
    #[allow(clippy::float_cmp)]
    if left.fx == 0.0 {
        return Ok(Solution::new(Status::Converged, left.x, 0, 0.0));
    }

    let right = evaluate(function, right)?;
    #[allow(clippy::float_cmp)]
    if right.fx == 0.0 {
        return Ok(Solution::new(Status::Converged, right.x, 0, 0.0));
    }

    let mut bracket = Bracket::new(left, right)?;
    let mut last = Solution::new(
        Status::MaxIters,
        bracket.midpoint(),
        0,
        bracket.half_width(),
    );

    for iter in 1..=config.max_iters() {
        let half_width = bracket.half_width();
        let midpoint = evaluate(function, bracket.midpoint())?;

        let event = Event {
            iter,
            bracket: bracket.as_array(),
            midpoint,
            half_width,
        };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(Solution::new(
                        Status::StoppedByObserver,
                        midpoint.x,
                        iter,
                        half_width,
                    ));
                }
            }
        }

        #[allow(clippy::float_cmp)]
        if midpoint.fx == 0.0 || half_width <= config.x_tol() {
            return Ok(Solution::new(Status::Converged, midpoint.x, iter, half_width));
        }

        bracket.shrink(midpoint);
        last = Solution::new(Status::MaxIters, midpoint.x, iter, half_width);
    }

    Ok(last)
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, does not bracket a sign
/// change, or if `function` produces a non-finite value.
pub fn solve_unobserved<F>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: ScalarFunction + ?Sized,
{
    solve(function, bracket, config, ())
}
