//! Steffensen's method for fixed-point iteration.
//!
//! # Algorithm
//!
//! Steffensen's method treats the function as a fixed-point map `g` and
//! accelerates the plain iteration `p <- g(p)` with Aitken's delta-squared
//! process. From the current iterate `p0` it evaluates `p1 = g(p0)` and
//! `p2 = g(p1)`, then jumps to
//!
//! ```text
//! p = p0 - (p1 - p0)^2 / (p2 - 2 p1 + p0)
//! ```
//!
//! A fixed point of `g` is a root of `g(x) - x`, so to find a root of `f`
//! pass a map such as `g(x) = x - f(x)`. The solver converges when
//! `|p - p0|` drops to the configured tolerance.
//!
//! # Degenerate Steps
//!
//! When the second difference `p2 - 2 p1 + p0` is smaller in magnitude than
//! [`Config::denominator_guard`], or the accelerated step is not finite, the
//! next step would divide by (nearly) zero. The solver stops with
//! [`Status::Degenerate`] and reports `p2` along with `|p2 - p1|` as its
//! tolerance. This often happens once the iterates
//! have already settled on the fixed point, but the result is not a converged
//! one and should be checked by the caller.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after evaluating `p1` and
//! `p2` and before the denominator guard.

use findroots_core::{Observer, ScalarFunction};

use crate::{
    Action, Config, Error, Solution, Status,
    evaluate::{check_guess, evaluate},
};

/// Iteration event emitted by the Steffensen solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The current iterate `p0`.
    pub x: f64,

    /// The first image `p1 = g(p0)`.
    pub gx: f64,

    /// The second image `p2 = g(p1)`.
    pub ggx: f64,

    /// The second difference `p2 - 2 p1 + p0`.
    pub denominator: f64,
}

/// Finds a fixed point of `function` starting from `guess`.
///
/// # Errors
///
/// Returns an error if the guess is non-finite or if `function` produces a
/// non-finite value.
pub fn solve<F, Obs>(
    function: &F,
    guess: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFunction + ?Sized,
    Obs: Observer<Event, Action>,
{
    let mut x = check_guess(guess)?;
    let mut step = f64::INFINITY;

    for iter in 1..=config.max_iters() {
        let gx = evaluate(function, x)?.fx;
        let ggx = evaluate(function, gx)?.fx;
        let denominator = ggx - 2.0 * gx + x;

        let event = Event {
            iter,
            x,
            gx,
            ggx,
            denominator,
        };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(Solution::new(Status::StoppedByObserver, x, iter, step));
                }
            }
        }

        // A zero denominator trips the finiteness check even with a zero guard.
        let next = x - (gx - x).powi(2) / denominator;
        if denominator.abs() < config.denominator_guard() || !next.is_finite() {
            return Ok(Solution::new(
                Status::Degenerate,
                ggx,
                iter,
                (ggx - gx).abs(),
            ));
        }

        step = (next - x).abs();
        x = next;

        if step <= config.x_tol() {
            return Ok(Solution::new(Status::Converged, x, iter, step));
        }
    }

    Ok(Solution::new(
        Status::MaxIters,
        x,
        config.max_iters(),
        step,
    ))
}

/// Runs Steffensen's method without observation.
///
/// # Errors
///
/// Returns an error if the guess is non-finite or if `function` produces a
/// non-finite value.
pub fn solve_unobserved<F>(function: &F, guess: f64, config: &Config) -> Result<Solution, Error>
where
    F: ScalarFunction + ?Sized,
{
    solve(function, guess, config, ())
}
