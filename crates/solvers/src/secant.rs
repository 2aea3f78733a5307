//! Secant method for single-variable root finding.
//!
//! # Algorithm
//!
//! The secant method replaces the derivative in Newton's method with the
//! slope of the line through the two latest points:
//!
//! ```text
//! p = p1 - f(p1) * (p1 - p0) / (f(p1) - f(p0))
//! ```
//!
//! After each step the window shifts (`p0 <- p1`, `p1 <- p`), costing one new
//! function evaluation per iteration. The solver converges when
//! `|p - p1|` drops to the configured tolerance, or as soon as `f(p1)` is
//! exactly zero. The exact-root check runs before the flat-secant check, so
//! two guesses that are both roots still converge.
//!
//! # Limitations
//!
//! - The initial guesses need not bracket a root, so convergence is not
//!   guaranteed. Poor guesses can diverge or wander out of the domain of `f`.
//! - A flat secant (`f(p1) == f(p0)`) has no root and is reported as
//!   [`Error::FlatSecant`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after computing the new
//! estimate and before checking convergence.

use findroots_core::{Observer, Point, ScalarFunction};

use crate::{
    Action, Config, Error, Solution, Status,
    evaluate::{check_guess, evaluate},
};

/// Iteration event emitted by the secant solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The older of the two points defining the secant line.
    pub previous: Point,

    /// The newer of the two points defining the secant line.
    pub current: Point,

    /// Where the secant line crosses zero.
    pub estimate: f64,

    /// Distance from `current.x` to `estimate`.
    pub step: f64,
}

/// Finds a root of `function` starting from two initial guesses.
///
/// # Errors
///
/// Returns an error if a guess is non-finite, if the secant line becomes
/// flat, or if `function` produces a non-finite value.
pub fn solve<F, Obs>(
    function: &F,
    guesses: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFunction + ?Sized,
    Obs: Observer<Event, Action>,
{
    let [p0, p1] = guesses;
    let mut previous = evaluate(function, check_guess(p0)?)?;
    let mut current = evaluate(function, check_guess(p1)?)?;
    let mut step = 0.0;

    for iter in 1..=config.max_iters() {
        #[allow(clippy::float_cmp)]
        if current.fx == 0.0 {
            return Ok(Solution::new(Status::Converged, current.x, iter - 1, 0.0));
        }

        #[allow(clippy::float_cmp)]
        if current.fx == previous.fx {
            return Err(Error::FlatSecant {
                p0: previous.x,
                p1: current.x,
                value: current.fx,
            });
        }

        let estimate =
            current.x - current.fx * (current.x - previous.x) / (current.fx - previous.fx);
        step = (estimate - current.x).abs();

        let event = Event {
            iter,
            previous,
            current,
            estimate,
            step,
        };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(Solution::new(
                        Status::StoppedByObserver,
                        estimate,
                        iter,
                        step,
                    ));
                }
            }
        }

        if step <= config.x_tol() {
            return Ok(Solution::new(Status::Converged, estimate, iter, step));
        }

        previous = current;
        current = evaluate(function, estimate)?;
    }

    Ok(Solution::new(
        Status::MaxIters,
        current.x,
        config.max_iters(),
        step,
    ))
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// Returns an error if a guess is non-finite, if the secant line becomes
/// flat, or if `function` produces a non-finite value.
pub fn solve_unobserved<F>(
    function: &F,
    guesses: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: ScalarFunction + ?Sized,
{
    solve(function, guesses, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn log_linear(x: f64) -> f64 {
        x.ln() - 2.5 * x + 8.0
    }

    #[test]
    fn finds_root_of_log_linear() {
        let solution =
            solve_unobserved(&log_linear, [2.0, 6.0], &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert!(log_linear(solution.x).abs() < 1e-6);
        assert!(solution.tol <= 1e-8);
    }

    #[test]
    fn finds_square_root_of_two() {
        let f = |x: f64| x * x - 2.0;

        let solution = solve_unobserved(&f, [1.0, 2.0], &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn linear_function_lands_on_exact_root() {
        // The first step lands on the root, which evaluates to exactly zero.
        let f = |x: f64| 2.0 * x - 3.0;

        let solution = solve_unobserved(&f, [0.0, 1.0], &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.x, 1.5);
        assert_relative_eq!(solution.tol, 0.0);
    }

    #[test]
    fn exact_root_guesses_are_not_flat() {
        let f = |x: f64| x * x - 4.0;

        let solution =
            solve_unobserved(&f, [-2.0, 2.0], &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 0);
        assert_relative_eq!(solution.x, 2.0);
        assert_relative_eq!(solution.tol, 0.0);
    }

    #[test]
    fn errors_on_flat_secant() {
        let f = |x: f64| x * x - 4.0;

        let result = solve_unobserved(&f, [-1.0, 1.0], &Config::default());

        assert!(matches!(result, Err(Error::FlatSecant { .. })));
    }

    #[test]
    fn errors_on_equal_guesses() {
        let result = solve_unobserved(&log_linear, [3.0, 3.0], &Config::default());

        assert!(matches!(result, Err(Error::FlatSecant { .. })));
    }

    #[test]
    fn errors_on_non_finite_guess() {
        let result = solve_unobserved(&log_linear, [f64::NAN, 3.0], &Config::default());

        assert!(matches!(result, Err(Error::NonFiniteGuess { .. })));
    }

    #[test]
    fn errors_when_iterate_leaves_domain() {
        // The first secant step from (10, 9) lands near -11.85, where ln is NaN.
        let result = solve_unobserved(&f64::ln, [10.0, 9.0], &Config::default());

        assert!(matches!(result, Err(Error::NonFiniteEvaluation { .. })));
    }

    #[test]
    fn max_iters_reports_last_estimate() {
        let config = Config::new(2, 1e-8, 1e-7).expect("valid config");

        let solution = solve_unobserved(&log_linear, [2.0, 6.0], &config).expect("should finish");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 2);
        assert!(solution.tol > 1e-8);
    }

    #[test]
    fn repeated_solves_are_identical() {
        let config = Config::default();

        let first = solve_unobserved(&log_linear, [2.0, 6.0], &config).expect("should solve");
        let second = solve_unobserved(&log_linear, [2.0, 6.0], &config).expect("should solve");

        assert_eq!(first, second);
    }

    #[test]
    fn observer_sees_window_shift() {
        let mut events = Vec::new();
        let observer = |event: &Event| -> Option<Action> {
            events.push(*event);
            None
        };

        solve(&log_linear, [2.0, 6.0], &Config::default(), observer).expect("should solve");

        assert!(events.len() >= 2);
        for pair in events.windows(2) {
            assert_eq!(pair[1].previous, pair[0].current);
            assert_relative_eq!(pair[1].current.x, pair[0].estimate);
        }
    }

    #[test]
    fn observer_can_stop_iteration() {
        let observer = |event: &Event| (event.iter == 1).then_some(Action::StopEarly);

        let solution = solve(&log_linear, [2.0, 6.0], &Config::default(), observer)
            .expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 1);
    }
}
