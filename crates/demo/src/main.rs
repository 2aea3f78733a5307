//! Solves a sample equation with each root-finding method.
//!
//! # Usage
//!
//! ```text
//! cargo run -p findroots-demo
//! ```
//!
//! Bisection and the secant method find the root of `ln(x) - 2.5x + 8` near
//! 3.726, starting from the bounds 2 and 6. Steffensen's method finds the
//! fixed point of `sqrt(10 / (4 + x))`, the root of `x^3 + 4x^2 - 10` near
//! 1.365, with per-iteration logging enabled.

use std::{error::Error, io};

use tracing::Level;

use findroots_observers::Logger;
use findroots_solvers::{Method, Solution, Solver};

/// The function of interest.
fn log_linear(x: f64) -> f64 {
    x.ln() - 2.5 * x + 8.0
}

/// Fixed-point form of `x^3 + 4x^2 - 10 = 0`.
fn cubic_fixed_point(x: f64) -> f64 {
    (10.0 / (4.0 + x)).sqrt()
}

fn main() -> Result<(), Box<dyn Error>> {
    // Reports go to stderr so they stay apart from the printed results.
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    // Results are printed below, so only failures go through the log.
    let mut solver = Solver::new(&log_linear);
    solver.set_report_results(false);

    let (lower, upper) = (2.0, 6.0);

    println!("BISECTION METHOD:");
    print_solution(&solver.bisection(lower, upper)?);

    println!("SECANT METHOD:");
    print_solution(&solver.secant(lower, upper)?);

    println!("STEFFENSEN'S METHOD:");
    let mut solver = Solver::new(&cubic_fixed_point);
    solver.set_report_results(false);
    print_solution(&solver.steffensen_observed(1.5, Logger::new(Method::Steffensen))?);

    Ok(())
}

fn print_solution(solution: &Solution) {
    println!("Solution Results ({:?}):", solution.status);
    println!("    x = {}", solution.x);
    println!("    Iterations: {}", solution.iters);
    println!("    Tol: {:e}", solution.tol);
    println!();
}
