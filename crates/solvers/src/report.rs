use tracing::{Level, debug, error, info, warn};

use crate::{Error, Method, Solution, Status};

/// Returns the level at which a solve outcome is reported, if at all.
///
/// Successful results are only reported when `report_results` is set;
/// failures are always reported.
pub(crate) fn level(outcome: &Result<Solution, Error>, report_results: bool) -> Option<Level> {
    match outcome {
        Ok(solution) => match solution.status {
            Status::Converged => report_results.then_some(Level::INFO),
            Status::MaxIters | Status::Degenerate => Some(Level::WARN),
            Status::StoppedByObserver => Some(Level::DEBUG),
        },
        Err(_) => Some(Level::ERROR),
    }
}

/// Returns the human-readable message for a solve outcome.
fn message(outcome: &Result<Solution, Error>) -> String {
    match outcome {
        Ok(solution) => match solution.status {
            Status::Converged => "solution found".to_string(),
            Status::MaxIters => format!(
                "did not converge after {} iterations; consider changing the bounds or initial guesses",
                solution.iters
            ),
            Status::Degenerate => {
                "divide-by-zero likely; consider using a different method".to_string()
            }
            Status::StoppedByObserver => "stopped by observer".to_string(),
        },
        Err(err) => format!("solve failed: {err}"),
    }
}

/// Emits a `tracing` event describing the outcome of a solve.
///
/// The event level comes from [`level`]. Solutions attach their value,
/// iteration count, and tolerance as fields.
pub(crate) fn report(method: Method, outcome: &Result<Solution, Error>, report_results: bool) {
    let Some(level) = level(outcome, report_results) else {
        return;
    };

    let message = message(outcome);
    let solution = outcome.as_ref().ok();
    let x = solution.map(|solution| solution.x);
    let iters = solution.map(|solution| solution.iters);
    let tol = solution.map(|solution| solution.tol);

    if level == Level::ERROR {
        error!(%method, "{message}");
    } else if level == Level::WARN {
        warn!(%method, x, iters, tol, "{message}");
    } else if level == Level::INFO {
        info!(%method, x, iters, tol, "{message}");
    } else {
        debug!(%method, x, iters, tol, "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{
        io,
        sync::{Arc, Mutex, PoisonError},
    };

    use tracing_subscriber::fmt::MakeWriter;

    use crate::bisection::BracketError;

    /// Shared buffer that collects formatted `tracing` output.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Runs `report` under a capturing subscriber and returns what it printed.
    fn captured(
        method: Method,
        outcome: &Result<Solution, Error>,
        report_results: bool,
    ) -> String {
        let output = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(output.clone())
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            report(method, outcome, report_results);
        });

        let bytes = output.0.lock().unwrap_or_else(PoisonError::into_inner).clone();
        String::from_utf8(bytes).expect("utf-8 log output")
    }

    fn solution(status: Status) -> Result<Solution, Error> {
        Ok(Solution::new(status, 1.0, 3, 1e-9))
    }

    #[test]
    fn converged_respects_flag() {
        assert_eq!(level(&solution(Status::Converged), true), Some(Level::INFO));
        assert_eq!(level(&solution(Status::Converged), false), None);
    }

    #[test]
    fn failures_ignore_flag() {
        for report_results in [true, false] {
            assert_eq!(
                level(&solution(Status::MaxIters), report_results),
                Some(Level::WARN)
            );
            assert_eq!(
                level(&solution(Status::Degenerate), report_results),
                Some(Level::WARN)
            );
            assert_eq!(
                level(&Err(Error::InvalidBracket(BracketError::ZeroWidth)), report_results),
                Some(Level::ERROR)
            );
        }
    }

    #[test]
    fn observer_stops_are_debug() {
        assert_eq!(
            level(&solution(Status::StoppedByObserver), false),
            Some(Level::DEBUG)
        );
    }

    #[test]
    fn converged_event_carries_solution_fields() {
        let output = captured(Method::Bisection, &solution(Status::Converged), true);

        assert!(output.contains("INFO"));
        assert!(output.contains("solution found"));
        assert!(output.contains("method=bisection"));
        assert!(output.contains("x=1.0"));
        assert!(output.contains("iters=3"));
        assert!(output.contains("tol=1e-9"));
    }

    #[test]
    fn quiet_solver_emits_nothing_on_success() {
        let output = captured(Method::Secant, &solution(Status::Converged), false);

        assert!(output.is_empty());
    }

    #[test]
    fn max_iters_warning_names_iteration_count() {
        let output = captured(Method::Secant, &solution(Status::MaxIters), false);

        assert!(output.contains("WARN"));
        assert!(output.contains("did not converge after 3 iterations"));
        assert!(output.contains("method=secant"));
    }

    #[test]
    fn degenerate_warning_is_distinct() {
        let output = captured(Method::Steffensen, &solution(Status::Degenerate), false);

        assert!(output.contains("WARN"));
        assert!(output.contains("divide-by-zero likely"));
        assert!(!output.contains("did not converge"));
        assert!(output.contains("method=steffensen"));
    }

    #[test]
    fn errors_are_reported_with_display_text() {
        let outcome = Err(Error::InvalidBracket(BracketError::ZeroWidth));

        let output = captured(Method::Bisection, &outcome, false);

        assert!(output.contains("ERROR"));
        assert!(output.contains("solve failed"));
        assert!(output.contains("zero width"));
        assert!(!output.contains("iters="));
    }

    #[test]
    fn observer_stops_are_logged_at_debug() {
        let output = captured(Method::Bisection, &solution(Status::StoppedByObserver), true);

        assert!(output.contains("DEBUG"));
        assert!(output.contains("stopped by observer"));
    }
}
