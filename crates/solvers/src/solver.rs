use findroots_core::{Observer, ScalarFunction};

use crate::{
    Action, Config, ConfigError, Error, Method, Solution, bisection, report::report, secant,
    steffensen,
};

/// A root solver bound to one target function.
///
/// The solver borrows the function and can be reused for any number of
/// solves. Every outcome is reported through `tracing`: converged results at
/// `INFO` when [`report_results`](Self::report_results) is set, iteration
/// exhaustion and degenerate steps at `WARN`, and errors at `ERROR`.
///
/// Use the free `solve` functions in [`bisection`], [`secant`], and
/// [`steffensen`] to compute without reporting.
#[derive(Debug)]
pub struct Solver<'f, F: ?Sized> {
    function: &'f F,
    config: Config,
    report_results: bool,
}

impl<'f, F> Solver<'f, F>
where
    F: ScalarFunction + ?Sized,
{
    /// Creates a solver for `function` using the default config.
    #[must_use]
    pub fn new(function: &'f F) -> Self {
        Self::with_config(function, Config::default())
    }

    /// Creates a solver for `function` using `config`.
    #[must_use]
    pub fn with_config(function: &'f F, config: Config) -> Self {
        Self {
            function,
            config,
            report_results: true,
        }
    }

    /// Returns the solver config.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns true if converged results are reported.
    #[must_use]
    pub fn report_results(&self) -> bool {
        self.report_results
    }

    /// Sets whether converged results are reported.
    pub fn set_report_results(&mut self, report_results: bool) {
        self.report_results = report_results;
    }

    /// Finds a root inside the bracket `[a, b]` using bisection.
    ///
    /// # Errors
    ///
    /// See [`bisection::solve`].
    pub fn bisection(&self, a: f64, b: f64) -> Result<Solution, Error> {
        self.bisection_observed(a, b, ())
    }

    /// Finds a root from two initial guesses using the secant method.
    ///
    /// # Errors
    ///
    /// See [`secant::solve`].
    pub fn secant(&self, p0: f64, p1: f64) -> Result<Solution, Error> {
        self.secant_observed(p0, p1, ())
    }

    /// Finds a fixed point near `p0` using Steffensen's method.
    ///
    /// # Errors
    ///
    /// See [`steffensen::solve`].
    pub fn steffensen(&self, p0: f64) -> Result<Solution, Error> {
        self.steffensen_observed(p0, ())
    }

    /// Runs [`bisection`](Self::bisection) with an observer.
    ///
    /// # Errors
    ///
    /// See [`bisection::solve`].
    pub fn bisection_observed<Obs>(&self, a: f64, b: f64, observer: Obs) -> Result<Solution, Error>
    where
        Obs: Observer<bisection::Event, Action>,
    {
        let outcome = bisection::solve(self.function, [a, b], &self.config, observer);
        report(Method::Bisection, &outcome, self.report_results);
        outcome
    }

    /// Runs [`secant`](Self::secant) with an observer.
    ///
    /// # Errors
    ///
    /// See [`secant::solve`].
    pub fn secant_observed<Obs>(&self, p0: f64, p1: f64, observer: Obs) -> Result<Solution, Error>
    where
        Obs: Observer<secant::Event, Action>,
    {
        let outcome = secant::solve(self.function, [p0, p1], &self.config, observer);
        report(Method::Secant, &outcome, self.report_results);
        outcome
    }

    /// Runs [`steffensen`](Self::steffensen) with an observer.
    ///
    /// # Errors
    ///
    /// See [`steffensen::solve`].
    pub fn steffensen_observed<Obs>(&self, p0: f64, observer: Obs) -> Result<Solution, Error>
    where
        Obs: Observer<steffensen::Event, Action>,
    {
        let outcome = steffensen::solve(self.function, p0, &self.config, observer);
        report(Method::Steffensen, &outcome, self.report_results);
        outcome
    }
}

/// Builds a solver from a function that may be absent.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFunction`] for `None`.
impl<'f, F> TryFrom<Option<&'f F>> for Solver<'f, F>
where
    F: ScalarFunction + ?Sized,
{
    type Error = ConfigError;

    fn try_from(function: Option<&'f F>) -> Result<Self, Self::Error> {
        function.map(Self::new).ok_or(ConfigError::MissingFunction)
    }
}
