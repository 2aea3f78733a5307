use std::fmt;

/// The root-finding methods offered by [`Solver`](crate::Solver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Bisection,
    Secant,
    Steffensen,
}

impl Method {
    /// Returns the method name used in reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bisection => "bisection",
            Self::Secant => "secant",
            Self::Steffensen => "steffensen",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
