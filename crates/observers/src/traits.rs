//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasIter`] — events that carry an iteration counter
//! - [`HasEstimate`] — events that carry the solver's latest estimate
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use findroots_core::Observer;
//! use findroots_observers::traits::{CanStopEarly, HasEstimate};
//!
//! struct StopInside {
//!     lower: f64,
//!     upper: f64,
//! }
//!
//! impl<E: HasEstimate, A: CanStopEarly> Observer<E, A> for StopInside {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let x = event.estimate();
//!         (self.lower..=self.upper).contains(&x).then(A::stop_early)
//!     }
//! }
//! ```

use findroots_solvers::{Action, bisection, secant, steffensen};

/// An event that carries a 1-based iteration counter.
pub trait HasIter {
    /// Returns the iteration that produced this event.
    fn iter(&self) -> usize;
}

/// An event that carries the solver's latest estimate.
pub trait HasEstimate {
    /// Returns the estimate produced during this iteration.
    fn estimate(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasIter impls ---

impl HasIter for bisection::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasIter for secant::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasIter for steffensen::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

// --- HasEstimate impls ---

impl HasEstimate for bisection::Event {
    fn estimate(&self) -> f64 {
        self.midpoint.x
    }
}

impl HasEstimate for secant::Event {
    fn estimate(&self) -> f64 {
        self.estimate
    }
}

/// Steffensen's estimate is the second image `g(g(x))`, the plain
/// fixed-point iterate that Aitken's step then refines.
impl HasEstimate for steffensen::Event {
    fn estimate(&self) -> f64 {
        self.ggx
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
