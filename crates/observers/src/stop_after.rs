use findroots_core::Observer;

use crate::traits::{CanStopEarly, HasIter};

/// Stops a solver once it reaches a given iteration.
///
/// Unlike the config's iteration limit, the resulting solution is marked
/// as stopped by an observer, so callers can tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAfter {
    iters: usize,
}

impl StopAfter {
    /// Creates an observer that stops at iteration `iters`.
    #[must_use]
    pub fn new(iters: usize) -> Self {
        Self { iters }
    }
}

impl<E: HasIter, A: CanStopEarly> Observer<E, A> for StopAfter {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.iter() >= self.iters).then(A::stop_early)
    }
}
