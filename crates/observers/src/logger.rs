use findroots_core::Observer;
use tracing::debug;

use findroots_solvers::Method;

use crate::traits::{HasEstimate, HasIter};

/// Emits a `DEBUG` event for every solver iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    method: Method,
}

impl Logger {
    /// Creates a logger that tags its events with `method`.
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self { method }
    }
}

impl<E: HasIter + HasEstimate, A> Observer<E, A> for Logger {
    fn observe(&mut self, event: &E) -> Option<A> {
        debug!(
            method = %self.method,
            iter = event.iter(),
            x = event.estimate(),
            "iteration"
        );
        None
    }
}
