use findroots_core::Observer;

use crate::traits::{HasEstimate, HasIter};

/// Records `(iter, estimate)` for every event a solver emits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<(usize, f64)>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded `(iter, estimate)` pairs in order.
    #[must_use]
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Returns the recorded estimates in order.
    pub fn estimates(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|&(_, x)| x)
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E: HasIter + HasEstimate, A> Observer<E, A> for History {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.entries.push((event.iter(), event.estimate()));
        None
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the entries can be read after the solve completes.
impl<E: HasIter + HasEstimate, A> Observer<E, A> for &mut History {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
