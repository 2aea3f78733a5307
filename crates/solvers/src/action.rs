/// Control actions an observer can request from any of the solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the latest estimate.
    StopEarly,
}
