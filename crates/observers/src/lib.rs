//! Reusable observers for the findroots solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the bisection, secant, and Steffensen solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIter`], [`HasEstimate`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`History`] — records every iterate
//! - [`Logger`] — emits a `tracing` event per iteration
//! - [`StopAfter`] — stops a solver after a fixed number of iterations
//!
//! [`Observer`]: findroots_core::Observer
//! [`HasIter`]: traits::HasIter
//! [`HasEstimate`]: traits::HasEstimate
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod logger;
mod stop_after;

pub use history::History;
pub use logger::Logger;
pub use stop_after::StopAfter;
