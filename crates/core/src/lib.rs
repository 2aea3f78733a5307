//! Core traits and types for scalar root finding.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`ScalarFunction`] — a real-valued function of one real variable
//! - [`Point`] — an `x` value paired with the function value there
//! - [`Observer`] — receives solver events and optionally returns control actions

mod function;
mod observer;
mod point;

pub use function::ScalarFunction;
pub use observer::Observer;
pub use point::Point;
