//! Ternary logic primitives.
//!
//! This module provides the value set and the operation catalog:
//! - [`Trit`] - A single ternary logic value (-, 0, +)
//! - [`Operation`] - One of the fourteen named operations over trits
//! - [`Arity`] - Whether an operation takes one input or two

mod trit;
mod ops;

pub use trit::Trit;
pub use ops::{Arity, Kernel, Operation};
