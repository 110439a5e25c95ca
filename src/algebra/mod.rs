//! The ternary logic engine.
//!
//! Name-driven entry points for front ends:
//! - [`describe`], [`description`], [`operation_names`] - catalog queries
//! - [`evaluate`] - apply an operation to one or two trits
//! - [`truth_table`], [`karnaugh_map`] - derived enumerations
//! - [`matrix_notation`], [`vector_notation`] - bracketed text forms
//!
//! Every function is pure; the catalog is a constant table.

mod error;
pub mod catalog;
pub mod tables;
pub mod notation;

pub use error::{AlgebraError, Result};
pub use catalog::{describe, description, evaluate, lookup, operation_names};
pub use tables::{karnaugh_map, truth_table, KarnaughMap, TruthRow, TruthTable};
pub use notation::{matrix_notation, vector_notation};
