//! # Ternary Logic Engine
//!
//! Three-valued logic over the trits `-`, `0` and `+`.
//!
//! The crate provides the closed trit algebra, the fourteen named
//! operations of the ternary calculator (six monadic, eight dyadic), and the
//! artifacts a front end renders from them: truth tables, Karnaugh maps and
//! matrix notation.

pub mod ternary;
pub mod algebra;
pub mod logger;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use ternary::{Arity, Operation, Trit};
pub use algebra::{
    AlgebraError, KarnaughMap, TruthTable,
    describe, description, evaluate, karnaugh_map, matrix_notation,
    operation_names, truth_table, vector_notation,
};
