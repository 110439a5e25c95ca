//! Bracketed textual notation for operation grids.

use crate::algebra::{catalog, AlgebraError, Result};
use crate::ternary::{Arity, Operation, Trit};

/// Row-major 3×3 matrix of a dyadic operation, e.g. `SUM` gives
/// `[+ - 0, - 0 +, 0 + -]`.
pub fn matrix_notation(name: &str) -> Result<String> {
    let op = catalog::lookup(name)?;
    if op.arity() != Arity::Dyadic {
        return Err(AlgebraError::NotDyadic(op.name()));
    }
    Ok(format!("[{}]", matrix_rows(op).join(", ")))
}

/// Results of a monadic operation over `-`, `0`, `+`, e.g. `NOT` gives `[+ 0 -]`.
pub fn vector_notation(name: &str) -> Result<String> {
    let op = catalog::lookup(name)?;
    if op.arity() != Arity::Monadic {
        return Err(AlgebraError::NotMonadic(op.name()));
    }
    Ok(format!("[{}]", join_trits(Trit::ALL.map(|a| op.apply(a, a)))))
}

fn matrix_rows(op: Operation) -> Vec<String> {
    Trit::ALL
        .into_iter()
        .map(|a| join_trits(Trit::ALL.map(|b| op.apply(a, b))))
        .collect()
}

fn join_trits(trits: [Trit; 3]) -> String {
    trits.map(|t| t.to_string()).join(" ")
}
