//! Truth tables and Karnaugh maps.
//!
//! Both are derived on demand by enumerating the inputs in canonical order
//! (`-`, `0`, `+`). Nothing is cached; a table costs at most nine
//! evaluations.

use std::fmt;
use serde::Serialize;

use crate::algebra::{catalog, AlgebraError, Result};
use crate::ternary::{Arity, Operation, Trit};

/// One line of a truth table. `b` is `None` for monadic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TruthRow {
    pub a: Trit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<Trit>,
    pub result: Trit,
}

/// Full enumeration of an operation: 3 rows (monadic) or 9 rows (dyadic,
/// `a` outer, `b` inner).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruthTable {
    pub operation: Operation,
    pub arity: Arity,
    pub rows: Vec<TruthRow>,
}

impl TruthTable {
    pub fn for_operation(op: Operation) -> Self {
        let rows = match op.arity() {
            Arity::Monadic => Trit::ALL
                .into_iter()
                .map(|a| TruthRow { a, b: None, result: op.apply(a, a) })
                .collect(),
            Arity::Dyadic => Trit::ALL
                .into_iter()
                .flat_map(|a| Trit::ALL.into_iter().map(move |b| (a, b)))
                .map(|(a, b)| TruthRow { a, b: Some(b), result: op.apply(a, b) })
                .collect(),
        };

        Self { operation: op, arity: op.arity(), rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TruthRow> {
        self.rows.iter()
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.arity {
            Arity::Monadic => writeln!(f, "A  Result")?,
            Arity::Dyadic => writeln!(f, "A  B  Result")?,
        }
        for row in &self.rows {
            match row.b {
                Some(b) => writeln!(f, "{}  {}  {}", row.a, b, row.result)?,
                None => writeln!(f, "{}  {}", row.a, row.result)?,
            }
        }
        Ok(())
    }
}

/// Karnaugh-style grid of an operation's results.
///
/// Monadic: one row, columns indexed by the input. Dyadic: rows indexed by
/// `a`, columns by `b`. Headers are always the canonical order.
///
/// Only [`KarnaughMap::for_operation`] builds one, so the grid always has
/// one row per header (or a single row when monadic).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KarnaughMap {
    operation: Operation,
    arity: Arity,
    rows: Vec<Trit>,
    columns: [Trit; 3],
    cells: Vec<[Trit; 3]>,
}

impl KarnaughMap {
    pub fn for_operation(op: Operation) -> Self {
        let (rows, cells) = match op.arity() {
            Arity::Monadic => (Vec::new(), vec![Trit::ALL.map(|a| op.apply(a, a))]),
            Arity::Dyadic => (
                Trit::ALL.to_vec(),
                Trit::ALL.iter().map(|&a| Trit::ALL.map(|b| op.apply(a, b))).collect(),
            ),
        };

        Self {
            operation: op,
            arity: op.arity(),
            rows,
            columns: Trit::ALL,
            cells,
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Row headers; empty for a monadic (1×3) map.
    pub fn rows(&self) -> &[Trit] {
        &self.rows
    }

    pub fn columns(&self) -> [Trit; 3] {
        self.columns
    }

    /// Result grid, row-major.
    pub fn cells(&self) -> &[[Trit; 3]] {
        &self.cells
    }

    /// Grid dimensions as (rows, columns).
    pub fn shape(&self) -> (usize, usize) {
        (self.cells.len(), self.columns.len())
    }

    /// Look up one cell with the same arity rules as evaluation.
    pub fn cell(&self, a: Trit, b: Option<Trit>) -> Result<Trit> {
        match (self.arity, b) {
            (Arity::Monadic, _) => Ok(self.cells[0][a.order() as usize]),
            (Arity::Dyadic, Some(b)) => Ok(self.cells[a.order() as usize][b.order() as usize]),
            (Arity::Dyadic, None) => Err(AlgebraError::ArityMismatch {
                operation: self.operation.name(),
            }),
        }
    }
}

impl fmt::Display for KarnaughMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.arity {
            Arity::Monadic => {
                for a in self.columns {
                    write!(f, " a={} ", a)?;
                }
                writeln!(f)?;
                for result in self.cells[0] {
                    write!(f, "  {}  ", result)?;
                }
                writeln!(f)
            }
            Arity::Dyadic => {
                write!(f, "     ")?;
                for b in self.columns {
                    write!(f, " b={} ", b)?;
                }
                writeln!(f)?;
                for (a, row) in self.rows.iter().zip(&self.cells) {
                    write!(f, " a={} ", a)?;
                    for result in row {
                        write!(f, "  {}  ", result)?;
                    }
                    writeln!(f)?;
                }
                Ok(())
            }
        }
    }
}

/// Truth table of the named operation.
pub fn truth_table(name: &str) -> Result<TruthTable> {
    let op = catalog::lookup(name)?;
    tracing::debug!(operation = op.name(), "deriving truth table");
    Ok(TruthTable::for_operation(op))
}

/// Karnaugh map of the named operation.
pub fn karnaugh_map(name: &str) -> Result<KarnaughMap> {
    let op = catalog::lookup(name)?;
    tracing::debug!(operation = op.name(), "deriving karnaugh map");
    Ok(KarnaughMap::for_operation(op))
}
