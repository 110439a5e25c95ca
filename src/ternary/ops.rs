//! The fixed catalog of named ternary operations.
//!
//! Every entry pairs a name with a [`Kernel`]: a pure function over trits
//! tagged with its arity. The table is static; nothing registers or removes
//! operations at runtime.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

use crate::algebra::AlgebraError;
use crate::ternary::Trit;

/// Number of inputs an operation takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arity {
    /// One input.
    Monadic,
    /// Two inputs.
    Dyadic,
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Monadic => write!(f, "monadic"),
            Arity::Dyadic => write!(f, "dyadic"),
        }
    }
}

/// A pure trit function together with its arity.
#[derive(Clone, Copy)]
pub enum Kernel {
    Monadic(fn(Trit) -> Trit),
    Dyadic(fn(Trit, Trit) -> Trit),
}

impl Kernel {
    pub const fn arity(self) -> Arity {
        match self {
            Kernel::Monadic(_) => Arity::Monadic,
            Kernel::Dyadic(_) => Arity::Dyadic,
        }
    }
}

impl fmt::Debug for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Kernel::{:?}", self.arity())
    }
}

/// A named operation from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Operation {
    // ==================== Monadic ====================
    Not,
    RotUp,
    RotDown,
    IsPlus,
    IsZero,
    IsMinus,

    // ==================== Dyadic ====================
    And,
    Or,
    Xor,
    Mul,
    Sum,
    Sub,
    Cons,
    Any,
}

impl Operation {
    /// The whole catalog, monadic entries first, in selector order.
    pub const ALL: [Operation; 14] = [
        Operation::Not,
        Operation::RotUp,
        Operation::RotDown,
        Operation::IsPlus,
        Operation::IsZero,
        Operation::IsMinus,
        Operation::And,
        Operation::Or,
        Operation::Xor,
        Operation::Mul,
        Operation::Sum,
        Operation::Sub,
        Operation::Cons,
        Operation::Any,
    ];

    /// Canonical catalog name.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Not => "NOT",
            Operation::RotUp => "ROT-UP",
            Operation::RotDown => "ROT-DOWN",
            Operation::IsPlus => "IS-PLUS",
            Operation::IsZero => "IS-ZERO",
            Operation::IsMinus => "IS-MINUS",
            Operation::And => "AND",
            Operation::Or => "OR",
            Operation::Xor => "XOR",
            Operation::Mul => "MUL",
            Operation::Sum => "SUM",
            Operation::Sub => "SUB",
            Operation::Cons => "CONS",
            Operation::Any => "ANY",
        }
    }

    /// One-line informational description.
    pub const fn description(self) -> &'static str {
        match self {
            Operation::Not => "Negation: switches + and -, leaves 0 unchanged",
            Operation::RotUp => "Rotate up: - → 0 → + → -",
            Operation::RotDown => "Rotate down: + → 0 → - → +",
            Operation::IsPlus => "Returns + if input is +, otherwise -",
            Operation::IsZero => "Returns + if input is 0, otherwise -",
            Operation::IsMinus => "Returns + if input is -, otherwise -",
            Operation::And => "Returns the minimum value",
            Operation::Or => "Returns the maximum value",
            Operation::Xor => "True if inputs differ",
            Operation::Mul => "Multiplication: copies/negates/zeros",
            Operation::Sum => "Addition mod 3 (balanced)",
            Operation::Sub => "Subtraction mod 3 (balanced)",
            Operation::Cons => "Consensus: returns value if both agree, else 0",
            Operation::Any => "Gullibility: accepts any non-0 input",
        }
    }

    /// The function implementing this operation.
    pub fn kernel(self) -> Kernel {
        match self {
            Operation::Not => Kernel::Monadic(Trit::not),
            Operation::RotUp => Kernel::Monadic(Trit::rot_up),
            Operation::RotDown => Kernel::Monadic(Trit::rot_down),
            Operation::IsPlus => Kernel::Monadic(|a| Trit::from_bool(a == Trit::Plus)),
            Operation::IsZero => Kernel::Monadic(|a| Trit::from_bool(a == Trit::Zero)),
            Operation::IsMinus => Kernel::Monadic(|a| Trit::from_bool(a == Trit::Minus)),
            Operation::And => Kernel::Dyadic(Trit::and),
            Operation::Or => Kernel::Dyadic(Trit::or),
            Operation::Xor => Kernel::Dyadic(Trit::xor),
            Operation::Mul => Kernel::Dyadic(Trit::mul),
            Operation::Sum => Kernel::Dyadic(Trit::sum),
            Operation::Sub => Kernel::Dyadic(Trit::sub),
            Operation::Cons => Kernel::Dyadic(Trit::cons),
            Operation::Any => Kernel::Dyadic(Trit::any),
        }
    }

    pub fn arity(self) -> Arity {
        self.kernel().arity()
    }

    pub fn is_monadic(self) -> bool {
        self.arity() == Arity::Monadic
    }

    /// Catalog entries of the given arity, in catalog order.
    pub fn with_arity(arity: Arity) -> impl Iterator<Item = Operation> {
        Operation::ALL.into_iter().filter(move |op| op.arity() == arity)
    }

    /// Apply to one input. Only defined for monadic operations.
    pub fn apply_monadic(self, a: Trit) -> Option<Trit> {
        match self.kernel() {
            Kernel::Monadic(f) => Some(f(a)),
            Kernel::Dyadic(_) => None,
        }
    }

    /// Apply to two inputs. A monadic operation ignores `b`.
    pub fn apply(self, a: Trit, b: Trit) -> Trit {
        match self.kernel() {
            Kernel::Monadic(f) => f(a),
            Kernel::Dyadic(f) => f(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Operation {
    type Err = AlgebraError;

    /// Case-insensitive lookup; `_` and spaces are accepted in place of `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase().replace(['_', ' '], "-");
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == wanted)
            .ok_or_else(|| AlgebraError::UnknownOperation(s.trim().to_string()))
    }
}

impl TryFrom<String> for Operation {
    type Error = AlgebraError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Operation> for String {
    fn from(op: Operation) -> Self {
        op.name().to_string()
    }
}
