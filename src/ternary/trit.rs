//! Single ternary logic value (trit).
//!
//! A trit holds one of three values, written `-`, `0` and `+`. The
//! discriminant doubles as the canonical ordering:
//! - `0` = Minus
//! - `1` = Zero
//! - `2` = Plus

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

use crate::algebra::AlgebraError;

/// A single ternary logic value.
///
/// Ordered `Minus < Zero < Plus`; the derived `Ord` agrees with [`Trit::order`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum Trit {
    /// Negative / false (-1)
    Minus = 0,
    /// Unknown / neutral (0)
    Zero = 1,
    /// Positive / true (+1)
    Plus = 2,
}

impl Trit {
    /// All trit values in canonical order: Minus, Zero, Plus.
    pub const ALL: [Trit; 3] = [Trit::Minus, Trit::Zero, Trit::Plus];

    /// Position in the canonical order (0, 1 or 2).
    #[inline]
    pub const fn order(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Trit::order`].
    pub fn from_order(order: u8) -> Result<Self, AlgebraError> {
        match order {
            0 => Ok(Trit::Minus),
            1 => Ok(Trit::Zero),
            2 => Ok(Trit::Plus),
            _ => Err(AlgebraError::InvalidTrit(format!("order {}", order))),
        }
    }

    /// Balanced value: -1, 0 or +1.
    #[inline]
    pub const fn signed_value(self) -> i8 {
        match self {
            Trit::Minus => -1,
            Trit::Zero => 0,
            Trit::Plus => 1,
        }
    }

    /// Inverse of [`Trit::signed_value`].
    pub fn from_signed(value: i8) -> Result<Self, AlgebraError> {
        match value {
            -1 => Ok(Trit::Minus),
            0 => Ok(Trit::Zero),
            1 => Ok(Trit::Plus),
            _ => Err(AlgebraError::InvalidTrit(format!("value {}", value))),
        }
    }

    /// `Plus` for true, `Minus` for false.
    #[inline]
    pub const fn from_bool(value: bool) -> Self {
        if value { Trit::Plus } else { Trit::Minus }
    }

    /// Fold an integer back into a trit with balanced mod-3 reduction.
    ///
    /// The residue table is `0 → Zero`, `1 → Plus`, `2 → Minus`.
    #[inline]
    pub const fn reduce(value: i8) -> Self {
        match ((value % 3) + 3) % 3 {
            0 => Trit::Zero,
            1 => Trit::Plus,
            _ => Trit::Minus,
        }
    }

    /// Display symbol.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Trit::Minus => '-',
            Trit::Zero => '0',
            Trit::Plus => '+',
        }
    }

    /// Negation (NOT): swap Minus and Plus, Zero stays.
    #[inline]
    pub const fn not(self) -> Self {
        match self {
            Trit::Minus => Trit::Plus,
            Trit::Zero => Trit::Zero,
            Trit::Plus => Trit::Minus,
        }
    }

    /// Cyclic successor: - → 0 → + → -.
    #[inline]
    pub const fn rot_up(self) -> Self {
        match self {
            Trit::Minus => Trit::Zero,
            Trit::Zero => Trit::Plus,
            Trit::Plus => Trit::Minus,
        }
    }

    /// Cyclic predecessor: + → 0 → - → +.
    #[inline]
    pub const fn rot_down(self) -> Self {
        match self {
            Trit::Minus => Trit::Plus,
            Trit::Zero => Trit::Minus,
            Trit::Plus => Trit::Zero,
        }
    }

    /// Ternary AND: the value with the lower order.
    #[inline]
    pub const fn and(self, other: Self) -> Self {
        if self.order() <= other.order() { self } else { other }
    }

    /// Ternary OR: the value with the higher order.
    #[inline]
    pub const fn or(self, other: Self) -> Self {
        if self.order() >= other.order() { self } else { other }
    }

    /// `(NOT a AND b) OR (a AND NOT b)`.
    #[inline]
    pub const fn xor(self, other: Self) -> Self {
        let left = self.not().and(other);
        let right = self.and(other.not());
        left.or(right)
    }

    /// Single-trit multiplication.
    #[inline]
    pub const fn mul(self, other: Self) -> Self {
        match (self, other) {
            (Trit::Zero, _) | (_, Trit::Zero) => Trit::Zero,
            (Trit::Plus, Trit::Plus) | (Trit::Minus, Trit::Minus) => Trit::Plus,
            (Trit::Plus, Trit::Minus) | (Trit::Minus, Trit::Plus) => Trit::Minus,
        }
    }

    /// Balanced mod-3 addition.
    #[inline]
    pub const fn sum(self, other: Self) -> Self {
        Trit::reduce(self.signed_value() + other.signed_value())
    }

    /// Balanced mod-3 subtraction.
    #[inline]
    pub const fn sub(self, other: Self) -> Self {
        Trit::reduce(self.signed_value() - other.signed_value())
    }

    /// Consensus: the value if both inputs agree, else Zero.
    #[inline]
    pub const fn cons(self, other: Self) -> Self {
        match (self, other) {
            (Trit::Plus, Trit::Plus) => Trit::Plus,
            (Trit::Minus, Trit::Minus) => Trit::Minus,
            _ => Trit::Zero,
        }
    }

    /// Gullibility: takes whichever input is non-zero, Zero on conflict.
    #[inline]
    pub const fn any(self, other: Self) -> Self {
        match (self, other) {
            (Trit::Zero, b) => b,
            (a, Trit::Zero) => a,
            (Trit::Plus, Trit::Plus) => Trit::Plus,
            (Trit::Minus, Trit::Minus) => Trit::Minus,
            _ => Trit::Zero,
        }
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::ops::Not for Trit {
    type Output = Self;

    fn not(self) -> Self::Output {
        Trit::not(self)
    }
}

impl TryFrom<char> for Trit {
    type Error = AlgebraError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '-' | 'N' | 'n' => Ok(Trit::Minus),
            '0' | 'O' | 'o' => Ok(Trit::Zero),
            '+' | 'P' | 'p' => Ok(Trit::Plus),
            _ => Err(AlgebraError::InvalidTrit(c.to_string())),
        }
    }
}

impl FromStr for Trit {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Trit::try_from(c);
        }
        match s.to_ascii_lowercase().as_str() {
            "minus" => Ok(Trit::Minus),
            "zero" => Ok(Trit::Zero),
            "plus" => Ok(Trit::Plus),
            _ => Err(AlgebraError::InvalidTrit(s.to_string())),
        }
    }
}

impl TryFrom<String> for Trit {
    type Error = AlgebraError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Trit> for String {
    fn from(trit: Trit) -> Self {
        trit.symbol().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        assert_eq!(Trit::ALL, [Trit::Minus, Trit::Zero, Trit::Plus]);
        for (i, t) in Trit::ALL.iter().enumerate() {
            assert_eq!(t.order() as usize, i);
            assert_eq!(Trit::from_order(i as u8).unwrap(), *t);
        }
        assert!(Trit::Minus < Trit::Zero && Trit::Zero < Trit::Plus);
    }

    #[test]
    fn test_signed_values() {
        assert_eq!(Trit::Minus.signed_value(), -1);
        assert_eq!(Trit::Zero.signed_value(), 0);
        assert_eq!(Trit::Plus.signed_value(), 1);
        assert!(Trit::from_signed(2).is_err());
        assert!(Trit::from_order(3).is_err());
    }

    #[test]
    fn test_reduction_table() {
        assert_eq!(Trit::reduce(-2), Trit::Plus);
        assert_eq!(Trit::reduce(-1), Trit::Minus);
        assert_eq!(Trit::reduce(0), Trit::Zero);
        assert_eq!(Trit::reduce(1), Trit::Plus);
        assert_eq!(Trit::reduce(2), Trit::Minus);
    }

    #[test]
    fn test_not_involution() {
        for t in Trit::ALL {
            assert_eq!(t.not().not(), t, "NOT(NOT({:?})) should equal {:?}", t, t);
            assert_eq!(!t, t.not());
        }
    }

    #[test]
    fn test_rotations_are_inverse() {
        for t in Trit::ALL {
            assert_eq!(t.rot_up().rot_down(), t);
            assert_eq!(t.rot_down().rot_up(), t);
        }
        assert_eq!(Trit::Plus.rot_up(), Trit::Minus);
        assert_eq!(Trit::Zero.rot_down(), Trit::Minus);
    }

    #[test]
    fn test_multiplication_table() {
        assert_eq!(Trit::Minus.mul(Trit::Minus), Trit::Plus);
        assert_eq!(Trit::Minus.mul(Trit::Zero), Trit::Zero);
        assert_eq!(Trit::Minus.mul(Trit::Plus), Trit::Minus);

        for t in Trit::ALL {
            assert_eq!(Trit::Zero.mul(t), Trit::Zero);
        }

        assert_eq!(Trit::Plus.mul(Trit::Minus), Trit::Minus);
        assert_eq!(Trit::Plus.mul(Trit::Plus), Trit::Plus);
    }

    #[test]
    fn test_any() {
        assert_eq!(Trit::Zero.any(Trit::Zero), Trit::Zero);
        assert_eq!(Trit::Plus.any(Trit::Zero), Trit::Plus);
        assert_eq!(Trit::Zero.any(Trit::Minus), Trit::Minus);
        assert_eq!(Trit::Minus.any(Trit::Plus), Trit::Zero);
        assert_eq!(Trit::Minus.any(Trit::Minus), Trit::Minus);
    }

    #[test]
    fn test_parse_symbols() {
        assert_eq!("-".parse::<Trit>().unwrap(), Trit::Minus);
        assert_eq!(" 0 ".parse::<Trit>().unwrap(), Trit::Zero);
        assert_eq!("+".parse::<Trit>().unwrap(), Trit::Plus);
        assert_eq!("n".parse::<Trit>().unwrap(), Trit::Minus);
        assert_eq!("P".parse::<Trit>().unwrap(), Trit::Plus);
        assert_eq!("Zero".parse::<Trit>().unwrap(), Trit::Zero);
        assert!(matches!("x".parse::<Trit>(), Err(AlgebraError::InvalidTrit(_))));
        assert!("".parse::<Trit>().is_err());
        assert!("+-".parse::<Trit>().is_err());
    }

    #[test]
    fn test_debug_names() {
        let names: Vec<_> = Trit::ALL.iter().map(|t| format!("{:?}", t)).collect();
        assert_eq!(names, ["Minus", "Zero", "Plus"]);
    }

    #[test]
    fn test_display_roundtrip() {
        for t in Trit::ALL {
            assert_eq!(t.to_string().parse::<Trit>().unwrap(), t);
        }
    }

    #[test]
    fn test_serde_as_symbol() {
        assert_eq!(serde_json::to_string(&Trit::Plus).unwrap(), "\"+\"");
        let t: Trit = serde_json::from_str("\"-\"").unwrap();
        assert_eq!(t, Trit::Minus);
        assert!(serde_json::from_str::<Trit>("\"?\"").is_err());
    }
}
