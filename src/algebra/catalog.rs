//! Name-based access to the operation catalog.
//!
//! Front ends deal in operation names (from a selector, a command line or
//! JavaScript); these functions resolve a name and forward to the
//! [`Operation`] table.

use crate::algebra::{AlgebraError, Result};
use crate::ternary::{Arity, Kernel, Operation, Trit};

/// Resolve an operation name.
pub fn lookup(name: &str) -> Result<Operation> {
    name.parse()
}

/// Classify an operation as monadic or dyadic.
pub fn describe(name: &str) -> Result<Arity> {
    Ok(lookup(name)?.arity())
}

/// One-line informational description of an operation.
pub fn description(name: &str) -> Result<&'static str> {
    Ok(lookup(name)?.description())
}

/// Operation names of the given arity, in catalog order.
pub fn operation_names(arity: Arity) -> Vec<&'static str> {
    Operation::with_arity(arity).map(Operation::name).collect()
}

/// Apply the named operation.
///
/// A dyadic operation without `b` fails with [`AlgebraError::ArityMismatch`].
/// A monadic operation ignores `b`.
pub fn evaluate(name: &str, a: Trit, b: Option<Trit>) -> Result<Trit> {
    let op = lookup(name)?;
    apply(op, a, b)
}

/// [`evaluate`] for an already resolved operation.
pub fn apply(op: Operation, a: Trit, b: Option<Trit>) -> Result<Trit> {
    let result = match (op.kernel(), b) {
        (Kernel::Monadic(f), None) => f(a),
        (Kernel::Monadic(f), Some(ignored)) => {
            tracing::warn!(operation = op.name(), input = %ignored, "monadic operation ignores second input");
            f(a)
        }
        (Kernel::Dyadic(f), Some(b)) => f(a, b),
        (Kernel::Dyadic(_), None) => {
            return Err(AlgebraError::ArityMismatch { operation: op.name() });
        }
    };

    tracing::debug!(operation = op.name(), a = %a, b = ?b, result = %result, "evaluated");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Trit::{Minus, Plus, Zero};

    fn eval2(name: &str, a: Trit, b: Trit) -> Trit {
        evaluate(name, a, Some(b)).unwrap()
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe("NOT").unwrap(), Arity::Monadic);
        assert_eq!(describe("ROT-DOWN").unwrap(), Arity::Monadic);
        assert_eq!(describe("XOR").unwrap(), Arity::Dyadic);
        assert_eq!(
            describe("IMPLIES"),
            Err(AlgebraError::UnknownOperation("IMPLIES".into()))
        );
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(
            operation_names(Arity::Monadic),
            ["NOT", "ROT-UP", "ROT-DOWN", "IS-PLUS", "IS-ZERO", "IS-MINUS"]
        );
        assert_eq!(
            operation_names(Arity::Dyadic),
            ["AND", "OR", "XOR", "MUL", "SUM", "SUB", "CONS", "ANY"]
        );
    }

    #[test]
    fn test_description() {
        let expected = [
            ("NOT", "Negation: switches + and -, leaves 0 unchanged"),
            ("ROT-UP", "Rotate up: - → 0 → + → -"),
            ("ROT-DOWN", "Rotate down: + → 0 → - → +"),
            ("IS-PLUS", "Returns + if input is +, otherwise -"),
            ("IS-ZERO", "Returns + if input is 0, otherwise -"),
            ("IS-MINUS", "Returns + if input is -, otherwise -"),
            ("AND", "Returns the minimum value"),
            ("OR", "Returns the maximum value"),
            ("XOR", "True if inputs differ"),
            ("MUL", "Multiplication: copies/negates/zeros"),
            ("SUM", "Addition mod 3 (balanced)"),
            ("SUB", "Subtraction mod 3 (balanced)"),
            ("CONS", "Consensus: returns value if both agree, else 0"),
            ("ANY", "Gullibility: accepts any non-0 input"),
        ];
        assert_eq!(expected.len(), Operation::ALL.len());
        for (name, text) in expected {
            assert_eq!(description(name).unwrap(), text, "{}", name);
        }
        assert!(description("nope").is_err());
    }

    #[test]
    fn test_unknown_operation() {
        assert!(matches!(
            evaluate("FOO", Plus, Some(Plus)),
            Err(AlgebraError::UnknownOperation(_))
        ));
    }

    #[test]
    fn test_dyadic_needs_second_input() {
        for name in operation_names(Arity::Dyadic) {
            assert_eq!(
                evaluate(name, Zero, None),
                Err(AlgebraError::ArityMismatch { operation: name })
            );
        }
    }

    #[test]
    fn test_monadic_ignores_second_input() {
        for b in Trit::ALL {
            assert_eq!(evaluate("ROT-UP", Plus, Some(b)).unwrap(), Minus);
        }
        assert_eq!(evaluate("ROT-UP", Plus, None).unwrap(), Minus);
    }

    #[test]
    fn test_closure() {
        for op in Operation::ALL {
            for a in Trit::ALL {
                for b in Trit::ALL {
                    let r = apply(op, a, Some(b)).unwrap();
                    assert!(Trit::ALL.contains(&r));
                }
            }
        }
    }

    #[test]
    fn test_and_or_follow_order() {
        for a in Trit::ALL {
            for b in Trit::ALL {
                let and = eval2("AND", a, b);
                let or = eval2("OR", a, b);
                assert_eq!(and.order(), a.order().min(b.order()));
                assert_eq!(or.order(), a.order().max(b.order()));
                assert_eq!(and, eval2("AND", b, a));
                assert_eq!(or, eval2("OR", b, a));
            }
            assert_eq!(eval2("AND", a, a), a);
            assert_eq!(eval2("OR", a, a), a);
        }
    }

    #[test]
    fn test_xor_matches_composition() {
        for a in Trit::ALL {
            for b in Trit::ALL {
                let not = |t| evaluate("NOT", t, None).unwrap();
                let expected = eval2("OR", eval2("AND", not(a), b), eval2("AND", a, not(b)));
                assert_eq!(eval2("XOR", a, b), expected, "XOR({}, {})", a, b);
            }
        }
    }

    #[test]
    fn test_sum() {
        for a in Trit::ALL {
            for b in Trit::ALL {
                assert_eq!(eval2("SUM", a, b), eval2("SUM", b, a));
            }
            assert_eq!(eval2("SUM", Zero, a), a);
        }
        assert_eq!(eval2("SUM", Plus, Plus), Minus);
        assert_eq!(eval2("SUM", Minus, Minus), Plus);
        assert_eq!(eval2("SUM", Minus, Plus), Zero);
    }

    #[test]
    fn test_sub() {
        // -1 - 1 = -2 folds to +, 1 - -1 = 2 folds to -
        assert_eq!(eval2("SUB", Minus, Plus), Plus);
        assert_eq!(eval2("SUB", Plus, Minus), Minus);
        assert_eq!(eval2("SUB", Zero, Plus), Minus);
        assert_eq!(eval2("SUB", Zero, Minus), Plus);
        assert_eq!(eval2("SUB", Plus, Zero), Plus);
        for a in Trit::ALL {
            assert_eq!(eval2("SUB", a, a), Zero);
        }
    }

    #[test]
    fn test_cons() {
        for a in Trit::ALL {
            for b in Trit::ALL {
                let expected = if a == b { a } else { Zero };
                assert_eq!(eval2("CONS", a, b), expected);
            }
        }
    }

    #[test]
    fn test_any() {
        assert_eq!(eval2("ANY", Zero, Zero), Zero);
        assert_eq!(eval2("ANY", Plus, Zero), Plus);
        assert_eq!(eval2("ANY", Zero, Minus), Minus);
        assert_eq!(eval2("ANY", Minus, Plus), Zero);
        assert_eq!(eval2("ANY", Plus, Minus), Zero);
    }

    #[test]
    fn test_mul() {
        for x in Trit::ALL {
            assert_eq!(eval2("MUL", Zero, x), Zero);
            assert_eq!(eval2("MUL", x, Zero), Zero);
        }
        assert_eq!(eval2("MUL", Plus, Plus), Plus);
        assert_eq!(eval2("MUL", Minus, Plus), Minus);
        assert_eq!(eval2("MUL", Minus, Minus), Plus);
    }

    mod laws {
        use super::*;
        use proptest::prelude::*;

        fn trit() -> impl Strategy<Value = Trit> {
            prop::sample::select(Trit::ALL.to_vec())
        }

        proptest! {
            #[test]
            fn and_or_are_associative(a in trit(), b in trit(), c in trit()) {
                prop_assert_eq!(eval2("AND", eval2("AND", a, b), c), eval2("AND", a, eval2("AND", b, c)));
                prop_assert_eq!(eval2("OR", eval2("OR", a, b), c), eval2("OR", a, eval2("OR", b, c)));
            }

            #[test]
            fn rotations_cancel(a in trit()) {
                let up = evaluate("ROT-UP", a, None).unwrap();
                prop_assert_eq!(evaluate("ROT-DOWN", up, None).unwrap(), a);
            }

            #[test]
            fn not_is_involution(a in trit()) {
                let once = evaluate("NOT", a, None).unwrap();
                prop_assert_eq!(evaluate("NOT", once, None).unwrap(), a);
            }

            #[test]
            fn sum_matches_balanced_reduction(a in trit(), b in trit()) {
                let v = a.signed_value() + b.signed_value();
                let expected = match ((v % 3) + 3) % 3 {
                    0 => Zero,
                    1 => Plus,
                    _ => Minus,
                };
                prop_assert_eq!(eval2("SUM", a, b), expected);
            }
        }
    }
}
