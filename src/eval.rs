//! Arithmetic evaluation of a single operation.

use crate::error::{CalcError, CalcResult};

/// Apply `operator` to the operands. `value2` is ignored by unary operators.
pub fn evaluate(operator: &str, value1: f64, value2: f64) -> CalcResult<f64> {
    match operator {
        "add" => Ok(value1 + value2),
        "sub" => Ok(value1 - value2),
        "mul" => Ok(value1 * value2),
        "sqrt" => {
            if value1 < 0.0 {
                return Err(CalcError::invalid(format!(
                    "Cannot compute square root of negative number: {}",
                    value1
                )));
            }
            Ok(value1.sqrt())
        }
        other => Err(CalcError::invalid(format!(
            "Unsupported operation type: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn binary_operators() {
        let cases = [
            (2.0, 3.0),
            (-1.5, 4.25),
            (0.1, 0.2),
            (-7.0, -8.0),
            (1e300, 1e10),
        ];
        for (a, b) in cases {
            assert_eq!(evaluate("add", a, b).unwrap(), a + b);
            assert_eq!(evaluate("sub", a, b).unwrap(), a - b);
            assert_eq!(evaluate("mul", a, b).unwrap(), a * b);
        }
    }

    #[test]
    fn sqrt_is_principal_root() {
        assert_eq!(evaluate("sqrt", 16.0, 0.0).unwrap(), 4.0);
        assert_eq!(evaluate("sqrt", 0.0, 0.0).unwrap(), 0.0);
        assert!((evaluate("sqrt", 2.0, 0.0).unwrap() - std::f64::consts::SQRT_2).abs() < 1e-12);
        // value2 has no effect
        assert_eq!(evaluate("sqrt", 9.0, -100.0).unwrap(), 3.0);
    }

    #[test]
    fn sqrt_of_negative_reports_the_value() {
        let err = evaluate("sqrt", -4.0, 0.0).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput(_)));
        assert_eq!(
            err.to_string(),
            "Cannot compute square root of negative number: -4"
        );

        let err = evaluate("sqrt", -0.25, 0.0).unwrap_err();
        assert!(err.to_string().contains("-0.25"));
    }

    #[test]
    fn negative_operands_are_fine_elsewhere() {
        assert_eq!(evaluate("mul", -3.0, -3.0).unwrap(), 9.0);
        assert_eq!(evaluate("sub", -3.0, 3.0).unwrap(), -6.0);
    }

    #[test]
    fn unknown_operator_is_named() {
        let err = evaluate("div", 1.0, 2.0).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput(_)));
        assert_eq!(err.to_string(), "Unsupported operation type: div");

        // Matching is exact.
        assert!(evaluate("ADD", 1.0, 2.0).is_err());
    }
}
